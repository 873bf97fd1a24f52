pub mod build_method;
pub mod doc_files;
pub mod package_identity;

pub use build_method::BuildMethod;
pub use doc_files::{classify_docs, classify_patches, ClassifierConfig};
pub use package_identity::{IdentityError, PackageIdentity};
