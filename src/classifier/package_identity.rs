use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// Downstream templating needs a non-empty version, so a name that
    /// carries none is a hard error rather than a guess.
    #[error("source directory name '{0}' has no '-' separator, cannot extract a version")]
    MalformedIdentity(String),
}

/// Package base name and version, derived from a `<basename>-<version>`
/// source directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    pub basename: String,
    pub version: String,
}

impl PackageIdentity {
    /// Splits a directory name into base name and version.
    ///
    /// The last `-`-separated segment is the version; everything before it
    /// rejoins with `-` to form the base name (`kde-baseapps-4.14.3` gives
    /// `kde-baseapps` / `4.14.3`). The version format is not validated.
    pub fn parse(dirname: &str) -> Result<Self, IdentityError> {
        let parts: Vec<&str> = dirname.split('-').collect();
        if parts.len() < 2 {
            return Err(IdentityError::MalformedIdentity(dirname.to_string()));
        }

        let (base, version) = parts.split_at(parts.len() - 1);
        Ok(PackageIdentity {
            basename: base.join("-"),
            version: version[0].to_string(),
        })
    }
}
