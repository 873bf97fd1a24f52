pub mod templates;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::classifier::{BuildMethod, PackageIdentity};

/// Assembles a PlamoBuild script from the classification results.
pub struct ScriptGenerator {
    identity: PackageIdentity,
    method: BuildMethod,
    src_dir: String,
    url: String,
    prefix: String,
    in_tree: bool,
    docs: Vec<String>,
    patches: Vec<String>,
}

impl ScriptGenerator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        identity: PackageIdentity,
        method: BuildMethod,
        src_dir: String,
        url: String,
        prefix: String,
        in_tree: bool,
        docs: Vec<String>,
        patches: Vec<String>,
    ) -> Self {
        Self {
            identity,
            method,
            src_dir,
            url,
            prefix,
            in_tree,
            docs,
            patches,
        }
    }

    /// Output file name, `PlamoBuild.<basename>-<version>`.
    pub fn script_name(&self) -> String {
        format!(
            "PlamoBuild.{}-{}",
            self.identity.basename, self.identity.version
        )
    }

    pub fn generate(&self) -> String {
        let header = self.header();
        let config = templates::config_section(self.method, &self.prefix, self.in_tree);
        let build = templates::build_section(self.method);
        format!("{}{}{}", header, config, build)
    }

    /// Header variable block consumed by plamobuild_functions.sh.
    ///
    /// DOCS and patchfiles are space-joined inside single quotes; that exact
    /// format is what the downstream packaging tooling parses, so it is a
    /// hard compatibility constraint. The documentation list is sorted
    /// alphabetically here, just before templating.
    fn header(&self) -> String {
        let mut docs = self.docs.clone();
        docs.sort();

        let opt_config = match self.method {
            BuildMethod::Configure => "--disable-static --enable-shared",
            _ => "",
        };

        format!(
            r#"#!/bin/sh
##############################################################
url='{url}'
pkgbase='{pkgbase}'
vers='{vers}'
arch=`uname -m`
build=P1
src='{src}'
OPT_CONFIG='{opt_config}'
DOCS='{docs}'
patchfiles='{patches}'
compress=txz
##############################################################
"#,
            url = self.url,
            pkgbase = self.identity.basename,
            vers = self.identity.version,
            src = self.src_dir,
            opt_config = opt_config,
            docs = docs.join(" "),
            patches = self.patches.join(" "),
        )
    }

    /// Writes the script into `dir`, executable.
    pub fn write_to_disk(&self, dir: &Path, script: &str) -> Result<PathBuf> {
        let path = dir.join(self.script_name());
        debug!("writing {}", path.display());

        fs::write(&path, script)
            .with_context(|| format!("failed to write {}", path.display()))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("failed to chmod {}", path.display()))?;

        Ok(path)
    }
}
