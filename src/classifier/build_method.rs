use std::fmt;
use std::str::FromStr;

/// How the generated script configures and builds the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMethod {
    /// Autotools-style `./configure`.
    Configure,
    /// CMake out-of-tree build.
    CMake,
    /// Python `setup.py`.
    Python,
    /// Perl `Makefile.PL`.
    Perl,
}

/// Marker files checked in fixed priority order, independent of the
/// order the directory listing arrives in.
const MARKERS: &[(&str, BuildMethod)] = &[
    ("CMakeLists.txt", BuildMethod::CMake),
    ("configure", BuildMethod::Configure),
    ("setup.py", BuildMethod::Python),
    ("Makefile.PL", BuildMethod::Perl),
];

impl BuildMethod {
    /// Infers the build method from a source directory listing.
    ///
    /// Returns `None` when no marker file is present; the caller decides
    /// what to fall back to (and warns about it).
    pub fn detect(filenames: &[String]) -> Option<BuildMethod> {
        MARKERS
            .iter()
            .find(|(marker, _)| filenames.iter().any(|name| name == marker))
            .map(|&(_, method)| method)
    }
}

impl fmt::Display for BuildMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildMethod::Configure => "configure",
            BuildMethod::CMake => "cmake",
            BuildMethod::Python => "python",
            BuildMethod::Perl => "perl",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for BuildMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "config" | "configure" => Ok(BuildMethod::Configure),
            "cmake" => Ok(BuildMethod::CMake),
            "python" => Ok(BuildMethod::Python),
            "perl" => Ok(BuildMethod::Perl),
            other => Err(format!(
                "unknown build method '{}' (expected configure, cmake, python or perl)",
                other
            )),
        }
    }
}
