/// Keyword lists driving the filename classifiers.
///
/// The defaults are the canonical Plamo lists; tests and the user settings
/// file can substitute their own.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Case-insensitive substrings marking a file as documentation.
    pub doc_keywords: Vec<String>,
    /// Case-sensitive substrings that veto a documentation candidate.
    pub doc_exceptions: Vec<String>,
    /// Case-insensitive substrings marking a file as a patch.
    pub patch_keywords: Vec<String>,
}

const DOC_KEYWORDS: &[&str] = &[
    "ABOUT",
    "AUTHOR",
    "COPYING",
    "CHANGELOG",
    "HACKING",
    "HISTORY",
    "INSTALL",
    "LICENSE",
    "LSM",
    "MAINTAINERS",
    "NEWS",
    "README",
    "RELEASE",
    "THANKS",
    "THANKYOU",
    "TODO",
    "TXT",
];

const DOC_EXCEPTIONS: &[&str] = &[
    "CMakeLists.txt",
    "install-sh",
    "mkinstalldirs",
    "install.sh",
    ".in",
];

const PATCH_KEYWORDS: &[&str] = &["PATCH", "DIFF"];

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            doc_keywords: DOC_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            doc_exceptions: DOC_EXCEPTIONS.iter().map(|s| s.to_string()).collect(),
            patch_keywords: PATCH_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Picks the documentation files out of a directory listing.
///
/// A file qualifies when its uppercased name contains any documentation
/// keyword; the scan stops at the first matching keyword so a file is never
/// listed twice. Candidates containing an exception substring in their
/// original case (autotools helpers, `.in` templates) are dropped.
/// The relative order of the input listing is preserved.
///
/// Matching is plain substring containment, not whole-word or path-aware;
/// a name like `MYREADMEFILE.dat` still counts. Downstream scripts rely on
/// that permissiveness, so it stays.
pub fn classify_docs(config: &ClassifierConfig, filenames: &[String]) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for name in filenames {
        let upper = name.to_uppercase();
        if config.doc_keywords.iter().any(|kw| upper.contains(kw.as_str())) {
            candidates.push(name.clone());
        }
    }

    candidates.retain(|name| {
        !config
            .doc_exceptions
            .iter()
            .any(|ex| name.contains(ex.as_str()))
    });
    candidates
}

/// Picks the patch files out of a directory listing.
///
/// Same uppercased substring scan as [`classify_docs`], against the patch
/// keyword list and with no exception filtering. A file matching more than
/// one keyword is included exactly once.
pub fn classify_patches(config: &ClassifierConfig, filenames: &[String]) -> Vec<String> {
    let mut patches: Vec<String> = Vec::new();
    for name in filenames {
        let upper = name.to_uppercase();
        if config
            .patch_keywords
            .iter()
            .any(|kw| upper.contains(kw.as_str()))
        {
            patches.push(name.clone());
        }
    }
    patches
}
