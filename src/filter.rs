use crate::link::Link;
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Archive and wheel extensions a repository page may offer for download
pub const SUPPORTED_FORMATS: [&str; 7] = [
    ".tar.gz", ".whl", ".zip", ".tar.bz2", ".tar.xz", ".tar.Z", ".tar",
];

static UNSAFE_URL_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[^a-z0-9$\&+,/:;=?@.#%_\\|\-]")
        .expect("URL cleaning pattern should be valid")
});

/// Percent-encodes every character a download URL should not carry raw.
///
/// Existing escapes, the query and the `#<algo>=<digest>` fragment are left
/// exactly as written.
pub fn clean_link(url: &str) -> String {
    UNSAFE_URL_CHARS
        .replace_all(url, |caps: &Captures<'_>| {
            caps[0]
                .bytes()
                .map(|b| format!("%{b:02x}"))
                .collect::<String>()
        })
        .into_owned()
}

/// Decides which links are downloadable distributions, by file extension
#[derive(Debug, Clone)]
pub struct FormatFilter {
    formats: HashSet<String>,
}

impl Default for FormatFilter {
    fn default() -> Self {
        Self::new(SUPPORTED_FORMATS)
    }
}

impl FormatFilter {
    /// Create a filter accepting exactly the given extensions
    pub fn new<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if an extension is one of the accepted formats
    pub fn is_supported(&self, ext: &str) -> bool {
        self.formats.contains(ext)
    }

    /// Check if a link points at a supported distribution file
    pub fn accepts(&self, link: &Link) -> bool {
        let ext = link.ext();
        if self.is_supported(&ext) {
            true
        } else {
            ::log::trace!("Skipping unsupported format {:?}: {}", ext, link.url());
            false
        }
    }
}
