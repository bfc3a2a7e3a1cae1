use crate::utils::splitext;
use percent_encoding::percent_decode_str;
use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

/// Digest algorithms accepted in a `#<algo>=<digest>` URL fragment
const HASH_ALGORITHMS: [&str; 6] = ["sha1", "sha224", "sha256", "sha384", "sha512", "md5"];

/// Yank state of a distribution file (PEP 592)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Yanked {
    /// The file is available normally
    #[default]
    No,
    /// The file was yanked without a reason
    Yes,
    /// The file was yanked with the given reason
    Reason(String),
}

impl Yanked {
    pub fn is_yanked(&self) -> bool {
        !matches!(self, Yanked::No)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Yanked::Reason(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<bool> for Yanked {
    fn from(yanked: bool) -> Self {
        if yanked { Yanked::Yes } else { Yanked::No }
    }
}

impl Serialize for Yanked {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Yanked::No => serializer.serialize_bool(false),
            Yanked::Yes => serializer.serialize_bool(true),
            Yanked::Reason(reason) => serializer.serialize_str(reason),
        }
    }
}

/// A downloadable file referenced by a repository page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    url: Url,
    requires_python: Option<String>,
    yanked: Yanked,
}

impl Link {
    /// Create a link with no metadata
    pub fn new(url: Url) -> Self {
        Self {
            url,
            requires_python: None,
            yanked: Yanked::No,
        }
    }

    /// Set the `data-requires-python` constraint
    pub fn with_requires_python(mut self, requires_python: Option<String>) -> Self {
        self.requires_python = requires_python;
        self
    }

    /// Set the `data-yanked` state
    pub fn with_yanked(mut self, yanked: Yanked) -> Self {
        self.yanked = yanked;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn requires_python(&self) -> Option<&str> {
        self.requires_python.as_deref()
    }

    pub fn yanked(&self) -> &Yanked {
        &self.yanked
    }

    /// Last non-empty path segment, percent-decoded; the host for bare URLs
    pub fn filename(&self) -> String {
        let segment = self
            .url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last());

        match segment {
            Some(segment) => percent_decode_str(segment).decode_utf8_lossy().into_owned(),
            None => self.url.host_str().unwrap_or_default().to_string(),
        }
    }

    /// File extension, with `.tar.gz` style compound extensions kept whole
    pub fn ext(&self) -> String {
        let filename = self.filename();
        splitext(&filename).1.to_string()
    }

    /// Digest algorithm pinned in the URL fragment, e.g. `sha256`
    pub fn hash_name(&self) -> Option<&str> {
        self.fragment_hash().map(|(name, _)| name)
    }

    /// Hex digest pinned in the URL fragment
    pub fn hash(&self) -> Option<&str> {
        self.fragment_hash().map(|(_, digest)| digest)
    }

    fn fragment_hash(&self) -> Option<(&str, &str)> {
        let (name, digest) = self.url.fragment()?.split_once('=')?;
        let valid = HASH_ALGORITHMS.contains(&name)
            && !digest.is_empty()
            && digest.chars().all(|c| c.is_ascii_hexdigit());
        valid.then_some((name, digest))
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
