use thiserror::Error;

/// Errors raised while turning a fetched page into links or project names
#[derive(Debug, Error)]
pub enum LinkSourceError {
    /// The page's own URL could not be parsed
    #[error("invalid page url {url:?}: {source}")]
    InvalidOrigin {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// An anchor's href could not be resolved against the page URL
    #[error("cannot resolve href {href:?}: {source}")]
    UnresolvableHref {
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// An attribute value contained a character reference that does not decode
    #[error("cannot unescape {attribute}: {reason}")]
    Unescape { attribute: String, reason: String },

    /// Configuration was rejected
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LinkSourceError>;
