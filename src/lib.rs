//! Parsing of PEP 503 "simple" repository pages.
//!
//! A project page becomes a sequence of [`Link`]s to downloadable files; the
//! repository root becomes a set of canonical project names.

pub mod config;
pub mod error;
pub mod filter;
pub mod link;
pub mod names;
pub mod pages;
pub mod parsers;
pub mod results;
pub mod source;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::SourceConfig;
pub use error::{LinkSourceError, Result};
pub use link::{Link, Yanked};
pub use names::canonicalize_name;
pub use pages::{HtmlPage, SimpleIndexPage, SimpleRepositoryPage};
pub use results::PackageData;
pub use source::LinkSource;

/// Kinds of pages a repository serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A project page listing distribution files
    Repository,
    /// The repository root listing projects
    Index,
    /// Any other page of download links, resolved as-is
    Html,
}

/// A parsed page of any kind
#[derive(Debug)]
pub enum ParsedPage {
    Repository(SimpleRepositoryPage),
    Index(SimpleIndexPage),
    Html(HtmlPage),
}

impl ParsedPage {
    pub fn kind(&self) -> PageKind {
        match self {
            ParsedPage::Repository(_) => PageKind::Repository,
            ParsedPage::Index(_) => PageKind::Index,
            ParsedPage::Html(_) => PageKind::Html,
        }
    }

    /// URL hrefs on the page are resolved against
    pub fn url(&self) -> &url::Url {
        match self {
            ParsedPage::Repository(page) => page.url(),
            ParsedPage::Index(page) => page.url(),
            ParsedPage::Html(page) => page.url(),
        }
    }
}

/// Builder turning fetched HTML into a parsed page
pub struct Pages {
    kind: PageKind,
    url: String,
    config: SourceConfig,
}

impl Pages {
    /// Create a new builder for a page of `kind` fetched from `url`
    pub fn new(kind: PageKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            config: SourceConfig::default(),
        }
    }

    /// Set the configuration
    pub fn with_config(mut self, config: SourceConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = SourceConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self> {
        let config = SourceConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Parse the page content
    pub fn parse(self, content: &str) -> Result<ParsedPage> {
        let formats = self.config.format_filter();
        let page = match self.kind {
            PageKind::Repository => ParsedPage::Repository(
                SimpleRepositoryPage::new(&self.url, content)?.with_formats(formats),
            ),
            PageKind::Index => ParsedPage::Index(SimpleIndexPage::new(&self.url, content)?),
            PageKind::Html => ParsedPage::Html(HtmlPage::new(&self.url, content)?.with_formats(formats)),
        };
        Ok(page)
    }
}
