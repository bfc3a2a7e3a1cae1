use crate::error::{LinkSourceError, Result};
use crate::filter::{FormatFilter, clean_link};
use crate::link::{Link, Yanked};
use crate::names::canonicalize_name;
use crate::parsers::html::{AnchorView, Document};
use crate::parsers::unescape::unescape;
use crate::source::LinkSource;
use crate::utils::ensure_directory_url;
use std::collections::HashSet;
use url::{Position, Url};

/// A fetched page: its URL and the parsed document, owned together
#[derive(Debug)]
struct PageTree {
    url: Url,
    document: Document,
}

impl PageTree {
    fn parse(url: &str, content: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|source| LinkSourceError::InvalidOrigin {
            url: url.to_string(),
            source,
        })?;
        let document = Document::parse(content);
        Ok(Self { url, document })
    }
}

/// Builds the link for one anchor, or `None` when the anchor is skipped.
///
/// Anchors without an href and files of unsupported formats are skipped.
/// An href that cannot be resolved against `base` is an error.
pub fn link_from_anchor<A: AnchorView>(
    anchor: &A,
    base: &Url,
    formats: &FormatFilter,
) -> Result<Option<Link>> {
    let Some(href) = anchor.attribute("href").filter(|href| !href.is_empty()) else {
        return Ok(None);
    };

    let unresolvable = |source| LinkSourceError::UnresolvableHref {
        href: href.to_string(),
        source,
    };
    let resolved = base.join(href).map_err(unresolvable)?;
    // The host is already normalized; only path, query and fragment get cleaned
    let cleaned = format!(
        "{}{}",
        &resolved[..Position::BeforePath],
        clean_link(&resolved[Position::BeforePath..])
    );
    let url = Url::parse(&cleaned).map_err(unresolvable)?;

    let requires_python = match anchor.attribute("data-requires-python") {
        Some(value) if !value.is_empty() => {
            Some(unescape_attribute("data-requires-python", value)?)
        }
        _ => None,
    };

    let yanked = match anchor.attribute("data-yanked") {
        Some(reason) if !reason.is_empty() => {
            Yanked::Reason(unescape_attribute("data-yanked", reason)?)
        }
        _ => Yanked::from(anchor.has_attribute("data-yanked")),
    };

    let link = Link::new(url)
        .with_requires_python(requires_python)
        .with_yanked(yanked);

    Ok(formats.accepts(&link).then_some(link))
}

fn unescape_attribute(attribute: &str, value: &str) -> Result<String> {
    unescape(value).map_err(|e| LinkSourceError::Unescape {
        attribute: attribute.to_string(),
        reason: e.to_string(),
    })
}

/// Canonical name of every anchor with a text label
fn project_names(document: &Document) -> impl Iterator<Item = String> {
    document
        .anchors()
        .filter_map(|anchor| anchor.text())
        .map(|text| canonicalize_name(&text))
}

/// Any HTML page listing distribution files.
///
/// The URL is used as given when resolving hrefs.
#[derive(Debug)]
pub struct HtmlPage {
    tree: PageTree,
    formats: FormatFilter,
}

impl HtmlPage {
    /// Parse `content` fetched from `url`
    pub fn new(url: &str, content: &str) -> Result<Self> {
        Ok(Self {
            tree: PageTree::parse(url, content)?,
            formats: FormatFilter::default(),
        })
    }

    /// Replace the set of accepted file formats
    pub fn with_formats(mut self, formats: FormatFilter) -> Self {
        self.formats = formats;
        self
    }
}

impl LinkSource for HtmlPage {
    fn url(&self) -> &Url {
        &self.tree.url
    }

    fn links(&self) -> impl Iterator<Item = Result<Link>> {
        self.tree
            .document
            .anchors()
            .filter_map(|anchor| {
                link_from_anchor(&anchor, &self.tree.url, &self.formats).transpose()
            })
            // The first error ends the page; nothing after it is trusted
            .scan(false, |failed, result| {
                if *failed {
                    return None;
                }
                *failed = result.is_err();
                Some(result)
            })
    }
}

/// A PEP 503 project page, e.g. `https://pypi.org/simple/requests/`
#[derive(Debug)]
pub struct SimpleRepositoryPage {
    page: HtmlPage,
}

impl SimpleRepositoryPage {
    /// Parse a project page; the URL always gets a trailing slash
    pub fn new(url: &str, content: &str) -> Result<Self> {
        let url = ensure_directory_url(url);
        ::log::debug!("Parsing repository page {}", url);
        Ok(Self {
            page: HtmlPage::new(&url, content)?,
        })
    }

    /// Replace the set of accepted file formats
    pub fn with_formats(self, formats: FormatFilter) -> Self {
        Self {
            page: self.page.with_formats(formats),
        }
    }
}

impl LinkSource for SimpleRepositoryPage {
    fn url(&self) -> &Url {
        self.page.url()
    }

    fn links(&self) -> impl Iterator<Item = Result<Link>> {
        self.page.links()
    }
}

/// The root page of a PEP 503 repository, listing one anchor per project
#[derive(Debug)]
pub struct SimpleIndexPage {
    tree: PageTree,
    packages: HashSet<String>,
}

impl SimpleIndexPage {
    /// Parse the root page and remember every project it serves
    pub fn new(url: &str, content: &str) -> Result<Self> {
        let url = ensure_directory_url(url);
        let tree = PageTree::parse(&url, content)?;
        let packages: HashSet<String> = project_names(&tree.document).collect();
        ::log::debug!("Index page {} serves {} projects", tree.url, packages.len());
        Ok(Self { tree, packages })
    }

    pub fn url(&self) -> &Url {
        &self.tree.url
    }

    /// Canonical project names in document order, re-read from the page
    pub fn links(&self) -> impl Iterator<Item = String> {
        project_names(&self.tree.document)
    }

    /// Canonical names of all served projects, in no particular order
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    /// Check if the repository lists a project, ignoring case and separators
    pub fn serves_package(&self, name: &str) -> bool {
        self.packages.contains(&canonicalize_name(name))
    }
}
