use scraper::{ElementRef, Html};

/// Read-only view of an anchor element, independent of the parsing library
pub trait AnchorView {
    /// Value of the named attribute, `None` when the attribute is absent
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Whether the attribute is present at all, even with an empty value
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Leading text of the element, trimmed; `None` when missing or blank
    fn text(&self) -> Option<String>;
}

/// An `<a>` element of a parsed [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct Anchor<'a>(ElementRef<'a>);

impl AnchorView for Anchor<'_> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    /// Unlike a raw text read, surrounding whitespace is dropped and a
    /// whitespace-only label counts as no label.
    fn text(&self) -> Option<String> {
        // Only the text that precedes any child element counts as the label
        let first = self.0.first_child()?;
        let text = first.value().as_text()?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// A parsed HTML document.
///
/// Parsing never fails: malformed markup is recovered the way a browser
/// would, and element names carry no namespace prefix.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document
    pub fn parse(content: &str) -> Self {
        let html = Html::parse_document(content);

        // Recovered parse errors are expected on real index pages
        if !html.errors.is_empty() {
            ::log::trace!("HTML parser recovered from {} errors", html.errors.len());
        }

        Self { html }
    }

    /// Every `<a>` element in document order
    pub fn anchors(&self) -> impl Iterator<Item = Anchor<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "a")
            .map(Anchor)
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("anchors", &self.anchors().count())
            .finish()
    }
}
