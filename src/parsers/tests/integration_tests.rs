use crate::filter::FormatFilter;
use crate::link::Yanked;
use crate::pages::{SimpleIndexPage, SimpleRepositoryPage, link_from_anchor};
use crate::parsers::AnchorView;
use crate::source::LinkSource;
use url::Url;

/// Anchor backed by plain data instead of a parsed document
struct FakeAnchor {
    attrs: Vec<(&'static str, &'static str)>,
    text: Option<&'static str>,
}

impl AnchorView for FakeAnchor {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    fn text(&self) -> Option<String> {
        self.text.map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://pypi.example/simple/pkg/").unwrap()
    }

    #[test]
    fn test_end_to_end_single_link() {
        let page = SimpleRepositoryPage::new(
            "https://pypi.example/simple/pkg/",
            r#"<a href="pkg-1.0.tar.gz" data-requires-python=">=3.8">pkg-1.0.tar.gz</a>"#,
        )
        .unwrap();

        let links: Vec<_> = page.links().map(|l| l.unwrap()).collect();
        assert_eq!(links.len(), 1);
        assert_eq!(
            links[0].url().as_str(),
            "https://pypi.example/simple/pkg/pkg-1.0.tar.gz"
        );
        assert_eq!(links[0].requires_python(), Some(">=3.8"));
        assert!(!links[0].yanked().is_yanked());
    }

    #[test]
    fn test_anchor_view_decouples_extraction() {
        let anchor = FakeAnchor {
            attrs: vec![
                ("href", "pkg-1.0-py3-none-any.whl"),
                ("data-yanked", ""),
            ],
            text: None,
        };
        let link = link_from_anchor(&anchor, &base(), &FormatFilter::default())
            .unwrap()
            .unwrap();
        assert_eq!(
            link.url().as_str(),
            "https://pypi.example/simple/pkg/pkg-1.0-py3-none-any.whl"
        );
        assert_eq!(link.yanked(), &Yanked::Yes);
        assert_eq!(link.requires_python(), None);
    }

    #[test]
    fn test_fake_anchor_without_href() {
        let anchor = FakeAnchor {
            attrs: vec![("data-yanked", "reason")],
            text: Some("pkg-1.0.tar.gz"),
        };
        let result = link_from_anchor(&anchor, &base(), &FormatFilter::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_fake_anchor_unsupported_format() {
        let anchor = FakeAnchor {
            attrs: vec![("href", "readme.txt")],
            text: None,
        };
        let result = link_from_anchor(&anchor, &base(), &FormatFilter::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_fake_anchor_reason_unescaped() {
        let anchor = FakeAnchor {
            attrs: vec![("href", "pkg-1.0.zip"), ("data-yanked", "use &gt;= 1.1")],
            text: None,
        };
        let link = link_from_anchor(&anchor, &base(), &FormatFilter::default())
            .unwrap()
            .unwrap();
        assert_eq!(link.yanked().reason(), Some("use >= 1.1"));
    }

    #[test]
    fn test_membership_symmetry() {
        let page = SimpleIndexPage::new(
            "https://pypi.example/simple/",
            r#"<a href="/simple/a/">Flask_SQLAlchemy</a><a href="/simple/b/">ruamel.yaml</a>"#,
        )
        .unwrap();

        for served in page.links() {
            let variants = [
                served.clone(),
                served.to_uppercase(),
                served.replace('-', "_"),
                served.replace('-', "."),
            ];
            for variant in variants {
                assert!(page.serves_package(&variant), "{variant} should be served");
            }
        }
    }

    #[test]
    fn test_index_page_tolerates_broken_markup() {
        let page = SimpleIndexPage::new(
            "https://pypi.example/simple",
            "<html><body><a href='/simple/one/'>one<a href='/simple/two/'>Two</body>",
        )
        .unwrap();
        assert!(page.serves_package("one"));
        assert!(page.serves_package("TWO"));
    }
}
