// ABOUTME: Image URL collection from parsed documents.
// ABOUTME: Gathers non-empty `src` attributes of <img> elements in document order.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// Returns the `src` of every `<img>` in document order.
///
/// Values are returned exactly as written; absent and empty attributes are skipped.
pub fn image_sources(document: &Html) -> Vec<String> {
    document
        .select(&IMG_SELECTOR)
        .filter_map(|el| el.value().attr("src"))
        .filter(|src| !src.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_sources_in_document_order() {
        let doc = Html::parse_document(
            r#"<div><img src="/a.png"><p><img src="https://cdn.example.com/b.jpg"></p><img src="c.gif"></div>"#,
        );
        assert_eq!(
            image_sources(&doc),
            vec!["/a.png", "https://cdn.example.com/b.jpg", "c.gif"]
        );
    }

    #[test]
    fn skips_missing_and_empty_sources() {
        let doc = Html::parse_document(
            r#"<img alt="no src"><img src=""><img data-src="lazy.png"><img src="kept.png">"#,
        );
        assert_eq!(image_sources(&doc), vec!["kept.png"]);
    }

    #[test]
    fn keeps_relative_urls_verbatim() {
        let doc = Html::parse_document(r#"<img src="  ../img/x.png ">"#);
        assert_eq!(image_sources(&doc), vec!["  ../img/x.png "]);
    }
}
