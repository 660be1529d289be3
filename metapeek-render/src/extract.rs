//! Pure extraction of title and meta tags from rendered HTML.
//!
//! Kept synchronous and browser-free so it is testable against plain HTML
//! strings.

use scraper::{Html, Selector};

use metapeek_core::types::{MetaAttrs, PageMetadata};

/// Extracts the page title and every head `<meta>` attribute set.
///
/// The title is the concatenated text of the first `html head title` element
/// (empty string when absent). Metas appear in document order, one attribute
/// map per element; meta tags outside the head are ignored.
pub fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    // Static selectors, cannot fail to parse.
    let title_selector = Selector::parse("html head title").expect("static selector");
    let meta_selector = Selector::parse("html head meta").expect("static selector");

    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let metas = document
        .select(&meta_selector)
        .map(|el| {
            el.value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect::<MetaAttrs>()
        })
        .collect();

    PageMetadata { title, metas }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_metas() {
        let html = r#"<!DOCTYPE html>
            <html>
            <head>
                <title>Example Domain</title>
                <meta charset="utf-8">
                <meta name="description" content="An example page">
                <meta property="og:title" content="Example">
            </head>
            <body><p>hi</p></body>
            </html>"#;

        let page = extract_metadata(html);
        assert_eq!(page.title, "Example Domain");
        assert_eq!(page.metas.len(), 3);
        assert_eq!(page.metas[0].get("charset").unwrap(), "utf-8");
        assert_eq!(page.meta_content("description"), Some("An example page"));
        assert_eq!(page.meta_content("og:title"), Some("Example"));
    }

    #[test]
    fn test_metas_keep_document_order() {
        let html = r#"<html><head>
            <meta name="first" content="1">
            <meta name="second" content="2">
            <meta name="third" content="3">
        </head></html>"#;

        let page = extract_metadata(html);
        let names: Vec<_> = page
            .metas
            .iter()
            .map(|m| m.get("name").unwrap().as_str())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_missing_title_is_empty_string() {
        let page = extract_metadata("<html><head><meta charset=\"utf-8\"></head></html>");
        assert_eq!(page.title, "");
        assert_eq!(page.metas.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let page = extract_metadata("");
        assert!(page.is_empty());
    }

    #[test]
    fn test_body_metas_are_excluded() {
        let html = r#"<html>
            <head><title>t</title></head>
            <body><meta name="stray" content="nope"></body>
        </html>"#;

        let page = extract_metadata(html);
        assert_eq!(page.title, "t");
        assert!(page.metas.is_empty());
    }

    #[test]
    fn test_title_with_nested_markup() {
        // html5ever treats the title as raw text; the full text is kept.
        let html = "<html><head><title>A &amp; B</title></head></html>";
        let page = extract_metadata(html);
        assert_eq!(page.title, "A & B");
    }

    #[test]
    fn test_valueless_attributes() {
        let html = r#"<html><head><meta name="robots" content=""></head></html>"#;
        let page = extract_metadata(html);
        assert_eq!(page.metas[0].get("content").unwrap(), "");
    }
}
