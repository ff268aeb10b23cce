//! Page title extraction
//!
//! Best-effort title lookup over an ordered fallback chain.

use scraper::{ElementRef, Html, Selector};

/// Returned when none of the title sources are present
pub const TITLE_FALLBACK: &str = "N/A";

/// Extracts the page title from HTML
///
/// First match wins:
/// 1. text of the first `h1.title` heading, each text node trimmed
/// 2. non-empty `content` of `meta[property="og:title"]`
/// 3. text of the `<title>` element
/// 4. [`TITLE_FALLBACK`]
///
/// # Arguments
/// * `html` - Raw HTML string of the page
///
/// # Example
/// ```
/// use streamgrab_core::parser::extract_title;
/// let html = r#"<head><meta property="og:title" content=" Foo "></head>"#;
/// assert_eq!(extract_title(html), "Foo");
/// ```
pub fn extract_title(html: &str) -> String {
    let document = Html::parse_document(html);

    heading_title(&document)
        .or_else(|| og_title(&document))
        .or_else(|| document_title(&document))
        .unwrap_or_else(|| TITLE_FALLBACK.to_string())
}

/// Text of the first `h1.title`, even if empty
fn heading_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1.title").ok()?;
    document.select(&selector).next().map(element_text)
}

/// Trimmed `og:title` meta content, skipped when blank
fn og_title(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="og:title"]"#).ok()?;
    let content = document
        .select(&selector)
        .next()?
        .value()
        .attr("content")?
        .trim();

    (!content.is_empty()).then(|| content.to_string())
}

fn document_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document.select(&selector).next().map(element_text)
}

/// Each text node trimmed, joined without a separator
fn element_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_wins() {
        let html = r#"
        <html>
        <head>
            <title>Document Title</title>
            <meta property="og:title" content="OG Title">
        </head>
        <body><h1 class="title"> Heading <span>Title</span> </h1></body>
        </html>
        "#;
        assert_eq!(extract_title(html), "HeadingTitle");
    }

    #[test]
    fn test_heading_text_nodes_joined_without_separator() {
        let html = r#"<h1 class="title">A <b>B</b></h1>"#;
        assert_eq!(extract_title(html), "AB");
    }

    #[test]
    fn test_heading_needs_title_class() {
        let html = r#"
        <html>
        <head><meta property="og:title" content="OG Title"></head>
        <body><h1>Site Name</h1><h2 class="title">Not a heading match</h2></body>
        </html>
        "#;
        assert_eq!(extract_title(html), "OG Title");
    }

    #[test]
    fn test_og_title_only() {
        let html = r#"<html><head><meta property="og:title" content="Foo"></head><body></body></html>"#;
        assert_eq!(extract_title(html), "Foo");
    }

    #[test]
    fn test_blank_og_title_falls_through() {
        let html = r#"
        <html>
        <head>
            <meta property="og:title" content="   ">
            <title>  Document Title  </title>
        </head>
        </html>
        "#;
        assert_eq!(extract_title(html), "Document Title");
    }

    #[test]
    fn test_document_title() {
        let html = "<html><head><title>X</title></head><body></body></html>";
        assert_eq!(extract_title(html), "X");
    }

    #[test]
    fn test_no_markers() {
        let html = "<html><body><p>Nothing to see</p></body></html>";
        assert_eq!(extract_title(html), "N/A");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_title(""), "N/A");
    }
}
