// ABOUTME: Rendered-text extraction over scraper node trees.
// ABOUTME: Skips non-rendered subtrees and separates block elements before whitespace normalization.

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Node;

/// Elements whose subtree never renders as text.
const NON_RENDERED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "template", "head", "title", "iframe", "object", "svg",
    "canvas", "img", "video", "audio", "select", "datalist",
];

/// Elements laid out on their own line, so their text never runs into a neighbour's.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "dd", "details", "dialog",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hgroup", "hr", "li", "main", "nav", "ol", "p", "pre",
    "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn normalize_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s, " ").trim().to_string()
}

/// Returns the text a browser would render for the children of `root`.
///
/// Line breaks are inserted around block elements and for `<br>`; the caller
/// is expected to normalize whitespace afterwards.
pub fn rendered_text(root: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    for child in root.children() {
        push_rendered(child, &mut out);
    }
    out
}

fn push_rendered(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(el) => {
            let name = el.name();
            if NON_RENDERED_ELEMENTS.contains(&name) || el.attr("hidden").is_some() {
                return;
            }
            if name == "br" {
                out.push('\n');
                return;
            }

            let block = BLOCK_ELEMENTS.contains(&name);
            if block {
                out.push('\n');
            }
            for child in node.children() {
                push_rendered(child, out);
            }
            if block {
                out.push('\n');
            }
        }
        _ => {}
    }
}
