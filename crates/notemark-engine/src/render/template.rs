use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{Document, SiteLayout};

/// Icon font every page links to.
pub const ICON_FONT_HREF: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";

/// Wraps a document's body in the fixed page shell.
///
/// The title and stylesheet path are escaped; body markup goes in as-is. An
/// empty `style` leaves out the local stylesheet link.
pub fn render_page(document: &Document, layout: &SiteLayout) -> String {
    let meta = &document.metadata;
    let mut html = String::with_capacity(document.body_html.len() + 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    html.push_str("<head>\n<meta charset=\"utf-8\"/>\n");
    html.push_str(&format!("<title>{}</title>\n", encode_text(&meta.title)));
    if !meta.style.is_empty() {
        let href = layout.stylesheet_href(&meta.style);
        html.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            encode_double_quoted_attribute(&href)
        ));
    }
    html.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{ICON_FONT_HREF}\">\n"
    ));
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("</head>\n");

    html.push_str("<body>\n<article>\n");
    html.push_str(&document.body_html);
    html.push_str("</article>\n</body>\n");
    html.push_str("</html>\n\n");
    html
}
