use html_escape::{encode_double_quoted_attribute, encode_text};

// `gdp` is the property as written in the source, empty when absent.
pub fn country_popup(name: &str, gdp: &str) -> String {
    format!(
        "<strong>Country:</strong> {}<br><strong>GDP:</strong> ${}",
        encode_text(name),
        encode_text(gdp)
    )
}

pub fn endorser_popup(name: &str, website: &str) -> String {
    format!(
        "<strong>Name:</strong> {}<br><strong>Website:</strong> <a href=\"{}\" target=\"_blank\">{}</a>",
        encode_text(name),
        encode_double_quoted_attribute(website),
        encode_text(website)
    )
}
