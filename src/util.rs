use scraper::Html;

/// Plain text of an upstream description, markup dropped.
pub fn strip_html(description: &str) -> String {
    Html::parse_fragment(description)
        .root_element()
        .text()
        .collect()
}
