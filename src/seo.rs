use crate::models::portfolio::PortfolioRecord;
use crate::render::html_escape;

/// Build meta tags HTML string for the portfolio page.
pub fn build_meta(record: &PortfolioRecord, site_url: &str, path: &str) -> String {
    let page_title = match (record.name.as_deref(), record.headline.as_deref()) {
        (Some(name), Some(headline)) => format!("{} — {}", name, headline),
        (Some(name), None) => name.to_string(),
        (None, Some(headline)) => headline.to_string(),
        (None, None) => "Portfolio".to_string(),
    };

    let description = record
        .summary
        .as_deref()
        .or(record.about.as_deref())
        .map(|text| truncate_words(text, 28))
        .unwrap_or_default();

    let canonical = format!("{}{}", site_url, path);

    let mut meta = format!(
        r#"<title>{title}</title>
<meta name="description" content="{description}">
<link rel="canonical" href="{canonical}">"#,
        title = html_escape(&page_title),
        description = html_escape(&description),
        canonical = html_escape(&canonical),
    );

    // Open Graph
    meta.push_str(&format!(
        r#"
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:url" content="{canonical}">
<meta property="og:type" content="website">"#,
        title = html_escape(&page_title),
        description = html_escape(&description),
        canonical = html_escape(&canonical),
    ));

    // Twitter Cards
    meta.push_str(&format!(
        r#"
<meta name="twitter:card" content="summary">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="{description}">"#,
        title = html_escape(&page_title),
        description = html_escape(&description),
    ));

    meta
}

/// Minimal head for the failed-load view, where no record exists.
pub fn fallback_meta() -> String {
    "<title>Portfolio</title>".to_string()
}

fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        text.to_string()
    } else {
        let mut result = words[..max_words].join(" ");
        result.push('\u{2026}');
        result
    }
}
