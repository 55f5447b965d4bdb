use super::sites::Site;
use super::types::{FetchedPage, Summary};
use scraper::{Html, Selector};

/// Strip parameters from a `Content-Type` header (`text/html; charset=utf-8` → `text/html`).
///
/// The type is reported exactly as the server sent it; no case folding.
pub fn content_type_essence(raw: &str) -> &str {
    raw.split(';').next().unwrap_or_default().trim()
}

/// Exact match on `text/html`; `Text/HTML` is not treated as a page.
pub fn is_html(essence: &str) -> bool {
    essence == mime::TEXT_HTML.essence_str()
}

/// Turn a fetched response into its one-line summary.
///
/// Only a 200 carries a content type. Non-HTML resources are described by
/// their content type; HTML pages by a site-specific summary when the URL is
/// a recognized one, otherwise by `<title>`, falling back to the content type
/// when the title is empty.
pub fn extract(page: &FetchedPage) -> Summary {
    if page.status != 200 {
        return Summary::Empty;
    }
    let Some(content_type) = page.content_type.as_deref().map(content_type_essence) else {
        return Summary::Empty;
    };
    if !is_html(content_type) {
        return Summary::ContentType(content_type.to_string());
    }

    let document = Html::parse_document(&page.body);
    if let Some(summary) = Site::classify(&page.url).extract(&document) {
        return summary;
    }

    match page_title(&document) {
        Some(title) => Summary::Title(title),
        None => Summary::ContentType(content_type.to_string()),
    }
}

/// Text of every `<title>` in the document, newlines dropped, leading
/// whitespace trimmed.
pub fn page_title(document: &Html) -> Option<String> {
    let sel = Selector::parse("title").ok()?;
    let text: String = document
        .select(&sel)
        .flat_map(|el| el.text())
        .collect::<String>()
        .replace('\n', "");
    let title = text.trim_start();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
