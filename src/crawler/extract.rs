//! Episode metadata extraction from a fetched page
//!
//! Given one page's HTML and its URL, locates the audio element and the
//! descriptive metadata around it. Pure: no network or disk I/O.

use crate::records::{EpisodeRecord, UNKNOWN};
use scraper::{Html, Selector};
use url::Url;

/// Extracts an episode record from a page, or `None` if the page has no
/// playable audio
///
/// A missing audio element is a normal outcome (not every page is an
/// episode page), not an error.
///
/// # Extraction Rules
///
/// - Audio: the first `<audio controls>` element with a `src` attribute;
///   the source is resolved against `page_url` to an absolute URL.
/// - Title: first non-empty of `h1`, `title`, `.episode-title` text;
///   falls back to `"Unknown"`.
/// - Date: first of `.episode-date`, `time`, `.date`; takes the element
///   text or, if empty, its `datetime` attribute; falls back to `"Unknown"`.
pub fn extract(html: &str, page_url: &Url) -> Option<EpisodeRecord> {
    let document = Html::parse_document(html);

    let audio_src = find_audio_source(&document)?;
    let audio_url = page_url.join(&audio_src).ok()?;

    let title = extract_title(&document).unwrap_or_else(|| UNKNOWN.to_string());
    let date = extract_date(&document).unwrap_or_else(|| UNKNOWN.to_string());

    Some(EpisodeRecord {
        title,
        date,
        audio_url: Some(audio_url.to_string()),
        page_url: page_url.to_string(),
    })
}

/// Finds the source attribute of the first audio control on the page
fn find_audio_source(document: &Html) -> Option<String> {
    let selector = Selector::parse("audio[controls]").ok()?;

    document
        .select(&selector)
        .find_map(|element| element.value().attr("src"))
        .map(|src| src.trim().to_string())
        .filter(|src| !src.is_empty())
}

/// Tries the title locations in order, first non-empty text wins
fn extract_title(document: &Html) -> Option<String> {
    for selector_str in ["h1", "title", ".episode-title"] {
        if let Some(text) = select_text(document, selector_str) {
            return Some(text);
        }
    }
    None
}

/// Tries the date locations in order; each falls back from text content to
/// a machine-readable `datetime` attribute
fn extract_date(document: &Html) -> Option<String> {
    for selector_str in [".episode-date", "time", ".date"] {
        let selector = match Selector::parse(selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        if let Some(element) = document.select(&selector).next() {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
            if let Some(datetime) = element.value().attr("datetime") {
                let datetime = datetime.trim();
                if !datetime.is_empty() {
                    return Some(datetime.to_string());
                }
            }
        }
    }
    None
}

/// Returns the trimmed text of the first element matching the selector,
/// or `None` if there is no match or the text is empty
fn select_text(document: &Html, selector_str: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/episodes/ep1").unwrap()
    }

    #[test]
    fn test_no_audio_returns_none() {
        let html = r#"<html><body><h1>Not an episode</h1></body></html>"#;
        assert!(extract(html, &page_url()).is_none());
    }

    #[test]
    fn test_audio_without_controls_ignored() {
        let html = r#"<html><body><audio src="/ep1.mp3"></audio></body></html>"#;
        assert!(extract(html, &page_url()).is_none());
    }

    #[test]
    fn test_audio_without_src_ignored() {
        let html = r#"<html><body><audio controls></audio></body></html>"#;
        assert!(extract(html, &page_url()).is_none());
    }

    #[test]
    fn test_relative_audio_url_resolved() {
        let html = r#"<html><body><audio controls src="../audio/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(
            record.audio_url.as_deref(),
            Some("https://example.com/audio/ep1.mp3")
        );
    }

    #[test]
    fn test_absolute_audio_url_kept() {
        let html =
            r#"<html><body><audio controls src="https://cdn.example.com/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(
            record.audio_url.as_deref(),
            Some("https://cdn.example.com/ep1.mp3")
        );
    }

    #[test]
    fn test_title_from_h1_preferred() {
        let html = r#"<html><head><title>Site Title</title></head>
            <body><h1>The Old Testament</h1>
            <audio controls src="/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(record.title, "The Old Testament");
    }

    #[test]
    fn test_title_falls_back_to_document_title() {
        let html = r#"<html><head><title>Site Title</title></head>
            <body><audio controls src="/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(record.title, "Site Title");
    }

    #[test]
    fn test_title_falls_back_to_episode_title_class() {
        let html = r#"<html><body><span class="episode-title">Ep 42</span>
            <audio controls src="/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(record.title, "Ep 42");
    }

    #[test]
    fn test_title_unknown_sentinel() {
        let html = r#"<html><body><audio controls src="/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(record.title, "Unknown");
    }

    #[test]
    fn test_date_from_episode_date_class() {
        let html = r#"<html><body><span class="episode-date">Nov. 22, 2016</span>
            <audio controls src="/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(record.date, "Nov. 22, 2016");
    }

    #[test]
    fn test_date_falls_back_to_datetime_attribute() {
        let html = r#"<html><body><time datetime="2016-11-22"></time>
            <audio controls src="/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(record.date, "2016-11-22");
    }

    #[test]
    fn test_date_unknown_sentinel() {
        let html = r#"<html><body><h1>Ep</h1><audio controls src="/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(record.date, "Unknown");
    }

    #[test]
    fn test_page_url_recorded() {
        let html = r#"<html><body><audio controls src="/ep1.mp3"></audio></body></html>"#;
        let record = extract(html, &page_url()).unwrap();
        assert_eq!(record.page_url, "https://example.com/episodes/ep1");
    }
}
