//! Episode link discovery from an index page
//!
//! The index site's markup is not guaranteed stable, so discovery is an
//! ordered chain of structural heuristics, most specific first; the first
//! heuristic that yields any links wins. Deduplication is deliberately left
//! to the coordinator.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Discovers episode page URLs from index page HTML
///
/// Heuristic precedence, first non-empty result wins:
/// 1. Rows of `table#artTable` after the header row, second cell's link.
/// 2. Every `a.episode` element's link.
/// 3. All links inside `div.episodes` (else `main`), excluding same-page
///    anchors and links to a different origin than `base_url`.
///
/// All results are absolute, resolved against `base_url`; order follows
/// document order and duplicates are preserved.
pub fn discover(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let links = links_from_index_table(&document, base_url);
    if !links.is_empty() {
        return links;
    }

    let links = links_from_episode_anchors(&document, base_url);
    if !links.is_empty() {
        return links;
    }

    links_from_content_container(&document, base_url)
}

/// Heuristic 1: the uniquely-identified episode table
///
/// Each episode occupies a table row with the link in the second cell;
/// the first row is a header and is skipped.
fn links_from_index_table(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    let row_selector = match Selector::parse("table#artTable tr") {
        Ok(s) => s,
        Err(_) => return links,
    };
    let cell_selector = match Selector::parse("td") {
        Ok(s) => s,
        Err(_) => return links,
    };

    for row in document.select(&row_selector).skip(1) {
        if let Some(cell) = row.select(&cell_selector).nth(1) {
            if let Some(url) = first_link_target(cell, base_url) {
                links.push(url);
            }
        }
    }

    links
}

/// Heuristic 2: elements explicitly tagged with the episode class
fn links_from_episode_anchors(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    let selector = match Selector::parse("a.episode[href]") {
        Ok(s) => s,
        Err(_) => return links,
    };

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Ok(url) = base_url.join(href.trim()) {
                links.push(url);
            }
        }
    }

    links
}

/// Heuristic 3: every link inside the episode-listing container, falling
/// back to the generic main-content container
///
/// Bare same-page anchors and links resolving to a different origin than
/// `base_url` are excluded.
fn links_from_content_container(document: &Html, base_url: &Url) -> Vec<Url> {
    let mut links = Vec::new();

    let container = ["div.episodes", "main"].into_iter().find_map(|selector_str| {
        let selector = Selector::parse(selector_str).ok()?;
        document.select(&selector).next()
    });

    let container = match container {
        Some(c) => c,
        None => return links,
    };

    let anchor_selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return links,
    };

    for element in container.select(&anchor_selector) {
        let href = match element.value().attr("href") {
            Some(h) => h.trim(),
            None => continue,
        };

        // Same-page anchors never lead to an episode page
        if href.is_empty() || href.starts_with('#') {
            continue;
        }

        if let Ok(url) = base_url.join(href) {
            if url.origin() == base_url.origin() {
                links.push(url);
            }
        }
    }

    links
}

/// Resolves the first `a[href]` inside an element against the base URL
fn first_link_target(element: ElementRef<'_>, base_url: &Url) -> Option<Url> {
    let selector = Selector::parse("a[href]").ok()?;

    element
        .select(&selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| base_url.join(href.trim()).ok())
}
