use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

lazy_static::lazy_static! {
    static ref TRAILING_ID: Regex = Regex::new(r"-\d+$").unwrap();
}

/// A player photo discovered on a roster page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub player_id: String,
    pub src: Url,
}

/// Scan a rendered roster page for player photo candidates.
///
/// An image qualifies only when its enclosing link points at a player
/// profile; everything else on the page (logos, sponsors, placeholders)
/// is dropped. Duplicate player ids are kept in order - the download loop
/// dedups against the set of ids it has actually saved.
pub fn extract_candidates(html: &str, page_url: &Url) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("img").unwrap();
    let mut candidates = Vec::new();

    for img in document.select(&selector) {
        let src = match img.value().attr("src") {
            Some(src) => src,
            None => continue,
        };
        if is_noise_src(src) {
            continue;
        }

        // Strict rule: the photo must sit inside a /player/ profile link
        let href = match enclosing_link(&img) {
            Some(href) => href,
            None => continue,
        };
        let link = match page_url.join(&href) {
            Ok(link) => link,
            Err(_) => continue,
        };
        if !link.as_str().contains("/player/") {
            continue;
        }

        let player_id = match player_slug(&link) {
            Some(id) => id,
            None => continue,
        };

        // Resolve relative srcs against the page URL
        if let Ok(resolved) = page_url.join(src) {
            candidates.push(Candidate {
                player_id,
                src: resolved,
            });
        }
    }

    candidates
}

/// Check if an image source is a placeholder, vector or inline-data asset
fn is_noise_src(src: &str) -> bool {
    src.is_empty() || src.contains("placeholder") || src.contains(".svg") || src.contains("base64")
}

/// Walk up the DOM to the nearest enclosing <a href>
fn enclosing_link(img: &ElementRef) -> Option<String> {
    img.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}

/// Derive a player id from a profile link: last path segment with any
/// trailing numeric id stripped ("nome-cognome-123" -> "nome-cognome").
/// Idempotent on already-clean slugs.
pub fn player_slug(link: &Url) -> Option<String> {
    let segment = link.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let slug = TRAILING_ID.replace(segment, "");
    if slug.is_empty() {
        None
    } else {
        Some(slug.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://www.legaseriea.it/it/team/atalanta/squadra").unwrap()
    }

    #[test]
    fn test_player_slug_strips_trailing_id() {
        let link = Url::parse("https://www.legaseriea.it/it/player/nome-cognome-123").unwrap();
        assert_eq!(player_slug(&link), Some("nome-cognome".to_string()));
    }

    #[test]
    fn test_player_slug_idempotent_on_clean_slug() {
        let link = Url::parse("https://www.legaseriea.it/it/player/nome-cognome").unwrap();
        assert_eq!(player_slug(&link), Some("nome-cognome".to_string()));
    }

    #[test]
    fn test_extract_candidates() {
        let html = r#"
            <html><body>
                <a href="/it/player/mario-rossi-42">
                    <img src="/photos/mario-rossi.jpg">
                </a>
                <a href="/it/player/luigi-bianchi-7">
                    <img src="https://cdn.example.com/luigi-bianchi.png">
                </a>
            </body></html>
        "#;

        let candidates = extract_candidates(html, &page_url());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].player_id, "mario-rossi");
        assert_eq!(
            candidates[0].src.as_str(),
            "https://www.legaseriea.it/photos/mario-rossi.jpg"
        );
        assert_eq!(candidates[1].player_id, "luigi-bianchi");
        assert_eq!(
            candidates[1].src.as_str(),
            "https://cdn.example.com/luigi-bianchi.png"
        );
    }

    #[test]
    fn test_noise_sources_are_filtered() {
        let html = r#"
            <html><body>
                <a href="/it/player/mario-rossi-42"><img src="/img/placeholder-player.jpg"></a>
                <a href="/it/player/mario-rossi-42"><img src="/img/crest.svg"></a>
                <a href="/it/player/mario-rossi-42"><img src="data:image/png;base64,AAAA"></a>
                <a href="/it/player/mario-rossi-42"><img></a>
            </body></html>
        "#;

        assert!(extract_candidates(html, &page_url()).is_empty());
    }

    #[test]
    fn test_requires_enclosing_player_link() {
        let html = r#"
            <html><body>
                <img src="/photos/orphan.jpg">
                <a href="/it/news/match-report"><img src="/photos/stadium.jpg"></a>
            </body></html>
        "#;

        assert!(extract_candidates(html, &page_url()).is_empty());
    }

    #[test]
    fn test_duplicate_players_share_one_id() {
        let html = r#"
            <html><body>
                <a href="/it/player/mario-rossi-42"><img src="/photos/a.jpg"></a>
                <a href="/it/player/mario-rossi-42"><img src="/photos/b.jpg"></a>
            </body></html>
        "#;

        let candidates = extract_candidates(html, &page_url());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].player_id, candidates[1].player_id);
    }
}
