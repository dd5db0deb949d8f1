//! Identifier extraction from Transfermarkt detail URLs.

use regex::Regex;

// Detail URLs follow /{slug}/{page}/{kind}/{id} with optional season and
// transfer suffixes, e.g. /erling-haaland/transfers/spieler/418560/transfer_id/111
const URL_PATTERN: &str = r"/(?P<code>[^/]+)/(?P<category>[^/]+)/(?P<section>[^/]+)/(?P<id>\d+)(?:/saison_id/(?P<season_id>\d+))?(?:/transfer_id/(?P<transfer_id>\d+))?";

/// Pull one identifier token (`id`, `season_id` or `transfer_id`) out of a
/// Transfermarkt detail URL. Returns `None` when the URL does not follow the
/// known path pattern or does not carry the requested token.
pub fn extract_from_url(url: &str, token: &str) -> Option<String> {
    let re = Regex::new(URL_PATTERN).unwrap();
    let caps = re.captures(url)?;
    caps.name(token).map(|m| m.as_str().to_string())
}

/// Default token: the generic numeric id segment.
pub fn extract_id(url: &str) -> Option<String> {
    extract_from_url(url, "id")
}
