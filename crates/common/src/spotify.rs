//! Natural-language Spotify search commands
//!
//! App entries like "Summer 25 playlist" or "In Rainbows album" are turned into
//! a `spotify:search:` URI that the platform URL handler passes to the Spotify
//! client.
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::Regex;

/// Scheme prefix shared by Spotify URIs, raw or synthesized
///
/// The dispatcher uses it to recognize entries that should go straight to the
/// URI handler.
pub const SEARCH_SCHEME: &str = "spotify:";

static SEARCH_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(.*)\s+(playlist|album|track|song)").expect("Search command regex is valid.")
});

// Only spaces need escaping inside the search term.
const SEARCH_TERM: &AsciiSet = &CONTROLS.add(b' ');

/// Parse a `<name> playlist|album|track|song` phrase into a search URI
///
/// Returns `None` when the phrase doesn't match; the caller falls back to
/// ordinary name resolution.
pub fn parse_search_command(command: &str) -> Option<String> {
    let caps = SEARCH_COMMAND.captures(command)?;
    let name = caps.get(1)?.as_str().trim();

    Some(format!(
        "spotify:search:{}",
        utf8_percent_encode(name, SEARCH_TERM)
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn playlist_phrase_becomes_search_uri() {
        assert_eq!(
            parse_search_command("Summer 25 playlist").as_deref(),
            Some("spotify:search:Summer%2025")
        );
    }

    #[test]
    fn all_media_keywords_match() {
        for keyword in ["playlist", "album", "track", "song"] {
            assert_eq!(
                parse_search_command(&format!("daft punk {keyword}")).as_deref(),
                Some("spotify:search:daft%20punk"),
                "keyword: {keyword}"
            );
        }
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(
            parse_search_command("lofi beats PLAYLIST").as_deref(),
            Some("spotify:search:lofi%20beats")
        );
    }

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse_search_command("hello world"), None);
        assert_eq!(parse_search_command("playlist"), None);
    }

    #[test]
    fn trailing_words_after_keyword_are_ignored() {
        assert_eq!(
            parse_search_command("Summer 25 playlist on spotify").as_deref(),
            Some("spotify:search:Summer%2025")
        );
    }
}
