pub mod directory;
pub mod head_to_head;
pub mod league;
pub mod player;
pub mod ranking;

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

#[derive(Debug)]
pub enum ParsingError {
    /// A structural element with no defined fallback is absent; the message
    /// names the section that could not be located.
    MissingElement(String),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::MissingElement(section) => {
                write!(f, "Expected page element not found: {}", section)
            }
        }
    }
}

// /league/{league}/player/XXXXXXXX-XXXX-... with an optional query string
static TRAILING_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r".*/([^/?]*)").unwrap());

/// Last "/"-delimited segment of an href, query string stripped. This is how
/// player ids are recovered from profile links.
pub(crate) fn trailing_segment(href: &str) -> Option<&str> {
    TRAILING_SEGMENT
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|segment| !segment.is_empty())
}

/// All text of an element, one trimmed string per non-blank text node. The
/// equivalent of iterating BeautifulSoup's stripped_strings.
pub(crate) fn stripped_strings(element: ElementRef) -> Vec<String> {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_segment_strips_path_and_query() {
        assert_eq!(
            trailing_segment("/league/NCMelee/player/abcd-1234"),
            Some("abcd-1234")
        );
        assert_eq!(
            trailing_segment("/league/NCMelee/player/abcd-1234?player_hth=efgh"),
            Some("abcd-1234")
        );
        assert_eq!(trailing_segment("/league/NCMelee/player/"), None);
    }
}
