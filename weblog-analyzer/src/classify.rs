use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

use crate::invariants::UserAgent;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Firefox,
    Chrome,
    Safari,
    #[display("Internet Explorer")]
    InternetExplorer,
    Edge,
    Unknown,
}

// Checked in order, first match wins. Chrome agents also carry a Safari token.
static SIGNATURES: LazyLock<[(Browser, Regex); 5]> = LazyLock::new(|| {
    [
        (Browser::Firefox, signature(r"Firefox/\d+")),
        (Browser::Chrome, signature(r"Chrome/\d+")),
        (Browser::Safari, signature(r"Safari/\d+")),
        (Browser::InternetExplorer, signature(r"MSIE \d+|Trident/\d+")),
        (Browser::Edge, signature(r"Edge/\d+")),
    ]
});

fn signature(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid browser signature")
}

impl Browser {
    pub fn classify(agent: &UserAgent) -> Self {
        SIGNATURES
            .iter()
            .find(|(_, pattern)| pattern.is_match(agent.as_str()))
            .map_or(Self::Unknown, |(browser, _)| *browser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    fn classify(agent: &str) -> Browser {
        Browser::classify(&agent.parse().unwrap())
    }

    #[test]
    fn known_signatures() {
        assert_eq!(
            classify("Mozilla/5.0 (X11; Linux x86_64; rv:102.0) Gecko/20100101 Firefox/102.0"),
            Browser::Firefox
        );
        assert_eq!(classify("Mozilla/5.0 Chrome/115.0.0.0"), Browser::Chrome);
        assert_eq!(
            classify("Mozilla/5.0 (Macintosh) AppleWebKit/600.1.17 Version/8.0 Safari/600.1.17"),
            Browser::Safari
        );
        assert_eq!(
            classify("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1)"),
            Browser::InternetExplorer
        );
        assert_eq!(
            classify("Mozilla/5.0 (Windows NT 6.3; Trident/7.0; rv:11.0) like Gecko"),
            Browser::InternetExplorer
        );
        assert_eq!(classify("Mozilla/5.0 Edge/12.0"), Browser::Edge);
    }

    #[test]
    fn first_signature_wins() {
        let agent = "Mozilla/5.0 (Windows NT 10.0) AppleWebKit/537.36 Chrome/46.0.2486.0 Safari/537.36 Edge/13.10586";
        assert_eq!(classify(agent), Browser::Chrome);
        assert_eq!(classify("Safari/537.36 Firefox/40.0"), Browser::Firefox);
    }

    #[test]
    fn signatures_need_a_version() {
        assert_eq!(classify("Firefox"), Browser::Unknown);
        assert_eq!(classify("Chrome/beta"), Browser::Unknown);
        assert_eq!(classify("firefox/102"), Browser::Unknown);
    }

    #[test]
    fn unknown_agents() {
        assert_that!(classify("curl/7.68.0")).is_equal_to(Browser::Unknown);
        assert_that!(classify("")).is_equal_to(Browser::Unknown);
    }

    #[test]
    fn display_names() {
        assert_eq!(Browser::InternetExplorer.to_string(), "Internet Explorer");
        assert_eq!(Browser::Unknown.to_string(), "Unknown");
    }
}
