//! Detection of `http(s)://` links in cell text

/// Characters stripped from the end of a link found inside prose
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '\''];

/// Check whether a string names a remote resource (`http://` or `https://`)
///
/// The scheme is matched case-insensitively and must start the string.
pub fn is_remote(s: &str) -> bool {
    lazy_regex::regex_is_match!(r"^(?i:https?)://", s)
}

/// Find every link in a piece of cell text
///
/// A link starts at `http://` or `https://` and runs to the next whitespace,
/// `<`, `>` or `"`. Trailing sentence punctuation is not part of the link.
/// A cell holding nothing but one URL yields that URL unchanged.
///
/// # Examples
/// ```
/// use linkopener_core::hyperlink::find_links;
///
/// assert_eq!(find_links("https://example.com/a"), vec!["https://example.com/a"]);
/// assert_eq!(
///     find_links("docs: http://a.example, mirror https://b.example."),
///     vec!["http://a.example", "https://b.example"]
/// );
/// assert!(find_links("no links here").is_empty());
/// ```
pub fn find_links(text: &str) -> Vec<&str> {
    lazy_regex::regex!(r#"(?i:https?)://[^\s<>"]+"#)
        .find_iter(text)
        .map(|m| trim_link(m.as_str()))
        .filter(|link| !has_empty_host(link))
        .collect()
}

/// Strip trailing punctuation and closing parentheses that have no opening
/// partner inside the link, so `(https://a.example)` yields the bare link
/// while `https://en.wikipedia.org/wiki/Rust_(language)` stays whole.
fn trim_link(mut link: &str) -> &str {
    loop {
        let mut trimmed = link.trim_end_matches(TRAILING_PUNCTUATION);
        if let Some(inner) = trimmed.strip_suffix(')') {
            if trimmed.matches('(').count() < trimmed.matches(')').count() {
                trimmed = inner;
            }
        }
        if trimmed.len() == link.len() {
            return link;
        }
        link = trimmed;
    }
}

fn has_empty_host(link: &str) -> bool {
    link.split_once("://")
        .map_or(true, |(_, rest)| rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("http://example.com/file.xlsx"));
        assert!(is_remote("https://www.dropbox.com/s/abc/file.xlsx?dl=1"));
        assert!(is_remote("HTTPS://EXAMPLE.COM"));
        assert!(!is_remote("/home/user/links.xlsx"));
        assert!(!is_remote("links.xlsx"));
        assert!(!is_remote("ftp://example.com/file.xlsx"));
        assert!(!is_remote("./http://not-really.xlsx"));
    }

    #[test]
    fn test_whole_cell_url() {
        assert_eq!(
            find_links("https://example.com/path?q=1&r=2#frag"),
            vec!["https://example.com/path?q=1&r=2#frag"]
        );
    }

    #[test]
    fn test_links_inside_text() {
        assert_eq!(
            find_links("see <https://a.example/x> and \"http://b.example\"!"),
            vec!["https://a.example/x", "http://b.example"]
        );
        assert_eq!(
            find_links("line one\nhttps://c.example/page."),
            vec!["https://c.example/page"]
        );
    }

    #[test]
    fn test_parenthesized_links() {
        assert_eq!(
            find_links("(https://a.example)"),
            vec!["https://a.example"]
        );
        assert_eq!(
            find_links("mirror (see https://b.example/x)."),
            vec!["https://b.example/x"]
        );
        assert_eq!(
            find_links("https://en.wikipedia.org/wiki/Rust_(language)"),
            vec!["https://en.wikipedia.org/wiki/Rust_(language)"]
        );
        assert_eq!(
            find_links("(https://en.wikipedia.org/wiki/Rust_(language))"),
            vec!["https://en.wikipedia.org/wiki/Rust_(language)"]
        );
    }

    #[test]
    fn test_no_links() {
        assert!(find_links("").is_empty());
        assert!(find_links("42").is_empty());
        assert!(find_links("mailto:someone@example.com").is_empty());
        assert!(find_links("https://").is_empty());
        assert!(find_links("https://.").is_empty());
    }
}
