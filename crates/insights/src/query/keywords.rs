//! Fixed keyword vocabulary for intent classification.

pub const TOP: &[&str] = &["top", "best", "highest", "top 5"];
pub const BOTTOM: &[&str] = &["bottom", "worst", "lowest", "bottom 5"];
pub const COMPANY: &[&str] = &["company", "companies"];
pub const REVENUE: &[&str] = &["revenue", "sales"];
pub const PROFIT: &[&str] = &["profit", "income", "earnings"];
pub const COUNT: &[&str] = &["how many", "number of", "count"];
pub const SUPERLATIVE: &[&str] = &["highest", "maximum", "max"];

/// Whether any keyword occurs as a substring of the (already lowercased) query.
pub fn mentions_any(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| query.contains(k))
}

/// Title-case a string the way Python's `str.title` does: a letter is
/// uppercased when the preceding character is not a letter, otherwise
/// lowercased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_any_is_substring_based() {
        assert!(mentions_any("how many companies", COUNT));
        assert!(mentions_any("stop", TOP));
        assert!(!mentions_any("acme corp", COMPANY));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("acme corp"), "Acme Corp");
        assert_eq!(title_case("AT&T inc."), "At&T Inc.");
        assert_eq!(title_case("o'neil-smith"), "O'Neil-Smith");
        assert_eq!(title_case("3m company"), "3M Company");
    }
}
