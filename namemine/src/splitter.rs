//! Identifier splitting into component words.
//!
//! Two conservative policies are provided. Both split on hard delimiters
//! (underscores, dots, digits and friends); they differ only in how eagerly
//! they split camel case. Neither attempts dictionary-based segmentation of
//! run-together words, so `foobar` always stays one component.

use serde::Deserialize;

/// Camel-case splitting policy applied after hard-delimiter splitting.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SplitterPolicy {
    /// Split camel case only in tokens without adjacent capital letters.
    #[default]
    Safe,
    /// Split camel case unconditionally.
    Simple,
}

impl SplitterPolicy {
    /// Splits `name` according to this policy.
    #[must_use]
    pub fn split(self, name: &str) -> Vec<String> {
        match self {
            Self::Safe => safe_split(name),
            Self::Simple => simple_split(name),
        }
    }
}

/// Characters that always terminate a component, in addition to ASCII digits.
fn is_hard_delimiter(c: char) -> bool {
    matches!(c, '$' | '~' | '_' | '.' | ':' | '/') || c.is_ascii_digit()
}

fn has_adjacent_capitals(token: &str) -> bool {
    let mut prev_upper = false;
    for c in token.chars() {
        let upper = c.is_uppercase();
        if upper && prev_upper {
            return true;
        }
        prev_upper = upper;
    }
    false
}

/// Splits a token at each lowercase-to-uppercase boundary.
fn camel_split_into(token: &str, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut prev_lower = false;
    for c in token.chars() {
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev_lower = c.is_lowercase();
    }
    if !current.is_empty() {
        out.push(current);
    }
}

fn hard_split(name: &str) -> impl Iterator<Item = &str> {
    name.split(is_hard_delimiter).filter(|t| !t.is_empty())
}

/// Splits `name` on hard delimiters and camel case, but leaves tokens with
/// two or more adjacent capital letters intact.
///
/// Acronym-bearing tokens such as `SQLLite` or `HTMLParser` are ambiguous
/// without dictionary knowledge, so this policy passes them through whole
/// rather than guessing wrong.
#[must_use]
pub fn safe_split(name: &str) -> Vec<String> {
    let mut parts = Vec::new();
    for token in hard_split(name) {
        if has_adjacent_capitals(token) {
            parts.push(token.to_owned());
        } else {
            camel_split_into(token, &mut parts);
        }
    }
    parts
}

/// Splits `name` on hard delimiters and every lowercase-to-uppercase
/// camel-case boundary, with no acronym guard.
#[must_use]
pub fn simple_split(name: &str) -> Vec<String> {
    let mut parts = Vec::new();
    for token in hard_split(name) {
        camel_split_into(token, &mut parts);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_delimiters_split_both_policies() {
        assert_eq!(safe_split("foo_bar"), ["foo", "bar"]);
        assert_eq!(safe_split("os.path.join"), ["os", "path", "join"]);
        assert_eq!(safe_split("a:b/c~d$e"), ["a", "b", "c", "d", "e"]);
        assert_eq!(simple_split("foo_bar"), ["foo", "bar"]);
    }

    #[test]
    fn digits_act_as_delimiters() {
        assert_eq!(safe_split("foo_bar2baz"), ["foo", "bar", "baz"]);
        assert_eq!(safe_split("utf8decode"), ["utf", "decode"]);
        assert_eq!(safe_split("2048"), Vec::<String>::new());
    }

    #[test]
    fn safe_split_breaks_plain_camel_case() {
        assert_eq!(safe_split("fooBarBaz"), ["foo", "Bar", "Baz"]);
        assert_eq!(safe_split("getValue"), ["get", "Value"]);
    }

    #[test]
    fn safe_split_preserves_adjacent_capitals() {
        assert_eq!(safe_split("SQLLite"), ["SQLLite"]);
        assert_eq!(safe_split("HTMLParser"), ["HTMLParser"]);
        assert_eq!(safe_split("parse_HTMLPage_now"), ["parse", "HTMLPage", "now"]);
    }

    #[test]
    fn simple_split_has_no_acronym_guard() {
        assert_eq!(simple_split("fooBarBaz"), ["foo", "Bar", "Baz"]);
        // The boundary is lowercase-to-uppercase, so a leading acronym run
        // stays attached to the following word.
        assert_eq!(simple_split("parseHTMLPage"), ["parse", "HTMLPage"]);
    }

    #[test]
    fn run_together_words_stay_whole() {
        assert_eq!(safe_split("foobar"), ["foobar"]);
        assert_eq!(simple_split("foobar"), ["foobar"]);
    }

    #[test]
    fn empty_and_delimiter_only_inputs_yield_nothing() {
        assert_eq!(safe_split(""), Vec::<String>::new());
        assert_eq!(safe_split("__"), Vec::<String>::new());
        assert_eq!(safe_split("._:/"), Vec::<String>::new());
    }

    #[test]
    fn policy_dispatch() {
        assert_eq!(SplitterPolicy::Safe.split("SQLLite"), ["SQLLite"]);
        assert_eq!(SplitterPolicy::Simple.split("fooBar"), ["foo", "Bar"]);
    }
}
