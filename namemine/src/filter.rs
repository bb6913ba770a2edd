//! Noise filtering for extracted elements.
//!
//! Short names, Python built-ins, dunder methods, and machine-oriented or
//! letter-free comments carry no vocabulary signal, so they are dropped
//! before anything reaches the splitter.

use crate::config::ExtractorConfig;
use crate::constants::{
    get_coding_comment_re, get_emacs_modeline_re, get_ignorable_names, get_nontext_comment_re,
    get_vim_modeline_re,
};

/// Returns `true` when `name` should be excluded from the collected elements.
///
/// A name is ignorable when it is shorter than the configured minimum or
/// appears in the built-in ignore list (Python special methods, built-in
/// functions and other ubiquitous identifiers) or the configured extras.
#[must_use]
pub fn ignorable_name(name: &str, config: &ExtractorConfig) -> bool {
    name.chars().count() < config.min_name_length()
        || get_ignorable_names().contains(name)
        || config
            .extra_ignorable_names
            .as_ref()
            .is_some_and(|extra| extra.iter().any(|n| n == name))
}

/// Returns `true` when a dotted name's final segment is ignorable.
///
/// Used to drop calls like `parts.append(...)` or `config.get(...)` whose
/// trailing method name is on the ignore list, regardless of the receiver.
#[must_use]
pub fn ignorable_call(name: &str, config: &ExtractorConfig) -> bool {
    let last = name.rsplit('.').next().unwrap_or(name);
    ignorable_name(last, config)
}

/// Returns `true` when a string literal should be excluded, meaning it is
/// shorter than the configured minimum.
#[must_use]
pub fn ignorable_string(value: &str, config: &ExtractorConfig) -> bool {
    value.chars().count() < config.min_string_length()
}

/// Returns `true` for comment lines that carry no prose.
///
/// Covers shebang lines, PEP 263 encoding declarations, vim/emacs modelines,
/// stripped text below the configured minimum length, and letter-free lines
/// (separator rules, box drawing). `line` is the raw comment line including
/// the `#` marker.
#[must_use]
pub fn ignorable_comment(line: &str, config: &ExtractorConfig) -> bool {
    if line.starts_with("#!") {
        return true;
    }
    let body = strip_comment_char(line);
    body.chars().count() < config.min_comment_length()
        || get_nontext_comment_re().is_match(body)
        || get_coding_comment_re().is_match(body)
        || get_vim_modeline_re().is_match(body)
        || get_emacs_modeline_re().is_match(body)
}

/// Strips leading `#` markers and surrounding whitespace from a comment line.
#[must_use]
pub fn strip_comment_char(line: &str) -> &str {
    line.trim_start_matches(['#', ' ', '\t']).trim_end()
}
