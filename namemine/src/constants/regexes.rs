use regex::Regex;
use std::sync::OnceLock;

/// Returns the compiled regex for PEP 263 encoding-declaration comments.
pub fn get_coding_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^[ \t\v]*.*?coding[:=]").expect("Invalid coding comment regex pattern")
    })
}

/// Returns the compiled regex for vim modeline comments.
pub fn get_vim_modeline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^[ \t\v]*vim\b").expect("Invalid vim modeline regex pattern"))
}

/// Returns the compiled regex for comment text with no alphabetic content
/// (separator rules, box-drawing lines).
pub fn get_nontext_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^[^A-Za-z]+$").expect("Invalid nontext comment regex pattern"))
}

/// Returns the compiled regex for emacs mode markers (`-*- mode: ... -*-`).
pub fn get_emacs_modeline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^[ \t\v]*-\*-[ \t]+mode:").expect("Invalid emacs modeline regex pattern")
    })
}
