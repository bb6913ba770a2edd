//! Fixed thresholds, ignore lists and comment-noise patterns.
//!
//! The ignore list and the length thresholds were tuned empirically against a
//! large GitHub corpus; downstream splitter training data depends on them, so
//! they must not drift between releases.

mod limits;
mod regexes;
mod sets;

pub use limits::{CONFIG_FILENAME, MAX_RECURSION_DEPTH, QUALIFIER_SEPARATOR};
pub use regexes::{
    get_coding_comment_re, get_emacs_modeline_re, get_nontext_comment_re, get_vim_modeline_re,
};
pub use sets::{get_default_exclude_folders, get_ignorable_names};

pub use get_coding_comment_re as CODING_COMMENT_RE;
pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
pub use get_emacs_modeline_re as EMACS_MODELINE_RE;
pub use get_ignorable_names as IGNORABLE_NAMES;
pub use get_nontext_comment_re as NONTEXT_COMMENT_RE;
pub use get_vim_modeline_re as VIM_MODELINE_RE;
