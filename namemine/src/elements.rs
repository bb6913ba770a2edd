//! Per-file element sets: the bridge between the visitor and the corpus.
//!
//! `file_elements` runs the lexical pass and the AST pass over one file and
//! condenses the raw occurrence lists into ordered `(name, count)` tables.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::ExtractorConfig;
use crate::constants::QUALIFIER_SEPARATOR;
use crate::lexical;
use crate::visitor::ElementVisitor;

/// Everything mined from one Python file, per category.
///
/// Identifier and string categories list unique names with their in-file
/// occurrence counts, ordered by descending count with first-seen order
/// breaking ties. Comments and docstrings are plain text in file order.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SourceElementSet {
    /// Leading comment block plus module docstring.
    pub header: Option<String>,
    pub imports: Vec<(String, usize)>,
    pub classes: Vec<(String, usize)>,
    pub functions: Vec<(String, usize)>,
    pub variables: Vec<(String, usize)>,
    pub calls: Vec<(String, usize)>,
    pub strings: Vec<(String, usize)>,
    /// Comment chunks in file order. Prose categories keep no counts.
    pub comments: Vec<String>,
    /// Class and function docstrings in file order.
    pub docstrings: Vec<String>,
    /// Whether the AST pass ran. `false` means the file failed to parse and
    /// only the lexical categories are populated.
    pub parsed: bool,
    /// Whether the visitor stopped early on pathologically nested code.
    pub recursion_limit_hit: bool,
    /// The parser's message when `parsed` is `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

impl SourceElementSet {
    /// Iterates over every name in the identifier categories (imports,
    /// classes, functions, variables, calls).
    pub fn identifier_names(&self) -> impl Iterator<Item = &str> {
        self.imports
            .iter()
            .chain(&self.classes)
            .chain(&self.functions)
            .chain(&self.variables)
            .chain(&self.calls)
            .map(|(name, _)| name.as_str())
    }
}

/// Extracts the element set of one Python source file.
///
/// The lexical pass always runs; when the file does not parse, the result
/// degrades to the lexical categories instead of discarding the file.
#[must_use]
pub fn file_elements(source: &str, config: &ExtractorConfig) -> SourceElementSet {
    let lexical = lexical::scan_source(source, config);
    let mut set = SourceElementSet {
        header: lexical.header,
        comments: lexical.comments,
        ..SourceElementSet::default()
    };

    match ruff_python_parser::parse_module(source) {
        Ok(parsed) => {
            let module = parsed.into_syntax();
            let mut visitor = ElementVisitor::new(config);
            visitor.visit_module(&module);
            set.parsed = true;
            set.recursion_limit_hit = visitor.recursion_limit_hit;
            set.imports = countify(visitor.imports);
            set.classes = countify(visitor.classes);
            set.functions = countify(visitor.functions);
            set.variables = strip_variable_scopes(countify(uniquify(visitor.variables)));
            set.calls = countify(visitor.calls);
            set.strings = countify(visitor.strings);
            set.docstrings = visitor.docstrings;
        }
        Err(err) => {
            set.parse_error = Some(err.to_string());
        }
    }

    set
}

/// Condenses an occurrence list into `(name, count)` pairs.
///
/// Pairs keep first-seen order, then a stable sort moves higher counts to
/// the front, so equal counts stay in encounter order and the output is
/// deterministic for identical input.
#[must_use]
pub fn countify(names: Vec<String>) -> Vec<(String, usize)> {
    let mut ordered: Vec<(String, usize)> = Vec::new();
    for name in names {
        match ordered.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, count)) => *count += 1,
            None => ordered.push((name, 1)),
        }
    }
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    ordered
}

/// Deduplicates an occurrence list, keeping first-seen order.
fn uniquify(names: Vec<String>) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Strips scope prefixes from deduplicated variable paths.
///
/// Qualified paths are a set by this point: reassigning `total` inside one
/// function is a single use of the name, while `parse|total` and
/// `render|total` are distinct paths. After stripping, identical leaves are
/// merged by summing their counts.
fn strip_variable_scopes(variables: Vec<(String, usize)>) -> Vec<(String, usize)> {
    let mut merged: Vec<(String, usize)> = Vec::new();
    for (path, count) in variables {
        let name = match path.rfind(QUALIFIER_SEPARATOR) {
            Some(idx) => path[idx + QUALIFIER_SEPARATOR.len_utf8()..].to_owned(),
            None => path,
        };
        match merged.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing_count)) => *existing_count += count,
            None => merged.push((name, count)),
        }
    }
    merged.sort_by(|a, b| b.1.cmp(&a.1));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elements(source: &str) -> SourceElementSet {
        file_elements(source, &ExtractorConfig::default())
    }

    fn names(category: &[(String, usize)]) -> Vec<&str> {
        category.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[test]
    fn countify_orders_by_count_then_first_seen() {
        let counted = countify(vec![
            "beta".to_owned(),
            "alpha".to_owned(),
            "beta".to_owned(),
            "gamma".to_owned(),
        ]);
        assert_eq!(
            counted,
            [
                ("beta".to_owned(), 2),
                ("alpha".to_owned(), 1),
                ("gamma".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn imports_keep_dotted_paths() {
        let set = elements("import os.path\nfrom collections import OrderedDict\n");
        assert_eq!(names(&set.imports), ["os.path", "collections.OrderedDict"]);
    }

    #[test]
    fn future_imports_are_skipped() {
        let set = elements("from __future__ import annotations\n");
        assert!(set.imports.is_empty());
    }

    #[test]
    fn definitions_are_scope_qualified() {
        let source = "class Parser:\n    def parse_file(self, path):\n        total = 0\n";
        let set = elements(source);
        assert_eq!(names(&set.classes), ["Parser"]);
        assert_eq!(names(&set.functions), ["Parser.parse_file"]);
        // Parameters are recorded in the scope of the function they define.
        assert_eq!(names(&set.variables), ["path", "total"]);
    }

    #[test]
    fn keyword_argument_names_join_functions() {
        let source = "def setup():\n    connect(timeout_seconds=5)\n";
        let set = elements(source);
        assert!(set
            .functions
            .iter()
            .any(|(name, _)| name == "setup.timeout_seconds"));
    }

    #[test]
    fn same_variable_in_two_scopes_counts_twice() {
        let source = "def first():\n    total = 0\n\ndef second():\n    total = 0\n";
        let set = elements(source);
        assert_eq!(set.variables, [("total".to_owned(), 2)]);
    }

    #[test]
    fn reassignment_within_one_scope_counts_once() {
        let source = "def first():\n    total = 0\n    total = 1\n";
        let set = elements(source);
        assert_eq!(set.variables, [("total".to_owned(), 1)]);
    }

    #[test]
    fn filtered_def_name_adds_no_scope_segment() {
        // `ab` is below the name-length threshold: its body is qualified as
        // if defined directly at module level.
        let source = "def ab():\n    counter = 0\n";
        let set = elements(source);
        assert!(set.functions.is_empty());
        assert_eq!(names(&set.variables), ["counter"]);
    }

    #[test]
    fn assignment_targets_precede_value_bindings() {
        let source = "first_total = (second_total := compute())\n";
        let set = elements(source);
        assert_eq!(names(&set.variables), ["first_total", "second_total"]);
    }

    #[test]
    fn calls_resolve_dotted_receivers() {
        let source = "import os\nresult = os.path.basename(name)\n";
        let set = elements(source);
        assert_eq!(names(&set.calls), ["os.path.basename"]);
    }

    #[test]
    fn ignorable_method_calls_are_dropped() {
        let set = elements("parts.append(item)\nwords.startswith(prefix)\n");
        assert!(set.calls.is_empty());
    }

    #[test]
    fn self_receiver_is_stripped_from_calls() {
        let source =
            "class Walker:\n    def walk(self):\n        self.collector.gather_files()\n";
        let set = elements(source);
        assert_eq!(names(&set.calls), ["collector.gather_files"]);
    }

    #[test]
    fn only_short_strings_are_dropped() {
        let set = elements("a_value = 'xy'\nb_value = '123456789'\nc_value = 'hello world'\n");
        assert_eq!(names(&set.strings), ["123456789", "hello world"]);
    }

    #[test]
    fn docstrings_are_separate_from_strings() {
        let source = "def compute():\n    \"\"\"Compute the running total.\"\"\"\n    return 'literal text'\n";
        let set = elements(source);
        assert_eq!(set.docstrings, ["Compute the running total."]);
        assert_eq!(names(&set.strings), ["literal text"]);
    }

    #[test]
    fn short_docstrings_are_still_recorded() {
        let source = "def ping():\n    \"\"\"ok\"\"\"\n    pass\n";
        let set = elements(source);
        assert_eq!(set.docstrings, ["ok"]);
    }

    #[test]
    fn module_docstring_lands_in_header_not_docstrings() {
        let set = elements("\"\"\"Module summary text.\"\"\"\nx_value = 1\n");
        assert_eq!(set.header.as_deref(), Some("Module summary text."));
        assert!(set.docstrings.is_empty());
    }

    #[test]
    fn unparseable_file_degrades_to_lexical_elements() {
        let source = "# A broken but commented file.\ndef incomplete(:\n";
        let set = elements(source);
        assert!(!set.parsed);
        assert!(set.parse_error.is_some());
        assert_eq!(set.header.as_deref(), Some("A broken but commented file."));
        assert!(set.imports.is_empty());
    }

    #[test]
    fn loop_targets_are_recorded_without_scope() {
        let source = "def scan():\n    for entry in entries:\n        handle(entry)\n";
        let set = elements(source);
        assert!(set.variables.iter().any(|(name, _)| name == "entry"));
    }

    #[test]
    fn attribute_assignment_records_dotted_variable() {
        let source = "class Tally:\n    def bump(self):\n        self.running_total = 1\n";
        let set = elements(source);
        assert_eq!(names(&set.variables), ["running_total"]);
    }
}
