use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Returns the default set of names excluded from element extraction.
///
/// Combines Python special (dunder) method names, common built-in functions,
/// and a short list of ubiquitous method-like identifiers. Symbols in this
/// set carry no signal about what a program does, so counting them would only
/// flatten the frequency table.
pub fn get_ignorable_names() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for name in [
            // Python idioms.
            "_",
            // Python special method names.
            "__abs__",
            "__add__",
            "__and__",
            "__ceil__",
            "__cmp__",
            "__coerce__",
            "__complex__",
            "__contains__",
            "__copy__",
            "__deepcopy__",
            "__del__",
            "__delete__",
            "__delitem__",
            "__dir__",
            "__div__",
            "__divmod__",
            "__eq__",
            "__float__",
            "__floor__",
            "__floordiv__",
            "__format__",
            "__ge__",
            "__get__",
            "__getitem__",
            "__gt__",
            "__hash__",
            "__hex__",
            "__iadd__",
            "__iand__",
            "__idiv__",
            "__ifloordiv__",
            "__ilshift__",
            "__imod__",
            "__import__",
            "__imul__",
            "__index__",
            "__init__",
            "__int__",
            "__invert__",
            "__ior__",
            "__ipow__",
            "__irshift__",
            "__isub__",
            "__iter__",
            "__itruediv__",
            "__ixor__",
            "__le__",
            "__len__",
            "__long__",
            "__lshift__",
            "__lt__",
            "__missing__",
            "__mod__",
            "__mul__",
            "__ne__",
            "__neg__",
            "__new__",
            "__nonzero__",
            "__oct__",
            "__or__",
            "__pos__",
            "__pow__",
            "__radd__",
            "__rand__",
            "__rdiv__",
            "__rdivmod__",
            "__repr__",
            "__reversed__",
            "__rfloordiv__",
            "__rlshift__",
            "__rmod__",
            "__rmul__",
            "__ror__",
            "__round__",
            "__rpow__",
            "__rrshift__",
            "__rshift__",
            "__rsub__",
            "__rtruediv__",
            "__rxor__",
            "__set__",
            "__setitem__",
            "__sizeof__",
            "__str__",
            "__sub__",
            "__truediv__",
            "__trunc__",
            "__unicode__",
            "__xor__",
            // Common Python built-in functions.
            // See https://docs.python.org/3/library/functions.html
            "abs",
            "all",
            "any",
            "ascii",
            "bin",
            "bool",
            "bytearray",
            "bytes",
            "callable",
            "chr",
            "classmethod",
            "cls",
            "compile",
            "complex",
            "delattr",
            "dict",
            "dir",
            "divmod",
            "enumerate",
            "eval",
            "exec",
            "filter",
            "float",
            "format",
            "frozenset",
            "getattr",
            "globals",
            "hasattr",
            "hash",
            "help",
            "hex",
            "id",
            "input",
            "int",
            "isinstance",
            "issubclass",
            "iter",
            "len",
            "list",
            "locals",
            "map",
            "max",
            "memoryview",
            "min",
            "next",
            "object",
            "oct",
            "ord",
            "pow",
            "print",
            "property",
            "range",
            "repr",
            "reversed",
            "round",
            "self",
            "set",
            "setattr",
            "slice",
            "sorted",
            "staticmethod",
            "str",
            "sum",
            "super",
            "tuple",
            "type",
            "vars",
            "zip",
            // Additional ubiquitous method-like identifiers.
            "add",
            "append",
            "appendleft",
            "clear",
            "copy",
            "endswith",
            "find",
            "get",
            "index",
            "items",
            "join",
            "keys",
            "lstrip",
            "pop",
            "popitem",
            "replace",
            "rstrip",
            "startswith",
            "strip",
            "sub",
            "update",
            "values",
            // Exception names raised in nearly every program.
            "KeyError",
            "RuntimeError",
            "StopIteration",
            "SystemExit",
            "ValueError",
        ] {
            set.insert(name);
        }
        set
    })
}

/// Returns default folders excluded from repository scanning.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut set = FxHashSet::default();
        for folder in [
            "__pycache__",
            ".pytest_cache",
            ".mypy_cache",
            ".ruff_cache",
            ".tox",
            "htmlcov",
            ".eggs",
            "venv",
            ".venv",
            "env",
            ".env",
            ".nox",
            "build",
            "dist",
            "site-packages",
            "node_modules",
            ".git",
            ".svn",
            ".hg",
            ".idea",
            ".vscode",
            ".cache",
        ] {
            set.insert(folder);
        }
        set
    })
}
