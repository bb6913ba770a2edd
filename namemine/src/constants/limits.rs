/// Maximum recursion depth for AST visitor to prevent stack overflow on deeply nested code.
pub const MAX_RECURSION_DEPTH: usize = 400;
/// Default configuration filename.
pub const CONFIG_FILENAME: &str = ".namemine.toml";
/// Separator between a scope path and a variable name in a qualified path.
///
/// Must not be a character that can appear in a dotted Python name, otherwise
/// stripping the scope prefix would truncate attribute-chain variables.
pub const QUALIFIER_SEPARATOR: char = '|';
