/// Text written for a positive outcome by the renderers.
pub const POSITIVE_OUTCOME: &str = "Yes";
/// Text written for a negative outcome by the renderers.
pub const NEGATIVE_OUTCOME: &str = "No";
/// Extra indentation added per nesting level of the tree pretty-print.
pub const DISPLAY_INDENT: &str = "   ";
pub const DEFAULT_PREDICATE_NAME: &str = "predict";
pub const DEFAULT_PREDICATE_ARGUMENT: &str = "record";
pub const DEFAULT_INDENT_WIDTH: usize = 4;
