use regex::Regex;
use std::sync::OnceLock;

/// Classification of a single line from local facts only.
///
/// Every line is classified independently: there is no parsing state, so a
/// line inside a code block classifies the same way as one outside it. The
/// formatter decides what to do with the class based on where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// One to six `#` followed by whitespace.
    Heading,
    /// Starts with three backticks.
    Fence,
    /// Starts with `"- "`.
    ListItem,
    /// Starts with two spaces. Treated as part of a preceding list block.
    Continuation,
    /// Empty or whitespace only.
    Blank,
    Plain,
}

pub const FENCE: &str = "```";
pub const LIST_MARKER: &str = "- ";
pub const CONTINUATION_INDENT: &str = "  ";

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX
        .get_or_init(|| Regex::new(r"^#{1,6}[\s\x1c-\x1f]").expect("Invalid heading regex"))
}

fn closing_fence_regex() -> &'static Regex {
    static CLOSING_FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    CLOSING_FENCE_REGEX
        .get_or_init(|| Regex::new(r"^```[\s\x1c-\x1f]*$").expect("Invalid closing fence regex"))
}

/// Classifies a line into a [`LineKind`].
///
/// Precedence is heading, fence, list item, continuation, blank. A line of
/// only spaces that starts with two of them is a continuation, not blank.
pub fn classify(line: &str) -> LineKind {
    if is_heading(line) {
        LineKind::Heading
    } else if is_fence(line) {
        LineKind::Fence
    } else if is_list_item(line) {
        LineKind::ListItem
    } else if line.starts_with(CONTINUATION_INDENT) {
        LineKind::Continuation
    } else if is_blank(line) {
        LineKind::Blank
    } else {
        LineKind::Plain
    }
}

/// Unicode `White_Space` plus the ASCII information separators
/// `\x1c`..=`\x1f`, which also count as blank.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_space)
}

pub fn is_heading(line: &str) -> bool {
    heading_regex().is_match(line)
}

pub fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE)
}

/// A fence that can close a block: three backticks and nothing but
/// whitespace after them. An info string (```` ```rust ````) never closes.
pub fn is_closing_fence(line: &str) -> bool {
    closing_fence_regex().is_match(line)
}

pub fn is_list_item(line: &str) -> bool {
    line.starts_with(LIST_MARKER)
}

/// Whether a line extends a list block: another item or an indented line.
pub fn is_list_line(line: &str) -> bool {
    is_list_item(line) || line.starts_with(CONTINUATION_INDENT)
}
