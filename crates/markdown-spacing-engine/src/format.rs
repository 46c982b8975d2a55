//! Blank-line normalization.
//!
//! [`format`] makes one forward pass over the lines of a document, placing a
//! blank line around every heading, fenced code block and list block, and
//! stripping a trailing `:` from headings. A second pass then collapses runs
//! of blank lines so the separators added by the first pass never double up.
//!
//! Separators are decided before the line they precede is emitted, so no
//! pass ever inserts into the middle of the output.

use crate::classify::{
    LineKind, classify, is_blank, is_closing_fence, is_heading, is_list_item, is_list_line,
};

/// Reformats `content`, returning the new document text.
///
/// Lines are split on `'\n'` only. A trailing newline produces a final empty
/// line and therefore survives, and a `'\r'` stays part of its line.
pub fn format(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + lines.len() / 4);

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        match classify(line) {
            LineKind::Heading => {
                if follows_content(&lines, i) {
                    out.push("");
                }
                let heading = strip_heading_colon(line);
                log::debug!(
                    "heading on line {}{}",
                    i + 1,
                    if heading.len() < line.len() { ", trailing colon stripped" } else { "" }
                );
                out.push(heading);
                if precedes_content(&lines, i) {
                    out.push("");
                }
            }
            LineKind::Fence => {
                if follows_content(&lines, i) {
                    out.push("");
                }
                out.push(line);

                let end = find_closing_fence(&lines, i + 1);
                match end {
                    Some(close) => log::debug!("code block on lines {}..={}", i + 1, close + 1),
                    None => log::debug!("unterminated code block from line {}", i + 1),
                }
                let end = end.unwrap_or(lines.len() - 1);

                // Block content is copied as-is, never reformatted.
                out.extend_from_slice(&lines[i + 1..end + 1]);
                if precedes_content(&lines, end) {
                    out.push("");
                }
                i = end;
            }
            LineKind::ListItem => {
                if i > 0 && !is_list_item(lines[i - 1]) && !is_blank(lines[i - 1]) {
                    out.push("");
                }
                out.push(line);

                let mut end = i;
                let mut items = 1;
                while let Some(next) = lines.get(end + 1)
                    && is_list_line(next)
                {
                    if is_list_item(next) {
                        items += 1;
                    }
                    out.push(*next);
                    end += 1;
                }
                log::debug!("list of {items} items on lines {}..={}", i + 1, end + 1);

                if precedes_content(&lines, end) {
                    out.push("");
                }
                i = end;
            }
            LineKind::Continuation | LineKind::Blank | LineKind::Plain => out.push(line),
        }

        i += 1;
    }

    collapse_blank_lines(out).join("\n")
}

/// Whether [`format`] would leave `content` unchanged.
pub fn is_formatted(content: &str) -> bool {
    format(content) == content
}

/// Removes a single trailing `:` from a heading line.
///
/// Non-heading lines are returned untouched, as is any other trailing
/// punctuation.
pub fn strip_heading_colon(line: &str) -> &str {
    if !is_heading(line) {
        return line;
    }
    line.strip_suffix(':').unwrap_or(line)
}

/// Keeps the first blank line of every run and drops the rest.
///
/// A blank line that is kept is emitted as-is, including any whitespace it
/// holds.
pub fn collapse_blank_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut collapsed = Vec::new();
    let mut prev_blank = false;

    for line in lines {
        let blank = is_blank(line);
        if !blank || !prev_blank {
            collapsed.push(line);
        }
        prev_blank = blank;
    }

    collapsed
}

/// Index of the first closing fence at or after `from`.
fn find_closing_fence(lines: &[&str], from: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| is_closing_fence(line))
        .map(|(idx, _)| idx)
}

/// The source line before `idx` exists and has content.
fn follows_content(lines: &[&str], idx: usize) -> bool {
    idx > 0 && !is_blank(lines[idx - 1])
}

/// The source line after `idx` exists and has content.
fn precedes_content(lines: &[&str], idx: usize) -> bool {
    lines.get(idx + 1).is_some_and(|next| !is_blank(next))
}
