use markdown_spacing_engine::classify::{is_blank, is_closing_fence, is_fence};
use markdown_spacing_engine::{format, is_formatted};
use pretty_assertions::assert_eq;
use rstest::rstest;

const README: &str = "# Project:
A short description.
## Install
Run this:
```sh
cargo install project


# not a heading
```
Then:
- configure it
  with a file
- run it
### Notes:



Trailing paragraph.
";

const README_FORMATTED: &str = "# Project

A short description.

## Install

Run this:

```sh
cargo install project

# not a heading
```

Then:

- configure it
  with a file
- run it

### Notes

Trailing paragraph.
";

#[test]
fn formats_realistic_document() {
    assert_eq!(format(README), README_FORMATTED);
}

fn corpus() -> Vec<&'static str> {
    vec![
        README,
        "",
        "\n",
        "# Title:\nSome text",
        "Para\n```\ncode\n```\nMore",
        "Para\n- item1\n- item2\nMore",
        "First\n\n\n\nSecond",
        "Para\n```\n# h\n- x\nnever closed",
        "- a\n```\nx\n```\n- b\n# H\n- c",
        "# A\n# B\n## C:\n```\n```\n- x\n  y\n\n\n  z",
        "text\r\n# Heading\r\nmore\r\n",
        "  indented start\n- list\n   \n\t\nend",
        "```\nunterminated\n\n\n",
    ]
}

#[rstest]
fn format_is_idempotent(#[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12)] index: usize) {
    let once = format(corpus()[index]);
    assert_eq!(format(&once), once);
    assert!(is_formatted(&once));
}

#[test]
fn output_never_has_two_consecutive_blank_lines() {
    for doc in corpus() {
        let out = format(doc);
        let lines: Vec<&str> = out.split('\n').collect();
        for pair in lines.windows(2) {
            assert!(
                !(is_blank(pair[0]) && is_blank(pair[1])),
                "double blank in {out:?}"
            );
        }
    }
}

#[test]
fn code_block_lines_survive_in_order() {
    let body = [
        "# heading-like",
        "- list-like",
        "  continuation-like",
        "ends with colon:",
        "```rust",
    ];
    let doc = format!("Intro\n```\n{}\n```\nOutro", body.join("\n"));

    let out = format(&doc);
    let lines: Vec<&str> = out.split('\n').collect();
    let open = lines.iter().position(|l| is_fence(l)).unwrap();
    let close = lines
        .iter()
        .skip(open + 1)
        .position(|l| is_closing_fence(l))
        .map(|p| p + open + 1)
        .unwrap();

    assert_eq!(&lines[open + 1..close], &body[..]);
}

#[test]
fn headings_in_middle_of_document_are_isolated() {
    let out = format("a\n# One\nb\n## Two:\nc");
    let lines: Vec<&str> = out.split('\n').collect();

    for (idx, line) in lines.iter().enumerate() {
        if line.starts_with('#') {
            assert_eq!(lines[idx - 1], "");
            assert_eq!(lines[idx + 1], "");
            assert!(!line.ends_with(':'));
        }
    }
}

#[rstest]
#[case("## A::", "## A:", "## A")]
#[case("- a\n  \n\n\n  b\nx", "- a\n  \n  b\nx", "- a\n  \n  b\n\nx")]
fn known_second_pass_changes(#[case] input: &str, #[case] once: &str, #[case] twice: &str) {
    // One colon per run, and a collapsed blank can pull an indented line into a list.
    assert_eq!(format(input), once);
    assert_eq!(format(once), twice);
    assert!(is_formatted(twice));
}
