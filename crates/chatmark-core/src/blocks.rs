//! Line-oriented block rewrites: headings, blockquotes, rules, tables, and
//! the list assembly state machine.
//!
//! Precondition for every pass here: fenced code is already tokenized and the
//! inline spans are already converted, so lines either carry plain prose, a
//! dialect block marker at column zero, or markup emitted by an earlier pass.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::code::CodeBlocks;
use crate::options::FormatOptions;

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,3}) +(.+)$").unwrap());

static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^> (.*)$").unwrap());

static HR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^---$").unwrap());

static ORDERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());

static TASK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[( |x|X)\]\s*(.*)$").unwrap());

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.*)$").unwrap());

/// Block markup emitted by earlier passes. Lines starting with one of these
/// must pass through the list/paragraph assembly untouched.
const BLOCK_MARKUP_PREFIXES: &[&str] = &[
    "<h1>",
    "<h2>",
    "<h3>",
    "<blockquote>",
    "<hr",
    "<table>",
    "</tbody>",
    "<tr>",
    "<pre>",
];

fn is_block_markup(line: &str) -> bool {
    BLOCK_MARKUP_PREFIXES.iter().any(|p| line.starts_with(p))
        || CodeBlocks::is_token_line(line)
}

/// Rewrite lines with 1-3 leading `#` characters as headings of matching
/// level. Longest run wins; four or more stay literal.
pub fn headings(text: &str) -> String {
    HEADING_RE
        .replace_all(text, |caps: &Captures| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", caps[2].trim())
        })
        .into_owned()
}

/// Rewrite `> ` lines as blockquote elements, one element per line.
pub fn blockquotes(text: &str) -> String {
    QUOTE_RE
        .replace_all(text, "<blockquote>$1</blockquote>")
        .into_owned()
}

/// Rewrite lines consisting solely of `---` as rule elements.
pub fn horizontal_rules(text: &str) -> String {
    HR_RE.replace_all(text, "<hr/>").into_owned()
}

/// Rewrite `|`-delimited lines as table rows and wrap each contiguous run of
/// rows once in an enclosing table/body element.
pub fn tables(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_table = false;

    for line in text.lines() {
        match row_cells(line) {
            Some(cells) => {
                if !in_table {
                    out.push("<table><tbody>".to_string());
                    in_table = true;
                }
                let mut row = String::from("<tr>");
                for cell in cells {
                    row.push_str("<td>");
                    row.push_str(cell);
                    row.push_str("</td>");
                }
                row.push_str("</tr>");
                out.push(row);
            }
            None => {
                if in_table {
                    out.push("</tbody></table>".to_string());
                    in_table = false;
                }
                out.push(line.to_string());
            }
        }
    }

    if in_table {
        out.push("</tbody></table>".to_string());
    }

    out.join("\n")
}

/// Split a line into trimmed table cells, or `None` if it is not a row.
/// A row needs at least one `|`-delimited cell pair.
fn row_cells(line: &str) -> Option<Vec<&str>> {
    let line = line.trim();
    if !line.contains('|') || line.starts_with('<') || CodeBlocks::is_token_line(line) {
        return None;
    }

    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first() == Some(&"") {
        cells.remove(0);
    }
    if cells.last() == Some(&"") {
        cells.pop();
    }

    if cells.len() < 2 {
        return None;
    }
    Some(cells)
}

/// The kind of list currently being assembled. At most one list is active at
/// any line; differing kinds never merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
    Task,
}

impl ListKind {
    fn open(self) -> &'static str {
        match self {
            ListKind::Ordered => "<ol>",
            ListKind::Unordered => "<ul>",
            ListKind::Task => "<ul class=\"task-list\">",
        }
    }

    fn close(self) -> &'static str {
        match self {
            ListKind::Ordered => "</ol>",
            ListKind::Unordered | ListKind::Task => "</ul>",
        }
    }
}

/// Check whether any line of the text opens a list of any kind. Decides
/// between list assembly and the plain paragraph path.
pub fn contains_list_syntax(text: &str) -> bool {
    text.lines()
        .any(|l| ORDERED_RE.is_match(l) || TASK_RE.is_match(l) || BULLET_RE.is_match(l))
}

/// Fold over lines assembling lists, closing the active list whenever the
/// kind switches or a non-list line appears, and wrapping remaining prose
/// lines as paragraphs. Blank lines are dropped. Any list still active at end
/// of input is closed.
pub fn assemble_lists(text: &str, options: &FormatOptions) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut active: Option<ListKind> = None;

    for line in text.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            continue;
        }

        match classify(line, options) {
            Some((kind, item)) => {
                if active != Some(kind) {
                    if let Some(prev) = active {
                        out.push(prev.close().to_string());
                    }
                    out.push(kind.open().to_string());
                    active = Some(kind);
                }
                out.push(format!("<li>{}</li>", item));
            }
            None => {
                if let Some(kind) = active.take() {
                    out.push(kind.close().to_string());
                }
                if is_block_markup(line) {
                    out.push(line.to_string());
                } else {
                    out.push(format!("<p>{}</p>", line.trim()));
                }
            }
        }
    }

    if let Some(kind) = active {
        out.push(kind.close().to_string());
    }

    out.join("\n")
}

fn classify(line: &str, options: &FormatOptions) -> Option<(ListKind, String)> {
    if let Some(caps) = TASK_RE.captures(line) {
        let marker = if &caps[1] == " " {
            &options.unchecked_marker
        } else {
            &options.checked_marker
        };
        let item = format!("{} {}", marker, caps[2].trim());
        return Some((ListKind::Task, item.trim_end().to_string()));
    }
    if let Some(caps) = ORDERED_RE.captures(line) {
        return Some((ListKind::Ordered, caps[1].trim().to_string()));
    }
    if let Some(caps) = BULLET_RE.captures(line) {
        return Some((ListKind::Unordered, caps[1].trim().to_string()));
    }
    None
}

/// Fallback path for texts with no list syntax: group lines into
/// blank-line-delimited paragraphs, preserving single newlines as line
/// breaks. Lines already converted to block markup pass through verbatim.
pub fn paragraphs(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush_paragraph(&mut current, &mut out);
        } else if is_block_markup(line) {
            flush_paragraph(&mut current, &mut out);
            out.push(line.to_string());
        } else {
            current.push(line);
        }
    }
    flush_paragraph(&mut current, &mut out);

    out.join("\n")
}

fn flush_paragraph(current: &mut Vec<&str>, out: &mut Vec<String>) {
    if !current.is_empty() {
        out.push(format!("<p>{}</p>", current.join("<br/>")));
        current.clear();
    }
}
