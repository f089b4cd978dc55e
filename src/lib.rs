#![allow(clippy::module_inception)]

use std::{
    fs,
    io::BufRead,
    path::{Path, PathBuf},
};

use crate::errors::errors::{Error, ErrorLexeme, ErrorTip};

pub mod automata;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

/// Byte offset into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.0..self.end.0
    }
}

/// Appends a newline to every line of `content`, including the last one.
///
/// Mirrors line-by-line reading where each line is re-joined with `\n`:
/// an empty input stays empty and carriage returns are kept as-is.
pub fn normalize_lines(content: &str) -> String {
    let mut normalized = String::with_capacity(content.len() + 1);
    for line in content.split_inclusive('\n') {
        normalized.push_str(line);
        if !line.ends_with('\n') {
            normalized.push('\n');
        }
    }
    normalized
}

/// Reads a whole source file into memory with normalized line endings.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, which the
/// scanner reports as an unrecognized character.
pub fn load_source(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: PathBuf::from(path),
        source,
    })?;

    Ok(normalize_lines(&String::from_utf8_lossy(&bytes)))
}

/// Reads source lines until end of input or a line consisting of `END`.
pub fn read_source_until_end<R: BufRead>(reader: R) -> Result<String, Error> {
    let mut source = String::new();

    for line in reader.lines() {
        let line = line.map_err(|source| Error::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;

        if line == "END" {
            break;
        }

        source.push_str(&line);
        source.push('\n');
    }

    Ok(source)
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line.
pub fn get_line_at_position(content: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}


/// Renders a caret diagnostic for a scan error.
///
/// ```text
/// Error: MalformedIdentifier (`foo` is not a keyword; identifiers must contain an underscore, e.g. `foo_`)
/// -> main.src
///   |
/// 2 | int foo = 5;
///   | ----^
/// ```
pub fn render_diagnostic(error: &ErrorLexeme, source: &str, file: &Path) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.span.start.0) else {
        out.push_str(&format!("   {}\n", error.text));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
