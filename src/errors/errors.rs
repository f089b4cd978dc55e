use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::Span;

/// Text recorded for a block comment that is never closed.
pub const UNTERMINATED_COMMENT: &str = "/*... (unterminated comment)";

/// A rejected piece of source text. Scanning never stops on one of these;
/// they are collected alongside the tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLexeme {
    pub kind: ErrorKind,
    pub text: String,
    pub span: Span,
}

impl Display for ErrorLexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl ErrorLexeme {
    pub fn get_error_name(&self) -> &str {
        match self.kind {
            ErrorKind::MalformedIdentifier => "MalformedIdentifier",
            ErrorKind::MalformedNumber => "MalformedNumber",
            ErrorKind::RejectedOperator => "RejectedOperator",
            ErrorKind::UnterminatedComment => "UnterminatedComment",
            ErrorKind::UnrecognizedCharacter => "UnrecognizedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self.kind {
            ErrorKind::MalformedIdentifier => ErrorTip::Suggestion(format!(
                "`{}` is not a keyword; identifiers must contain an underscore, e.g. `{}_`",
                self.text, self.text
            )),
            ErrorKind::MalformedNumber => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, a `.` or exponent must be followed by digits",
                self.text
            )),
            ErrorKind::RejectedOperator => ErrorTip::Suggestion(format!(
                "`{}` is only valid as part of a compound operator such as `{}`",
                self.text,
                compound_hint(&self.text)
            )),
            ErrorKind::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            ErrorKind::UnrecognizedCharacter => ErrorTip::None,
        }
    }
}

fn compound_hint(text: &str) -> &'static str {
    match text {
        "!" => "!=",
        "=" => "==",
        "&" => "&&",
        "|" => "||",
        _ => "==",
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("identifier without an underscore")]
    MalformedIdentifier,
    #[error("malformed numeric literal")]
    MalformedNumber,
    #[error("rejected single-character operator")]
    RejectedOperator,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unrecognised character")]
    UnrecognizedCharacter,
}

/// Failures outside the scan itself: loading sources, reading
/// configuration and writing reports.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown token category {0:?}")]
    UnknownCategory(String),
}
