use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display, str::FromStr};

use crate::{errors::errors::Error, Span};

lazy_static! {
    /// Reserved words of the language. Matched exactly against every
    /// identifier-shaped lexeme.
    pub static ref KEYWORDS: HashSet<&'static str> = {
        [
            "loop", "agar", "magar", "asm", "else", "new", "this", "auto",
            "enum", "operator", "throw", "bool", "explicit", "private", "true",
            "break", "export", "protected", "try", "case", "extern", "public",
            "typedef", "catch", "false", "register", "typeid", "char", "float",
            "typename", "class", "for", "return", "union", "const", "friend",
            "short", "unsigned", "goto", "signed", "using", "continue", "if",
            "sizeof", "virtual", "default", "inline", "static", "void", "delete",
            "int", "volatile", "do", "long", "struct", "double", "mutable",
            "switch", "while", "namespace",
        ]
        .into_iter()
        .collect()
    };
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Number,
    Operator,
    Punctuation,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Keyword,
        TokenCategory::Identifier,
        TokenCategory::Number,
        TokenCategory::Operator,
        TokenCategory::Punctuation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "Keyword",
            TokenCategory::Identifier => "Identifier",
            TokenCategory::Number => "Number",
            TokenCategory::Operator => "Operator",
            TokenCategory::Punctuation => "Punctuation",
        }
    }

    /// Category selected by the numbered category menu (1 to 5).
    pub fn from_menu_option(option: u8) -> Option<TokenCategory> {
        match option {
            1 => Some(TokenCategory::Identifier),
            2 => Some(TokenCategory::Number),
            3 => Some(TokenCategory::Operator),
            4 => Some(TokenCategory::Punctuation),
            5 => Some(TokenCategory::Keyword),
            _ => None,
        }
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(option) = s.parse::<u8>() {
            return TokenCategory::from_menu_option(option)
                .ok_or_else(|| Error::UnknownCategory(s.to_string()));
        }

        let lowered = s.to_ascii_lowercase();
        let singular = lowered.strip_suffix('s').unwrap_or(&lowered);

        TokenCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(singular))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.lexeme, self.category)
    }
}

