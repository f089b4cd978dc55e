use crate::errors::errors::ErrorKind;

use super::tokens::TokenCategory;

/// Multi-character operators, longest forms first so that a three-character
/// match wins over any two-character prefix.
pub const COMPOUND_OPERATORS: [&str; 13] = [
    "=:=", "!=", "==", "=+", "=>", "=<", "<>", ">>", "++", "--", "&&", "||", "::",
];

/// Single characters that are always an operator on their own.
pub const SINGLE_OPERATORS: [u8; 6] = [b'+', b'-', b'*', b'/', b'%', b':'];

pub const PUNCTUATION: [u8; 10] = [b'{', b'}', b'[', b']', b'(', b')', b',', b';', b'<', b'>'];

/// Characters rejected unless they begin one of the compound operators.
pub const REJECTED_SINGLES: [u8; 4] = [b'!', b'=', b'&', b'|'];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OperatorMatch {
    pub len: usize,
    pub outcome: Result<TokenCategory, ErrorKind>,
}

/// Classifies the operator, punctuation or stray character at the start of
/// `input`, which must not be empty.
pub fn match_operator(input: &[u8]) -> OperatorMatch {
    if let Some(op) = COMPOUND_OPERATORS
        .iter()
        .find(|op| input.starts_with(op.as_bytes()))
    {
        return OperatorMatch {
            len: op.len(),
            outcome: Ok(TokenCategory::Operator),
        };
    }

    let lead = input[0];

    let outcome = if SINGLE_OPERATORS.contains(&lead) {
        Ok(TokenCategory::Operator)
    } else if PUNCTUATION.contains(&lead) {
        Ok(TokenCategory::Punctuation)
    } else if REJECTED_SINGLES.contains(&lead) {
        Err(ErrorKind::RejectedOperator)
    } else {
        return OperatorMatch {
            len: utf8_len(lead).min(input.len()),
            outcome: Err(ErrorKind::UnrecognizedCharacter),
        };
    };

    OperatorMatch { len: 1, outcome }
}

/// Width of the UTF-8 sequence introduced by `lead`.
fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 1,
    }
}
