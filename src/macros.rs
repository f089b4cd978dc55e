//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates an ErrorLexeme instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The TokenCategory
/// * `$lexeme` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenCategory::Number, "42".to_string(), Span::new(0, 2));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $lexeme:expr, $span:expr) => {
        Token {
            category: $category,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Creates an ErrorLexeme instance.
///
/// ```ignore
/// let error = MK_ERROR!(ErrorKind::RejectedOperator, String::from("!"), Span::new(4, 5));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($kind:expr, $text:expr, $span:expr) => {
        ErrorLexeme {
            kind: $kind,
            text: $text,
            span: $span,
        }
    };
}
