//! Unit tests for the lexer module.
//!
//! This module contains tests for scanning including:
//! - Keywords and underscore identifiers
//! - The numeric literal state machine
//! - Operators, punctuation and rejected single characters
//! - Comments
//! - Scan limits and error spans

use pretty_assertions::assert_eq;

use super::{
    lexer::{scan, scan_with},
    number::{scan_number, starts_number, Action, NumberState},
    operators::{match_operator, COMPOUND_OPERATORS},
    tokens::{is_keyword, TokenCategory, KEYWORDS},
};
use crate::{
    config::config::ScanConfig,
    errors::errors::{ErrorKind, UNTERMINATED_COMMENT},
    Span,
};

fn tokens(source: &str) -> Vec<(String, TokenCategory)> {
    scan(source)
        .tokens
        .into_iter()
        .map(|token| (token.lexeme, token.category))
        .collect()
}

fn errors(source: &str) -> Vec<String> {
    scan(source).errors.into_iter().map(|error| error.text).collect()
}

fn tok(lexeme: &str, category: TokenCategory) -> (String, TokenCategory) {
    (lexeme.to_string(), category)
}

#[test]
fn test_empty_source() {
    let output = scan("");
    assert!(output.tokens.is_empty());
    assert!(output.errors.is_empty());

    let output = scan(" \t\r\n\n  ");
    assert!(output.tokens.is_empty());
    assert!(output.errors.is_empty());
}

#[test]
fn test_scan_keywords() {
    let source = "agar magar loop int while namespace";
    let scanned = tokens(source);

    assert_eq!(scanned.len(), 6);
    for (_, category) in &scanned {
        assert_eq!(*category, TokenCategory::Keyword);
    }
    assert_eq!(scanned[0].0, "agar");
    assert_eq!(scanned[1].0, "magar");
    assert!(errors(source).is_empty());
}

#[test]
fn test_keyword_table() {
    assert_eq!(KEYWORDS.len(), 60);
    assert!(is_keyword("agar"));
    assert!(is_keyword("magar"));
    assert!(is_keyword("typename"));
    assert!(!is_keyword("Agar"));
    assert!(!is_keyword("let"));
}

#[test]
fn test_keywords_are_exact_matches() {
    assert!(tokens("integer").is_empty());
    assert_eq!(errors("integer"), vec!["integer"]);
    assert_eq!(
        tokens("int_"),
        vec![tok("int_", TokenCategory::Identifier)]
    );
    assert_eq!(errors("INT"), vec!["INT"]);
}

#[test]
fn test_underscore_rule() {
    assert_eq!(errors("foo"), vec!["foo"]);
    assert!(tokens("foo").is_empty());
    assert_eq!(
        tokens("foo_bar"),
        vec![tok("foo_bar", TokenCategory::Identifier)]
    );
    assert_eq!(tokens("agar"), vec![tok("agar", TokenCategory::Keyword)]);
}

#[test]
fn test_identifier_shapes() {
    let source = "_ _x x_ a1_b2 __init__ CamelCase_9";
    let scanned = tokens(source);

    assert_eq!(
        scanned,
        vec![
            tok("_", TokenCategory::Identifier),
            tok("_x", TokenCategory::Identifier),
            tok("x_", TokenCategory::Identifier),
            tok("a1_b2", TokenCategory::Identifier),
            tok("__init__", TokenCategory::Identifier),
            tok("CamelCase_9", TokenCategory::Identifier),
        ]
    );
    assert!(errors(source).is_empty());
}

#[test]
fn test_malformed_identifier_kind() {
    let output = scan("count_a = total;");
    assert_eq!(output.errors.len(), 2);
    assert_eq!(output.errors[0].text, "=");
    assert_eq!(output.errors[0].kind, ErrorKind::RejectedOperator);
    assert_eq!(output.errors[1].text, "total");
    assert_eq!(output.errors[1].kind, ErrorKind::MalformedIdentifier);
}

#[test]
fn test_identifier_swallows_trailing_digits() {
    assert_eq!(tokens("x_1e5"), vec![tok("x_1e5", TokenCategory::Identifier)]);
}

#[test]
fn test_scan_numbers() {
    let source = "123 12.5 1e10 1E-3 2.5e+7 -5 +42 0";
    let scanned = tokens(source);

    assert_eq!(
        scanned,
        vec![
            tok("123", TokenCategory::Number),
            tok("12.5", TokenCategory::Number),
            tok("1e10", TokenCategory::Number),
            tok("1E-3", TokenCategory::Number),
            tok("2.5e+7", TokenCategory::Number),
            tok("-5", TokenCategory::Number),
            tok("+42", TokenCategory::Number),
            tok("0", TokenCategory::Number),
        ]
    );
    assert!(errors(source).is_empty());
}

#[test]
fn test_malformed_numbers() {
    assert_eq!(errors("12."), vec!["12."]);
    assert_eq!(errors("1e"), vec!["1e"]);
    assert_eq!(errors("1e+"), vec!["1e+"]);
    assert_eq!(errors("3.e5"), vec!["3.", "e5"]);
    assert!(tokens("12.").is_empty());

    let output = scan("7.;");
    assert_eq!(output.errors[0].kind, ErrorKind::MalformedNumber);
    assert_eq!(output.errors[0].span, Span::new(0, 2));
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.tokens[0].lexeme, ";");
    assert_eq!(output.tokens[0].span, Span::new(2, 3));
}

#[test]
fn test_malformed_number_stops_before_trigger() {
    let output = scan("1ex_a");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].text, "1e");
    assert_eq!(
        tokens("1ex_a"),
        vec![tok("x_a", TokenCategory::Identifier)]
    );
}

#[test]
fn test_number_ends_on_unhandled_character() {
    assert_eq!(
        tokens("12.5.3"),
        vec![
            tok("12.5", TokenCategory::Number),
            tok("3", TokenCategory::Number),
        ]
    );
    assert_eq!(errors("12.5.3"), vec!["."]);

    assert_eq!(
        tokens("1e5e"),
        vec![tok("1e5", TokenCategory::Number)]
    );
    assert_eq!(errors("1e5e"), vec!["e"]);
}

#[test]
fn test_lone_sign_is_an_operator() {
    assert_eq!(tokens("+"), vec![tok("+", TokenCategory::Operator)]);
    assert_eq!(tokens("-"), vec![tok("-", TokenCategory::Operator)]);
    assert_eq!(
        tokens("+ 1"),
        vec![
            tok("+", TokenCategory::Operator),
            tok("1", TokenCategory::Number),
        ]
    );
}

#[test]
fn test_sign_after_operand_is_greedy() {
    assert_eq!(
        tokens("a_b+5"),
        vec![
            tok("a_b", TokenCategory::Identifier),
            tok("+5", TokenCategory::Number),
        ]
    );
    assert_eq!(
        tokens("x_1-2"),
        vec![
            tok("x_1", TokenCategory::Identifier),
            tok("-2", TokenCategory::Number),
        ]
    );
}

#[test]
fn test_number_transition_table() {
    use NumberState::*;

    assert_eq!(Start.transition(b'7'), Action::Consume(Integer));
    assert_eq!(Start.transition(b'-'), Action::Consume(Sign));
    assert_eq!(Start.transition(b'.'), Action::Reject);
    assert_eq!(Sign.transition(b'3'), Action::Consume(Integer));
    assert_eq!(Sign.transition(b'+'), Action::Reject);
    assert_eq!(Integer.transition(b'0'), Action::Consume(Integer));
    assert_eq!(Integer.transition(b'.'), Action::Consume(Point));
    assert_eq!(Integer.transition(b'E'), Action::Consume(ExponentMarker));
    assert_eq!(Integer.transition(b'+'), Action::Accept);
    assert_eq!(Point.transition(b'5'), Action::Consume(Fraction));
    assert_eq!(Point.transition(b'e'), Action::Reject);
    assert_eq!(Fraction.transition(b'9'), Action::Consume(Fraction));
    assert_eq!(Fraction.transition(b'e'), Action::Consume(ExponentMarker));
    assert_eq!(Fraction.transition(b'.'), Action::Accept);
    assert_eq!(ExponentMarker.transition(b'-'), Action::Consume(ExponentSign));
    assert_eq!(ExponentMarker.transition(b'4'), Action::Consume(Exponent));
    assert_eq!(ExponentMarker.transition(b';'), Action::Reject);
    assert_eq!(ExponentSign.transition(b'1'), Action::Consume(Exponent));
    assert_eq!(ExponentSign.transition(b'-'), Action::Reject);
    assert_eq!(Exponent.transition(b'2'), Action::Consume(Exponent));
    assert_eq!(Exponent.transition(b'e'), Action::Accept);

    let accepting: Vec<NumberState> = NumberState::ALL
        .into_iter()
        .filter(|state| state.is_accepting())
        .collect();
    assert_eq!(accepting, vec![Integer, Fraction, Exponent]);
}

#[test]
fn test_scan_number_driver() {
    let scan = scan_number(b"12.5e-3+");
    assert_eq!(scan.len, 7);
    assert_eq!(scan.state, NumberState::Exponent);
    assert!(scan.is_valid());

    let scan = scan_number(b"-9.");
    assert_eq!(scan.len, 3);
    assert_eq!(scan.state, NumberState::Point);
    assert!(!scan.is_valid());

    assert!(starts_number(b"4"));
    assert!(starts_number(b"-4"));
    assert!(!starts_number(b"-"));
    assert!(!starts_number(b"+x"));
    assert!(!starts_number(b".5"));
}

#[test]
fn test_scan_operators() {
    let source = "!= == =+ => =< =:= <> >> ++ -- && || :: * / % : + -";
    let scanned = tokens(source);

    assert_eq!(scanned.len(), 19);
    for (lexeme, category) in &scanned {
        assert_eq!(*category, TokenCategory::Operator, "{}", lexeme);
    }
    assert_eq!(scanned[5].0, "=:=");
    assert!(errors(source).is_empty());
}

#[test]
fn test_scan_punctuation() {
    let source = "{ } [ ] ( ) , ; < >";
    let scanned = tokens(source);

    assert_eq!(scanned.len(), 10);
    for (_, category) in &scanned {
        assert_eq!(*category, TokenCategory::Punctuation);
    }
}

#[test]
fn test_operator_asymmetry() {
    assert_eq!(tokens("!="), vec![tok("!=", TokenCategory::Operator)]);
    assert_eq!(errors("!"), vec!["!"]);
    assert_eq!(tokens("&&"), vec![tok("&&", TokenCategory::Operator)]);
    assert_eq!(errors("&"), vec!["&"]);
    assert_eq!(errors("|"), vec!["|"]);
    assert_eq!(errors("="), vec!["="]);
    assert_eq!(tokens("<"), vec![tok("<", TokenCategory::Punctuation)]);
    assert_eq!(tokens("<>"), vec![tok("<>", TokenCategory::Operator)]);
    assert_eq!(tokens(">"), vec![tok(">", TokenCategory::Punctuation)]);
    assert_eq!(tokens(">>"), vec![tok(">>", TokenCategory::Operator)]);

    let output = scan("!");
    assert_eq!(output.errors[0].kind, ErrorKind::RejectedOperator);
}

#[test]
fn test_longest_match() {
    assert_eq!(
        tokens("+++"),
        vec![
            tok("++", TokenCategory::Operator),
            tok("+", TokenCategory::Operator),
        ]
    );
    assert_eq!(
        tokens(":::"),
        vec![
            tok("::", TokenCategory::Operator),
            tok(":", TokenCategory::Operator),
        ]
    );
    assert_eq!(tokens("==="), vec![tok("==", TokenCategory::Operator)]);
    assert_eq!(errors("==="), vec!["="]);
}

#[test]
fn test_partial_three_char_operator() {
    assert_eq!(errors("=:x_a"), vec!["="]);
    assert_eq!(
        tokens("=:x_a"),
        vec![
            tok(":", TokenCategory::Operator),
            tok("x_a", TokenCategory::Identifier),
        ]
    );
    assert_eq!(errors("=:"), vec!["="]);
    assert_eq!(tokens("=:"), vec![tok(":", TokenCategory::Operator)]);
}

#[test]
fn test_compound_operators_scan_whole() {
    for op in COMPOUND_OPERATORS {
        assert_eq!(tokens(op), vec![tok(op, TokenCategory::Operator)], "{}", op);
        assert_eq!(match_operator(op.as_bytes()).len, op.len());
    }
}

#[test]
fn test_unrecognized_characters() {
    let output = scan("@ # $ ? . \" ~");
    let texts: Vec<&str> = output.errors.iter().map(|e| e.text.as_str()).collect();

    assert_eq!(texts, vec!["@", "#", "$", "?", ".", "\"", "~"]);
    for error in &output.errors {
        assert_eq!(error.kind, ErrorKind::UnrecognizedCharacter);
    }
    assert!(output.tokens.is_empty());
}

#[test]
fn test_non_ascii_character_is_one_error() {
    let output = scan("x_é ü");
    assert_eq!(output.tokens[0].lexeme, "x_");
    assert_eq!(
        output.errors.iter().map(|e| e.text.as_str()).collect::<Vec<_>>(),
        vec!["é", "ü"]
    );
    assert_eq!(output.errors[0].span, Span::new(2, 4));
}

#[test]
fn test_line_comment() {
    let scanned = tokens("// comment\nint");
    assert_eq!(scanned, vec![tok("int", TokenCategory::Keyword)]);

    let output = scan("int // trailing foo bar !");
    assert_eq!(output.tokens.len(), 1);
    assert!(output.errors.is_empty());
}

#[test]
fn test_block_comment() {
    let source = "int /* skipped foo ! \n still */ x_y";
    assert_eq!(
        tokens(source),
        vec![
            tok("int", TokenCategory::Keyword),
            tok("x_y", TokenCategory::Identifier),
        ]
    );
    assert!(errors(source).is_empty());

    assert_eq!(
        tokens("/**/int"),
        vec![tok("int", TokenCategory::Keyword)]
    );

    let output = scan("/* closed foo_bar 12 */x");
    assert!(output.tokens.is_empty());
    assert_eq!(errors("/* closed foo_bar 12 */x"), vec!["x"]);
}

#[test]
fn test_unterminated_block_comment() {
    let output = scan("int /* a");
    assert_eq!(output.tokens.len(), 1);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].text, UNTERMINATED_COMMENT);
    assert_eq!(output.errors[0].kind, ErrorKind::UnterminatedComment);
    assert_eq!(output.errors[0].span, Span::new(4, 8));

    let output = scan("/* never closed foo_bar 12 x_y");
    assert!(output.tokens.is_empty());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].text, UNTERMINATED_COMMENT);
    assert_eq!(output.errors[0].span, Span::new(0, 30));

    assert_eq!(errors("/*/"), vec![UNTERMINATED_COMMENT]);
}

#[test]
fn test_slash_alone_is_operator() {
    assert_eq!(
        tokens("a_b / c_d"),
        vec![
            tok("a_b", TokenCategory::Identifier),
            tok("/", TokenCategory::Operator),
            tok("c_d", TokenCategory::Identifier),
        ]
    );
}

#[test]
fn test_full_program() {
    let source = "int main_fn() {\n    float rate_1 = 2.5e3;\n    agar (rate_1 => 10) {\n        return rate_1 * -1;\n    }\n}\n";
    let output = scan(source);

    assert_eq!(
        output
            .tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>(),
        vec![
            "int -> Keyword",
            "main_fn -> Identifier",
            "( -> Punctuation",
            ") -> Punctuation",
            "{ -> Punctuation",
            "float -> Keyword",
            "rate_1 -> Identifier",
            "2.5e3 -> Number",
            "; -> Punctuation",
            "agar -> Keyword",
            "( -> Punctuation",
            "rate_1 -> Identifier",
            "=> -> Operator",
            "10 -> Number",
            ") -> Punctuation",
            "{ -> Punctuation",
            "return -> Keyword",
            "rate_1 -> Identifier",
            "* -> Operator",
            "-1 -> Number",
            "; -> Punctuation",
            "} -> Punctuation",
            "} -> Punctuation",
        ]
    );
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].text, "=");
    assert_eq!(output.tokens_of(TokenCategory::Keyword).count(), 4);
}

#[test]
fn test_token_spans_match_source() {
    let source = "agar (x_1 != 3.5) { y_2 =:= -4; }";
    let output = scan(source);

    for token in &output.tokens {
        assert_eq!(&source[token.span.range()], token.lexeme);
    }
    assert_eq!(output.tokens[1].span, Span::new(5, 6));
}

#[test]
fn test_scan_limits() {
    let config = ScanConfig {
        max_tokens: Some(2),
        max_errors: Some(1),
    };
    let output = scan_with("a_1 b_2 c_3 ! & foo", config);

    assert_eq!(
        output.tokens.iter().map(|t| t.lexeme.as_str()).collect::<Vec<_>>(),
        vec!["a_1", "b_2"]
    );
    assert_eq!(
        output.errors.iter().map(|e| e.text.as_str()).collect::<Vec<_>>(),
        vec!["!"]
    );
}

#[test]
fn test_scan_limit_zero() {
    let config = ScanConfig {
        max_tokens: Some(0),
        max_errors: None,
    };
    let output = scan_with("int foo", config);
    assert!(output.tokens.is_empty());
    assert_eq!(output.errors.len(), 1);
}

#[test]
fn test_rescan_resets_state() {
    let first = scan("foo int");
    let second = scan("foo int");
    assert_eq!(first, second);

    let other = scan("x_y");
    assert!(other.errors.is_empty());
    assert_eq!(other.tokens.len(), 1);
}

#[test]
fn test_category_parsing() {
    assert_eq!("keyword".parse::<TokenCategory>().unwrap(), TokenCategory::Keyword);
    assert_eq!("Identifiers".parse::<TokenCategory>().unwrap(), TokenCategory::Identifier);
    assert_eq!("PUNCTUATIONS".parse::<TokenCategory>().unwrap(), TokenCategory::Punctuation);
    assert_eq!("1".parse::<TokenCategory>().unwrap(), TokenCategory::Identifier);
    assert_eq!("5".parse::<TokenCategory>().unwrap(), TokenCategory::Keyword);
    assert!("6".parse::<TokenCategory>().is_err());
    assert!("string".parse::<TokenCategory>().is_err());
}

mod properties {
    use proptest::prelude::*;
    use regex::Regex;

    use super::super::{
        lexer::scan,
        number::scan_number,
        tokens::{TokenCategory, KEYWORDS},
    };
    use crate::errors::errors::ErrorKind;

    fn source_strategy() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just("agar".to_string()),
                Just("foo".to_string()),
                Just("x_1".to_string()),
                Just("12.5e-3".to_string()),
                Just("1e".to_string()),
                Just("=:=".to_string()),
                Just("/*".to_string()),
                Just("*/".to_string()),
                Just("//".to_string()),
                "[ \t\n]".prop_map(String::from),
                "[a-z0-9_+\\-.eE=!<>&|:*/%{}()\\[\\],;@#]{1,4}".prop_map(String::from),
            ],
            0..40,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn scan_is_deterministic(source in source_strategy()) {
            prop_assert_eq!(scan(&source), scan(&source));
        }

        #[test]
        fn spans_are_ordered_and_disjoint(source in source_strategy()) {
            let output = scan(&source);
            let mut spans: Vec<_> = output
                .tokens
                .iter()
                .map(|t| t.span)
                .chain(output.errors.iter().map(|e| e.span))
                .collect();
            spans.sort_by_key(|span| span.start);

            for pair in spans.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
            }
            for span in &spans {
                prop_assert!(!span.is_empty());
            }
            for token in &output.tokens {
                prop_assert_eq!(&source[token.span.range()], token.lexeme.as_str());
            }
            for error in &output.errors {
                if error.kind != ErrorKind::UnterminatedComment {
                    prop_assert_eq!(&source[error.span.range()], error.text.as_str());
                }
            }
        }

        #[test]
        fn uncovered_bytes_are_whitespace_without_comments(
            source in "[a-z0-9_+\\-.eE=!<>&|:*%{}()\\[\\],;@# \t\n]{0,64}"
        ) {
            let output = scan(&source);
            let mut covered = vec![false; source.len()];
            for range in output
                .tokens
                .iter()
                .map(|t| t.span.range())
                .chain(output.errors.iter().map(|e| e.span.range()))
            {
                for index in range {
                    prop_assert!(!covered[index]);
                    covered[index] = true;
                }
            }
            for (index, byte) in source.bytes().enumerate() {
                prop_assert_eq!(!covered[index], byte.is_ascii_whitespace());
            }
        }

        #[test]
        fn keywords_always_classified(index in 0usize..60, left in "[ ;(]", right in "[ ;)]") {
            let mut keywords: Vec<&str> = KEYWORDS.iter().copied().collect();
            keywords.sort();
            let keyword = keywords[index];
            let output = scan(&format!("{left}{keyword}{right}"));
            let found = output
                .tokens
                .iter()
                .any(|t| t.lexeme == keyword && t.category == TokenCategory::Keyword);
            prop_assert!(found);
        }

        #[test]
        fn number_machine_matches_regex(literal in "[+\\-]?[0-9]{1,3}(\\.[0-9]{0,2})?([eE][+\\-]?[0-9]{0,2})?") {
            let pattern = Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?$").unwrap();
            let scanned = scan_number(literal.as_bytes());

            let whole = scanned.is_valid() && scanned.len == literal.len();
            prop_assert_eq!(whole, pattern.is_match(&literal));
        }
    }
}
