use tracing::{debug, trace, warn};

use crate::{
    config::config::ScanConfig,
    errors::errors::{ErrorKind, ErrorLexeme, UNTERMINATED_COMMENT},
    Span, MK_ERROR, MK_TOKEN,
};

use super::{
    number::{scan_number, starts_number},
    operators::match_operator,
    tokens::{is_keyword, Token, TokenCategory},
};

/// Result of a single pass over a source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<ErrorLexeme>,
}

impl ScanOutput {
    pub fn tokens_of(&self, category: TokenCategory) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |token| token.category == category)
    }
}

struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    config: ScanConfig,
    output: ScanOutput,
    dropped_tokens: usize,
    dropped_errors: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str, config: ScanConfig) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            config,
            output: ScanOutput::default(),
            dropped_tokens: 0,
            dropped_errors: 0,
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn at(&self) -> u8 {
        self.source.as_bytes()[self.pos]
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    fn remainder(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Records a token for the next `len` bytes and moves past them.
    fn push(&mut self, category: TokenCategory, len: usize) {
        let span = Span::new(self.pos, self.pos + len);
        let lexeme = self.source[span.range()].to_string();
        self.advance_n(len);

        if self
            .config
            .max_tokens
            .is_some_and(|max| self.output.tokens.len() >= max)
        {
            if self.dropped_tokens == 0 {
                warn!(max = self.output.tokens.len(), "token limit reached, dropping further tokens");
            }
            self.dropped_tokens += 1;
            return;
        }

        self.output.tokens.push(MK_TOKEN!(category, lexeme, span));
    }

    /// Records the next `len` bytes as rejected and moves past them.
    fn push_error(&mut self, kind: ErrorKind, len: usize) {
        let span = Span::new(self.pos, self.pos + len);
        let text = self.source[span.range()].to_string();
        self.advance_n(len);
        self.record_error(MK_ERROR!(kind, text, span));
    }

    fn record_error(&mut self, error: ErrorLexeme) {
        if self
            .config
            .max_errors
            .is_some_and(|max| self.output.errors.len() >= max)
        {
            if self.dropped_errors == 0 {
                warn!(max = self.output.errors.len(), "error limit reached, dropping further errors");
            }
            self.dropped_errors += 1;
            return;
        }

        trace!(kind = %error.kind, text = %error.text, start = error.span.start.0, "rejected lexeme");
        self.output.errors.push(error);
    }

    fn skip_line_comment(&mut self) {
        let rest = self.remainder();
        let len = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        self.advance_n(len);
    }

    fn skip_block_comment(&mut self) {
        let start = self.pos;
        let body = &self.remainder()[2..];

        match body.windows(2).position(|pair| pair == b"*/") {
            Some(close) => self.advance_n(2 + close + 2),
            None => {
                self.pos = self.source.len();
                self.record_error(MK_ERROR!(
                    ErrorKind::UnterminatedComment,
                    String::from(UNTERMINATED_COMMENT),
                    Span::new(start, self.pos)
                ));
            }
        }
    }

    fn scan_word(&mut self) {
        let source = self.source;
        let rest = self.remainder();
        let len = rest
            .iter()
            .position(|&b| !(b.is_ascii_alphanumeric() || b == b'_'))
            .unwrap_or(rest.len());
        let word = &source[self.pos..self.pos + len];

        if is_keyword(word) {
            self.push(TokenCategory::Keyword, len);
        } else if word.contains('_') {
            self.push(TokenCategory::Identifier, len);
        } else {
            self.push_error(ErrorKind::MalformedIdentifier, len);
        }
    }

    fn scan_number(&mut self) {
        let scan = scan_number(self.remainder());

        if scan.is_valid() {
            self.push(TokenCategory::Number, scan.len);
        } else {
            self.push_error(ErrorKind::MalformedNumber, scan.len);
        }
    }

    fn scan_operator(&mut self) {
        let matched = match_operator(self.remainder());

        match matched.outcome {
            Ok(category) => self.push(category, matched.len),
            Err(kind) => self.push_error(kind, matched.len),
        }
    }

    fn step(&mut self) {
        match self.at() {
            b' ' | b'\t' | b'\r' | b'\n' => self.advance_n(1),
            b'/' if self.peek(1) == Some(b'/') => self.skip_line_comment(),
            b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment(),
            b'_' | b'a'..=b'z' | b'A'..=b'Z' => self.scan_word(),
            _ if starts_number(self.remainder()) => self.scan_number(),
            _ => self.scan_operator(),
        }
    }
}

/// Scans `source` with no limits on the recorded tokens or errors.
pub fn scan(source: &str) -> ScanOutput {
    scan_with(source, ScanConfig::default())
}

/// Scans `source` in one pass, returning every token and rejected lexeme in
/// order of appearance. Never fails: malformed input ends up in `errors`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_with(source: &str, config: ScanConfig) -> ScanOutput {
    let mut lex = Lexer::new(source, config);

    while !lex.at_eof() {
        lex.step();
    }

    debug!(
        tokens = lex.output.tokens.len(),
        errors = lex.output.errors.len(),
        dropped_tokens = lex.dropped_tokens,
        dropped_errors = lex.dropped_errors,
        "scan finished"
    );

    lex.output
}
