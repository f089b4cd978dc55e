use std::{fs, path::Path};

use tracing::info;

use crate::{
    errors::errors::{Error, ErrorLexeme},
    lexer::{
        lexer::ScanOutput,
        tokens::{Token, TokenCategory},
    },
};

/// One `lexeme -> Category` line per token.
pub fn token_lines(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

/// One bare error text per line.
pub fn error_lines(errors: &[ErrorLexeme]) -> String {
    errors.iter().map(|error| format!("{}\n", error)).collect()
}

pub fn render_tokens(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return String::from("(No tokens)\n");
    }

    token_lines(tokens)
}

pub fn render_category(tokens: &[Token], category: TokenCategory) -> String {
    let mut out = format!("{} Tokens:\n", category);
    let mut found = false;

    for token in tokens.iter().filter(|token| token.category == category) {
        out.push_str(&token.lexeme);
        out.push('\n');
        found = true;
    }

    if !found {
        out.push_str("(None)\n");
    }

    out
}

pub fn render_errors(errors: &[ErrorLexeme]) -> String {
    if errors.is_empty() {
        return String::from("No errors found.\n");
    }

    format!("Error tokens:\n{}", error_lines(errors))
}

/// Writes the token and error listings to two separate files.
pub fn export_to_files(output: &ScanOutput, tokens_path: &Path, errors_path: &Path) -> Result<(), Error> {
    write_file(tokens_path, &token_lines(&output.tokens))?;
    write_file(errors_path, &error_lines(&output.errors))?;

    info!(
        tokens = %tokens_path.display(),
        errors = %errors_path.display(),
        "exported scan results"
    );

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), Error> {
    fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
