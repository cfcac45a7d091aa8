use super::*;
use super::scanner::{bump, peek_second, skip_whitespace_and_comments, slice_from};

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token, BrikError> {
    skip_whitespace_and_comments(lexer);

    let start = lexer.offset;
    let line = lexer.line;
    let column = lexer.column;

    let kind = match lexer.peek {
        Some('[') => tokenize_symbol(lexer, TokenKind::LBracket),
        Some(']') => tokenize_symbol(lexer, TokenKind::RBracket),
        Some('(') => tokenize_symbol(lexer, TokenKind::LParen),
        Some(')') => tokenize_symbol(lexer, TokenKind::RParen),
        Some('{') => tokenize_symbol(lexer, TokenKind::LBrace),
        Some('}') => tokenize_symbol(lexer, TokenKind::RBrace),
        Some(',') => tokenize_symbol(lexer, TokenKind::Comma),
        Some('=') => tokenize_symbol(lexer, TokenKind::Equals),
        Some(':') => tokenize_symbol(lexer, TokenKind::Colon),
        Some('"') => tokenize_string(lexer, line, column)?,
        Some(c) if c.is_ascii_digit() => tokenize_number(lexer, start, line, column)?,
        Some('-') if peek_second(lexer).is_some_and(|c| c.is_ascii_digit()) => {
            tokenize_number(lexer, start, line, column)?
        }
        Some(c) if c.is_alphabetic() || c == '_' => tokenize_identifier_or_keyword(lexer),
        Some(ch) => return Err(unexpected_char(ch, line, column)),
        None => TokenKind::End,
    };

    Ok(Token {
        kind,
        lexeme: slice_from(lexer, start).to_string(),
        line,
        column,
    })
}

fn tokenize_symbol(lexer: &mut Lexer, kind: TokenKind) -> TokenKind {
    bump(lexer);
    kind
}

fn tokenize_string(lexer: &mut Lexer, line: usize, column: usize) -> Result<TokenKind, BrikError> {
    bump(lexer); // consume opening '"'
    let mut content = String::new();

    loop {
        match bump(lexer) {
            Some('"') => break,
            Some('\\') => {
                let Some(next_ch) = bump(lexer) else {
                    return Err(unclosed_string(line, column));
                };
                let escaped = match next_ch {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '\\' => '\\',
                    '"' => '"',
                    other => other,
                };
                content.push(escaped);
            }
            Some(ch) => content.push(ch),
            None => return Err(unclosed_string(line, column)),
        }
    }

    Ok(TokenKind::String(content))
}

fn tokenize_number(
    lexer: &mut Lexer,
    start: usize,
    line: usize,
    column: usize,
) -> Result<TokenKind, BrikError> {
    if lexer.peek == Some('-') {
        bump(lexer);
    }

    let mut seen_dot = false;
    while let Some(ch) = lexer.peek {
        if ch.is_ascii_digit() {
            bump(lexer);
        } else if ch == '.' && !seen_dot {
            seen_dot = true;
            bump(lexer);
        } else {
            break;
        }
    }

    let lexeme = slice_from(lexer, start);
    lexeme
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(TokenKind::Number)
        .ok_or_else(|| BrikError::InvalidNumber {
            lexeme: lexeme.to_string(),
            line,
            column,
            hint: None,
            code: Some(102),
        })
}

fn tokenize_identifier_or_keyword(lexer: &mut Lexer) -> TokenKind {
    let mut ident = String::new();

    while let Some(ch) = lexer.peek {
        if ch.is_alphanumeric() || ch == '_' || ch == '.' {
            ident.push(ch);
            bump(lexer);
        } else {
            break;
        }
    }

    match ident.as_str() {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        "enum" => TokenKind::Enum,
        "struct" => TokenKind::Struct,
        _ => TokenKind::Ident(ident),
    }
}

fn unclosed_string(line: usize, column: usize) -> BrikError {
    BrikError::UnclosedString {
        line,
        column,
        hint: Some("String literal not closed".into()),
        code: Some(103),
    }
}

fn unexpected_char(character: char, line: usize, column: usize) -> BrikError {
    BrikError::UnexpectedCharacter {
        character,
        line,
        column,
        hint: Some("Unexpected character in input".into()),
        code: Some(104),
    }
}
