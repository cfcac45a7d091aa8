use super::*;

/// Advance the character iterator and update line/column tracking
pub(super) fn bump(lexer: &mut Lexer) -> Option<char> {
    let curr = lexer.peek;
    if let Some(c) = curr {
        lexer.offset += c.len_utf8();
        if c == '\n' {
            lexer.line += 1;
            lexer.column = 1;
        } else {
            lexer.column += 1;
        }
    }
    lexer.peek = lexer.input.next();
    curr
}

/// The character after the current one, without consuming anything.
pub(super) fn peek_second(lexer: &Lexer) -> Option<char> {
    lexer.input.clone().next()
}

/// Source text between `start` and the cursor.
pub(super) fn slice_from<'a>(lexer: &Lexer<'a>, start: usize) -> &'a str {
    let source = lexer.source;
    &source[start..lexer.offset]
}

/// Skip whitespace and comments. `#` and `//` both run to end of line.
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) {
    while let Some(c) = lexer.peek {
        match c {
            c if c.is_whitespace() => {
                bump(lexer);
            }
            '#' => skip_line(lexer),
            '/' if peek_second(lexer) == Some('/') => skip_line(lexer),
            _ => break,
        }
    }
}

fn skip_line(lexer: &mut Lexer) {
    while let Some(ch) = bump(lexer) {
        if ch == '\n' {
            break;
        }
    }
}
