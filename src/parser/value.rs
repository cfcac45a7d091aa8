use super::*;
use crate::ast::{Expr, ExprKind, Field};

pub(super) fn parse_expr(parser: &mut Parser) -> Result<Expr, BrikError> {
    let location = parser.location();
    let kind = match parser.peek() {
        TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
            parser.enter()?;
            let nested = match parser.peek() {
                TokenKind::LParen => parse_tuple(parser),
                TokenKind::LBracket => parse_list(parser),
                _ => parse_object(parser),
            };
            parser.leave();
            return nested;
        }
        TokenKind::Number(_)
        | TokenKind::String(_)
        | TokenKind::Ident(_)
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Null => match parser.bump()?.kind {
            TokenKind::Number(n) => ExprKind::Number(n),
            TokenKind::String(s) => ExprKind::String(s),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            _ => ExprKind::Null,
        },
        _ => return Err(parser.error("invalid expression", 204)),
    };
    Ok(Expr::new(kind, location))
}

fn parse_list(parser: &mut Parser) -> Result<Expr, BrikError> {
    let location = parser.location();
    let items = parse_sequence(parser, TokenKind::LBracket, TokenKind::RBracket)?;
    Ok(Expr::new(ExprKind::List(items), location))
}

fn parse_tuple(parser: &mut Parser) -> Result<Expr, BrikError> {
    let location = parser.location();
    let items = parse_sequence(parser, TokenKind::LParen, TokenKind::RParen)?;
    Ok(Expr::new(ExprKind::Tuple(items), location))
}

/// Comma-separated expressions between `open` and `close`. A comma must
/// always be followed by another expression.
fn parse_sequence(
    parser: &mut Parser,
    open: TokenKind,
    close: TokenKind,
) -> Result<Vec<Expr>, BrikError> {
    parser.eat(open)?;
    let mut items = Vec::new();

    if !parser.at(&close) {
        items.push(parse_expr(parser)?);
        while parser.at(&TokenKind::Comma) {
            parser.bump()?;
            items.push(parse_expr(parser)?);
        }
    }

    parser.eat(close)?;
    Ok(items)
}

/// `{ name: expr, ... }`; a trailing comma before `}` is accepted.
fn parse_object(parser: &mut Parser) -> Result<Expr, BrikError> {
    let location = parser.location();
    parser.eat(TokenKind::LBrace)?;
    let mut fields = Vec::new();

    while !parser.at(&TokenKind::RBrace) {
        let field_location = parser.location();
        let name = parser.ident("expected field name", 201)?;
        parser.eat(TokenKind::Colon)?;
        let value = parse_expr(parser)?;
        fields.push(Field {
            name,
            value,
            location: field_location,
        });

        if parser.at(&TokenKind::Comma) {
            parser.bump()?;
        } else {
            break;
        }
    }

    parser.eat(TokenKind::RBrace)?;
    Ok(Expr::new(ExprKind::Object(fields), location))
}
