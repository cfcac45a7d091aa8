use log::{debug, trace};

use super::*;
use crate::ast::{Assign, Item, Section};

pub(super) fn parse_program(parser: &mut Parser) -> Result<Program, BrikError> {
    let location = parser.location();
    let mut items = Vec::new();

    loop {
        let item = match parser.peek() {
            TokenKind::End => break,
            TokenKind::LBracket => Item::Section(parse_section(parser)?),
            TokenKind::Ident(_) => Item::Assign(parse_assign(parser)?),
            TokenKind::Enum => Item::EnumDef(declaration::parse_enum(parser)?),
            TokenKind::Struct => Item::StructDef(declaration::parse_struct(parser)?),
            _ => return Err(parser.error("unexpected token", 203)),
        };
        trace!("parsed top-level item at line {}", item.location().line);
        items.push(item);
    }

    debug!("parsed program with {} top-level items", items.len());
    Ok(Program { items, location })
}

/// `[name]` followed by assignments; the body ends at the first token
/// that is not an identifier.
fn parse_section(parser: &mut Parser) -> Result<Section, BrikError> {
    let location = parser.location();
    parser.eat(TokenKind::LBracket)?;
    let name = parser.ident("invalid section name", 202)?;
    parser.eat(TokenKind::RBracket)?;

    let mut body = Vec::new();
    while let TokenKind::Ident(_) = parser.peek() {
        body.push(parse_assign(parser)?);
    }

    Ok(Section { name, body, location })
}

pub(super) fn parse_assign(parser: &mut Parser) -> Result<Assign, BrikError> {
    let location = parser.location();
    let key = parser.ident("expected identifier", 201)?;
    parser.eat(TokenKind::Equals)?;
    let value = value::parse_expr(parser)?;
    Ok(Assign { key, value, location })
}
