// Author: Dustin Pilgrim
// License: MIT

use crate::BrikError;
use crate::ast::{Expr, ExprKind};

fn type_error(expected: &str, value: &Expr, hint: &str, code: u32) -> BrikError {
    BrikError::TypeError {
        message: format!("expected {}, got {}", expected, value.kind.tag()),
        line: value.location.line,
        column: value.location.column,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

/// Strings and bare identifiers both convert.
impl TryFrom<&Expr> for String {
    type Error = BrikError;

    fn try_from(value: &Expr) -> Result<Self, Self::Error> {
        match &value.kind {
            ExprKind::String(s) | ExprKind::Ident(s) => Ok(s.clone()),
            _ => Err(type_error("string", value, "Use a string value", 401)),
        }
    }
}

impl TryFrom<&Expr> for f64 {
    type Error = BrikError;

    fn try_from(value: &Expr) -> Result<Self, Self::Error> {
        match value.kind {
            ExprKind::Number(n) => Ok(n),
            _ => Err(type_error("number", value, "Use a number value", 402)),
        }
    }
}

/// Only whole numbers convert.
impl TryFrom<&Expr> for i64 {
    type Error = BrikError;

    fn try_from(value: &Expr) -> Result<Self, Self::Error> {
        match value.kind {
            ExprKind::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Ok(n as i64),
            _ => Err(type_error("integer", value, "Use a whole number", 402)),
        }
    }
}

impl TryFrom<&Expr> for bool {
    type Error = BrikError;

    fn try_from(value: &Expr) -> Result<Self, Self::Error> {
        match value.kind {
            ExprKind::Bool(b) => Ok(b),
            _ => Err(type_error("boolean", value, "Use true or false", 403)),
        }
    }
}

/// Lists and tuples convert element-wise.
impl<'a, T> TryFrom<&'a Expr> for Vec<T>
where
    T: TryFrom<&'a Expr, Error = BrikError>,
{
    type Error = BrikError;

    fn try_from(value: &'a Expr) -> Result<Self, Self::Error> {
        match value.as_elements() {
            Some(items) => items.iter().map(T::try_from).collect(),
            None => Err(type_error("list", value, "Use a [list] or (tuple)", 405)),
        }
    }
}
