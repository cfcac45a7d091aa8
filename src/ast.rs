use serde::Serialize;

/// Where a node started in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub items: Vec<Item>, // top-level items in declaration order
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Item {
    Section(Section),
    Assign(Assign),
    EnumDef(EnumDef),
    StructDef(StructDef),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub body: Vec<Assign>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign {
    pub key: String,
    pub value: Expr,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDef {
    pub name: String,
    pub entries: Vec<(String, f64)>,
    pub location: Location,
}

/// Field defaults are parsed but not kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<String>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expr {
    pub kind: ExprKind,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum ExprKind {
    Number(f64),
    String(String),
    Bool(bool),
    Ident(String), // e.g. Color.RED
    Null,
    List(Vec<Expr>),
    Tuple(Vec<Expr>),
    Object(Vec<Field>),
}

/// One `name: value` pair of an object literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: Expr,
    pub location: Location,
}

impl Expr {
    pub fn new(kind: ExprKind, location: Location) -> Self {
        Self { kind, location }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let ExprKind::Number(n) = self.kind {
            Some(n)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let ExprKind::String(s) = &self.kind {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let ExprKind::Bool(b) = self.kind {
            Some(b)
        } else {
            None
        }
    }

    pub fn as_ident(&self) -> Option<&str> {
        if let ExprKind::Ident(name) = &self.kind {
            Some(name)
        } else {
            None
        }
    }

    /// Elements of a list or tuple.
    pub fn as_elements(&self) -> Option<&[Expr]> {
        match &self.kind {
            ExprKind::List(items) | ExprKind::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Field]> {
        if let ExprKind::Object(fields) = &self.kind {
            Some(fields)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, ExprKind::Null)
    }
}

impl ExprKind {
    /// Tag used by the tree printer.
    pub fn tag(&self) -> &'static str {
        match self {
            ExprKind::Number(_) => "Number",
            ExprKind::String(_) => "String",
            ExprKind::Bool(_) => "Bool",
            ExprKind::Ident(_) => "Ident",
            ExprKind::Null => "Null",
            ExprKind::List(_) => "List",
            ExprKind::Tuple(_) => "Tuple",
            ExprKind::Object(_) => "Object",
        }
    }
}

impl Item {
    pub fn location(&self) -> Location {
        match self {
            Item::Section(s) => s.location,
            Item::Assign(a) => a.location,
            Item::EnumDef(e) => e.location,
            Item::StructDef(s) => s.location,
        }
    }
}
