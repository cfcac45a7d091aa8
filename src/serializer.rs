//! Canonical tagged-text rendering of a parsed program.
//!
//! Every node prints as `(Tag payload)`. Nodes with children open with
//! `(Tag payload`, print each child two spaces deeper, and close with `)`
//! at their own depth:
//!
//! ```text
//! (Program
//!   (Section board
//!     (Assign width
//!       (Number 10)
//!     )
//!   )
//! )
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::BrikError;
use crate::ast::{Assign, EnumDef, Expr, ExprKind, Item, Program, Section, StructDef};

/// Write the canonical form of `program` to `out`.
pub fn serialize<W: Write>(program: &Program, out: &mut W) -> Result<(), BrikError> {
    let mut writer = TreeWriter { out, nodes: 0 };
    writer.program(program).map_err(BrikError::write)?;
    debug!("serialized {} nodes", writer.nodes);
    Ok(())
}

/// The canonical form as a string.
pub fn to_tree_string(program: &Program) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = serialize(program, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the canonical form to `path`, creating parent directories.
pub fn serialize_to_file<P: AsRef<Path>>(program: &Program, path: P) -> Result<(), BrikError> {
    let path = path.as_ref();
    let file_error = |e: std::io::Error| BrikError::FileError {
        message: format!("Failed to write tree: {}", e),
        path: path.to_string_lossy().to_string(),
        hint: Some("Check that the output directory is writable".into()),
        code: Some(303),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(file_error)?;
    }
    let mut out = BufWriter::new(File::create(path).map_err(file_error)?);
    serialize(program, &mut out)?;
    out.flush().map_err(file_error)
}

struct TreeWriter<'w, W: Write> {
    out: &'w mut W,
    nodes: usize,
}

impl<W: Write> TreeWriter<'_, W> {
    fn leaf(&mut self, depth: usize, tag: &str, payload: Option<&str>) -> std::io::Result<()> {
        self.nodes += 1;
        match payload {
            Some(p) => writeln!(self.out, "{}({} {})", indent(depth), tag, p),
            None => writeln!(self.out, "{}({})", indent(depth), tag),
        }
    }

    fn open(&mut self, depth: usize, tag: &str, payload: Option<&str>) -> std::io::Result<()> {
        self.nodes += 1;
        match payload {
            Some(p) => writeln!(self.out, "{}({} {}", indent(depth), tag, p),
            None => writeln!(self.out, "{}({}", indent(depth), tag),
        }
    }

    fn close(&mut self, depth: usize) -> std::io::Result<()> {
        writeln!(self.out, "{})", indent(depth))
    }

    fn program(&mut self, program: &Program) -> std::io::Result<()> {
        if program.items.is_empty() {
            return self.leaf(0, "Program", None);
        }
        self.open(0, "Program", None)?;
        for item in &program.items {
            match item {
                Item::Section(section) => self.section(1, section)?,
                Item::Assign(assign) => self.assign(1, assign)?,
                Item::EnumDef(def) => self.enum_def(1, def)?,
                Item::StructDef(def) => self.struct_def(1, def)?,
            }
        }
        self.close(0)
    }

    fn section(&mut self, depth: usize, section: &Section) -> std::io::Result<()> {
        if section.body.is_empty() {
            return self.leaf(depth, "Section", Some(section.name.as_str()));
        }
        self.open(depth, "Section", Some(section.name.as_str()))?;
        for assign in &section.body {
            self.assign(depth + 1, assign)?;
        }
        self.close(depth)
    }

    fn assign(&mut self, depth: usize, assign: &Assign) -> std::io::Result<()> {
        self.open(depth, "Assign", Some(assign.key.as_str()))?;
        self.expr(depth + 1, &assign.value)?;
        self.close(depth)
    }

    fn enum_def(&mut self, depth: usize, def: &EnumDef) -> std::io::Result<()> {
        if def.entries.is_empty() {
            return self.leaf(depth, "EnumDef", Some(def.name.as_str()));
        }
        self.open(depth, "EnumDef", Some(def.name.as_str()))?;
        for (key, value) in &def.entries {
            self.leaf(depth + 1, "Entry", Some(format!("{} {}", key, value).as_str()))?;
        }
        self.close(depth)
    }

    fn struct_def(&mut self, depth: usize, def: &StructDef) -> std::io::Result<()> {
        if def.fields.is_empty() {
            return self.leaf(depth, "StructDef", Some(def.name.as_str()));
        }
        self.open(depth, "StructDef", Some(def.name.as_str()))?;
        for field in &def.fields {
            self.leaf(depth + 1, "Field", Some(field.as_str()))?;
        }
        self.close(depth)
    }

    fn expr(&mut self, depth: usize, expr: &Expr) -> std::io::Result<()> {
        let tag = expr.kind.tag();
        match &expr.kind {
            ExprKind::Number(n) => self.leaf(depth, tag, Some(n.to_string().as_str())),
            ExprKind::String(s) => self.leaf(depth, tag, Some(quote(s).as_str())),
            ExprKind::Bool(b) => self.leaf(depth, tag, Some(if *b { "true" } else { "false" })),
            ExprKind::Ident(name) => self.leaf(depth, tag, Some(name.as_str())),
            ExprKind::Null => self.leaf(depth, tag, None),
            ExprKind::List(items) | ExprKind::Tuple(items) => {
                if items.is_empty() {
                    return self.leaf(depth, tag, None);
                }
                self.open(depth, tag, None)?;
                for item in items {
                    self.expr(depth + 1, item)?;
                }
                self.close(depth)
            }
            ExprKind::Object(fields) => {
                if fields.is_empty() {
                    return self.leaf(depth, tag, None);
                }
                self.open(depth, tag, None)?;
                for field in fields {
                    self.open(depth + 1, "Field", Some(field.name.as_str()))?;
                    self.expr(depth + 2, &field.value)?;
                    self.close(depth + 1)?;
                }
                self.close(depth)
            }
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use std::io;

    #[test]
    fn test_section_tree() {
        let program = parse("[board]\nwidth = 10\nheight = 20\n").unwrap();
        let expected = "\
(Program
  (Section board
    (Assign width
      (Number 10)
    )
    (Assign height
      (Number 20)
    )
  )
)
";
        assert_eq!(to_tree_string(&program), expected);
    }

    #[test]
    fn test_every_node_kind() {
        let input = r#"
enum Color { RED: 1, GREEN: 2.5 }
struct Cell { x, y = 0 }
p = { x: -1, tags: ["a\"b", Color.RED], pos: (true, null) }
e = []
"#;
        let program = parse(input).unwrap();
        let expected = r#"(Program
  (EnumDef Color
    (Entry RED 1)
    (Entry GREEN 2.5)
  )
  (StructDef Cell
    (Field x)
    (Field y)
  )
  (Assign p
    (Object
      (Field x
        (Number -1)
      )
      (Field tags
        (List
          (String "a\"b")
          (Ident Color.RED)
        )
      )
      (Field pos
        (Tuple
          (Bool true)
          (Null)
        )
      )
    )
  )
  (Assign e
    (List)
  )
)
"#;
        assert_eq!(to_tree_string(&program), expected);
    }

    #[test]
    fn test_scalar_numeral_and_escaped_newline() {
        let program = parse("x = 3.5\ns = \"a\nb\"").unwrap();
        let tree = to_tree_string(&program);
        assert!(tree.contains("(Number 3.5)"));
        assert!(tree.contains("(String \"a\\nb\")"));
    }

    #[test]
    fn test_assign_count_matches_input() {
        let input = "a = 1\n[s]\nb = 2\nc = { d: 3 }\n[t]\ne = [4]\nf = 5";
        let program = parse(input).unwrap();
        let tree = to_tree_string(&program);
        assert_eq!(tree.matches("(Assign ").count(), 5);
        assert_eq!(tree.matches("(Field d").count(), 1);
    }

    #[test]
    fn test_empty_program() {
        let program = parse("# nothing here\n").unwrap();
        assert_eq!(to_tree_string(&program), "(Program)\n");
    }

    #[test]
    fn test_serialize_to_file_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build").join("arbol.ast");
        let program = parse("x = 1").unwrap();

        serialize_to_file(&program, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_tree_string(&program));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("destination closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_an_io_error() {
        let program = parse("x = 1").unwrap();
        let err = serialize(&program, &mut FailingWriter).unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.line(), None);
    }
}
