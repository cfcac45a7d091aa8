// Author: Dustin Pilgrim
// License: MIT

use crate::BrikError;
use crate::ast::Program;
use crate::source::SourceFile;

/// Export a brik program to JSON.
///
/// The JSON mirrors the tree: items carry a `type` tag (`Section`,
/// `Assign`, `EnumDef`, `StructDef`) and every expression is
/// `{"kind": {"type": ..., "value": ...}, "location": {"line": .., "column": ..}}`,
/// with `value` absent for `Null`. Source locations are kept on every node.
/// Tuples and lists stay distinct.
///
/// # Examples
/// ```no_run
/// use brik::export::export_program_to_json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let program = brik::parse("width = 10")?;
/// println!("{}", export_program_to_json(&program)?);
/// # Ok(())
/// # }
/// ```
pub fn export_program_to_json(program: &Program) -> Result<String, BrikError> {
    serde_json::to_string_pretty(program).map_err(|e| BrikError::ExportError {
        message: e.to_string(),
        hint: None,
        code: Some(500),
    })
}

/// Export a brik file directly to JSON.
///
/// # Errors
/// Returns error if the file can't be read or contains invalid brik syntax.
pub fn export_brik_file(path: &str) -> Result<String, BrikError> {
    let program = SourceFile::from_file(path)?.parse()?;
    export_program_to_json(&program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_export_sections_and_values() {
        let program = crate::parse("[board]\nwidth = 10\nshape = (1, \"x\")").unwrap();
        let json_output = export_program_to_json(&program).expect("Failed to export program");

        println!("--- Exported JSON ---\n{}", json_output);

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        let section = &v["items"][0];
        assert_eq!(section["type"], "Section");
        assert_eq!(section["name"], "board");
        assert_eq!(section["body"][0]["key"], "width");
        assert_eq!(section["body"][0]["value"]["kind"]["type"], "Number");
        assert_eq!(section["body"][0]["value"]["kind"]["value"], 10.0);
        assert_eq!(section["body"][1]["value"]["kind"]["type"], "Tuple");
        assert_eq!(section["location"]["line"], 1);
    }

    #[test]
    fn test_expression_shape() {
        let program = crate::parse("a = 1\nb = null").unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&export_program_to_json(&program).unwrap()).unwrap();

        let value = &v["items"][0]["value"];
        assert_eq!(value["kind"]["type"], "Number");
        assert_eq!(value["location"]["line"], 1);
        assert_eq!(value["location"]["column"], 5);
        assert!(value.get("type").is_none());

        let null = &v["items"][1]["value"]["kind"];
        assert_eq!(null["type"], "Null");
        assert!(null.get("value").is_none());
    }

    #[test]
    fn test_export_enum_entries() {
        let program = crate::parse("enum Color { RED: 1 }").unwrap();
        let v: serde_json::Value =
            serde_json::from_str(&export_program_to_json(&program).unwrap()).unwrap();

        assert_eq!(v["items"][0]["type"], "EnumDef");
        assert_eq!(v["items"][0]["entries"][0][0], "RED");
        assert_eq!(v["items"][0]["entries"][0][1], 1.0);
    }

    #[test]
    fn test_export_brik_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.brik");
        fs::write(&path, "name = \"Snake\"\n").unwrap();

        let json_output = export_brik_file(path.to_str().unwrap()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["items"][0]["value"]["kind"]["value"], "Snake");
    }

    #[test]
    fn test_export_missing_file() {
        let err = export_brik_file("does/not/exist.brik").unwrap_err();
        assert!(matches!(err, BrikError::FileError { code: Some(301), .. }));
    }
}
