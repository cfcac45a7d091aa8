// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use crate::parse;

const TETRIS: &str = r#"
nombre_juego = "Tetris"
debug = false

[tablero]
ancho_tablero = 10
alto_tablero = 20
colores = ["rojo", "azul"]
origen = (4, 0)
celda = { tamanio: 2, borde: true, tamanio: 3 }

[tablero]
alto_tablero = 22

enum Pieza { I: 1, O: 2, T: 3 }
struct Bloque { x, y, color = "gris" }
"#;

#[test]
fn test_get_top_level_and_section_values() {
    let program = parse(TETRIS).expect("Failed to parse");

    let name: String = program.get_as("nombre_juego").expect("Failed to get name");
    assert_eq!(name, "Tetris");

    let width: i64 = program.get_as("tablero.ancho_tablero").unwrap();
    assert_eq!(width, 10);

    let debug: bool = program.get_as("debug").unwrap();
    assert!(!debug);

    let colors: Vec<String> = program.get_as("tablero.colores").unwrap();
    assert_eq!(colors, vec!["rojo", "azul"]);

    let origin: Vec<f64> = program.get_as("tablero.origen").unwrap();
    assert_eq!(origin, vec![4.0, 0.0]);
}

#[test]
fn test_last_occurrence_wins() {
    let program = parse(TETRIS).unwrap();

    assert_eq!(program.get_or("tablero.alto_tablero", 0_i64), 22);
    let all: Vec<_> = program
        .get_all("tablero.alto_tablero")
        .iter()
        .filter_map(|v| v.as_number())
        .collect();
    assert_eq!(all, vec![20.0, 22.0]);

    let cell = program.get("tablero.celda").unwrap();
    assert_eq!(cell.field("tamanio").and_then(|v| v.as_number()), Some(3.0));
    assert_eq!(cell.field("borde").and_then(|v| v.as_bool()), Some(true));
    assert!(cell.field("missing").is_none());
}

#[test]
fn test_section_and_declaration_lookup() {
    let program = parse(TETRIS).unwrap();

    let board = program.section("tablero").expect("Expected section");
    assert_eq!(board.get("alto_tablero").and_then(|v| v.as_number()), Some(20.0));
    assert_eq!(program.sections().count(), 2);

    let pieces = program.enum_def("Pieza").unwrap();
    assert_eq!(pieces.value_of("T"), Some(3.0));
    assert_eq!(pieces.value_of("Z"), None);

    let block = program.struct_def("Bloque").unwrap();
    assert_eq!(block.fields, vec!["x", "y", "color"]);

    assert_eq!(program.assignment_count(), 8);
}

#[test]
fn test_missing_and_mismatched_values() {
    let program = parse(TETRIS).unwrap();

    let err = program.get_as::<f64>("tablero.profundidad").unwrap_err();
    assert!(matches!(err, BrikError::MissingKey { code: Some(404), .. }));
    assert_eq!(err.line(), None);
    assert!(!err.to_string().contains("at line"));

    let err = program.get_as::<bool>("nombre_juego").unwrap_err();
    assert!(matches!(err, BrikError::TypeError { line: 2, code: Some(403), .. }));

    assert_eq!(program.get_or("nombre_juego", 7_i64), 7);
}

#[test]
fn test_integer_conversion_rejects_fractions() {
    let program = parse("speed = 1.5\nlevel = -3").unwrap();
    assert!(program.get_as::<i64>("speed").is_err());
    assert_eq!(program.get_as::<i64>("level").unwrap(), -3);
}

#[test]
fn test_identifiers_convert_to_strings() {
    let program = parse("pieza = Pieza.T").unwrap();
    let value: String = program.get_as("pieza").unwrap();
    assert_eq!(value, "Pieza.T");
}

#[test]
fn test_dotted_keys_and_section_names() {
    let program = parse("a.b = 1\n[cfg.dev]\nport = 8\n[cfg]\ndev.port = 9").unwrap();

    assert_eq!(program.get("a.b").and_then(|v| v.as_number()), Some(1.0));
    assert_eq!(program.get("cfg.dev.port").and_then(|v| v.as_number()), Some(9.0));
    let all: Vec<f64> = program
        .get_all("cfg.dev.port")
        .iter()
        .filter_map(|v| v.as_number())
        .collect();
    assert_eq!(all, vec![8.0, 9.0]);
    assert!(program.get("cfg.port").is_none());
}
