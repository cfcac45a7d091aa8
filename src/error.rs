use thiserror::Error;

/// The main error type for brik lexing, parsing and output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrikError {
    /// Raised when a string literal is not closed before end of input.
    #[error("unterminated string starting at line {line}, col {column}{}", suffix(.hint, .code))]
    UnclosedString {
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for characters that start no token.
    #[error("unexpected character '{character}' at line {line}, col {column}{}", suffix(.hint, .code))]
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("invalid number '{lexeme}' at line {line}, col {column}{}", suffix(.hint, .code))]
    InvalidNumber {
        lexeme: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("{message} at line {line}{}", suffix(.hint, .code))]
    SyntaxError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("{message} at line {line}{}", suffix(.hint, .code))]
    TypeError {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A lookup path that names no assignment.
    #[error("missing key `{path}`{}", suffix(.hint, .code))]
    MissingKey {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("file error '{path}': {message}{}", suffix(.hint, .code))]
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the output destination rejects a write.
    #[error("write error: {message}{}", suffix(.hint, .code))]
    WriteError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("export error: {message}{}", suffix(.hint, .code))]
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl BrikError {
    /// Source line the error points at, if it came from the source text.
    pub fn line(&self) -> Option<usize> {
        match self {
            BrikError::UnclosedString { line, .. }
            | BrikError::UnexpectedCharacter { line, .. }
            | BrikError::InvalidNumber { line, .. }
            | BrikError::SyntaxError { line, .. }
            | BrikError::TypeError { line, .. } => Some(*line),
            BrikError::MissingKey { .. }
            | BrikError::FileError { .. }
            | BrikError::WriteError { .. }
            | BrikError::ExportError { .. } => None,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            BrikError::UnclosedString { code, .. }
            | BrikError::UnexpectedCharacter { code, .. }
            | BrikError::InvalidNumber { code, .. }
            | BrikError::SyntaxError { code, .. }
            | BrikError::TypeError { code, .. }
            | BrikError::MissingKey { code, .. }
            | BrikError::FileError { code, .. }
            | BrikError::WriteError { code, .. }
            | BrikError::ExportError { code, .. } => *code,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            BrikError::UnclosedString { .. }
                | BrikError::UnexpectedCharacter { .. }
                | BrikError::InvalidNumber { .. }
        )
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, BrikError::SyntaxError { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, BrikError::FileError { .. } | BrikError::WriteError { .. })
    }

    pub(crate) fn syntax(message: impl Into<String>, line: usize, column: usize, code: u32) -> Self {
        BrikError::SyntaxError {
            message: message.into(),
            line,
            column,
            hint: None,
            code: Some(code),
        }
    }

    pub(crate) fn write(err: std::io::Error) -> Self {
        BrikError::WriteError {
            message: err.to_string(),
            hint: Some("Check that the output destination is writable".into()),
            code: Some(310),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_line_and_column() {
        let err = BrikError::UnexpectedCharacter {
            character: '@',
            line: 3,
            column: 7,
            hint: None,
            code: None,
        };
        assert_eq!(err.to_string(), "unexpected character '@' at line 3, col 7");
        assert!(err.is_lexical());
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_display_appends_hint_and_code() {
        let err = BrikError::SyntaxError {
            message: "expected '='".into(),
            line: 2,
            column: 5,
            hint: Some("Assignments look like key = value".into()),
            code: Some(201),
        };
        assert_eq!(
            err.to_string(),
            "expected '=' at line 2 Hint: Assignments look like key = value Code: 201"
        );
        assert!(err.is_syntax());
    }

    #[test]
    fn test_io_errors_have_no_line() {
        let err = BrikError::write(std::io::Error::other("disk full"));
        assert_eq!(err.line(), None);
        assert!(err.is_io());
        assert_eq!(err.code(), Some(310));
    }
}
