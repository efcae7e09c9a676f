use std::{error::Error, fmt::Display};

/// The three fatal error classes surfaced to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Token stream does not match the grammar.
    Syntax,
    /// Undeclared variable or undefined function.
    Name,
    /// Argument arity mismatch on a function call.
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpretError {
    pub kind: ErrorKind,
    pub message: String,
    /// Offending line, when known. Only syntax errors carry one.
    pub line: Option<usize>,
}

pub type InterpretResult<T> = Result<T, InterpretError>;

impl InterpretError {
    pub fn syntax(line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            line,
        }
    }

    pub fn name(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Name,
            message: message.into(),
            line: None,
        }
    }

    pub fn value(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Value,
            message: message.into(),
            line: None,
        }
    }
}

impl Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.line) {
            (ErrorKind::Syntax, Some(line)) => {
                write!(f, "Syntax Error at line {line}: {}", self.message)
            }
            (ErrorKind::Syntax, None) => write!(f, "Syntax Error: {}", self.message),
            (ErrorKind::Name, _) => write!(f, "Semantic Error: {}", self.message),
            (ErrorKind::Value, _) => write!(f, "Value Error: {}", self.message),
        }
    }
}

impl Error for InterpretError {}
