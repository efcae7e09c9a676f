//! The dynamic value model: five tagged variants plus the total coercion
//! functions (truthiness, to-number, to-string) and the explicit cast table.

use std::fmt::Display;

/// A runtime value. `Yarn` holds the string content without quotes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Noob,
    Numbr(i64),
    Numbar(f64),
    Yarn(String),
    Troof(bool),
}

/// Numeric intermediate used by the arithmetic fold: an operation stays
/// integral while both sides are integral and widens to a float otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Noob => "NOOB",
            Value::Numbr(_) => "NUMBR",
            Value::Numbar(_) => "NUMBAR",
            Value::Yarn(_) => "YARN",
            Value::Troof(_) => "TROOF",
        }
    }

    /// The boolean projection: `NOOB` is false, numbers are non-zero,
    /// strings are non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Noob => false,
            Value::Numbr(value) => *value != 0,
            Value::Numbar(value) => *value != 0.0,
            Value::Yarn(value) => !value.is_empty(),
            Value::Troof(value) => *value,
        }
    }

    /// Total numeric coercion. Unparseable strings coerce to zero.
    pub fn to_number(&self) -> Number {
        match self {
            Value::Noob => Number::Int(0),
            Value::Numbr(value) => Number::Int(*value),
            Value::Numbar(value) => Number::Float(*value),
            Value::Yarn(value) => {
                let trimmed = value.trim();
                if trimmed.contains('.') {
                    trimmed
                        .parse::<f64>()
                        .map(Number::Float)
                        .unwrap_or(Number::Int(0))
                } else {
                    trimmed
                        .parse::<i64>()
                        .map(Number::Int)
                        .unwrap_or(Number::Int(0))
                }
            }
            Value::Troof(value) => Number::Int(i64::from(*value)),
        }
    }

    /// Total string coercion. `NOOB` becomes the empty string, booleans
    /// render as `WIN`/`FAIL`.
    pub fn to_yarn(&self) -> String {
        match self {
            Value::Noob => String::new(),
            other => other.to_string(),
        }
    }

    /// Explicit cast (`IS NOW A` / `MAEK`). Returns `None` for an unknown
    /// target type name.
    pub fn cast(&self, target: &str) -> Option<Value> {
        match target.to_ascii_uppercase().as_str() {
            "NUMBR" => Some(match self.to_number() {
                Number::Int(value) => Value::Numbr(value),
                Number::Float(value) => Value::Numbr(value.trunc() as i64),
            }),
            "NUMBAR" => Some(Value::Numbar(self.to_number().as_f64())),
            "YARN" => Some(Value::Yarn(self.to_yarn())),
            "TROOF" => Some(Value::Troof(self.is_truthy())),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Noob => f.write_str("NOOB"),
            Value::Numbr(value) => write!(f, "{value}"),
            Value::Numbar(value) => f.write_str(&format_numbar(*value)),
            Value::Yarn(value) => f.write_str(value),
            Value::Troof(true) => f.write_str("WIN"),
            Value::Troof(false) => f.write_str("FAIL"),
        }
    }
}

/// Canonical decimal rendering: integral floats keep one fractional digit so
/// `NUMBAR` output is distinguishable from `NUMBR`.
fn format_numbar(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    pub fn to_value(self) -> Value {
        match self {
            Number::Int(value) => Value::Numbr(value),
            Number::Float(value) => Value::Numbar(value),
        }
    }

    fn is_zero(self) -> bool {
        self.as_f64() == 0.0
    }

    pub fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(lhs), Number::Int(rhs)) => Number::Int(lhs.wrapping_add(rhs)),
            (lhs, rhs) => Number::Float(lhs.as_f64() + rhs.as_f64()),
        }
    }

    pub fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(lhs), Number::Int(rhs)) => Number::Int(lhs.wrapping_sub(rhs)),
            (lhs, rhs) => Number::Float(lhs.as_f64() - rhs.as_f64()),
        }
    }

    pub fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(lhs), Number::Int(rhs)) => Number::Int(lhs.wrapping_mul(rhs)),
            (lhs, rhs) => Number::Float(lhs.as_f64() * rhs.as_f64()),
        }
    }

    /// Integer division, truncated toward zero. A zero divisor yields zero.
    pub fn div(self, rhs: Number) -> Number {
        if rhs.is_zero() {
            return Number::Int(0);
        }

        match (self, rhs) {
            (Number::Int(lhs), Number::Int(rhs)) => Number::Int(lhs.wrapping_div(rhs)),
            (lhs, rhs) => Number::Int((lhs.as_f64() / rhs.as_f64()).trunc() as i64),
        }
    }

    /// Floored remainder (takes the sign of the divisor). A zero divisor
    /// yields zero.
    pub fn rem(self, rhs: Number) -> Number {
        if rhs.is_zero() {
            return Number::Int(0);
        }

        match (self, rhs) {
            (Number::Int(lhs), Number::Int(rhs)) => {
                Number::Int(lhs.wrapping_rem(rhs).wrapping_add(rhs).wrapping_rem(rhs))
            }
            (lhs, rhs) => {
                let (lhs, rhs) = (lhs.as_f64(), rhs.as_f64());
                Number::Float((lhs % rhs + rhs) % rhs)
            }
        }
    }

    /// Keeps whichever operand is larger, preserving its tag. Ties keep the
    /// left operand.
    pub fn max(self, rhs: Number) -> Number {
        if rhs.as_f64() > self.as_f64() {
            rhs
        } else {
            self
        }
    }

    pub fn min(self, rhs: Number) -> Number {
        if rhs.as_f64() < self.as_f64() {
            rhs
        } else {
            self
        }
    }
}
