//! Canonical text rendering for Jot values.
//!
//! The rendering is fixed — one canonical form per kind, no configuration:
//!
//! - `undefined` and capitalized `Null` (deliberate departures from strict
//!   JSON; callers needing strict interchange need a dedicated serializer)
//! - `true` / `false`, decimal integers, decimal floats
//! - double-quoted strings with the same escape set the lexer accepts
//! - `[` elements `]` and `{` `"name" : value` members `}` in insertion
//!   order
//!
//! Integral finite doubles render with a `.0` suffix so the Int and Double
//! canonical forms never collide. Comments are metadata and are never part
//! of the output.

use std::fmt::{self, Display, Write};

use crate::value::{Array, Bool, Double, Int, Null, Object, Str, Undefined, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined(v) => v.fmt(f),
            Value::Null(v) => v.fmt(f),
            Value::Bool(v) => v.fmt(f),
            Value::Int(v) => v.fmt(f),
            Value::Double(v) => v.fmt(f),
            Value::String(v) => v.fmt(f),
            Value::Array(v) => v.fmt(f),
            Value::Object(v) => v.fmt(f),
        }
    }
}

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("undefined")
    }
}

impl fmt::Display for Null {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Null")
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        if value.is_finite() && value.fract() == 0.0 {
            write!(f, "{value:.1}")
        } else {
            write!(f, "{value}")
        }
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, self.as_str())
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            element.fmt(f)?;
        }
        f.write_char(']')
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_escaped(f, name)?;
            f.write_str(" : ")?;
            value.fmt(f)?;
        }
        f.write_char('}')
    }
}

/// Double-quote a string, escaping the characters the lexer unescapes.
fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}
