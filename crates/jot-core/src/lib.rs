//! # jot-core
//!
//! In-memory tree and hand-written parser for **Jot**, a permissive JSON
//! superset: C-style comments that attach to the value they precede, single-
//! or double-quoted strings, unquoted `null` / `undefined` / `true` /
//! `false` literals, and trailing commas in arrays and objects.
//!
//! ## Quick start
//!
//! ```rust
//! use jot_core::parse;
//!
//! let doc = parse(r#"{
//!     "host" : "localhost",
//!     "port" : /* default */ 8080,
//!     "tags" : ["a", "b",],
//! }"#).unwrap();
//!
//! assert_eq!(doc["port"].as_int().unwrap(), 8080);
//! assert_eq!(doc["port"].comment(), Some(" default "));
//! assert_eq!(doc["tags"].to_string(), r#"["a", "b"]"#);
//! ```
//!
//! Parsing either yields a fully-formed [`Value`] tree or a single
//! [`JotError`] carrying the 1-based line/column of the failure — never a
//! partial tree. Rendering (via `Display`) produces one canonical,
//! non-configurable text form per kind; note that `undefined` and the
//! capitalized `Null` are deliberate departures from strict JSON.
//!
//! ## Modules
//!
//! - [`value`] — the kind-tagged tree: scalar wrappers, [`Array`], [`Object`]
//! - [`parser`] — recursive-descent parser and the [`parse`] entry points
//! - [`error`] — [`JotError`] and the crate [`Result`] alias
//! - `lexer`, `render` — tokenizer and canonical rendering (crate-internal;
//!   rendering surfaces through the `Display` impls on the value types)

pub mod error;
mod lexer;
pub mod parser;
mod render;
pub mod value;

pub use error::{JotError, Result};
pub use parser::{parse, parse_reader};
pub use value::{Array, Bool, Double, Int, Kind, Null, Object, Str, Undefined, Value};
