//! The Jot value tree: scalar wrappers, containers, and the kind-tagged
//! [`Value`] union over all of them.
//!
//! Every node owns its children outright (deep `Clone`, no sharing) and
//! carries an optional free-text comment. Comments are metadata: they never
//! participate in equality and never appear in the rendered text. Objects
//! keep their members in insertion order next to a name→position index, so
//! lookup is O(1) while iteration and rendering stay deterministic.
//!
//! None of these types are internally synchronized; callers that mutate a
//! tree from several threads must serialize access themselves.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{JotError, Result};

/// Discriminator identifying which variant of [`Value`] is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lower-case kind name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! comment_accessors {
    () => {
        /// The free-text annotation attached to this node, if any.
        pub fn comment(&self) -> Option<&str> {
            self.comment.as_deref()
        }

        /// Attach a free-text annotation. Comments are metadata only: they
        /// never affect equality or the rendered text.
        pub fn set_comment(&mut self, comment: impl Into<String>) {
            self.comment = Some(comment.into());
        }
    };
}

/// The undefined placeholder.
///
/// Carries no payload apart from the optional comment; exists so that every
/// kind can be constructed and annotated uniformly.
#[derive(Debug, Clone, Default)]
pub struct Undefined {
    comment: Option<String>,
}

impl Undefined {
    pub const fn new() -> Self {
        Undefined { comment: None }
    }

    comment_accessors!();
}

impl PartialEq for Undefined {
    fn eq(&self, _: &Undefined) -> bool {
        true
    }
}

/// The null placeholder, distinct from [`Undefined`].
#[derive(Debug, Clone, Default)]
pub struct Null {
    comment: Option<String>,
}

impl Null {
    pub const fn new() -> Self {
        Null { comment: None }
    }

    comment_accessors!();
}

impl PartialEq for Null {
    fn eq(&self, _: &Null) -> bool {
        true
    }
}

/// Boolean value.
#[derive(Debug, Clone)]
pub struct Bool {
    value: bool,
    comment: Option<String>,
}

impl Bool {
    pub fn new(value: bool) -> Self {
        Bool {
            value,
            comment: None,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    comment_accessors!();
}

impl PartialEq for Bool {
    fn eq(&self, other: &Bool) -> bool {
        self.value == other.value
    }
}

/// Integer value. Numbers without a fraction or exponent are stored as
/// `i64`; everything else becomes a [`Double`].
#[derive(Debug, Clone)]
pub struct Int {
    value: i64,
    comment: Option<String>,
}

impl Int {
    pub fn new(value: i64) -> Self {
        Int {
            value,
            comment: None,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    comment_accessors!();
}

impl PartialEq for Int {
    fn eq(&self, other: &Int) -> bool {
        self.value == other.value
    }
}

/// Floating-point value.
#[derive(Debug, Clone)]
pub struct Double {
    value: f64,
    comment: Option<String>,
}

impl Double {
    pub fn new(value: f64) -> Self {
        Double {
            value,
            comment: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    comment_accessors!();
}

impl PartialEq for Double {
    fn eq(&self, other: &Double) -> bool {
        self.value == other.value
    }
}

/// String value.
#[derive(Debug, Clone)]
pub struct Str {
    value: String,
    comment: Option<String>,
}

impl Str {
    pub fn new(value: impl Into<String>) -> Self {
        Str {
            value: value.into(),
            comment: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    comment_accessors!();
}

impl PartialEq for Str {
    fn eq(&self, other: &Str) -> bool {
        self.value == other.value
    }
}

/// Ordered sequence of owned values.
///
/// Growth is append-only; the core offers no removal. Index access is
/// checked: [`Array::get`] returns `Option`, while `array[i]` panics out of
/// range exactly like `Vec`.
#[derive(Debug, Clone, Default)]
pub struct Array {
    elements: Vec<Value>,
    comment: Option<String>,
}

impl Array {
    pub fn new() -> Self {
        Array {
            elements: Vec::new(),
            comment: None,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append a value at the end.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.elements.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    comment_accessors!();
}

impl PartialEq for Array {
    fn eq(&self, other: &Array) -> bool {
        self.elements == other.elements
    }
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.elements[index]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        &mut self.elements[index]
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Array {
            elements: iter.into_iter().map(Into::into).collect(),
            comment: None,
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ordered, name-indexed collection of named values.
///
/// Names are unique. The first insertion fixes a member's position;
/// re-[`set`](Object::set)ting a name replaces its value in place without
/// reordering. Shared lookups of a missing name yield the canonical
/// undefined value and leave the object untouched, while [`Object::entry`]
/// (and assignment through `object[name]`) inserts an undefined member at
/// the end on a miss — mutable lookups are order-visible.
#[derive(Debug, Clone, Default)]
pub struct Object {
    members: Vec<(String, Value)>,
    index: HashMap<String, usize>,
    comment: Option<String>,
}

impl Object {
    pub fn new() -> Self {
        Object {
            members: Vec::new(),
            index: HashMap::new(),
            comment: None,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up a member by name. A missing name yields the canonical
    /// undefined value; the object is not modified.
    pub fn get(&self, name: &str) -> &Value {
        match self.index.get(name) {
            Some(&i) => &self.members[i].1,
            None => Value::undefined(),
        }
    }

    /// Mutable lookup without the insert-on-miss behavior of
    /// [`Object::entry`].
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let i = *self.index.get(name)?;
        self.members.get_mut(i).map(|(_, value)| value)
    }

    /// Replace the value at `name` if present (keeping its position), else
    /// append a new member.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        if let Some(&i) = self.index.get(&name) {
            self.members[i].1 = value;
        } else {
            self.index.insert(name.clone(), self.members.len());
            self.members.push((name, value));
        }
    }

    /// Mutable access to the member at `name`, appending an undefined
    /// member first when the name is missing.
    pub fn entry(&mut self, name: &str) -> &mut Value {
        if let Some(&i) = self.index.get(name) {
            return &mut self.members[i].1;
        }
        self.index.insert(name.to_string(), self.members.len());
        self.members.push((name.to_string(), Value::default()));
        let last = self.members.len() - 1;
        &mut self.members[last].1
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(name, value)| (name.as_str(), value))
    }

    comment_accessors!();
}

impl PartialEq for Object {
    fn eq(&self, other: &Object) -> bool {
        self.members == other.members
    }
}

impl Index<&str> for Object {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.get(name)
    }
}

impl IndexMut<&str> for Object {
    fn index_mut(&mut self, name: &str) -> &mut Value {
        self.entry(name)
    }
}

/// The process-wide undefined constant handed out for missing members.
/// Read-only after initialization.
static UNDEFINED: Value = Value::Undefined(Undefined::new());

/// The generic, kind-tagged container for any of the eight supported node
/// types.
///
/// Exactly one variant is active at a time. Equality compares the kind
/// first and then the payload, ignoring comments; `Undefined` and `Null`
/// values of the same kind always compare equal. Cloning is a deep copy —
/// mutating a clone never affects the original.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined(Undefined),
    Null(Null),
    Bool(Bool),
    Int(Int),
    Double(Double),
    String(Str),
    Array(Array),
    Object(Object),
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined(Undefined::new())
    }
}

impl Value {
    /// Shared reference to the process-wide undefined constant.
    pub fn undefined() -> &'static Value {
        &UNDEFINED
    }

    /// The discriminator for the active variant.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined(_) => Kind::Undefined,
            Value::Null(_) => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The comment of the active variant, whichever kind it is.
    pub fn comment(&self) -> Option<&str> {
        match self {
            Value::Undefined(v) => v.comment(),
            Value::Null(v) => v.comment(),
            Value::Bool(v) => v.comment(),
            Value::Int(v) => v.comment(),
            Value::Double(v) => v.comment(),
            Value::String(v) => v.comment(),
            Value::Array(v) => v.comment(),
            Value::Object(v) => v.comment(),
        }
    }

    /// Attach a comment to the active variant, whichever kind it is.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        match self {
            Value::Undefined(v) => v.set_comment(comment),
            Value::Null(v) => v.set_comment(comment),
            Value::Bool(v) => v.set_comment(comment),
            Value::Int(v) => v.set_comment(comment),
            Value::Double(v) => v.set_comment(comment),
            Value::String(v) => v.set_comment(comment),
            Value::Array(v) => v.set_comment(comment),
            Value::Object(v) => v.set_comment(comment),
        }
    }

    /// The boolean payload, or [`JotError::TypeMismatch`] for other kinds.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(v) => Ok(v.value()),
            other => Err(other.mismatch(Kind::Bool)),
        }
    }

    /// The integer payload, or [`JotError::TypeMismatch`] for other kinds.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(v) => Ok(v.value()),
            other => Err(other.mismatch(Kind::Int)),
        }
    }

    /// The floating payload, or [`JotError::TypeMismatch`] for other kinds.
    pub fn as_double(&self) -> Result<f64> {
        match self {
            Value::Double(v) => Ok(v.value()),
            other => Err(other.mismatch(Kind::Double)),
        }
    }

    /// The string payload, or [`JotError::TypeMismatch`] for other kinds.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(v) => Ok(v.as_str()),
            other => Err(other.mismatch(Kind::String)),
        }
    }

    /// The array payload, or [`JotError::TypeMismatch`] for other kinds.
    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(v) => Ok(v),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(v) => Ok(v),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    /// The object payload, or [`JotError::TypeMismatch`] for other kinds.
    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(v) => Ok(v),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(v) => Ok(v),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    fn mismatch(&self, expected: Kind) -> JotError {
        JotError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Read through an object member by name. Any miss — an absent name or
    /// a non-object receiver — yields the canonical undefined value.
    fn index(&self, name: &str) -> &Value {
        match self {
            Value::Object(object) => object.get(name),
            _ => Value::undefined(),
        }
    }
}

impl IndexMut<&str> for Value {
    /// Mutable member access, inserting an undefined member on a miss.
    ///
    /// Panics when the receiver is not an object.
    fn index_mut(&mut self, name: &str) -> &mut Value {
        match self {
            Value::Object(object) => object.entry(name),
            other => panic!("cannot index a {} value by name", other.kind()),
        }
    }
}

impl From<Undefined> for Value {
    fn from(value: Undefined) -> Self {
        Value::Undefined(value)
    }
}

impl From<Null> for Value {
    fn from(value: Null) -> Self {
        Value::Null(value)
    }
}

impl From<Bool> for Value {
    fn from(value: Bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Int> for Value {
    fn from(value: Int) -> Self {
        Value::Int(value)
    }
}

impl From<Double> for Value {
    fn from(value: Double) -> Self {
        Value::Double(value)
    }
}

impl From<Str> for Value {
    fn from(value: Str) -> Self {
        Value::String(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(Bool::new(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(Int::new(value.into()))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(Int::new(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(Double::new(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(Str::new(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Str::new(value))
    }
}
