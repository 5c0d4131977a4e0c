//! The document tree.
//!
//! Parsing produces a [`Node`] tree; the reader answers protocol events by
//! walking it. Trees can also be built directly (or with the
//! [`node!`](crate::node!) macro) and rendered with
//! [`to_string`](crate::to_string), and any serializable value can be turned
//! into a tree with [`to_value`](crate::to_value).
//!
//! Scalar nodes hold *text*, not typed values. A document's `42` is
//! `Scalar("42")` until a read converts it, which is what lets the same
//! scalar deserialize as `i32`, `u64` or `String`. Quoting is resolved at
//! parse time: `"null"` in a document becomes `Scalar("null")`, while a bare
//! `null` becomes [`Node::Null`].
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::{to_value, Node};
//!
//! let node: Node = "x: 10\ny: 20\n".parse().unwrap();
//! let map = node.as_mapping().unwrap();
//! assert_eq!(map.get("x").and_then(|v| v.as_i64()), Some(10));
//!
//! let same = to_value(&yamlet::node!({"x": 10, "y": 20})).unwrap();
//! assert_eq!(node, same);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::frame::Style;
use crate::map::Mapping;
use crate::ser::{Serialize, Serializer};

/// One node of a document tree.
///
/// # Examples
///
/// ```rust
/// use yamlet::Node;
///
/// let null = Node::Null;
/// let scalar = Node::from(42);
/// let text = Node::from("hello");
///
/// assert!(null.is_null());
/// assert!(scalar.is_scalar());
/// assert_eq!(text.as_str(), Some("hello"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Node {
    /// Explicit absence (`null`).
    #[default]
    Null,
    /// A leaf holding raw scalar text (unquoted, unescaped).
    Scalar(String),
    /// An ordered list of child nodes.
    Sequence(Vec<Node>),
    /// An ordered list of key/value entries; duplicates are preserved.
    Mapping(Mapping),
}

impl Node {
    /// Returns `true` if this node is `null`.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns `true` if this node is a scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns `true` if this node is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Node::Sequence(_))
    }

    /// Returns `true` if this node is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    /// Returns the scalar text, if this node is a scalar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Node;
    ///
    /// assert_eq!(Node::from("hi").as_str(), Some("hi"));
    /// assert_eq!(Node::Null.as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Converts scalar text to `i64`, if it parses as an integer.
    ///
    /// Accepts decimal plus `0x`/`0o`/`0b` prefixed forms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Node;
    ///
    /// assert_eq!(Node::from(42).as_i64(), Some(42));
    /// assert_eq!(Node::Scalar("0x10".into()).as_i64(), Some(16));
    /// assert_eq!(Node::from("abc").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_str().and_then(parse_i64)
    }

    /// Converts scalar text to `u64`, if it parses as a non-negative integer.
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_str().and_then(parse_u64)
    }

    /// Converts scalar text to `f64`, if it parses as a float.
    ///
    /// `.inf`, `-.inf` and `.nan` are the non-finite forms.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_str().and_then(parse_f64)
    }

    /// Converts scalar text to `bool`.
    ///
    /// Accepts `true`/`false` and the numeric forms `1`/`0`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_str().and_then(parse_bool)
    }

    /// Returns the child nodes, if this node is a sequence.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entry list, if this node is a mapping.
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Name of this node's kind, for error messages.
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Scalar(_) => "scalar",
            Node::Sequence(_) => "sequence",
            Node::Mapping(_) => "mapping",
        }
    }
}

/// Renders the node in inline form (`[1, 2]`, `{x: 10}`).
///
/// [`to_string`](crate::to_string) renders the folded document form.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("null"),
            Node::Scalar(s) => {
                if crate::writer::needs_quotes(s) {
                    let mut quoted = String::with_capacity(s.len() + 2);
                    crate::writer::push_quoted(&mut quoted, s);
                    f.write_str(&quoted)
                } else {
                    f.write_str(s)
                }
            }
            Node::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Node::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse_str(s)
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Scalar(if v { "true" } else { "false" }.to_string())
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::Scalar(v.to_string())
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::Scalar(v)
    }
}

impl From<char> for Node {
    fn from(v: char) -> Self {
        Node::Scalar(v.to_string())
    }
}

impl From<f32> for Node {
    fn from(v: f32) -> Self {
        Node::Scalar(float32_text(v))
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Scalar(float_text(v))
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(v: Vec<T>) -> Self {
        Node::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>, const N: usize> From<[T; N]> for Node {
    fn from(v: [T; N]) -> Self {
        Node::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for Node {
    fn from(v: Mapping) -> Self {
        Node::Mapping(v)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Node::Null,
        }
    }
}

macro_rules! node_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(v: $ty) -> Self {
                    Node::Scalar(v.to_string())
                }
            }
        )*
    };
}

node_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Replays a tree as protocol events. Containers fold; scalars are emitted
/// as raw text through the string verb.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        match self {
            Node::Null => ser.serialize_none(),
            Node::Scalar(s) => ser.serialize_str(s),
            Node::Sequence(items) => {
                ser.serialize_seq_begin(Style::Fold)?;
                for item in items {
                    item.serialize(ser)?;
                }
                ser.serialize_seq_end()
            }
            Node::Mapping(map) => {
                ser.serialize_map_begin(Style::Fold)?;
                for (key, value) in map {
                    ser.serialize_map_key_begin()?;
                    key.serialize(ser)?;
                    ser.serialize_map_key_end()?;
                    ser.serialize_map_value(value)?;
                }
                ser.serialize_map_end()
            }
        }
    }
}

/// A [`Serializer`] that assembles a [`Node`] tree instead of text.
///
/// Backs [`to_value`](crate::to_value). Enforces the same event grammar as
/// the text writer; presentation styles are meaningless in a tree and are
/// ignored.
pub(crate) struct NodeSerializer {
    stack: Vec<Slot>,
    root: Option<Node>,
}

enum Slot {
    Seq(Vec<Node>),
    Map(Mapping),
    Entry {
        key: Option<Node>,
        key_done: bool,
        value: Option<Node>,
    },
}

impl NodeSerializer {
    pub fn new() -> Self {
        NodeSerializer {
            stack: Vec::new(),
            root: None,
        }
    }

    /// Finishes the session and hands back the assembled tree.
    pub fn into_node(self) -> Result<Node> {
        if !self.stack.is_empty() {
            return Err(Error::mismatch("unclosed container at end of serialization"));
        }
        Ok(self.root.unwrap_or_default())
    }

    fn place(&mut self, node: Node) -> Result<()> {
        match self.stack.last_mut() {
            None => {
                if self.root.is_some() {
                    return Err(Error::mismatch("root value already written"));
                }
                self.root = Some(node);
                Ok(())
            }
            Some(Slot::Seq(items)) => {
                items.push(node);
                Ok(())
            }
            Some(Slot::Map(_)) => Err(Error::mismatch(
                "value written in mapping outside an entry",
            )),
            Some(Slot::Entry {
                key,
                key_done,
                value,
            }) => {
                if !*key_done {
                    if key.is_some() {
                        return Err(Error::mismatch("entry key written twice"));
                    }
                    *key = Some(node);
                } else {
                    if value.is_some() {
                        return Err(Error::mismatch("entry already has a key and a value"));
                    }
                    *value = Some(node);
                }
                Ok(())
            }
        }
    }
}

impl Serializer for NodeSerializer {
    fn serialize_bool(&mut self, v: bool) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_i8(&mut self, v: i8) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_i16(&mut self, v: i16) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_i32(&mut self, v: i32) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_i64(&mut self, v: i64) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_u8(&mut self, v: u8) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_u16(&mut self, v: u16) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_u32(&mut self, v: u32) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_u64(&mut self, v: u64) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_f32(&mut self, v: f32) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_f64(&mut self, v: f64) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_char(&mut self, v: char) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_str(&mut self, v: &str) -> Result<()> {
        self.place(Node::from(v))
    }

    fn serialize_none(&mut self) -> Result<()> {
        self.place(Node::Null)
    }

    fn serialize_seq_begin(&mut self, _style: Style) -> Result<()> {
        self.stack.push(Slot::Seq(Vec::new()));
        Ok(())
    }

    fn serialize_seq_end(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(Slot::Seq(items)) => self.place(Node::Sequence(items)),
            Some(other) => {
                self.stack.push(other);
                Err(Error::mismatch("sequence end without an open sequence"))
            }
            None => Err(Error::mismatch("sequence end without an open sequence")),
        }
    }

    fn serialize_map_begin(&mut self, _style: Style) -> Result<()> {
        self.stack.push(Slot::Map(Mapping::new()));
        Ok(())
    }

    fn serialize_map_end(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(Slot::Map(map)) => self.place(Node::Mapping(map)),
            Some(other) => {
                self.stack.push(other);
                Err(Error::mismatch("mapping end without an open mapping"))
            }
            None => Err(Error::mismatch("mapping end without an open mapping")),
        }
    }

    fn serialize_map_key_begin(&mut self) -> Result<()> {
        match self.stack.last() {
            Some(Slot::Map(_)) => {
                self.stack.push(Slot::Entry {
                    key: None,
                    key_done: false,
                    value: None,
                });
                Ok(())
            }
            _ => Err(Error::mismatch("entry key outside an open mapping")),
        }
    }

    fn serialize_map_key_end(&mut self) -> Result<()> {
        match self.stack.last_mut() {
            Some(Slot::Entry { key, key_done, .. }) if !*key_done => {
                if key.is_none() {
                    return Err(Error::mismatch("entry key missing"));
                }
                *key_done = true;
                Ok(())
            }
            _ => Err(Error::mismatch("entry key end without an open key")),
        }
    }

    fn serialize_map_value_begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn serialize_map_value_end(&mut self) -> Result<()> {
        let entry = self.stack.pop();
        match entry {
            Some(Slot::Entry {
                key: Some(key),
                key_done: true,
                value: Some(value),
            }) => match self.stack.last_mut() {
                Some(Slot::Map(map)) => {
                    map.insert(key, value);
                    Ok(())
                }
                _ => Err(Error::mismatch("entry closed outside a mapping")),
            },
            Some(Slot::Entry { .. }) => Err(Error::mismatch("entry value missing")),
            Some(other) => {
                self.stack.push(other);
                Err(Error::mismatch("entry value end without an open entry"))
            }
            None => Err(Error::mismatch("entry value end without an open entry")),
        }
    }
}

// Scalar text conversions, shared by the reader and the `as_*` accessors.
// Typing happens here, at read time; the tree itself stays textual.

pub(crate) fn parse_i64(text: &str) -> Option<i64> {
    let t = text.trim();
    let (negative, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let magnitude = match prefixed_radix(rest) {
        Some((digits, radix)) => u64::from_str_radix(digits, radix).ok()?,
        None => return t.parse::<i64>().ok(),
    };
    if negative {
        let limit = i64::MIN.unsigned_abs();
        if magnitude > limit {
            None
        } else if magnitude == limit {
            Some(i64::MIN)
        } else {
            Some(-(magnitude as i64))
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}

pub(crate) fn parse_u64(text: &str) -> Option<u64> {
    let t = text.trim();
    let rest = t.strip_prefix('+').unwrap_or(t);
    match prefixed_radix(rest) {
        Some((digits, radix)) => u64::from_str_radix(digits, radix).ok(),
        None => rest.parse::<u64>().ok(),
    }
}

fn prefixed_radix(t: &str) -> Option<(&str, u32)> {
    let (prefix, radix) = match t.get(..2) {
        Some("0x") | Some("0X") => ("0x", 16),
        Some("0o") | Some("0O") => ("0o", 8),
        Some("0b") | Some("0B") => ("0b", 2),
        _ => return None,
    };
    Some((&t[prefix.len()..], radix))
}

pub(crate) fn parse_f64(text: &str) -> Option<f64> {
    match text.trim() {
        ".inf" | "+.inf" | "inf" | "+inf" | "Infinity" => Some(f64::INFINITY),
        "-.inf" | "-inf" | "-Infinity" => Some(f64::NEG_INFINITY),
        ".nan" | "nan" | "NaN" => Some(f64::NAN),
        t => t.parse::<f64>().ok(),
    }
}

/// Text forms a plain scalar resolves to `Node::Null`. The writer quotes
/// exactly these so string values holding them survive a round trip.
pub(crate) fn is_null_text(text: &str) -> bool {
    matches!(text, "" | "~" | "null" | "Null" | "NULL")
}

pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

pub(crate) fn float_text(v: f64) -> String {
    if v.is_nan() {
        ".nan".to_string()
    } else if v == f64::INFINITY {
        ".inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-.inf".to_string()
    } else {
        v.to_string()
    }
}

pub(crate) fn float32_text(v: f32) -> String {
    if v.is_nan() {
        ".nan".to_string()
    } else if v == f32::INFINITY {
        ".inf".to_string()
    } else if v == f32::NEG_INFINITY {
        "-.inf".to_string()
    } else {
        v.to_string()
    }
}
