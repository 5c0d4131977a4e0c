//! # yamlet
//!
//! An event-protocol serialization framework with a YAML-flavored,
//! tree-structured text format.
//!
//! ## What is Yamlet?
//!
//! Yamlet is a small document format and the protocol for moving Rust
//! values in and out of it. Documents look like a YAML subset: mappings
//! and sequences fold across indented lines or sit inline in brackets,
//! scalars are plain text with structural quoting only. A parsed document
//! is an untyped [`Node`] tree; scalar text converts to concrete types at
//! the moment a value is read.
//!
//! ## Key Features
//!
//! - **Explicit adapters**: types describe themselves through the
//!   [`Serialize`]/[`Deserialize`] traits as a stream of protocol events.
//!   Adapters are hand-written, so the wire shape of every type is visible
//!   in one place.
//! - **Two backends per direction**: text ([`Writer`]) or tree
//!   ([`to_value`]) on the way out; any tree, parsed or built, on the way
//!   in ([`Reader`]).
//! - **Order-independent reads**: struct fields are found by name, in any
//!   document order, and unknown entries are simply left unread.
//! - **Untyped scalars**: `1.10` is text until something reads it, so
//!   version strings and large literals survive round trips.
//! - **Positioned errors**: parse failures carry 1-based line and column.
//! - **No unsafe code**.
//!
//! ## Quick Start
//!
//! ```rust
//! use yamlet::{Deserialize, Deserializer, Result, Serialize, Serializer, Style};
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! impl Serialize for User {
//!     fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
//!         ser.serialize_struct_begin(Style::Fold)?;
//!         ser.serialize_struct_field("id", &self.id)?;
//!         ser.serialize_struct_field("name", &self.name)?;
//!         ser.serialize_struct_field("active", &self.active)?;
//!         ser.serialize_struct_end()
//!     }
//! }
//!
//! impl Deserialize for User {
//!     fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
//!         de.deserialize_struct_begin()?;
//!         let user = User {
//!             id: de.deserialize_struct_field("id")?,
//!             name: de.deserialize_struct_field("name")?,
//!             active: de.deserialize_struct_field("active")?,
//!         };
//!         de.deserialize_struct_end()?;
//!         Ok(user)
//!     }
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Ada".to_string(),
//!     active: true,
//! };
//!
//! let text = yamlet::to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Ada\nactive: true\n");
//!
//! let back: User = yamlet::from_str(&text).unwrap();
//! assert_eq!(back, user);
//! ```
//!
//! ## Dynamic Trees with the node! Macro
//!
//! ```rust
//! use yamlet::node;
//!
//! let doc = node!({
//!     "name": "Ada",
//!     "tags": ["rust", "parser"],
//! });
//!
//! assert_eq!(
//!     yamlet::to_string(&doc).unwrap(),
//!     "name: Ada\ntags:\n  - rust\n  - parser\n"
//! );
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory for focused examples:
//!
//! - **`simple.rs`** - adapters for a plain struct
//! - **`adapters.rs`** - enums, options and nested records
//! - **`dynamic_values.rs`** - working with [`Node`] trees directly
//! - **`custom_options.rs`** - indent width and the document marker
//!
//! Run any of them with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod format;
mod frame;
mod impls;
pub mod macros;
pub mod map;
pub mod options;
mod parser;
pub mod reader;
pub mod ser;
pub mod value;
pub mod writer;

pub use de::{Deserialize, Deserializer};
pub use error::{Error, Result};
pub use frame::Style;
pub use map::Mapping;
pub use options::Options;
pub use reader::Reader;
pub use ser::{Serialize, Serializer};
pub use value::Node;
pub use writer::Writer;

use std::io;

/// Serializes a value to Yamlet text.
///
/// # Examples
///
/// ```rust
/// let text = yamlet::to_string(&vec![1, 2, 3]).unwrap();
/// assert_eq!(text, "- 1\n- 2\n- 3\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value's adapter emits an event stream the
/// format cannot express (a container used as a mapping key, say).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, Options::default())
}

/// Serializes a value to Yamlet text with custom [`Options`].
///
/// # Examples
///
/// ```rust
/// use yamlet::Options;
///
/// let options = Options::new().with_doc_start(true);
/// let text = yamlet::to_string_with_options(&vec![1, 2], options).unwrap();
/// assert_eq!(text, "---\n- 1\n- 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: Options) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut writer = Writer::with_options(options);
    value.serialize(&mut writer)?;
    Ok(writer.into_string())
}

/// Serializes a value as Yamlet text into an [`io::Write`].
///
/// # Examples
///
/// ```rust
/// let mut buffer = Vec::new();
/// yamlet::to_writer(&mut buffer, &vec![1, 2]).unwrap();
/// assert_eq!(buffer, b"- 1\n- 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or the writer does.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, Options::default())
}

/// Serializes a value into an [`io::Write`] with custom [`Options`].
///
/// # Errors
///
/// Returns an error if serialization fails or the writer does.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: Options) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Serializes a value into a [`Node`] tree instead of text.
///
/// The tree renders to the same text [`to_string`] produces, and can be
/// inspected or reshaped first.
///
/// # Examples
///
/// ```rust
/// use yamlet::node;
///
/// let tree = yamlet::to_value(&vec![1, 2]).unwrap();
/// assert_eq!(tree, node!([1, 2]));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Node>
where
    T: ?Sized + Serialize,
{
    let mut builder = value::NodeSerializer::new();
    value.serialize(&mut builder)?;
    builder.into_node()
}

/// Deserializes a value from Yamlet text.
///
/// # Examples
///
/// ```rust
/// let pair: (i32, i32) = yamlet::from_str("[1, 2]").unwrap();
/// assert_eq!(pair, (1, 2));
/// ```
///
/// # Errors
///
/// Returns an error if the text is not a valid document (with line and
/// column), if a required key is missing, or if scalar text cannot
/// convert to the requested type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: Deserialize,
{
    let doc = parser::parse_str(s)?;
    from_value(&doc)
}

/// Deserializes a value from Yamlet bytes.
///
/// # Examples
///
/// ```rust
/// let items: Vec<i32> = yamlet::from_slice(b"- 1\n- 2\n").unwrap();
/// assert_eq!(items, vec![1, 2]);
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not UTF-8 or [`from_str`] fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(bytes: &[u8]) -> Result<T>
where
    T: Deserialize,
{
    let s = std::str::from_utf8(bytes).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Deserializes a value from an [`io::Read`] of Yamlet text.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let items: Vec<i32> = yamlet::from_reader(Cursor::new("- 1\n- 2\n")).unwrap();
/// assert_eq!(items, vec![1, 2]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or [`from_str`] fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: Deserialize,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text)
}

/// Deserializes a value from a [`Node`] tree.
///
/// # Examples
///
/// ```rust
/// use yamlet::node;
///
/// let tree = node!({"x": 10, "y": 20});
/// let point: (i32, i32) = yamlet::from_value(&tree).map(|m: std::collections::BTreeMap<String, i32>| (m["x"], m["y"])).unwrap();
/// assert_eq!(point, (10, 20));
/// ```
///
/// # Errors
///
/// Returns an error if the tree's shape or scalar text does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(node: &Node) -> Result<T>
where
    T: Deserialize,
{
    let mut reader = Reader::new(node);
    T::deserialize(&mut reader)
}

/// Parses Yamlet text into a [`Node`] tree without converting anything.
///
/// # Examples
///
/// ```rust
/// let doc = yamlet::parse_str("x: 10\ny: 20\n").unwrap();
/// let map = doc.as_mapping().unwrap();
/// assert_eq!(map.get("x").and_then(|n| n.as_i64()), Some(10));
/// ```
///
/// # Errors
///
/// Returns [`Error::Invalid`] with the line and column of the first
/// malformed construct.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(text: &str) -> Result<Node> {
    parser::parse_str(text)
}
