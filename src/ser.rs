//! The write half of the event protocol.
//!
//! A value describes itself to a backend as a stream of events: scalar calls,
//! `none` for explicit absence, and paired `begin`/`end` calls for sequences,
//! mappings and structs. [`Serialize`] is the adapter trait data types
//! implement; [`Serializer`] is the backend trait that consumes the events.
//!
//! ## Event grammar
//!
//! - A sequence is `seq_begin(style)`, one event stream per element,
//!   `seq_end`.
//! - A mapping is `map_begin(style)`, then per entry: `map_key_begin`, one
//!   scalar (the key), `map_key_end`, `map_value_begin`, one event stream
//!   (the value), `map_value_end`; then `map_end`. Key and value events
//!   strictly alternate; a backend rejects anything else.
//! - The struct verbs are a named-record convenience layered on the map
//!   verbs and are provided methods; a backend only implements the map
//!   layer.
//! - A tagged union is written as a one-entry mapping from the variant's
//!   declaration index to its payload. There is no dedicated verb.
//!
//! Mis-paired `begin`/`end` calls fail with
//! [`StructuralMismatch`](crate::Error::StructuralMismatch) rather than
//! producing broken output.

use crate::error::Result;
use crate::frame::Style;

/// A data type that can describe itself to a [`Serializer`].
///
/// Implementations are hand-written. A struct writes itself with the struct
/// verbs, an enum as a one-entry mapping keyed by variant index (or any
/// other scheme its deserialize side agrees on).
///
/// # Examples
///
/// ```rust
/// use yamlet::{Result, Serialize, Serializer, Style};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Serialize for Point {
///     fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
///         ser.serialize_struct_begin(Style::Fold)?;
///         ser.serialize_struct_field("x", &self.x)?;
///         ser.serialize_struct_field("y", &self.y)?;
///         ser.serialize_struct_end()
///     }
/// }
///
/// let text = yamlet::to_string(&Point { x: 10, y: 20 }).unwrap();
/// assert_eq!(text, "x: 10\ny: 20\n");
/// ```
pub trait Serialize {
    /// Feeds this value's events into `ser`.
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()>;
}

/// A backend that consumes serialization events.
///
/// The crate ships two implementations: [`Writer`](crate::Writer) emits
/// Yamlet text, and [`to_value`](crate::to_value) drives one that builds a
/// [`Node`](crate::Node) tree. Scalar verbs, `none`, and the
/// sequence/mapping verbs are required; the struct verbs and the generic
/// entry helpers are provided.
pub trait Serializer {
    // Scalars.

    fn serialize_bool(&mut self, v: bool) -> Result<()>;
    fn serialize_i8(&mut self, v: i8) -> Result<()>;
    fn serialize_i16(&mut self, v: i16) -> Result<()>;
    fn serialize_i32(&mut self, v: i32) -> Result<()>;
    fn serialize_i64(&mut self, v: i64) -> Result<()>;
    fn serialize_u8(&mut self, v: u8) -> Result<()>;
    fn serialize_u16(&mut self, v: u16) -> Result<()>;
    fn serialize_u32(&mut self, v: u32) -> Result<()>;
    fn serialize_u64(&mut self, v: u64) -> Result<()>;
    fn serialize_f32(&mut self, v: f32) -> Result<()>;
    fn serialize_f64(&mut self, v: f64) -> Result<()>;
    fn serialize_char(&mut self, v: char) -> Result<()>;
    fn serialize_str(&mut self, v: &str) -> Result<()>;

    /// Writes a byte string as an inline sequence of `u8` scalars.
    fn serialize_bytes(&mut self, v: &[u8]) -> Result<()> {
        self.serialize_seq_begin(Style::Inline)?;
        for b in v {
            self.serialize_u8(*b)?;
        }
        self.serialize_seq_end()
    }

    /// Writes an explicitly absent value (`null`).
    fn serialize_none(&mut self) -> Result<()>;

    // Sequences.

    fn serialize_seq_begin(&mut self, style: Style) -> Result<()>;
    fn serialize_seq_end(&mut self) -> Result<()>;

    // Mappings.

    fn serialize_map_begin(&mut self, style: Style) -> Result<()>;
    fn serialize_map_end(&mut self) -> Result<()>;

    /// Opens an entry. The next scalar is the entry's key; keys must be
    /// scalars.
    fn serialize_map_key_begin(&mut self) -> Result<()>;
    fn serialize_map_key_end(&mut self) -> Result<()>;
    fn serialize_map_value_begin(&mut self) -> Result<()>;
    fn serialize_map_value_end(&mut self) -> Result<()>;

    /// Writes a complete entry key.
    fn serialize_map_key<K>(&mut self, key: &K) -> Result<()>
    where
        K: Serialize + ?Sized,
        Self: Sized,
    {
        self.serialize_map_key_begin()?;
        key.serialize(self)?;
        self.serialize_map_key_end()
    }

    /// Writes a complete entry value.
    fn serialize_map_value<V>(&mut self, value: &V) -> Result<()>
    where
        V: Serialize + ?Sized,
        Self: Sized,
    {
        self.serialize_map_value_begin()?;
        value.serialize(self)?;
        self.serialize_map_value_end()
    }

    /// Writes one `key: value` entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::{Result, Serialize, Serializer, Style};
    ///
    /// struct Temps;
    ///
    /// impl Serialize for Temps {
    ///     fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
    ///         ser.serialize_map_begin(Style::Fold)?;
    ///         ser.serialize_map_entry(&0u32, &-11i32)?;
    ///         ser.serialize_map_entry(&1u32, &-7i32)?;
    ///         ser.serialize_map_end()
    ///     }
    /// }
    ///
    /// assert_eq!(yamlet::to_string(&Temps).unwrap(), "0: -11\n1: -7\n");
    /// ```
    fn serialize_map_entry<K, V>(&mut self, key: &K, value: &V) -> Result<()>
    where
        K: Serialize + ?Sized,
        V: Serialize + ?Sized,
        Self: Sized,
    {
        self.serialize_map_key(key)?;
        self.serialize_map_value(value)
    }

    // Structs: a named-record layer over the mapping verbs.

    fn serialize_struct_begin(&mut self, style: Style) -> Result<()> {
        self.serialize_map_begin(style)
    }

    fn serialize_struct_end(&mut self) -> Result<()> {
        self.serialize_map_end()
    }

    /// Opens the named field `name` and leaves the session in value
    /// position.
    fn serialize_struct_field_begin(&mut self, name: &str) -> Result<()> {
        self.serialize_map_key_begin()?;
        self.serialize_str(name)?;
        self.serialize_map_key_end()?;
        self.serialize_map_value_begin()
    }

    fn serialize_struct_field_end(&mut self) -> Result<()> {
        self.serialize_map_value_end()
    }

    /// Writes one complete named field.
    fn serialize_struct_field<V>(&mut self, name: &str, value: &V) -> Result<()>
    where
        V: Serialize + ?Sized,
        Self: Sized,
    {
        self.serialize_struct_field_begin(name)?;
        value.serialize(self)?;
        self.serialize_struct_field_end()
    }
}
