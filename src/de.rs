//! The read half of the event protocol.
//!
//! Deserialization is pull-driven: a data type asks the backend for exactly
//! the events it expects, and the backend answers them from a parsed
//! document tree. [`Deserialize`] is the adapter trait data types implement;
//! [`Deserializer`] is the backend trait that answers the calls.
//!
//! ## Reading model
//!
//! The backend keeps a cursor into the document. Scalar reads resolve the
//! current node and convert its text to the requested type. Sequences are
//! read positionally: each scalar (or completed nested container) under an
//! open sequence advances the cursor exactly once. Mapping entries can be
//! read positionally with the key/value verbs, or by name with
//! [`deserialize_map_key_find`](Deserializer::deserialize_map_key_find),
//! which locates an entry regardless of where it appears in the document.
//! The struct verbs build on named lookup, so field order in the document
//! never matters.
//!
//! [`deserialize_is_some`](Deserializer::deserialize_is_some) peeks at the
//! current node without consuming it; every other read either converts or
//! fails with a typed [`Error`](crate::Error). There are no partial results.

use crate::error::Result;

/// A data type that can reconstruct itself from a [`Deserializer`].
///
/// The event sequence an implementation requests must mirror what its
/// [`Serialize`](crate::Serialize) counterpart writes.
///
/// # Examples
///
/// ```rust
/// use yamlet::{Deserialize, Deserializer, Result};
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Deserialize for Point {
///     fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
///         de.deserialize_struct_begin()?;
///         let x = de.deserialize_struct_field("x")?;
///         let y = de.deserialize_struct_field("y")?;
///         de.deserialize_struct_end()?;
///         Ok(Point { x, y })
///     }
/// }
///
/// // Field order in the document does not matter.
/// let point: Point = yamlet::from_str("y: 20\nx: 10\n").unwrap();
/// assert_eq!(point, Point { x: 10, y: 20 });
/// ```
pub trait Deserialize: Sized {
    /// Reconstructs a value by pulling events from `de`.
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self>;
}

/// A backend that answers deserialization events from a document.
///
/// [`Reader`](crate::Reader) is the tree-walking implementation. Scalar
/// verbs, the absence verbs and the sequence/mapping verbs are required;
/// struct verbs and the generic entry helpers are provided.
pub trait Deserializer {
    // Scalars. Each read converts the current node's text and, under an
    // open sequence, advances the cursor once.

    fn deserialize_bool(&mut self) -> Result<bool>;
    fn deserialize_i8(&mut self) -> Result<i8>;
    fn deserialize_i16(&mut self) -> Result<i16>;
    fn deserialize_i32(&mut self) -> Result<i32>;
    fn deserialize_i64(&mut self) -> Result<i64>;
    fn deserialize_u8(&mut self) -> Result<u8>;
    fn deserialize_u16(&mut self) -> Result<u16>;
    fn deserialize_u32(&mut self) -> Result<u32>;
    fn deserialize_u64(&mut self) -> Result<u64>;
    fn deserialize_f32(&mut self) -> Result<f32>;
    fn deserialize_f64(&mut self) -> Result<f64>;
    fn deserialize_char(&mut self) -> Result<char>;
    fn deserialize_str(&mut self) -> Result<String>;

    /// Reads a byte string written as a sequence of `u8` scalars.
    fn deserialize_bytes(&mut self) -> Result<Vec<u8>> {
        self.deserialize_seq_begin()?;
        let len = self.deserialize_seq_size()?;
        let mut bytes = Vec::with_capacity(len);
        for _ in 0..len {
            bytes.push(self.deserialize_u8()?);
        }
        self.deserialize_seq_end()?;
        Ok(bytes)
    }

    /// Reports whether the current node holds a value (is not `null`).
    ///
    /// Never moves the cursor; a caller decides whether to descend or to
    /// consume the absence with
    /// [`deserialize_none`](Deserializer::deserialize_none).
    fn deserialize_is_some(&mut self) -> Result<bool>;

    /// Consumes an explicit `null` and advances like a scalar read.
    fn deserialize_none(&mut self) -> Result<()>;

    // Sequences.

    fn deserialize_seq_begin(&mut self) -> Result<()>;
    /// Number of elements of the sequence most recently begun.
    fn deserialize_seq_size(&mut self) -> Result<usize>;
    fn deserialize_seq_end(&mut self) -> Result<()>;

    // Mappings.

    fn deserialize_map_begin(&mut self) -> Result<()>;
    /// Number of entries of the mapping most recently begun.
    fn deserialize_map_size(&mut self) -> Result<usize>;
    fn deserialize_map_end(&mut self) -> Result<()>;

    /// Marks the start of a positional key read.
    fn deserialize_map_key_begin(&mut self) -> Result<()>;
    fn deserialize_map_key_end(&mut self) -> Result<()>;

    /// Locates the first entry whose key text equals `key` and positions the
    /// session at its value, regardless of entry order.
    ///
    /// Fails with [`KeyNotFound`](crate::Error::KeyNotFound) when no entry
    /// matches.
    fn deserialize_map_key_find(&mut self, key: &str) -> Result<()>;

    fn deserialize_map_value_begin(&mut self) -> Result<()>;
    fn deserialize_map_value_end(&mut self) -> Result<()>;

    /// Reads a complete entry key positionally.
    fn deserialize_map_key<K>(&mut self) -> Result<K>
    where
        K: Deserialize,
        Self: Sized,
    {
        self.deserialize_map_key_begin()?;
        let key = K::deserialize(self)?;
        self.deserialize_map_key_end()?;
        Ok(key)
    }

    /// Reads a complete entry value.
    fn deserialize_map_value<V>(&mut self) -> Result<V>
    where
        V: Deserialize,
        Self: Sized,
    {
        self.deserialize_map_value_begin()?;
        let value = V::deserialize(self)?;
        self.deserialize_map_value_end()?;
        Ok(value)
    }

    /// Reads one complete `key: value` entry positionally.
    fn deserialize_map_entry<K, V>(&mut self) -> Result<(K, V)>
    where
        K: Deserialize,
        V: Deserialize,
        Self: Sized,
    {
        let key = self.deserialize_map_key()?;
        let value = self.deserialize_map_value()?;
        Ok((key, value))
    }

    // Structs: named-record layer over the mapping verbs.

    fn deserialize_struct_begin(&mut self) -> Result<()> {
        self.deserialize_map_begin()
    }

    fn deserialize_struct_end(&mut self) -> Result<()> {
        self.deserialize_map_end()
    }

    /// Positions the session at the value of the named field.
    fn deserialize_struct_field_begin(&mut self, name: &str) -> Result<()> {
        self.deserialize_map_key_find(name)?;
        self.deserialize_map_value_begin()
    }

    fn deserialize_struct_field_end(&mut self) -> Result<()> {
        self.deserialize_map_value_end()
    }

    /// Reports whether the open mapping has an entry named `name`, without
    /// moving the cursor.
    ///
    /// Missing fields otherwise hard-fail; this is the opt-in for adapters
    /// that tolerate genuinely absent keys.
    fn deserialize_struct_has_field(&mut self, name: &str) -> Result<bool>;

    /// Reads one complete named field.
    fn deserialize_struct_field<V>(&mut self, name: &str) -> Result<V>
    where
        V: Deserialize,
        Self: Sized,
    {
        self.deserialize_struct_field_begin(name)?;
        let value = V::deserialize(self)?;
        self.deserialize_struct_field_end()?;
        Ok(value)
    }
}
