//! The tree-walking read backend.
//!
//! [`Reader`] implements [`Deserializer`] over a parsed [`Node`] tree. A
//! stack of cursors tracks the position inside every open container:
//!
//! - sequences advance element by element as scalars and containers are
//!   consumed;
//! - mapping entries can be walked in document order (key, then value) or
//!   looked up by name with [`deserialize_map_key_find`], which leaves the
//!   entry order untouched and so supports reading fields in any order.
//!
//! Scalar text converts to the requested type at read time; the tree
//! itself stays untyped. A failed conversion, a missing key, or an event
//! that does not match the tree shape returns an error and leaves the
//! remaining structure readable.
//!
//! [`deserialize_map_key_find`]: Deserializer::deserialize_map_key_find

use crate::de::Deserializer;
use crate::error::{Error, Result};
use crate::map::Mapping;
use crate::value::{parse_bool, parse_f64, parse_i64, parse_u64, Node};

enum Cursor<'a> {
    /// A single node to read next: the document root, or a value found
    /// by key lookup.
    At(&'a Node),
    /// A begun sequence and the index of the next unread element.
    Seq(&'a [Node], usize),
    /// A begun mapping and the index of the next unread entry.
    Map(&'a Mapping, usize),
}

/// A [`Deserializer`] that reads from a [`Node`] tree.
///
/// Most callers go through [`from_str`](crate::from_str) or
/// [`from_value`](crate::from_value); driving a `Reader` directly is
/// useful for picking single values out of a document.
///
/// # Examples
///
/// ```rust
/// use yamlet::{Deserializer, Reader};
///
/// let doc = yamlet::parse_str("x: 10\ny: 20\n").unwrap();
/// let mut reader = Reader::new(&doc);
///
/// reader.deserialize_map_begin().unwrap();
/// let y: i32 = reader.deserialize_struct_field("y").unwrap();
/// reader.deserialize_map_end().unwrap();
///
/// assert_eq!(y, 20);
/// ```
pub struct Reader<'a> {
    stack: Vec<Cursor<'a>>,
    expect_key: bool,
}

impl<'a> Reader<'a> {
    /// Creates a reader positioned at the root of `node`.
    #[must_use]
    pub fn new(node: &'a Node) -> Self {
        Reader {
            stack: vec![Cursor::At(node)],
            expect_key: false,
        }
    }

    /// The node the next read event applies to.
    fn target(&self) -> Result<&'a Node> {
        match self.stack.last() {
            Some(Cursor::At(node)) => Ok(*node),
            Some(Cursor::Seq(items, index)) => items
                .get(*index)
                .ok_or_else(|| Error::mismatch("read past the end of a sequence")),
            Some(Cursor::Map(map, index)) => match map.get_index(*index) {
                Some((key, value)) => Ok(if self.expect_key { key } else { value }),
                None => Err(Error::mismatch("read past the end of a mapping")),
            },
            None => Err(Error::mismatch("no value to read")),
        }
    }

    /// Scalar text of the target, or the error a non-scalar deserves.
    fn scalar_text(&self, expecting: &'static str) -> Result<&'a str> {
        match self.target()? {
            Node::Scalar(text) => Ok(text),
            Node::Null => Err(Error::conversion("null", expecting)),
            other => Err(Error::expected("scalar", other.kind_name())),
        }
    }

    /// A consumed scalar steps its enclosing sequence forward. Mapping
    /// entries step on `value_end` instead, and keys never advance.
    fn advance_after_scalar(&mut self) {
        if self.expect_key {
            return;
        }
        if let Some(Cursor::Seq(_, index)) = self.stack.last_mut() {
            *index += 1;
        }
    }

    /// A closed container counts as one consumed element of the
    /// sequence around it.
    fn advance_enclosing(&mut self) {
        if let Some(Cursor::Seq(_, index)) = self.stack.last_mut() {
            *index += 1;
        }
    }

    fn read_signed(&mut self, expecting: &'static str) -> Result<i64> {
        let text = self.scalar_text(expecting)?;
        let value =
            parse_i64(text).ok_or_else(|| Error::conversion(text, expecting))?;
        self.advance_after_scalar();
        Ok(value)
    }

    fn read_unsigned(&mut self, expecting: &'static str) -> Result<u64> {
        let text = self.scalar_text(expecting)?;
        let value =
            parse_u64(text).ok_or_else(|| Error::conversion(text, expecting))?;
        self.advance_after_scalar();
        Ok(value)
    }
}

impl<'a> Deserializer for Reader<'a> {
    fn deserialize_bool(&mut self) -> Result<bool> {
        let text = self.scalar_text("bool")?;
        let value = parse_bool(text).ok_or_else(|| Error::conversion(text, "bool"))?;
        self.advance_after_scalar();
        Ok(value)
    }

    fn deserialize_i8(&mut self) -> Result<i8> {
        let text = self.scalar_text("i8")?;
        let value = parse_i64(text)
            .and_then(|v| i8::try_from(v).ok())
            .ok_or_else(|| Error::conversion(text, "i8"))?;
        self.advance_after_scalar();
        Ok(value)
    }

    fn deserialize_i16(&mut self) -> Result<i16> {
        let text = self.scalar_text("i16")?;
        let value = parse_i64(text)
            .and_then(|v| i16::try_from(v).ok())
            .ok_or_else(|| Error::conversion(text, "i16"))?;
        self.advance_after_scalar();
        Ok(value)
    }

    fn deserialize_i32(&mut self) -> Result<i32> {
        let text = self.scalar_text("i32")?;
        let value = parse_i64(text)
            .and_then(|v| i32::try_from(v).ok())
            .ok_or_else(|| Error::conversion(text, "i32"))?;
        self.advance_after_scalar();
        Ok(value)
    }

    fn deserialize_i64(&mut self) -> Result<i64> {
        self.read_signed("i64")
    }

    fn deserialize_u8(&mut self) -> Result<u8> {
        let text = self.scalar_text("u8")?;
        let value = parse_u64(text)
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| Error::conversion(text, "u8"))?;
        self.advance_after_scalar();
        Ok(value)
    }

    fn deserialize_u16(&mut self) -> Result<u16> {
        let text = self.scalar_text("u16")?;
        let value = parse_u64(text)
            .and_then(|v| u16::try_from(v).ok())
            .ok_or_else(|| Error::conversion(text, "u16"))?;
        self.advance_after_scalar();
        Ok(value)
    }

    fn deserialize_u32(&mut self) -> Result<u32> {
        let text = self.scalar_text("u32")?;
        let value = parse_u64(text)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| Error::conversion(text, "u32"))?;
        self.advance_after_scalar();
        Ok(value)
    }

    fn deserialize_u64(&mut self) -> Result<u64> {
        self.read_unsigned("u64")
    }

    fn deserialize_f32(&mut self) -> Result<f32> {
        let text = self.scalar_text("f32")?;
        let value = parse_f64(text).ok_or_else(|| Error::conversion(text, "f32"))?;
        self.advance_after_scalar();
        Ok(value as f32)
    }

    fn deserialize_f64(&mut self) -> Result<f64> {
        let text = self.scalar_text("f64")?;
        let value = parse_f64(text).ok_or_else(|| Error::conversion(text, "f64"))?;
        self.advance_after_scalar();
        Ok(value)
    }

    fn deserialize_char(&mut self) -> Result<char> {
        let text = self.scalar_text("char")?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                self.advance_after_scalar();
                Ok(ch)
            }
            _ => Err(Error::conversion(text, "char")),
        }
    }

    fn deserialize_str(&mut self) -> Result<String> {
        let text = self.scalar_text("string")?;
        self.advance_after_scalar();
        Ok(text.to_string())
    }

    fn deserialize_is_some(&mut self) -> Result<bool> {
        Ok(!self.target()?.is_null())
    }

    fn deserialize_none(&mut self) -> Result<()> {
        match self.target()? {
            Node::Null => {
                self.advance_after_scalar();
                Ok(())
            }
            other => Err(Error::expected("null", other.kind_name())),
        }
    }

    fn deserialize_seq_begin(&mut self) -> Result<()> {
        match self.target()? {
            Node::Sequence(items) => {
                self.stack.push(Cursor::Seq(items, 0));
                Ok(())
            }
            other => Err(Error::expected("sequence", other.kind_name())),
        }
    }

    fn deserialize_seq_size(&mut self) -> Result<usize> {
        match self.stack.last() {
            Some(Cursor::Seq(items, _)) => Ok(items.len()),
            _ => Err(Error::mismatch("sequence size outside an open sequence")),
        }
    }

    fn deserialize_seq_end(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(Cursor::Seq(..)) => {
                self.advance_enclosing();
                Ok(())
            }
            Some(other) => {
                self.stack.push(other);
                Err(Error::mismatch("sequence end without an open sequence"))
            }
            None => Err(Error::mismatch("sequence end without an open sequence")),
        }
    }

    fn deserialize_map_begin(&mut self) -> Result<()> {
        match self.target()? {
            Node::Mapping(map) => {
                self.stack.push(Cursor::Map(map, 0));
                self.expect_key = false;
                Ok(())
            }
            other => Err(Error::expected("mapping", other.kind_name())),
        }
    }

    fn deserialize_map_size(&mut self) -> Result<usize> {
        match self.stack.last() {
            Some(Cursor::Map(map, _)) => Ok(map.len()),
            _ => Err(Error::mismatch("mapping size outside an open mapping")),
        }
    }

    fn deserialize_map_end(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(Cursor::Map(..)) => {
                self.expect_key = false;
                self.advance_enclosing();
                Ok(())
            }
            Some(other) => {
                self.stack.push(other);
                Err(Error::mismatch("mapping end without an open mapping"))
            }
            None => Err(Error::mismatch("mapping end without an open mapping")),
        }
    }

    fn deserialize_map_key_begin(&mut self) -> Result<()> {
        match self.stack.last() {
            Some(Cursor::Map(..)) => {
                self.expect_key = true;
                Ok(())
            }
            _ => Err(Error::mismatch("entry key outside an open mapping")),
        }
    }

    fn deserialize_map_key_end(&mut self) -> Result<()> {
        self.expect_key = false;
        Ok(())
    }

    fn deserialize_map_key_find(&mut self, key: &str) -> Result<()> {
        let map = match self.stack.last() {
            Some(Cursor::Map(map, _)) => *map,
            _ => return Err(Error::mismatch("key lookup outside an open mapping")),
        };
        match map.get(key) {
            Some(value) => {
                self.stack.push(Cursor::At(value));
                Ok(())
            }
            None => Err(Error::key_not_found(key)),
        }
    }

    fn deserialize_map_value_begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn deserialize_map_value_end(&mut self) -> Result<()> {
        match self.stack.last_mut() {
            // a value reached by key lookup
            Some(Cursor::At(_)) => {
                self.stack.pop();
                Ok(())
            }
            Some(Cursor::Map(_, index)) => {
                *index += 1;
                Ok(())
            }
            _ => Err(Error::mismatch("entry value end outside an open mapping")),
        }
    }

    fn deserialize_struct_has_field(&mut self, name: &str) -> Result<bool> {
        match self.stack.last() {
            Some(Cursor::Map(map, _)) => Ok(map.contains_key(name)),
            _ => Err(Error::mismatch("field query outside an open mapping")),
        }
    }
}
