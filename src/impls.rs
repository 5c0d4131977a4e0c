//! Protocol adapters for standard library types.
//!
//! Collections serialize as folded containers; tuples, being short and
//! fixed-arity, serialize inline. Reading mirrors writing: sizes come
//! from the begun container, so no adapter needs to probe ahead.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::{IndexMap, IndexSet};
use num_bigint::{BigInt, BigUint};

use crate::de::{Deserialize, Deserializer};
use crate::error::{Error, Result};
use crate::frame::Style;
use crate::ser::{Serialize, Serializer};

macro_rules! primitive_impls {
    ($($ty:ty => $ser:ident, $de:ident;)+) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
                    ser.$ser(*self)
                }
            }

            impl Deserialize for $ty {
                fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
                    de.$de()
                }
            }
        )+
    };
}

primitive_impls! {
    bool => serialize_bool, deserialize_bool;
    i8 => serialize_i8, deserialize_i8;
    i16 => serialize_i16, deserialize_i16;
    i32 => serialize_i32, deserialize_i32;
    i64 => serialize_i64, deserialize_i64;
    u8 => serialize_u8, deserialize_u8;
    u16 => serialize_u16, deserialize_u16;
    u32 => serialize_u32, deserialize_u32;
    u64 => serialize_u64, deserialize_u64;
    f32 => serialize_f32, deserialize_f32;
    f64 => serialize_f64, deserialize_f64;
    char => serialize_char, deserialize_char;
}

impl Serialize for isize {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_i64(*self as i64)
    }
}

impl Deserialize for isize {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        let value = de.deserialize_i64()?;
        isize::try_from(value).map_err(|_| Error::conversion(value.to_string(), "isize"))
    }
}

impl Serialize for usize {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_u64(*self as u64)
    }
}

impl Deserialize for usize {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        let value = de.deserialize_u64()?;
        usize::try_from(value).map_err(|_| Error::conversion(value.to_string(), "usize"))
    }
}

/// The unit value is absence.
impl Serialize for () {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_none()
    }
}

impl Deserialize for () {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_none()
    }
}

impl Serialize for str {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_str(self)
    }
}

impl Serialize for String {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_str(self)
    }
}

impl Deserialize for String {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_str()
    }
}

impl<T: Serialize + ?Sized> Serialize for &T {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        (**self).serialize(ser)
    }
}

impl<T: Serialize + ?Sized> Serialize for &mut T {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        (**self).serialize(ser)
    }
}

/// `None` is written as `null`; a present value is written as itself.
/// Reading probes with `is_some` first, so a null element or field turns
/// back into `None` without consuming anything else.
impl<T: Serialize> Serialize for Option<T> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        match self {
            Some(value) => value.serialize(ser),
            None => ser.serialize_none(),
        }
    }
}

impl<T: Deserialize> Deserialize for Option<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        if de.deserialize_is_some()? {
            Ok(Some(T::deserialize(de)?))
        } else {
            de.deserialize_none()?;
            Ok(None)
        }
    }
}

fn serialize_elements<'a, S, T, I>(ser: &mut S, iter: I) -> Result<()>
where
    S: Serializer,
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    ser.serialize_seq_begin(Style::Fold)?;
    for item in iter {
        item.serialize(ser)?;
    }
    ser.serialize_seq_end()
}

fn serialize_entries<'a, S, K, V, I>(ser: &mut S, iter: I) -> Result<()>
where
    S: Serializer,
    K: Serialize + 'a,
    V: Serialize + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    ser.serialize_map_begin(Style::Fold)?;
    for (key, value) in iter {
        ser.serialize_map_entry(key, value)?;
    }
    ser.serialize_map_end()
}

impl<T: Serialize> Serialize for [T] {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_elements(ser, self)
    }
}

impl<T: Serialize> Serialize for Vec<T> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_elements(ser, self)
    }
}

impl<T: Deserialize> Deserialize for Vec<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_seq_begin()?;
        let size = de.deserialize_seq_size()?;
        let mut items = Vec::with_capacity(size);
        for _ in 0..size {
            items.push(T::deserialize(de)?);
        }
        de.deserialize_seq_end()?;
        Ok(items)
    }
}

impl<T: Serialize, const N: usize> Serialize for [T; N] {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_elements(ser, self)
    }
}

/// Arrays require the document to carry exactly `N` elements.
impl<T: Deserialize, const N: usize> Deserialize for [T; N] {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_seq_begin()?;
        let size = de.deserialize_seq_size()?;
        if size != N {
            return Err(Error::mismatch(format!(
                "expected {N} elements, found {size}"
            )));
        }
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::deserialize(de)?);
        }
        de.deserialize_seq_end()?;
        items
            .try_into()
            .map_err(|_| Error::mismatch("sequence length mismatch"))
    }
}

impl<T: Serialize> Serialize for VecDeque<T> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_elements(ser, self)
    }
}

impl<T: Deserialize> Deserialize for VecDeque<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_seq_begin()?;
        let size = de.deserialize_seq_size()?;
        let mut items = VecDeque::with_capacity(size);
        for _ in 0..size {
            items.push_back(T::deserialize(de)?);
        }
        de.deserialize_seq_end()?;
        Ok(items)
    }
}

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_elements(ser, self)
    }
}

impl<T: Deserialize> Deserialize for LinkedList<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_seq_begin()?;
        let size = de.deserialize_seq_size()?;
        let mut items = LinkedList::new();
        for _ in 0..size {
            items.push_back(T::deserialize(de)?);
        }
        de.deserialize_seq_end()?;
        Ok(items)
    }
}

impl<T: Serialize + Ord> Serialize for BinaryHeap<T> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_elements(ser, self)
    }
}

impl<T: Deserialize + Ord> Deserialize for BinaryHeap<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_seq_begin()?;
        let size = de.deserialize_seq_size()?;
        let mut heap = BinaryHeap::with_capacity(size);
        for _ in 0..size {
            heap.push(T::deserialize(de)?);
        }
        de.deserialize_seq_end()?;
        Ok(heap)
    }
}

impl<T: Serialize, S2: BuildHasher> Serialize for HashSet<T, S2> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_elements(ser, self)
    }
}

impl<T, S2> Deserialize for HashSet<T, S2>
where
    T: Deserialize + Eq + Hash,
    S2: BuildHasher + Default,
{
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_seq_begin()?;
        let size = de.deserialize_seq_size()?;
        let mut set = HashSet::with_capacity_and_hasher(size, S2::default());
        for _ in 0..size {
            set.insert(T::deserialize(de)?);
        }
        de.deserialize_seq_end()?;
        Ok(set)
    }
}

impl<T: Serialize> Serialize for BTreeSet<T> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_elements(ser, self)
    }
}

impl<T: Deserialize + Ord> Deserialize for BTreeSet<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_seq_begin()?;
        let size = de.deserialize_seq_size()?;
        let mut set = BTreeSet::new();
        for _ in 0..size {
            set.insert(T::deserialize(de)?);
        }
        de.deserialize_seq_end()?;
        Ok(set)
    }
}

impl<T: Serialize, S2: BuildHasher> Serialize for IndexSet<T, S2> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_elements(ser, self)
    }
}

impl<T, S2> Deserialize for IndexSet<T, S2>
where
    T: Deserialize + Eq + Hash,
    S2: BuildHasher + Default,
{
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_seq_begin()?;
        let size = de.deserialize_seq_size()?;
        let mut set = IndexSet::with_capacity_and_hasher(size, S2::default());
        for _ in 0..size {
            set.insert(T::deserialize(de)?);
        }
        de.deserialize_seq_end()?;
        Ok(set)
    }
}

impl<K: Serialize, V: Serialize, S2: BuildHasher> Serialize for HashMap<K, V, S2> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_entries(ser, self)
    }
}

impl<K, V, S2> Deserialize for HashMap<K, V, S2>
where
    K: Deserialize + Eq + Hash,
    V: Deserialize,
    S2: BuildHasher + Default,
{
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_map_begin()?;
        let size = de.deserialize_map_size()?;
        let mut map = HashMap::with_capacity_and_hasher(size, S2::default());
        for _ in 0..size {
            let (key, value) = de.deserialize_map_entry()?;
            map.insert(key, value);
        }
        de.deserialize_map_end()?;
        Ok(map)
    }
}

impl<K: Serialize, V: Serialize> Serialize for BTreeMap<K, V> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_entries(ser, self)
    }
}

impl<K, V> Deserialize for BTreeMap<K, V>
where
    K: Deserialize + Ord,
    V: Deserialize,
{
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_map_begin()?;
        let size = de.deserialize_map_size()?;
        let mut map = BTreeMap::new();
        for _ in 0..size {
            let (key, value) = de.deserialize_map_entry()?;
            map.insert(key, value);
        }
        de.deserialize_map_end()?;
        Ok(map)
    }
}

/// Keeps document order, which makes it the natural map type for
/// round-tripping whole documents.
impl<K: Serialize, V: Serialize, S2: BuildHasher> Serialize for IndexMap<K, V, S2> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        serialize_entries(ser, self)
    }
}

impl<K, V, S2> Deserialize for IndexMap<K, V, S2>
where
    K: Deserialize + Eq + Hash,
    V: Deserialize,
    S2: BuildHasher + Default,
{
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        de.deserialize_map_begin()?;
        let size = de.deserialize_map_size()?;
        let mut map = IndexMap::with_capacity_and_hasher(size, S2::default());
        for _ in 0..size {
            let (key, value) = de.deserialize_map_entry()?;
            map.insert(key, value);
        }
        de.deserialize_map_end()?;
        Ok(map)
    }
}

macro_rules! tuple_impls {
    ($(($($name:ident $index:tt),+))+) => {
        $(
            impl<$($name: Serialize),+> Serialize for ($($name,)+) {
                fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
                    ser.serialize_seq_begin(Style::Inline)?;
                    $(self.$index.serialize(ser)?;)+
                    ser.serialize_seq_end()
                }
            }

            impl<$($name: Deserialize),+> Deserialize for ($($name,)+) {
                fn deserialize<De: Deserializer>(de: &mut De) -> Result<Self> {
                    de.deserialize_seq_begin()?;
                    let value = ($($name::deserialize(de)?,)+);
                    de.deserialize_seq_end()?;
                    Ok(value)
                }
            }
        )+
    };
}

tuple_impls! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6)
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7)
}

impl<T: Serialize + ?Sized> Serialize for Box<T> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        (**self).serialize(ser)
    }
}

impl<T: Deserialize> Deserialize for Box<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        Ok(Box::new(T::deserialize(de)?))
    }
}

impl<T: Serialize + ?Sized> Serialize for Rc<T> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        (**self).serialize(ser)
    }
}

impl<T: Deserialize> Deserialize for Rc<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        Ok(Rc::new(T::deserialize(de)?))
    }
}

impl<T: Serialize + ?Sized> Serialize for Arc<T> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        (**self).serialize(ser)
    }
}

impl<T: Deserialize> Deserialize for Arc<T> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        Ok(Arc::new(T::deserialize(de)?))
    }
}

/// RFC 3339 text, always with an offset, read back into UTC.
impl Serialize for DateTime<Utc> {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_str(&self.to_rfc3339())
    }
}

impl Deserialize for DateTime<Utc> {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        let text = de.deserialize_str()?;
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| Error::conversion(text, "RFC 3339 datetime"))
    }
}

impl Serialize for NaiveDate {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_str(&self.format("%Y-%m-%d").to_string())
    }
}

impl Deserialize for NaiveDate {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        let text = de.deserialize_str()?;
        NaiveDate::parse_from_str(&text, "%Y-%m-%d")
            .map_err(|_| Error::conversion(text, "date"))
    }
}

/// Decimal scalar text of arbitrary magnitude.
impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_str(&self.to_string())
    }
}

impl Deserialize for BigInt {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        let text = de.deserialize_str()?;
        text.parse()
            .map_err(|_| Error::conversion(text, "big integer"))
    }
}

impl Serialize for BigUint {
    fn serialize<S: Serializer>(&self, ser: &mut S) -> Result<()> {
        ser.serialize_str(&self.to_string())
    }
}

impl Deserialize for BigUint {
    fn deserialize<D: Deserializer>(de: &mut D) -> Result<Self> {
        let text = de.deserialize_str()?;
        text.parse()
            .map_err(|_| Error::conversion(text, "big integer"))
    }
}
