//! Ordered mapping type for Yamlet documents.
//!
//! This module provides [`Mapping`], the entry list behind
//! [`Node::Mapping`](crate::Node::Mapping). It is an ordered multimap:
//! entries keep document order, and duplicate keys are preserved verbatim
//! rather than collapsed.
//!
//! Named lookup ([`Mapping::get`]) is a linear scan returning the first
//! matching entry, which is the same lookup the reader uses for struct
//! fields.
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::{Mapping, Node};
//!
//! let mut map = Mapping::new();
//! map.insert(Node::from("name"), Node::from("Alice"));
//! map.insert(Node::from("age"), Node::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::value::Node;

/// An ordered multimap of [`Node`] keys to [`Node`] values.
///
/// Keys produced by the parser are always scalars, but the entry type is the
/// full [`Node`] so the tree model stays uniform.
///
/// # Examples
///
/// ```rust
/// use yamlet::{Mapping, Node};
///
/// let mut map = Mapping::new();
/// map.insert(Node::from("first"), Node::from(1));
/// map.insert(Node::from("second"), Node::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().filter_map(|k| k.as_str()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<(Node, Node)>,
}

impl Mapping {
    /// Creates an empty `Mapping`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Mapping;
    ///
    /// let map = Mapping::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Mapping {
            entries: Vec::new(),
        }
    }

    /// Creates an empty `Mapping` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Mapping {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends an entry to the mapping.
    ///
    /// Existing entries with the same key are kept; the new entry goes last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::{Mapping, Node};
    ///
    /// let mut map = Mapping::new();
    /// map.insert(Node::from("key"), Node::from(42));
    /// map.insert(Node::from("key"), Node::from(43));
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(42));
    /// ```
    pub fn insert(&mut self, key: Node, value: Node) {
        self.entries.push((key, value));
    }

    /// Returns the value of the first entry whose key text equals `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::{Mapping, Node};
    ///
    /// let mut map = Mapping::new();
    /// map.insert(Node::from("key"), Node::from(42));
    /// assert_eq!(map.get("key").and_then(|v| v.as_i64()), Some(42));
    /// assert!(map.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    /// Returns the values of every entry whose key text equals `key`, in
    /// document order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.entries
            .iter()
            .filter(move |(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    /// Returns the entry at `index`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&Node, &Node)> {
        self.entries.get(index).map(|(k, v)| (k, v))
    }

    /// Returns `true` if any entry's key text equals `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the keys, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values, in document order.
    pub fn values(&self) -> impl Iterator<Item = &Node> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns an iterator over the entries, in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, (Node, Node)> {
        self.entries.iter()
    }
}

impl IntoIterator for Mapping {
    type Item = (Node, Node);
    type IntoIter = std::vec::IntoIter<(Node, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a (Node, Node);
    type IntoIter = std::slice::Iter<'a, (Node, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(Node, Node)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (Node, Node)>>(iter: T) -> Self {
        Mapping {
            entries: Vec::from_iter(iter),
        }
    }
}

impl Extend<(Node, Node)> for Mapping {
    fn extend<T: IntoIterator<Item = (Node, Node)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}
