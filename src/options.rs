//! Configuration options for Yamlet output.
//!
//! ## Examples
//!
//! ```rust
//! use yamlet::{to_string_with_options, Options};
//!
//! let value = vec![1, 2, 3];
//!
//! // Four-space indentation
//! let options = Options::new().with_indent(4);
//! let text = to_string_with_options(&value, options).unwrap();
//!
//! // Lead the document with the `---` marker
//! let options = Options::new().with_doc_start(true);
//! let text = to_string_with_options(&value, options).unwrap();
//! assert!(text.starts_with("---\n"));
//! ```

/// Configuration options for Yamlet output.
///
/// Controls indentation width and the optional document start marker.
/// Parsing needs no configuration; any indentation consistent within a
/// document is accepted.
///
/// # Examples
///
/// ```rust
/// use yamlet::Options;
///
/// let options = Options::new();
/// assert_eq!(options.indent, 2);
///
/// let options = Options::new().with_indent(4).with_doc_start(true);
/// assert_eq!(options.indent, 4);
/// assert!(options.doc_start);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Spaces per nesting level in folded output.
    pub indent: usize,
    /// Whether output begins with a `---` line.
    pub doc_start: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent: 2,
            doc_start: false,
        }
    }
}

impl Options {
    /// Creates default options (two-space indent, no document marker).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per nesting level.
    ///
    /// Default is 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Options;
    ///
    /// let options = Options::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets whether output begins with a `---` document start line.
    ///
    /// Default is `false`. The parser skips the marker either way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yamlet::Options;
    ///
    /// let options = Options::new().with_doc_start(true);
    /// assert!(options.doc_start);
    /// ```
    #[must_use]
    pub fn with_doc_start(mut self, doc_start: bool) -> Self {
        self.doc_start = doc_start;
        self
    }
}
