//! The text-emitting backend.
//!
//! [`Writer`] implements [`Serializer`] by appending to an output string as
//! events arrive; nothing is buffered or reordered. A stack of
//! [`Frame`]s tracks every open container and entry, and each event first
//! runs the top frame's *prefix action* (separator, line break + indent,
//! `- ` marker) before emitting its own text.
//!
//! Layout rules:
//!
//! - A folded container pushed at the root sits at column 0; any other
//!   container sits one indent step right of the frame it was pushed under.
//!   Entries inherit their mapping's indent, so a container in entry-value
//!   position lands one step right of the mapping.
//! - The first child of a folded container begins a fresh line only when the
//!   container is an entry value; after a `- ` marker or at the root it
//!   continues the current line.
//! - A folded container that ends empty emits its canonical empty form
//!   (` []` / ` {}` in value position and at the root, bare after a marker).
//! - Completing the root value terminates the line.

use crate::error::{Error, Result};
use crate::frame::{Frame, FrameKind, Style};
use crate::options::Options;
use crate::ser::Serializer;
use crate::value::{float32_text, float_text};

/// A [`Serializer`] that emits Yamlet text.
///
/// Most callers go through [`to_string`](crate::to_string); driving a
/// `Writer` directly is useful for hand-built documents.
///
/// # Examples
///
/// ```rust
/// use yamlet::{Serializer, Style, Writer};
///
/// let mut writer = Writer::new();
/// writer.serialize_seq_begin(Style::Fold).unwrap();
/// writer.serialize_i32(1).unwrap();
/// writer.serialize_i32(2).unwrap();
/// writer.serialize_seq_end().unwrap();
///
/// assert_eq!(writer.into_string(), "- 1\n- 2\n");
/// ```
#[derive(Debug)]
pub struct Writer {
    out: String,
    stack: Vec<Frame>,
    options: Options,
    root_done: bool,
}

impl Writer {
    /// Creates a writer with default [`Options`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Creates a writer with the given [`Options`].
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        let mut out = String::with_capacity(256);
        if options.doc_start {
            out.push_str("---\n");
        }
        Writer {
            out,
            stack: Vec::new(),
            options,
            root_done: false,
        }
    }

    /// Consumes the writer and returns the emitted text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }

    fn newline_indent(&mut self, indent: usize) {
        self.out.push('\n');
        for _ in 0..indent {
            self.out.push(' ');
        }
    }

    /// Indent column for a container pushed right now. A container opened
    /// under a folded sequence continues the `- ` marker line, so its
    /// children align two columns in regardless of the indent option.
    fn child_indent(&self) -> usize {
        match self.stack.last() {
            Some(frame) if frame.kind == FrameKind::Sequence && frame.style == Style::Fold => {
                frame.indent + 2
            }
            Some(frame) => frame.indent + self.options.indent,
            None => 0,
        }
    }

    fn bump_top(&mut self) -> usize {
        match self.stack.last_mut() {
            Some(frame) => {
                frame.count += 1;
                frame.count
            }
            None => 0,
        }
    }

    /// True when the frame below the top is an entry in value phase, which
    /// is what puts the top container's first child on a fresh line.
    fn parent_is_entry_value(&self) -> bool {
        if self.stack.len() < 2 {
            return false;
        }
        let parent = self.stack[self.stack.len() - 2];
        parent.kind == FrameKind::Entry && parent.count >= 2
    }

    /// Prefix action for a scalar (or `null`) event.
    fn scalar_prefix(&mut self) -> Result<()> {
        let Some(&top) = self.stack.last() else {
            if self.root_done {
                return Err(Error::mismatch("root value already written"));
            }
            return Ok(());
        };
        match top.kind {
            FrameKind::Sequence => {
                let count = self.bump_top();
                match top.style {
                    Style::Inline => {
                        if count > 1 {
                            self.out.push_str(", ");
                        }
                    }
                    Style::Fold => {
                        if count > 1 || self.parent_is_entry_value() {
                            self.newline_indent(top.indent);
                        }
                        self.out.push_str("- ");
                    }
                }
                Ok(())
            }
            FrameKind::Mapping => Err(Error::mismatch("scalar in mapping outside an entry")),
            FrameKind::Entry => match self.bump_top() {
                1 => Ok(()),
                2 => {
                    self.out.push(' ');
                    Ok(())
                }
                _ => Err(Error::mismatch("entry already has a key and a value")),
            },
        }
    }

    /// Prefix action for a container `begin` event.
    fn container_prefix(&mut self, style: Style) -> Result<()> {
        let Some(&top) = self.stack.last() else {
            if self.root_done {
                return Err(Error::mismatch("root value already written"));
            }
            return Ok(());
        };
        if style == Style::Fold && top.style == Style::Inline {
            return Err(Error::mismatch(
                "folded container inside an inline container",
            ));
        }
        match top.kind {
            FrameKind::Sequence => {
                let count = self.bump_top();
                match top.style {
                    Style::Inline => {
                        if count > 1 {
                            self.out.push_str(", ");
                        }
                    }
                    Style::Fold => {
                        if count > 1 || self.parent_is_entry_value() {
                            self.newline_indent(top.indent);
                        }
                        self.out.push_str("- ");
                    }
                }
                Ok(())
            }
            FrameKind::Mapping => Err(Error::mismatch("container in mapping outside an entry")),
            FrameKind::Entry => match self.bump_top() {
                1 => Err(Error::unsupported("container as mapping key")),
                2 => {
                    if style == Style::Inline {
                        self.out.push(' ');
                    }
                    Ok(())
                }
                _ => Err(Error::mismatch("entry already has a key and a value")),
            },
        }
    }

    fn write_scalar(&mut self, text: &str) -> Result<()> {
        self.scalar_prefix()?;
        self.out.push_str(text);
        self.finish_scalar();
        Ok(())
    }

    fn finish_scalar(&mut self) {
        if self.stack.is_empty() {
            self.out.push('\n');
            self.root_done = true;
        }
    }

    /// Canonical form of a folded container that closed with no children.
    fn push_empty_marker(&mut self, marker: &str) {
        match self.stack.last().map(|frame| frame.kind) {
            None | Some(FrameKind::Entry) => {
                self.out.push(' ');
                self.out.push_str(marker);
            }
            _ => self.out.push_str(marker),
        }
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer for Writer {
    fn serialize_bool(&mut self, v: bool) -> Result<()> {
        self.write_scalar(if v { "true" } else { "false" })
    }

    fn serialize_i8(&mut self, v: i8) -> Result<()> {
        self.write_scalar(&v.to_string())
    }

    fn serialize_i16(&mut self, v: i16) -> Result<()> {
        self.write_scalar(&v.to_string())
    }

    fn serialize_i32(&mut self, v: i32) -> Result<()> {
        self.write_scalar(&v.to_string())
    }

    fn serialize_i64(&mut self, v: i64) -> Result<()> {
        self.write_scalar(&v.to_string())
    }

    fn serialize_u8(&mut self, v: u8) -> Result<()> {
        self.write_scalar(&v.to_string())
    }

    fn serialize_u16(&mut self, v: u16) -> Result<()> {
        self.write_scalar(&v.to_string())
    }

    fn serialize_u32(&mut self, v: u32) -> Result<()> {
        self.write_scalar(&v.to_string())
    }

    fn serialize_u64(&mut self, v: u64) -> Result<()> {
        self.write_scalar(&v.to_string())
    }

    fn serialize_f32(&mut self, v: f32) -> Result<()> {
        self.write_scalar(&float32_text(v))
    }

    fn serialize_f64(&mut self, v: f64) -> Result<()> {
        self.write_scalar(&float_text(v))
    }

    fn serialize_char(&mut self, v: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(&mut self, v: &str) -> Result<()> {
        self.scalar_prefix()?;
        if needs_quotes(v) {
            push_quoted(&mut self.out, v);
        } else {
            self.out.push_str(v);
        }
        self.finish_scalar();
        Ok(())
    }

    fn serialize_none(&mut self) -> Result<()> {
        self.write_scalar("null")
    }

    fn serialize_seq_begin(&mut self, style: Style) -> Result<()> {
        self.container_prefix(style)?;
        if style == Style::Inline {
            self.out.push('[');
        }
        let indent = self.child_indent();
        self.stack.push(Frame::new(FrameKind::Sequence, style, indent));
        Ok(())
    }

    fn serialize_seq_end(&mut self) -> Result<()> {
        let frame = match self.stack.pop() {
            Some(frame) if frame.kind == FrameKind::Sequence => frame,
            Some(frame) => {
                self.stack.push(frame);
                return Err(Error::mismatch("sequence end without an open sequence"));
            }
            None => return Err(Error::mismatch("sequence end without an open sequence")),
        };
        match frame.style {
            Style::Inline => self.out.push(']'),
            Style::Fold => {
                if frame.count == 0 {
                    self.push_empty_marker("[]");
                }
            }
        }
        if self.stack.is_empty() {
            self.out.push('\n');
            self.root_done = true;
        }
        Ok(())
    }

    fn serialize_map_begin(&mut self, style: Style) -> Result<()> {
        self.container_prefix(style)?;
        if style == Style::Inline {
            self.out.push('{');
        }
        let indent = self.child_indent();
        self.stack.push(Frame::new(FrameKind::Mapping, style, indent));
        Ok(())
    }

    fn serialize_map_end(&mut self) -> Result<()> {
        let frame = match self.stack.pop() {
            Some(frame) if frame.kind == FrameKind::Mapping => frame,
            Some(frame) => {
                self.stack.push(frame);
                return Err(Error::mismatch("mapping end without an open mapping"));
            }
            None => return Err(Error::mismatch("mapping end without an open mapping")),
        };
        match frame.style {
            Style::Inline => self.out.push('}'),
            Style::Fold => {
                if frame.count == 0 {
                    self.push_empty_marker("{}");
                }
            }
        }
        if self.stack.is_empty() {
            self.out.push('\n');
            self.root_done = true;
        }
        Ok(())
    }

    fn serialize_map_key_begin(&mut self) -> Result<()> {
        let Some(&top) = self.stack.last() else {
            return Err(Error::mismatch("entry key outside an open mapping"));
        };
        if top.kind != FrameKind::Mapping {
            return Err(Error::mismatch("entry key outside an open mapping"));
        }
        let count = self.bump_top();
        match top.style {
            Style::Inline => {
                if count > 1 {
                    self.out.push_str(", ");
                }
            }
            Style::Fold => {
                if count > 1 || self.parent_is_entry_value() {
                    self.newline_indent(top.indent);
                }
            }
        }
        // entries inherit the mapping's indent
        self.stack.push(Frame::new(FrameKind::Entry, top.style, top.indent));
        Ok(())
    }

    fn serialize_map_key_end(&mut self) -> Result<()> {
        match self.stack.last() {
            Some(frame) if frame.kind == FrameKind::Entry => match frame.count {
                1 => {
                    self.out.push(':');
                    Ok(())
                }
                0 => Err(Error::mismatch("entry key missing")),
                _ => Err(Error::mismatch("entry key end out of order")),
            },
            _ => Err(Error::mismatch("entry key end without an open key")),
        }
    }

    fn serialize_map_value_begin(&mut self) -> Result<()> {
        Ok(())
    }

    fn serialize_map_value_end(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(frame) if frame.kind == FrameKind::Entry => {
                if frame.count < 2 {
                    self.stack.push(frame);
                    return Err(Error::mismatch("entry value missing"));
                }
                Ok(())
            }
            Some(frame) => {
                self.stack.push(frame);
                Err(Error::mismatch("entry value end without an open entry"))
            }
            None => Err(Error::mismatch("entry value end without an open entry")),
        }
    }
}

/// Whether scalar text must be double-quoted to survive a round trip.
///
/// Quoting here is structural: text that would parse as a different shape
/// (absence, a comment, a marker, an inline bracket) or would lose
/// whitespace. Number- and bool-shaped text stays bare; the tree is textual
/// and the read target decides its type.
pub(crate) fn needs_quotes(s: &str) -> bool {
    if crate::value::is_null_text(s) || s == "-" {
        return true;
    }
    if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
        return true;
    }
    // leading text the parser would consume as structure
    if s.starts_with("- ") || s.starts_with("---") || s.starts_with('\u{feff}') {
        return true;
    }
    if s.starts_with(['?', '&', '*', '!', '|', '>', '%', '@', '`', '\'', '"']) {
        return true;
    }
    s.chars().any(|c| {
        matches!(c, ':' | ',' | '[' | ']' | '{' | '}' | '#' | '"' | '\\') || c.is_control()
    })
}

/// Appends `s` double-quoted, escaping the characters the parser unescapes.
pub(crate) fn push_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold_seq(items: &[i32]) -> String {
        let mut w = Writer::new();
        w.serialize_seq_begin(Style::Fold).unwrap();
        for item in items {
            w.serialize_i32(*item).unwrap();
        }
        w.serialize_seq_end().unwrap();
        w.into_string()
    }

    #[test]
    fn folded_sequence_of_scalars() {
        assert_eq!(fold_seq(&[1, 2, 3]), "- 1\n- 2\n- 3\n");
    }

    #[test]
    fn empty_folded_containers_at_root() {
        assert_eq!(fold_seq(&[]), " []\n");

        let mut w = Writer::new();
        w.serialize_map_begin(Style::Fold).unwrap();
        w.serialize_map_end().unwrap();
        assert_eq!(w.into_string(), " {}\n");
    }

    #[test]
    fn empty_containers_in_value_position() {
        let mut w = Writer::new();
        w.serialize_map_begin(Style::Fold).unwrap();
        w.serialize_struct_field_begin("items").unwrap();
        w.serialize_seq_begin(Style::Fold).unwrap();
        w.serialize_seq_end().unwrap();
        w.serialize_struct_field_end().unwrap();
        w.serialize_map_end().unwrap();
        assert_eq!(w.into_string(), "items: []\n");
    }

    #[test]
    fn folded_mapping_entries() {
        let mut w = Writer::new();
        w.serialize_map_begin(Style::Fold).unwrap();
        w.serialize_struct_field("x", &10i32).unwrap();
        w.serialize_struct_field("y", &20i32).unwrap();
        w.serialize_map_end().unwrap();
        assert_eq!(w.into_string(), "x: 10\ny: 20\n");
    }

    #[test]
    fn nested_folded_sequences_share_the_marker_line() {
        let mut w = Writer::new();
        w.serialize_seq_begin(Style::Fold).unwrap();
        w.serialize_seq_begin(Style::Fold).unwrap();
        w.serialize_i32(10).unwrap();
        w.serialize_i32(20).unwrap();
        w.serialize_seq_end().unwrap();
        w.serialize_seq_end().unwrap();
        assert_eq!(w.into_string(), "- - 10\n  - 20\n");
    }

    #[test]
    fn container_value_starts_a_fresh_line() {
        let mut w = Writer::new();
        w.serialize_map_begin(Style::Fold).unwrap();
        w.serialize_struct_field_begin("z").unwrap();
        w.serialize_seq_begin(Style::Fold).unwrap();
        w.serialize_i32(10).unwrap();
        w.serialize_i32(20).unwrap();
        w.serialize_seq_end().unwrap();
        w.serialize_struct_field_end().unwrap();
        w.serialize_map_end().unwrap();
        assert_eq!(w.into_string(), "z:\n  - 10\n  - 20\n");
    }

    #[test]
    fn inline_containers() {
        let mut w = Writer::new();
        w.serialize_map_begin(Style::Fold).unwrap();
        w.serialize_struct_field_begin("point").unwrap();
        w.serialize_seq_begin(Style::Inline).unwrap();
        w.serialize_i32(1).unwrap();
        w.serialize_i32(2).unwrap();
        w.serialize_seq_end().unwrap();
        w.serialize_struct_field_end().unwrap();
        w.serialize_map_end().unwrap();
        assert_eq!(w.into_string(), "point: [1, 2]\n");
    }

    #[test]
    fn inline_map_at_root() {
        let mut w = Writer::new();
        w.serialize_map_begin(Style::Inline).unwrap();
        w.serialize_map_entry(&"a", &1i32).unwrap();
        w.serialize_map_entry(&"b", &2i32).unwrap();
        w.serialize_map_end().unwrap();
        assert_eq!(w.into_string(), "{a: 1, b: 2}\n");
    }

    #[test]
    fn root_scalar_terminates_the_line() {
        let mut w = Writer::new();
        w.serialize_i64(42631).unwrap();
        assert_eq!(w.into_string(), "42631\n");

        let mut w = Writer::new();
        w.serialize_none().unwrap();
        assert_eq!(w.into_string(), "null\n");
    }

    #[test]
    fn quoting_is_structural() {
        let mut w = Writer::new();
        w.serialize_str("plain text").unwrap();
        assert_eq!(w.into_string(), "plain text\n");

        let mut w = Writer::new();
        w.serialize_str("null").unwrap();
        assert_eq!(w.into_string(), "\"null\"\n");

        let mut w = Writer::new();
        w.serialize_str("a: b").unwrap();
        assert_eq!(w.into_string(), "\"a: b\"\n");

        let mut w = Writer::new();
        w.serialize_str("line\nbreak").unwrap();
        assert_eq!(w.into_string(), "\"line\\nbreak\"\n");

        // number-shaped text stays bare; the read target decides its type
        let mut w = Writer::new();
        w.serialize_str("42").unwrap();
        assert_eq!(w.into_string(), "42\n");
    }

    #[test]
    fn fold_inside_inline_is_rejected() {
        let mut w = Writer::new();
        w.serialize_seq_begin(Style::Inline).unwrap();
        assert!(matches!(
            w.serialize_seq_begin(Style::Fold),
            Err(Error::StructuralMismatch(_))
        ));
    }

    #[test]
    fn mismatched_end_is_rejected() {
        let mut w = Writer::new();
        w.serialize_seq_begin(Style::Fold).unwrap();
        assert!(matches!(
            w.serialize_map_end(),
            Err(Error::StructuralMismatch(_))
        ));
    }

    #[test]
    fn second_root_value_is_rejected() {
        let mut w = Writer::new();
        w.serialize_i32(1).unwrap();
        assert!(matches!(
            w.serialize_i32(2),
            Err(Error::StructuralMismatch(_))
        ));

        let mut w = Writer::new();
        w.serialize_seq_begin(Style::Fold).unwrap();
        w.serialize_i32(1).unwrap();
        w.serialize_seq_end().unwrap();
        assert!(matches!(
            w.serialize_map_begin(Style::Fold),
            Err(Error::StructuralMismatch(_))
        ));
    }

    #[test]
    fn entry_overflow_is_rejected() {
        let mut w = Writer::new();
        w.serialize_map_begin(Style::Fold).unwrap();
        w.serialize_map_key_begin().unwrap();
        w.serialize_str("k").unwrap();
        w.serialize_map_key_end().unwrap();
        w.serialize_map_value_begin().unwrap();
        w.serialize_i32(1).unwrap();
        assert!(w.serialize_i32(2).is_err());
    }

    #[test]
    fn scalar_directly_in_mapping_is_rejected() {
        let mut w = Writer::new();
        w.serialize_map_begin(Style::Fold).unwrap();
        assert!(w.serialize_i32(1).is_err());
    }

    #[test]
    fn container_key_is_unsupported() {
        let mut w = Writer::new();
        w.serialize_map_begin(Style::Fold).unwrap();
        w.serialize_map_key_begin().unwrap();
        assert!(matches!(
            w.serialize_seq_begin(Style::Fold),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn doc_start_marker() {
        let mut w = Writer::with_options(Options::default().with_doc_start(true));
        w.serialize_i32(7).unwrap();
        assert_eq!(w.into_string(), "---\n7\n");
    }

    #[test]
    fn wide_indent_option() {
        let mut w = Writer::with_options(Options::default().with_indent(4));
        w.serialize_map_begin(Style::Fold).unwrap();
        w.serialize_struct_field_begin("z").unwrap();
        w.serialize_seq_begin(Style::Fold).unwrap();
        w.serialize_i32(1).unwrap();
        w.serialize_seq_end().unwrap();
        w.serialize_struct_field_end().unwrap();
        w.serialize_map_end().unwrap();
        assert_eq!(w.into_string(), "z:\n    - 1\n");
    }

    #[test]
    fn marker_line_children_align_under_the_marker() {
        // the `- ` marker is two columns wide whatever the indent option
        let mut w = Writer::with_options(Options::default().with_indent(4));
        w.serialize_seq_begin(Style::Fold).unwrap();
        w.serialize_seq_begin(Style::Fold).unwrap();
        w.serialize_i32(1).unwrap();
        w.serialize_i32(2).unwrap();
        w.serialize_seq_end().unwrap();
        w.serialize_seq_end().unwrap();
        assert_eq!(w.into_string(), "- - 1\n  - 2\n");
    }
}
