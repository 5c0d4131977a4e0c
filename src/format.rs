//! Yamlet Format Reference
//!
//! This module documents the text format read and written by this library.
//! Yamlet is a YAML-flavored tree format: a document is one value, a value
//! is a scalar, a sequence, or a mapping, and nesting is expressed either
//! by indentation (the *folded* style) or by brackets on a single line
//! (the *inline* style).
//!
//! # Documents
//!
//! A document holds exactly one root value. Blank lines and comment lines
//! may surround it, and an optional `---` marker line may precede it:
//!
//! ```text
//! ---
//! # a point
//! x: 10
//! y: 20
//! ```
//!
//! An input with no value at all (empty, or only blanks and comments) is
//! rejected. Content after the root value ends is also rejected.
//!
//! # Scalars
//!
//! Scalars are text. The format does not type them; `42` and `hello` are
//! both scalar text, and the reading side decides what type to convert to.
//!
//! | Form | Example | Notes |
//! |------|---------|-------|
//! | Plain | `hello world` | ends at the line (or `,` `]` `}` inline) |
//! | Quoted | `"a: b"` | double quotes, backslash escapes |
//! | Null | `null`, `Null`, `NULL`, `~`, or nothing | reads back as absence |
//!
//! Quoted scalars support the escapes `\\`, `\"`, `\n`, `\r`, `\t`, `\b`,
//! `\f`, `\0` and `\uXXXX`. Unknown escapes are preserved literally.
//!
//! The writer quotes only when the text would otherwise change meaning:
//!
//! - empty text, or leading/trailing whitespace;
//! - text that reads as null (`null`/`Null`/`NULL`, `~`) or as a marker (`-`, leading
//!   `- ` or `---`, a byte order mark);
//! - text containing `:` `,` `[` `]` `{` `}` `#` `"` `\` or control
//!   characters;
//! - a leading character YAML reserves (`?` `&` `*` `!` `|` `>` `%` `@`
//!   `` ` `` `'` `"`).
//!
//! Number-shaped and boolean-shaped text stays bare. Since scalars are
//! untyped text, `version: 1.10` survives a round trip unchanged.
//!
//! # Folded sequences
//!
//! One element per line, each introduced by `- `:
//!
//! ```text
//! - 10
//! - 20
//! - 30
//! ```
//!
//! A container element may continue the marker line; its children align
//! under the position after the marker:
//!
//! ```text
//! - - 10
//!   - 20
//! - x: 10
//!   y: 20
//! ```
//!
//! A bare `-` line is a null element. A `-` directly followed by other
//! text (`-5`) is plain scalar text, not a marker.
//!
//! # Folded mappings
//!
//! One entry per line: a key, a colon, and a value. Keys are scalars;
//! quoted keys may contain anything:
//!
//! ```text
//! name: Ada
//! "a: b": quoted key
//! empty:
//! point:
//!   x: 1
//!   y: 2
//! ```
//!
//! A value may sit on the entry line (scalars and inline containers) or
//! as an indented block on the following lines. An entry with no value
//! reads as null. Duplicate keys are preserved in the tree; lookups by
//! name resolve to the first occurrence.
//!
//! # Inline containers
//!
//! `[a, b, c]` and `{k: v, k2: v2}` hold a whole container on one line,
//! nesting freely within themselves:
//!
//! ```text
//! point: [1, 2]
//! extent: {w: 640, h: 480}
//! cells: [[0, 1], [2, 3]]
//! ```
//!
//! Inline brackets may span lines; a newline inside them is ordinary
//! whitespace. A folded container can never appear inside an inline one.
//!
//! Empty containers only have an inline form. The writer emits `[]` and
//! `{}` for folded containers that finish without children:
//!
//! ```text
//! items: []
//! lookup: {}
//! ```
//!
//! # Indentation
//!
//! Nesting is two spaces per level by default (configurable through
//! [`Options`](crate::Options) on the writing side; the parser accepts
//! whatever consistent indentation a document uses). Tabs never count as
//! indentation and are rejected there. A child block must sit strictly
//! deeper than the line that introduces it.
//!
//! # Comments
//!
//! `#` starts a comment when it opens a line or follows whitespace, and
//! runs to the end of the line. Comments are skipped while parsing and
//! never written.
