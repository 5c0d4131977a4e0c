//! Container frames for the writer's cursor stack.
//!
//! Every open container (and every open mapping entry) is one [`Frame`] on a
//! stack. The frame records how many children have been emitted and at which
//! indent column the container lives, which is all the prefix logic needs.

/// Presentation style of a container.
///
/// [`Fold`](Style::Fold) is the line-oriented block form (`- ` item markers,
/// `key: value` lines, nesting by indentation). [`Inline`](Style::Inline) is
/// the bracketed single-line form (`[a, b]`, `{k: v}`). A folded container
/// may hold inline children; an inline container must not hold a folded one.
///
/// The style is chosen per container, at each `begin` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Bracketed single-line form.
    Inline,
    /// Line-oriented block form.
    #[default]
    Fold,
}

/// What kind of construct a frame tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameKind {
    Sequence,
    Mapping,
    /// One mapping entry: first child is the key, second is the value.
    Entry,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub kind: FrameKind,
    pub style: Style,
    /// Children emitted so far. For an `Entry`, 1 means the key has been
    /// written and 2 means the value has.
    pub count: usize,
    /// Absolute indent column of this container's own lines.
    pub indent: usize,
}

impl Frame {
    pub fn new(kind: FrameKind, style: Style, indent: usize) -> Self {
        Frame {
            kind,
            style,
            count: 0,
            indent,
        }
    }
}
