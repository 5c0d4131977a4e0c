/// Builds a [`Node`](crate::Node) tree from a literal.
///
/// Sequences use `[...]`, mappings use `{...}` with literal keys, and
/// `null` produces [`Node::Null`](crate::Node::Null). Anything else goes
/// through [`Node::from`](crate::Node), so strings, numbers and booleans
/// all work bare. Multi-token expressions such as negative numbers need
/// parentheses: `node!([1, (-2)])`.
///
/// # Examples
///
/// ```rust
/// use yamlet::node;
///
/// let doc = node!({
///     "name": "Ada",
///     "scores": [90, 85],
///     "retired": null,
/// });
///
/// assert_eq!(doc.to_string(), "{name: Ada, scores: [90, 85], retired: null}");
/// ```
#[macro_export]
macro_rules! node {
    (null) => {
        $crate::Node::Null
    };

    ([]) => {
        $crate::Node::Sequence(vec![])
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Node::Sequence(vec![$($crate::node!($elem)),+])
    };

    ({}) => {
        $crate::Node::Mapping($crate::Mapping::new())
    };

    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut entries = $crate::Mapping::new();
        $(
            entries.insert($crate::Node::from($key), $crate::node!($value));
        )+
        $crate::Node::Mapping(entries)
    }};

    ($other:expr) => {
        $crate::Node::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Mapping, Node};

    #[test]
    fn builds_scalars() {
        assert_eq!(node!(null), Node::Null);
        assert_eq!(node!(true), Node::Scalar("true".into()));
        assert_eq!(node!(42), Node::Scalar("42".into()));
        assert_eq!(node!((-7)), Node::Scalar("-7".into()));
        assert_eq!(node!(3.5), Node::Scalar("3.5".into()));
        assert_eq!(node!("hello"), Node::Scalar("hello".into()));
    }

    #[test]
    fn builds_sequences() {
        assert_eq!(node!([]), Node::Sequence(vec![]));
        assert_eq!(
            node!([1, "two", null]),
            Node::Sequence(vec![
                Node::Scalar("1".into()),
                Node::Scalar("two".into()),
                Node::Null,
            ])
        );
    }

    #[test]
    fn builds_mappings() {
        assert_eq!(node!({}), Node::Mapping(Mapping::new()));

        let doc = node!({
            "name": "Ada",
            "age": 36,
            "tags": ["x", "y"],
        });
        let entries = doc.as_mapping().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.get("name"), Some(&node!("Ada")));
        assert_eq!(entries.get("age"), Some(&node!(36)));
        assert_eq!(entries.get("tags"), Some(&node!(["x", "y"])));
    }

    #[test]
    fn expression_fallback_uses_from() {
        let items = vec![1, 2, 3];
        assert_eq!(node!(items), node!([1, 2, 3]));
        assert_eq!(node!([10, 20]), Node::from([10, 20]));
    }

    #[test]
    fn renders_inline() {
        let doc = node!({"point": [1, 2], "ok": true});
        assert_eq!(doc.to_string(), "{point: [1, 2], ok: true}");
    }
}
