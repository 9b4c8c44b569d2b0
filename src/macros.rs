/// Builds a [`Node`](crate::Node) tree with JSON-like syntax.
///
/// - `flag` is [`Node::Flag`](crate::Node::Flag)
/// - `[a, b]` is a [`Node::List`](crate::Node::List)
/// - `{ "key": value }` is a [`Node::Table`](crate::Node::Table), keys in the order given
/// - anything else goes through `Node::from`
///
/// ```rust
/// use pdx_script::{pdx, to_string};
///
/// let node = pdx!({
///     "my_institution": {
///         "icon": "gfx/interface/icons/institution.dds",
///         "is_hidden": false,
///         "modifiers": ["mod_a", "mod_b"],
///         "can_disband": flag
///     }
/// });
/// assert_eq!(
///     to_string(&node),
///     "my_institution = {\n\ticon = gfx/interface/icons/institution.dds\n\tis_hidden = no\n\tmodifiers = { mod_a mod_b }\n\tcan_disband\n}"
/// );
/// ```
#[macro_export]
macro_rules! pdx {
    (flag) => {
        $crate::Node::Flag
    };

    ([]) => {
        $crate::Node::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Node::List(vec![$($crate::pdx!($elem)),*])
    };

    ({}) => {
        $crate::Node::Table($crate::Table::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::Table::new();
        $(
            table.insert($key.to_string(), $crate::pdx!($value));
        )*
        $crate::Node::Table(table)
    }};

    ($other:expr) => {
        $crate::Node::from($other)
    };
}
