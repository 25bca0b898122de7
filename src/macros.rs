/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Maps use string keys, lists use brackets, and anything else goes through
/// `Value::from`. A negative number inside a list or as a map value is more
/// than one token, so it needs parentheses there: `stc!([(-1), 2])`. At the top
/// level `stc!(-1)` works as is.
///
/// ```rust
/// use serde_stc::{decode_with_options, stc, DecodeOptions};
///
/// let expected = stc!({
///     "name": "edge",
///     "ports": [80, 443],
///     "tls": true
/// });
/// let doc = "name: ```\nedge\n```\nports.$0: 80\nports.$1: 443\ntls: `true`";
/// let decoded = decode_with_options(doc, &DecodeOptions::fallback()).unwrap();
/// assert_eq!(decoded, expected);
/// ```
#[macro_export]
macro_rules! stc {
    ([]) => {
        $crate::Value::List(::std::vec::Vec::new())
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::List(vec![$($crate::stc!($elem)),+])
    };

    ({}) => {
        $crate::Value::Map($crate::StcMap::new())
    };

    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut map = $crate::StcMap::new();
        $(
            map.insert($key.to_string(), $crate::stc!($value));
        )+
        $crate::Value::Map(map)
    }};

    (( $($inner:tt)+ )) => {
        $crate::stc!($($inner)+)
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
