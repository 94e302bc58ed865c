//! Miscellaneous utility functionality.
//!
//! Nothing in here is Lox-related, even though it is only used by
//! the token tables for now.
use macro_pub::macro_pub;

/// Creates a `HashMap` from the given key-value expressions.
/// `HashMap` must be in scope at the call site.
#[macro_pub]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = HashMap::new();
        $(map.insert($key, $value);)*
        map
    }}
}
