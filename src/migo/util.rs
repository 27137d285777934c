//! Miscellaneous utility functionality.
//!
//! Specifically, nothing in here is MiGo-related, even though
//! it might be useful outside of this crate.
use macro_pub::macro_pub;

/// Creates a simple `HashMap` from the given key-value expressions.
/// The map type has to be in scope at the call site.
#[macro_pub]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = HashMap::new();
        $(let _: Option<_> = map.insert($key, $value);)*
        map
    }}
}
