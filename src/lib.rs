//! Package implement an ordered-map indexed by a [red-black tree][wiki-rbt].
//!
//! Following the C++ standard-library convention, iteration is exposed as
//! bidirectional cursors instead of one-shot scans:
//!
//! * [TreeMap] implements an ephemeral ordered-map with parent-linked
//!   nodes, so cursors step to the next/previous entry in O(1) amortised
//!   time without an auxiliary stack.
//! * [FwdIter] walks entries in ascending key order, [RevIter] in
//!   descending key order; both support stepping in either direction.
//!
//! Simple ordered-map for single threaded use case
//! -----------------------------------------------
//!
//! - Each entry in TreeMap instance correspond to a {Key, Value} pair.
//! - Parametrised over `key-type` and `value-type`.
//! - CRUD operations, via set(), get(), remove() api.
//! - Full table scan, in ascending or descending key order.
//! - Bound queries, lower_bound() / upper_bound() / range().
//! - Key ordering is a first-class value on the map, defaulting to the
//!   key-type's natural order.
//! - Uses ownership model and borrow semantics to ensure safety.
//! - No Durability guarantee.
//! - Not thread safe.
//!
//! Constructing a new [TreeMap] instance and CRUD operations:
//!
//! ```
//! use rbmap::TreeMap;
//!
//! let mut index: TreeMap<String,String> = TreeMap::new();
//! assert_eq!(index.len(), 0);
//! assert_eq!(index.is_empty(), true);
//!
//! index.set("key1".to_string(), "value1".to_string());
//! index.set("key2".to_string(), "value2".to_string());
//!
//! let n = index.len();
//! assert_eq!(n, 2);
//!
//! let value = index.get(&"key1".to_string()).unwrap();
//! assert_eq!(value, "value1");
//! let value = index.get(&"key2".to_string()).unwrap();
//! assert_eq!(value, "value2");
//!
//! let old_value = index.remove(&"key1".to_string()).unwrap();
//! assert_eq!(old_value, "value1".to_string());
//! ```
//!
//! Cursor based iteration:
//!
//! ```
//! use rbmap::TreeMap;
//!
//! let mut index: TreeMap<i32,&str> = TreeMap::new();
//! index.set(1, "World");
//! index.set(0, "Hello");
//!
//! let mut iter = index.iter();
//! let mut items = vec![];
//! while iter.valid() {
//!     items.push((*iter.key(), *iter.value()));
//!     iter.next();
//! }
//! assert_eq!(items, vec![(0, "Hello"), (1, "World")]);
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use std::{error, fmt, result};

// Short form to compose Error values.
//
// Here are few possible ways:
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, msg: format!("bad argument"));
// ```
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, std::io::read(buf));
// ```
//
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                Err(Error::$v(prefix, format!("{}", err)))
            }
        }
    }};
}

mod map;
mod node;

pub use map::{FwdIter, RevIter, TreeMap};

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    Fatal(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
