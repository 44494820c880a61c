//! A case-insensitive, insertion-ordered dictionary and a single-result
//! function cache.
//!
//! [`CaseInsensitiveDict`] lowercases text and byte keys before every
//! lookup, insertion and removal, while iteration hands back the keys as they
//! were first inserted. Keys of other types pass through unchanged.
//!
//! ```
//! use caseless_dict::CaseInsensitiveDict;
//!
//! let mut headers = CaseInsensitiveDict::<String, &str>::new();
//! headers.insert("Content-Type", "text/plain");
//! headers.insert("content-type", "application/json");
//!
//! assert_eq!(headers.len(), 1);
//! assert_eq!(headers.get("CONTENT-TYPE"), Some(&"application/json"));
//! assert_eq!(headers.keys().collect::<Vec<_>>(), ["Content-Type"]);
//! ```
//!
//! [`Cached`] wraps a zero-argument function and keeps its first successful
//! result.

mod cached;
mod dict;
mod dict_key;
pub mod iter;
mod key;
pub mod lookup;
mod macros;
mod result;
mod util;

pub use cached::{Cached, cached};
pub use dict::CaseInsensitiveDict;
pub use dict_key::{DictKey, Key};
pub use key::{CaseInsensitiveKey, Lowercase};
pub use lookup::Lookup;
pub use result::{DictError, DictResult};
pub use util::normalize_lower;
