//! Lua-table-compatible hash codes.
//!
//! [`hashcode`] maps a script value to the small integer the host's table
//! implementation would derive for it, so scripts can bucket values the way
//! the runtime's own associative containers do (e.g. to build a companion
//! trie or hash index).
//!
//! # Key properties
//!
//! - **Deterministic**: nil, booleans, numbers and strings hash by content
//! - **Identity hashing**: every other value hashes by address
//! - **Total**: no input fails; no side effects
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! The function is exported to scripts through [`open`], which returns a
//! [`Namespace`] with `hashcode` bound.
//!
//! # Example
//!
//! ```
//! use lua_hashcode::{Value, hashcode, open};
//!
//! assert_eq!(hashcode(&Value::Nil), 0);
//! assert_eq!(hashcode(&Value::Boolean(true)), 1);
//! assert_eq!(hashcode(&Value::from(-0.0)), 0);
//!
//! let ns = open();
//! assert_eq!(ns.call("hashcode", &[Value::from("")]), Ok(0.0));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod hash;
pub mod registry;
pub mod value;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use hash::{LMAX, hashcode, lmod};
pub use registry::{Namespace, open};
pub use value::{Identity, Kind, Value};
