#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Percent-encoding and decoding of values for the components of HTTP URLs,
//! following [RFC 3986] and, for IPv6 zone identifiers, [RFC 6874].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//! [RFC 6874]: https://datatracker.ietf.org/doc/html/rfc6874/
//!
//! A value is encoded for one [`Kind`] of component at a time, since the
//! bytes that may appear unencoded differ between, say, a path segment and
//! a query parameter:
//!
//! ```
//! use urlencode::{escape, parse_kind, unescape, Kind};
//!
//! let kind = parse_kind("s")?;
//! assert_eq!(kind, Kind::PathSegment);
//!
//! let encoded = escape(kind, "2024/05 report.pdf");
//! assert_eq!(encoded, "2024%2F05%20report.pdf");
//! assert_eq!(*unescape(kind, &encoded)?, *b"2024/05 report.pdf");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Decoding accepts any input in which every `%` starts a well-formed
//! percent-encoded octet, whatever the kind. Nothing in this crate keeps
//! state between calls.
//!
//! # Feature flags
//!
//! - `std` (default): Enables [`Error`] implementations for the error types.
//!
//! - `cli` (default): Builds the `urlencode` command-line tool.
//!
//! - `serde`: Enables serialization of [`Kind`] as its long name.
//!
//! [`Error`]: std::error::Error

extern crate alloc;

mod error;
mod fmt;
mod imp;
mod kind;
pub mod pct_enc;

pub use error::{MalformedEscapeError, UnknownKindError};
pub use imp::{escape, escape_to, unescape, unescape_to};
pub use kind::{parse_kind, Example, Kind};
