use crate::{
    error::MalformedEscapeError,
    kind::Kind,
    pct_enc::{self, Decode},
};
use alloc::{borrow::Cow, string::String, vec::Vec};

/// Percent-encodes the bytes for the given kind of component.
///
/// A byte is preserved if the kind [deems it safe](Kind::is_safe);
/// it is encoded as `%` followed by two uppercase hexadecimal digits otherwise.
/// Multi-byte UTF-8 sequences are therefore encoded byte by byte.
///
/// Escaping is not idempotent: a `%` in the input is always encoded as `%25`.
///
/// # Examples
///
/// ```
/// use urlencode::{escape, Kind};
///
/// assert_eq!(escape(Kind::PathSegment, "a/b"), "a%2Fb");
/// assert_eq!(escape(Kind::Path, "a/b"), "a/b");
/// assert_eq!(escape(Kind::QueryComponent, "a=b&c"), "a%3Db%26c");
/// assert_eq!(escape(Kind::Zone, "eth%1"), "eth%251");
/// ```
#[must_use]
pub fn escape<S: AsRef<[u8]> + ?Sized>(kind: Kind, s: &S) -> String {
    let s = s.as_ref();
    let mut buf = String::new();
    escape_to(kind, s, &mut buf);
    buf
}

/// Percent-encodes the bytes for the given kind of component,
/// appending the result onto the end of a buffer.
pub fn escape_to<S: AsRef<[u8]> + ?Sized>(kind: Kind, s: &S, buf: &mut String) {
    let s = s.as_ref();
    let table = kind.table();

    let unsafe_count = s.iter().filter(|&&x| !table.allows(x)).count();
    buf.reserve(s.len() + unsafe_count * 2);

    for &x in s {
        if table.allows(x) {
            // Only ASCII bytes are ever allowed.
            buf.push(char::from(x));
        } else {
            buf.push_str(pct_enc::encode_byte(x));
        }
    }
}

/// Decodes the percent-encoded bytes.
///
/// Every percent-encoded octet is decoded to the byte it encodes and
/// every other byte is passed through unchanged, even when the kind would
/// have encoded it. The kind does not alter decoding and is accepted for
/// symmetry with [`escape`]. The output borrows from the input when it
/// contains no `%`.
///
/// Note that `+` is **not** decoded as a space.
///
/// # Errors
///
/// Returns `Err` if a `%` is not followed by two hexadecimal digits.
/// The error points at that `%`.
///
/// # Examples
///
/// ```
/// use urlencode::{unescape, Kind};
///
/// assert_eq!(*unescape(Kind::Zone, "eth%251")?, *b"eth%1");
/// assert_eq!(*unescape(Kind::Path, "a b/c")?, *b"a b/c");
///
/// let e = unescape(Kind::QueryComponent, "abc%zz").unwrap_err();
/// assert_eq!(e.offset(), 3);
/// # Ok::<_, urlencode::MalformedEscapeError>(())
/// ```
pub fn unescape<S: AsRef<[u8]> + ?Sized>(
    _kind: Kind,
    s: &S,
) -> Result<Cow<'_, [u8]>, MalformedEscapeError> {
    let s = s.as_ref();
    pct_enc::validate(s)?;
    Ok(Decode::new(s).to_bytes())
}

/// Decodes the percent-encoded bytes, appending the result onto the end of a buffer.
///
/// See [`unescape`] for the decoding rules.
///
/// # Errors
///
/// Returns `Err` if a `%` is not followed by two hexadecimal digits,
/// in which case the buffer is left untouched.
pub fn unescape_to<S: AsRef<[u8]> + ?Sized>(
    _kind: Kind,
    s: &S,
    buf: &mut Vec<u8>,
) -> Result<(), MalformedEscapeError> {
    let s = s.as_ref();
    pct_enc::validate(s)?;
    buf.reserve(s.len());
    Decode::new(s).decode_to(buf);
    Ok(())
}
