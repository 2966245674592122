//! Percent-encoding primitives shared by every encoding kind.

pub mod table;

pub use table::Table;

use crate::error::MalformedEscapeError;
use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{hash, iter::FusedIterator, str};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// Checks that every `%` in the bytes starts a percent-encoded octet.
///
/// Bytes other than `%` are not inspected, whatever the encoding kind.
///
/// # Errors
///
/// Returns `Err` pointing at the first `%` that is followed by fewer
/// than two bytes or by a non-hexadecimal byte.
pub const fn validate(s: &[u8]) -> Result<(), MalformedEscapeError> {
    let mut i = 0;
    while i < s.len() {
        if s[i] == b'%' {
            if i + 2 >= s.len() || !is_hexdig_pair(s[i + 1], s[i + 2]) {
                return Err(MalformedEscapeError { index: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

pub(crate) const fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    table::HEXDIG.allows(hi) && table::HEXDIG.allows(lo)
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(is_hexdig_pair(hi, lo));
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// Percent-encodes a byte with uppercase hexadecimal digits.
pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Percent-encoded string slices.
///
/// An `EStr` is a string slice in which every `%` is known to start a
/// well-formed percent-encoded octet, so decoding it cannot fail.
///
/// # Examples
///
/// ```
/// use urlencode::pct_enc::EStr;
///
/// let s = EStr::new("eth%250")?;
/// assert_eq!(s.decode().to_string_lossy(), "eth%0");
///
/// assert_eq!(EStr::new("50%").unwrap_err().offset(), 2);
/// # Ok::<_, urlencode::MalformedEscapeError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EStr {
    inner: str,
}

impl EStr {
    #[ref_cast_custom]
    pub(crate) const fn new_validated(s: &str) -> &Self;

    /// An empty `EStr` slice.
    pub const EMPTY: &'static Self = Self::new_validated("");

    /// Converts a string slice to an `EStr` slice.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `%` in the string does not start a
    /// percent-encoded octet.
    pub const fn new(s: &str) -> Result<&Self, MalformedEscapeError> {
        match validate(s.as_bytes()) {
            Ok(()) => Ok(Self::new_validated(s)),
            Err(e) => Err(e),
        }
    }

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the `EStr` slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the `EStr` slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Checks whether the `EStr` slice contains no percent-encoded octet.
    #[must_use]
    pub fn is_unencoded(&self) -> bool {
        !self.inner.contains('%')
    }

    /// Returns an iterator used to decode the `EStr` slice.
    ///
    /// Note that the iterator will **not** decode `+` as a space.
    pub fn decode(&self) -> Decode<'_> {
        Decode::new(self.inner.as_bytes())
    }
}

impl AsRef<str> for EStr {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for EStr {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<str> for EStr {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<EStr> for str {
    fn eq(&self, other: &EStr) -> bool {
        self == &other.inner
    }
}

impl Eq for EStr {}

impl hash::Hash for EStr {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl Default for &EStr {
    /// Creates an empty `EStr` slice.
    fn default() -> Self {
        EStr::EMPTY
    }
}

/// An iterator used to decode percent-encoded bytes.
///
/// This struct is created by [`EStr::decode`] and used internally by
/// [`unescape`](crate::unescape).
///
/// See the [`DecodedChunk`] type for documentation of the items yielded by this iterator.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Decode<'a> {
    source: &'a [u8],
}

/// An item returned by the [`Decode`] iterator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodedChunk<'a> {
    /// An unencoded subslice.
    Unencoded(&'a [u8]),
    /// A percent-encoded octet, decoded (for example, `"%20"` decoded as `0x20`).
    PctDecoded(u8),
}

impl<'a> Decode<'a> {
    /// The source must have passed [`validate`].
    pub(crate) fn new(source: &'a [u8]) -> Self {
        Self { source }
    }

    fn next_if_unencoded(&mut self) -> Option<&'a [u8]> {
        let i = self
            .source
            .iter()
            .position(|&x| x == b'%')
            .unwrap_or(self.source.len());

        if i == 0 {
            None
        } else {
            let s;
            (s, self.source) = self.source.split_at(i);
            Some(s)
        }
    }

    fn decoded_len(&self) -> usize {
        self.source.len() - self.source.iter().filter(|&&x| x == b'%').count() * 2
    }

    /// Decodes the bytes.
    ///
    /// This method allocates only when the source contains any percent-encoded octet.
    #[must_use]
    pub fn to_bytes(mut self) -> Cow<'a, [u8]> {
        if let Some(s) = self.next_if_unencoded() {
            if self.source.is_empty() {
                return Cow::Borrowed(s);
            }
            let mut buf = Vec::with_capacity(s.len() + self.decoded_len());
            buf.extend_from_slice(s);
            self.decode_to(&mut buf);
            Cow::Owned(buf)
        } else if self.source.is_empty() {
            Cow::Borrowed(&[])
        } else {
            let mut buf = Vec::with_capacity(self.decoded_len());
            self.decode_to(&mut buf);
            Cow::Owned(buf)
        }
    }

    /// Decodes the bytes, appending them onto the end of a buffer.
    pub fn decode_to(self, buf: &mut Vec<u8>) {
        for chunk in self {
            match chunk {
                DecodedChunk::Unencoded(s) => buf.extend_from_slice(s),
                DecodedChunk::PctDecoded(x) => buf.push(x),
            }
        }
    }

    /// Attempts to decode the bytes to a string.
    ///
    /// # Errors
    ///
    /// Returns `Err` containing the decoded bytes if they are not valid UTF-8.
    pub fn to_string(self) -> Result<Cow<'a, str>, Vec<u8>> {
        match self.to_bytes() {
            Cow::Borrowed(s) => str::from_utf8(s)
                .map(Cow::Borrowed)
                .map_err(|_| s.to_vec()),
            Cow::Owned(v) => String::from_utf8(v)
                .map(Cow::Owned)
                .map_err(|e| e.into_bytes()),
        }
    }

    /// Decodes the bytes to a string, replacing any invalid UTF-8 sequences with
    /// [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
    ///
    /// [U+FFFD]: char::REPLACEMENT_CHARACTER
    #[must_use]
    pub fn to_string_lossy(self) -> Cow<'a, str> {
        match self.to_bytes() {
            Cow::Borrowed(s) => String::from_utf8_lossy(s),
            Cow::Owned(v) => Cow::Owned(String::from_utf8_lossy(&v).into_owned()),
        }
    }
}

impl<'a> Iterator for Decode<'a> {
    type Item = DecodedChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            None
        } else if let Some(s) = self.next_if_unencoded() {
            Some(DecodedChunk::Unencoded(s))
        } else {
            let s;
            (s, self.source) = self.source.split_at(3);
            Some(DecodedChunk::PctDecoded(decode_octet(s[1], s[2])))
        }
    }
}

impl FusedIterator for Decode<'_> {}
