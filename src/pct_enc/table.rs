//! Byte pattern tables from RFC 3986 and RFC 6874.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 5234] where a matching rule exists.
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

/// A table specifying the bytes that may appear unencoded in a component.
///
/// Only ASCII bytes other than `%` can ever be allowed, so a byte
/// rejected by the table is always percent-encoded on output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(
                !matches!(cur, b'%' | 128..),
                "cannot allow non-ASCII byte or %"
            );
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the bytes allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    /// Checks whether the given byte may appear unencoded.
    #[inline]
    #[must_use]
    pub const fn allows(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            return false;
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Returns an iterator over the allowed bytes in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..128u8).filter(move |&x| self.allows(x))
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

// Rules from RFC 3986:

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(new(b"-._~"));

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: Table = GEN_DELIMS.or(SUB_DELIMS);

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: Table = new(b":/?#[]@");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: Table = new(b"!$&'()*+,;=");

// Safe sets of the encoding kinds. The sub-delims `!'()*` are kept
// escaped everywhere except in the fragment, and `'` even there.

/// A single path segment: `;` `,` and `/` are left for the caller to
/// assign meaning to, and `?` would start the query.
pub const PATH_SEGMENT: Table = UNRESERVED.or(new(b"$&+:=@"));

/// A whole path, so the segment separators are preserved.
pub const PATH: Table = PATH_SEGMENT.or(new(b"/;,"));

/// A query key or value. Every reserved byte is escaped.
pub const QUERY_COMPONENT: Table = UNRESERVED;

/// A `reg-name` host, limited to the LDH subset.
pub const HOST: Table = ALPHA.or(DIGIT).or(new(b"-."));

/// `ZoneID = 1*( unreserved / pct-encoded )` from RFC 6874, further
/// narrowed to the host subset.
pub const ZONE: Table = HOST;

/// The user or password of a `userinfo`, where `:` and `@` delimit.
pub const USER_PASSWORD: Table = UNRESERVED.or(new(b"$&+,;="));

/// `fragment = *( pchar / "/" / "?" )`, without `'` and `#`.
pub const FRAGMENT: Table = UNRESERVED.or(new(b"$&+,/:;=?@!()*"));
