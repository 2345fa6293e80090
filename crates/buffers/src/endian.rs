//! Byte order selection and conversion.
//!
//! A buffer stores exactly one [`Endian`]. Callers that want "whatever the
//! host uses" ask for [`ByteOrder::Machine`], which collapses to
//! [`Endian::MACHINE`] the moment it is converted.

use std::fmt;

use crate::primitive::Primitive;

/// Concrete byte order of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// Byte order of the host, found by looking at where the high byte of a
    /// known 16-bit pattern lands in memory.
    pub const MACHINE: Endian = detect_machine();

    /// The opposite of [`Endian::MACHINE`].
    pub const SWAPPED: Endian = Endian::MACHINE.reversed();

    /// Returns the other byte order.
    pub const fn reversed(self) -> Endian {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }

    /// Whether this is the host byte order.
    pub const fn is_machine(self) -> bool {
        matches!(
            (self, Endian::MACHINE),
            (Endian::Big, Endian::Big) | (Endian::Little, Endian::Little)
        )
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endian::Big => f.write_str("big"),
            Endian::Little => f.write_str("little"),
        }
    }
}

/// Byte order requested at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    Big,
    Little,
    /// Resolves to the host byte order.
    #[default]
    Machine,
}

impl ByteOrder {
    /// Resolves the request to a concrete order.
    pub const fn resolve(self) -> Endian {
        match self {
            ByteOrder::Big => Endian::Big,
            ByteOrder::Little => Endian::Little,
            ByteOrder::Machine => Endian::MACHINE,
        }
    }
}

impl From<ByteOrder> for Endian {
    fn from(order: ByteOrder) -> Self {
        order.resolve()
    }
}

impl From<Endian> for ByteOrder {
    fn from(endian: Endian) -> Self {
        match endian {
            Endian::Big => ByteOrder::Big,
            Endian::Little => ByteOrder::Little,
        }
    }
}

const fn detect_machine() -> Endian {
    let probe = 0x0102u16.to_ne_bytes();
    if probe[0] == 0x01 {
        Endian::Big
    } else {
        Endian::Little
    }
}

/// Converts `value` between the `declared` order and the `host` order.
///
/// Bytes are reversed only when the two differ. The operation is its own
/// inverse, so the same function serves both encoding and decoding.
#[inline]
pub fn convert<T: Primitive>(value: T, declared: Endian, host: Endian) -> T {
    if declared == host {
        value
    } else {
        value.swap_bytes()
    }
}

/// Converts a host-order value into `endian` order.
#[inline]
pub fn to_endian<T: Primitive>(value: T, endian: Endian) -> T {
    convert(value, endian, Endian::MACHINE)
}

/// Converts a value stored in `endian` order into host order.
#[inline]
pub fn from_endian<T: Primitive>(value: T, endian: Endian) -> T {
    convert(value, endian, Endian::MACHINE)
}

#[inline]
pub fn to_big_endian<T: Primitive>(value: T) -> T {
    to_endian(value, Endian::Big)
}

#[inline]
pub fn from_big_endian<T: Primitive>(value: T) -> T {
    from_endian(value, Endian::Big)
}

#[inline]
pub fn to_little_endian<T: Primitive>(value: T) -> T {
    to_endian(value, Endian::Little)
}

#[inline]
pub fn from_little_endian<T: Primitive>(value: T) -> T {
    from_endian(value, Endian::Little)
}
