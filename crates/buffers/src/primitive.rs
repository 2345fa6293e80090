//! Fixed-width values the buffer knows how to lay out.
//!
//! The set is closed: the eight numeric kinds and `bool`. Everything typed in
//! this crate funnels through [`Primitive::encode`] and [`Primitive::decode`],
//! so the byte order rule lives in exactly one place.

use std::fmt;

use crate::endian::{from_endian, to_endian, Endian};

mod sealed {
    pub trait Sealed {}
}

/// Tag naming one of the supported fixed-width kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    Bool,
}

impl NumericKind {
    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            NumericKind::Int8 | NumericKind::UInt8 | NumericKind::Bool => 1,
            NumericKind::Int16 | NumericKind::UInt16 => 2,
            NumericKind::Int32 | NumericKind::UInt32 | NumericKind::Float => 4,
            NumericKind::Int64 | NumericKind::UInt64 | NumericKind::Double => 8,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericKind::Int8 => "int8",
            NumericKind::Int16 => "int16",
            NumericKind::Int32 => "int32",
            NumericKind::Int64 => "int64",
            NumericKind::UInt8 => "uint8",
            NumericKind::UInt16 => "uint16",
            NumericKind::UInt32 => "uint32",
            NumericKind::UInt64 => "uint64",
            NumericKind::Float => "float",
            NumericKind::Double => "double",
            NumericKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A value with a fixed byte layout.
///
/// Implemented for `i8`..`i64`, `u8`..`u64`, `f32`, `f64` and `bool`. The
/// trait is sealed; other types cannot be encoded directly.
pub trait Primitive: sealed::Sealed + Copy + fmt::Debug {
    /// Which kind this is.
    const KIND: NumericKind;
    /// Encoded width in bytes.
    const WIDTH: usize = Self::KIND.width();

    /// Host-order byte array of [`Self::WIDTH`] bytes.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn to_ne_bytes(self) -> Self::Bytes;
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;

    /// Reverses the byte layout of the value.
    fn swap_bytes(self) -> Self;

    /// Lays the value out in `endian` order.
    #[inline]
    fn encode(self, endian: Endian) -> Self::Bytes {
        to_endian(self, endian).to_ne_bytes()
    }

    /// Reads a value laid out in `endian` order.
    ///
    /// `bytes` must hold exactly [`Self::WIDTH`] bytes; callers obtain them
    /// from a bounds-checked peek or read.
    #[inline]
    fn decode(bytes: &[u8], endian: Endian) -> Self {
        let mut raw = Self::Bytes::default();
        raw.as_mut().copy_from_slice(bytes);
        from_endian(Self::from_ne_bytes(raw), endian)
    }
}

/// The eight numeric kinds an enum may use as its underlying type.
pub trait Numeric: Primitive {}

macro_rules! impl_integer {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const KIND: NumericKind = NumericKind::$kind;
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                #[inline]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }

                #[inline]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }

                #[inline]
                fn swap_bytes(self) -> Self {
                    <$ty>::swap_bytes(self)
                }
            }

            impl Numeric for $ty {}
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const KIND: NumericKind = NumericKind::$kind;
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                #[inline]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }

                #[inline]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }

                // Reverse the IEEE bit pattern, not the numeric value.
                #[inline]
                fn swap_bytes(self) -> Self {
                    <$ty>::from_bits(self.to_bits().swap_bytes())
                }
            }

            impl Numeric for $ty {}
        )*
    };
}

impl_integer! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
}

impl_float! {
    f32 => Float,
    f64 => Double,
}

impl sealed::Sealed for bool {}

impl Primitive for bool {
    const KIND: NumericKind = NumericKind::Bool;
    type Bytes = [u8; 1];

    #[inline]
    fn to_ne_bytes(self) -> Self::Bytes {
        [self as u8]
    }

    #[inline]
    fn from_ne_bytes(bytes: Self::Bytes) -> Self {
        bytes[0] != 0
    }

    // Single byte, order is immaterial.
    #[inline]
    fn swap_bytes(self) -> Self {
        self
    }
}
