//! Enums encoded through their underlying numeric type.
//!
//! An enum opts in by implementing [`BufferEnum`], which names its underlying
//! [`Numeric`] type. The bound is checked by the compiler, so an enum backed by
//! anything other than the eight numeric kinds cannot be written or read at
//! all. Decoding a value that names no variant fails with
//! [`BufferError::InvalidDiscriminant`](crate::BufferError::InvalidDiscriminant).

use crate::primitive::Numeric;

/// An enum carried on the wire as its underlying numeric value.
pub trait BufferEnum: Copy {
    /// Underlying numeric type.
    type Repr: Numeric;

    /// Type name used in error reports.
    const NAME: &'static str;

    fn to_repr(self) -> Self::Repr;

    /// Returns `None` when `repr` names no variant.
    fn from_repr(repr: Self::Repr) -> Option<Self>;
}

/// Declares a fieldless enum with an explicit integer representation and
/// implements [`BufferEnum`] for it.
///
/// ```
/// use bytecursor_buffers::{buffer_enum, ByteBuffer, ByteOrder, ReadCursor};
///
/// buffer_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Opcode: u16 {
///         Ping = 1,
///         Pong = 2,
///     }
/// }
///
/// let mut buffer = ByteBuffer::new(ByteOrder::Big);
/// buffer.write_enum(Opcode::Pong);
/// assert_eq!(buffer.to_array(), vec![0x00, 0x02]);
/// assert_eq!(buffer.read_enum::<Opcode>().unwrap(), Opcode::Pong);
/// ```
#[macro_export]
macro_rules! buffer_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $crate::BufferEnum for $name {
            type Repr = $repr;

            const NAME: &'static str = stringify!($name);

            #[inline]
            fn to_repr(self) -> $repr {
                self as $repr
            }

            fn from_repr(repr: $repr) -> Option<Self> {
                $(
                    if repr == $name::$variant as $repr {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    buffer_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Color: i8 {
            Red = -1,
            Green = 0,
            /// Trailing comma and doc attribute are accepted.
            Blue = 7,
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Scale {
        Half,
        Double,
    }

    impl BufferEnum for Scale {
        type Repr = f32;

        const NAME: &'static str = "Scale";

        fn to_repr(self) -> f32 {
            match self {
                Scale::Half => 0.5,
                Scale::Double => 2.0,
            }
        }

        fn from_repr(repr: f32) -> Option<Self> {
            if repr == 0.5 {
                Some(Scale::Half)
            } else if repr == 2.0 {
                Some(Scale::Double)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_macro_repr() {
        assert_eq!(Color::Red.to_repr(), -1);
        assert_eq!(Color::Blue.to_repr(), 7);
        assert_eq!(Color::from_repr(0), Some(Color::Green));
        assert_eq!(Color::from_repr(3), None);
        assert_eq!(Color::NAME, "Color");
    }

    #[test]
    fn test_float_backed_enum() {
        assert_eq!(Scale::from_repr(Scale::Double.to_repr()), Some(Scale::Double));
        assert_eq!(Scale::from_repr(1.0), None);
    }
}
