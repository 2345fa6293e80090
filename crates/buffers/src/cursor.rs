//! Typed peek/read surface shared by every read cursor.
//!
//! Implementors supply four raw operations (byte order, capacity, cursor
//! position, bounds-checked `peek_at`/`read`); every typed accessor is built
//! on top of them here.

use std::ops::Range;

use crate::endian::Endian;
use crate::enums::BufferEnum;
use crate::primitive::Primitive;
use crate::strings::{decode_ascii, decode_utf16};
use crate::{BufferError, Result};

/// Width of the character count in front of every string payload.
pub const STRING_PREFIX_WIDTH: usize = 4;

/// Validates that `len` bytes starting at `index` fit in `capacity`.
pub(crate) fn span(index: usize, len: usize, capacity: usize) -> Result<Range<usize>> {
    match index.checked_add(len) {
        Some(end) if end <= capacity => Ok(index..end),
        _ => Err(BufferError::OutOfBounds {
            offset: index,
            len,
            capacity,
        }),
    }
}

#[derive(Clone, Copy)]
enum CharWidth {
    Single,
    Double,
}

/// Decodes a length-prefixed string at the read position without moving it.
///
/// Returns the string and the total number of bytes it occupies.
fn peek_prefixed<C>(cursor: &C, width: CharWidth) -> Result<(String, usize)>
where
    C: ReadCursor + ?Sized,
{
    let start = cursor.read_position();
    let count = cursor.peek_value_at::<u32>(start)? as usize;
    let payload_start = start + STRING_PREFIX_WIDTH;
    let payload_len = match width {
        CharWidth::Single => Some(count),
        CharWidth::Double => count.checked_mul(2),
    }
    .ok_or(BufferError::OutOfBounds {
        offset: payload_start,
        len: usize::MAX,
        capacity: cursor.capacity(),
    })?;
    let bytes = cursor.peek_at(payload_len, payload_start)?;
    let value = match width {
        CharWidth::Single => decode_ascii(bytes),
        CharWidth::Double => decode_utf16(bytes),
    };
    Ok((value, STRING_PREFIX_WIDTH + payload_len))
}

/// A cursor that can inspect and consume bytes.
///
/// Failed operations never move the read position: a bounds failure reports
/// [`BufferError::OutOfBounds`] and leaves the cursor exactly where it was.
pub trait ReadCursor {
    /// Byte order every multi-byte value is decoded with.
    fn endian(&self) -> Endian;

    /// Number of addressable bytes.
    fn capacity(&self) -> usize;

    /// Offset of the next consuming read.
    fn read_position(&self) -> usize;

    /// Returns `len` bytes starting at `index` without moving any cursor.
    fn peek_at(&self, len: usize, index: usize) -> Result<&[u8]>;

    /// Returns `len` bytes at the read position and advances past them.
    ///
    /// `len == 0` succeeds with an empty slice and leaves the cursor alone.
    fn read(&mut self, len: usize) -> Result<&[u8]>;

    /// Returns `len` bytes at the read position without advancing.
    fn peek(&self, len: usize) -> Result<&[u8]> {
        self.peek_at(len, self.read_position())
    }

    /// Bytes between the read position and capacity.
    fn remaining(&self) -> usize {
        self.capacity().saturating_sub(self.read_position())
    }

    /// Decodes any fixed-width value at `index` without moving the cursor.
    fn peek_value_at<T: Primitive>(&self, index: usize) -> Result<T> {
        let endian = self.endian();
        let bytes = self.peek_at(T::WIDTH, index)?;
        Ok(T::decode(bytes, endian))
    }

    /// Decodes any fixed-width value at the read position.
    fn peek_value<T: Primitive>(&self) -> Result<T> {
        self.peek_value_at(self.read_position())
    }

    /// Consumes any fixed-width value.
    fn read_value<T: Primitive>(&mut self) -> Result<T> {
        let endian = self.endian();
        let bytes = self.read(T::WIDTH)?;
        Ok(T::decode(bytes, endian))
    }

    /// Peeks a boolean; any non-zero byte is `true`.
    fn peek_bool(&self) -> Result<bool> {
        self.peek_value()
    }

    /// Peeks a signed 8-bit integer.
    fn peek_int8(&self) -> Result<i8> {
        self.peek_value()
    }

    /// Peeks a signed 16-bit integer.
    fn peek_int16(&self) -> Result<i16> {
        self.peek_value()
    }

    /// Peeks a signed 32-bit integer.
    fn peek_int32(&self) -> Result<i32> {
        self.peek_value()
    }

    /// Peeks a signed 64-bit integer.
    fn peek_int64(&self) -> Result<i64> {
        self.peek_value()
    }

    /// Peeks an unsigned 8-bit integer.
    fn peek_uint8(&self) -> Result<u8> {
        self.peek_value()
    }

    /// Peeks an unsigned 16-bit integer.
    fn peek_uint16(&self) -> Result<u16> {
        self.peek_value()
    }

    /// Peeks an unsigned 32-bit integer.
    fn peek_uint32(&self) -> Result<u32> {
        self.peek_value()
    }

    /// Peeks an unsigned 64-bit integer.
    fn peek_uint64(&self) -> Result<u64> {
        self.peek_value()
    }

    /// Peeks a 32-bit floating point number.
    fn peek_float(&self) -> Result<f32> {
        self.peek_value()
    }

    /// Peeks a 64-bit floating point number.
    fn peek_double(&self) -> Result<f64> {
        self.peek_value()
    }

    /// Reads a boolean; any non-zero byte is `true`.
    fn read_bool(&mut self) -> Result<bool> {
        self.read_value()
    }

    /// Reads a signed 8-bit integer.
    fn read_int8(&mut self) -> Result<i8> {
        self.read_value()
    }

    /// Reads a signed 16-bit integer.
    fn read_int16(&mut self) -> Result<i16> {
        self.read_value()
    }

    /// Reads a signed 32-bit integer.
    fn read_int32(&mut self) -> Result<i32> {
        self.read_value()
    }

    /// Reads a signed 64-bit integer.
    fn read_int64(&mut self) -> Result<i64> {
        self.read_value()
    }

    /// Reads an unsigned 8-bit integer.
    fn read_uint8(&mut self) -> Result<u8> {
        self.read_value()
    }

    /// Reads an unsigned 16-bit integer.
    fn read_uint16(&mut self) -> Result<u16> {
        self.read_value()
    }

    /// Reads an unsigned 32-bit integer.
    fn read_uint32(&mut self) -> Result<u32> {
        self.read_value()
    }

    /// Reads an unsigned 64-bit integer.
    fn read_uint64(&mut self) -> Result<u64> {
        self.read_value()
    }

    /// Reads a 32-bit floating point number.
    fn read_float(&mut self) -> Result<f32> {
        self.read_value()
    }

    /// Reads a 64-bit floating point number.
    fn read_double(&mut self) -> Result<f64> {
        self.read_value()
    }

    /// Decodes an enum from its underlying value without consuming it.
    fn peek_enum<E: BufferEnum>(&self) -> Result<E> {
        let repr = self.peek_value::<E::Repr>()?;
        E::from_repr(repr).ok_or_else(|| BufferError::InvalidDiscriminant {
            name: E::NAME,
            value: format!("{:?}", repr),
        })
    }

    /// Consumes an enum. An unknown discriminant consumes nothing.
    fn read_enum<E: BufferEnum>(&mut self) -> Result<E> {
        let value = self.peek_enum::<E>()?;
        self.read(<E::Repr as Primitive>::WIDTH)?;
        Ok(value)
    }

    /// Peeks a length-prefixed ASCII string.
    fn peek_string(&self) -> Result<String> {
        peek_prefixed(self, CharWidth::Single).map(|(value, _)| value)
    }

    /// Peeks a length-prefixed UTF-16 string.
    fn peek_wstring(&self) -> Result<String> {
        peek_prefixed(self, CharWidth::Double).map(|(value, _)| value)
    }

    /// Reads a length-prefixed ASCII string.
    ///
    /// If the payload is shorter than its prefix claims, nothing is consumed,
    /// the prefix included.
    fn read_string(&mut self) -> Result<String> {
        let (value, consumed) = peek_prefixed(&*self, CharWidth::Single)?;
        self.read(consumed)?;
        Ok(value)
    }

    /// Reads a length-prefixed UTF-16 string. Same rollback rule as
    /// [`ReadCursor::read_string`].
    fn read_wstring(&mut self) -> Result<String> {
        let (value, consumed) = peek_prefixed(&*self, CharWidth::Double)?;
        self.read(consumed)?;
        Ok(value)
    }
}
