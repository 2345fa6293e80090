//! Fixed-capacity writer over borrowed bytes.

use tracing::debug;

use crate::cursor::{span, STRING_PREFIX_WIDTH};
use crate::endian::Endian;
use crate::enums::BufferEnum;
use crate::primitive::Primitive;
use crate::strings::{ascii, prefixed, utf16};
use crate::Result;

/// A write cursor over a mutable slice the caller owns.
///
/// Capacity is the slice length and never grows. A write that does not fit
/// returns [`BufferError::OutOfBounds`](crate::BufferError::OutOfBounds) and
/// leaves both the cursor and the slice untouched. Byte order rules match
/// [`ByteBuffer`](crate::ByteBuffer), so bytes written here read back through
/// a [`BufferView`](crate::BufferView) of the same order.
///
/// # Example
///
/// ```
/// use bytecursor_buffers::{BufferWriter, Endian};
///
/// let mut data = [0u8; 3];
/// let mut writer = BufferWriter::new(&mut data, Endian::Big);
///
/// writer.write_uint16(0x0102).unwrap();
/// assert!(writer.write_uint16(0x0304).is_err());
/// writer.write_uint8(0x05).unwrap();
/// assert_eq!(data, [0x01, 0x02, 0x05]);
/// ```
#[derive(Debug)]
pub struct BufferWriter<'a> {
    data: &'a mut [u8],
    x: usize,
    last_write_size: usize,
    endian: Endian,
}

impl<'a> BufferWriter<'a> {
    pub fn new(data: &'a mut [u8], order: impl Into<Endian>) -> Self {
        Self {
            data,
            x: 0,
            last_write_size: 0,
            endian: order.into(),
        }
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn write_position(&self) -> usize {
        self.x
    }

    /// Moves the write cursor, clamping to capacity.
    pub fn set_write_position(&mut self, position: usize) {
        self.x = position.min(self.data.len());
    }

    /// Bytes between the write position and capacity.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.x
    }

    /// Rewinds the cursor to 0. The slice is left untouched.
    pub fn clear(&mut self) {
        self.x = 0;
        self.last_write_size = 0;
    }

    /// Length of the last successful write, 0 after a pop.
    pub fn last_write_size(&self) -> usize {
        self.last_write_size
    }

    /// Undoes the last successful write by moving the cursor back.
    pub fn pop_last_write(&mut self) -> bool {
        if self.last_write_size == 0 {
            return false;
        }
        self.x = self.x.saturating_sub(self.last_write_size);
        self.last_write_size = 0;
        true
    }

    /// The region written so far, `[0, write_position)`.
    pub fn written(&self) -> &[u8] {
        &self.data[..self.x]
    }

    /// Copies `bytes` in at the write position.
    ///
    /// An empty slice is a no-op.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        let range = span(self.x, bytes.len(), self.data.len()).map_err(|err| {
            debug!(%err, "write past fixed capacity");
            err
        })?;
        self.x = range.end;
        self.data[range].copy_from_slice(bytes);
        self.last_write_size = bytes.len();
        Ok(())
    }

    /// Writes any fixed-width value in the writer's byte order.
    pub fn write_value<T: Primitive>(&mut self, value: T) -> Result<()> {
        let bytes = value.encode(self.endian);
        self.write(bytes.as_ref())
    }

    /// Writes a boolean as a single `0x01`/`0x00` byte.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a signed 8-bit integer.
    pub fn write_int8(&mut self, value: i8) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a signed 16-bit integer.
    pub fn write_int16(&mut self, value: i16) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a signed 32-bit integer.
    pub fn write_int32(&mut self, value: i32) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a signed 64-bit integer.
    pub fn write_int64(&mut self, value: i64) -> Result<()> {
        self.write_value(value)
    }

    /// Writes an unsigned 8-bit integer.
    pub fn write_uint8(&mut self, value: u8) -> Result<()> {
        self.write_value(value)
    }

    /// Writes an unsigned 16-bit integer.
    pub fn write_uint16(&mut self, value: u16) -> Result<()> {
        self.write_value(value)
    }

    /// Writes an unsigned 32-bit integer.
    pub fn write_uint32(&mut self, value: u32) -> Result<()> {
        self.write_value(value)
    }

    /// Writes an unsigned 64-bit integer.
    pub fn write_uint64(&mut self, value: u64) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a 32-bit floating point number.
    pub fn write_float(&mut self, value: f32) -> Result<()> {
        self.write_value(value)
    }

    /// Writes a 64-bit floating point number.
    pub fn write_double(&mut self, value: f64) -> Result<()> {
        self.write_value(value)
    }

    /// Writes an enum as its underlying numeric value.
    pub fn write_enum<E: BufferEnum>(&mut self, value: E) -> Result<()> {
        self.write_value(value.to_repr())
    }

    /// Writes a `uint32` character count followed by one ASCII byte per
    /// character. Nothing is written unless prefix and payload both fit.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        let payload = ascii(value);
        self.write_prefixed(&payload, 1)
    }

    /// Writes a `uint32` UTF-16 code unit count followed by two little-endian
    /// bytes per unit. Nothing is written unless prefix and payload both fit.
    pub fn write_wstring(&mut self, value: &str) -> Result<()> {
        let payload = utf16(value);
        self.write_prefixed(&payload, 2)
    }

    fn write_prefixed(&mut self, payload: &[u8], unit: usize) -> Result<()> {
        let (count, payload) = prefixed(payload, unit);
        let total = STRING_PREFIX_WIDTH + payload.len();
        span(self.x, total, self.data.len())?;
        self.write_uint32(count)?;
        self.write(payload)?;
        self.last_write_size = total;
        Ok(())
    }
}
