//! Growable byte buffer with independent read and write cursors.

use std::fmt;

use tracing::{debug, trace};

use crate::cursor::{span, ReadCursor, STRING_PREFIX_WIDTH};
use crate::endian::Endian;
use crate::enums::BufferEnum;
use crate::primitive::Primitive;
use crate::print_octets::Octets;
use crate::strings::{ascii, prefixed, utf16};
use crate::view::BufferView;
use crate::Result;

/// An owned byte store with a read cursor, a write cursor and a fixed byte
/// order.
///
/// - `capacity` is the length of the backing storage; every byte up to it is
///   addressable by peeks and reads.
/// - `size` is the write position, i.e. how much content has been written.
/// - Both cursors stay within `0..=capacity`; setters clamp.
/// - Writes past capacity grow storage to exactly the bytes needed.
///
/// # Example
///
/// ```
/// use bytecursor_buffers::{ByteBuffer, ByteOrder, ReadCursor};
///
/// let mut buffer = ByteBuffer::new(ByteOrder::Little);
/// buffer.write_uint32(0x12345678);
/// assert_eq!(buffer.to_array(), vec![0x78, 0x56, 0x34, 0x12]);
///
/// buffer.set_read_position(0);
/// assert_eq!(buffer.read_uint32().unwrap(), 0x12345678);
/// ```
#[derive(Clone)]
pub struct ByteBuffer {
    storage: Vec<u8>,
    read_position: usize,
    write_position: usize,
    last_read_size: usize,
    last_write_size: usize,
    endian: Endian,
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new(Endian::MACHINE)
    }
}

impl ByteBuffer {
    /// Creates an empty buffer with zero capacity.
    pub fn new(order: impl Into<Endian>) -> Self {
        Self::with_capacity(order, 0)
    }

    /// Creates a buffer of `capacity` zeroed bytes and nothing written.
    pub fn with_capacity(order: impl Into<Endian>, capacity: usize) -> Self {
        Self {
            storage: vec![0; capacity],
            read_position: 0,
            write_position: 0,
            last_read_size: 0,
            last_write_size: 0,
            endian: order.into(),
        }
    }

    /// Wraps existing bytes as the buffer's content.
    ///
    /// Capacity and write position equal the length of `bytes`; reading
    /// starts at 0.
    pub fn from_bytes(order: impl Into<Endian>, bytes: impl Into<Vec<u8>>) -> Self {
        let storage = bytes.into();
        let write_position = storage.len();
        Self {
            storage,
            read_position: 0,
            write_position,
            last_read_size: 0,
            last_write_size: 0,
            endian: order.into(),
        }
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn is_big_endian(&self) -> bool {
        self.endian == Endian::Big
    }

    pub fn is_little_endian(&self) -> bool {
        self.endian == Endian::Little
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of bytes written, which is the write position.
    pub fn size(&self) -> usize {
        self.write_position
    }

    pub fn is_empty(&self) -> bool {
        self.write_position == 0
    }

    pub fn read_position(&self) -> usize {
        self.read_position
    }

    pub fn write_position(&self) -> usize {
        self.write_position
    }

    /// Length of the last successful raw read, 0 after a pop.
    pub fn last_read_size(&self) -> usize {
        self.last_read_size
    }

    /// Length of the last successful write, 0 after a pop.
    pub fn last_write_size(&self) -> usize {
        self.last_write_size
    }

    /// Reallocates storage to exactly `capacity` bytes.
    ///
    /// The first `min(capacity, old capacity)` bytes are kept, new bytes are
    /// zero. Cursors beyond the new capacity are clamped to it.
    pub fn set_capacity(&mut self, capacity: usize) {
        let old = self.storage.len();
        if capacity != old {
            trace!(old, new = capacity, "resizing buffer storage");
            self.storage.resize(capacity, 0);
            if capacity < old {
                self.storage.shrink_to_fit();
            }
        }
        self.read_position = self.read_position.min(capacity);
        self.write_position = self.write_position.min(capacity);
    }

    /// Replaces storage with `capacity` zeroed bytes, discarding all content.
    ///
    /// Cursors beyond the new capacity are clamped to it; the last read and
    /// write are forgotten.
    pub fn reset_capacity(&mut self, capacity: usize) {
        trace!(old = self.storage.len(), new = capacity, "replacing buffer storage");
        self.storage = vec![0; capacity];
        self.read_position = self.read_position.min(capacity);
        self.write_position = self.write_position.min(capacity);
        self.last_read_size = 0;
        self.last_write_size = 0;
    }

    /// Moves the read cursor, clamping to capacity.
    pub fn set_read_position(&mut self, position: usize) {
        self.read_position = position.min(self.capacity());
    }

    /// Moves the write cursor, clamping to capacity.
    pub fn set_write_position(&mut self, position: usize) {
        self.write_position = position.min(self.capacity());
    }

    /// Rewinds both cursors to 0. Storage is left untouched.
    pub fn clear(&mut self) {
        self.read_position = 0;
        self.write_position = 0;
        self.last_read_size = 0;
        self.last_write_size = 0;
    }

    /// Undoes the last successful read by moving the read cursor back.
    ///
    /// Returns `false` if there is nothing to undo. Only one step is
    /// remembered.
    pub fn pop_last_read(&mut self) -> bool {
        if self.last_read_size == 0 {
            return false;
        }
        self.read_position = self.read_position.saturating_sub(self.last_read_size);
        self.last_read_size = 0;
        true
    }

    /// Undoes the last successful write by moving the write cursor back.
    ///
    /// The bytes stay in storage and are overwritten by the next write.
    pub fn pop_last_write(&mut self) -> bool {
        if self.last_write_size == 0 {
            return false;
        }
        self.write_position = self.write_position.saturating_sub(self.last_write_size);
        self.last_write_size = 0;
        true
    }

    /// Copies `bytes` in at the write position, growing storage as needed.
    ///
    /// An empty slice is a no-op.
    pub fn write(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        // An overflowing end saturates and then fails allocation, which is fatal.
        let end = self.write_position.saturating_add(bytes.len());
        if end > self.capacity() {
            trace!(old = self.capacity(), new = end, "growing buffer storage");
            self.storage.resize(end, 0);
        }
        self.storage[self.write_position..end].copy_from_slice(bytes);
        self.write_position = end;
        self.last_write_size = bytes.len();
    }

    /// Copy of the written region `[0, size)`.
    pub fn to_array(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// The written region `[0, size)`.
    pub fn as_slice(&self) -> &[u8] {
        &self.storage[..self.write_position]
    }

    /// Consumes the buffer, returning the written region.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.storage.truncate(self.write_position);
        self.storage
    }

    /// A read-only cursor over the written region, starting at 0.
    pub fn view(&self) -> BufferView<'_> {
        BufferView::new(self.as_slice(), self.endian)
    }

    /// Writes any fixed-width value in the buffer's byte order.
    pub fn write_value<T: Primitive>(&mut self, value: T) {
        let bytes = value.encode(self.endian);
        self.write(bytes.as_ref());
    }

    /// Writes a boolean as a single `0x01`/`0x00` byte.
    pub fn write_bool(&mut self, value: bool) {
        self.write_value(value);
    }

    /// Writes a signed 8-bit integer.
    pub fn write_int8(&mut self, value: i8) {
        self.write_value(value);
    }

    /// Writes a signed 16-bit integer.
    pub fn write_int16(&mut self, value: i16) {
        self.write_value(value);
    }

    /// Writes a signed 32-bit integer.
    pub fn write_int32(&mut self, value: i32) {
        self.write_value(value);
    }

    /// Writes a signed 64-bit integer.
    pub fn write_int64(&mut self, value: i64) {
        self.write_value(value);
    }

    /// Writes an unsigned 8-bit integer.
    pub fn write_uint8(&mut self, value: u8) {
        self.write_value(value);
    }

    /// Writes an unsigned 16-bit integer.
    pub fn write_uint16(&mut self, value: u16) {
        self.write_value(value);
    }

    /// Writes an unsigned 32-bit integer.
    pub fn write_uint32(&mut self, value: u32) {
        self.write_value(value);
    }

    /// Writes an unsigned 64-bit integer.
    pub fn write_uint64(&mut self, value: u64) {
        self.write_value(value);
    }

    /// Writes a 32-bit floating point number.
    pub fn write_float(&mut self, value: f32) {
        self.write_value(value);
    }

    /// Writes a 64-bit floating point number.
    pub fn write_double(&mut self, value: f64) {
        self.write_value(value);
    }

    /// Writes an enum as its underlying numeric value.
    pub fn write_enum<E: BufferEnum>(&mut self, value: E) {
        self.write_value(value.to_repr());
    }

    /// Writes a `uint32` character count followed by one byte per character.
    ///
    /// Characters outside ASCII are written as `?`. Strings longer than
    /// `u32::MAX` characters are truncated to fit the prefix.
    pub fn write_string(&mut self, value: &str) {
        let payload = ascii(value);
        self.write_prefixed(&payload, 1);
    }

    /// Writes a `uint32` UTF-16 code unit count followed by two bytes per
    /// unit. Units are little-endian whatever the buffer's byte order.
    pub fn write_wstring(&mut self, value: &str) {
        let payload = utf16(value);
        self.write_prefixed(&payload, 2);
    }

    fn write_prefixed(&mut self, payload: &[u8], unit: usize) {
        let (count, payload) = prefixed(payload, unit);
        self.write_uint32(count);
        self.write(payload);
        self.last_write_size = STRING_PREFIX_WIDTH + payload.len();
    }
}

impl ReadCursor for ByteBuffer {
    fn endian(&self) -> Endian {
        self.endian
    }

    fn capacity(&self) -> usize {
        self.storage.len()
    }

    fn read_position(&self) -> usize {
        self.read_position
    }

    fn peek_at(&self, len: usize, index: usize) -> Result<&[u8]> {
        let range = span(index, len, self.storage.len())?;
        Ok(&self.storage[range])
    }

    fn read(&mut self, len: usize) -> Result<&[u8]> {
        if len == 0 {
            return Ok(&[]);
        }
        let range = span(self.read_position, len, self.storage.len()).inspect_err(|err| {
            debug!(%err, "buffer read failed");
        })?;
        self.read_position = range.end;
        self.last_read_size = len;
        Ok(&self.storage[range])
    }
}

impl PartialEq for ByteBuffer {
    /// Buffers are equal when their storage is byte-for-byte identical.
    /// Cursors and byte order are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl Eq for ByteBuffer {}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("endian", &self.endian)
            .field("capacity", &self.capacity())
            .field("read_position", &self.read_position)
            .field("write_position", &self.write_position)
            .field("content", &Octets::new(self.as_slice()))
            .finish()
    }
}
