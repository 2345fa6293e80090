//! Read-only cursor over borrowed bytes.

use crate::cursor::{span, ReadCursor};
use crate::endian::Endian;
use crate::Result;

/// A read cursor over a byte slice the caller owns.
///
/// Capacity is the slice length. Typed access comes from [`ReadCursor`] and
/// follows the same bounds and byte order rules as
/// [`ByteBuffer`](crate::ByteBuffer), but nothing can be written.
///
/// # Example
///
/// ```
/// use bytecursor_buffers::{BufferView, Endian, ReadCursor};
///
/// let data = [0x00, 0x02, 0xff];
/// let mut view = BufferView::new(&data, Endian::Big);
///
/// assert_eq!(view.read_uint16().unwrap(), 2);
/// assert_eq!(view.peek_int8().unwrap(), -1);
/// assert!(view.read_uint16().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BufferView<'a> {
    data: &'a [u8],
    x: usize,
    endian: Endian,
}

impl<'a> BufferView<'a> {
    pub fn new(data: &'a [u8], order: impl Into<Endian>) -> Self {
        Self {
            data,
            x: 0,
            endian: order.into(),
        }
    }

    /// Points the view at new bytes and rewinds it.
    pub fn reset(&mut self, data: &'a [u8]) {
        self.data = data;
        self.x = 0;
    }

    /// Moves the read cursor, clamping to capacity.
    pub fn set_read_position(&mut self, position: usize) {
        self.x = position.min(self.data.len());
    }

    /// Advances past `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.bytes(len).map(|_| ())
    }

    /// Consuming read that keeps the borrow of the underlying slice.
    pub fn bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len == 0 {
            return Ok(&[]);
        }
        let range = span(self.x, len, self.data.len())?;
        self.x = range.end;
        Ok(&self.data[range])
    }

    /// Splits off the next `len` bytes as their own view and advances past
    /// them.
    pub fn cut(&mut self, len: usize) -> Result<BufferView<'a>> {
        let bytes = self.bytes(len)?;
        Ok(BufferView::new(bytes, self.endian))
    }

    /// Everything from the read position to the end.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.x..]
    }
}

impl ReadCursor for BufferView<'_> {
    fn endian(&self) -> Endian {
        self.endian
    }

    fn capacity(&self) -> usize {
        self.data.len()
    }

    fn read_position(&self) -> usize {
        self.x
    }

    fn peek_at(&self, len: usize, index: usize) -> Result<&[u8]> {
        let range = span(index, len, self.data.len())?;
        Ok(&self.data[range])
    }

    fn read(&mut self, len: usize) -> Result<&[u8]> {
        self.bytes(len)
    }
}
