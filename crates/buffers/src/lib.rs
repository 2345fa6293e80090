//! Binary cursor buffers.
//!
//! This crate provides a growable byte buffer with independent read and write
//! cursors, a fixed byte order, and typed access to integers, floats, booleans,
//! enums and length-prefixed strings.
//!
//! # Overview
//!
//! - [`ByteBuffer`] - Owned storage with read/write cursors and exact growth
//! - [`BufferView`] - Read-only cursor over borrowed bytes
//! - [`BufferWriter`] - Fixed-capacity write cursor over borrowed bytes
//! - [`ReadCursor`] - Typed peek/read surface shared by both
//! - [`Endian`] / [`ByteOrder`] - Byte order, with "machine" resolved at
//!   construction
//! - [`BufferEnum`] / [`buffer_enum!`] - Enums carried as their underlying
//!   numeric value
//!
//! # Example
//!
//! ```
//! use bytecursor_buffers::{ByteBuffer, ByteOrder, ReadCursor};
//!
//! let mut buffer = ByteBuffer::new(ByteOrder::Big);
//! buffer.write_uint8(0x01);
//! buffer.write_uint16(0x0203);
//! buffer.write_string("hello");
//!
//! assert_eq!(buffer.read_uint8().unwrap(), 0x01);
//! assert_eq!(buffer.peek_uint16().unwrap(), 0x0203);
//! assert_eq!(buffer.read_uint16().unwrap(), 0x0203);
//! assert_eq!(buffer.read_string().unwrap(), "hello");
//! assert!(buffer.read_uint8().is_err());
//! ```

mod buffer;
mod cursor;
mod endian;
mod enums;
mod primitive;
mod print_octets;
mod strings;
mod view;
mod writer;

use thiserror::Error;

pub use buffer::ByteBuffer;
pub use cursor::{ReadCursor, STRING_PREFIX_WIDTH};
pub use endian::{
    convert, from_big_endian, from_endian, from_little_endian, to_big_endian, to_endian,
    to_little_endian, ByteOrder, Endian,
};
pub use enums::BufferEnum;
pub use primitive::{Numeric, NumericKind, Primitive};
pub use print_octets::{print_octets, Octets, DEFAULT_MAX_OCTETS};
pub use strings::{
    ascii, decode_ascii, decode_utf16, utf16, ASCII_REPLACEMENT, UTF16_UNIT_ORDER,
};
pub use view::BufferView;
pub use writer::BufferWriter;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// An access asked for bytes past the end of fixed storage.
    #[error("cannot access {len} bytes at offset {offset}: capacity is {capacity}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },
    /// The decoded value names no variant of the target enum.
    #[error("{value} is not a valid {name}")]
    InvalidDiscriminant { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, BufferError>;
