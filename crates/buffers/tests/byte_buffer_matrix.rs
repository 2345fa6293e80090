//! ByteBuffer write/read matrix, cursor invariants and byte order scenarios.

use bytecursor_buffers::{
    buffer_enum, BufferError, BufferView, BufferWriter, ByteBuffer, ByteOrder, Endian,
    ReadCursor,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

buffer_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Command: u32 {
        Open = 0x0102_0304,
        Close = 2,
    }
}

buffer_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level: i64 {
        Low = -9_000_000_000,
        High = 9_000_000_000,
    }
}

const ORDERS: [ByteOrder; 3] = [ByteOrder::Big, ByteOrder::Little, ByteOrder::Machine];

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn little_endian_uint32_layout() {
    let mut buffer = ByteBuffer::new(ByteOrder::Little);
    buffer.write_uint32(0x12345678);
    assert_eq!(buffer.to_array(), vec![0x78, 0x56, 0x34, 0x12]);
    buffer.set_read_position(0);
    assert_eq!(buffer.read_uint32().unwrap(), 0x12345678);
}

#[test]
fn big_endian_uint32_layout() {
    let mut buffer = ByteBuffer::new(ByteOrder::Big);
    buffer.write_uint32(0x12345678);
    assert_eq!(buffer.to_array(), vec![0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn read_string_from_existing_bytes() {
    let mut buffer = ByteBuffer::from_bytes(
        ByteOrder::Little,
        vec![0x05, 0, 0, 0, b'h', b'e', b'l', b'l', b'o'],
    );
    assert_eq!(buffer.read_string().unwrap(), "hello");
    assert_eq!(buffer.read_position(), 9);
}

#[test]
fn write_empty_leaves_everything_unchanged() {
    let mut buffer = ByteBuffer::from_bytes(ByteOrder::Big, vec![1, 2]);
    buffer.write(&[]);
    assert_eq!(buffer.size(), 2);
    assert_eq!(buffer.capacity(), 2);
    assert_eq!(buffer.write_position(), 2);
}

// ---------------------------------------------------------------------------
// Typed round trips
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_integers_every_order() {
    for order in ORDERS {
        let mut buffer = ByteBuffer::new(order);
        buffer.write_int8(i8::MIN);
        buffer.write_int16(-1000);
        buffer.write_int32(i32::MAX);
        buffer.write_int64(-9_999_999_999);
        buffer.write_uint8(u8::MAX);
        buffer.write_uint16(0x0102);
        buffer.write_uint32(0xDEADBEEF);
        buffer.write_uint64(0x0102030405060708);
        assert_eq!(buffer.size(), 1 + 2 + 4 + 8 + 1 + 2 + 4 + 8);

        assert_eq!(buffer.read_int8().unwrap(), i8::MIN);
        assert_eq!(buffer.read_int16().unwrap(), -1000);
        assert_eq!(buffer.read_int32().unwrap(), i32::MAX);
        assert_eq!(buffer.read_int64().unwrap(), -9_999_999_999);
        assert_eq!(buffer.read_uint8().unwrap(), u8::MAX);
        assert_eq!(buffer.read_uint16().unwrap(), 0x0102);
        assert_eq!(buffer.read_uint32().unwrap(), 0xDEADBEEF);
        assert_eq!(buffer.read_uint64().unwrap(), 0x0102030405060708);
        assert_eq!(buffer.remaining(), 0);
    }
}

#[test]
fn roundtrip_floats_every_order() {
    for order in ORDERS {
        let mut buffer = ByteBuffer::new(order);
        buffer.write_float(1.5);
        buffer.write_float(f32::NEG_INFINITY);
        buffer.write_double(std::f64::consts::PI);
        buffer.write_double(-0.0);
        buffer.write_double(f64::NAN);

        assert_eq!(buffer.read_float().unwrap(), 1.5);
        assert_eq!(buffer.read_float().unwrap(), f32::NEG_INFINITY);
        assert_eq!(buffer.read_double().unwrap(), std::f64::consts::PI);
        let zero = buffer.read_double().unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_negative());
        assert!(buffer.read_double().unwrap().is_nan());
    }
}

#[test]
fn double_keeps_full_precision() {
    let value = 0.1f64 + 0.2f64;
    let mut buffer = ByteBuffer::new(ByteOrder::Big);
    buffer.write_double(value);
    assert_eq!(buffer.to_array(), value.to_be_bytes().to_vec());
    assert_eq!(buffer.read_double().unwrap().to_bits(), value.to_bits());
}

#[test]
fn roundtrip_bool() {
    let mut buffer = ByteBuffer::new(ByteOrder::Big);
    buffer.write_bool(true);
    buffer.write_bool(false);
    assert_eq!(buffer.to_array(), vec![1, 0]);
    assert!(buffer.read_bool().unwrap());
    assert!(!buffer.read_bool().unwrap());
}

#[test]
fn roundtrip_generic_values() {
    let mut buffer = ByteBuffer::new(ByteOrder::Little);
    buffer.write_value(7u16);
    buffer.write_value(-7i32);
    buffer.write_value(true);
    assert_eq!(buffer.read_value::<u16>().unwrap(), 7);
    assert_eq!(buffer.read_value::<i32>().unwrap(), -7);
    assert!(buffer.read_value::<bool>().unwrap());
}

#[test]
fn random_roundtrip_all_kinds() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for order in ORDERS {
        let mut buffer = ByteBuffer::new(order);
        let mut expected = Vec::new();
        for _ in 0..200 {
            let value: (i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, bool) = (
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen(),
                rng.gen(),
            );
            buffer.write_int8(value.0);
            buffer.write_int16(value.1);
            buffer.write_int32(value.2);
            buffer.write_int64(value.3);
            buffer.write_uint8(value.4);
            buffer.write_uint16(value.5);
            buffer.write_uint32(value.6);
            buffer.write_uint64(value.7);
            buffer.write_float(value.8);
            buffer.write_double(value.9);
            buffer.write_bool(value.10);
            expected.push(value);
        }
        for value in expected {
            assert_eq!(buffer.read_int8().unwrap(), value.0);
            assert_eq!(buffer.read_int16().unwrap(), value.1);
            assert_eq!(buffer.read_int32().unwrap(), value.2);
            assert_eq!(buffer.read_int64().unwrap(), value.3);
            assert_eq!(buffer.read_uint8().unwrap(), value.4);
            assert_eq!(buffer.read_uint16().unwrap(), value.5);
            assert_eq!(buffer.read_uint32().unwrap(), value.6);
            assert_eq!(buffer.read_uint64().unwrap(), value.7);
            assert_eq!(buffer.read_float().unwrap().to_bits(), value.8.to_bits());
            assert_eq!(buffer.read_double().unwrap().to_bits(), value.9.to_bits());
            assert_eq!(buffer.read_bool().unwrap(), value.10);
        }
        assert_eq!(buffer.read_position(), buffer.size());
    }
}

// ---------------------------------------------------------------------------
// Byte order
// ---------------------------------------------------------------------------

#[test]
fn big_written_read_as_little_is_reversed() {
    let mut big = ByteBuffer::new(ByteOrder::Big);
    big.write_uint32(0x0102_0304);
    big.write_int16(0x0a0b);
    big.write_uint64(0x1122_3344_5566_7788);

    let mut little = ByteBuffer::from_bytes(ByteOrder::Little, big.to_array());
    assert_eq!(little.read_uint32().unwrap(), 0x0403_0201);
    assert_eq!(little.read_int16().unwrap(), 0x0b0a);
    assert_eq!(little.read_uint64().unwrap(), 0x8877_6655_4433_2211);
}

#[test]
fn random_cross_order_reads_are_byte_swapped() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let value: u64 = rng.gen();
        let float: f64 = rng.gen();
        let mut big = ByteBuffer::new(ByteOrder::Big);
        big.write_uint64(value);
        big.write_double(float);
        let mut little = ByteBuffer::from_bytes(ByteOrder::Little, big.into_vec());
        assert_eq!(little.read_uint64().unwrap(), value.swap_bytes());
        assert_eq!(
            little.read_double().unwrap().to_bits(),
            float.to_bits().swap_bytes()
        );
    }
}

#[test]
fn machine_order_matches_native_layout() {
    let mut buffer = ByteBuffer::new(ByteOrder::Machine);
    buffer.write_uint32(0xA1B2C3D4);
    assert_eq!(buffer.to_array(), 0xA1B2C3D4u32.to_ne_bytes().to_vec());
    assert_eq!(buffer.endian(), Endian::MACHINE);
}

#[test]
fn single_byte_values_ignore_order() {
    let mut big = ByteBuffer::new(ByteOrder::Big);
    let mut little = ByteBuffer::new(ByteOrder::Little);
    for buffer in [&mut big, &mut little] {
        buffer.write_int8(-3);
        buffer.write_uint8(0xfe);
        buffer.write_bool(true);
    }
    assert_eq!(big.to_array(), little.to_array());
}

// ---------------------------------------------------------------------------
// Cursor invariants
// ---------------------------------------------------------------------------

#[test]
fn failed_read_does_not_move_cursor() {
    for len in 1..6 {
        let mut buffer = ByteBuffer::from_bytes(ByteOrder::Big, vec![0u8; 8]);
        buffer.read(len).unwrap();
        let position = buffer.read_position();
        if position + len > buffer.capacity() {
            assert!(buffer.read(len).is_err());
            assert_eq!(buffer.read_position(), position);
        }
        buffer.set_read_position(buffer.capacity());
        let end = buffer.read_position();
        assert_eq!(
            buffer.read(len),
            Err(BufferError::OutOfBounds {
                offset: end,
                len,
                capacity: 8,
            })
        );
        assert_eq!(buffer.read_position(), end);
    }
}

#[test]
fn zero_length_read_is_distinguishable_from_failure() {
    let mut buffer = ByteBuffer::from_bytes(ByteOrder::Big, vec![1]);
    buffer.read(1).unwrap();
    assert!(buffer.read(0).unwrap().is_empty());
    assert!(buffer.read(1).is_err());
    assert_eq!(buffer.read_position(), 1);
}

#[test]
fn peek_never_advances() {
    let mut buffer = ByteBuffer::new(ByteOrder::Big);
    buffer.write(&[1, 2, 3, 4, 5]);
    buffer.read(1).unwrap();
    assert_eq!(buffer.peek(2).unwrap(), &[2, 3]);
    assert_eq!(buffer.peek_at(2, 3).unwrap(), &[4, 5]);
    assert_eq!(buffer.peek_at(2, 3).unwrap(), buffer.peek_at(2, 3).unwrap());
    assert_eq!(buffer.peek_uint16().unwrap(), 0x0203);
    assert_eq!(buffer.read_position(), 1);
    assert!(buffer.peek_at(1, 5).is_err());
    assert!(buffer.peek(5).is_err());
}

#[test]
fn growth_preserves_prior_content() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut buffer = ByteBuffer::new(ByteOrder::Little);
    let mut mirror = Vec::new();
    for _ in 0..50 {
        let len = rng.gen_range(0..32);
        let chunk: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let before = buffer.write_position();
        buffer.write(&chunk);
        mirror.extend_from_slice(&chunk);
        assert_eq!(buffer.capacity(), before + len);
        assert_eq!(buffer.to_array(), mirror);
    }
}

#[test]
fn positions_clamp_to_capacity() {
    let mut buffer = ByteBuffer::with_capacity(ByteOrder::Big, 3);
    buffer.set_read_position(4);
    buffer.set_write_position(usize::MAX);
    assert_eq!(buffer.read_position(), 3);
    assert_eq!(buffer.write_position(), 3);
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_string() {
    let mut buffer = ByteBuffer::new(ByteOrder::Big);
    buffer.write_string("hello");
    buffer.write_string("");
    assert_eq!(
        buffer.to_array(),
        vec![0, 0, 0, 5, b'h', b'e', b'l', b'l', b'o', 0, 0, 0, 0]
    );
    assert_eq!(buffer.peek_string().unwrap(), "hello");
    assert_eq!(buffer.read_position(), 0);
    assert_eq!(buffer.read_string().unwrap(), "hello");
    assert_eq!(buffer.read_string().unwrap(), "");
}

#[test]
fn string_replaces_non_ascii() {
    let mut buffer = ByteBuffer::new(ByteOrder::Little);
    buffer.write_string("caf\u{e9}");
    assert_eq!(buffer.read_string().unwrap(), "caf?");
}

#[test]
fn roundtrip_wstring() {
    for order in ORDERS {
        let mut buffer = ByteBuffer::new(order);
        buffer.write_wstring("h\u{e9}llo \u{1F600}");
        assert_eq!(buffer.peek_uint32().unwrap(), 8);
        assert_eq!(buffer.size(), 4 + 16);
        assert_eq!(buffer.peek_wstring().unwrap(), "h\u{e9}llo \u{1F600}");
        assert_eq!(buffer.read_wstring().unwrap(), "h\u{e9}llo \u{1F600}");
        assert_eq!(buffer.remaining(), 0);
    }
}

#[test]
fn wstring_units_are_little_endian() {
    let mut big = ByteBuffer::new(ByteOrder::Big);
    big.write_wstring("A");
    assert_eq!(big.to_array(), vec![0, 0, 0, 1, 0x41, 0x00]);

    let mut little = ByteBuffer::new(ByteOrder::Little);
    little.write_wstring("A");
    assert_eq!(little.to_array(), vec![1, 0, 0, 0, 0x41, 0x00]);
}

#[test]
fn wstring_payload_is_shared_across_orders() {
    let mut big = ByteBuffer::new(ByteOrder::Big);
    big.write_wstring("\u{e9}\u{1F600}");
    let big_bytes = big.to_array();

    let mut little = ByteBuffer::new(ByteOrder::Little);
    little.write_wstring("\u{e9}\u{1F600}");
    let little_bytes = little.to_array();

    assert_eq!(&big_bytes[..4], &[0, 0, 0, 3]);
    assert_eq!(&little_bytes[..4], &[3, 0, 0, 0]);
    assert_eq!(&big_bytes[4..], &little_bytes[4..]);
    assert_eq!(&big_bytes[4..6], &[0xe9, 0x00]);

    // Swapping only the prefix makes a big-endian wstring readable as little.
    let mut swapped = big_bytes.clone();
    swapped[..4].reverse();
    let mut view = BufferView::new(&swapped, Endian::Little);
    assert_eq!(view.read_wstring().unwrap(), "\u{e9}\u{1F600}");
}

#[test]
fn short_string_payload_consumes_nothing() {
    let mut buffer = ByteBuffer::from_bytes(ByteOrder::Little, vec![10, 0, 0, 0, b'a', b'b']);
    assert!(matches!(
        buffer.read_string(),
        Err(BufferError::OutOfBounds {
            offset: 4,
            len: 10,
            capacity: 6,
        })
    ));
    assert_eq!(buffer.read_position(), 0);
    assert!(buffer.peek_string().is_err());

    let mut wide = ByteBuffer::from_bytes(ByteOrder::Big, vec![0, 0, 0, 2, 0, b'a']);
    assert!(wide.read_wstring().is_err());
    assert_eq!(wide.read_position(), 0);
}

#[test]
fn truncated_prefix_fails() {
    let mut buffer = ByteBuffer::from_bytes(ByteOrder::Big, vec![0, 0]);
    assert!(buffer.read_string().is_err());
    assert_eq!(buffer.read_position(), 0);
}

#[test]
fn string_peek_is_relative_to_read_position() {
    let mut buffer = ByteBuffer::new(ByteOrder::Big);
    buffer.write_uint8(0xff);
    buffer.write_string("xy");
    buffer.read_uint8().unwrap();
    assert_eq!(buffer.peek_string().unwrap(), "xy");
    assert_eq!(buffer.read_position(), 1);
    assert_eq!(buffer.read_string().unwrap(), "xy");
    assert_eq!(buffer.last_read_size(), 6);
    assert!(buffer.pop_last_read());
    assert_eq!(buffer.read_position(), 1);
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[test]
fn enum_uses_underlying_width_and_order() {
    let mut buffer = ByteBuffer::new(ByteOrder::Little);
    buffer.write_enum(Command::Open);
    buffer.write_enum(Level::Low);
    assert_eq!(&buffer.to_array()[..4], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(buffer.size(), 4 + 8);
    assert_eq!(buffer.peek_enum::<Command>().unwrap(), Command::Open);
    assert_eq!(buffer.read_enum::<Command>().unwrap(), Command::Open);
    assert_eq!(buffer.read_enum::<Level>().unwrap(), Level::Low);
}

#[test]
fn unknown_discriminant_is_rejected_without_consuming() {
    let mut buffer = ByteBuffer::new(ByteOrder::Big);
    buffer.write_uint32(99);
    assert_eq!(
        buffer.read_enum::<Command>(),
        Err(BufferError::InvalidDiscriminant {
            name: "Command",
            value: "99".to_string(),
        })
    );
    assert_eq!(buffer.read_position(), 0);
    assert_eq!(buffer.read_uint32().unwrap(), 99);
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn view_reads_buffer_content() {
    let mut buffer = ByteBuffer::new(ByteOrder::Big);
    buffer.write_uint16(0xbeef);
    buffer.write_string("abc");
    buffer.write_enum(Command::Close);

    let mut view = buffer.view();
    assert_eq!(view.read_uint16().unwrap(), 0xbeef);
    assert_eq!(view.read_string().unwrap(), "abc");
    assert_eq!(view.read_enum::<Command>().unwrap(), Command::Close);
    assert!(view.read_uint8().is_err());
    assert_eq!(buffer.read_position(), 0);
}

#[test]
fn view_over_foreign_bytes() {
    let data = 1.25f32.to_le_bytes();
    let mut view = BufferView::new(&data, ByteOrder::Little);
    assert_eq!(view.peek_float().unwrap(), 1.25);
    assert_eq!(view.read_float().unwrap(), 1.25);
    assert_eq!(view.remaining(), 0);
}

// ---------------------------------------------------------------------------
// Fixed-capacity writers
// ---------------------------------------------------------------------------

#[test]
fn writer_matches_buffer_layout() {
    for order in ORDERS {
        let mut buffer = ByteBuffer::new(order);
        buffer.write_uint16(0xbeef);
        buffer.write_double(-2.5);
        buffer.write_wstring("ok");
        buffer.write_enum(Command::Open);

        let mut storage = [0u8; 32];
        let mut writer = BufferWriter::new(&mut storage, order);
        writer.write_uint16(0xbeef).unwrap();
        writer.write_double(-2.5).unwrap();
        writer.write_wstring("ok").unwrap();
        writer.write_enum(Command::Open).unwrap();

        assert_eq!(writer.written(), buffer.as_slice());
    }
}

#[test]
fn writer_rejects_overflow_and_keeps_cursor() {
    let mut storage = [0u8; 6];
    let mut writer = BufferWriter::new(&mut storage, ByteOrder::Little);
    writer.write_uint32(7).unwrap();
    assert_eq!(
        writer.write_uint32(8),
        Err(BufferError::OutOfBounds {
            offset: 4,
            len: 4,
            capacity: 6,
        })
    );
    assert_eq!(writer.write_position(), 4);
    assert!(writer.write_string("abc").is_err());
    assert_eq!(writer.write_position(), 4);
    writer.write_uint16(9).unwrap();
    assert_eq!(writer.remaining(), 0);
    assert_eq!(storage, [7, 0, 0, 0, 9, 0]);
}
