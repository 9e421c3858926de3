use proptest::prelude::*;
use stream_core::prelude::*;
use stream_core::varint;

#[test]
fn zero_encodes_to_a_single_zero_byte() {
    let mut buf = [0u8; varint::MAX_VARINT_LEN];
    let len = varint::encode(0, &mut buf);
    assert_eq!(&buf[..len], &[0x00]);
    assert_eq!(varint::decode(&buf[..len]).unwrap(), (0, 1));
}

#[test]
fn three_hundred_encodes_to_the_known_bytes() {
    let mut buf = [0u8; varint::MAX_VARINT_LEN];
    let len = varint::encode(300, &mut buf);
    assert_eq!(&buf[..len], &[0xac, 0x02]);
    assert_eq!(varint::decode(&[0xac, 0x02]).unwrap(), (300, 2));
}

#[test]
fn length_boundaries_are_minimal() {
    let cases: &[(u64, usize)] = &[
        (0, 1),
        (127, 1),
        (128, 2),
        (16_383, 2),
        (16_384, 3),
        (u32::MAX as u64, 5),
        (u64::MAX, 10),
    ];

    let mut buf = [0u8; varint::MAX_VARINT_LEN];
    for &(value, expected) in cases {
        assert_eq!(varint::encoded_len(value), expected, "len of {value}");
        assert_eq!(varint::encode(value, &mut buf), expected, "encode of {value}");
    }
}

#[test]
fn max_value_round_trips_through_ten_bytes() {
    let mut buf = [0u8; varint::MAX_VARINT_LEN];
    let len = varint::encode(u64::MAX, &mut buf);
    assert_eq!(len, 10);
    assert_eq!(varint::decode(&buf[..len]).unwrap(), (u64::MAX, 10));
}

#[test]
fn truncated_input_is_rejected() {
    assert!(matches!(
        varint::decode(&[0x80]),
        Err(StreamError::UnexpectedEof { .. })
    ));
    assert!(matches!(varint::decode(&[]), Err(StreamError::UnexpectedEof { .. })));
}

#[test]
fn overlong_continuation_is_rejected() {
    let overlong = [0x80u8; 11];
    assert!(matches!(
        varint::decode(&overlong),
        Err(StreamError::MalformedVarint)
    ));
}

#[test]
fn tenth_byte_overflow_is_rejected() {
    // Nine continuation bytes put the tenth at bit 63; anything above one
    // remaining bit overflows.
    let mut bytes = [0xffu8; 10];
    bytes[9] = 0x02;
    assert!(matches!(
        varint::decode(&bytes),
        Err(StreamError::MalformedVarint)
    ));
}

#[test]
fn accessor_round_trip_through_a_device() {
    let mut device = MemoryDevice::new();

    {
        let mut writer = StreamWriter::new(&mut device);
        writer.write_varint(0).unwrap();
        writer.write_varint(300).unwrap();
        writer.write_varint(u64::MAX).unwrap();
    }

    device.seekg(0, SeekDirection::Begin);
    let mut reader = StreamReader::new(&mut device);
    assert_eq!(reader.read_varint().unwrap(), 0);
    assert_eq!(reader.read_varint().unwrap(), 300);
    assert_eq!(reader.read_varint().unwrap(), u64::MAX);
}

proptest! {
    #[test]
    fn round_trips_across_the_domain(value in any::<u64>()) {
        let mut buf = [0u8; varint::MAX_VARINT_LEN];
        let len = varint::encode(value, &mut buf);

        prop_assert_eq!(len, varint::encoded_len(value));
        prop_assert!(len <= varint::MAX_VARINT_LEN);

        let (decoded, consumed) = varint::decode(&buf[..len]).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(consumed, len);
    }

    #[test]
    fn small_values_use_one_byte(value in 0u64..128) {
        prop_assert_eq!(varint::encoded_len(value), 1);
    }
}
