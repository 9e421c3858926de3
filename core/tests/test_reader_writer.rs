use stream_core::prelude::*;

#[test]
fn pod_values_round_trip_as_raw_bytes() {
    let mut device = MemoryDevice::new();

    {
        let mut writer = StreamWriter::new(&mut device);
        writer.write_pod(&0xdead_beefu32).unwrap();
        writer.write_pod(&-42i64).unwrap();
        writer.write_pod(&[1u8, 2, 3, 4]).unwrap();
    }

    assert_eq!(device.size(), 4 + 8 + 4);

    device.seekg(0, SeekDirection::Begin);
    let mut reader = StreamReader::new(&mut device);
    assert_eq!(reader.read_pod::<u32>().unwrap(), 0xdead_beef);
    assert_eq!(reader.read_pod::<i64>().unwrap(), -42);
    assert_eq!(reader.read_pod::<[u8; 4]>().unwrap(), [1, 2, 3, 4]);
}

#[test]
fn raw_strings_have_no_delimiter() {
    let mut device = MemoryDevice::new();

    StreamWriter::new(&mut device).write_str("one").unwrap();
    StreamWriter::new(&mut device).write_str("two").unwrap();
    assert_eq!(device.data(), b"onetwo");

    device.seekg(0, SeekDirection::Begin);
    let mut reader = StreamReader::new(&mut device);
    assert_eq!(reader.read_string(3).unwrap(), "one");
    assert_eq!(reader.read_to_string().unwrap(), "two");
}

#[test]
fn read_exact_fails_on_exhausted_stream() {
    let mut device = MemoryDevice::from_vec(b"ab".to_vec());
    let mut reader = StreamReader::new(&mut device);

    let mut buffer = [0u8; 4];
    assert!(matches!(
        reader.read_exact(&mut buffer),
        Err(StreamError::UnexpectedEof {
            expected: 4,
            actual: 2,
        })
    ));
}

#[test]
fn read_line_strips_terminators_and_leaves_the_rest() {
    let mut device = MemoryDevice::from_vec(b"first\r\nsecond\nrest".to_vec());
    let mut reader = StreamReader::new(&mut device);

    assert_eq!(reader.read_line().unwrap(), "first");
    assert_eq!(reader.read_line().unwrap(), "second");
    assert_eq!(reader.read_to_string().unwrap(), "rest");
}

#[test]
fn read_line_without_terminator_returns_the_tail() {
    let mut device = MemoryDevice::from_vec(b"no newline".to_vec());
    let mut reader = StreamReader::new(&mut device);
    assert_eq!(reader.read_line().unwrap(), "no newline");
}

#[test]
fn length_prefixed_strings_round_trip_exactly() {
    let mut device = MemoryDevice::new();

    {
        let mut writer = StreamWriter::new(&mut device);
        writer.write_prefixed_str::<u8>("tiny").unwrap();
        writer.write_prefixed_str::<u16>("medium").unwrap();
        writer.write_prefixed_str::<u32>("longer payload, still exact").unwrap();
    }

    device.seekg(0, SeekDirection::Begin);
    let mut reader = StreamReader::new(&mut device);
    assert_eq!(reader.read_prefixed_string::<u8>().unwrap(), "tiny");
    assert_eq!(reader.read_prefixed_string::<u16>().unwrap(), "medium");
    assert_eq!(
        reader.read_prefixed_string::<u32>().unwrap(),
        "longer payload, still exact"
    );
    assert!(device.eof());
}

#[test]
fn length_prefix_wire_format_is_little_endian() {
    let mut device = MemoryDevice::new();
    StreamWriter::new(&mut device)
        .write_prefixed_str::<u16>("hi")
        .unwrap();

    // [len: u16 LE][raw bytes]
    assert_eq!(device.data(), &[0x02, 0x00, b'h', b'i']);
}

#[test]
fn oversized_prefix_write_is_rejected() {
    let mut device = MemoryDevice::new();
    let long = "x".repeat(300);

    let result = StreamWriter::new(&mut device).write_prefixed_str::<u8>(&long);
    assert!(matches!(
        result,
        Err(StreamError::LengthOverflow {
            length: 300,
            max: 255,
        })
    ));
    assert_eq!(device.size(), 0);
}

#[test]
fn varint_prefixed_strings_round_trip() {
    let mut device = MemoryDevice::new();
    StreamWriter::new(&mut device)
        .write_varint_prefixed_str("variable width")
        .unwrap();

    device.seekg(0, SeekDirection::Begin);
    let mut reader = StreamReader::new(&mut device);
    assert_eq!(reader.read_varint_prefixed_string().unwrap(), "variable width");
}

#[test]
fn invalid_utf8_is_a_typed_error() {
    let mut device = MemoryDevice::from_vec(vec![0xff, 0xfe, 0xfd]);
    let mut reader = StreamReader::new(&mut device);
    assert!(matches!(
        reader.read_string(3),
        Err(StreamError::Utf8(_))
    ));
}

#[test]
fn accessors_work_through_a_composed_pipeline() {
    let mut pipeline = MemoryDevice::new() | SinkBufferFilter::<64>::new();

    StreamWriter::new(&mut pipeline)
        .write_prefixed_str::<u32>("buffered")
        .unwrap();
    pipeline.flush().unwrap();

    let mut device = pipeline.into_device();
    device.seekg(0, SeekDirection::Begin);
    assert_eq!(
        StreamReader::new(&mut device)
            .read_prefixed_string::<u32>()
            .unwrap(),
        "buffered"
    );
}
