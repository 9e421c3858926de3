use stream_core::prelude::*;

#[test]
fn empty_device_reports_zero_size() {
    let mut device = MemoryDevice::new();
    assert_eq!(device.size(), 0);
    assert_eq!(device.tellg(), 0);
    assert_eq!(device.tellp(), 0);
    assert!(device.eof());
}

#[test]
fn write_then_read_round_trips() {
    let mut device = MemoryDevice::new();

    assert_eq!(device.write(b"12345").unwrap(), 5);
    assert_eq!(device.size(), 5);
    assert_eq!(device.tellp(), 5);

    assert!(device.seekg(0, SeekDirection::Begin));
    let mut buffer = [0u8; 5];
    assert_eq!(device.read(&mut buffer).unwrap(), 5);
    assert_eq!(&buffer, b"12345");
    assert!(device.eof());
}

#[test]
fn read_and_write_cursors_are_independent() {
    let mut device = MemoryDevice::from_vec(b"abcdef".to_vec());

    let mut buffer = [0u8; 3];
    assert_eq!(device.read(&mut buffer).unwrap(), 3);
    assert_eq!(&buffer, b"abc");
    assert_eq!(device.tellg(), 3);

    // Writing starts at the write cursor, which has not moved.
    assert_eq!(device.write(b"XY").unwrap(), 2);
    assert_eq!(device.tellp(), 2);
    assert_eq!(device.data(), b"XYcdef");
    assert_eq!(device.tellg(), 3);
}

#[test]
fn reads_are_clamped_to_available_bytes() {
    let mut device = MemoryDevice::from_vec(b"xyz".to_vec());

    let mut buffer = [0u8; 16];
    assert_eq!(device.read(&mut buffer).unwrap(), 3);
    assert_eq!(&buffer[..3], b"xyz");
    assert_eq!(device.read(&mut buffer).unwrap(), 0);
}

#[test]
fn writes_past_the_end_grow_the_buffer() {
    let mut device = MemoryDevice::new();
    device.write(b"0123456789").unwrap();

    assert!(device.seekp(4, SeekDirection::Begin));
    device.write(b"XXXXXXXX").unwrap();

    assert_eq!(device.size(), 12);
    assert_eq!(device.data(), b"0123XXXXXXXX");
}

#[test]
fn seeks_outside_bounds_fail_without_moving_the_cursor() {
    let mut device = MemoryDevice::from_vec(b"hello".to_vec());

    assert!(!device.seekg(6, SeekDirection::Begin));
    assert!(!device.seekg(-1, SeekDirection::Begin));
    assert!(!device.seekg(1, SeekDirection::End));
    assert!(!device.seekg(-6, SeekDirection::End));
    assert_eq!(device.tellg(), 0);

    // The full range [0, size] is reachable.
    assert!(device.seekg(5, SeekDirection::Begin));
    assert!(device.seekg(-5, SeekDirection::Current));
    assert_eq!(device.tellg(), 0);

    assert!(!device.seekp(6, SeekDirection::Begin));
    assert!(device.seekp(0, SeekDirection::End));
    assert_eq!(device.tellp(), 5);
}

#[test]
fn end_relative_seeks_address_from_the_high_water_mark() {
    let mut device = MemoryDevice::from_vec(b"0123456789".to_vec());

    assert!(device.seekg(-4, SeekDirection::End));
    let mut buffer = [0u8; 4];
    device.read(&mut buffer).unwrap();
    assert_eq!(&buffer, b"6789");
}

#[test]
fn access_mode_gates_reads_and_writes() {
    let mut read_only = MemoryDevice::with_mode(AccessMode::READ);
    assert!(matches!(
        read_only.write(b"nope"),
        Err(StreamError::AccessDenied { operation: "write" })
    ));

    let mut write_only = MemoryDevice::with_mode(AccessMode::WRITE);
    write_only.write(b"data").unwrap();
    let mut buffer = [0u8; 4];
    assert!(matches!(
        write_only.read(&mut buffer),
        Err(StreamError::AccessDenied { operation: "read" })
    ));
}
