use stream_core::prelude::*;

#[test]
fn write_then_read_preserves_order() {
    let mut ring = RingBufferDevice::<16>::new();

    assert_eq!(ring.write(b"hello").unwrap(), 5);
    assert_eq!(ring.size(), 5);
    assert!(!ring.eof());

    let mut buffer = [0u8; 5];
    assert_eq!(ring.read(&mut buffer).unwrap(), 5);
    assert_eq!(&buffer, b"hello");
    assert!(ring.eof());
}

#[test]
fn wraps_around_the_capacity_boundary() {
    let mut ring = RingBufferDevice::<8>::new();
    let mut buffer = [0u8; 8];

    ring.write(b"abcdef").unwrap();
    assert_eq!(ring.read(&mut buffer[..4]).unwrap(), 4);

    // Head is at 6 with 4 bytes free before wrap; this write crosses it.
    ring.write(b"123456").unwrap();
    assert_eq!(ring.size(), 8);

    let mut out = [0u8; 8];
    assert_eq!(ring.read(&mut out).unwrap(), 8);
    assert_eq!(&out, b"ef123456");
}

#[test]
fn overfull_write_is_rejected_and_buffer_is_untouched() {
    let mut ring = RingBufferDevice::<8>::new();
    ring.write(b"abcde").unwrap();

    let result = ring.write(b"fghij");
    assert!(matches!(
        result,
        Err(StreamError::CapacityExceeded {
            requested: 5,
            available: 3,
        })
    ));

    // The unread bytes were not overwritten.
    assert_eq!(ring.size(), 5);
    let mut buffer = [0u8; 8];
    assert_eq!(ring.read(&mut buffer).unwrap(), 5);
    assert_eq!(&buffer[..5], b"abcde");
}

#[test]
fn peek_does_not_consume() {
    let mut ring = RingBufferDevice::<8>::new();
    ring.write(b"frame").unwrap();

    let mut peeked = [0u8; 8];
    assert_eq!(ring.peek(&mut peeked), 5);
    assert_eq!(&peeked[..5], b"frame");
    assert_eq!(ring.size(), 5);

    let mut read = [0u8; 8];
    assert_eq!(ring.read(&mut read).unwrap(), 5);
    assert_eq!(&read[..5], b"frame");
}

#[test]
fn short_reads_drain_whatever_is_buffered() {
    let mut ring = RingBufferDevice::<4>::new();
    ring.write(b"ab").unwrap();

    let mut buffer = [0u8; 4];
    assert_eq!(ring.read(&mut buffer).unwrap(), 2);
    assert_eq!(ring.read(&mut buffer).unwrap(), 0);
}

#[test]
fn exact_capacity_write_is_accepted() {
    let mut ring = RingBufferDevice::<4>::new();
    assert_eq!(ring.write(b"full").unwrap(), 4);
    assert_eq!(ring.available(), 0);
    assert!(matches!(
        ring.write(b"x"),
        Err(StreamError::CapacityExceeded { .. })
    ));
}
