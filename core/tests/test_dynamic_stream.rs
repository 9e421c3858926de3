use stream_core::dynamic::{DynStream, DynamicStream, DynamicStreamView};
use stream_core::prelude::*;

#[test]
fn memory_device_scenario_through_the_erased_interface() {
    let mut stream = DynamicStream::new(MemoryDevice::new());

    assert!(stream.is_input());
    assert!(stream.is_input_seekable());
    assert!(stream.is_output());
    assert!(stream.is_output_seekable());
    assert!(stream.has_eof());
    assert!(stream.has_size());
    assert!(!stream.has_status());
    assert!(!stream.is_flushable());

    assert_eq!(stream.write(b"12345").unwrap(), 5);
    assert_eq!(stream.size(), 5);
    assert_eq!(stream.tellp(), 5);

    assert!(stream.seekg(0, SeekDirection::Begin));
    let mut buffer = [0u8; 5];
    assert_eq!(stream.read(&mut buffer).unwrap(), 5);
    assert_eq!(&buffer, b"12345");
    assert!(stream.eof());
}

#[test]
fn non_seekable_device_degrades_to_sentinels() {
    let mut stream = DynamicStream::new(RingBufferDevice::<8>::new());

    assert!(stream.is_input());
    assert!(stream.is_output());
    assert!(!stream.is_input_seekable());
    assert!(!stream.is_output_seekable());
    assert!(!stream.has_status());
    assert!(!stream.is_flushable());

    // Pre-check declined; calling anyway yields the neutral sentinels,
    // never a panic.
    assert!(!stream.seekg(0, SeekDirection::Begin));
    assert!(!stream.seekp(0, SeekDirection::Begin));
    assert_eq!(stream.tellg(), 0);
    assert_eq!(stream.tellp(), 0);
    assert!(!stream.good());
    assert!(stream.fail());
    stream.flush().unwrap();

    // The supported operations still work.
    stream.write(b"ok").unwrap();
    assert_eq!(stream.size(), 2);
}

#[test]
fn erased_pipeline_intersects_capabilities() {
    let pipeline = MemoryDevice::new() | SinkBufferFilter::<8>::new();
    let mut stream = DynamicStream::new(pipeline);

    assert!(stream.is_output());
    assert!(stream.is_output_seekable());
    // Provided by the buffer itself, even over a non-flushable device.
    assert!(stream.is_flushable());
    // The write buffer removes the input side the device would offer.
    assert!(!stream.is_input());
    assert!(!stream.is_input_seekable());
    assert!(!stream.has_size());
    assert!(!stream.has_status());

    stream.write(b"abc").unwrap();
    let mut probe = [0u8; 4];
    assert_eq!(stream.read(&mut probe).unwrap(), 0);

    stream.flush().unwrap();
    assert_eq!(stream.get_ref().device().data(), b"abc");
}

#[test]
fn erased_compress_pipeline_is_write_only() {
    let pipeline =
        MemoryDevice::new() | ZlibCompressFilter::<256>::new(ZlibCompressionLevel::Fastest);
    let mut stream = DynamicStream::new(pipeline);

    assert!(stream.is_output());
    assert!(!stream.is_input());

    stream.write(b"payload").unwrap();
    assert!(!stream.get_ref().device().data().is_empty());

    // Declined read degrades instead of corrupting the codec stream.
    let mut probe = [0u8; 8];
    assert_eq!(stream.read(&mut probe).unwrap(), 0);
}

#[test]
fn view_borrows_without_consuming_the_pipeline() {
    let mut device = MemoryDevice::new();

    {
        let mut view = DynamicStreamView::new(&mut device);
        assert!(view.is_output());
        view.write(b"borrowed").unwrap();
    }

    // The device is still usable directly afterwards.
    assert_eq!(device.data(), b"borrowed");
    device.seekg(0, SeekDirection::Begin);
    let mut buffer = [0u8; 8];
    assert_eq!(device.read(&mut buffer).unwrap(), 8);
}

#[test]
fn typed_accessors_run_over_the_erased_interface() {
    let mut stream = DynamicStream::new(MemoryDevice::new());

    {
        let mut writer = StreamWriter::new(stream.as_dyn());
        writer.write_prefixed_str::<u16>("erased").unwrap();
        writer.write_varint(300).unwrap();
    }

    assert!(stream.seekg(0, SeekDirection::Begin));

    let mut reader = StreamReader::new(stream.as_dyn());
    assert_eq!(reader.read_prefixed_string::<u16>().unwrap(), "erased");
    assert_eq!(reader.read_varint().unwrap(), 300);
}

#[test]
fn boxed_streams_are_uniform_over_heterogeneous_pipelines() {
    let memory = DynamicStream::new(MemoryDevice::new()).boxed();
    let ring = DynamicStream::new(RingBufferDevice::<16>::new()).boxed();
    let buffered =
        DynamicStream::new(MemoryDevice::new() | SinkBufferFilter::<4>::new()).boxed();

    let mut streams: Vec<Box<dyn DynStream>> = vec![memory, ring, buffered];

    for stream in &mut streams {
        assert!(stream.is_output());
        stream.write(b"xy").unwrap();
    }

    assert!(streams[0].is_input_seekable());
    assert!(!streams[1].is_input_seekable());
    assert!(!streams[2].is_input());
}

#[test]
fn into_inner_returns_the_concrete_pipeline() {
    let mut stream = DynamicStream::new(MemoryDevice::new());
    stream.write(b"kept").unwrap();

    let device = stream.into_inner();
    assert_eq!(device.data(), b"kept");
}
