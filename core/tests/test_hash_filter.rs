use proptest::prelude::*;
use stream_core::prelude::*;

#[test]
fn empty_input_digest_matches_the_known_vector() {
    let mut pipeline = MemoryDevice::new() | Sha256Filter::new();
    let digest = pipeline.filter_mut().finalize();
    assert_eq!(
        hex::encode(digest),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn abc_digest_matches_the_known_vector() {
    let mut pipeline = MemoryDevice::new() | Sha256Filter::new();
    pipeline.write(b"abc").unwrap();
    let digest = pipeline.filter_mut().finalize();
    assert_eq!(
        hex::encode(digest),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn writes_pass_through_to_the_sink_unchanged() {
    let mut pipeline = MemoryDevice::new() | Sha256Filter::new();
    pipeline.write(b"plain").unwrap();
    pipeline.write(b"text").unwrap();
    assert_eq!(pipeline.device().data(), b"plaintext");
}

#[test]
fn chunked_writes_hash_the_same_as_one_write() {
    let mut chunked = MemoryDevice::new() | Sha256Filter::new();
    chunked.write(b"stream").unwrap();
    chunked.write(b"ed by").unwrap();
    chunked.write(b" parts").unwrap();

    let mut whole = MemoryDevice::new() | Sha256Filter::new();
    whole.write(b"streamed by parts").unwrap();

    assert_eq!(
        chunked.filter_mut().finalize(),
        whole.filter_mut().finalize()
    );
}

#[test]
fn repeated_finalize_is_deterministic() {
    let mut pipeline = MemoryDevice::new() | Sha256Filter::new();
    pipeline.write(b"one shot").unwrap();

    let first = pipeline.filter_mut().finalize();
    let second = pipeline.filter_mut().finalize();
    assert_eq!(first, second);
}

#[test]
fn hash_composes_under_a_sink_buffer() {
    // Hash sees bytes in write order regardless of outer buffering.
    let mut pipeline = MemoryDevice::new() | Sha256Filter::new() | SinkBufferFilter::<4>::new();

    pipeline.write(b"abcdefgh").unwrap();
    pipeline.flush().unwrap();

    let mut reference = MemoryDevice::new() | Sha256Filter::new();
    reference.write(b"abcdefgh").unwrap();

    let inner = pipeline.next_mut();
    assert_eq!(
        inner.filter_mut().finalize(),
        reference.filter_mut().finalize()
    );
    assert_eq!(inner.device().data(), b"abcdefgh");
}

proptest! {
    #[test]
    fn finalize_is_deterministic_for_any_payload(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut pipeline = MemoryDevice::new() | Sha256Filter::new();
        if !data.is_empty() {
            pipeline.write(&data).unwrap();
        }

        let first = pipeline.filter_mut().finalize();
        let second = pipeline.filter_mut().finalize();
        prop_assert_eq!(first, second);
    }
}
