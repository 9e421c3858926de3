use stream_core::category::{Category, Device};
use stream_core::prelude::*;

#[test]
fn category_has_no_seek_or_size() {
    let category = StdioDevice::CATEGORY;
    assert!(category.contains(Category::INPUT));
    assert!(category.contains(Category::OUTPUT));
    assert!(category.contains(Category::HAS_EOF));
    assert!(category.contains(Category::HAS_STATUS));
    assert!(category.contains(Category::FLUSHABLE));
    assert!(!category.contains(Category::INPUT_SEEKABLE));
    assert!(!category.contains(Category::OUTPUT_SEEKABLE));
    assert!(!category.contains(Category::HAS_SIZE));
}

#[test]
fn color_sequences_are_ansi_escapes() {
    assert_eq!(Color::Black.sequence(), "\x1b[30m");
    assert_eq!(Color::Red.sequence(), "\x1b[31m");
    assert_eq!(Color::Green.sequence(), "\x1b[32m");
    assert_eq!(Color::White.sequence(), "\x1b[37m");
}

#[test]
fn fresh_device_is_good_and_not_at_eof() {
    let mut device = StdioDevice::new();
    assert!(device.good());
    assert!(!device.fail());
    assert!(!device.eof());
}
