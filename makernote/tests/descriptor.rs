mod utils;
use makernote::descriptor::version_string;
use utils::*;

#[test]
fn absent_tag() {
    let directory = helper_directory();

    assert_eq!(directory.description(IMAGE_TYPE), None);
    assert_eq!(directory.description(Tag(0x1234)), None);
    assert_eq!(directory.descriptor().generic_description(IMAGE_TYPE), None);
}

#[test]
fn indexed_labels() {
    let mut directory = helper_directory();

    directory.set(IMAGE_TYPE, 0);
    assert_eq!(directory.description(IMAGE_TYPE).as_deref(), Some("HDR Image"));

    directory.set(IMAGE_TYPE, 1);
    assert_eq!(
        directory.description(IMAGE_TYPE).as_deref(),
        Some("Original Image")
    );
}

#[test]
fn indexed_fallback() {
    let mut directory = helper_directory();

    directory.set(IMAGE_TYPE, 2);
    assert_eq!(directory.description(IMAGE_TYPE).as_deref(), Some("2"));

    directory.set(IMAGE_TYPE, -1);
    assert_eq!(directory.description(IMAGE_TYPE).as_deref(), Some("-1"));

    directory.set(IMAGE_TYPE, "not a number");
    assert_eq!(
        directory.description(IMAGE_TYPE).as_deref(),
        Some("not a number")
    );
}

#[test]
fn idempotent() {
    let mut directory = helper_directory();
    directory.set(IMAGE_TYPE, 1);
    directory.set(DATA, vec![0_u8; 40]);

    let descriptor = directory.descriptor();
    for tag in [IMAGE_TYPE, DATA] {
        assert_eq!(descriptor.description(tag), descriptor.description(tag));
    }
}

#[test]
fn generic() {
    let mut directory = Directory::new(&THUMBNAIL_SCHEMA);

    directory.set(THUMBNAIL, vec![1_u8; 16]);
    assert_eq!(
        directory.description(THUMBNAIL).as_deref(),
        Some("1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1")
    );

    directory.set(THUMBNAIL, vec![1_u8; 17]);
    assert_eq!(directory.description(THUMBNAIL).as_deref(), Some("[17 values]"));

    directory.set(PIM, "  padded ");
    assert_eq!(directory.description(PIM).as_deref(), Some("  padded "));

    directory.set(PIM, Rational::new(10, 2));
    assert_eq!(directory.description(PIM).as_deref(), Some("5"));

    directory.set(PIM, 1.25);
    assert_eq!(directory.description(PIM).as_deref(), Some("1.25"));
}

#[test]
fn bit_flags() {
    let mut directory = helper_directory();

    directory.set(FLAGS, 0b101);
    assert_eq!(
        directory.description(FLAGS).as_deref(),
        Some("Flash on, Red eye")
    );

    directory.set(FLAGS, 0b010);
    assert_eq!(directory.description(FLAGS).as_deref(), Some("Flash off"));
}

#[test]
fn version() {
    let mut directory = helper_directory();

    directory.set(VERSION, *b"0210");
    assert_eq!(directory.description(VERSION).as_deref(), Some("2.10"));

    directory.set(VERSION, vec![0_u8, 1, 0, 0]);
    assert_eq!(directory.description(VERSION).as_deref(), Some("1.00"));

    assert_eq!(version_string(&[], 2), "");
    assert_eq!(version_string(&[-1, 1, 0, 0], 2), "/1.00");
}

#[test]
fn seven_bit_string() {
    let mut directory = helper_directory();

    directory.set(NAME, b"Camera\0garbage".as_slice());
    assert_eq!(directory.description(NAME).as_deref(), Some("Camera"));

    directory.set(NAME, vec![b'A', b'B', 0xc3, b'C']);
    assert_eq!(directory.description(NAME).as_deref(), Some("AB"));
}

#[test]
fn orientation() {
    let mut directory = helper_directory();

    directory.set(ORIENTATION, 1);
    assert_eq!(
        directory.description(ORIENTATION).as_deref(),
        Some("Top, left side (Horizontal / normal)")
    );

    directory.set(ORIENTATION, 8);
    assert_eq!(
        directory.description(ORIENTATION).as_deref(),
        Some("Left side, bottom (Rotate 270 CW)")
    );

    directory.set(ORIENTATION, 0);
    assert_eq!(directory.description(ORIENTATION).as_deref(), Some("0"));
}

#[test]
fn decimal_rational() {
    let mut directory = helper_directory();

    directory.set(RATIO, Rational::new(3, 2));
    assert_eq!(directory.description(RATIO).as_deref(), Some("1.50"));

    directory.set(RATIO, Rational::new(3, 0));
    assert_eq!(directory.description(RATIO).as_deref(), Some("3/0"));
}

#[test]
fn simple_rational() {
    let mut directory = helper_directory();

    directory.set(FRACTION, Rational::new(2, 6));
    assert_eq!(directory.description(FRACTION).as_deref(), Some("1/3"));

    directory.set(FRACTION, Rational::new(10, 4));
    assert_eq!(directory.description(FRACTION).as_deref(), Some("2.5"));

    directory.set(FRACTION, "x");
    assert_eq!(directory.description(FRACTION).as_deref(), Some("x"));
}

#[test]
fn byte_length() {
    let mut directory = helper_directory();

    directory.set(DATA, vec![7_u8]);
    assert_eq!(directory.description(DATA).as_deref(), Some("(1 byte)"));

    directory.set(DATA, vec![0_u8; 4096]);
    assert_eq!(directory.description(DATA).as_deref(), Some("(4096 bytes)"));
}

#[test]
fn descriptor_table() {
    assert!(HELPER_DESCRIPTOR.handler(IMAGE_TYPE).is_some());
    assert!(HELPER_DESCRIPTOR.handler(Tag(0x1234)).is_none());
    assert_eq!(HELPER_DESCRIPTOR.tags().count(), 8);

    let directory = helper_directory();
    assert_eq!(directory.descriptor().directory().name(), "Helper Makernote");
}
