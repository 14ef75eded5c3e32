mod utils;
use makernote::error::Error;
use utils::*;

#[test]
fn typed_lookups() {
    let mut directory = Directory::new(&THUMBNAIL_SCHEMA);
    directory.set(THUMBNAIL, Rational::new(9, 2));
    directory.set(PIM, "17");

    assert_eq!(directory.lookup_i64(THUMBNAIL).unwrap(), Some(4));
    assert_eq!(directory.lookup_f64(THUMBNAIL).unwrap(), Some(4.5));
    assert_eq!(
        directory.lookup_rational(THUMBNAIL).unwrap(),
        Some(Rational::new(9, 2))
    );

    assert_eq!(directory.lookup_i64(PIM).unwrap(), Some(17));
    assert_eq!(directory.lookup_str(PIM).unwrap(), Some("17"));
    assert_eq!(directory.lookup_bytes(PIM).unwrap(), Some(b"17".to_vec()));
}

#[test]
fn absent_is_not_an_error() {
    let directory = Directory::new(&THUMBNAIL_SCHEMA);

    assert_eq!(directory.lookup_i64(THUMBNAIL).unwrap(), None);
    assert_eq!(directory.lookup_str(THUMBNAIL).unwrap(), None);
    assert_eq!(directory.integer(THUMBNAIL), None);
    assert_eq!(directory.string(THUMBNAIL), None);
}

#[test]
fn wrong_type() {
    let mut directory = Directory::new(&THUMBNAIL_SCHEMA);
    directory.set(THUMBNAIL, 2.5);

    let err = directory.lookup_i64(THUMBNAIL).unwrap_err();
    assert!(matches!(
        err,
        Error::WrongType {
            tag: THUMBNAIL,
            expected: "integer",
            actual: ValueKind::Float,
        }
    ));

    assert!(directory.lookup_str(THUMBNAIL).is_err());
    assert!(directory.lookup_rationals(THUMBNAIL).is_err());

    // Short accessors swallow the error
    assert_eq!(directory.integer(THUMBNAIL), None);
    assert_eq!(directory.float(THUMBNAIL), Some(2.5));
    assert_eq!(directory.string(THUMBNAIL).as_deref(), Some("2.5"));
}

#[test]
fn arrays() {
    let mut directory = Directory::new(&THUMBNAIL_SCHEMA);
    directory.set(THUMBNAIL, vec![1_u16, 0x102]);
    directory.set(
        PIM,
        vec![Rational::new(1, 2), Rational::new(3, 1)],
    );

    assert_eq!(directory.int_array(THUMBNAIL), Some(vec![1, 0x102]));
    assert_eq!(directory.bytes(THUMBNAIL), Some(vec![1, 2]));
    assert_eq!(directory.integer(THUMBNAIL), None);

    assert_eq!(
        directory.lookup_rationals(PIM).unwrap(),
        Some(vec![Rational::new(1, 2), Rational::new(3, 1)])
    );
    assert_eq!(directory.int_array(PIM), Some(vec![0, 3]));
    assert_eq!(directory.string(PIM).as_deref(), Some("1/2 3/1"));
}

#[test]
fn division_by_zero() {
    let mut directory = Directory::new(&THUMBNAIL_SCHEMA);
    directory.set(THUMBNAIL, Rational::new(1, 0));

    assert!(directory.lookup_i64(THUMBNAIL).is_err());
    assert!(directory.lookup_f64(THUMBNAIL).is_err());
    assert_eq!(
        directory.rational(THUMBNAIL),
        Some(Rational::new(1, 0))
    );
}
