#![allow(dead_code)]

pub use makernote::descriptor::{BitLabel, Descriptor, DescriptorTable};
pub use makernote::*;

pub const THUMBNAIL: Tag = Tag(0x0001);
pub const PIM: Tag = Tag(0x0e00);

pub static THUMBNAIL_SCHEMA: TagSchema = TagSchema::new(
    "Test Makernote",
    &[
        (THUMBNAIL, "Proprietary Thumbnail Format Data"),
        (PIM, "Print Image Matching (PIM) Info"),
    ],
);

pub static OTHER_SCHEMA: TagSchema =
    TagSchema::new("Other Makernote", &[(THUMBNAIL, "Makernote Version")]);

pub const IMAGE_TYPE: Tag = Tag(0x000a);
pub const FLAGS: Tag = Tag(0x000b);
pub const VERSION: Tag = Tag(0x000c);
pub const NAME: Tag = Tag(0x000d);
pub const ORIENTATION: Tag = Tag(0x000e);
pub const RATIO: Tag = Tag(0x000f);
pub const DATA: Tag = Tag(0x0010);
pub const FRACTION: Tag = Tag(0x0011);

pub static HELPER_SCHEMA: TagSchema = TagSchema::new(
    "Helper Makernote",
    &[
        (IMAGE_TYPE, "Image Type"),
        (FLAGS, "Flags"),
        (VERSION, "Version"),
        (NAME, "Name"),
        (ORIENTATION, "Orientation"),
        (RATIO, "Ratio"),
        (DATA, "Data"),
        (FRACTION, "Fraction"),
    ],
);

pub static HELPER_DESCRIPTOR: DescriptorTable = DescriptorTable::new(&[
    (IMAGE_TYPE, image_type),
    (FLAGS, flags),
    (VERSION, version),
    (NAME, name),
    (ORIENTATION, orientation),
    (RATIO, ratio),
    (DATA, data),
    (FRACTION, fraction),
]);

fn image_type(descriptor: &Descriptor<'_>, tag: Tag) -> Option<String> {
    descriptor.indexed_description(tag, 0, &["HDR Image", "Original Image"])
}

fn flags(descriptor: &Descriptor<'_>, tag: Tag) -> Option<String> {
    descriptor.bit_flag_description(
        tag,
        &[
            BitLabel::Either("Flash off", "Flash on"),
            BitLabel::Skip,
            BitLabel::Set("Red eye"),
        ],
    )
}

fn version(descriptor: &Descriptor<'_>, tag: Tag) -> Option<String> {
    descriptor.version_bytes_description(tag, 2)
}

fn name(descriptor: &Descriptor<'_>, tag: Tag) -> Option<String> {
    descriptor.seven_bit_string_description(tag)
}

fn orientation(descriptor: &Descriptor<'_>, tag: Tag) -> Option<String> {
    descriptor.orientation_description(tag)
}

fn ratio(descriptor: &Descriptor<'_>, tag: Tag) -> Option<String> {
    descriptor.decimal_rational_description(tag, 2)
}

fn data(descriptor: &Descriptor<'_>, tag: Tag) -> Option<String> {
    descriptor.byte_length_description(tag)
}

fn fraction(descriptor: &Descriptor<'_>, tag: Tag) -> Option<String> {
    descriptor.simple_rational_description(tag)
}

pub fn helper_directory() -> Directory {
    let mut directory = Directory::new(&HELPER_SCHEMA);
    directory.set_descriptor(&HELPER_DESCRIPTOR);
    directory
}
