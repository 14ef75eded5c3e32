#![doc = include_str!("../README.md")]

pub mod descriptor;
pub mod directory;
pub mod error;
pub mod indexed;
pub mod schema;
pub mod store;
pub mod vendor;

pub use descriptor::{Descriptor, DescriptorTable};
pub use directory::Directory;
pub use makernote_common::{Rational, Tag, Value, ValueKind};
pub use schema::TagSchema;
pub use store::TagValueStore;
pub use vendor::Vendor;
