//! Value types shared by the makernote crates
//!
//! These types carry no vendor knowledge. They describe tag-ids and the raw
//! values a byte decoder produces for them.

#[cfg(feature = "chrono")]
pub mod datetime;
pub mod math;
pub mod rational;
pub mod tag;
pub mod value;

pub use rational::Rational;
pub use tag::Tag;
pub use value::{Value, ValueKind};
