/// Declares the tags of one vendor schema
///
/// Creates a [`Tag`](crate::Tag) constant per entry and a
/// `SCHEMA` static holding the display names.
macro_rules! make_schema {
    ($name:literal, [$($(#[$($attrss:tt)*])*($tag:literal, $id:ident, $label:literal)),*$(,)?]) => {
        $(
            $(#[$($attrss)*])*
            pub const $id: $crate::Tag = $crate::Tag($tag);
        )*

        pub static SCHEMA: $crate::schema::TagSchema = $crate::schema::TagSchema::new(
            $name,
            &[
                $(
                    ($id, $label),
                )*
            ],
        );
    };
}

pub(crate) use make_schema;
