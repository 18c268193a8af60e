//! The visitor surface decodable structures implement.
//!
//! Instead of reflecting over a struct at runtime, envfig asks the struct to
//! describe itself: [`Bindable::fields`] hands the binder one [`Field`] per
//! settable slot, in declaration order. Each field carries its external name
//! (the document key it matches) and a [`Target`] holding a mutable reference
//! to the slot itself.
//!
//! Implementations are almost always generated with the [`bindable!`] macro:
//!
//! ```
//! struct DbConfig {
//!     url: String,
//!     pool_size: u64,
//! }
//!
//! envfig::bindable!(DbConfig {
//!     url => Str,
//!     pool_size => Uint,
//! });
//! ```
//!
//! A field can be renamed with `as`, the analogue of a `rename` attribute,
//! when the document key differs from the Rust field name:
//!
//! ```
//! struct AppConfig {
//!     base_url: String,
//! }
//!
//! envfig::bindable!(AppConfig {
//!     base_url as "baseurl" => Str,
//! });
//! ```
//!
//! Fields not listed in the macro invocation are never visited, so a struct
//! can carry state the decoder should not touch.

/// A structure the binder can populate from a document tree.
///
/// Usually implemented via [`bindable!`](crate::bindable) rather than by hand.
pub trait Bindable {
    /// Describe the settable fields, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// One settable slot of a [`Bindable`] structure.
pub struct Field<'a> {
    /// External name matched against document keys (lowercased by the binder).
    pub name: &'static str,
    pub target: Target<'a>,
}

/// A typed mutable reference to the slot a field decodes into.
///
/// The variant names are the `kind` identifiers accepted by [`bindable!`](crate::bindable).
pub enum Target<'a> {
    Str(&'a mut String),
    Int(&'a mut i64),
    Uint(&'a mut u64),
    Bool(&'a mut bool),
    StrList(&'a mut Vec<String>),
    IntList(&'a mut Vec<i64>),
    UintList(&'a mut Vec<u64>),
    BoolList(&'a mut Vec<bool>),
    /// A nested structure; the binder recurses into it with the extended path.
    Nested(&'a mut dyn Bindable),
}

/// Generate a [`Bindable`] impl from a field list.
///
/// Each entry is `field => Kind` or `field as "document_key" => Kind`, where
/// `Kind` is a [`Target`] variant name. Without `as`, the document key is the
/// Rust field name.
#[macro_export]
macro_rules! bindable {
    (
        $ty:ty {
            $( $field:ident $( as $name:literal )? => $kind:ident ),* $(,)?
        }
    ) => {
        impl $crate::Bindable for $ty {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field {
                            name: $crate::bindable!(@name $field $( $name )?),
                            target: $crate::Target::$kind(&mut self.$field),
                        },
                    )*
                ]
            }
        }
    };
    (@name $field:ident) => { ::std::stringify!($field) };
    (@name $field:ident $name:literal) => { $name };
}
