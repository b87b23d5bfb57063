//! # enum-lookup-macro
//!
//! The `lookup_enum!` macro. It parses an enum whose constants pass
//! constructor arguments, hands it to the generator in `enum-lookup-core`, and
//! emits the enum together with its field accessors and `lookup` method.

use proc_macro::TokenStream;

mod diagnostics;
mod expand;
mod host;
mod parse;
mod render;

/// Declares an enum with constructor-supplied data and a reverse `lookup`.
///
/// Each field is filled positionally from the constants' constructor arguments
/// and is readable through an accessor of the same name. The `#[lookup(...)]`
/// annotation selects the key:
///
/// - `field`: the field whose type becomes the parameter type (required).
/// - `constructor_argument_ordinal`: which constructor argument each constant is
///   matched on (required unless `ENUM_LOOKUP_REQUIRE_ORDINAL=false`).
/// - `default_value`: the constant returned when nothing matches. Without it
///   `lookup` returns `Option<Self>`.
///
/// # Example
///
/// ```rust,ignore
/// use enum_lookup::lookup_enum;
///
/// lookup_enum! {
///     #[lookup(field = "value", constructor_argument_ordinal = 0, default_value = "Test2")]
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum LookupTest {
///         Test1(11),
///         Test2(22);
///
///         value: i32,
///     }
/// }
///
/// assert_eq!(LookupTest::lookup(11), LookupTest::Test1);
/// assert_eq!(LookupTest::lookup(77), LookupTest::Test2);
/// ```
#[proc_macro]
pub fn lookup_enum(input: TokenStream) -> TokenStream {
    expand::expand(input.into()).into()
}
