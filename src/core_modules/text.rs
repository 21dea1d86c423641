// THEORY:
// Small string helpers: scanning a substring up to a stop character, and
// mapping enum variants to and from their literal names.
//
// Enum names are not looked up at runtime. `named_enum!` expands an ordinary
// enum declaration and, next to it, a `NamedEnum` impl holding a static table
// of `(name, variant)` pairs built with `stringify!`. Parsing is a linear scan
// of that table, which is as fast as it gets for the handful of variants these
// enums carry.

use crate::error::{Error, Result};

/// An enum whose variants carry their literal names.
///
/// Implement it with [`named_enum!`](crate::named_enum) rather than by hand.
pub trait NamedEnum: Copy + 'static {
    /// Every variant with its name, in declaration order.
    const VARIANTS: &'static [(&'static str, Self)];

    /// The literal name of this variant.
    fn name(&self) -> &'static str;
}

/// Declares an enum and implements [`NamedEnum`] for it.
///
/// The enum must derive `Clone` and `Copy`. Explicit discriminants are allowed.
///
/// ```
/// use tintwork::{named_enum, parse_enum, enum_to_name};
///
/// named_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Channel { Red, Green, Blue }
/// }
///
/// assert_eq!(parse_enum::<Channel>("Green"), Ok(Channel::Green));
/// assert_eq!(enum_to_name(Channel::Blue), "Blue");
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $discriminant:expr)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(= $discriminant)?
            ),+
        }

        impl $crate::NamedEnum for $name {
            const VARIANTS: &'static [(&'static str, Self)] = &[
                $((stringify!($variant), $name::$variant)),+
            ];

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }
    };
}

/// The characters of `s` from character index `start` up to, but excluding,
/// the first character for which `stop` returns `true`.
///
/// # Errors
///
/// [`Error::IndexOutOfRange`] if no character from `start` onwards satisfies
/// `stop`, including when `start` is at or past the end of the string.
pub fn substring_until<P>(s: &str, start: usize, mut stop: P) -> Result<&str>
where
    P: FnMut(char) -> bool,
{
    let mut begin = None;
    for (offset, c) in s.char_indices().skip(start) {
        let begin = *begin.get_or_insert(offset);
        if stop(c) {
            return Ok(&s[begin..offset]);
        }
    }
    let len = s.chars().count();
    Err(Error::IndexOutOfRange {
        index: start.max(len),
        len,
    })
}

fn unknown_variant<E>(name: &str) -> Error {
    Error::invalid_argument(
        "name",
        format!("`{name}` is not a variant of {}", std::any::type_name::<E>()),
    )
}

/// The variant of `E` whose name is exactly `name`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if no variant has that name.
pub fn parse_enum<E: NamedEnum>(name: &str) -> Result<E> {
    E::VARIANTS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, variant)| variant)
        .ok_or_else(|| unknown_variant::<E>(name))
}

/// Like [`parse_enum`], ignoring ASCII case.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if no variant matches.
pub fn parse_enum_ignore_case<E: NamedEnum>(name: &str) -> Result<E> {
    E::VARIANTS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, variant)| variant)
        .ok_or_else(|| unknown_variant::<E>(name))
}

pub fn enum_to_name<E: NamedEnum>(value: E) -> &'static str {
    value.name()
}
