// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use crate::kind::{Kind, Value};
use std::str::FromStr;

/// Return the boolean interpretation of a string, or None if the string isn't
/// recognized as a valid boolean value. Both the short ("t" / "f") and long
/// ("true" / "false") spellings are accepted, ignoring case and surrounding
/// whitespace.
pub fn coerce_bool(input: &str) -> Result<Option<bool>> {
    Ok(match input.trim().to_lowercase().as_ref() {
        "t" | "true" => Some(true),
        "f" | "false" => Some(false),
        _ => None,
    })
}

/// Return the first character of the input. Unlike every other built-in
/// coercion, an empty input is reported as an error instead of None.
pub fn coerce_char(input: &str) -> Result<Option<char>> {
    match input.chars().next() {
        None => Err(Error::OutOfBounds {
            index: 0,
            len: input.len(),
        }),
        Some(c) => Ok(Some(c)),
    }
}

/// The identity coercion: the input is returned unchanged.
pub fn coerce_string(input: &str) -> Result<Option<String>> {
    Ok(Some(input.to_owned()))
}

/// Parse a number using its exact FromStr implementation. Surrounding
/// whitespace is not trimmed, so " 1" is not a valid integer. Any parse
/// failure (including overflow) yields None.
pub fn coerce_number<N: FromStr>(input: &str) -> Result<Option<N>> {
    Ok(input.parse::<N>().ok())
}

/// Parse a floating point literal. Unlike integers, surrounding whitespace
/// (anything at or below ' ') is ignored, and a single trailing type suffix
/// ("f", "F", "d" or "D") is accepted. The only non-numeric literals are the
/// exact spellings "NaN" and "Infinity", optionally signed; "inf" or "nan"
/// yield None.
pub fn coerce_float<N: FromStr>(input: &str) -> Result<Option<N>> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);
    if unsigned == "NaN" {
        return Ok(unsigned.parse::<N>().ok());
    }
    if unsigned == "Infinity" {
        return Ok(trimmed.parse::<N>().ok());
    }

    let literal = trimmed
        .strip_suffix(|c: char| "fFdD".contains(c))
        .unwrap_or(trimmed);
    if !literal
        .chars()
        .all(|c| c.is_ascii_digit() || ".eE+-".contains(c))
    {
        return Ok(None);
    }
    Ok(literal.parse::<N>().ok())
}

/// Primitive is implemented for each of the types which have a built-in
/// coercion. It ties each Rust type to its Kind, and allows converting back
/// and forth between the concrete type and the dynamically typed Value.
pub trait Primitive: Sized + 'static {
    /// The Kind this type corresponds to.
    const KIND: Kind;

    /// Coerce a raw input string into a value of this type, using the
    /// built-in coercion for this type's Kind.
    fn coerce(input: &str) -> Result<Option<Self>>;

    /// Wrap a value of this type in the matching Value variant.
    fn into_value(self) -> Value;

    /// Unwrap a Value into this type. Returns None if the Value is a variant
    /// of some other Kind.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($t:ty, $kind:ident, $coerce:expr) => {
        impl Primitive for $t {
            const KIND: Kind = Kind::$kind;

            fn coerce(input: &str) -> Result<Option<Self>> {
                $coerce(input)
            }

            fn into_value(self) -> Value {
                Value::$kind(self)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$kind(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

impl_primitive!(bool, Boolean, coerce_bool);
impl_primitive!(char, Character, coerce_char);
impl_primitive!(String, String, coerce_string);
impl_primitive!(i8, Int8, coerce_number::<i8>);
impl_primitive!(i16, Int16, coerce_number::<i16>);
impl_primitive!(i32, Int32, coerce_number::<i32>);
impl_primitive!(i64, Int64, coerce_number::<i64>);
impl_primitive!(f32, Float32, coerce_float::<f32>);
impl_primitive!(f64, Float64, coerce_float::<f64>);

/// Coerce the input as the given Primitive type, and wrap the result up as a
/// dynamically typed Value.
pub(crate) fn coerce_value<T: Primitive>(input: &str) -> Result<Option<Value>> {
    Ok(T::coerce(input)?.map(Primitive::into_value))
}
