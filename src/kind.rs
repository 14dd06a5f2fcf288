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

use crate::coerce::coerce_value;
use crate::error::*;
use lazy_static::lazy_static;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The signature shared by all of the built-in coercions, once their results
/// are wrapped up as dynamically typed Values.
pub type ValueCoercionFn = fn(&str) -> Result<Option<Value>>;

/// Kind identifies one of the primitive types which have a built-in coercion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// "t", "true", "f" or "false", ignoring case and surrounding whitespace.
    Boolean,
    /// The first character of the input.
    Character,
    /// The input, unchanged.
    String,
    /// An 8-bit signed integer.
    Int8,
    /// A 16-bit signed integer.
    Int16,
    /// A 32-bit signed integer.
    Int32,
    /// A 64-bit signed integer.
    Int64,
    /// A 32-bit float.
    Float32,
    /// A 64-bit float.
    Float64,
}

impl Kind {
    /// Every supported Kind, in a stable order.
    pub const ALL: [Kind; 9] = [
        Kind::Boolean,
        Kind::Character,
        Kind::String,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Float32,
        Kind::Float64,
    ];

    /// Returns the canonical (lowercase) name of this Kind. This is also the
    /// name FromStr and serde use.
    pub fn name(&self) -> &'static str {
        match *self {
            Kind::Boolean => "boolean",
            Kind::Character => "character",
            Kind::String => "string",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
        }
    }

    /// Returns the built-in coercion function for this Kind.
    pub fn coercion(&self) -> ValueCoercionFn {
        match *self {
            Kind::Boolean => coerce_value::<bool>,
            Kind::Character => coerce_value::<char>,
            Kind::String => coerce_value::<String>,
            Kind::Int8 => coerce_value::<i8>,
            Kind::Int16 => coerce_value::<i16>,
            Kind::Int32 => coerce_value::<i32>,
            Kind::Int64 => coerce_value::<i64>,
            Kind::Float32 => coerce_value::<f32>,
            Kind::Float64 => coerce_value::<f64>,
        }
    }

    /// A convenience which coerces the given input with this Kind's built-in
    /// coercion.
    pub fn coerce(&self, input: &str) -> Result<Option<Value>> {
        (self.coercion())(input)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    /// Look up a Kind by tag. Besides each Kind's canonical name, the matching
    /// Rust type name (e.g. "i32") and a handful of common aliases (e.g.
    /// "integer", "double") are accepted. Tags are trimmed and compared
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Kind> {
        lazy_static! {
            static ref STRING_MAPPING: HashMap<&'static str, Kind> = {
                let mut m = HashMap::new();
                for kind in Kind::ALL.iter() {
                    m.insert(kind.name(), *kind);
                }
                m.insert("bool", Kind::Boolean);
                m.insert("char", Kind::Character);
                m.insert("str", Kind::String);
                m.insert("i8", Kind::Int8);
                m.insert("byte", Kind::Int8);
                m.insert("i16", Kind::Int16);
                m.insert("short", Kind::Int16);
                m.insert("i32", Kind::Int32);
                m.insert("int", Kind::Int32);
                m.insert("integer", Kind::Int32);
                m.insert("i64", Kind::Int64);
                m.insert("long", Kind::Int64);
                m.insert("f32", Kind::Float32);
                m.insert("float", Kind::Float32);
                m.insert("f64", Kind::Float64);
                m.insert("double", Kind::Float64);
                m
            };
        }

        let normalized = s.trim().to_lowercase();
        match STRING_MAPPING.get(normalized.as_str()) {
            None => Err(Error::UnsupportedKind {
                tag: s.to_owned(),
                valid: Kind::ALL
                    .iter()
                    .map(|k| k.name())
                    .collect::<Vec<&str>>()
                    .join(", "),
            }),
            Some(k) => Ok(*k),
        }
    }
}

/// A Value is the result of one of the built-in coercions, for callers which
/// pick a Kind at runtime instead of at compile time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Value {
    /// A coerced boolean.
    Boolean(bool),
    /// A single coerced character.
    Character(char),
    /// An input string, unchanged.
    String(String),
    /// A coerced 8-bit integer.
    Int8(i8),
    /// A coerced 16-bit integer.
    Int16(i16),
    /// A coerced 32-bit integer.
    Int32(i32),
    /// A coerced 64-bit integer.
    Int64(i64),
    /// A coerced 32-bit float.
    Float32(f32),
    /// A coerced 64-bit float.
    Float64(f64),
}

impl Value {
    /// Returns the Kind of coercion which would produce this Value.
    pub fn kind(&self) -> Kind {
        match *self {
            Value::Boolean(_) => Kind::Boolean,
            Value::Character(_) => Kind::Character,
            Value::String(_) => Kind::String,
            Value::Int8(_) => Kind::Int8,
            Value::Int16(_) => Kind::Int16,
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::Float32(_) => Kind::Float32,
            Value::Float64(_) => Kind::Float64,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Character(v) => write!(f, "{}", v),
            Value::String(ref v) => f.write_str(v),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
        }
    }
}
