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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! solo is a small crate for defining commands whose inputs are typed
//! arguments. Each argument coerces a raw input string into a value, either
//! with one of the built-in coercions for primitive types or with a custom
//! function, and remembers the most recently parsed value.

/// argument defines Argument, the typed slot which coerces raw input strings.
pub mod argument;
/// coerce contains the built-in coercions for primitive types.
pub mod coerce;
/// command defines Command, a named bundle of positional Arguments.
pub mod command;
/// error defines error types specific to solo.
pub mod error;
/// kind enumerates the primitive types with built-in coercions.
pub mod kind;

#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use self::argument::{AnyArgument, Argument, ArgumentBuilder, Coercion};
pub use self::coerce::Primitive;
pub use self::command::Command;
pub use self::error::{Error, Result};
pub use self::kind::{Kind, Value};
