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

use crate::coerce::Primitive;
use crate::error::*;
use crate::kind::{Kind, Value};
use log::{debug, trace};
use std::any::Any;
use std::fmt;

/// A Coercion turns a raw input string into a typed value. Ordinary bad input
/// should be reported as Ok(None); an Err is propagated to whoever called
/// `Argument::parse`, untouched.
pub type Coercion<T> = Box<dyn Fn(&str) -> Result<Option<T>>>;

/// An Argument is a positional slot in a Command, whose value is produced by
/// coercing a raw input string. The Argument owns its coercion, and remembers
/// the result of the most recent call to `parse`.
pub struct Argument<T> {
    coercion: Coercion<T>,
    required: bool,
    last_value: Option<T>,
}

impl<T> Argument<T> {
    fn new(coercion: Coercion<T>, required: bool) -> Self {
        Argument {
            coercion: coercion,
            required: required,
            last_value: None,
        }
    }

    /// Constructs a new required Argument which uses the given custom
    /// coercion.
    pub fn custom<F>(coercion: F) -> Self
    where
        F: Fn(&str) -> Result<Option<T>> + 'static,
    {
        Argument::new(Box::new(coercion), true)
    }

    /// Coerce the given input using the current coercion. The result is stored
    /// as this Argument's last value (replacing whatever was there before),
    /// and a reference to it is returned.
    ///
    /// If the coercion returns an error, the last value is cleared (rather
    /// than keeping whatever the previous parse stored) and the error is
    /// returned as-is.
    pub fn parse(&mut self, input: &str) -> Result<Option<&T>> {
        trace!("Coercing argument input '{}'", input);
        match (self.coercion)(input) {
            Ok(value) => {
                if value.is_none() {
                    debug!("Argument input '{}' did not produce a value", input);
                }
                self.last_value = value;
                Ok(self.last_value.as_ref())
            }
            Err(e) => {
                debug!("Coercing argument input '{}' failed: {}", input, e);
                self.last_value = None;
                Err(e)
            }
        }
    }

    /// Returns the coercion this Argument currently uses.
    pub fn coercion(&self) -> &dyn Fn(&str) -> Result<Option<T>> {
        self.coercion.as_ref()
    }

    /// Replace this Argument's coercion. This only affects future calls to
    /// `parse`; the last value is left alone.
    pub fn set_coercion<F>(&mut self, coercion: F)
    where
        F: Fn(&str) -> Result<Option<T>> + 'static,
    {
        trace!("Replacing argument coercion");
        self.coercion = Box::new(coercion);
    }

    /// Returns whether or not this Argument was declared as required. Note
    /// that this is not enforced by the Argument itself.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the result of the most recent call to `parse`, or None if the
    /// most recent parse produced no value (or there hasn't been one yet).
    pub fn last_value(&self) -> Option<&T> {
        self.last_value.as_ref()
    }

    /// Returns true if the most recent call to `parse` produced a value.
    pub fn is_present(&self) -> bool {
        self.last_value.is_some()
    }
}

impl<T: Primitive> Argument<T> {
    /// Constructs a new required Argument which uses the built-in coercion
    /// for T's Kind.
    pub fn primitive() -> Self {
        Argument::new(Box::new(T::coerce), true)
    }
}

impl Argument<Value> {
    /// Constructs a new required Argument which uses the built-in coercion for
    /// the given Kind, producing dynamically typed Values.
    pub fn of_kind(kind: Kind) -> Self {
        Argument::new(Box::new(kind.coercion()), true)
    }

    /// Like `of_kind`, but the Kind is looked up from the given tag. If the
    /// tag doesn't identify a supported Kind, an error is returned instead.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(Argument::of_kind(tag.parse()?))
    }
}

impl<T: fmt::Debug> fmt::Debug for Argument<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Argument")
            .field("required", &self.required)
            .field("last_value", &self.last_value)
            .finish()
    }
}

/// ArgumentBuilder provides a builder-style interface to construct an
/// Argument with non-default modifiers. Each modifier is independent of the
/// others, and of how the coercion was chosen.
pub struct ArgumentBuilder<T> {
    coercion: Coercion<T>,
    required: Option<bool>,
    initial_input: Option<String>,
}

impl<T> ArgumentBuilder<T> {
    /// Construct a new ArgumentBuilder which uses the given custom coercion.
    pub fn custom<F>(coercion: F) -> Self
    where
        F: Fn(&str) -> Result<Option<T>> + 'static,
    {
        ArgumentBuilder::new(Box::new(coercion))
    }

    fn new(coercion: Coercion<T>) -> Self {
        ArgumentBuilder {
            coercion: coercion,
            required: None,
            initial_input: None,
        }
    }

    /// Set whether or not the Argument is required. By default, it is.
    pub fn set_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set an input which will be parsed as part of `build`, so the Argument
    /// starts out with a last value.
    pub fn set_initial_input(mut self, initial_input: &str) -> Self {
        self.initial_input = Some(initial_input.to_owned());
        self
    }

    /// Build an Argument from this builder's current state. This might return
    /// an error if an initial input was set, and the coercion returned an
    /// error for it.
    pub fn build(self) -> Result<Argument<T>> {
        let mut argument = Argument::new(self.coercion, self.required.unwrap_or(true));
        if let Some(initial_input) = self.initial_input {
            argument.parse(&initial_input)?;
        }
        Ok(argument)
    }
}

impl<T: Primitive> ArgumentBuilder<T> {
    /// Construct a new ArgumentBuilder which uses the built-in coercion for
    /// T's Kind.
    pub fn primitive() -> Self {
        ArgumentBuilder::new(Box::new(T::coerce))
    }
}

impl ArgumentBuilder<Value> {
    /// Construct a new ArgumentBuilder which uses the built-in coercion for
    /// the given Kind.
    pub fn of_kind(kind: Kind) -> Self {
        ArgumentBuilder::new(Box::new(kind.coercion()))
    }

    /// Like `of_kind`, but the Kind is looked up from the given tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(ArgumentBuilder::of_kind(tag.parse()?))
    }
}

/// AnyArgument is implemented for every Argument, regardless of its value
/// type, so Arguments of different types can be stored together. Use
/// `as_any` / `as_any_mut` to downcast back to a concrete `Argument<T>`.
pub trait AnyArgument {
    /// Returns whether or not this Argument was declared as required.
    fn is_required(&self) -> bool;
    /// Returns true if the most recent parse produced a value.
    fn is_present(&self) -> bool;
    /// Returns this Argument as Any, for downcasting.
    fn as_any(&self) -> &dyn Any;
    /// Returns this Argument as mutable Any, for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> AnyArgument for Argument<T> {
    fn is_required(&self) -> bool {
        Argument::is_required(self)
    }

    fn is_present(&self) -> bool {
        Argument::is_present(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
