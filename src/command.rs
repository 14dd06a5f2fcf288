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

use crate::argument::{AnyArgument, Argument};
use std::fmt;

/// A command is a named, optionally described bundle of Arguments. The
/// Arguments are positional: the i'th Argument parses the i'th input token of
/// an invocation of this command.
pub struct Command {
    name: String,
    description: Option<String>,
    arguments: Vec<Box<dyn AnyArgument>>,
}

impl Command {
    /// Constructs a new Command. The name is used to identify the command, so
    /// it should be unique (although that isn't checked here). It is stored in
    /// lowercase.
    pub fn new(
        name: &str,
        description: Option<&str>,
        arguments: Vec<Box<dyn AnyArgument>>,
    ) -> Command {
        Command {
            name: name.to_lowercase(),
            description: description.map(|d| d.to_owned()),
            arguments: arguments,
        }
    }

    /// Constructs a new Command with no description and no arguments.
    pub fn named(name: &str) -> Command {
        Command::new(name, None, vec![])
    }

    /// Append an Argument, after any which were already added.
    pub fn with_argument<T: 'static>(mut self, argument: Argument<T>) -> Command {
        self.arguments.push(Box::new(argument));
        self
    }

    /// Returns this command's (lowercase) name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns this command's description, if it has one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_ref().map(|d| d.as_str())
    }

    /// Returns all of this command's Arguments, in positional order.
    pub fn arguments(&self) -> &[Box<dyn AnyArgument>] {
        &self.arguments
    }

    /// Returns the Argument at the given position, if there is one and its
    /// value type is T.
    pub fn argument<T: 'static>(&self, index: usize) -> Option<&Argument<T>> {
        self.arguments
            .get(index)
            .and_then(|a| a.as_any().downcast_ref::<Argument<T>>())
    }

    /// Returns the Argument at the given position mutably (e.g. so it can
    /// parse some input), if there is one and its value type is T.
    pub fn argument_mut<T: 'static>(&mut self, index: usize) -> Option<&mut Argument<T>> {
        self.arguments
            .get_mut(index)
            .and_then(|a| a.as_any_mut().downcast_mut::<Argument<T>>())
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Command) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field(
                "arguments_required",
                &self
                    .arguments
                    .iter()
                    .map(|a| a.is_required())
                    .collect::<Vec<bool>>(),
            )
            .finish()
    }
}
