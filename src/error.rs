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

use thiserror::Error;

/// Error represents the various errors which can come up while constructing
/// arguments, or while coercing raw input strings into typed values.
#[derive(Debug, Error)]
pub enum Error {
    /// An arbitrary error produced by a caller-supplied coercion function.
    #[error("{0}")]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
    /// Errors akin to EINVAL - essentially, an input passed into a coercion
    /// function was invalid in some way which the coercion chose to report
    /// rather than swallow.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An input was indexed past its end. The built-in character coercion
    /// produces this for empty inputs.
    #[error("Index {index} out of bounds for input of length {len}")]
    OutOfBounds {
        /// The index which was requested.
        index: usize,
        /// The length of the input which was indexed.
        len: usize,
    },
    /// An error encountered when trying to parse a float from a string.
    #[error("{0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
    /// An error encountered when trying to parse an integer from a string.
    #[error("{0}")]
    ParseInt(#[from] std::num::ParseIntError),
    /// A kind tag was given which does not name any of the supported
    /// primitive kinds.
    #[error("Unsupported kind '{tag}'; expected one of: {valid}")]
    UnsupportedKind {
        /// The tag exactly as it was given.
        tag: String,
        /// A human-readable list of the valid kinds.
        valid: String,
    },
}

/// A Result type which uses solo's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
