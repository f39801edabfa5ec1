// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
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

use std::num::ParseIntError;

use thiserror::Error;

/// Returned when the input is not a Myanmar mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPhoneNumberError {
    #[error("No phone number given")]
    NoInput,
    #[error("Not a Myanmar mobile number: {0:?}")]
    NotMatchedMobilePattern(String),
    #[error("Failed to read {input:?} as an integer: {source}")]
    FailedToParseNumberAsInt {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

impl InvalidPhoneNumberError {
    /// The rejected input, if any was given.
    pub fn input(&self) -> Option<&str> {
        match self {
            InvalidPhoneNumberError::NoInput => None,
            InvalidPhoneNumberError::NotMatchedMobilePattern(input)
            | InvalidPhoneNumberError::FailedToParseNumberAsInt { input, .. } => Some(input),
        }
    }
}
