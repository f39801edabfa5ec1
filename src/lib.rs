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

mod interfaces;
mod mmphonenumberutil;
mod bounded_cache;
pub(crate) mod string_util;

/// Boilerplate impls for the input trait live here, so the intent
/// reads as one line at the use site.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::PhoneNumberText;
pub use mmphonenumberutil::{
    MM_PHONE_NUMBER_UTIL,
    enums::{MmPhoneNumberFormat, NetworkType, Operator},
    errors::InvalidPhoneNumberError,
    mm_phone_number::MmPhoneNumber,
    mmphonenumberutil::MmPhoneNumberUtil,
};

/// Returns true if `phone_number` is a Myanmar mobile number.
///
/// Never fails: empty, missing or non-numeric input is simply not valid.
pub fn is_valid_phone_number<'a>(phone_number: impl PhoneNumberText<'a>) -> bool {
    MM_PHONE_NUMBER_UTIL.is_valid(phone_number)
}

/// Strips separators and collapses redundant country-code prefixes.
pub fn sanitize_phone_number<'a>(phone_number: impl PhoneNumberText<'a>) -> String {
    MM_PHONE_NUMBER_UTIL.sanitize(phone_number)
}

/// Returns the operator owning the number's prefix, or [`Operator::Unknown`]
/// for invalid input.
pub fn operator_of<'a>(phone_number: impl PhoneNumberText<'a>) -> Operator {
    MM_PHONE_NUMBER_UTIL.get_operator(phone_number)
}

/// Returns the radio network generation of the number, or
/// [`NetworkType::Unknown`] for invalid input.
pub fn network_type_of<'a>(phone_number: impl PhoneNumberText<'a>) -> NetworkType {
    MM_PHONE_NUMBER_UTIL.get_network_type(phone_number)
}

/// Rewrites the number into its canonical `959...` form.
///
/// Results are memoized by the shared [`MM_PHONE_NUMBER_UTIL`] instance.
pub fn normalize_phone_number<'a>(
    phone_number: impl PhoneNumberText<'a>,
) -> Result<u64, InvalidPhoneNumberError> {
    MM_PHONE_NUMBER_UTIL.normalize(phone_number)
}

pub fn parse_phone_number<'a>(
    phone_number: impl PhoneNumberText<'a>,
) -> Result<MmPhoneNumber, InvalidPhoneNumberError> {
    MM_PHONE_NUMBER_UTIL.parse(phone_number)
}

pub fn format_phone_number<'a>(
    phone_number: impl PhoneNumberText<'a>,
    number_format: MmPhoneNumberFormat,
) -> Result<String, InvalidPhoneNumberError> {
    MM_PHONE_NUMBER_UTIL.format(phone_number, number_format)
}
