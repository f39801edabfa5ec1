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

use std::borrow::Cow;

use log::trace;

use super::{
    enums::{MmPhoneNumberFormat, NetworkType, Operator},
    errors::InvalidPhoneNumberError,
    helper_constants::{
        CANONICAL_PREFIX, COUNTRY_CODE, DEFAULT_CACHE_CAPACITY, DOUBLE_COUNTRY_CODE,
        NATIONAL_NUMBER_AFTER_MOBILE_PREFIX, ZERO_BEFORE_MOBILE_PREFIX,
    },
    helper_functions::get_mpt_network_type,
    mm_phone_number::MmPhoneNumber,
    phone_number_regexps::{
        MmPhoneNumberRegExps, MPT_GROUP, OOREDOO_GROUP, SUFFIX_GROUP, TELENOR_GROUP,
    },
};
use crate::{
    bounded_cache::BoundedCache,
    interfaces::PhoneNumberText,
    string_util::{normalize_digits, replace_first_cow, strip_separators},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, InvalidPhoneNumberError>;

pub struct MmPhoneNumberUtil {
    /// Helper struct holding the compiled numbering plan patterns.
    reg_exps: MmPhoneNumberRegExps,

    /// Memoized results of `normalize`, keyed by the raw input text.
    normalization_cache: BoundedCache<String, Result<u64>>,
}

impl MmPhoneNumberUtil {
    pub fn new() -> Self {
        Self::with_cache_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a util memoizing up to `capacity` distinct `normalize` inputs.
    /// A capacity of zero disables memoization.
    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            reg_exps: MmPhoneNumberRegExps::new(),
            normalization_cache: BoundedCache::with_capacity(capacity),
        }
    }

    /// Strips whitespace and separators, converts unicode digits to ASCII and
    /// collapses a duplicated country code or a stray zero after it.
    ///
    /// `+95 9595 12345678` becomes `+959512345678`, while `95 09 512345678`
    /// and `959 09 512345678` both become `959512345678`. Input that is not a phone number only has its
    /// separators removed, and `None` sanitizes to an empty string.
    pub fn sanitize<'a>(&self, phone_number: impl PhoneNumberText<'a>) -> String {
        match phone_number.into_phone_number_text() {
            Some(text) => self.sanitize_str(&text).into_owned(),
            None => String::new(),
        }
    }

    fn sanitize_str<'b>(&self, phone_number: &'b str) -> Cow<'b, str> {
        let mut sanitized = normalize_digits(strip_separators(phone_number));
        if !self.reg_exps.country_code_pattern.is_match(&sanitized) {
            return sanitized;
        }
        // Every collapse shortens the number, so this always terminates, and
        // repeating until stable keeps sanitizing idempotent.
        loop {
            sanitized = if self.has_double_country_code(&sanitized) {
                replace_first_cow(sanitized, DOUBLE_COUNTRY_CODE, COUNTRY_CODE)
            } else if self.reg_exps.zero_before_mobile_prefix_pattern.is_match(&sanitized) {
                replace_first_cow(sanitized, ZERO_BEFORE_MOBILE_PREFIX, CANONICAL_PREFIX)
            } else if self
                .reg_exps
                .national_number_after_mobile_prefix_pattern
                .is_match(&sanitized)
            {
                replace_first_cow(sanitized, NATIONAL_NUMBER_AFTER_MOBILE_PREFIX, CANONICAL_PREFIX)
            } else {
                break;
            };
            trace!("Collapsed country code prefix of {:?} into {:?}", phone_number, sanitized);
        }
        sanitized
    }

    /// A number like `959591234567` reads both as a duplicated country code
    /// and as the valid `959` + `591234567`. Valid readings win.
    fn has_double_country_code(&self, phone_number: &str) -> bool {
        self.reg_exps.double_country_code_pattern.is_match(phone_number)
            && !self.reg_exps.mobile_number_pattern.is_match(phone_number)
    }

    /// Returns true if the input, once sanitized, is a Myanmar mobile number.
    pub fn is_valid<'a>(&self, phone_number: impl PhoneNumberText<'a>) -> bool {
        match phone_number.into_phone_number_text() {
            Some(text) => self
                .reg_exps
                .mobile_number_pattern
                .is_match(&self.sanitize_str(&text)),
            None => false,
        }
    }

    /// Parses the input into its canonical number, operator and network type.
    pub fn parse<'a>(&self, phone_number: impl PhoneNumberText<'a>) -> Result<MmPhoneNumber> {
        let text = phone_number
            .into_phone_number_text()
            .ok_or(InvalidPhoneNumberError::NoInput)?;
        self.parse_str(&text)
    }

    fn parse_str(&self, phone_number: &str) -> Result<MmPhoneNumber> {
        let sanitized = self.sanitize_str(phone_number);
        let Some(captures) = self.reg_exps.mobile_number_pattern.captures(&sanitized) else {
            trace!("Rejected {:?}: not a Myanmar mobile number", phone_number);
            return Err(InvalidPhoneNumberError::NotMatchedMobilePattern(
                phone_number.to_owned(),
            ));
        };
        let suffix = &captures[SUFFIX_GROUP];

        // the suffix group is exactly the union of the operator groups
        let (operator, network_type) = if captures.name(OOREDOO_GROUP).is_some() {
            (Operator::Ooredoo, NetworkType::Gsm)
        } else if captures.name(TELENOR_GROUP).is_some() {
            (Operator::Telenor, NetworkType::Gsm)
        } else {
            debug_assert!(captures.name(MPT_GROUP).is_some());
            (Operator::Mpt, get_mpt_network_type(&self.reg_exps, suffix))
        };

        let canonical = fast_cat::concat_str!(CANONICAL_PREFIX, suffix)
            .parse::<u64>()
            .map_err(|source| InvalidPhoneNumberError::FailedToParseNumberAsInt {
                input: phone_number.to_owned(),
                source,
            })?;

        Ok(MmPhoneNumber::new(canonical, suffix.to_owned(), operator, network_type))
    }

    /// Returns the number in canonical form, `959` followed by the operator
    /// suffix, as an integer.
    ///
    /// Results are memoized per raw input text, failures included.
    pub fn normalize<'a>(&self, phone_number: impl PhoneNumberText<'a>) -> Result<u64> {
        let text = phone_number
            .into_phone_number_text()
            .ok_or(InvalidPhoneNumberError::NoInput)?;
        if let Some(cached) = self.normalization_cache.get(&*text) {
            trace!("Normalization cache hit for {:?}", text);
            return cached;
        }
        let result = self.parse_str(&text).map(|number| number.canonical());
        self.normalization_cache.insert(text.into_owned(), result.clone());
        result
    }

    /// Returns the operator of a valid number, [`Operator::Unknown`] otherwise.
    pub fn get_operator<'a>(&self, phone_number: impl PhoneNumberText<'a>) -> Operator {
        self.parse(phone_number)
            .map(|number| number.operator())
            .unwrap_or(Operator::Unknown)
    }

    /// Returns the network type of a valid number, [`NetworkType::Unknown`]
    /// otherwise.
    pub fn get_network_type<'a>(&self, phone_number: impl PhoneNumberText<'a>) -> NetworkType {
        self.parse(phone_number)
            .map(|number| number.network_type())
            .unwrap_or(NetworkType::Unknown)
    }

    pub fn format<'a>(
        &self,
        phone_number: impl PhoneNumberText<'a>,
        number_format: MmPhoneNumberFormat,
    ) -> Result<String> {
        self.parse(phone_number)
            .map(|number| number.format(number_format))
    }

    /// Number of inputs currently memoized by `normalize`.
    pub fn cached_normalizations(&self) -> usize {
        self.normalization_cache.len()
    }

    pub fn cache_capacity(&self) -> usize {
        self.normalization_cache.capacity()
    }
}

impl Default for MmPhoneNumberUtil {
    fn default() -> Self {
        Self::new()
    }
}
