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

use regex::Regex;

use super::helper_constants::{
    COUNTRY_CODE, MAX_LENGTH_FOR_COLLAPSE, MIN_LENGTH_FOR_COLLAPSE, MOBILE_PREFIX,
    MPT_CDMA_450_PATTERN, MPT_CDMA_800_PATTERN, MPT_PATTERN, MPT_WCDMA_PATTERN,
    NATIONAL_PREFIX, OOREDOO_PATTERN, TELENOR_PATTERN,
};

/// Names of the capture groups of `mobile_number_pattern`.
pub(super) const SUFFIX_GROUP: &'static str = "suffix";
pub(super) const OOREDOO_GROUP: &'static str = "ooredoo";
pub(super) const TELENOR_GROUP: &'static str = "telenor";
pub(super) const MPT_GROUP: &'static str = "mpt";

pub(super) struct MmPhoneNumberRegExps {
    /// Regular expression of every valid Myanmar mobile number, after
    /// sanitization. Composed from the operator patterns, so a number is
    /// valid if and only if exactly one operator group captures.
    ///
    /// Corresponds to the following:
    /// `(0|+?95 0?)? 9 (?P<suffix>(?P<ooredoo>..)|(?P<telenor>..)|(?P<mpt>..))`
    ///
    /// Alternatives are tried in order, so a suffix allowed by both the
    /// Telenor and the MPT patterns (`79…`) belongs to Telenor.
    pub mobile_number_pattern: Regex,

    /// Number written with the country code and the mobile prefix. Only
    /// such numbers are candidates for prefix collapsing.
    pub country_code_pattern: Regex,

    /// Country code written twice, optionally followed by a stray zero.
    /// `+9595 09 1234567`
    pub double_country_code_pattern: Regex,

    /// Stray national prefix between the country code and the mobile prefix.
    /// `+95 0 9 1234567`
    pub zero_before_mobile_prefix_pattern: Regex,

    /// National number written after the country code and the mobile prefix.
    /// Operator suffixes never start with `0`, so this is never a valid reading.
    /// `+95 9 09 1234567`
    pub national_number_after_mobile_prefix_pattern: Regex,

    /// Network sub-ranges of MPT, matched against the operator suffix.
    pub mpt_wcdma_pattern: Regex,
    pub mpt_cdma_450_pattern: Regex,
    pub mpt_cdma_800_pattern: Regex,
}

impl MmPhoneNumberRegExps {
    pub fn new() -> Self {
        // it'll be initialized only once, so we can use slow format!
        let mobile_number = format!(
            "^(?:{}|\\+?{}{}?)?{}(?P<{}>(?P<{}>{})|(?P<{}>{})|(?P<{}>{}))$",
            NATIONAL_PREFIX, COUNTRY_CODE, NATIONAL_PREFIX, MOBILE_PREFIX,
            SUFFIX_GROUP,
            OOREDOO_GROUP, OOREDOO_PATTERN,
            TELENOR_GROUP, TELENOR_PATTERN,
            MPT_GROUP, MPT_PATTERN,
        );
        let collapse_suffix = format!("\\d{{{},{}}}", MIN_LENGTH_FOR_COLLAPSE, MAX_LENGTH_FOR_COLLAPSE);

        Self {
            mobile_number_pattern: Regex::new(&mobile_number).unwrap(),
            country_code_pattern: Regex::new(&format!(
                "^\\+?{}{}?{}\\d+$",
                COUNTRY_CODE, NATIONAL_PREFIX, MOBILE_PREFIX
            )).unwrap(),
            double_country_code_pattern: Regex::new(&format!(
                "^\\+?{}{}{}?{}{}$",
                COUNTRY_CODE, COUNTRY_CODE, NATIONAL_PREFIX, MOBILE_PREFIX, collapse_suffix
            )).unwrap(),
            zero_before_mobile_prefix_pattern: Regex::new(&format!(
                "^\\+?{}{}{}{}$",
                COUNTRY_CODE, NATIONAL_PREFIX, MOBILE_PREFIX, collapse_suffix
            )).unwrap(),
            national_number_after_mobile_prefix_pattern: Regex::new(&format!(
                "^\\+?{}{}{}{}{}$",
                COUNTRY_CODE, MOBILE_PREFIX, NATIONAL_PREFIX, MOBILE_PREFIX, collapse_suffix
            )).unwrap(),
            mpt_wcdma_pattern: anchored(MPT_WCDMA_PATTERN),
            mpt_cdma_450_pattern: anchored(MPT_CDMA_450_PATTERN),
            mpt_cdma_800_pattern: anchored(MPT_CDMA_800_PATTERN),
        }
    }
}

/// Compiles an alternation of constant patterns that must match the whole input.
fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).unwrap()
}
