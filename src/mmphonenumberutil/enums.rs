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

use strum::{AsRefStr, Display, EnumIter};

/// Telecom operators owning Myanmar mobile number ranges.
///
/// The `Display` form is the operator label, e.g. `MPT`.
#[derive(Debug, Display, AsRefStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Ooredoo Myanmar, national numbers starting `0997` or `0996`.
    Ooredoo,
    /// Telenor Myanmar, national numbers starting `0979`, `0978` or `0977`.
    Telenor,
    /// Myanma Posts and Telecommunications, the incumbent operator
    /// holding the remaining allocated ranges.
    #[strum(serialize = "MPT")]
    Mpt,
    /// The number is not a valid Myanmar mobile number.
    Unknown,
}

/// Radio network generation a number range was allocated for.
#[derive(Debug, Display, AsRefStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkType {
    /// **GSM.** Every Ooredoo and Telenor number, and MPT numbers
    /// outside the ranges below.
    #[strum(serialize = "GSM")]
    Gsm,
    /// **WCDMA (3G).** MPT ranges `0955`, `09252`-`09254`, `0926`, `0944`-`0946`.
    #[strum(serialize = "WCDMA")]
    Wcdma,
    /// **CDMA 450 MHz.** MPT ranges `098`, `096`, `0949`.
    #[strum(serialize = "CDMA 450 MHz")]
    Cdma450,
    /// **CDMA 800 MHz.** MPT ranges `093`, `0973`, `0991`.
    #[strum(serialize = "CDMA 800 MHz")]
    Cdma800,
    /// The number is not a valid Myanmar mobile number.
    Unknown,
}

/// Renderings of a valid Myanmar mobile number.
///
/// For example, the Telenor number `09 789 123 456` would be:
/// - **E164**: `+959789123456`
/// - **National**: `09789123456`
/// - **Canonical**: `959789123456`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MmPhoneNumberFormat {
    /// International format without separators, starting with `+95`.
    E164,
    /// Format for dialing inside Myanmar, starting with the national prefix `0`.
    National,
    /// Country code followed by the number, no `+` and no separators.
    /// This is the form returned by `normalize` as an integer.
    Canonical,
}
