use std::fmt;

use super::{
    enums::{MmPhoneNumberFormat, NetworkType, Operator},
    helper_functions::format_suffix,
};

/// A valid Myanmar mobile number, broken down by the classifier.
///
/// Built only by `MmPhoneNumberUtil::parse`, so the operator and the
/// network type always agree with the number itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MmPhoneNumber {
    canonical: u64,
    suffix: String,
    operator: Operator,
    network_type: NetworkType,
}

impl MmPhoneNumber {
    pub(super) fn new(
        canonical: u64,
        suffix: String,
        operator: Operator,
        network_type: NetworkType,
    ) -> Self {
        Self { canonical, suffix, operator, network_type }
    }

    /// The number as `959` followed by the operator suffix.
    pub fn canonical(&self) -> u64 {
        self.canonical
    }

    /// Digits following the mobile prefix `9`, e.g. `789123456`.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn network_type(&self) -> NetworkType {
        self.network_type
    }

    pub fn format(&self, number_format: MmPhoneNumberFormat) -> String {
        format_suffix(&self.suffix, number_format)
    }
}

/// Displays the number in E.164 format.
impl fmt::Display for MmPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(MmPhoneNumberFormat::E164))
    }
}
