use super::{
    enums::{MmPhoneNumberFormat, NetworkType},
    helper_constants::{CANONICAL_PREFIX, MOBILE_PREFIX, NATIONAL_PREFIX, PLUS_SIGN},
    phone_number_regexps::MmPhoneNumberRegExps,
};

/// Renders an operator suffix in the given format.
pub(super) fn format_suffix(suffix: &str, number_format: MmPhoneNumberFormat) -> String {
    // single allocation with capacity of the resulting string
    match number_format {
        MmPhoneNumberFormat::E164 => fast_cat::concat_str!(PLUS_SIGN, CANONICAL_PREFIX, suffix),
        MmPhoneNumberFormat::National => fast_cat::concat_str!(NATIONAL_PREFIX, MOBILE_PREFIX, suffix),
        MmPhoneNumberFormat::Canonical => fast_cat::concat_str!(CANONICAL_PREFIX, suffix),
    }
}

/// Returns the network type of an MPT operator suffix.
///
/// Sub-ranges are checked in fixed order and the first match wins; an MPT
/// number outside all of them is GSM.
pub(super) fn get_mpt_network_type(reg_exps: &MmPhoneNumberRegExps, suffix: &str) -> NetworkType {
    if reg_exps.mpt_wcdma_pattern.is_match(suffix) {
        NetworkType::Wcdma
    } else if reg_exps.mpt_cdma_450_pattern.is_match(suffix) {
        NetworkType::Cdma450
    } else if reg_exps.mpt_cdma_800_pattern.is_match(suffix) {
        NetworkType::Cdma800
    } else {
        NetworkType::Gsm
    }
}
