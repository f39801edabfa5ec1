// Numbering plan data follows the ITU-T national numbering plan for
// Myanmar (country code 95). Operator patterns below describe the digits
// that follow the mobile prefix `9`.

/// Myanmar country calling code.
pub const COUNTRY_CODE: &'static str = "95";
/// Digit every mobile number starts with after the country code or the
/// national prefix.
pub const MOBILE_PREFIX: &'static str = "9";
pub const NATIONAL_PREFIX: &'static str = "0";
pub const PLUS_SIGN: &'static str = "+";

/// Country code followed by the mobile prefix. Canonical numbers start with it.
pub const CANONICAL_PREFIX: &'static str = "959";
/// Country code written twice, collapsed to a single one by the sanitizer.
pub const DOUBLE_COUNTRY_CODE: &'static str = "9595";
/// Country code followed by a national prefix before the mobile prefix.
pub const ZERO_BEFORE_MOBILE_PREFIX: &'static str = "9509";
/// Country code and mobile prefix followed by a whole national number,
/// as in `+959 09 512345678`.
pub const NATIONAL_NUMBER_AFTER_MOBILE_PREFIX: &'static str = "95909";

pub const OOREDOO_PATTERN: &'static str = r"9[76]\d{7}";
pub const TELENOR_PATTERN: &'static str = r"7[987]\d{7}";
// `5` accepts up to 8 trailing digits so the newer 9-digit `095` ranges
// are covered as well.
pub const MPT_PATTERN: &'static str =
    r"5\d{6,8}|4\d{7,8}|2\d{6,8}|3\d{7,8}|6\d{6}|8\d{6}|7\d{7}|9[019]\d{5,6}";

// Network sub-ranges of the MPT allocation. They are not disjoint, so they
// are checked in this order: WCDMA, CDMA 450, CDMA 800. Anything left is GSM.
pub const MPT_WCDMA_PATTERN: &'static str = r"55\d{5}|25[2-4]\d{6}|26\d{7}|4[4-6]\d{7}";
pub const MPT_CDMA_450_PATTERN: &'static str = r"8\d{6}|6\d{6}|49\d{6}";
pub const MPT_CDMA_800_PATTERN: &'static str = r"3\d{7}|73\d{6}|91\d{6}";

/// Suffix length range after the country code accepted by the sanitizer
/// when collapsing prefixes.
pub const MIN_LENGTH_FOR_COLLAPSE: usize = 7;
pub const MAX_LENGTH_FOR_COLLAPSE: usize = 9;

/// Default number of distinct inputs memoized by `normalize`.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;
