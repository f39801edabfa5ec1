mod helper_constants;
mod helper_functions;
mod phone_number_regexps;
pub mod errors;
pub mod enums;
pub mod mm_phone_number;
pub mod mmphonenumberutil;

use std::sync::LazyLock;

use crate::mmphonenumberutil::mmphonenumberutil::MmPhoneNumberUtil;

/// Shared util instance used by the crate level functions.
pub static MM_PHONE_NUMBER_UTIL: LazyLock<MmPhoneNumberUtil> = LazyLock::new(|| {
    MmPhoneNumberUtil::new()
});
