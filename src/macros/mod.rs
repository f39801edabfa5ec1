// std::borrow::Cow
// itoa::Buffer

/// This macro implements `PhoneNumberText` for primitive integers.
///
/// Integers are rendered to their decimal text form with `itoa`,
/// so `959977123456u64` is treated exactly like `"959977123456"`.
macro_rules! impl_phone_number_text_for_integers {
    ($($int:ty),* $(,)?) => {
        $(
            impl<'a> $crate::interfaces::PhoneNumberText<'a> for $int {
                fn into_phone_number_text(self) -> Option<std::borrow::Cow<'a, str>> {
                    let mut buf = itoa::Buffer::new();
                    Some(std::borrow::Cow::Owned(buf.format(self).to_owned()))
                }
            }
        )*
    };
}

pub(crate) use impl_phone_number_text_for_integers;
