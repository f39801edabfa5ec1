use std::borrow::Cow;

use crate::macros::impl_phone_number_text_for_integers;

/// Anything that can be read as the text of a phone number.
///
/// Strings are borrowed where possible, integers are rendered to decimal
/// text and `None` stands for "no phone number given", which every
/// classifier treats as invalid input.
pub trait PhoneNumberText<'a> {
    /// Returns the phone number text, or `None` if there is no input.
    fn into_phone_number_text(self) -> Option<Cow<'a, str>>;
}

impl<'a> PhoneNumberText<'a> for &'a str {
    fn into_phone_number_text(self) -> Option<Cow<'a, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl<'a> PhoneNumberText<'a> for &'a String {
    fn into_phone_number_text(self) -> Option<Cow<'a, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<'a> PhoneNumberText<'a> for String {
    fn into_phone_number_text(self) -> Option<Cow<'a, str>> {
        Some(Cow::Owned(self))
    }
}

impl<'a> PhoneNumberText<'a> for Cow<'a, str> {
    fn into_phone_number_text(self) -> Option<Cow<'a, str>> {
        Some(self)
    }
}

impl<'a, T: PhoneNumberText<'a>> PhoneNumberText<'a> for Option<T> {
    fn into_phone_number_text(self) -> Option<Cow<'a, str>> {
        self.and_then(PhoneNumberText::into_phone_number_text)
    }
}

impl_phone_number_text_for_integers!(u16, u32, u64, u128, usize, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::PhoneNumberText;

    fn text<'a>(input: impl PhoneNumberText<'a>) -> Option<Cow<'a, str>> {
        input.into_phone_number_text()
    }

    #[test]
    fn strings_are_borrowed() {
        let owned = String::from("09977123456");
        assert!(matches!(text(&owned), Some(Cow::Borrowed("09977123456"))));
        assert!(matches!(text("09977123456"), Some(Cow::Borrowed(_))));
        assert_eq!(text(owned.clone()).as_deref(), Some("09977123456"));
    }

    #[test]
    fn integers_are_rendered_as_decimal_text() {
        assert_eq!(text(959977123456u64).as_deref(), Some("959977123456"));
        assert_eq!(text(9977123456i64).as_deref(), Some("9977123456"));
        assert_eq!(text(-95i32).as_deref(), Some("-95"));
    }

    #[test]
    fn none_is_no_input() {
        assert_eq!(text(None::<&str>), None);
        assert_eq!(text(None::<u64>), None);
        assert_eq!(text(Some("")).as_deref(), Some(""));
    }
}
