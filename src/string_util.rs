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

/// Characters removed from anywhere inside a phone number.
const SEPARATORS: [char; 2] = [' ', '-'];

/// Removes separators, then trims surrounding whitespace.
///
/// Separators go first: a tab hidden behind a trailing hyphen is trimmed
/// too, so stripping twice gives the same result as stripping once.
/// Returns a borrowed slice if no separator had to be removed.
pub fn strip_separators(s: &str) -> Cow<'_, str> {
    if !s.contains(SEPARATORS) {
        return Cow::Borrowed(s.trim());
    }
    let stripped: String = s.chars().filter(|c| !SEPARATORS.contains(c)).collect();
    Cow::Owned(stripped.trim().to_owned())
}

/// Converts every unicode decimal digit (Myanmar digits included) into
/// its ASCII counterpart. ASCII input is returned untouched.
pub fn normalize_digits(cow: Cow<'_, str>) -> Cow<'_, str> {
    if cow.is_ascii() {
        return cow;
    }
    Cow::Owned(String::from(dec_from_char::normalize_decimals(cow.as_ref())))
}

/// Replaces the first occurrence of `from` with `to`.
///
/// Returns the cow untouched if `from` is absent, and reuses the string
/// buffer if the cow is owned.
pub fn replace_first_cow<'a>(cow: Cow<'a, str>, from: &str, to: &str) -> Cow<'a, str> {
    let Some(start) = cow.find(from) else {
        return cow;
    };
    let mut s = cow.into_owned();
    s.replace_range(start..start + from.len(), to);
    Cow::Owned(s)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{normalize_digits, replace_first_cow, strip_separators};

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("  09 977-123 456\n"), "09977123456");
        assert!(matches!(strip_separators("\t09977123456\n"), Cow::Borrowed("09977123456")));
        assert_eq!(strip_separators("\t"), "");
        assert_eq!(strip_separators("0997\t-"), "0997");
        // only spaces and hyphens are separators
        assert_eq!(strip_separators("09.977"), "09.977");
    }

    #[test]
    fn test_normalize_digits() {
        let myanmar = Cow::Borrowed("\u{1040}\u{1049}\u{1047}\u{1048}\u{1049}");
        assert_eq!(normalize_digits(myanmar), "09789");
        assert!(matches!(normalize_digits(Cow::Borrowed("+959")), Cow::Borrowed("+959")));
    }

    #[test]
    fn test_replace_first() {
        let replaced = replace_first_cow(Cow::Borrowed("+9595959"), "9595", "95");
        assert_eq!(replaced, "+95959");

        let replaced = replace_first_cow(Cow::Borrowed("09977"), "9509", "959");
        assert!(matches!(replaced, Cow::Borrowed("09977")))
    }
}
