use crate::MmPhoneNumberUtil;

use super::init_logger;

fn get_phone_util() -> MmPhoneNumberUtil {
    init_logger();
    MmPhoneNumberUtil::new()
}

#[test]
fn sanitize_removes_separators_and_whitespace() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.sanitize("  09 977-123-456 "), "09977123456");
    assert_eq!(phone_util.sanitize("+95 9 789 123 456"), "+959789123456");
    assert_eq!(phone_util.sanitize("\t09977123456\n"), "09977123456");
}

#[test]
fn sanitize_collapses_double_country_code() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.sanitize("+95959512345678"), "+959512345678");
    assert_eq!(phone_util.sanitize("95 95 9 977123456"), "959977123456");
    assert_eq!(phone_util.sanitize("+9595 09 977123456"), "+959977123456");
}

#[test]
fn sanitize_removes_zero_after_country_code() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.sanitize("9509512345678"), "959512345678");
    assert_eq!(phone_util.sanitize("+95 09 789123456"), "+959789123456");
    assert_eq!(phone_util.sanitize("95909512345678"), "959512345678");
}

#[test]
fn sanitize_keeps_valid_canonical_numbers() {
    let phone_util = get_phone_util();
    // reads as 9595 + 91234567 too, but 959 + 591234567 is a valid number
    assert_eq!(phone_util.sanitize("959591234567"), "959591234567");
    assert_eq!(phone_util.sanitize("959977123456"), "959977123456");
}

#[test]
fn sanitize_passes_non_numbers_through() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.sanitize("not-a-number"), "notanumber");
    assert_eq!(phone_util.sanitize("abc"), "abc");
    assert_eq!(phone_util.sanitize(""), "");
    assert_eq!(phone_util.sanitize(None::<&str>), "");
}

#[test]
fn sanitize_converts_myanmar_digits() {
    let phone_util = get_phone_util();
    assert_eq!(
        phone_util.sanitize("\u{1040}\u{1049} \u{1047}\u{1048}\u{1049} \u{1041}\u{1042}\u{1043} \u{1044}\u{1045}\u{1046}"),
        "09789123456"
    );
}

#[test]
fn sanitize_accepts_integers() {
    let phone_util = get_phone_util();
    assert_eq!(phone_util.sanitize(95959512345678u64), "959512345678");
    assert_eq!(phone_util.sanitize(9977123456u64), "9977123456");
}

#[test]
fn sanitize_is_idempotent() {
    let phone_util = get_phone_util();
    let inputs = [
        "+95959512345678",
        "95909512345678",
        "9509512345678",
        "95959591234567",
        "9595959595091234567",
        "+95 95 09 512 345 678",
        "959591234567",
        "09977123456",
        "0997\t-",
        " - \t- ",
        "not-a-number",
        "+",
        "95",
        "9595",
        "\u{1040}\u{1049}\u{1047}\u{1048}\u{1049}",
    ];
    for input in inputs {
        let once = phone_util.sanitize(input);
        let twice = phone_util.sanitize(once.as_str());
        assert_eq!(once, twice, "Input: {:?}", input);
    }
}
