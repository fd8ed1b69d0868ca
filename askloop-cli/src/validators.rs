//! Field rules for the user record.

use regex::Regex;
use std::sync::LazyLock;

static USER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z0-9]{1,4}$").expect("valid user name pattern"));

static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+972-?5\d-?\d{3}-?\d{2}-?\d{2}|05\d-?\d{3}-?\d{2}-?\d{2})$")
        .expect("valid phone pattern")
});

static PASSWORD_CLASSES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    ["[A-Z]", "[a-z]", "[0-9]", "[#$*&%]"]
        .map(|class| Regex::new(class).expect("valid password class"))
});

/// Capital letter followed by 1 to 4 lower case letters or digits.
pub fn is_user_name(s: &str) -> bool {
    USER_NAME.is_match(s)
}

/// At most 8 characters with at least one upper case letter, one lower case
/// letter, one digit and one of `#$*&%`.
pub fn is_password(s: &str) -> bool {
    s.chars().count() <= 8 && PASSWORD_CLASSES.iter().all(|class| class.is_match(s))
}

/// Israeli mobile number, local (`05x`) or international (`+9725x`) form,
/// dashes optional.
pub fn is_phone_number(s: &str) -> bool {
    PHONE_NUMBER.is_match(s)
}
