use regex::Regex;
use std::sync::LazyLock;

pub const EMAIL_MIN_LEN: usize = 5;
pub const EMAIL_MAX_LEN: usize = 254;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
