use std::env;
use chrono_tz::Tz;
use crate::domain::models::booking::DuplicateKey;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub studio_timezone: Tz,
    pub duplicate_key: DuplicateKey,
    pub seed_sample_classes: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://fitness_booking.db".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().expect("PORT must be a number"),
            studio_timezone: env::var("STUDIO_TIMEZONE")
                .unwrap_or_else(|_| "Asia/Kolkata".to_string())
                .parse()
                .expect("STUDIO_TIMEZONE must be an IANA timezone name"),
            duplicate_key: env::var("DUPLICATE_BOOKING_KEY")
                .map(|v| v.parse().expect("DUPLICATE_BOOKING_KEY must be booking_id or class_id"))
                .unwrap_or_default(),
            seed_sample_classes: env::var("SEED_SAMPLE_CLASSES")
                .map(|v| parse_flag(&v).expect("SEED_SAMPLE_CLASSES must be true or false"))
                .unwrap_or(true),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
