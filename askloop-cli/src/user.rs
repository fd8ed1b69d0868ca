use crate::validators::{is_password, is_phone_number, is_user_name};
use askloop::{
    ChannelError, TextChannel, ValidatedReader,
    rules::{self, Rejected},
};
use chrono::{Local, NaiveDate};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_name: String,
    pub password: String,
    pub last_login: NaiveDate,
    pub phone_number: String,
    pub logins: u32,
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User: {}\nLast login: {}\nPhone: {}\nLogins: {}",
            self.user_name, self.last_login, self.phone_number, self.logins
        )
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UserFormatError {
    #[error("expected at least 5 '#'-separated fields, got {0}")]
    FieldCount(usize),
    #[error("'{0}' is not a valid user name")]
    UserName(String),
    #[error("password does not meet the rules")]
    Password,
    #[error(transparent)]
    LastLogin(#[from] Rejected),
    #[error("'{0}' is not a valid phone number")]
    PhoneNumber(String),
    #[error("'{0}' is not a positive number of logins")]
    Logins(String),
}

/// Last logins may be any day up to and including today.
fn last_login_window() -> (NaiveDate, NaiveDate) {
    let today = Local::now().date_naive();
    (NaiveDate::MIN, today.succ_opt().unwrap_or(NaiveDate::MAX))
}

fn parse_logins(s: &str) -> Result<u32, UserFormatError> {
    match s.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(UserFormatError::Logins(s.to_string())),
    }
}

/// `<user name>#<password>#<last login>#<phone number>#<logins>`
///
/// Only the password may contain `#`, so the user name is split off the
/// front and the last three fields off the back; what is left is the password.
pub fn parse_user(s: &str) -> Result<User, UserFormatError> {
    let field_count = || UserFormatError::FieldCount(s.split('#').count());
    let (user_name, rest) = s.split_once('#').ok_or_else(field_count)?;
    let tail: Vec<&str> = rest.rsplitn(4, '#').collect();
    let [logins, phone_number, last_login, password] = tail[..] else {
        return Err(field_count());
    };

    if !is_user_name(user_name) {
        return Err(UserFormatError::UserName(user_name.to_string()));
    }
    if !is_password(password) {
        return Err(UserFormatError::Password);
    }
    let (min, max) = last_login_window();
    let last_login =
        rules::parse_iso_date(last_login).and_then(|d| rules::date_in_range(d, min, max))?;
    if !is_phone_number(phone_number) {
        return Err(UserFormatError::PhoneNumber(phone_number.to_string()));
    }

    Ok(User {
        user_name: user_name.to_string(),
        password: password.to_string(),
        last_login,
        phone_number: phone_number.to_string(),
        logins: parse_logins(logins)?,
    })
}

/// Asks for every field on its own, re-prompting each one until it is valid.
pub fn read_user(io: &mut dyn TextChannel) -> Result<User, ChannelError> {
    let user_name = io.read_string_predicate(
        "User name (capital letter, then 1-4 lower case letters or digits):",
        "Wrong user name.",
        is_user_name,
    )?;
    let password = io.read_string_predicate(
        "Password (at most 8 chars with upper, lower, digit and one of #$*&%):",
        "Wrong password.",
        is_password,
    )?;
    let (min, max) = last_login_window();
    let last_login =
        io.read_iso_date_range("Date of last login (YYYY-MM-DD):", "Wrong date.", min, max)?;
    let phone_number = io.read_string_predicate(
        "Mobile phone number (05X-XXX-XX-XX or +9725X-XXX-XX-XX):",
        "Wrong phone number.",
        is_phone_number,
    )?;
    let logins = io.read_validated("Number of logins:", "Wrong number.", parse_logins)?;

    Ok(User {
        user_name,
        password,
        last_login,
        phone_number,
        logins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use askloop::ScriptedChannel;

    #[test]
    fn test_parse_user() {
        let user = parse_user("Bbl64#abc5*ZZ#2020-02-29#054-123-45-67#12").unwrap();
        assert_eq!(user.user_name, "Bbl64");
        assert_eq!(user.last_login, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
        assert_eq!(user.logins, 12);
    }

    #[test]
    fn test_parse_user_password_with_hash() {
        let user = parse_user("Bbl64#ab#5*ZZ#2020-02-29#0541234567#3").unwrap();
        assert_eq!(user.user_name, "Bbl64");
        assert_eq!(user.password, "ab#5*ZZ");
        assert_eq!(user.phone_number, "0541234567");
        assert_eq!(user.logins, 3);

        let user = parse_user("Bbl64#Ab1#####2020-02-29#0541234567#3").unwrap();
        assert_eq!(user.password, "Ab1####");
    }

    #[test]
    fn test_parse_user_errors() {
        assert_eq!(parse_user("Bbl64#abc5*ZZ"), Err(UserFormatError::FieldCount(2)));
        assert_eq!(parse_user("Bbl64"), Err(UserFormatError::FieldCount(1)));
        assert_eq!(
            parse_user("Bbl64#abc5*ZZ#2020-02-29#0541234567"),
            Err(UserFormatError::FieldCount(4))
        );
        assert_eq!(
            parse_user("bbl64#abc5*ZZ#2020-02-29#0541234567#1"),
            Err(UserFormatError::UserName("bbl64".to_string()))
        );
        assert_eq!(
            parse_user("Bbl64#abc#2020-02-29#0541234567#1"),
            Err(UserFormatError::Password)
        );
        assert!(matches!(
            parse_user("Bbl64#abc5*ZZ#2020-02-30#0541234567#1"),
            Err(UserFormatError::LastLogin(Rejected::Format { .. }))
        ));
        assert!(matches!(
            parse_user("Bbl64#abc5*ZZ#9999-01-01#0541234567#1"),
            Err(UserFormatError::LastLogin(Rejected::DateOutOfRange { .. }))
        ));
        assert_eq!(
            parse_user("Bbl64#abc5*ZZ#2020-02-29#12345#1"),
            Err(UserFormatError::PhoneNumber("12345".to_string()))
        );
        assert_eq!(
            parse_user("Bbl64#abc5*ZZ#2020-02-29#0541234567#0"),
            Err(UserFormatError::Logins("0".to_string()))
        );
    }

    #[test]
    fn test_today_is_a_valid_last_login() {
        let today = Local::now().date_naive();
        let line = format!("Bbl64#abc5*ZZ#{today}#0541234567#1");
        assert_eq!(parse_user(&line).unwrap().last_login, today);
    }

    #[test]
    fn test_read_user_reprompts_each_field() {
        let mut io = ScriptedChannel::new([
            "bbl64",
            "Bbl64",
            "abc5*ZZ",
            "2020-13-01",
            "2020-01-01",
            "0541234567",
            "0",
            "-3",
            "12",
        ]);
        let user = read_user(&mut io).unwrap();

        assert_eq!(
            user,
            User {
                user_name: "Bbl64".to_string(),
                password: "abc5*ZZ".to_string(),
                last_login: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                phone_number: "0541234567".to_string(),
                logins: 12,
            }
        );
        assert_eq!(io.output().len(), 4);
        assert!(io.output()[0].starts_with("Wrong user name."));
        assert!(io.output()[1].starts_with("Wrong date."));
        assert_eq!(
            io.output()[2],
            "Wrong number. '0' is not a positive number of logins\n"
        );
    }
}
