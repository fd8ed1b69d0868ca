//! The items of the demo menu, one per kind of validated read.

use crate::user::{parse_user, read_user};
use askloop::{Item, ValidatedReader};
use chrono::{Local, NaiveDate};

const OPTIONS: [&str; 3] = ["One", "Two", "Three"];
const RANGE_MIN: f64 = -5.4;
const RANGE_MAX: f64 = 9.0;

pub fn items() -> Vec<Item> {
    vec![
        Item::of("Read an integer", |io| {
            let n = io.read_int("Input integer:", "Wrong integer.")?;
            io.write_line(&format!("Good - {n}"))
        }),
        Item::of("Read a number", |io| {
            let x = io.read_double("Input number:", "Wrong number.")?;
            io.write_line(&x)
        }),
        Item::of(format!("Read a number in [{RANGE_MIN}, {RANGE_MAX})"), |io| {
            let prompt = format!("Input number in [{RANGE_MIN}, {RANGE_MAX}):");
            let x = io.read_number_range(&prompt, "Number is not in range.", RANGE_MIN, RANGE_MAX)?;
            io.write_line(&x)
        }),
        Item::of(
            format!("Read a whole number in [{RANGE_MIN}, {RANGE_MAX})"),
            |io| {
                let prompt = format!("Input whole number in [{RANGE_MIN}, {RANGE_MAX}):");
                let x = io.read_number_range_with_predicate(
                    &prompt,
                    "Number is not in range.",
                    "no fraction allowed, type digits only",
                    RANGE_MIN,
                    RANGE_MAX,
                    |s| !s.contains(['.', 'e', 'E']),
                )?;
                io.write_line(&x)
            },
        ),
        Item::of("Read a string shorter than 4 characters", |io| {
            let s = io.read_string_predicate(
                "Input string of less than 4 characters:",
                "String is too long.",
                |s| s.chars().count() < 4,
            )?;
            io.write_line(&format!("Input string {s}"))
        }),
        Item::of("Choose an option", |io| {
            let prompt = format!("Input one of: {}", OPTIONS.join(", "));
            let s = io.read_string_options(&prompt, "Wrong option.", &OPTIONS)?;
            io.write_line(&s)
        }),
        Item::of("Read a date", |io| {
            let date = io.read_iso_date("Input date (YYYY-MM-DD):", "String is not a date.")?;
            io.write_line(&date)
        }),
        Item::of("Read a date since 1962-04-12", |io| {
            let min = NaiveDate::from_ymd_opt(1962, 4, 12).unwrap_or(NaiveDate::MIN);
            let max = Local::now().date_naive();
            let prompt = format!("Input date in [{min}, {max}):");
            let date = io.read_iso_date_range(&prompt, "Wrong date.", min, max)?;
            io.write_line(&date)
        }),
        Item::of("Register a user", |io| {
            let user = read_user(io)?;
            io.write_line(&user)
        }),
        Item::of("Register a user in one line", |io| {
            let user = io.read_validated(
                "Enter user as <user name>#<password>#<last login>#<phone number>#<logins>:",
                "Wrong user format.",
                parse_user,
            )?;
            io.write_line(&user)
        }),
        Item::exit(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu;
    use askloop::ScriptedChannel;

    fn perform(label_prefix: &str, inputs: &[&str]) -> Vec<String> {
        let mut items = items();
        let item = items
            .iter_mut()
            .find(|item| item.label().starts_with(label_prefix))
            .unwrap();
        let mut io = ScriptedChannel::new(inputs.iter().copied());
        item.perform(&mut io).unwrap();
        io.output().to_vec()
    }

    #[test]
    fn test_exit_is_last() {
        let items = items();
        assert!(items.last().unwrap().is_exit());
        assert_eq!(items.iter().filter(|item| item.is_exit()).count(), 1);
    }

    #[test]
    fn test_integer_item() {
        assert_eq!(perform("Read an integer", &["x", "42"]).last().unwrap(), "Good - 42\n");
    }

    #[test]
    fn test_whole_number_item() {
        let output = perform("Read a whole number", &["10", "3.2", "3"]);
        assert_eq!(
            output,
            [
                "Number is not in range. 10 is out of range [-5.4, 9)\n",
                "Number is not in range. no fraction allowed, type digits only\n",
                "3\n",
            ]
        );
    }

    #[test]
    fn test_option_item() {
        assert_eq!(perform("Choose an option", &["one", "One"]).len(), 2);
    }

    #[test]
    fn test_one_line_user_item() {
        let output = perform(
            "Register a user in one line",
            &["Bbl64#abc5*ZZ", "Bbl64#abc5*ZZ#2020-02-29#054-123-45-67#12"],
        );
        assert_eq!(
            output[0],
            "Wrong user format. expected at least 5 '#'-separated fields, got 2\n"
        );
        assert!(output[1].starts_with("User: Bbl64\n"));
    }

    #[test]
    fn test_full_menu_session() {
        let mut items = items();
        let mut io = ScriptedChannel::new(["0", "1", "7", "11"]);
        menu::run(&mut items, &mut io).unwrap();
        assert!(io.output().iter().any(|line| line == "Good - 7\n"));
        assert!(io.output().iter().any(|line| line.starts_with("Wrong selection.")));
    }
}
