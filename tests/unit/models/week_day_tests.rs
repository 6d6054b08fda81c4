// Unit tests for the WeekDay enum
// Ordering, parsing, chrono conversion and localized names

use chrono::Weekday;
use test_case::test_case;
use time_period_selector::models::language::Language;
use time_period_selector::models::week_day::WeekDay;

#[test]
fn test_canonical_order_starts_monday() {
    let mut days = WeekDay::ALL.to_vec();
    days.reverse();
    days.sort();
    assert_eq!(days, WeekDay::ALL.to_vec(), "Derived ordering should be Monday first");
}

#[test]
fn test_index_round_trip() {
    for (i, day) in WeekDay::ALL.into_iter().enumerate() {
        assert_eq!(day.index(), i);
        assert_eq!(WeekDay::from_index(i), Some(day));
    }
    assert_eq!(WeekDay::from_index(7), None);
}

#[test_case("Mon", WeekDay::Mon)]
#[test_case("wed", WeekDay::Wed)]
#[test_case(" SUN ", WeekDay::Sun)]
fn test_parse_short_name(input: &str, expected: WeekDay) {
    assert_eq!(input.parse::<WeekDay>(), Ok(expected));
}

#[test]
fn test_parse_rejects_unknown_name() {
    assert!("Monday".parse::<WeekDay>().is_err());
    assert!("".parse::<WeekDay>().is_err());
}

#[test_case(Weekday::Mon, WeekDay::Mon)]
#[test_case(Weekday::Thu, WeekDay::Thu)]
#[test_case(Weekday::Sun, WeekDay::Sun)]
fn test_chrono_conversion(chrono_day: Weekday, expected: WeekDay) {
    assert_eq!(WeekDay::from(chrono_day), expected);
    assert_eq!(Weekday::from(expected), chrono_day);
}

#[test_case(WeekDay::Mon, Language::En, "Monday")]
#[test_case(WeekDay::Sat, Language::En, "Saturday")]
#[test_case(WeekDay::Mon, Language::Zh, "周一")]
#[test_case(WeekDay::Sun, Language::Zh, "周日")]
fn test_display_name(day: WeekDay, language: Language, expected: &str) {
    assert_eq!(day.display_name(language), expected);
}

#[test]
fn test_serializes_as_short_name() {
    assert_eq!(serde_json::to_string(&WeekDay::Fri).unwrap(), "\"Fri\"");
    assert_eq!(WeekDay::Fri.to_string(), "Fri");
}
