//! Property tests over a wide window of Gregorian dates.

use chrono::{Datelike, NaiveDate};
use kalends_calendar::{
    days_from_sunday, days_in_month, first_of_month, last_of_month, shift_days, shift_months,
};
use quickcheck_macros::quickcheck;

/// Maps an arbitrary integer onto a date between 1600-01-01 and roughly 2400.
fn date_from(seed: u32) -> NaiveDate {
    let base = NaiveDate::from_ymd_opt(1600, 1, 1).unwrap();
    shift_days(base, i64::from(seed % 292_000)).unwrap()
}

#[quickcheck]
fn day_shift_is_reversible(seed: u32, days: i16) -> bool {
    let date = date_from(seed);
    let days = i64::from(days);
    let there = shift_days(date, days).unwrap();
    shift_days(there, -days).unwrap() == date
}

#[quickcheck]
fn month_shift_lands_in_target_month(seed: u32, months: i8) -> bool {
    let date = date_from(seed);
    let months = i32::from(months);
    let shifted = shift_months(date, months).unwrap();
    let from_index = date.year() * 12 + date.month0() as i32;
    let to_index = shifted.year() * 12 + shifted.month0() as i32;
    to_index - from_index == months && shifted.day() <= date.day()
}

#[quickcheck]
fn month_bounds_enclose_date(seed: u32) -> bool {
    let date = date_from(seed);
    let first = first_of_month(date);
    let last = last_of_month(date);
    first <= date
        && date <= last
        && first.day() == 1
        && last.day() == days_in_month(date.year(), date.month()).unwrap()
}

#[quickcheck]
fn sunday_anchor_is_a_sunday(seed: u32) -> bool {
    let date = date_from(seed);
    let sunday = shift_days(date, -i64::from(days_from_sunday(date))).unwrap();
    days_from_sunday(sunday) == 0 && (date - sunday).num_days() < 7
}
