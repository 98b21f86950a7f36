//! Birthday arithmetic: next occurrence, season and zodiac sign.
//!
//! All functions are pure and take `today` explicitly. Inputs are expected to
//! have passed [`is_valid_birth_date`]; anything else is normalised on a best
//! effort basis rather than rejected.

use std::fmt::Display;

use chrono::{Datelike, NaiveDate};

/// A leap year, so Feb 29 counts as a real birth date
const REFERENCE_LEAP_YEAR: i32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug output is the bare variant name, which is the sign's name
        write!(f, "{:?}", self)
    }
}

/// Last (month, day) belonging to each sign, in calendar order
const ZODIAC_CUTOFFS: [(u32, u32, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Capricorn),
    (2, 19, ZodiacSign::Aquarius),
    (3, 21, ZodiacSign::Pisces),
    (4, 20, ZodiacSign::Aries),
    (5, 21, ZodiacSign::Taurus),
    (6, 21, ZodiacSign::Gemini),
    (7, 23, ZodiacSign::Cancer),
    (8, 23, ZodiacSign::Leo),
    (9, 23, ZodiacSign::Virgo),
    (10, 23, ZodiacSign::Libra),
    (11, 22, ZodiacSign::Scorpio),
    (12, 22, ZodiacSign::Sagittarius),
];

/// Everything the calendar knows about a birthday relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayFacts {
    pub days_until_birthday: i64,
    pub season: Season,
    pub zodiac_sign: ZodiacSign,
}

pub fn facts_for(month: u32, day: u32, today: NaiveDate) -> BirthdayFacts {
    BirthdayFacts {
        days_until_birthday: days_until_birthday(month, day, today),
        season: season_of(month),
        zodiac_sign: zodiac_sign_of(month, day),
    }
}

/// True when (month, day) exists in at least one year
pub fn is_valid_birth_date(month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day).is_some()
}

/// The birthday as observed in `year`
///
/// A day past the end of the month is pulled back to the last day, so Feb 29
/// is celebrated on Feb 28 in non-leap years.
fn birthday_in_year(year: i32, month: u32, day: u32) -> NaiveDate {
    let month = month.clamp(1, 12);
    (1..=day.clamp(1, 31))
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .unwrap_or_default()
}

/// Earliest date on or after `today` that is the birthday
pub fn next_birthday(month: u32, day: u32, today: NaiveDate) -> NaiveDate {
    let this_year = birthday_in_year(today.year(), month, day);
    if this_year < today {
        birthday_in_year(today.year() + 1, month, day)
    } else {
        this_year
    }
}

/// Days from `today` to the next birthday; 0 means today is the birthday
pub fn days_until_birthday(month: u32, day: u32, today: NaiveDate) -> i64 {
    (next_birthday(month, day, today) - today).num_days()
}

pub fn season_of(month: u32) -> Season {
    match month {
        12 | 1 | 2 => Season::Winter,
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        _ => Season::Fall,
    }
}

pub fn zodiac_sign_of(month: u32, day: u32) -> ZodiacSign {
    ZODIAC_CUTOFFS
        .iter()
        .find(|(end_month, end_day, _)| month < *end_month || (month == *end_month && day <= *end_day))
        .map(|(_, _, sign)| *sign)
        // Dec 23 onwards wraps back to Capricorn
        .unwrap_or(ZodiacSign::Capricorn)
}
