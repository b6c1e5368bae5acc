//! Date and time normalization
//!
//! Crime logs write dates and times in every shape imaginable: `906`,
//! `0836-0917`, `2/17/25 906`, `0214 03-23-2025`, `12/4/2024-12/5/2024`,
//! `04/29/25 8:15am - 04/29/25 5:00pm`. These functions reduce them to one
//! canonical form. Ranges keep their first value. Anything unrecognized is
//! returned trimmed but otherwise untouched.

use super::patterns;
use crate::config::DateStyle;
use crate::constants::TWO_DIGIT_YEAR_PIVOT;
use chrono::NaiveDate;

/// Options for date/time field normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOptions {
    /// Output style for dates
    pub style: DateStyle,
    /// Keep only the first value of a range
    pub collapse_ranges: bool,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            style: DateStyle::Iso,
            collapse_ranges: true,
        }
    }
}

/// A parsed clock value
#[derive(Debug, Clone, PartialEq, Eq)]
struct ClockTime {
    hour: u32,
    minute: u32,
    /// Rendering used when the time stands alone
    text: String,
}

impl ClockTime {
    fn padded(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

// =============================================================================
// Times
// =============================================================================

/// Normalize a time value, returning the trimmed input when it is not a time
///
/// `"906"` becomes `"9:06"`, `"1230"` becomes `"12:30"`, `"0836-0917"`
/// becomes `"08:36"`, and `"0"` or an empty value becomes `""`.
pub fn normalize_time(raw: &str) -> String {
    try_normalize_time(raw).unwrap_or_else(|| raw.trim().to_string())
}

/// Normalize a time value, returning `None` when it is not recognized
pub fn try_normalize_time(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() || value == "0" {
        return Some(String::new());
    }
    parse_time(value).map(|clock| clock.text)
}

fn parse_time(value: &str) -> Option<ClockTime> {
    if let Some(caps) = patterns::clock_time().captures(value) {
        let hour_text = &caps[1];
        let minute_text = &caps[2];
        let mut hour: u32 = hour_text.parse().ok()?;
        let minute: u32 = minute_text.parse().ok()?;

        let text = match caps.get(3).map(|m| m.as_str().to_ascii_lowercase()) {
            Some(meridiem) => {
                if hour == 0 || hour > 12 {
                    return None;
                }
                hour = match (meridiem.as_str(), hour) {
                    ("a", 12) => 0,
                    ("p", h) if h < 12 => h + 12,
                    (_, h) => h,
                };
                format!("{:02}:{}", hour, minute_text)
            }
            None => format!("{}:{}", hour_text, minute_text),
        };

        return valid_clock(hour, minute).then_some(ClockTime { hour, minute, text });
    }

    let caps = patterns::bare_time().captures(value)?;
    let padded = format!("{:0>3}", &caps[1]);
    let (hour_text, minute_text) = padded.split_at(padded.len() - 2);
    let hour: u32 = hour_text.parse().ok()?;
    let minute: u32 = minute_text.parse().ok()?;

    valid_clock(hour, minute).then(|| ClockTime {
        hour,
        minute,
        text: format!("{}:{}", hour_text, minute_text),
    })
}

fn valid_clock(hour: u32, minute: u32) -> bool {
    hour < 24 && minute < 60
}

// =============================================================================
// Ranges
// =============================================================================

/// Keep only the first date or time of a range, leaving its text intact
///
/// `"12/4/2024-12/5/2024"` becomes `"12/4/2024"` and
/// `"08:36 -\n09:17"` becomes `"08:36"`.
pub fn collapse_date_range(raw: &str) -> String {
    let value = raw.trim();
    let first = patterns::spaced_range_separator()
        .split(value)
        .next()
        .unwrap_or(value);
    let first = patterns::slash_date_range().replace_all(first, "$1");
    let first = patterns::clock_range().replace_all(&first, "$1");
    first.trim().to_string()
}

// =============================================================================
// Dates
// =============================================================================

/// Normalize a date (optionally with an attached time)
pub fn normalize_date(raw: &str, style: DateStyle) -> String {
    try_normalize_date(raw, style).unwrap_or_else(|| raw.trim().to_string())
}

/// Normalize a date, returning `None` when it is not recognized
///
/// Accepts `MM/DD/YY`, `MM/DD/YYYY`, `MM-DD-YYYY`, `YYYY-MM-DD`, any of those
/// followed by a time, and the compact `HHMM MM-DD-YYYY` form. Only the
/// first date of a range is kept.
pub fn try_normalize_date(raw: &str, style: DateStyle) -> Option<String> {
    let value = collapse_date_range(raw);
    let value = patterns::at_separator().replace_all(&value, " ");
    let value = value.trim();
    if value.is_empty() {
        return Some(String::new());
    }

    let (date, time) = parse_date(value)?;
    let date_text = match style {
        DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
        DateStyle::UsSlash => date.format("%m/%d/%Y").to_string(),
    };

    Some(match time {
        Some(clock) => format!("{} {}", date_text, clock.padded()),
        None => date_text,
    })
}

fn parse_date(value: &str) -> Option<(NaiveDate, Option<ClockTime>)> {
    if let Some(caps) = patterns::compact_time_date().captures(value) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        if !valid_clock(hour, minute) {
            return None;
        }
        let date = build_date(&caps[5], &caps[3], &caps[4])?;
        let clock = ClockTime {
            hour,
            minute,
            text: format!("{}:{}", &caps[1], &caps[2]),
        };
        return Some((date, Some(clock)));
    }

    let (date, rest) = if let Some(caps) = patterns::iso_date().captures(value) {
        (build_date(&caps[1], &caps[2], &caps[3])?, caps[4].to_string())
    } else {
        let caps = patterns::month_day_year().captures(value)?;
        (build_date(&caps[3], &caps[1], &caps[2])?, caps[4].to_string())
    };

    let rest = rest.trim().trim_start_matches(',').trim();
    if rest.is_empty() {
        return Some((date, None));
    }

    let clock = parse_time(rest)?;
    Some((date, Some(clock)))
}

fn build_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = expand_year(year)?;
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

/// Expand a two-digit year: below the pivot is 20xx, otherwise 19xx
fn expand_year(year: &str) -> Option<i32> {
    let value: u32 = year.parse().ok()?;
    let full = match year.len() {
        2 if value < TWO_DIGIT_YEAR_PIVOT => 2000 + value,
        2 => 1900 + value,
        4 => value,
        _ => return None,
    };
    i32::try_from(full).ok()
}

// =============================================================================
// Date/time fields
// =============================================================================

/// Normalize the value of a date/time column
pub fn normalize_date_time(raw: &str, options: DateOptions) -> String {
    try_normalize_date_time(raw, options).unwrap_or_else(|| raw.trim().to_string())
}

/// Normalize the value of a date/time column, `None` when not recognized
///
/// A value starting with a date goes through the date normalizer, anything
/// else through the time normalizer. With `collapse_ranges` disabled, each
/// side of a range is normalized on its own and re-joined with ` - `.
pub fn try_normalize_date_time(raw: &str, options: DateOptions) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Some(String::new());
    }

    if options.collapse_ranges {
        return normalize_single(&collapse_date_range(value), options.style);
    }

    let spaced = patterns::slash_date_range().replace_all(value, "$1 - $2");
    let parts = patterns::spaced_range_separator()
        .split(&spaced)
        .map(|part| normalize_single(part, options.style))
        .collect::<Option<Vec<_>>>()?;
    Some(
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" - "),
    )
}

fn normalize_single(value: &str, style: DateStyle) -> Option<String> {
    if starts_with_date(value) {
        try_normalize_date(value, style)
    } else {
        try_normalize_time(value)
    }
}

fn starts_with_date(value: &str) -> bool {
    patterns::compact_time_date().is_match(value)
        || patterns::iso_date().is_match(value)
        || patterns::month_day_year().is_match(value)
}

/// Fold a separate time value into a date value
///
/// Two-digit years are expanded and the time is formatted, so
/// `("1/3/25", "1510")` becomes `"1/3/2025 15:10"`. A missing date yields an
/// empty string; a missing time yields the date alone.
pub fn combine_date_time(date: &str, time: &str) -> String {
    let date = date.trim();
    let time = time.trim();
    if date.is_empty() {
        return String::new();
    }

    let date_text = match patterns::two_digit_year_slash().captures(date) {
        Some(caps) => match expand_year(&caps[3]) {
            Some(year) => format!("{}/{}/{}", &caps[1], &caps[2], year),
            None => date.to_string(),
        },
        None => date.to_string(),
    };

    let time_text = normalize_time(time);
    if time_text.is_empty() {
        date_text
    } else {
        format!("{} {}", date_text, time_text)
    }
}
