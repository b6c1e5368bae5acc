//! Compiled regular expressions shared by the field normalizers
//!
//! Each pattern is compiled once on first use and shared across threads.
//! Digits are matched as `[0-9]`: captured values are sliced by byte offset.

use regex::Regex;
use std::sync::OnceLock;

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        pub fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).expect(concat!("valid regex: ", stringify!($name))))
        }
    };
}

// Ranges
static_regex!(spaced_range_separator, r"\s+-\s+");
static_regex!(
    slash_date_range,
    r"([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})\s*-\s*([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})"
);
static_regex!(clock_range, r"([0-9]{1,2}:[0-9]{2})\s*-\s*[0-9]{1,2}:[0-9]{2}");
static_regex!(at_separator, r"(?i)\s+at\s+");

// Dates
static_regex!(
    month_day_year,
    r"^([0-9]{1,2})[/.-]([0-9]{1,2})[/.-]([0-9]{4}|[0-9]{2})\b(.*)$"
);
static_regex!(iso_date, r"^([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})\b(.*)$");
static_regex!(
    compact_time_date,
    r"^([0-9]{2})([0-9]{2})\s+([0-9]{1,2})-([0-9]{1,2})-([0-9]{4})$"
);
static_regex!(two_digit_year_slash, r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{2})$");

// Times
static_regex!(
    clock_time,
    r"^([0-9]{1,2}):([0-9]{2})(?::[0-9]{2})?\s*([AaPp])?(?:\.?[Mm]\.?)?(?:\s*-.*)?$"
);
static_regex!(bare_time, r"^([0-9]{1,4})(?:\s*-\s*[0-9]{1,4})?$");

// Embedded date/time fragments stripped from free text
static_regex!(
    embedded_date_time,
    r"(?i)[0-9]{1,2}[/.-][0-9]{1,2}[/.-][0-9]{2,4}|[0-9]{4}-[0-9]{2}-[0-9]{2}|[0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?(?:\s*[ap]\.?m\.?)?|\b[0-9]{1,2}\s*[ap]m\b"
);
static_regex!(status_colon, r"(?i)\b(inactive|closed|open|pending):\s*");

// Crime type and location cleanup
static_regex!(related_token, r"(?i)[\s-]*\brelated\b");
static_regex!(on_campus_suffix, r"(?i)(?:\s*-\s*on\s+campus)+\s*$");

// Shared text helpers
static_regex!(whitespace_run, r"\s+");
static_regex!(edge_separators, r"^[\s,;:-]+|[\s,;:-]+$");
static_regex!(hyphen_separator, r"\s*-\s*");
