//! Tests for the field normalizers

pub mod text_tests;

use crate::app::services::field_normalizers::TitleCaser;
use crate::constants::{DEFAULT_ABBREVIATIONS, DEFAULT_STOP_WORDS};

/// Title-caser with the built-in stop words and abbreviations
pub fn create_default_title_caser() -> TitleCaser {
    TitleCaser::new(DEFAULT_STOP_WORDS, DEFAULT_ABBREVIATIONS).unwrap()
}

/// Assorted raw date and time values seen in real exports
pub fn sample_date_time_values() -> Vec<&'static str> {
    vec![
        "",
        "0",
        "906",
        "1230",
        "0836-0917",
        "08:36 - 09:17",
        "8:15 PM",
        "2400",
        "2/17/25 906",
        "0214 03-23-2025",
        "12/4/2024-12/5/2024",
        "04/29/25 8:15am - 04/29/25 5:00pm",
        "2024-12-04 14:30",
        "10/01/24 at 0800",
        "Unknown",
    ]
}
