//! Display formatting for dashboard values

use chrono::NaiveDate;

/// Date line on the current-conditions card, e.g. `Thu, 18 Mar`
pub fn card_date(date: NaiveDate) -> String {
    date.format("%a, %d %b").to_string()
}

/// Abbreviated weekday on a forecast card, e.g. `Thu`
pub fn weekday(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Unit mark appended to temperatures
pub const DEGREE: char = '°';

pub fn degrees(value: i32) -> String {
    format!("{}{}", value, DEGREE)
}

pub fn wind_speed(kmh: u32) -> String {
    format!("{} km/h", kmh)
}

pub fn pressure(mbar: i32) -> String {
    format!("{} mbar", mbar)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_card_date() {
        assert_eq!(card_date(date(2021, 3, 18)), "Thu, 18 Mar");
        assert_eq!(card_date(date(2021, 3, 1)), "Mon, 01 Mar");
        assert_eq!(card_date(date(2024, 12, 25)), "Wed, 25 Dec");
    }

    #[test]
    fn test_weekday() {
        assert_eq!(weekday(date(2021, 3, 18)), "Thu");
        assert_eq!(weekday(date(2021, 3, 21)), "Sun");
    }

    #[test]
    fn test_units() {
        assert_eq!(degrees(21), "21°");
        assert_eq!(degrees(-4), "-4°");
        assert_eq!(wind_speed(12), "12 km/h");
        assert_eq!(pressure(1012), "1012 mbar");
    }
}
