//! Canned weather outlook for the trip dates.
//!
//! Values come from historical May averages for Paris. Date ranges in May
//! get one row per day (up to five); anything else gets a generic
//! five-day outlook.

use serde::{Deserialize, Serialize};

/// One day of the outlook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    /// "May 5, 2025" for parsed ranges, "Day 1" otherwise
    pub date: String,
    pub icon: String,
    pub high_c: i32,
    pub low_c: i32,
    pub condition: String,
    /// Chance of precipitation, 0-100
    pub precipitation_pct: u8,
}

impl WeatherDay {
    /// "19°C/10°C"
    pub fn temperature_range(&self) -> String {
        format!("{}°C/{}°C", self.high_c, self.low_c)
    }
}

/// (icon, high, low, condition, precipitation %)
const MAY_AVERAGES: [(&str, i32, i32, &str, u8); 5] = [
    ("🌤️", 19, 10, "Partly Cloudy", 10),
    ("🌦️", 18, 11, "Light Showers", 30),
    ("☀️", 21, 12, "Sunny", 5),
    ("🌤️", 20, 11, "Partly Cloudy", 15),
    ("☀️", 22, 13, "Sunny", 5),
];

/// Outlook for a free-form date range such as "May 5-9, 2025".
pub fn forecast_for(dates: &str) -> Vec<WeatherDay> {
    if dates.to_lowercase().contains("may") {
        if let Some(days) = parse_range(dates) {
            return days;
        }
    }
    fallback_forecast()
}

/// Five generic days labelled "Day 1" to "Day 5".
pub fn fallback_forecast() -> Vec<WeatherDay> {
    MAY_AVERAGES
        .iter()
        .enumerate()
        .map(|(i, row)| day_from_row(format!("Day {}", i + 1), row))
        .collect()
}

fn parse_range(dates: &str) -> Option<Vec<WeatherDay>> {
    let (head, tail) = dates.split_once('-')?;

    let mut head_tokens = head.split_whitespace();
    let month = head_tokens.next()?;
    let start_day: u32 = head_tokens.last()?.parse().ok()?;

    let mut tail_tokens = tail.split_whitespace();
    let end_day: u32 = tail_tokens.next()?.trim_end_matches(',').parse().ok()?;
    let year = tail_tokens.last()?;

    if end_day < start_day {
        return None;
    }

    let days = (start_day..=end_day)
        .zip(MAY_AVERAGES.iter())
        .map(|(day, row)| day_from_row(format!("{} {}, {}", month, day, year), row))
        .collect();
    Some(days)
}

fn day_from_row(date: String, row: &(&str, i32, i32, &str, u8)) -> WeatherDay {
    let (icon, high_c, low_c, condition, precipitation_pct) = *row;
    WeatherDay {
        date,
        icon: icon.to_string(),
        high_c,
        low_c,
        condition: condition.to_string(),
        precipitation_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_may_range_gets_dated_rows() {
        let days = forecast_for("May 5-7, 2025");
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, "May 5, 2025");
        assert_eq!(days[2].date, "May 7, 2025");
        assert_eq!(days[1].condition, "Light Showers");
        assert_eq!(days[0].temperature_range(), "19°C/10°C");
    }

    #[test]
    fn test_long_may_range_is_capped_at_table_length() {
        let days = forecast_for("May 1-20 2025");
        assert_eq!(days.len(), 5);
        assert_eq!(days[4].date, "May 5, 2025");
    }

    #[test]
    fn test_other_months_use_fallback() {
        let days = forecast_for("August 5-9, 2025");
        assert_eq!(days.len(), 5);
        assert_eq!(days[0].date, "Day 1");
        assert_eq!(days[4].date, "Day 5");
    }

    #[test]
    fn test_unparseable_may_text_uses_fallback() {
        assert_eq!(forecast_for("sometime in May"), fallback_forecast());
    }

    #[test]
    fn test_inverted_range_gets_outlook_not_empty_list() {
        let days = forecast_for("May 9-5, 2025");
        assert_eq!(days.len(), 5);
        assert_eq!(days, fallback_forecast());
    }

    #[test]
    fn test_comma_after_end_day_is_tolerated() {
        let days = forecast_for("May 5-9, 2025");
        assert_eq!(days.len(), 5);
        assert_eq!(days[4].date, "May 9, 2025");
    }
}
