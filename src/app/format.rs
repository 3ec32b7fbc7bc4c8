use chrono::NaiveDate;
use ratatui::style::Color;

/// `$2.5M` / `$1.5K` with one decimal, halves rounding up; plain dollars below 1,000.
pub fn format_currency(value: u64) -> String {
    if value >= 1_000_000 {
        abbreviate(value, 1_000_000, 'M')
    } else if value >= 1_000 {
        abbreviate(value, 1_000, 'K')
    } else {
        format!("${}", group_thousands(value))
    }
}

fn abbreviate(value: u64, unit: u64, suffix: char) -> String {
    let step = unit / 10;
    let tenths = value.saturating_add(step / 2) / step;
    format!("${}.{}{suffix}", tenths / 10, tenths % 10)
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// TMDB dates are `YYYY-MM-DD`; empty strings show up for unreleased titles.
pub fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

pub fn format_date(raw: Option<&str>) -> String {
    match parse_release_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => "Unknown".to_string(),
    }
}

pub fn trailer_url(key: &str) -> String {
    format!("https://www.youtube.com/watch?v={key}")
}

/// Color band for the vote badge, lower bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTier {
    LightBlue,
    Green,
    Yellow,
    Red,
}

impl VoteTier {
    pub fn from_average(vote_average: f64) -> Self {
        if vote_average >= 9.0 {
            VoteTier::LightBlue
        } else if vote_average >= 8.0 {
            VoteTier::Green
        } else if vote_average >= 5.0 {
            VoteTier::Yellow
        } else {
            VoteTier::Red
        }
    }

    pub fn color(self) -> Color {
        match self {
            VoteTier::LightBlue => Color::LightBlue,
            VoteTier::Green => Color::LightGreen,
            VoteTier::Yellow => Color::Yellow,
            VoteTier::Red => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_abbreviates_millions_and_thousands() {
        assert_eq!(format_currency(2_500_000), "$2.5M");
        assert_eq!(format_currency(63_000_000), "$63.0M");
        assert_eq!(format_currency(1_500), "$1.5K");
        assert_eq!(format_currency(1_000), "$1.0K");
        assert_eq!(format_currency(1_040_000), "$1.0M");
        assert_eq!(format_currency(999_999), "$1000.0K");
        assert_eq!(format_currency(500), "$500");
        assert_eq!(format_currency(0), "$0");
    }

    #[test]
    fn currency_halves_round_up() {
        let shown: Vec<String> = [2_250_000, 1_250, 8_750_000, 12_250_000, 1_150_000]
            .into_iter()
            .map(format_currency)
            .collect();
        assert_eq!(shown, ["$2.3M", "$1.3K", "$8.8M", "$12.3M", "$1.2M"]);
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(26_280), "26,280");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn vote_tiers_have_inclusive_lower_bounds() {
        assert_eq!(VoteTier::from_average(9.2), VoteTier::LightBlue);
        assert_eq!(VoteTier::from_average(9.0), VoteTier::LightBlue);
        assert_eq!(VoteTier::from_average(8.0), VoteTier::Green);
        assert_eq!(VoteTier::from_average(8.9), VoteTier::Green);
        assert_eq!(VoteTier::from_average(5.0), VoteTier::Yellow);
        assert_eq!(VoteTier::from_average(4.9), VoteTier::Red);
        assert_eq!(VoteTier::from_average(0.0), VoteTier::Red);
    }

    #[test]
    fn dates_are_localized_or_unknown() {
        assert_eq!(format_date(Some("1999-10-15")), "10/15/1999");
        assert_eq!(format_date(Some("")), "Unknown");
        assert_eq!(format_date(None), "Unknown");
    }
}
