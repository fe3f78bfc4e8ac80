//! Formatting helpers for presenting metrics.
//!
//! Everything that produces digits takes a [`NumberStyle`] so the same
//! helpers serve the Bengali and the English copy. Units (days, hours) are
//! left to the translation files.

use std::fmt::Display;

const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

const BENGALI_ORDINALS: [&str; 10] = [
    "প্রথম",
    "দ্বিতীয়",
    "তৃতীয়",
    "চতুর্থ",
    "পঞ্চম",
    "ষষ্ঠ",
    "সপ্তম",
    "অষ্টম",
    "নবম",
    "দশম",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    #[default]
    Bengali,
    Latin,
}

/// Replace ASCII digits with the style's digits, leaving everything else alone.
pub fn localize_digits(text: &str, style: NumberStyle) -> String {
    match style {
        NumberStyle::Latin => text.to_string(),
        NumberStyle::Bengali => text
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => BENGALI_DIGITS[d as usize],
                _ => c,
            })
            .collect(),
    }
}

pub fn to_bengali_numeral(value: impl Display) -> String {
    localize_digits(&value.to_string(), NumberStyle::Bengali)
}

pub fn number(value: impl Display, style: NumberStyle) -> String {
    localize_digits(&value.to_string(), style)
}

/// Rounded percentage, e.g. `৯৫%`.
pub fn percent(value: f64, style: NumberStyle) -> String {
    format!("{}%", number(value.round() as i64, style))
}

/// `৯৩ / ১০০`
pub fn score_of(current: impl Display, total: impl Display, style: NumberStyle) -> String {
    format!("{} / {}", number(current, style), number(total, style))
}

/// Bengali ordinal: words for 1..=10, otherwise digits with a `-তম` suffix.
pub fn bengali_ordinal(n: u32) -> String {
    match n {
        1..=10 => BENGALI_ORDINALS[(n - 1) as usize].to_string(),
        _ => format!("{}-তম", to_bengali_numeral(n)),
    }
}

pub fn english_ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

pub fn ordinal(n: u32, style: NumberStyle) -> String {
    match style {
        NumberStyle::Bengali => bengali_ordinal(n),
        NumberStyle::Latin => english_ordinal(n),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Same,
}

impl Trend {
    pub fn of(delta: i64) -> Self {
        match delta.signum() {
            1 => Self::Up,
            -1 => Self::Down,
            _ => Self::Same,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "⬆︎",
            Self::Down => "⬇︎",
            Self::Same => "—",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Up => "trend--up",
            Self::Down => "trend--down",
            Self::Same => "trend--same",
        }
    }
}

/// Absolute change with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub magnitude: u64,
    pub trend: Trend,
}

impl Change {
    pub fn between(current: f64, previous: f64) -> Self {
        let delta = (current - previous).round() as i64;
        Self {
            magnitude: delta.unsigned_abs(),
            trend: Trend::of(delta),
        }
    }

    /// Change between two `"HH:MM"` durations in whole hours.
    pub fn in_hours(current_hm: &str, previous_hm: &str) -> Self {
        let minutes = api::record::parse_hm(current_hm) as i64 - api::record::parse_hm(previous_hm) as i64;
        let hours = (minutes as f64 / 60.0).round() as i64;
        Self {
            magnitude: hours.unsigned_abs(),
            trend: Trend::of(hours),
        }
    }

    /// `⬆︎ ৭` (unit appended by the caller's copy).
    pub fn label(&self, style: NumberStyle) -> String {
        format!("{} {}", self.trend.arrow(), number(self.magnitude, style))
    }
}

/// Signed percent such as `+৪%` or `-১৩%`.
pub fn signed_percent(delta_pct: i64, style: NumberStyle) -> String {
    let sign = match delta_pct.signum() {
        1 => "+",
        -1 => "-",
        _ => "",
    };
    format!("{sign}{}%", number(delta_pct.unsigned_abs(), style))
}

/// `৪৮:৩০`
pub fn format_hm(total_minutes: u32, style: NumberStyle) -> String {
    localize_digits(&api::record::format_hm(total_minutes), style)
}

/// Whole hours of an `"HH:MM"` duration, rounded half up.
pub fn rounded_hours(hm: &str) -> u32 {
    (api::record::parse_hm(hm) + 30) / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bengali_digits_replace_ascii_only() {
        assert_eq!(to_bengali_numeral(2025), "২০২৫");
        assert_eq!(localize_digits("48:30 mins", NumberStyle::Bengali), "৪৮:৩০ mins");
        assert_eq!(localize_digits("48:30", NumberStyle::Latin), "48:30");
    }

    #[test]
    fn bengali_ordinals_cover_words_and_suffix() {
        assert_eq!(bengali_ordinal(1), "প্রথম");
        assert_eq!(bengali_ordinal(10), "দশম");
        assert_eq!(bengali_ordinal(11), "১১-তম");
        assert_eq!(bengali_ordinal(100), "১০০-তম");
        assert_eq!(bengali_ordinal(500), "৫০০-তম");
    }

    #[test]
    fn english_ordinals_handle_teens() {
        assert_eq!(english_ordinal(1), "1st");
        assert_eq!(english_ordinal(2), "2nd");
        assert_eq!(english_ordinal(3), "3rd");
        assert_eq!(english_ordinal(11), "11th");
        assert_eq!(english_ordinal(112), "112th");
        assert_eq!(english_ordinal(100), "100th");
    }

    #[test]
    fn change_reports_direction_and_magnitude() {
        let up = Change::between(95.0, 88.0);
        assert_eq!(up, Change { magnitude: 7, trend: Trend::Up });
        assert_eq!(up.label(NumberStyle::Bengali), "⬆︎ ৭");
        assert_eq!(Change::between(40.0, 40.2).trend, Trend::Same);
        assert_eq!(Change::between(2.0, 5.0).label(NumberStyle::Latin), "⬇︎ 3");
    }

    #[test]
    fn hour_change_rounds_minutes() {
        let change = Change::in_hours("48:30", "35:20");
        assert_eq!(change, Change { magnitude: 13, trend: Trend::Up });
        assert_eq!(Change::in_hours("20:15", "15:30").magnitude, 5);
    }

    #[test]
    fn signed_percent_keeps_sign() {
        assert_eq!(signed_percent(4, NumberStyle::Latin), "+4%");
        assert_eq!(signed_percent(-13, NumberStyle::Bengali), "-১৩%");
        assert_eq!(signed_percent(0, NumberStyle::Latin), "0%");
        assert_eq!(signed_percent(8000, NumberStyle::Latin), "+8000%");
    }

    #[test]
    fn hm_and_hours() {
        assert_eq!(format_hm(2910, NumberStyle::Bengali), "৪৮:৩০");
        assert_eq!(rounded_hours("48:30"), 49);
        assert_eq!(rounded_hours("20:15"), 20);
        assert_eq!(percent(94.6, NumberStyle::Bengali), "৯৫%");
    }
}
