//! Display values derived from a record, kept out of the components so they
//! can be tested without a renderer.

use api::StudentRecord;

pub const BAR_MIN_PX: f64 = 32.0;
pub const BAR_MAX_PX: f64 = 120.0;

/// Boxes shown on the streak slide.
pub const STREAK_WINDOW: u32 = 7;

/// Bar height per weekday, scaled so the busiest day is tallest.
pub fn weekday_bar_heights(shares: &[f64; 7]) -> [f64; 7] {
    let max = shares.iter().copied().fold(0.0_f64, f64::max);
    let mut heights = [BAR_MIN_PX; 7];
    if max <= 0.0 {
        return heights;
    }
    for (height, share) in heights.iter_mut().zip(shares) {
        *height = (BAR_MIN_PX + (BAR_MAX_PX - BAR_MIN_PX) * (share.max(0.0) / max)).round();
    }
    heights
}

/// Index of the busiest weekday, Sunday = 0. Ties go to the earlier day.
pub fn busiest_day(shares: &[f64; 7]) -> usize {
    let mut best = 0;
    for (idx, share) in shares.iter().enumerate() {
        if *share > shares[best] {
            best = idx;
        }
    }
    best
}

/// Day numbers for the streak boxes: the streak's last days followed by the
/// next day to win. A zero streak shows a single empty box.
pub fn streak_window(longest: u32) -> Vec<u32> {
    if longest == 0 {
        return vec![0];
    }
    let end = longest.saturating_add(1);
    let start = end.saturating_sub(STREAK_WINDOW - 1).max(1);
    (start..=end).collect()
}

/// Filled stars out of five.
pub fn stars(score: u8) -> u8 {
    (score / 20).min(5)
}

/// Attendance per quarter, repeating the current value when no history exists.
pub fn yearly_attendance(record: &StudentRecord) -> [f64; 4] {
    record
        .yearly_attendance
        .map(|y| y.quarters())
        .unwrap_or([record.attendance.percent; 4])
}

pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Study hours per quarter, or `None` when the record has no yearly data.
pub fn study_roadmap(record: &StudentRecord) -> Option<([u32; 4], u32)> {
    record.yearly_study_time.as_ref().map(|y| {
        let quarters = y.quarter_hours();
        let total = match y.total() {
            0 => quarters.iter().fold(0, |acc: u32, h| acc.saturating_add(*h)),
            total => total,
        };
        (quarters, total)
    })
}

/// A ring segment as fractions of the full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub length: f64,
}

/// Consecutive ring segments proportional to `parts`.
pub fn donut_segments(parts: &[u32]) -> Vec<Segment> {
    let total: u64 = parts.iter().map(|p| u64::from(*p)).sum();
    if total == 0 {
        return parts.iter().map(|_| Segment { start: 0.0, length: 0.0 }).collect();
    }
    let mut start = 0.0;
    parts
        .iter()
        .map(|part| {
            let length = *part as f64 / total as f64;
            let segment = Segment { start, length };
            start += length;
            segment
        })
        .collect()
}

/// Current quarter's attendance against the snapshot, if there is one.
pub fn attendance_change(record: &StudentRecord) -> Option<(f64, f64)> {
    record
        .last_quarter
        .as_ref()
        .map(|lq| (record.attendance.percent, lq.attendance.percent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::seed::seed_records;

    #[test]
    fn busiest_day_gets_the_tallest_bar() {
        let shares = [10.0, 20.0, 5.0, 25.0, 15.0, 15.0, 10.0];
        let heights = weekday_bar_heights(&shares);
        assert_eq!(busiest_day(&shares), 3);
        assert_eq!(heights[3], BAR_MAX_PX);
        assert_eq!(heights[2], (BAR_MIN_PX + 88.0 * 0.2).round());
        assert!(heights.iter().all(|h| (BAR_MIN_PX..=BAR_MAX_PX).contains(h)));
    }

    #[test]
    fn empty_week_keeps_minimum_bars() {
        assert_eq!(weekday_bar_heights(&[0.0; 7]), [BAR_MIN_PX; 7]);
    }

    #[test]
    fn streak_window_ends_on_next_day() {
        assert_eq!(streak_window(0), vec![0]);
        assert_eq!(streak_window(1), vec![1, 2]);
        assert_eq!(streak_window(15), vec![10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(streak_window(6).len(), 7);
    }

    #[test]
    fn stars_cap_at_five() {
        assert_eq!(stars(0), 0);
        assert_eq!(stars(39), 1);
        assert_eq!(stars(93), 4);
        assert_eq!(stars(100), 5);
    }

    #[test]
    fn yearly_views_fall_back_to_quarter_data() {
        let records = seed_records();
        let with_history = &records[0];
        assert!(study_roadmap(with_history).is_some());

        let mut bare = records[1].clone();
        bare.yearly_attendance = None;
        bare.yearly_study_time = None;
        assert_eq!(yearly_attendance(&bare), [bare.attendance.percent; 4]);
        assert_eq!(study_roadmap(&bare), None);
    }

    #[test]
    fn donut_segments_tile_the_circle() {
        let segments = donut_segments(&[60, 30, 30]);
        assert_eq!(segments[0], Segment { start: 0.0, length: 0.5 });
        assert_eq!(segments[2].start, 0.75);
        let total: f64 = segments.iter().map(|s| s.length).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(donut_segments(&[0, 0]).iter().all(|s| s.length == 0.0));
    }

    #[test]
    fn oversized_remote_values_saturate() {
        let window = streak_window(u32::MAX);
        assert_eq!(window.len(), STREAK_WINDOW as usize);
        assert_eq!(window.last(), Some(&u32::MAX));

        let mut record = seed_records().remove(0);
        record.yearly_study_time = Some(api::record::YearlyStudyTime {
            q1: "4000000000h".into(),
            q2: "4000000000h".into(),
            q3: "0h".into(),
            q4: "0h".into(),
            total_hours: "0h".into(),
        });
        let (quarters, total) = study_roadmap(&record).expect("yearly data");
        assert_eq!(quarters[0], 4_000_000_000);
        assert_eq!(total, u32::MAX);

        let segments = donut_segments(&[u32::MAX, u32::MAX]);
        assert_eq!(segments[1].start, 0.5);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[80.0, 90.0]), 85.0);
    }
}
