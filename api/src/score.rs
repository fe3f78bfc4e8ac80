//! Weighted engagement score and tier classification.
//!
//! Weights
//! -------
//! - attendance percent: 25%
//! - quiz correct ratio: 20%
//! - live-test average score: 20%
//! - longest streak, saturating at 30 days: 25%
//! - total study time, saturating at 60 hours: 10%
//!
//! All inputs are clamped into 0..=100 before weighting so the result always
//! lands in 0..=100.

use serde::{Deserialize, Serialize};

use crate::record::StudentRecord;

const STREAK_TARGET_DAYS: f64 = 30.0;
const STUDY_TARGET_HOURS: f64 = 60.0;

/// Raw inputs to the score formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    pub attendance_percent: f64,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub live_avg_score: f64,
    pub longest_streak: u32,
    pub total_study_hours: f64,
}

impl ScoreInputs {
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            attendance_percent: record.attendance.percent,
            correct_answers: record.quiz.correct_answers,
            total_questions: record.quiz.total_questions,
            live_avg_score: record.live_tests.avg_score,
            longest_streak: record.streak.longest,
            total_study_hours: record.total_study_hours(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    High,
    Moderate,
    Low,
}

impl EngagementLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Self::High,
            40..=69 => Self::Moderate,
            _ => Self::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

fn pct(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub fn compute_final_score(inputs: &ScoreInputs) -> u8 {
    let quiz = if inputs.total_questions == 0 {
        0.0
    } else {
        inputs.correct_answers as f64 / inputs.total_questions as f64 * 100.0
    };
    let streak = (inputs.longest_streak as f64 / STREAK_TARGET_DAYS).min(1.0) * 100.0;
    let study = (inputs.total_study_hours.max(0.0) / STUDY_TARGET_HOURS).min(1.0) * 100.0;

    let weighted = pct(inputs.attendance_percent) * 0.25
        + pct(quiz) * 0.20
        + pct(inputs.live_avg_score) * 0.20
        + pct(streak) * 0.25
        + pct(study) * 0.10;

    weighted.round().clamp(0.0, 100.0) as u8
}

/// Score change against the previous quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    pub current: u8,
    pub last: u8,
    /// Signed percent change. Not clamped: a previous score of 0 divides by 1.
    pub delta_pct: i64,
}

pub fn compute_score_delta(current: i64, last: i64) -> ScoreDelta {
    let current = current.clamp(0, 100);
    let last = last.clamp(0, 100);
    let delta = (current - last) as f64 / last.max(1) as f64 * 100.0;
    ScoreDelta {
        current: current as u8,
        last: last as u8,
        delta_pct: delta.round() as i64,
    }
}

/// Delta of a record's score against its last-quarter snapshot (0 when absent).
pub fn record_score_delta(record: &StudentRecord) -> ScoreDelta {
    let last = record
        .last_quarter
        .as_ref()
        .map(|lq| lq.final_score as i64)
        .unwrap_or(0);
    compute_score_delta(record.final_score as i64, last)
}

/// Leaderboard position shown for a tier.
pub fn rank_for_level(level: EngagementLevel) -> u32 {
    match level {
        EngagementLevel::High => 1,
        EngagementLevel::Moderate => 100,
        EngagementLevel::Low => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ScoreInputs {
        ScoreInputs {
            attendance_percent: 95.0,
            correct_answers: 110,
            total_questions: 130,
            live_avg_score: 85.0,
            longest_streak: 200,
            total_study_hours: 60.0,
        }
    }

    #[test]
    fn weighted_score_matches_hand_computation() {
        // 23.75 + 16.92 + 17 + 25 + 10
        assert_eq!(compute_final_score(&inputs()), 93);
    }

    #[test]
    fn zero_questions_contribute_nothing() {
        let mut i = inputs();
        i.total_questions = 0;
        assert_eq!(compute_final_score(&i), 76);
    }

    #[test]
    fn out_of_range_inputs_stay_bounded() {
        let high = ScoreInputs {
            attendance_percent: 400.0,
            correct_answers: 900,
            total_questions: 10,
            live_avg_score: f64::INFINITY,
            longest_streak: u32::MAX,
            total_study_hours: 1e9,
        };
        assert_eq!(compute_final_score(&high), 80);

        let low = ScoreInputs {
            attendance_percent: -20.0,
            correct_answers: 0,
            total_questions: 10,
            live_avg_score: f64::NAN,
            longest_streak: 0,
            total_study_hours: -5.0,
        };
        assert_eq!(compute_final_score(&low), 0);
    }

    #[test]
    fn score_ceiling_is_one_hundred() {
        let perfect = ScoreInputs {
            attendance_percent: 100.0,
            correct_answers: 10,
            total_questions: 10,
            live_avg_score: 100.0,
            longest_streak: 30,
            total_study_hours: 60.0,
        };
        assert_eq!(compute_final_score(&perfect), 100);
    }

    #[test]
    fn classification_thresholds_are_exact() {
        assert_eq!(EngagementLevel::from_score(70), EngagementLevel::High);
        assert_eq!(EngagementLevel::from_score(69), EngagementLevel::Moderate);
        assert_eq!(EngagementLevel::from_score(40), EngagementLevel::Moderate);
        assert_eq!(EngagementLevel::from_score(39), EngagementLevel::Low);
        assert_eq!(EngagementLevel::from_score(0), EngagementLevel::Low);
        assert_eq!(EngagementLevel::from_score(100), EngagementLevel::High);
    }

    #[test]
    fn delta_from_zero_is_unclamped() {
        let delta = compute_score_delta(80, 0);
        assert_eq!(delta.delta_pct, 8000);
        assert_eq!(delta.last, 0);
    }

    #[test]
    fn delta_is_signed_and_rounded() {
        assert_eq!(compute_score_delta(93, 89).delta_pct, 4);
        assert_eq!(compute_score_delta(39, 45).delta_pct, -13);
        assert_eq!(compute_score_delta(150, -3).current, 100);
    }

    #[test]
    fn ranks_follow_tiers() {
        assert_eq!(rank_for_level(EngagementLevel::High), 1);
        assert_eq!(rank_for_level(EngagementLevel::Moderate), 100);
        assert_eq!(rank_for_level(EngagementLevel::Low), 500);
    }
}
