//! Student engagement record and its metric groups.
//!
//! Field names serialize in camelCase so the same types decode the remote
//! envelope and back the seed data.

use serde::{Deserialize, Serialize};

use crate::score::EngagementLevel;

/// Lookup key for a record: `(studentId, programId)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub student_id: String,
    pub program_id: String,
}

impl RecordKey {
    pub fn new(student_id: impl Into<String>, program_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            program_id: program_id.into(),
        }
    }

    pub fn matches(&self, record: &StudentRecord) -> bool {
        record.id == self.student_id && record.program_id == self.program_id
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.student_id, self.program_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    #[serde(rename = "academicProgramId", alias = "programId")]
    pub program_id: String,
    pub name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub section: String,
    pub attendance: Attendance,
    pub quiz: Quiz,
    pub live_tests: LiveTests,
    pub streak: Streak,
    pub study_time: StudyTime,
    /// Share of activity per weekday, Sunday first. Sums to 100.
    pub day_of_week: [f64; 7],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_attendance: Option<YearlyAttendance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_study_time: Option<YearlyStudyTime>,
    pub final_score: u8,
    pub engagement_level: EngagementLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_quarter: Option<LastQuarter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_subjects: Vec<SubjectScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub percent: f64,
    pub total: u32,
    pub attended: u32,
    pub missed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub completed: u32,
    pub correct_answers: u32,
    pub total_questions: u32,
}

impl Quiz {
    /// Correct-answer ratio scaled to 0..=100. Zero questions yields 0.
    pub fn correct_percent(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        let ratio = self.correct_answers as f64 / self.total_questions as f64;
        (ratio * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveTests {
    pub total: u32,
    pub completed: u32,
    pub avg_score: f64,
    /// Free-form duration such as `"38 mins"`.
    pub avg_time: String,
}

impl LiveTests {
    pub fn completion_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Leading minute count of `avg_time`, if any.
    pub fn avg_minutes(&self) -> Option<u32> {
        let digits: String = self
            .avg_time
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    pub longest: u32,
}

/// Study time per month of the quarter, each as an `"HH:MM"` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyTime {
    pub total: String,
    pub october: String,
    pub november: String,
    pub december: String,
}

impl StudyTime {
    pub fn total_minutes(&self) -> u32 {
        parse_hm(&self.total)
    }

    pub fn monthly_minutes(&self) -> [u32; 3] {
        [
            parse_hm(&self.october),
            parse_hm(&self.november),
            parse_hm(&self.december),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyAttendance {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
}

impl YearlyAttendance {
    pub fn quarters(&self) -> [f64; 4] {
        [self.q1, self.q2, self.q3, self.q4]
    }
}

/// Study hours per quarter as labels such as `"42h"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyStudyTime {
    pub q1: String,
    pub q2: String,
    pub q3: String,
    pub q4: String,
    pub total_hours: String,
}

impl YearlyStudyTime {
    pub fn quarter_hours(&self) -> [u32; 4] {
        [
            parse_hours_label(&self.q1),
            parse_hours_label(&self.q2),
            parse_hours_label(&self.q3),
            parse_hours_label(&self.q4),
        ]
    }

    pub fn total(&self) -> u32 {
        parse_hours_label(&self.total_hours)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentOnly {
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvgScoreOnly {
    pub avg_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalOnly {
    pub total: String,
}

/// Previous-quarter snapshot used for deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastQuarter {
    pub attendance: PercentOnly,
    pub live_tests: AvgScoreOnly,
    pub streak: Streak,
    pub study_time: TotalOnly,
    pub final_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    pub name: String,
    pub score: f64,
}

/// Parse an `"HH:MM"` duration into minutes. Unparsable input counts as 0.
pub fn parse_hm(value: &str) -> u32 {
    let mut parts = value.trim().splitn(2, ':');
    let hours = parts.next().and_then(|h| h.trim().parse::<u32>().ok());
    let minutes = match parts.next() {
        Some(m) => m.trim().parse::<u32>().ok(),
        None => Some(0),
    };
    match (hours, minutes) {
        (Some(h), Some(m)) if m < 60 => h.saturating_mul(60).saturating_add(m),
        _ => 0,
    }
}

/// Digits of an hours label such as `"205h"`. No digits yields 0.
pub fn parse_hours_label(value: &str) -> u32 {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Render minutes back into `"H:MM"`.
pub fn format_hm(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

impl StudentRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.id.clone(), self.program_id.clone())
    }

    pub fn total_study_hours(&self) -> f64 {
        self.study_time.total_minutes() as f64 / 60.0
    }

    /// Human-readable list of broken data invariants. Empty when the record is sound.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let att = &self.attendance;
        if att.attended + att.missed != att.total {
            problems.push(format!(
                "attendance: attended {} + missed {} != total {}",
                att.attended, att.missed, att.total
            ));
        }
        if !(0.0..=100.0).contains(&att.percent) {
            problems.push(format!("attendance percent {} out of range", att.percent));
        }
        let dow_sum: f64 = self.day_of_week.iter().sum();
        if (dow_sum - 100.0).abs() > 0.1 {
            problems.push(format!("dayOfWeek sums to {dow_sum:.2}"));
        }
        if self.final_score > 100 {
            problems.push(format!("finalScore {} out of range", self.final_score));
        }
        let expected = EngagementLevel::from_score(self.final_score);
        if self.engagement_level != expected {
            problems.push(format!(
                "engagementLevel {:?} does not match score {} ({:?})",
                self.engagement_level, self.final_score, expected
            ));
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hm_handles_common_shapes() {
        assert_eq!(parse_hm("60:00"), 3600);
        assert_eq!(parse_hm("48:30"), 2910);
        assert_eq!(parse_hm("5:00"), 300);
        assert_eq!(parse_hm(" 7:15 "), 435);
        assert_eq!(parse_hm("12"), 720);
    }

    #[test]
    fn parse_hm_rejects_garbage() {
        assert_eq!(parse_hm(""), 0);
        assert_eq!(parse_hm("ab:cd"), 0);
        assert_eq!(parse_hm("3:75"), 0);
    }

    #[test]
    fn parse_hm_saturates_huge_hours() {
        assert_eq!(parse_hm("4000000000:30"), u32::MAX);
    }

    #[test]
    fn hours_label_keeps_digits_only() {
        assert_eq!(parse_hours_label("205h"), 205);
        assert_eq!(parse_hours_label("h"), 0);
    }

    #[test]
    fn format_hm_pads_minutes() {
        assert_eq!(format_hm(2910), "48:30");
        assert_eq!(format_hm(65), "1:05");
    }

    #[test]
    fn quiz_ratio_with_no_questions_is_zero() {
        let quiz = Quiz {
            completed: 3,
            correct_answers: 10,
            total_questions: 0,
        };
        assert_eq!(quiz.correct_percent(), 0.0);
    }

    #[test]
    fn avg_minutes_reads_leading_number() {
        let live = LiveTests {
            total: 10,
            completed: 8,
            avg_score: 65.0,
            avg_time: "45 mins".into(),
        };
        assert_eq!(live.avg_minutes(), Some(45));
        assert_eq!(live.completion_percent(), 80.0);
    }

    #[test]
    fn decodes_camel_case_json() {
        let json = r#"{
            "id": "7",
            "academicProgramId": "A3",
            "name": "Test",
            "class": "Class 9",
            "section": "Science",
            "engagementLevel": "moderate",
            "attendance": {"percent": 50, "total": 10, "attended": 5, "missed": 5},
            "quiz": {"completed": 1, "correctAnswers": 2, "totalQuestions": 4},
            "liveTests": {"total": 2, "completed": 1, "avgScore": 50, "avgTime": "20 mins"},
            "streak": {"longest": 3},
            "studyTime": {"total": "10:00", "october": "3:00", "november": "3:00", "december": "4:00"},
            "finalScore": 45,
            "dayOfWeek": [10, 10, 20, 20, 20, 10, 10]
        }"#;
        let record: StudentRecord = serde_json::from_str(json).expect("decodes");
        assert_eq!(record.program_id, "A3");
        assert_eq!(record.class_name, "Class 9");
        assert_eq!(record.engagement_level, EngagementLevel::Moderate);
        assert!(record.last_quarter.is_none());
        assert!(record.top_subjects.is_empty());
        assert!(record.invariant_violations().is_empty());
    }
}
