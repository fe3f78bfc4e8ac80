//! Demo records available at startup.

use crate::record::{
    Attendance, AvgScoreOnly, LastQuarter, LiveTests, PercentOnly, Quiz, Streak, StudentRecord,
    StudyTime, SubjectScore, TotalOnly, YearlyAttendance, YearlyStudyTime,
};
use crate::score::{compute_final_score, EngagementLevel, ScoreInputs};

/// Fill in `final_score` and `engagement_level` from the metric groups.
pub fn with_derived_score(mut record: StudentRecord) -> StudentRecord {
    let score = compute_final_score(&ScoreInputs::from_record(&record));
    record.final_score = score;
    record.engagement_level = EngagementLevel::from_score(score);
    record
}

fn subjects(scores: &[(&str, f64)]) -> Vec<SubjectScore> {
    scores
        .iter()
        .map(|(name, score)| SubjectScore {
            name: name.to_string(),
            score: *score,
        })
        .collect()
}

fn last_quarter(attendance: f64, live: f64, streak: u32, study: &str, score: u8) -> LastQuarter {
    LastQuarter {
        attendance: PercentOnly {
            percent: attendance,
        },
        live_tests: AvgScoreOnly { avg_score: live },
        streak: Streak { longest: streak },
        study_time: TotalOnly {
            total: study.to_string(),
        },
        final_score: score,
    }
}

pub fn seed_records() -> Vec<StudentRecord> {
    vec![
        with_derived_score(StudentRecord {
            id: "1937".into(),
            program_id: "A1".into(),
            name: "তাসনিম হাসান".into(),
            class_name: "ক্লাস ৯".into(),
            section: "বিজ্ঞান বিভাগ".into(),
            attendance: Attendance {
                percent: 95.0,
                total: 40,
                attended: 38,
                missed: 2,
            },
            quiz: Quiz {
                completed: 40,
                correct_answers: 110,
                total_questions: 130,
            },
            live_tests: LiveTests {
                total: 12,
                completed: 12,
                avg_score: 85.0,
                avg_time: "38 mins".into(),
            },
            streak: Streak { longest: 200 },
            study_time: StudyTime {
                total: "60:00".into(),
                october: "18:00".into(),
                november: "20:00".into(),
                december: "22:00".into(),
            },
            day_of_week: [12.34, 13.45, 14.56, 10.12, 18.43, 16.10, 15.00],
            yearly_attendance: Some(YearlyAttendance {
                q1: 88.0,
                q2: 92.0,
                q3: 96.0,
                q4: 95.0,
            }),
            yearly_study_time: Some(YearlyStudyTime {
                q1: "42h".into(),
                q2: "55h".into(),
                q3: "60h".into(),
                q4: "48h".into(),
                total_hours: "205h".into(),
            }),
            final_score: 0,
            engagement_level: EngagementLevel::Low,
            last_quarter: Some(last_quarter(88.0, 78.0, 9, "45:00", 89)),
            top_subjects: subjects(&[
                ("পদার্থবিজ্ঞান", 94.0),
                ("গণিত", 91.0),
                ("রসায়ন", 88.0),
            ]),
        }),
        with_derived_score(StudentRecord {
            id: "4821".into(),
            program_id: "A2".into(),
            name: "রাফি আক্তার".into(),
            class_name: "ক্লাস ১০".into(),
            section: "বিজ্ঞান বিভাগ".into(),
            attendance: Attendance {
                percent: 83.0,
                total: 36,
                attended: 30,
                missed: 6,
            },
            quiz: Quiz {
                completed: 36,
                correct_answers: 89,
                total_questions: 120,
            },
            live_tests: LiveTests {
                total: 10,
                completed: 8,
                avg_score: 65.0,
                avg_time: "45 mins".into(),
            },
            streak: Streak { longest: 6 },
            study_time: StudyTime {
                total: "48:30".into(),
                october: "12:45".into(),
                november: "15:30".into(),
                december: "20:05".into(),
            },
            day_of_week: [10.0, 12.0, 28.0, 5.0, 18.0, 17.0, 10.0],
            yearly_attendance: Some(YearlyAttendance {
                q1: 78.0,
                q2: 82.0,
                q3: 85.0,
                q4: 83.0,
            }),
            yearly_study_time: None,
            final_score: 0,
            engagement_level: EngagementLevel::Low,
            last_quarter: Some(last_quarter(83.0, 72.0, 6, "35:20", 76)),
            top_subjects: subjects(&[("গণিত", 78.0), ("ইংরেজি", 74.0), ("জীববিজ্ঞান", 70.0)]),
        }),
        with_derived_score(StudentRecord {
            id: "5704".into(),
            program_id: "A1".into(),
            name: "মাহি রহমান".into(),
            class_name: "ক্লাস ৮".into(),
            section: "বিজ্ঞান বিভাগ".into(),
            attendance: Attendance {
                percent: 60.0,
                total: 30,
                attended: 18,
                missed: 12,
            },
            quiz: Quiz {
                completed: 20,
                correct_answers: 50,
                total_questions: 100,
            },
            live_tests: LiveTests {
                total: 8,
                completed: 4,
                avg_score: 45.0,
                avg_time: "55 mins".into(),
            },
            streak: Streak { longest: 2 },
            study_time: StudyTime {
                total: "20:15".into(),
                october: "5:00".into(),
                november: "7:15".into(),
                december: "8:00".into(),
            },
            day_of_week: [8.0, 12.0, 15.0, 20.0, 18.0, 17.0, 10.0],
            yearly_attendance: Some(YearlyAttendance {
                q1: 55.0,
                q2: 60.0,
                q3: 62.0,
                q4: 60.0,
            }),
            yearly_study_time: None,
            final_score: 0,
            engagement_level: EngagementLevel::Low,
            last_quarter: Some(last_quarter(65.0, 40.0, 5, "15:30", 45)),
            top_subjects: subjects(&[("বাংলা", 61.0), ("গণিত", 52.0)]),
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_records_satisfy_invariants() {
        for record in seed_records() {
            let problems = record.invariant_violations();
            assert!(problems.is_empty(), "{}: {problems:?}", record.id);
            let att = record.attendance;
            assert_eq!(att.attended + att.missed, att.total);
            let sum: f64 = record.day_of_week.iter().sum();
            assert!((sum - 100.0).abs() <= 0.1, "{} sums to {sum}", record.id);
        }
    }

    #[test]
    fn seed_scores_span_all_tiers() {
        let levels: Vec<(u8, EngagementLevel)> = seed_records()
            .iter()
            .map(|r| (r.final_score, r.engagement_level))
            .collect();
        assert_eq!(
            levels,
            vec![
                (93, EngagementLevel::High),
                (62, EngagementLevel::Moderate),
                (39, EngagementLevel::Low),
            ]
        );
    }
}
