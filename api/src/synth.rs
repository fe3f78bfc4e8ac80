//! Random demo records whose invariants hold by construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::record::{
    format_hm, Attendance, AvgScoreOnly, LastQuarter, LiveTests, PercentOnly, Quiz, Streak,
    StudentRecord, StudyTime, SubjectScore, TotalOnly, YearlyAttendance, YearlyStudyTime,
};
use crate::score::EngagementLevel;
use crate::seed::with_derived_score;

const NAMES: &[&str] = &[
    "তাসনিম হাসান",
    "রাফি আক্তার",
    "মাহি রহমান",
    "নাদিয়া ইসলাম",
    "আরিফ চৌধুরী",
];
const CLASSES: &[&str] = &["ক্লাস ৮", "ক্লাস ৯", "ক্লাস ১০"];
const SECTIONS: &[&str] = &["বিজ্ঞান বিভাগ", "মানবিক বিভাগ", "বাণিজ্য বিভাগ"];
const SUBJECTS: &[&str] = &[
    "পদার্থবিজ্ঞান",
    "রসায়ন",
    "গণিত",
    "জীববিজ্ঞান",
    "ইংরেজি",
    "বাংলা",
];
pub const PROGRAM_IDS: &[&str] = &["A1", "A2", "A3"];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// Seven weekday shares rounded to two decimals; the last absorbs rounding so
/// the total is exactly 100.
pub fn day_of_week_shares<R: Rng + ?Sized>(rng: &mut R) -> [f64; 7] {
    let weights: Vec<f64> = (0..7).map(|_| rng.gen_range(0.05..1.0)).collect();
    let sum: f64 = weights.iter().sum();
    let mut shares = [0.0; 7];
    for (slot, weight) in shares.iter_mut().zip(&weights).take(6) {
        *slot = (weight / sum * 10_000.0).round() / 100.0;
    }
    let head: f64 = shares[..6].iter().sum();
    shares[6] = ((100.0 - head) * 100.0).round() / 100.0;
    shares
}

/// Build a random record with the given id. Score and tier are derived.
pub fn synthesize<R: Rng + ?Sized>(rng: &mut R, id: String) -> StudentRecord {
    let total_classes = rng.gen_range(20..=50);
    let attended = rng.gen_range(0..=total_classes);
    let percent = (attended as f64 / total_classes as f64 * 100.0).round();

    let total_questions = rng.gen_range(10..=50);
    let correct_answers = rng.gen_range(0..=total_questions);

    let live_total = rng.gen_range(3..=15);
    let live_completed = rng.gen_range(0..=live_total);
    let avg_score = rng.gen_range(0..=100) as f64;

    let monthly: [u32; 3] = [
        rng.gen_range(0..=20 * 60),
        rng.gen_range(0..=20 * 60),
        rng.gen_range(0..=20 * 60),
    ];
    let total_minutes: u32 = monthly.iter().sum();

    let yearly_attendance = YearlyAttendance {
        q1: (percent + rng.gen_range(-10.0..=10.0)).clamp(0.0, 100.0).round(),
        q2: (percent + rng.gen_range(-10.0..=10.0)).clamp(0.0, 100.0).round(),
        q3: (percent + rng.gen_range(-10.0..=10.0)).clamp(0.0, 100.0).round(),
        q4: percent,
    };
    let quarter_hours: [u32; 4] = [
        rng.gen_range(0..=60),
        rng.gen_range(0..=60),
        rng.gen_range(0..=60),
        (total_minutes + 30) / 60,
    ];
    let yearly_study_time = YearlyStudyTime {
        q1: format!("{}h", quarter_hours[0]),
        q2: format!("{}h", quarter_hours[1]),
        q3: format!("{}h", quarter_hours[2]),
        q4: format!("{}h", quarter_hours[3]),
        total_hours: format!("{}h", quarter_hours.iter().sum::<u32>()),
    };

    let mut subject_pool: Vec<&str> = SUBJECTS.to_vec();
    subject_pool.shuffle(rng);
    let mut top_subjects: Vec<SubjectScore> = subject_pool
        .into_iter()
        .take(3)
        .map(|name| SubjectScore {
            name: name.to_string(),
            score: rng.gen_range(30..=100) as f64,
        })
        .collect();
    top_subjects.sort_by(|a, b| b.score.total_cmp(&a.score));

    let record = StudentRecord {
        id,
        program_id: pick(rng, PROGRAM_IDS).to_string(),
        name: pick(rng, NAMES).to_string(),
        class_name: pick(rng, CLASSES).to_string(),
        section: pick(rng, SECTIONS).to_string(),
        attendance: Attendance {
            percent,
            total: total_classes,
            attended,
            missed: total_classes - attended,
        },
        quiz: Quiz {
            completed: rng.gen_range(0..=total_questions),
            correct_answers,
            total_questions,
        },
        live_tests: LiveTests {
            total: live_total,
            completed: live_completed,
            avg_score,
            avg_time: format!("{} mins", rng.gen_range(20..=60)),
        },
        streak: Streak {
            longest: rng.gen_range(0..=30),
        },
        study_time: StudyTime {
            total: format_hm(total_minutes),
            october: format_hm(monthly[0]),
            november: format_hm(monthly[1]),
            december: format_hm(monthly[2]),
        },
        day_of_week: day_of_week_shares(rng),
        yearly_attendance: Some(yearly_attendance),
        yearly_study_time: Some(yearly_study_time),
        final_score: 0,
        engagement_level: EngagementLevel::Low,
        last_quarter: None,
        top_subjects,
    };
    let mut record = with_derived_score(record);

    let previous_minutes = rng.gen_range(0..=total_minutes.max(60) + 600);
    record.last_quarter = Some(LastQuarter {
        attendance: PercentOnly {
            percent: yearly_attendance.q3,
        },
        live_tests: AvgScoreOnly {
            avg_score: rng.gen_range(0..=100) as f64,
        },
        streak: Streak {
            longest: rng.gen_range(0..=30),
        },
        study_time: TotalOnly {
            total: format_hm(previous_minutes),
        },
        final_score: rng.gen_range(0..=100),
    });
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn synthetic_records_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..200 {
            let record = synthesize(&mut rng, n.to_string());
            let problems = record.invariant_violations();
            assert!(problems.is_empty(), "record {n}: {problems:?}");
            assert!(PROGRAM_IDS.contains(&record.program_id.as_str()));
            assert!(record.last_quarter.is_some());
            assert_eq!(record.top_subjects.len(), 3);
        }
    }

    #[test]
    fn weekday_shares_sum_to_one_hundred() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let shares = day_of_week_shares(&mut rng);
            let sum: f64 = shares.iter().sum();
            assert!((sum - 100.0).abs() < 0.05, "sum {sum}");
            assert!(shares.iter().all(|s| *s >= 0.0));
        }
    }
}
