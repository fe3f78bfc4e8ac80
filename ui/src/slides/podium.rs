use std::rc::Rc;

use api::record::SubjectScore;
use api::StudentRecord;
use dioxus::prelude::*;

use super::parts::{SlideFooter, SlideHeading};
use super::{SlideCtx, SlideKey};
use crate::core::format::{self, NumberStyle};
use crate::i18n;
use crate::share::{CardLine, ShareCard};
use crate::t;

/// Best three subjects, highest score first.
fn top_three(record: &StudentRecord) -> Vec<SubjectScore> {
    let mut subjects = record.top_subjects.clone();
    subjects.sort_by(|a, b| b.score.total_cmp(&a.score));
    subjects.truncate(3);
    subjects
}

/// Podium display order: second, first, third.
fn podium_order(len: usize) -> Vec<usize> {
    match len {
        0 => vec![],
        1 => vec![0],
        2 => vec![1, 0],
        _ => vec![1, 0, 2],
    }
}

pub(super) fn card(ctx: SlideCtx<'_>) -> ShareCard {
    let mut lines: Vec<CardLine> = top_three(ctx.record)
        .iter()
        .enumerate()
        .map(|(idx, subject)| {
            CardLine::new(
                format!("{}. {}", format::number(idx + 1, ctx.style), subject.name),
                format::percent(subject.score, ctx.style),
            )
        })
        .collect();
    if lines.is_empty() {
        lines.push(CardLine::new(
            t!("stat-attendance"),
            format::percent(ctx.record.attendance.percent, ctx.style),
        ));
    }
    ctx.card(SlideKey::Podium, t!("podium-header"), lines, t!("podium-footer"))
}

#[component]
pub(super) fn PodiumSlide(record: Rc<StudentRecord>) -> Element {
    let style = i18n::number_style();
    let subjects = top_three(&record);

    rsx! {
        div { class: "slide-card slide-card--podium fade-in",
            SlideHeading { title: t!("podium-header") }
            if subjects.is_empty() {
                p { class: "podium__empty", {t!("podium-empty")} }
            } else {
                div { class: "podium",
                    for idx in podium_order(subjects.len()) {
                        PodiumStep {
                            key: "{idx}",
                            place: idx + 1,
                            subject: subjects[idx].clone(),
                            style,
                        }
                    }
                }
            }
            SlideFooter { text: t!("podium-footer") }
        }
    }
}

#[component]
fn PodiumStep(place: usize, subject: SubjectScore, style: NumberStyle) -> Element {
    rsx! {
        div { class: "podium__step podium__step--{place}",
            span { class: "podium__subject", "{subject.name}" }
            span { class: "podium__score", {format::percent(subject.score, style)} }
            div { class: "podium__block",
                span { class: "podium__place", {format::number(place, style)} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::seed::seed_records;

    #[test]
    fn podium_puts_the_winner_in_the_middle() {
        assert_eq!(podium_order(3), vec![1, 0, 2]);
        assert_eq!(podium_order(2), vec![1, 0]);
        assert!(podium_order(0).is_empty());
    }

    #[test]
    fn top_three_is_sorted_and_capped() {
        let mut record = seed_records()[0].clone();
        record.top_subjects.push(SubjectScore {
            name: "Extra".into(),
            score: 1.0,
        });
        let top = top_three(&record);
        assert!(top.len() <= 3);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(top.iter().all(|s| s.name != "Extra"));
    }
}
