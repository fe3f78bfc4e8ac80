use std::rc::Rc;

use api::score::{rank_for_level, record_score_delta};
use api::StudentRecord;
use dioxus::prelude::*;

use super::metrics;
use super::decor::Confetti;
use super::parts::{SlideFooter, SlideHeading};
use super::{SlideCtx, SlideKey};
use crate::core::animation::{use_tween, Easing};
use crate::core::format::{self, NumberStyle, Trend};
use crate::i18n;
use crate::session::ReportMode;
use crate::share::{CardLine, ShareCard};
use crate::t;

fn rank_label(record: &StudentRecord, style: NumberStyle) -> String {
    let rank = format::ordinal(rank_for_level(record.engagement_level), style);
    t!("final-rank", rank = rank)
}

fn delta_label(record: &StudentRecord, style: NumberStyle) -> Option<String> {
    record.last_quarter.as_ref()?;
    let delta = record_score_delta(record);
    Some(t!(
        "final-delta",
        value = format::signed_percent(delta.delta_pct, style)
    ))
}

pub(super) fn card(ctx: SlideCtx<'_>) -> ShareCard {
    let record = ctx.record;
    let mut lines = vec![
        CardLine::new(
            t!("final-score-label"),
            format::score_of(record.final_score, 100, ctx.style),
        ),
        CardLine::new(t!("final-rank-label"), rank_label(record, ctx.style)),
    ];
    if ctx.mode == ReportMode::Quarterly {
        if let Some(delta) = delta_label(record, ctx.style) {
            lines.push(CardLine::new(t!("final-delta-label"), delta));
        }
    }
    ctx.card(
        SlideKey::Final,
        t!("final-header", mode = ctx.mode.segment()),
        lines,
        t!("final-footer", level = ctx.level()),
    )
}

#[component]
pub(super) fn FinalSlide(record: Rc<StudentRecord>, mode: ReportMode) -> Element {
    let style = i18n::number_style();
    let score = use_tween(record.final_score as f64, 1_500.0, Easing::EaseOutExpo);
    let filled = metrics::stars(record.final_score);
    let delta = record_score_delta(&record);
    let trend = Trend::of(delta.delta_pct).css_modifier();
    let delta_text = delta_label(&record, style).filter(|_| mode == ReportMode::Quarterly);
    let shown = format::score_of(score().round() as i64, 100, style);

    rsx! {
        div { class: "slide-card slide-card--final fade-in",
            Confetti {}
            SlideHeading { title: t!("final-header", mode = mode.segment()) }
            div { class: "stars", aria_label: "{filled}/5",
                for idx in 0..5u8 {
                    span {
                        key: "{idx}",
                        class: if idx < filled { "star star--filled" } else { "star" },
                        "★"
                    }
                }
            }
            div { class: "final__score",
                span { class: "final__score-value", "{shown}" }
                span { class: "final__score-label", {t!("final-score-label")} }
            }
            p { class: "final__rank", {rank_label(&record, style)} }
            if let Some(text) = delta_text {
                p { class: "final__delta {trend}", "{text}" }
            }
            SlideFooter { text: t!("final-footer", level = record.engagement_level.as_str()) }
        }
    }
}
