use std::rc::Rc;

use api::StudentRecord;
use dioxus::prelude::*;

use super::parts::{DeltaBadge, SlideFooter, SlideHeading, StatTile};
use super::{SlideCtx, SlideKey};
use crate::core::animation::{use_tween, Easing};
use crate::core::format::{self, Change, NumberStyle};
use crate::i18n;
use crate::session::ReportMode;
use crate::share::{CardLine, ShareCard};
use crate::t;

fn avg_time(record: &StudentRecord, style: NumberStyle) -> String {
    match record.live_tests.avg_minutes() {
        Some(minutes) => t!("unit-minutes", count = format::number(minutes, style)),
        None => format::localize_digits(&record.live_tests.avg_time, style),
    }
}

fn score_change(record: &StudentRecord) -> Option<Change> {
    record
        .last_quarter
        .as_ref()
        .map(|lq| Change::between(record.live_tests.avg_score, lq.live_tests.avg_score))
}

pub(super) fn card(ctx: SlideCtx<'_>) -> ShareCard {
    let tests = &ctx.record.live_tests;
    let mut lines = vec![
        CardLine::new(
            t!("livetest-completed"),
            format::score_of(tests.completed, tests.total, ctx.style),
        ),
        CardLine::new(t!("livetest-avg-score"), format::percent(tests.avg_score, ctx.style)),
        CardLine::new(t!("livetest-avg-time"), avg_time(ctx.record, ctx.style)),
    ];
    if ctx.mode == ReportMode::Quarterly {
        if let Some(change) = score_change(ctx.record) {
            lines.push(CardLine::new(t!("livetest-vs-last"), change.label(ctx.style)));
        }
    }
    ctx.card(
        SlideKey::LiveTest,
        t!("livetest-header", mode = ctx.mode.segment()),
        lines,
        t!("livetest-footer", level = ctx.level()),
    )
}

#[component]
pub(super) fn LiveTestSlide(record: Rc<StudentRecord>, mode: ReportMode) -> Element {
    let style = i18n::number_style();
    let tests = &record.live_tests;
    let completion = use_tween(tests.completion_percent(), 900.0, Easing::EaseOutCubic);
    let change = score_change(&record).filter(|_| mode == ReportMode::Quarterly);
    let width = format!("{:.1}", completion());

    rsx! {
        div { class: "slide-card slide-card--livetest fade-in",
            SlideHeading {
                title: t!("livetest-header", mode = mode.segment()),
                subtitle: t!("livetest-completed"),
            }
            div { class: "progress",
                div { class: "progress__fill", style: "width: {width}%" }
                span { class: "progress__label",
                    {format::score_of(tests.completed, tests.total, style)}
                }
            }
            div { class: "stat-row",
                StatTile {
                    value: format::percent(tests.avg_score, style),
                    label: t!("livetest-avg-score"),
                    tone: "pink",
                }
                StatTile {
                    value: avg_time(&record, style),
                    label: t!("livetest-avg-time"),
                    tone: "blue",
                }
            }
            if let Some(change) = change {
                div { class: "livetest__delta",
                    span { {t!("livetest-vs-last")} }
                    DeltaBadge { change, style, unit: "%".to_string() }
                }
            }
            SlideFooter { text: t!("livetest-footer", level = record.engagement_level.as_str()) }
        }
    }
}
