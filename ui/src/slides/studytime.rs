use std::f64::consts::PI;
use std::rc::Rc;

use api::StudentRecord;
use dioxus::prelude::*;

use super::metrics;
use super::parts::{DeltaBadge, SlideFooter, SlideHeading};
use super::{SlideCtx, SlideKey};
use crate::core::animation::{stagger, use_tween, Easing};
use crate::core::format::{self, Change, NumberStyle};
use crate::i18n;
use crate::session::ReportMode;
use crate::share::{CardLine, ShareCard};
use crate::t;

const MONTH_IDS: [&str; 3] = ["oct", "nov", "dec"];
const MONTH_TONES: [&str; 3] = ["pink", "blue", "yellow"];
const DONUT_RADIUS: f64 = 60.0;
const DONUT_STROKE: f64 = 22.0;

fn hours(count: u32, style: NumberStyle) -> String {
    t!("unit-hours", count = format::number(count, style))
}

fn month_name(idx: usize) -> String {
    t!("month-name", month = MONTH_IDS[idx % 3])
}

fn hours_change(record: &StudentRecord) -> Option<Change> {
    record
        .last_quarter
        .as_ref()
        .map(|lq| Change::in_hours(&record.study_time.total, &lq.study_time.total))
}

pub(super) fn card(ctx: SlideCtx<'_>) -> ShareCard {
    let record = ctx.record;
    let roadmap = metrics::study_roadmap(record).filter(|_| ctx.mode == ReportMode::Yearly);
    let lines = match roadmap {
        Some((quarters, total)) => {
            let mut lines: Vec<CardLine> = quarters
                .iter()
                .enumerate()
                .map(|(idx, h)| {
                    CardLine::new(
                        t!("quarter-label", n = format::number(idx + 1, ctx.style)),
                        hours(*h, ctx.style),
                    )
                })
                .collect();
            lines.push(CardLine::new(t!("studytime-yearly-total"), hours(total, ctx.style)));
            lines
        }
        None => {
            let mut lines = vec![CardLine::new(
                t!("studytime-total"),
                format::format_hm(record.study_time.total_minutes(), ctx.style),
            )];
            for (idx, minutes) in record.study_time.monthly_minutes().iter().enumerate() {
                lines.push(CardLine::new(month_name(idx), format::format_hm(*minutes, ctx.style)));
            }
            lines
        }
    };
    ctx.card(
        SlideKey::StudyTime,
        t!("studytime-header", mode = ctx.mode.segment()),
        lines,
        t!("studytime-footer", level = ctx.level()),
    )
}

#[component]
pub(super) fn StudyTimeSlide(record: Rc<StudentRecord>, mode: ReportMode) -> Element {
    let style = i18n::number_style();
    let roadmap = metrics::study_roadmap(&record).filter(|_| mode == ReportMode::Yearly);

    rsx! {
        div { class: "slide-card slide-card--studytime fade-in",
            SlideHeading { title: t!("studytime-header", mode = mode.segment()) }
            match roadmap {
                Some((quarters, total)) => rsx! { Roadmap { quarters, total, style } },
                None => rsx! { MonthDonut { record: record.clone(), style, show_delta: mode == ReportMode::Quarterly } },
            }
            SlideFooter { text: t!("studytime-footer", level = record.engagement_level.as_str()) }
        }
    }
}

#[component]
fn MonthDonut(record: Rc<StudentRecord>, style: NumberStyle, show_delta: bool) -> Element {
    let months = record.study_time.monthly_minutes();
    let segments = metrics::donut_segments(&months);
    let sweep = use_tween(1.0, 1_200.0, Easing::EaseOutCubic);
    let circumference = 2.0 * PI * DONUT_RADIUS;
    let size = (DONUT_RADIUS + DONUT_STROKE) * 2.0;
    let center = size / 2.0;
    let total = format::format_hm(record.study_time.total_minutes(), style);
    let change = hours_change(&record).filter(|_| show_delta);

    rsx! {
        div { class: "donut",
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",
                for (idx, segment) in segments.iter().enumerate() {
                    {
                        let length = segment.length * sweep() * circumference;
                        let gap = circumference - length;
                        let offset = -segment.start * sweep() * circumference;
                        let tone = MONTH_TONES[idx % 3];
                        rsx! {
                            circle {
                                key: "{idx}",
                                class: "donut__segment donut__segment--{tone}",
                                cx: "{center}",
                                cy: "{center}",
                                r: "{DONUT_RADIUS}",
                                fill: "none",
                                stroke_width: "{DONUT_STROKE}",
                                stroke_dasharray: "{length} {gap}",
                                stroke_dashoffset: "{offset}",
                                transform: "rotate(-90 {center} {center})",
                            }
                        }
                    }
                }
            }
            div { class: "donut__center",
                span { class: "donut__value", "{total}" }
                span { class: "donut__label", {t!("studytime-total")} }
            }
        }
        ul { class: "legend",
            for (idx, minutes) in months.iter().enumerate() {
                {
                    let tone = MONTH_TONES[idx % 3];
                    rsx! {
                        li { key: "{idx}", class: "legend__item",
                            span { class: "legend__swatch legend__swatch--{tone}" }
                            span { class: "legend__label", {month_name(idx)} }
                            span { class: "legend__value", {format::format_hm(*minutes, style)} }
                        }
                    }
                }
            }
        }
        if let Some(change) = change {
            div { class: "studytime__delta",
                span { {t!("studytime-vs-last")} }
                DeltaBadge { change, style, unit: format!(" {}", t!("unit-hours-short")) }
            }
        }
    }
}

#[component]
fn Roadmap(quarters: [u32; 4], total: u32, style: NumberStyle) -> Element {
    let progress = use_tween(4.0, 2_000.0, Easing::Linear);

    rsx! {
        ol { class: "roadmap",
            for (idx, h) in quarters.iter().enumerate() {
                {
                    let reached = stagger(progress(), idx) >= 1.0;
                    let modifier = if reached { " roadmap__stop--reached" } else { "" };
                    rsx! {
                        li { key: "{idx}", class: "roadmap__stop{modifier}",
                            span { class: "roadmap__quarter",
                                {t!("quarter-label", n = format::number(idx + 1, style))}
                            }
                            span { class: "roadmap__hours", {hours(*h, style)} }
                        }
                    }
                }
            }
        }
        div { class: "roadmap__total",
            span { {t!("studytime-yearly-total")} }
            strong { {hours(total, style)} }
        }
    }
}
