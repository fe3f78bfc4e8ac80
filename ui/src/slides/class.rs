use std::f64::consts::PI;
use std::rc::Rc;

use api::StudentRecord;
use dioxus::prelude::*;

use super::metrics;
use super::decor::Bunting;
use super::parts::{SlideFooter, SlideHeading, StatTile};
use super::{SlideCtx, SlideKey};
use crate::core::animation::{stagger, use_tween, Easing};
use crate::core::format::{self, Change, NumberStyle, Trend};
use crate::i18n;
use crate::session::ReportMode;
use crate::share::{CardLine, ShareCard};
use crate::t;

const RING_SIZE: f64 = 160.0;
const RING_STROKE: f64 = 14.0;
const CHART_HEIGHT_PX: f64 = 140.0;

fn delta_line(record: &StudentRecord, style: NumberStyle) -> Option<String> {
    let (current, previous) = metrics::attendance_change(record)?;
    let change = Change::between(current, previous);
    let trend = match change.trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Same => "same",
    };
    Some(t!(
        "class-delta",
        trend = trend,
        value = format::number(change.magnitude, style)
    ))
}

pub(super) fn card(ctx: SlideCtx<'_>) -> ShareCard {
    let record = ctx.record;
    let mut lines = Vec::new();
    match ctx.mode {
        ReportMode::Yearly => {
            let quarters = metrics::yearly_attendance(record);
            for (idx, value) in quarters.iter().enumerate() {
                lines.push(CardLine::new(
                    t!("quarter-label", n = format::number(idx + 1, ctx.style)),
                    format::percent(*value, ctx.style),
                ));
            }
            lines.push(CardLine::new(
                t!("class-yearly-average"),
                format::percent(metrics::average(&quarters), ctx.style),
            ));
        }
        ReportMode::Quarterly => {
            lines.push(CardLine::new(
                t!("stat-attendance"),
                format::percent(record.attendance.percent, ctx.style),
            ));
            lines.push(CardLine::new(
                t!("class-total"),
                format::number(record.attendance.total, ctx.style),
            ));
            lines.push(CardLine::new(
                t!("class-attended"),
                format::number(record.attendance.attended, ctx.style),
            ));
            lines.push(CardLine::new(
                t!("class-missed"),
                format::number(record.attendance.missed, ctx.style),
            ));
        }
    }
    let footer = delta_line(record, ctx.style)
        .filter(|_| ctx.mode == ReportMode::Quarterly)
        .unwrap_or_else(|| t!("class-footer", level = ctx.level()));
    ctx.card(SlideKey::Class, t!("class-header", mode = ctx.mode.segment()), lines, footer)
}

#[component]
pub(super) fn ClassSlide(record: Rc<StudentRecord>, mode: ReportMode) -> Element {
    let style = i18n::number_style();
    let level = record.engagement_level.as_str();

    rsx! {
        div { class: "slide-card slide-card--class fade-in",
            Bunting {}
            SlideHeading { title: t!("class-header", mode = mode.segment()) }
            match mode {
                ReportMode::Quarterly => rsx! { QuarterAttendance { record: record.clone(), style } },
                ReportMode::Yearly => rsx! { YearAttendance { record: record.clone(), style } },
            }
            SlideFooter { text: t!("class-footer", level = level) }
        }
    }
}

#[component]
fn QuarterAttendance(record: Rc<StudentRecord>, style: NumberStyle) -> Element {
    let target = record.attendance.percent.clamp(0.0, 100.0);
    let shown = use_tween(target, 1_000.0, Easing::EaseInQuad);

    let radius = (RING_SIZE - RING_STROKE) / 2.0;
    let circumference = 2.0 * PI * radius;
    let offset = circumference * (1.0 - shown() / 100.0);
    let center = RING_SIZE / 2.0;
    let label = format::percent(shown(), style);
    let delta = delta_line(&record, style);

    rsx! {
        div { class: "ring",
            svg {
                width: "{RING_SIZE}",
                height: "{RING_SIZE}",
                view_box: "0 0 {RING_SIZE} {RING_SIZE}",
                circle {
                    class: "ring__track",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{radius}",
                    stroke_width: "{RING_STROKE}",
                    fill: "none",
                }
                circle {
                    class: "ring__value",
                    cx: "{center}",
                    cy: "{center}",
                    r: "{radius}",
                    stroke_width: "{RING_STROKE}",
                    fill: "none",
                    stroke_dasharray: "{circumference}",
                    stroke_dashoffset: "{offset}",
                    transform: "rotate(-90 {center} {center})",
                }
            }
            span { class: "ring__label", "{label}" }
        }
        div { class: "stat-row",
            StatTile {
                value: format::number(record.attendance.total, style),
                label: t!("class-total"),
                tone: "blue",
            }
            StatTile {
                value: format::number(record.attendance.attended, style),
                label: t!("class-attended"),
                tone: "pink",
            }
            StatTile {
                value: format::number(record.attendance.missed, style),
                label: t!("class-missed"),
                tone: "red",
            }
        }
        if let Some(delta) = delta {
            p { class: "class__delta", "{delta}" }
        }
    }
}

#[component]
fn YearAttendance(record: Rc<StudentRecord>, style: NumberStyle) -> Element {
    let quarters = metrics::yearly_attendance(&record);
    let progress = use_tween(quarters.len() as f64, 2_400.0, Easing::Linear);
    let average = format::percent(metrics::average(&quarters), style);

    rsx! {
        div { class: "bar-chart bar-chart--quarters",
            for (idx, value) in quarters.iter().enumerate() {
                {
                    let grown = Easing::EaseOutExpo.apply(stagger(progress(), idx));
                    let height = (value.clamp(0.0, 100.0) / 100.0 * CHART_HEIGHT_PX * grown).round();
                    rsx! {
                        div { key: "{idx}", class: "bar-chart__column",
                            span { class: "bar-chart__value", {format::percent(*value, style)} }
                            div { class: "bar-chart__bar", style: "height: {height}px" }
                            span { class: "bar-chart__label",
                                {t!("quarter-label", n = format::number(idx + 1, style))}
                            }
                        }
                    }
                }
            }
        }
        div { class: "class__average",
            span { class: "class__average-label", {t!("class-yearly-average")} }
            span { class: "class__average-value", "{average}" }
        }
    }
}
