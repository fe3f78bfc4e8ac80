use std::rc::Rc;

use api::StudentRecord;
use dioxus::prelude::*;

use super::metrics;
use super::decor::Bunting;
use super::parts::{DeltaBadge, SlideFooter, SlideHeading};
use super::{SlideCtx, SlideKey};
use crate::core::animation::{use_tween, Easing};
use crate::core::format::{self, Change, NumberStyle, Trend};
use crate::i18n;
use crate::session::ReportMode;
use crate::share::{CardLine, ShareCard};
use crate::t;

fn days(count: u32, style: NumberStyle) -> String {
    t!("unit-days", count = format::number(count, style))
}

fn streak_change(record: &StudentRecord) -> Option<(u32, Change)> {
    record.last_quarter.as_ref().map(|lq| {
        let last = lq.streak.longest;
        (last, Change::between(record.streak.longest as f64, last as f64))
    })
}

fn trend_key(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Same => "same",
    }
}

pub(super) fn card(ctx: SlideCtx<'_>) -> ShareCard {
    let longest = ctx.record.streak.longest;
    let mut lines = vec![CardLine::new(t!("stat-streak"), days(longest, ctx.style))];
    let mut footer = t!("streak-footer", level = ctx.level());
    if ctx.mode == ReportMode::Quarterly {
        if let Some((last, change)) = streak_change(ctx.record) {
            lines.push(CardLine::new(t!("streak-last-quarter"), days(last, ctx.style)));
            footer = t!("streak-trend", trend = trend_key(change.trend));
        }
    }
    ctx.card(
        SlideKey::Streak,
        t!("streak-header", mode = ctx.mode.segment()),
        lines,
        footer,
    )
}

#[component]
pub(super) fn StreakSlide(record: Rc<StudentRecord>, mode: ReportMode) -> Element {
    let style = i18n::number_style();
    let longest = record.streak.longest;
    let boxes = metrics::streak_window(longest);
    let target = if longest == 0 { 0.0 } else { boxes.len() as f64 };
    let active = use_tween(target, 120.0 * boxes.len() as f64, Easing::Linear);
    let change = streak_change(&record).filter(|_| mode == ReportMode::Quarterly);
    let last_index = boxes.len().saturating_sub(1);

    rsx! {
        div { class: "slide-card slide-card--streak fade-in",
            Bunting {}
            SlideHeading { title: t!("streak-header", mode = mode.segment()) }
            div { class: "streak-boxes",
                for (idx, day) in boxes.iter().enumerate() {
                    {
                        let state = if longest == 0 {
                            "streak-box--empty"
                        } else if idx == last_index {
                            "streak-box--next"
                        } else if (idx as f64) < active() {
                            "streak-box--done"
                        } else {
                            "streak-box--pending"
                        };
                        rsx! {
                            span { key: "{idx}", class: "streak-box {state}",
                                {format::number(*day, style)}
                            }
                        }
                    }
                }
            }
            div { class: "streak__total",
                span { class: "streak__label", {t!("stat-streak")} }
                span { class: "streak__value", {days(longest, style)} }
            }
            if let Some((last, change)) = change {
                div { class: "streak__compare",
                    span { {t!("streak-last-quarter")} " " {days(last, style)} }
                    DeltaBadge { change, style, unit: String::new() }
                    p { class: "streak__trend", {t!("streak-trend", trend = trend_key(change.trend))} }
                }
            } else {
                SlideFooter { text: t!("streak-footer", level = record.engagement_level.as_str()) }
            }
        }
    }
}
