use std::rc::Rc;

use api::StudentRecord;
use dioxus::prelude::*;

use super::metrics::{self, BAR_MIN_PX};
use super::parts::{SlideFooter, SlideHeading};
use super::{SlideCtx, SlideKey};
use crate::core::animation::{stagger, use_tween, Easing};
use crate::core::format;
use crate::i18n;
use crate::share::{CardLine, ShareCard};
use crate::t;

const DAY_IDS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];
const BAR_MS: f64 = 250.0;

fn day_name(idx: usize) -> String {
    t!("weekday-name", day = DAY_IDS[idx % 7])
}

fn busiest_line(record: &StudentRecord, style: format::NumberStyle) -> String {
    let best = metrics::busiest_day(&record.day_of_week);
    t!(
        "weekday-busiest",
        day = day_name(best),
        value = format::percent(record.day_of_week[best], style)
    )
}

pub(super) fn card(ctx: SlideCtx<'_>) -> ShareCard {
    let lines = ctx
        .record
        .day_of_week
        .iter()
        .enumerate()
        .map(|(idx, share)| CardLine::new(day_name(idx), format::percent(*share, ctx.style)))
        .collect();
    ctx.card(
        SlideKey::Weekday,
        t!("weekday-header"),
        lines,
        busiest_line(ctx.record, ctx.style),
    )
}

#[component]
pub(super) fn WeekdaySlide(record: Rc<StudentRecord>) -> Element {
    let style = i18n::number_style();
    let shares = record.day_of_week;
    let heights = metrics::weekday_bar_heights(&shares);
    let best = metrics::busiest_day(&shares);
    let progress = use_tween(7.0, BAR_MS * 7.0, Easing::Linear);

    rsx! {
        div { class: "slide-card slide-card--weekday fade-in",
            SlideHeading { title: t!("weekday-header") }
            div { class: "bar-chart bar-chart--week",
                for idx in 0..7usize {
                    {
                        let grown = Easing::EaseOutCubic.apply(stagger(progress(), idx));
                        let height = (BAR_MIN_PX + (heights[idx] - BAR_MIN_PX) * grown).round();
                        let modifier = if idx == best { " bar-chart__bar--peak" } else { "" };
                        rsx! {
                            div { key: "{idx}", class: "bar-chart__column",
                                div {
                                    class: "bar-chart__bar{modifier}",
                                    style: "height: {height}px",
                                }
                                span { class: "bar-chart__label", {day_name(idx)} }
                            }
                        }
                    }
                }
            }
            p { class: "weekday__busiest", {busiest_line(&record, style)} }
            SlideFooter { text: t!("weekday-footer", level = record.engagement_level.as_str()) }
        }
    }
}
