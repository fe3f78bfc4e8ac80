use std::rc::Rc;

use api::StudentRecord;
use dioxus::prelude::*;

use super::decor::Confetti;
use super::parts::{SlideFooter, SlideHeading, StatTile};
use super::{SlideCtx, SlideKey};
use crate::core::format;
use crate::i18n;
use crate::session::ReportMode;
use crate::share::{CardLine, ShareCard};
use crate::t;

struct Stats {
    attendance: String,
    quiz: String,
    streak: String,
}

fn stats(ctx: SlideCtx<'_>) -> Stats {
    let record = ctx.record;
    Stats {
        attendance: format::percent(record.attendance.percent, ctx.style),
        quiz: format::percent(record.quiz.correct_percent(), ctx.style),
        streak: t!("unit-days", count = format::number(record.streak.longest, ctx.style)),
    }
}

pub(super) fn card(ctx: SlideCtx<'_>) -> ShareCard {
    let stats = stats(ctx);
    ctx.card(
        SlideKey::Welcome,
        t!("welcome-header", mode = ctx.mode.segment()),
        vec![
            CardLine::new(t!("stat-attendance"), stats.attendance),
            CardLine::new(t!("stat-quiz"), stats.quiz),
            CardLine::new(t!("stat-streak"), stats.streak),
        ],
        t!("welcome-footer", level = ctx.level()),
    )
}

#[component]
pub(super) fn WelcomeSlide(record: Rc<StudentRecord>, mode: ReportMode) -> Element {
    let ctx = SlideCtx {
        record: &record,
        mode,
        style: i18n::number_style(),
    };
    let stats = stats(ctx);

    rsx! {
        div { class: "slide-card slide-card--welcome fade-in",
            Confetti {}
            SlideHeading { title: t!("welcome-header", mode = mode.segment()) }
            div { class: "welcome__avatar", aria_hidden: "true", "🎓" }
            h2 { class: "welcome__name", "{record.name}" }
            div { class: "stat-row",
                StatTile { value: stats.attendance, label: t!("stat-attendance"), tone: "pink" }
                StatTile { value: stats.quiz, label: t!("stat-quiz"), tone: "blue" }
                StatTile { value: stats.streak, label: t!("stat-streak"), tone: "yellow" }
            }
            SlideFooter { text: t!("welcome-footer", level = ctx.level()) }
            p { class: "welcome__class",
                {t!("welcome-class-line", class = record.class_name.clone(), section = record.section.clone())}
            }
        }
    }
}
