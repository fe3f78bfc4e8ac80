//! The slide deck: routing table, per-slide views and their share cards.

pub mod metrics;
pub mod route;
pub mod theme;

mod class;
mod decor;
mod finale;
mod livetest;
mod parts;
mod podium;
mod streak;
mod studytime;
mod weekday;
mod welcome;

use std::rc::Rc;

use api::StudentRecord;
use dioxus::prelude::*;

use crate::components::slide_frame::SlideFrame;
use crate::core::format::NumberStyle;
use crate::i18n;
use crate::session::ReportMode;
use crate::share::ShareCard;

pub use route::{SlideAddress, SlideKey};

/// Everything a slide needs to render itself.
#[derive(Clone, Copy)]
pub(crate) struct SlideCtx<'a> {
    pub record: &'a StudentRecord,
    pub mode: ReportMode,
    pub style: NumberStyle,
}

impl<'a> SlideCtx<'a> {
    fn level(&self) -> &'static str {
        self.record.engagement_level.as_str()
    }

    fn card(&self, slide: SlideKey, title: String, lines: Vec<crate::share::CardLine>, footer: String) -> ShareCard {
        ShareCard {
            title,
            subtitle: self.record.name.clone(),
            lines,
            footer,
            gradient: theme::gradient(slide, self.record.engagement_level),
        }
    }
}

/// Plain-data summary of a slide for headless capture.
pub fn share_card(slide: SlideKey, record: &StudentRecord, mode: ReportMode, style: NumberStyle) -> ShareCard {
    let ctx = SlideCtx { record, mode, style };
    match slide {
        SlideKey::Welcome => welcome::card(ctx),
        SlideKey::Class => class::card(ctx),
        SlideKey::LiveTest => livetest::card(ctx),
        SlideKey::Podium => podium::card(ctx),
        SlideKey::Weekday => weekday::card(ctx),
        SlideKey::Streak => streak::card(ctx),
        SlideKey::StudyTime => studytime::card(ctx),
        SlideKey::Final => finale::card(ctx),
    }
}

/// One slide inside its frame.
#[component]
pub fn SlideView(address: SlideAddress, record: Rc<StudentRecord>) -> Element {
    let style = i18n::number_style();
    let mode = address.mode;
    let card = share_card(address.slide, &record, mode, style);

    let body = match address.slide {
        SlideKey::Welcome => rsx! { welcome::WelcomeSlide { record: record.clone(), mode } },
        SlideKey::Class => rsx! { class::ClassSlide { record: record.clone(), mode } },
        SlideKey::LiveTest => rsx! { livetest::LiveTestSlide { record: record.clone(), mode } },
        SlideKey::Podium => rsx! { podium::PodiumSlide { record: record.clone() } },
        SlideKey::Weekday => rsx! { weekday::WeekdaySlide { record: record.clone() } },
        SlideKey::Streak => rsx! { streak::StreakSlide { record: record.clone(), mode } },
        SlideKey::StudyTime => rsx! { studytime::StudyTimeSlide { record: record.clone(), mode } },
        SlideKey::Final => rsx! { finale::FinalSlide { record: record.clone(), mode } },
    };

    rsx! {
        SlideFrame {
            key: "{address.path()}",
            address: address.clone(),
            level: record.engagement_level,
            card,
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::seed::seed_records;

    #[test]
    fn every_slide_has_a_share_card() {
        i18n::init();
        for record in seed_records() {
            for mode in [ReportMode::Quarterly, ReportMode::Yearly] {
                for slide in route::track(mode) {
                    let card = share_card(slide, &record, mode, NumberStyle::Latin);
                    assert!(!card.title.is_empty(), "{slide} title");
                    assert!(!card.lines.is_empty(), "{slide} lines");
                    assert_eq!(card.subtitle, record.name);
                    assert_eq!(card.gradient, theme::gradient(slide, record.engagement_level));
                }
            }
        }
    }

    #[test]
    fn latin_cards_carry_latin_digits() {
        i18n::init();
        let record = &seed_records()[0];
        let card = share_card(SlideKey::Final, record, ReportMode::Quarterly, NumberStyle::Latin);
        assert!(card.lines.iter().any(|l| l.value.contains("93")));
        let card = share_card(SlideKey::Final, record, ReportMode::Quarterly, NumberStyle::Bengali);
        assert!(card.lines.iter().any(|l| l.value.contains("৯৩")));
    }
}
