//! Slide order for both report modes, and URL resolution.
//!
//! Every prev/next edge is listed in [`transitions`]. Track order, dot
//! positions and redirects are all derived from that one table.
//!
//! ```text
//! quarterly: welcome → class → livetest → weekday → streak → studytime → final
//! yearly:    welcome → class → livetest → podium → weekday → streak → studytime → final
//! ```

use std::fmt;

use api::RecordKey;

use crate::session::ReportMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKey {
    Welcome,
    Class,
    LiveTest,
    Podium,
    Weekday,
    Streak,
    StudyTime,
    Final,
}

impl SlideKey {
    pub const ALL: [SlideKey; 8] = [
        SlideKey::Welcome,
        SlideKey::Class,
        SlideKey::LiveTest,
        SlideKey::Podium,
        SlideKey::Weekday,
        SlideKey::Streak,
        SlideKey::StudyTime,
        SlideKey::Final,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Class => "class",
            Self::LiveTest => "livetest",
            Self::Podium => "podium",
            Self::Weekday => "weekday",
            Self::Streak => "streak",
            Self::StudyTime => "studytime",
            Self::Final => "final",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|key| key.slug() == slug)
    }

    /// Whether the slide belongs to `mode`'s track.
    pub fn is_in(self, mode: ReportMode) -> bool {
        self != Self::Podium || mode == ReportMode::Yearly
    }
}

impl fmt::Display for SlideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edges {
    pub prev: Option<SlideKey>,
    pub next: Option<SlideKey>,
}

const fn edges(prev: Option<SlideKey>, next: Option<SlideKey>) -> Edges {
    Edges { prev, next }
}

/// Neighbours of `slide` in `mode`.
///
/// Podium is off the quarterly track; its quarterly edges are where a stray
/// podium URL sends the reader.
pub fn transitions(slide: SlideKey, mode: ReportMode) -> Edges {
    use ReportMode::{Quarterly, Yearly};
    use SlideKey::*;

    match (slide, mode) {
        (Welcome, _) => edges(None, Some(Class)),
        (Class, _) => edges(Some(Welcome), Some(LiveTest)),
        (LiveTest, Yearly) => edges(Some(Class), Some(Podium)),
        (LiveTest, Quarterly) => edges(Some(Class), Some(Weekday)),
        (Podium, Yearly) => edges(Some(LiveTest), Some(Weekday)),
        (Podium, Quarterly) => edges(Some(LiveTest), Some(Weekday)),
        (Weekday, Yearly) => edges(Some(Podium), Some(Streak)),
        (Weekday, Quarterly) => edges(Some(LiveTest), Some(Streak)),
        (Streak, _) => edges(Some(Weekday), Some(StudyTime)),
        (StudyTime, _) => edges(Some(Streak), Some(Final)),
        (Final, _) => edges(Some(StudyTime), None),
    }
}

/// Slides of `mode` in order, walked from welcome along `next` edges.
pub fn track(mode: ReportMode) -> Vec<SlideKey> {
    let mut slides = vec![SlideKey::Welcome];
    let mut cursor = SlideKey::Welcome;
    while let Some(next) = transitions(cursor, mode).next {
        if slides.contains(&next) {
            break;
        }
        slides.push(next);
        cursor = next;
    }
    slides
}

/// Zero-based position of `slide` within `mode`'s track, and the track length.
pub fn position(slide: SlideKey, mode: ReportMode) -> Option<(usize, usize)> {
    let slides = track(mode);
    slides
        .iter()
        .position(|s| *s == slide)
        .map(|idx| (idx, slides.len()))
}

/// A fully-qualified slide location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideAddress {
    pub key: RecordKey,
    pub mode: ReportMode,
    pub slide: SlideKey,
}

impl SlideAddress {
    pub fn new(key: RecordKey, mode: ReportMode, slide: SlideKey) -> Self {
        Self { key, mode, slide }
    }

    /// Welcome lives at the bare mode path; every other slide appends its slug.
    pub fn path(&self) -> String {
        let base = format!(
            "/{}/{}/{}",
            self.key.student_id, self.key.program_id, self.mode
        );
        match self.slide {
            SlideKey::Welcome => base,
            slide => format!("{base}/{slide}"),
        }
    }

    pub fn with_slide(&self, slide: SlideKey) -> Self {
        Self {
            slide,
            ..self.clone()
        }
    }

    pub fn prev(&self) -> Option<Self> {
        transitions(self.slide, self.mode)
            .prev
            .map(|slide| self.with_slide(slide))
    }

    pub fn next(&self) -> Option<Self> {
        transitions(self.slide, self.mode)
            .next
            .map(|slide| self.with_slide(slide))
    }
}

pub fn select_mode_path(key: &RecordKey) -> String {
    format!("/{}/{}/select-mode", key.student_id, key.program_id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Show(SlideAddress),
    /// The URL names a slide outside the mode's track.
    Redirect(SlideAddress),
    Invalid,
}

/// Decode URL segments into what to render. Pure, so resolving the same
/// segments twice gives the same answer.
pub fn resolve(
    student_id: &str,
    program_id: &str,
    mode_segment: &str,
    slide_segment: Option<&str>,
) -> Resolution {
    if student_id.trim().is_empty() || program_id.trim().is_empty() {
        return Resolution::Invalid;
    }
    let key = RecordKey::new(student_id, program_id);
    let mode = ReportMode::from_segment(mode_segment);
    let slide = match slide_segment {
        None => SlideKey::Welcome,
        Some(segment) => match SlideKey::from_slug(segment) {
            Some(slide) => slide,
            None => return Resolution::Invalid,
        },
    };

    let address = SlideAddress::new(key, mode, slide);
    if slide.is_in(mode) {
        Resolution::Show(address)
    } else {
        match transitions(slide, mode).next {
            Some(next) => Resolution::Redirect(address.with_slide(next)),
            None => Resolution::Invalid,
        }
    }
}
