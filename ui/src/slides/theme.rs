//! Background gradient per slide and engagement tier.

use api::EngagementLevel;

use super::route::SlideKey;

/// Two-stop gradient, top-left to bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: &'static str,
    pub end: &'static str,
}

impl Gradient {
    const fn new(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }

    pub fn css(&self) -> String {
        format!("linear-gradient(160deg, {} 0%, {} 100%)", self.start, self.end)
    }
}

pub fn gradient(slide: SlideKey, level: EngagementLevel) -> Gradient {
    use EngagementLevel::*;
    use SlideKey::*;

    match (slide, level) {
        (Welcome, _) => Gradient::new("#1f2a6b", "#4a2ca0"),
        (Class, High) => Gradient::new("#0f6b5c", "#1fb89a"),
        (Class, Moderate) => Gradient::new("#1d4e89", "#3d8bd9"),
        (Class, Low) => Gradient::new("#6b2c3e", "#c2566f"),
        (LiveTest, High) => Gradient::new("#2a3f9e", "#5b7bf0"),
        (LiveTest, Moderate) => Gradient::new("#3b3486", "#7766d6"),
        (LiveTest, Low) => Gradient::new("#6a3a1d", "#cf7a3a"),
        (Podium, _) => Gradient::new("#523080", "#d35c9b"),
        (Weekday, High) => Gradient::new("#135d7a", "#2bb3d6"),
        (Weekday, Moderate) => Gradient::new("#25507a", "#4f8fc9"),
        (Weekday, Low) => Gradient::new("#4a3a6b", "#8c6cc4"),
        (Streak, High) => Gradient::new("#8a2b0f", "#f0771d"),
        (Streak, Moderate) => Gradient::new("#7a4a12", "#d99a2b"),
        (Streak, Low) => Gradient::new("#5a3a2a", "#a9745a"),
        (StudyTime, High) => Gradient::new("#104a3a", "#2fa37c"),
        (StudyTime, Moderate) => Gradient::new("#1d3f5e", "#3f86a8"),
        (StudyTime, Low) => Gradient::new("#43355e", "#7b62a3"),
        (Final, High) => Gradient::new("#6b4a0f", "#f2b632"),
        (Final, Moderate) => Gradient::new("#24326e", "#5a6fd6"),
        (Final, Low) => Gradient::new("#3a2f55", "#7a5fa8"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slide_and_tier_has_a_gradient() {
        for slide in SlideKey::ALL {
            for level in [EngagementLevel::High, EngagementLevel::Moderate, EngagementLevel::Low] {
                let g = gradient(slide, level);
                assert!(g.start.starts_with('#') && g.end.starts_with('#'));
            }
        }
        assert_eq!(
            gradient(SlideKey::Welcome, EngagementLevel::Low).css(),
            "linear-gradient(160deg, #1f2a6b 0%, #4a2ca0 100%)"
        );
    }
}
