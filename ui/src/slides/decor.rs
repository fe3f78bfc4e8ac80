//! Celebration overlays: falling confetti on the welcome and final slides,
//! a string of bunting flags over the class and streak slides.

use dioxus::prelude::*;
use rand::Rng;

pub const CONFETTI_PIECES: usize = 60;
const CONFETTI_COLORS: [&str; 4] = ["#CF278D", "#354894", "#EFAD1E", "#EE3D5E"];

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal offset, percent of the capture width.
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub size_rem: f64,
    pub color: &'static str,
}

impl ConfettiPiece {
    fn style(&self) -> String {
        format!(
            "left: {:.1}%; width: {:.2}rem; height: {:.2}rem; background-color: {}; \
             animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left_pct, self.size_rem, self.size_rem, self.color, self.delay_s, self.duration_s
        )
    }
}

pub fn confetti_pieces(rng: &mut impl Rng, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            left_pct: rng.gen_range(0.0..95.0),
            delay_s: rng.gen_range(0.0..2.0),
            duration_s: rng.gen_range(3.0..5.0),
            size_rem: rng.gen_range(0.15..0.35),
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
        })
        .collect()
}

/// Pieces are rolled once per mount so re-renders do not reshuffle them.
#[component]
pub fn Confetti() -> Element {
    let pieces = use_hook(|| confetti_pieces(&mut rand::thread_rng(), CONFETTI_PIECES));

    rsx! {
        for (idx, piece) in pieces.iter().enumerate() {
            div { key: "{idx}", class: "confetti", aria_hidden: "true", style: piece.style() }
        }
    }
}

const FLAG_TONES: [&str; 4] = ["pink", "yellow", "red", "blue"];
const FLAG_COUNT: usize = 11;
const FLAG_WIDTH: f64 = 50.0;
const FLAG_DROP: f64 = 53.0;

/// The string runs from y=40 at both edges and sags toward y=150.
const STRING_PATH: &str = "M -10,40 Q 500,150 1010,40";

#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    pub points: String,
    pub tone: &'static str,
}

/// Height of the quadratic string at `x` in the 1000-wide view box.
fn string_y(x: f64) -> f64 {
    let t = ((x + 10.0) / 1020.0).clamp(0.0, 1.0);
    let (p0, p1, p2) = (40.0, 150.0, 40.0);
    (1.0 - t).powi(2) * p0 + 2.0 * (1.0 - t) * t * p1 + t.powi(2) * p2
}

/// Triangles hung along the string, evenly spaced.
pub fn bunting_flags() -> Vec<Flag> {
    let step = 1000.0 / FLAG_COUNT as f64;
    (0..FLAG_COUNT)
        .map(|idx| {
            let left = 40.0 + idx as f64 * step * 0.93;
            let right = left + FLAG_WIDTH;
            let (y_left, y_right) = (string_y(left) + 8.0, string_y(right) + 8.0);
            let tip_x = left + FLAG_WIDTH / 2.0;
            let tip_y = (y_left + y_right) / 2.0 + FLAG_DROP;
            Flag {
                points: format!("{left:.0},{y_left:.0} {right:.0},{y_right:.0} {tip_x:.0},{tip_y:.0}"),
                tone: FLAG_TONES[idx % FLAG_TONES.len()],
            }
        })
        .collect()
}

#[component]
pub fn Bunting() -> Element {
    let flags = use_hook(bunting_flags);

    rsx! {
        svg {
            class: "bunting",
            view_box: "0 0 1000 220",
            preserve_aspect_ratio: "none",
            "aria-hidden": "true",
            path { class: "bunting__string", d: STRING_PATH }
            for (idx, flag) in flags.iter().enumerate() {
                polygon {
                    key: "{idx}",
                    class: format!("bunting__flag--{}", flag.tone),
                    points: flag.points.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn confetti_stays_inside_its_ranges() {
        let pieces = confetti_pieces(&mut StdRng::seed_from_u64(7), CONFETTI_PIECES);
        assert_eq!(pieces.len(), CONFETTI_PIECES);
        for piece in &pieces {
            assert!((0.0..95.0).contains(&piece.left_pct));
            assert!((0.0..2.0).contains(&piece.delay_s));
            assert!((3.0..5.0).contains(&piece.duration_s));
            assert!((0.15..0.35).contains(&piece.size_rem));
            assert!(CONFETTI_COLORS.contains(&piece.color));
        }
    }

    #[test]
    fn same_seed_same_confetti() {
        let a = confetti_pieces(&mut StdRng::seed_from_u64(42), 5);
        let b = confetti_pieces(&mut StdRng::seed_from_u64(42), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn string_sags_in_the_middle() {
        assert!((string_y(-10.0) - 40.0).abs() < 1e-9);
        assert!((string_y(1010.0) - 40.0).abs() < 1e-9);
        assert!((string_y(500.0) - 95.0).abs() < 1e-9);
    }

    #[test]
    fn flags_cycle_tones_and_hang_below_the_string() {
        let flags = bunting_flags();
        assert_eq!(flags.len(), FLAG_COUNT);
        assert_eq!(flags[0].tone, "pink");
        assert_eq!(flags[4].tone, "pink");
        assert_eq!(flags[3].tone, "blue");
        for flag in &flags {
            let ys: Vec<f64> = flag
                .points
                .split(' ')
                .filter_map(|p| p.split_once(','))
                .filter_map(|(_, y)| y.parse().ok())
                .collect();
            assert_eq!(ys.len(), 3);
            assert!(ys[2] > ys[0] && ys[2] > ys[1]);
            assert!(ys.iter().all(|y| (0.0..220.0).contains(y)));
        }
    }
}
