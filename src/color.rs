use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Continuous "Reds" scale
// ---------------------------------------------------------------------------

const REDS_HUE: f32 = 2.0;
const REDS_SATURATION: f32 = 0.80;
const LIGHTNESS_LOW: f32 = 0.88;
const LIGHTNESS_HIGH: f32 = 0.32;

/// Colour at position `t` (0 = palest, 1 = deepest) of a red ramp.
pub fn reds(t: f32) -> Color32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let lightness = LIGHTNESS_LOW + (LIGHTNESS_HIGH - LIGHTNESS_LOW) * t;
    let hsl = Hsl::new(REDS_HUE, REDS_SATURATION, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Bar fill for `goals` relative to the largest value in the chart.
pub fn goal_intensity(goals: u32, max_goals: u32) -> Color32 {
    if max_goals == 0 {
        return reds(0.0);
    }
    reds(goals as f32 / max_goals as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(c: Color32) -> u32 {
        c.r() as u32 + c.g() as u32 + c.b() as u32
    }

    #[test]
    fn more_goals_is_darker() {
        let low = goal_intensity(2, 10);
        let mid = goal_intensity(5, 10);
        let high = goal_intensity(10, 10);
        assert!(brightness(low) > brightness(mid));
        assert!(brightness(mid) > brightness(high));
    }

    #[test]
    fn ramp_stays_red() {
        for t in [0.0, 0.5, 1.0] {
            let c = reds(t);
            assert!(c.r() >= c.g() && c.r() >= c.b());
        }
    }

    #[test]
    fn zero_max_and_out_of_range_are_clamped() {
        assert_eq!(goal_intensity(0, 0), reds(0.0));
        assert_eq!(reds(-1.0), reds(0.0));
        assert_eq!(reds(4.0), reds(1.0));
        assert_eq!(reds(f32::NAN), reds(0.0));
    }
}
