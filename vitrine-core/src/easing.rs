//! Easing curves for transitions.

/// Easing function applied to a normalized progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No shaping.
    Linear,
    /// Quadratic ease-in.
    EaseInQuad,
    /// Quadratic ease-out; the default feel for carousel snaps.
    #[default]
    EaseOutQuad,
    /// Quadratic ease-in-out.
    EaseInOutQuad,
    /// Quartic ease-out; used by the count-up animation.
    EaseOutQuart,
}

impl Easing {
    /// Apply the curve to a progress value, clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for e in [
            Easing::Linear,
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
            Easing::EaseOutQuart,
        ] {
            assert_eq!(e.apply(0.0), 0.0, "{e:?} at 0");
            assert_eq!(e.apply(1.0), 1.0, "{e:?} at 1");
        }
    }

    #[test]
    fn out_of_range_input_clamps() {
        assert_eq!(Easing::Linear.apply(-2.0), 0.0);
        assert_eq!(Easing::EaseOutQuart.apply(3.0), 1.0);
    }

    #[test]
    fn ease_out_leads_linear() {
        // Ease-out curves should be past halfway at t = 0.5.
        assert!(Easing::EaseOutQuad.apply(0.5) > 0.5);
        assert!(Easing::EaseOutQuart.apply(0.5) > 0.5);
        assert!(Easing::EaseInQuad.apply(0.5) < 0.5);
    }
}
