use core::f64::consts::PI;

/// Easing curve applied to the normalized progress of a tween.
///
/// `Linear` is the default. `Custom` plugs in any curve; it should map `0 → 0` and `1 → 1`
/// but is not required to stay inside `[0, 1]` in between.
#[derive(Debug, Copy, Clone, Default)]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InSine,
    OutSine,
    InOutSine,
    Custom(fn(f64) -> f64),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::Custom(f) => f(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 10] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::Linear.apply(-3.0), 0.0);
        assert_eq!(Ease::Linear.apply(7.0), 1.0);
    }

    #[test]
    fn in_out_curves_hit_half_at_midpoint() {
        assert!((Ease::InOutQuad.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Ease::InOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Ease::InOutSine.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn custom_curve_is_used() {
        fn step(t: f64) -> f64 {
            if t < 1.0 { 0.0 } else { 1.0 }
        }
        assert_eq!(Ease::Custom(step).apply(0.9), 0.0);
        assert_eq!(Ease::Custom(step).apply(1.0), 1.0);
    }
}
