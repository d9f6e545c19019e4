use std::f64::consts::PI;
use std::fmt;

/// Which end of the curve is eased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseDir {
    In,
    Out,
    InOut,
}

impl EaseDir {
    fn name(self) -> &'static str {
        match self {
            EaseDir::In => "in",
            EaseDir::Out => "out",
            EaseDir::InOut => "inOut",
        }
    }

    /// Derive in/out/inOut variants from an ease-in curve.
    fn shape(self, t: f64, ease_in: impl Fn(f64) -> f64) -> f64 {
        match self {
            EaseDir::In => ease_in(t),
            EaseDir::Out => 1.0 - ease_in(1.0 - t),
            EaseDir::InOut => {
                if t < 0.5 {
                    ease_in(t * 2.0) / 2.0
                } else {
                    1.0 - ease_in((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }
}

/// Easing curve, named the way the animation configs name them.
///
/// `Power(n)` is a polynomial of degree `n + 1`, so `power2.out` is a
/// cubic ease-out and `power3.out` a quartic one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Constant speed (`"none"`).
    Linear,
    /// `power1` .. `power4`.
    Power(u8, EaseDir),
    /// Overshoot and settle, with the overshoot amount.
    Back(EaseDir, f64),
    /// Sinusoidal.
    Sine(EaseDir),
}

impl Easing {
    pub const POWER2_OUT: Easing = Easing::Power(2, EaseDir::Out);
    pub const POWER2_IN_OUT: Easing = Easing::Power(2, EaseDir::InOut);
    pub const POWER3_OUT: Easing = Easing::Power(3, EaseDir::Out);
    pub const BACK_OUT: Easing = Easing::Back(EaseDir::Out, 1.7);
    pub const SINE_IN_OUT: Easing = Easing::Sine(EaseDir::InOut);

    /// Apply the curve to a normalized time (clamped to 0.0..=1.0).
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        // Pin the endpoints; back curves are not exactly 0/1 there in floating point
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Easing::Linear => t,
            Easing::Power(degree, dir) => {
                let exp = i32::from(degree.clamp(1, 4)) + 1;
                dir.shape(t, |p| p.powi(exp))
            }
            Easing::Back(dir, overshoot) => match dir {
                EaseDir::InOut => {
                    let s = overshoot * 1.525;
                    if t < 0.5 {
                        let p = t * 2.0;
                        p * p * ((s + 1.0) * p - s) / 2.0
                    } else {
                        let p = t * 2.0 - 2.0;
                        (p * p * ((s + 1.0) * p + s) + 2.0) / 2.0
                    }
                }
                _ => dir.shape(t, |p| p * p * ((overshoot + 1.0) * p - overshoot)),
            },
            Easing::Sine(dir) => match dir {
                EaseDir::In => 1.0 - (t * PI / 2.0).cos(),
                EaseDir::Out => (t * PI / 2.0).sin(),
                EaseDir::InOut => -((PI * t).cos() - 1.0) / 2.0,
            },
        }
    }
}

impl Default for Easing {
    /// Same default as the animation library: `power1.out`.
    fn default() -> Self {
        Easing::Power(1, EaseDir::Out)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "none"),
            Easing::Power(n, dir) => write!(f, "power{}.{}", n, dir.name()),
            Easing::Back(dir, overshoot) => write!(f, "back.{}({})", dir.name(), overshoot),
            Easing::Sine(dir) => write!(f, "sine.{}", dir.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_easing_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::POWER2_OUT,
            Easing::POWER2_IN_OUT,
            Easing::POWER3_OUT,
            Easing::BACK_OUT,
            Easing::Back(EaseDir::InOut, 1.7),
            Easing::SINE_IN_OUT,
        ];
        for curve in curves {
            assert_eq!(curve.apply(0.0), 0.0, "{curve}");
            assert_eq!(curve.apply(1.0), 1.0, "{curve}");
            assert_eq!(curve.apply(-3.0), 0.0, "{curve}");
            assert_eq!(curve.apply(7.0), 1.0, "{curve}");
        }
    }

    #[test]
    fn test_power_curves() {
        // power2.out is a cubic ease-out
        assert!(close(Easing::POWER2_OUT.apply(0.5), 1.0 - 0.5_f64.powi(3)));
        // power3.out is a quartic ease-out
        assert!(close(Easing::POWER3_OUT.apply(0.5), 1.0 - 0.5_f64.powi(4)));
        assert!(close(Easing::POWER2_IN_OUT.apply(0.5), 0.5));
        assert!(Easing::POWER2_IN_OUT.apply(0.25) < 0.25);
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BACK_OUT.apply(f64::from(i) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
        assert!(peak < 1.2);
    }

    #[test]
    fn test_sine_in_out_symmetry() {
        let e = Easing::SINE_IN_OUT;
        assert!(close(e.apply(0.5), 0.5));
        assert!(close(e.apply(0.2) + e.apply(0.8), 1.0));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Easing::POWER3_OUT.to_string(), "power3.out");
        assert_eq!(Easing::POWER2_IN_OUT.to_string(), "power2.inOut");
        assert_eq!(Easing::BACK_OUT.to_string(), "back.out(1.7)");
        assert_eq!(Easing::SINE_IN_OUT.to_string(), "sine.inOut");
        assert_eq!(Easing::Linear.to_string(), "none");
        assert_eq!(Easing::default().to_string(), "power1.out");
    }
}
