use serde::{Deserialize, Serialize};

/// Easing curve applied to a transition's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    QuadOut,
    #[default]
    CubicOut,
    CubicInOut,
    SineInOut,
}

impl Easing {
    /// Maps progress `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadOut => t * (2.0 - t),
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
            Self::SineInOut => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// Numeric element property a transition can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatedProperty {
    X,
    Y,
    Opacity,
}

/// One in-flight numeric transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub property: AnimatedProperty,
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub elapsed_ms: f64,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub fn new(
        property: AnimatedProperty,
        from: f64,
        to: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Self {
        Self {
            property,
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Advances by `delta_ms` and returns the property value to apply.
    pub fn step(&mut self, delta_ms: f64) -> f64 {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
        }
        self.value()
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let progress = self.easing.apply(self.elapsed_ms / self.duration_ms);
        self.from + (self.to - self.from) * progress
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.duration_ms <= 0.0 || self.elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_pin_both_ends() {
        for easing in [
            Easing::Linear,
            Easing::QuadOut,
            Easing::CubicOut,
            Easing::CubicInOut,
            Easing::SineInOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn zero_duration_transition_lands_immediately() {
        let transition = Transition::new(AnimatedProperty::X, 0.0, 10.0, 0.0, Easing::Linear);
        assert!(transition.is_finished());
        assert_eq!(transition.value(), 10.0);
    }

    #[test]
    fn linear_transition_interpolates_and_saturates() {
        let mut transition = Transition::new(AnimatedProperty::Y, 0.0, 100.0, 200.0, Easing::Linear);
        assert_eq!(transition.step(50.0), 25.0);
        assert_eq!(transition.step(500.0), 100.0);
        assert!(transition.is_finished());
    }
}
