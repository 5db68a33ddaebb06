use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};
use crate::render::animation::{AnimatedProperty, Easing, Transition};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS `rgba(...)` notation with 0..=255 channels.
    #[must_use]
    pub fn to_css(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({},{},{},{})",
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            self.alpha
        )
    }
}

/// Paint attributes of a path-backed element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub stroke_dasharray: Option<String>,
    pub fill: Option<Color>,
    pub fill_opacity: f64,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            stroke: None,
            stroke_width: 1.0,
            stroke_opacity: 1.0,
            stroke_dasharray: None,
            fill: None,
            fill_opacity: 1.0,
        }
    }
}

impl PathStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and >= 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("stroke_opacity", self.stroke_opacity),
            ("fill_opacity", self.fill_opacity),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and in [0, 1]"
                )));
            }
        }
        if let Some(dasharray) = &self.stroke_dasharray {
            if !is_valid_dasharray(dasharray) {
                return Err(ChartError::InvalidData(format!(
                    "invalid stroke dasharray `{dasharray}`"
                )));
            }
        }
        Ok(())
    }
}

/// Dash lists hold only numbers separated by commas or whitespace.
pub(crate) fn is_valid_dasharray(dasharray: &str) -> bool {
    dasharray
        .split(|ch: char| ch == ',' || ch.is_ascii_whitespace())
        .filter(|part| !part.is_empty())
        .all(|part| part.parse::<f64>().is_ok_and(|value| value.is_finite() && value >= 0.0))
}

/// Visual element drawn from a path string, positioned by a translation.
///
/// Elements can be moved, shown, hidden and have their position or opacity
/// animated; they never interpret the path they carry.
#[derive(Debug, Clone, PartialEq)]
pub struct PathElement {
    path: String,
    x: f64,
    y: f64,
    visible: bool,
    opacity: f64,
    style: PathStyle,
    transitions: SmallVec<[Transition; 2]>,
}

impl PathElement {
    #[must_use]
    pub fn new(style: PathStyle) -> Self {
        Self {
            path: String::new(),
            x: 0.0,
            y: 0.0,
            visible: true,
            opacity: 1.0,
            style,
            transitions: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replaces the path; returns whether it changed.
    pub fn set_path(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.path == path {
            return false;
        }
        self.path = path;
        true
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Sets `x`, cancelling any transition driving it.
    pub fn set_x(&mut self, x: f64) {
        self.cancel(AnimatedProperty::X);
        self.x = x;
    }

    /// Sets `y`, cancelling any transition driving it.
    pub fn set_y(&mut self, y: f64) {
        self.cancel(AnimatedProperty::Y);
        self.y = y;
    }

    pub fn move_to(&mut self, point: Point) {
        self.set_x(point.x);
        self.set_y(point.y);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.cancel(AnimatedProperty::Opacity);
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    #[must_use]
    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: PathStyle) {
        self.style = style;
    }

    /// Starts a transition of `property` towards `to`.
    ///
    /// A zero duration applies the value at once.
    pub fn animate(&mut self, property: AnimatedProperty, to: f64, duration_ms: f64, easing: Easing) {
        self.cancel(property);
        let transition = Transition::new(property, self.get(property), to, duration_ms, easing);
        if transition.is_finished() {
            self.apply(property, to);
        } else {
            self.transitions.push(transition);
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Advances running transitions; returns whether any is still running.
    pub fn step(&mut self, delta_ms: f64) -> bool {
        let mut updates: SmallVec<[(AnimatedProperty, f64); 3]> = SmallVec::new();
        for transition in &mut self.transitions {
            updates.push((transition.property, transition.step(delta_ms)));
        }
        for (property, value) in updates {
            self.apply(property, value);
        }
        self.transitions.retain(|transition| !transition.is_finished());
        !self.transitions.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "element position must be finite".to_owned(),
            ));
        }
        if self.path.contains("NaN") || self.path.contains("inf") {
            return Err(ChartError::InvalidData(
                "element path contains non-finite coordinates".to_owned(),
            ));
        }
        self.style.validate()
    }

    fn cancel(&mut self, property: AnimatedProperty) {
        self.transitions
            .retain(|transition| transition.property != property);
    }

    fn get(&self, property: AnimatedProperty) -> f64 {
        match property {
            AnimatedProperty::X => self.x,
            AnimatedProperty::Y => self.y,
            AnimatedProperty::Opacity => self.opacity,
        }
    }

    fn apply(&mut self, property: AnimatedProperty, value: f64) {
        match property {
            AnimatedProperty::X => self.x = value,
            AnimatedProperty::Y => self.y = value,
            AnimatedProperty::Opacity => self.opacity = value.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_path_reports_changes_only() {
        let mut element = PathElement::new(PathStyle::default());
        assert!(element.set_path(" M0,0 "));
        assert!(!element.set_path(" M0,0 "));
    }

    #[test]
    fn direct_position_write_cancels_running_transition() {
        let mut element = PathElement::new(PathStyle::default());
        element.animate(AnimatedProperty::X, 100.0, 300.0, Easing::Linear);
        assert!(element.is_animating());
        element.set_x(5.0);
        assert!(!element.is_animating());
        assert!(!element.step(100.0));
        assert_eq!(element.x(), 5.0);
    }

    #[test]
    fn stepping_runs_transition_to_completion() {
        let mut element = PathElement::new(PathStyle::default());
        element.animate(AnimatedProperty::Y, 40.0, 100.0, Easing::Linear);
        assert!(element.step(50.0));
        assert_eq!(element.y(), 20.0);
        assert!(!element.step(50.0));
        assert_eq!(element.y(), 40.0);
    }
}
