use serde::{Deserialize, Serialize};

use crate::core::RelativeValue;
use crate::error::ChartResult;
use crate::interaction::CursorBehavior;
use crate::render::{Color, PathStyle};

use super::validation::validate_cursor_config;

/// Public cursor configuration.
///
/// Serializable so hosts can persist cursor setup alongside chart config;
/// every field except `behavior` falls back to a default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorConfig {
    #[serde(default)]
    pub behavior: CursorBehavior,
    /// Gestures shorter than this (in px) are cancelled instead of ended.
    #[serde(default = "default_hit_tolerance_px")]
    pub hit_tolerance_px: f64,
    #[serde(default)]
    pub hide_duration_ms: f64,
    /// Decimal digits kept in selection sizes.
    #[serde(default = "default_position_precision")]
    pub position_precision: u32,
    #[serde(default = "default_pan_threshold_px")]
    pub pan_threshold_px: f64,
    #[serde(default)]
    pub full_width_line_x: bool,
    #[serde(default)]
    pub full_width_line_y: bool,
    #[serde(default = "default_true")]
    pub line_x_enabled: bool,
    #[serde(default = "default_true")]
    pub line_y_enabled: bool,
    #[serde(default = "default_true")]
    pub interactions_enabled: bool,
    /// Touch input is ignored entirely while set.
    #[serde(default)]
    pub touch_protected: bool,
    /// Suppress platform gestures for cancelable downs inside the plot.
    #[serde(default = "default_true")]
    pub prevent_gestures: bool,
    #[serde(default = "default_line_stroke")]
    pub line_stroke: Color,
    #[serde(default = "default_line_stroke_opacity")]
    pub line_stroke_opacity: f64,
    #[serde(default = "default_line_dasharray")]
    pub line_dasharray: Option<String>,
    #[serde(default = "default_selection_fill")]
    pub selection_fill: Color,
    #[serde(default = "default_selection_fill_opacity")]
    pub selection_fill_opacity: f64,
    #[serde(default)]
    pub radar: RadarCursorConfig,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self::new(CursorBehavior::default())
    }
}

impl CursorConfig {
    #[must_use]
    pub fn new(behavior: CursorBehavior) -> Self {
        Self {
            behavior,
            hit_tolerance_px: default_hit_tolerance_px(),
            hide_duration_ms: 0.0,
            position_precision: default_position_precision(),
            pan_threshold_px: default_pan_threshold_px(),
            full_width_line_x: false,
            full_width_line_y: false,
            line_x_enabled: true,
            line_y_enabled: true,
            interactions_enabled: true,
            touch_protected: false,
            prevent_gestures: true,
            line_stroke: default_line_stroke(),
            line_stroke_opacity: default_line_stroke_opacity(),
            line_dasharray: default_line_dasharray(),
            selection_fill: default_selection_fill(),
            selection_fill_opacity: default_selection_fill_opacity(),
            radar: RadarCursorConfig::default(),
        }
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: CursorBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_hit_tolerance_px(mut self, hit_tolerance_px: f64) -> Self {
        self.hit_tolerance_px = hit_tolerance_px;
        self
    }

    #[must_use]
    pub fn with_hide_duration_ms(mut self, hide_duration_ms: f64) -> Self {
        self.hide_duration_ms = hide_duration_ms;
        self
    }

    #[must_use]
    pub fn with_position_precision(mut self, position_precision: u32) -> Self {
        self.position_precision = position_precision;
        self
    }

    #[must_use]
    pub fn with_pan_threshold_px(mut self, pan_threshold_px: f64) -> Self {
        self.pan_threshold_px = pan_threshold_px;
        self
    }

    #[must_use]
    pub fn with_full_width_lines(mut self, x: bool, y: bool) -> Self {
        self.full_width_line_x = x;
        self.full_width_line_y = y;
        self
    }

    #[must_use]
    pub fn with_lines_enabled(mut self, x: bool, y: bool) -> Self {
        self.line_x_enabled = x;
        self.line_y_enabled = y;
        self
    }

    #[must_use]
    pub fn with_interactions_enabled(mut self, enabled: bool) -> Self {
        self.interactions_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_touch_protected(mut self, touch_protected: bool) -> Self {
        self.touch_protected = touch_protected;
        self
    }

    #[must_use]
    pub fn with_line_stroke(mut self, color: Color, opacity: f64) -> Self {
        self.line_stroke = color;
        self.line_stroke_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_line_dasharray(mut self, dasharray: Option<String>) -> Self {
        self.line_dasharray = dasharray;
        self
    }

    #[must_use]
    pub fn with_selection_fill(mut self, color: Color, opacity: f64) -> Self {
        self.selection_fill = color;
        self.selection_fill_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_radar(mut self, radar: RadarCursorConfig) -> Self {
        self.radar = radar;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_cursor_config(self)
    }

    /// Style of the dashed guide lines.
    #[must_use]
    pub fn line_style(&self) -> PathStyle {
        PathStyle {
            stroke: Some(self.line_stroke),
            stroke_opacity: self.line_stroke_opacity,
            stroke_dasharray: self.line_dasharray.clone(),
            ..PathStyle::default()
        }
    }

    /// Guide-line style when drawn as a band over the current axis item.
    #[must_use]
    pub fn full_width_line_style(&self) -> PathStyle {
        PathStyle {
            fill: Some(self.line_stroke),
            fill_opacity: self.selection_fill_opacity,
            ..self.line_style()
        }
    }

    #[must_use]
    pub fn selection_style(&self) -> PathStyle {
        PathStyle {
            fill: Some(self.selection_fill),
            fill_opacity: self.selection_fill_opacity,
            ..PathStyle::default()
        }
    }
}

/// Polar layout of a radar cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarCursorConfig {
    #[serde(default = "default_radius")]
    pub radius: RelativeValue,
    #[serde(default = "default_inner_radius")]
    pub inner_radius: RelativeValue,
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,
    #[serde(default = "default_end_angle")]
    pub end_angle: f64,
    /// Scales a percent inner radius, e.g. to follow a nested chart.
    #[serde(default = "default_inner_radius_modifier")]
    pub inner_radius_modifier: f64,
}

impl Default for RadarCursorConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            inner_radius: default_inner_radius(),
            start_angle: default_start_angle(),
            end_angle: default_end_angle(),
            inner_radius_modifier: default_inner_radius_modifier(),
        }
    }
}

impl RadarCursorConfig {
    #[must_use]
    pub fn with_radius(mut self, radius: RelativeValue) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: RelativeValue) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    #[must_use]
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    #[must_use]
    pub fn with_inner_radius_modifier(mut self, modifier: f64) -> Self {
        self.inner_radius_modifier = modifier;
        self
    }
}

fn default_true() -> bool {
    true
}

fn default_hit_tolerance_px() -> f64 {
    4.0
}

fn default_position_precision() -> u32 {
    4
}

fn default_pan_threshold_px() -> f64 {
    3.0
}

fn default_line_stroke() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_line_stroke_opacity() -> f64 {
    0.4
}

fn default_line_dasharray() -> Option<String> {
    Some("3,3".to_owned())
}

fn default_selection_fill() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_selection_fill_opacity() -> f64 {
    0.2
}

fn default_radius() -> RelativeValue {
    RelativeValue::Percent(100.0)
}

fn default_inner_radius() -> RelativeValue {
    RelativeValue::Percent(0.0)
}

fn default_start_angle() -> f64 {
    -90.0
}

fn default_end_angle() -> f64 {
    270.0
}

fn default_inner_radius_modifier() -> f64 {
    1.0
}
