use crate::core::RelativeValue;
use crate::error::{ChartError, ChartResult};
use crate::render::is_valid_dasharray;

use super::{CursorConfig, RadarCursorConfig};

const MAX_POSITION_PRECISION: u32 = 10;

pub(super) fn validate_cursor_config(config: &CursorConfig) -> ChartResult<()> {
    for (name, value) in [
        ("hit_tolerance_px", config.hit_tolerance_px),
        ("hide_duration_ms", config.hide_duration_ms),
        ("pan_threshold_px", config.pan_threshold_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }
    if config.position_precision > MAX_POSITION_PRECISION {
        return Err(ChartError::InvalidConfig(format!(
            "`position_precision` must be <= {MAX_POSITION_PRECISION}"
        )));
    }
    for (name, value) in [
        ("line_stroke_opacity", config.line_stroke_opacity),
        ("selection_fill_opacity", config.selection_fill_opacity),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ChartError::InvalidConfig(format!(
                "`{name}` must be finite and in [0, 1]"
            )));
        }
    }
    if let Some(dasharray) = &config.line_dasharray {
        if !is_valid_dasharray(dasharray) {
            return Err(ChartError::InvalidConfig(format!(
                "`line_dasharray` must be a list of non-negative numbers, got `{dasharray}`"
            )));
        }
    }
    config
        .line_stroke
        .validate()
        .and_then(|()| config.selection_fill.validate())
        .map_err(|err| ChartError::InvalidConfig(err.to_string()))?;
    validate_radar_cursor_config(&config.radar)
}

pub(super) fn validate_radar_cursor_config(config: &RadarCursorConfig) -> ChartResult<()> {
    if !config.start_angle.is_finite() || !config.end_angle.is_finite() {
        return Err(ChartError::InvalidConfig(
            "radar angles must be finite".to_owned(),
        ));
    }
    if config.start_angle == config.end_angle {
        return Err(ChartError::InvalidConfig(
            "radar start_angle and end_angle must differ".to_owned(),
        ));
    }
    for (name, value) in [("radius", config.radius), ("inner_radius", config.inner_radius)] {
        if !value.is_finite() {
            return Err(ChartError::InvalidConfig(format!(
                "radar `{name}` must be finite"
            )));
        }
        if let RelativeValue::Percent(percent) = value {
            if percent < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "radar `{name}` percent must be >= 0"
                )));
            }
        }
    }
    if !config.inner_radius_modifier.is_finite() || config.inner_radius_modifier < 0.0 {
        return Err(ChartError::InvalidConfig(
            "radar `inner_radius_modifier` must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_cursor_config(&CursorConfig::default()).is_ok());
    }

    #[test]
    fn rejects_negative_tolerance_and_large_precision() {
        let config = CursorConfig::default().with_hit_tolerance_px(-1.0);
        assert!(matches!(
            validate_cursor_config(&config),
            Err(ChartError::InvalidConfig(_))
        ));
        let config = CursorConfig::default().with_position_precision(11);
        assert!(validate_cursor_config(&config).is_err());
    }

    #[test]
    fn rejects_out_of_range_colors_and_equal_angles() {
        let config = CursorConfig::default().with_line_stroke(Color::rgb(2.0, 0.0, 0.0), 0.5);
        assert!(validate_cursor_config(&config).is_err());
        let radar = RadarCursorConfig::default().with_angles(0.0, 0.0);
        assert!(validate_radar_cursor_config(&radar).is_err());
    }

    #[test]
    fn rejects_dasharray_with_markup() {
        let config =
            CursorConfig::default().with_line_dasharray(Some("3\" onload=\"x".to_owned()));
        assert!(matches!(
            validate_cursor_config(&config),
            Err(ChartError::InvalidConfig(_))
        ));
        let config = CursorConfig::default().with_line_dasharray(Some("4 2, 1.5".to_owned()));
        assert!(validate_cursor_config(&config).is_ok());
    }
}
