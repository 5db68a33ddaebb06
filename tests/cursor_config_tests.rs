use chart_cursor::core::{PlotFrame, Point, RelativeValue, Size};
use chart_cursor::render::Color;
use chart_cursor::{
    ChartError, CursorBehavior, CursorConfig, RadarCursor, RadarCursorConfig, XyCursor,
};

fn frame() -> PlotFrame {
    PlotFrame::new(Point::ORIGIN, Size::new(400.0, 300.0))
}

#[test]
fn empty_json_yields_defaults() {
    let config: CursorConfig = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(config, CursorConfig::default());
    assert_eq!(config.behavior, CursorBehavior::ZoomX);
    assert_eq!(config.hit_tolerance_px, 4.0);
    assert_eq!(config.radar.start_angle, -90.0);
    assert_eq!(config.radar.end_angle, 270.0);
}

#[test]
fn config_round_trips_through_json() {
    let config = CursorConfig::new(CursorBehavior::PanXY)
        .with_hide_duration_ms(250.0)
        .with_full_width_lines(true, false)
        .with_line_dasharray(None)
        .with_radar(
            RadarCursorConfig::default()
                .with_inner_radius(RelativeValue::Percent(40.0))
                .with_angles(0.0, 180.0),
        );
    let json = serde_json::to_string(&config).expect("serialize");
    let parsed: CursorConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, config);
}

#[test]
fn behavior_names_use_camel_case() {
    let config: CursorConfig =
        serde_json::from_str(r#"{"behavior":"zoomXY","radar":{"radius":{"pixels":120.0}}}"#)
            .expect("deserialize");
    assert_eq!(config.behavior, CursorBehavior::ZoomXY);
    assert_eq!(config.radar.radius, RelativeValue::Pixels(120.0));
    assert_eq!(
        serde_json::to_value(CursorBehavior::SelectY).expect("serialize"),
        "selectY"
    );
}

#[test]
fn cursors_reject_invalid_config() {
    let config = CursorConfig::default().with_hit_tolerance_px(f64::NAN);
    assert!(matches!(
        XyCursor::new(config, 1, frame()),
        Err(ChartError::InvalidConfig(_))
    ));

    let config = CursorConfig::default().with_selection_fill(Color::rgb(0.0, 0.0, 0.0), 1.5);
    assert!(XyCursor::new(config, 1, frame()).is_err());

    let config = CursorConfig::default()
        .with_radar(RadarCursorConfig::default().with_inner_radius_modifier(-1.0));
    assert!(RadarCursor::new(config, 1, frame()).is_err());
}

#[test]
fn cursors_reject_degenerate_plot_areas() {
    let frame = PlotFrame::new(Point::ORIGIN, Size::new(400.0, f64::NAN));
    assert!(matches!(
        XyCursor::new(CursorConfig::default(), 1, frame),
        Err(ChartError::InvalidViewport { .. })
    ));
}

#[test]
fn styles_follow_the_configured_colors() {
    let config = CursorConfig::default()
        .with_line_stroke(Color::rgb(1.0, 0.0, 0.0), 0.6)
        .with_selection_fill(Color::rgb(0.0, 0.0, 1.0), 0.3);

    let line = config.line_style();
    assert_eq!(line.stroke, Some(Color::rgb(1.0, 0.0, 0.0)));
    assert_eq!(line.stroke_opacity, 0.6);
    assert_eq!(line.fill, None);

    let band = config.full_width_line_style();
    assert_eq!(band.fill, Some(Color::rgb(1.0, 0.0, 0.0)));
    assert_eq!(band.fill_opacity, 0.3);

    let selection = config.selection_style();
    assert_eq!(selection.fill, Some(Color::rgb(0.0, 0.0, 1.0)));
    assert_eq!(selection.fill_opacity, 0.3);
}
