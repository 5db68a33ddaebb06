use chart_cursor::core::{PlotFrame, Point, Size};
use chart_cursor::interaction::{
    AxisId, AxisRef, AxisTooltipEvent, ItemSpan, SeriesId, SeriesRef, SeriesTooltipEvent,
};
use chart_cursor::render::Easing;
use chart_cursor::render::path::rectangle;
use chart_cursor::{CursorBehavior, CursorConfig, XyCursor};

const X_AXIS: AxisId = AxisId(7);
const SERIES: SeriesId = SeriesId(3);

fn cursor() -> XyCursor {
    let frame = PlotFrame::new(Point::ORIGIN, Size::new(400.0, 300.0));
    XyCursor::new(CursorConfig::new(CursorBehavior::ZoomX), 1, frame).expect("valid cursor")
}

fn tooltip(x: f64, item: Option<ItemSpan>) -> AxisTooltipEvent {
    AxisTooltipEvent {
        axis: X_AXIS,
        position: Point::new(x, 0.0),
        visible: true,
        current_item: item,
    }
}

fn series_tooltip(point: Point, duration_ms: f64) -> SeriesTooltipEvent {
    SeriesTooltipEvent {
        series: SERIES,
        point,
        duration_ms,
        easing: Easing::Linear,
    }
}

#[test]
fn bound_axis_takes_over_its_line() {
    let mut cursor = cursor();
    cursor.set_x_axis(Some(AxisRef::new(X_AXIS)));
    cursor.trigger_move(Point::new(100.0, 50.0), None, false);
    assert_eq!(cursor.line_x().map(|line| line.x()), Some(0.0));
    assert_eq!(cursor.line_y().map(|line| line.y()), Some(50.0));

    cursor.handle_axis_tooltip(&tooltip(150.0, None));
    let line_x = cursor.line_x().expect("line x");
    assert_eq!(line_x.x(), 150.0);
    assert_eq!(line_x.path(), " M0,0  L0,300 ");
}

#[test]
fn axis_without_tooltip_leaves_the_pointer_in_charge() {
    let mut cursor = cursor();
    let mut axis = AxisRef::new(X_AXIS);
    axis.tooltip_enabled = false;
    cursor.set_x_axis(Some(axis));
    cursor.trigger_move(Point::new(100.0, 50.0), None, false);
    assert_eq!(cursor.line_x().map(|line| line.x()), Some(100.0));

    cursor.handle_axis_tooltip(&tooltip(150.0, None));
    assert_eq!(cursor.line_x().map(|line| line.x()), Some(100.0));
}

#[test]
fn full_width_line_covers_the_current_item() {
    let mut cursor = cursor();
    cursor.set_x_axis(Some(AxisRef::new(X_AXIS)));
    cursor.set_full_width_lines(true, false);

    let item = ItemSpan::new(Point::new(140.0, 0.0), Point::new(160.0, 0.0));
    cursor.handle_axis_tooltip(&tooltip(150.0, Some(item)));
    let line_x = cursor.line_x().expect("line x");
    assert_eq!(line_x.path(), rectangle(20.0, 300.0, -10.0, 0.0));
    assert!(line_x.style().fill.is_some());
}

#[test]
fn hidden_tooltip_hides_the_line_and_unknown_axes_are_ignored() {
    let mut cursor = cursor();
    cursor.set_x_axis(Some(AxisRef::new(X_AXIS)));
    let mut event = tooltip(150.0, None);
    event.visible = false;
    cursor.handle_axis_tooltip(&event);
    assert!(!cursor.line_x().expect("line x").is_visible());

    event.axis = AxisId(99);
    event.visible = true;
    cursor.handle_axis_tooltip(&event);
    assert!(!cursor.line_x().expect("line x").is_visible());
}

#[test]
fn snapping_moves_lines_to_the_data_item() {
    let mut cursor = cursor();
    cursor.set_snap_to_series(vec![SeriesRef::new(SERIES)]);
    cursor.trigger_move(Point::new(100.0, 50.0), None, false);
    // Pointer moves no longer drive the lines.
    assert_eq!(cursor.line_x().map(|line| line.x()), Some(0.0));

    cursor.handle_series_tooltip(&series_tooltip(Point::new(200.0, 100.0), 0.0));
    assert_eq!(cursor.point(), Point::new(200.0, 100.0));
    assert_eq!(cursor.x_position(), 0.5);
    assert_eq!(cursor.y_position(), 0.6667);
    assert_eq!(cursor.line_x().map(|line| line.x()), Some(200.0));
    assert_eq!(cursor.line_y().map(|line| line.y()), Some(100.0));
}

#[test]
fn snapped_lines_animate_over_the_tooltip_duration() {
    let mut cursor = cursor();
    cursor.set_snap_to_series(vec![SeriesRef::new(SERIES)]);
    cursor.trigger_move(Point::new(100.0, 50.0), None, false);
    cursor.handle_series_tooltip(&series_tooltip(Point::new(200.0, 100.0), 100.0));
    assert!(cursor.line_x().expect("line x").is_animating());

    assert!(cursor.advance(50.0));
    assert_eq!(cursor.line_x().map(|line| line.x()), Some(100.0));
    assert!(!cursor.advance(50.0));
    assert_eq!(cursor.line_x().map(|line| line.x()), Some(200.0));
}

#[test]
fn hidden_series_returns_control_to_the_pointer() {
    let mut cursor = cursor();
    cursor.set_snap_to_series(vec![SeriesRef::new(SERIES)]);
    assert!(cursor.set_series_hidden(SERIES, true));
    assert!(!cursor.set_series_hidden(SeriesId(42), true));

    cursor.trigger_move(Point::new(100.0, 50.0), None, false);
    assert_eq!(cursor.line_x().map(|line| line.x()), Some(100.0));
}

#[test]
fn series_tooltips_are_ignored_during_a_gesture() {
    let mut cursor = cursor();
    cursor.set_snap_to_series(vec![SeriesRef::new(SERIES)]);
    cursor.trigger_move(Point::new(100.0, 50.0), None, false);
    let _ = cursor.trigger_down(Point::new(100.0, 50.0));
    cursor.handle_series_tooltip(&series_tooltip(Point::new(300.0, 100.0), 0.0));
    assert_eq!(cursor.point(), Point::new(100.0, 50.0));

    // Lines track the pointer while a gesture is active.
    cursor.trigger_move(Point::new(250.0, 60.0), None, false);
    assert_eq!(cursor.line_x().map(|line| line.x()), Some(250.0));
}

#[test]
fn tooltips_from_unbound_series_are_ignored() {
    let mut cursor = cursor();
    cursor.trigger_move(Point::new(100.0, 50.0), None, false);
    cursor.handle_series_tooltip(&series_tooltip(Point::new(300.0, 100.0), 0.0));
    assert_eq!(cursor.point(), Point::new(100.0, 50.0));
}
