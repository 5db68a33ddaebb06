use chart_cursor::core::Point;
use chart_cursor::render::path::{
    ArcOptions, Rect, SpiralSpec, arc, arc_to, arc_to_point, close_path, cubic_curve_to, line_to,
    move_to, polyline, polyline_with_step, quadratic_curve_to, rect_to_path, rectangle,
    spiral_points,
};

fn relative_arc_offsets(path: &str) -> Vec<(f64, f64)> {
    path.split(" a")
        .skip(1)
        .map(|command| {
            let fields: Vec<f64> = command
                .split(',')
                .map(|field| field.trim().parse().expect("numeric field"))
                .collect();
            assert_eq!(fields.len(), 7, "arc command `{command}`");
            (fields[5], fields[6])
        })
        .collect()
}

#[test]
fn primitive_commands_use_rounded_coordinates() {
    assert_eq!(move_to(Point::new(1.0, 2.0)), " M1,2 ");
    assert_eq!(line_to(Point::new(0.123456, -4.0)), " L0.1235,-4 ");
    assert_eq!(close_path(), " Z");
    assert_eq!(
        quadratic_curve_to(Point::new(10.0, 0.0), Point::new(5.0, 5.0)),
        " Q5,5 10,0"
    );
    assert_eq!(
        cubic_curve_to(
            Point::new(3.0, 3.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0)
        ),
        " C1,0 2,0 3,3"
    );
}

#[test]
fn negative_zero_is_never_emitted() {
    assert_eq!(move_to(Point::new(-0.00001, -0.0)), " M0,0 ");
}

#[test]
fn polyline_skips_vertices_within_min_step() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(0.2, 0.2),
        Point::new(10.0, 0.0),
        Point::new(10.1, 0.0),
        Point::new(20.0, 0.0),
    ];
    assert_eq!(polyline(&points), " M0,0  L10,0  L20,0 ");
    assert_eq!(polyline(&[]), "");
    assert_eq!(
        polyline_with_step(&points, 0.0),
        " M0,0  L0.2,0.2  L10,0  L10.1,0  L20,0 "
    );
}

#[test]
fn arc_to_splits_every_half_turn() {
    assert_eq!(arc_to(0.0, 90.0, 10.0, None).matches(" a").count(), 1);
    assert_eq!(arc_to(0.0, 180.0, 10.0, None).matches(" a").count(), 1);
    assert_eq!(arc_to(0.0, 181.0, 10.0, None).matches(" a").count(), 2);
    assert_eq!(arc_to(0.0, 360.0, 10.0, None).matches(" a").count(), 2);
    assert_eq!(arc_to(0.0, -540.0, 10.0, None).matches(" a").count(), 3);
}

#[test]
fn arc_to_sweep_flag_follows_direction() {
    assert!(arc_to(0.0, 90.0, 10.0, None).starts_with(" a10,10,0,0,1,"));
    assert!(arc_to(0.0, -90.0, 10.0, None).starts_with(" a10,10,0,0,0,"));
}

#[test]
fn arc_to_ends_at_the_arc_end() {
    let offsets = relative_arc_offsets(&arc_to(0.0, 90.0, 10.0, None));
    let (dx, dy): (f64, f64) = offsets
        .iter()
        .fold((0.0, 0.0), |(x, y), (dx, dy)| (x + dx, y + dy));
    assert!((dx - -10.0).abs() <= 1e-9);
    assert!((dy - 10.0).abs() <= 1e-9);
}

#[test]
fn full_circle_arc_returns_to_its_start() {
    let offsets = relative_arc_offsets(&arc_to(-90.0, 360.0, 50.0, Some(25.0)));
    let (dx, dy): (f64, f64) = offsets
        .iter()
        .fold((0.0, 0.0), |(x, y), (dx, dy)| (x + dx, y + dy));
    assert!(dx.abs() <= 1e-9);
    assert!(dy.abs() <= 1e-9);
}

#[test]
fn degenerate_arcs_are_empty() {
    assert_eq!(arc_to(0.0, 0.0, 10.0, None), "");
    assert_eq!(arc_to(0.0, f64::NAN, 10.0, None), "");
    assert_eq!(arc(0.0, 0.0, 10.0, ArcOptions::default()), "");
    assert_eq!(arc(0.0, 90.0, 0.0, ArcOptions::default()), "");
}

#[test]
fn flat_arc_on_huge_radius_becomes_a_line() {
    let path = arc_to(0.0, 0.1, 5_000.0, None);
    assert!(path.starts_with(" L"));
    assert!(!path.contains(" a"));
}

#[test]
fn arc_to_point_with_zero_radius_is_empty() {
    assert_eq!(
        arc_to_point(Point::new(1.0, 1.0), 0.0, None, true, false, 0.0),
        ""
    );
    assert_eq!(
        arc_to_point(Point::new(1.0, 1.0), 5.0, Some(4.0), true, false, 0.0),
        " A5,4,0,0,1,1,1"
    );
}

#[test]
fn full_ring_drops_corner_rounding() {
    let options = ArcOptions::default()
        .with_inner_radius(40.0)
        .with_corner_radius(8.0);
    let ring = arc(0.0, 360.0, 100.0, options);
    assert!(!ring.is_empty());
    assert!(!ring.contains(" A"));

    let over_full = arc(0.0, 720.0, 100.0, options);
    assert_eq!(ring, over_full);
}

#[test]
fn rounded_sector_uses_corner_arcs() {
    let options = ArcOptions::default()
        .with_inner_radius(40.0)
        .with_corner_radius(8.0);
    let sector = arc(0.0, 90.0, 100.0, options);
    assert!(sector.contains(" A"));
    assert!(sector.starts_with(" M"));
}

#[test]
fn swapped_radii_describe_the_same_ring() {
    let options = ArcOptions::default().with_inner_radius(100.0);
    let swapped = arc(0.0, 90.0, 40.0, options);
    let ordered = arc(0.0, 90.0, 100.0, ArcOptions::default().with_inner_radius(40.0));
    assert_eq!(swapped, ordered);
}

#[test]
fn swapped_radii_with_zero_outer_stay_finite() {
    let options = ArcOptions::default().with_inner_radius(50.0).with_radius_y(20.0);
    let path = arc(0.0, 90.0, 0.0, options);
    assert!(!path.contains("NaN"));
    assert!(!path.contains("inf"));
}

#[test]
fn rectangle_and_rect_to_path_agree_on_clockwise_winding() {
    assert_eq!(
        rectangle(10.0, 5.0, 1.0, 2.0),
        " M1,2  L11,2  L11,7  L1,7  Z"
    );
    assert_eq!(
        rect_to_path(Rect::new(1.0, 2.0, 10.0, 5.0), false),
        rectangle(10.0, 5.0, 1.0, 2.0)
    );
    assert_eq!(
        rect_to_path(Rect::new(0.0, 0.0, 2.0, 1.0), true),
        " M0,0  L0,1  L2,1  L2,0  Z"
    );
}

#[test]
fn spiral_grows_outwards_and_stops_at_radius() {
    let spec = SpiralSpec {
        cx: 0.0,
        cy: 0.0,
        radius_x: 100.0,
        radius_y: 100.0,
        inner_radius: 0.0,
        step: 5.0,
        radius_step: 20.0,
        start_angle: 0.0,
        end_angle: None,
    };
    let points = spiral_points(spec);
    assert!(points.len() > 10);
    let first = points.first().expect("first point");
    let last = points.last().expect("last point");
    assert!(first.x.hypot(first.y) < last.x.hypot(last.y));
    for point in &points {
        assert!(point.x.hypot(point.y) <= 100.0 + 20.0 + 1e-9);
    }
}

#[test]
fn spiral_with_invalid_steps_is_empty() {
    let spec = SpiralSpec {
        cx: 0.0,
        cy: 0.0,
        radius_x: 100.0,
        radius_y: 100.0,
        inner_radius: 0.0,
        step: 0.0,
        radius_step: 20.0,
        start_angle: 0.0,
        end_angle: None,
    };
    assert!(spiral_points(spec).is_empty());
    assert!(
        spiral_points(SpiralSpec {
            step: 5.0,
            radius_step: -1.0,
            ..spec
        })
        .is_empty()
    );
}
