use super::*;

use crate::{fill::ScanlineFill, palette::OUTLINE};

extern crate std;

fn pts(list: &[(i32, i32)]) -> Vec<Point> {
    list.iter().map(|p| Point::from(*p)).collect()
}

#[test]
fn open_quarter_arc() {
    let points = arc_points(10.0, 90.0, 0.0, 4, 1).unwrap();
    assert_eq!(
        points,
        pts(&[(7, 7), (9, 4), (10, 0), (9, -4), (7, -7)])
    );
}

#[test]
fn closed_half_ring() {
    let points = arc_points(20.0, 180.0, 90.0, 2, 3).unwrap();
    assert_eq!(points.len(), 6);
    assert_eq!(
        points,
        pts(&[(20, 0), (0, -20), (-20, 0), (-17, 0), (0, -17), (17, 0)])
    );
}

#[test]
fn direction_is_the_midpoint() {
    let points = arc_points(10.0, 60.0, 270.0, 2, 1).unwrap();
    assert_eq!(points[1], Point::new(0, 10));
}

#[test]
fn axes_are_exact() {
    assert_eq!(cos_sin_degrees(0.0), (1.0, 0.0));
    assert_eq!(cos_sin_degrees(90.0), (0.0, 1.0));
    assert_eq!(cos_sin_degrees(180.0), (-1.0, 0.0));
    assert_eq!(cos_sin_degrees(-90.0), (0.0, -1.0));
    assert_eq!(cos_sin_degrees(450.0), (0.0, 1.0));
}

#[test]
fn points_near_a_half_round_correctly() {
    // 4·cos 29° is 3.498
    assert_eq!(arc_points(4.0, 0.0, 29.0, 1, 1).unwrap(), pts(&[(3, -2), (3, -2)]));

    for r in 1..=64 {
        for deg in -180..360 {
            let p = arc_points(r as f32, 0.0, deg as f32, 1, 1).unwrap()[0];
            let alpha = (deg as f64).to_radians();
            let x = r as f64 * alpha.cos();
            let y = -r as f64 * alpha.sin();
            // exact halves depend on the last bit of either library
            if (x.abs().fract() - 0.5).abs() > 1e-9 {
                assert_eq!(p.x, x.round() as i32, "r {r} at {deg}°");
            }
            if (y.abs().fract() - 0.5).abs() > 1e-9 {
                assert_eq!(p.y, y.round() as i32, "r {r} at {deg}°");
            }
        }
    }
}

#[test]
fn zero_segments() {
    assert_eq!(
        arc_points(10.0, 90.0, 0.0, 0, 1),
        Err(ShapeError::InvalidGeometry(Geometry::ZeroSegments))
    );
    assert!(Arc::new(ArcParams::new(10.0, 90.0, 0.0, 0), None).is_err());
}

#[test]
fn open_arc_outline() {
    let mut params = ArcParams::new(10.0, 90.0, 0.0, 4);
    params.outline = Some(0xffffff);
    let arc = Arc::new(params, None).unwrap();

    assert_eq!(arc.points().len(), 5);
    let outline = arc.outline_polygon().unwrap();
    assert!(!outline.close());
    assert_eq!(outline.tile().origin, Point::new(7, -7));
    assert_eq!(outline.tile().palette.len(), 2);
    assert_eq!(outline.tile().palette.color(OUTLINE), Some(0xffffff));
    assert_eq!(
        (outline.tile().bitmap.width(), outline.tile().bitmap.height()),
        (5, 16)
    );
    assert_eq!(arc.render().len(), 1);
}

#[test]
fn open_arc_is_never_filled() {
    let vf = ScanlineFill;
    let mut params = ArcParams::new(10.0, 90.0, 0.0, 4);
    params.fill = Some(0x00ff00);
    let arc = Arc::new(params, Some(&vf)).unwrap();
    assert!(arc.fill_tile().is_none());
    assert!(arc.render().is_empty());
}

#[test]
fn closed_arc_layers() {
    let vf = ScanlineFill;
    let mut params = ArcParams::new(20.0, 180.0, 90.0, 2);
    params.arc_width = 3;
    params.outline = Some(0xffffff);
    params.fill = Some(0xff0000);
    let arc = Arc::new(params, Some(&vf)).unwrap();

    assert!(arc.outline_polygon().unwrap().close());
    let layers = arc.render();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].palette.color(1), Some(0xff0000));
    assert_eq!(layers[0].origin, Point::new(-20, -20));
    assert_eq!(layers[1].palette.color(OUTLINE), Some(0xffffff));
    assert_eq!(
        (layers[1].bitmap.width(), layers[1].bitmap.height()),
        (42, 22)
    );

    // without a filler only the outline remains
    let arc = Arc::new(params, None).unwrap();
    assert_eq!(arc.render().len(), 1);
}

#[test]
fn setters_rebuild() {
    let mut arc = Arc::new(
        ArcParams {
            outline: Some(1),
            ..ArcParams::new(10.0, 90.0, 0.0, 4)
        },
        None,
    )
    .unwrap();

    arc.set_segments(2).unwrap();
    assert_eq!(arc.points().len(), 3);

    arc.set_arc_width(2).unwrap();
    assert_eq!(arc.points().len(), 6);
    assert!(arc.outline_polygon().unwrap().close());

    arc.set_radius(20.0).unwrap();
    assert_eq!(arc.points()[1], Point::new(20, 0));

    arc.set_direction(90.0).unwrap();
    assert_eq!(arc.direction(), 90.0);
    assert_eq!(arc.points()[1], Point::new(0, -20));

    arc.set_angle(180.0).unwrap();
    assert_eq!(arc.points()[0], Point::new(20, 0));

    arc.set_outline(None).unwrap();
    assert!(arc.outline_polygon().is_none());
    assert!(arc.render().is_empty());

    arc.set_fill(Some(3)).unwrap();
    assert_eq!(arc.fill(), Some(3));
}

#[test]
fn rejected_change_keeps_arc() {
    let mut arc = Arc::new(ArcParams::new(10.0, 90.0, 0.0, 4), None).unwrap();
    assert!(arc.set_segments(0).is_err());
    assert_eq!(arc.segments(), 4);
    assert_eq!(arc.points().len(), 5);
}

#[test]
fn rebuild_is_identical() {
    let params = ArcParams {
        arc_width: 4,
        outline: Some(1),
        ..ArcParams::new(30.0, 270.0, 45.0, 12)
    };
    let a = Arc::new(params, None).unwrap();
    let b = Arc::new(params, None).unwrap();
    assert_eq!(a.points(), b.points());
    assert_eq!(a.outline_polygon(), b.outline_polygon());
}
