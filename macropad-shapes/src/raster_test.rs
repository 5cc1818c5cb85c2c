use super::*;

extern crate std;

use std::vec;

fn lit(bitmap: &Bitmap, color_index: u8) -> std::vec::Vec<(i32, i32)> {
    let mut ans = std::vec::Vec::new();
    for y in 0..bitmap.height() as i32 {
        for x in 0..bitmap.width() as i32 {
            if bitmap.get(x, y) == Some(color_index) {
                ans.push((x, y));
            }
        }
    }
    ans
}

fn pts(list: &[(i32, i32)]) -> std::vec::Vec<Point> {
    list.iter().map(|p| Point::from(*p)).collect()
}

#[test]
fn horizontal_line() {
    let o = build_outline(&pts(&[(0, 0), (5, 0)]), 1, false, 1).unwrap();
    assert_eq!((o.bitmap.width(), o.bitmap.height()), (7, 2));
    assert_eq!(o.origin, Point::new(0, 0));
    assert_eq!(
        lit(&o.bitmap, 1),
        vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]
    );
}

#[test]
fn vertical_line_any_direction() {
    let mut a = Bitmap::new(3, 6);
    let mut b = Bitmap::new(3, 6);
    draw_line(&mut a, Point::new(1, 0), Point::new(1, 4), 2, 1);
    draw_line(&mut b, Point::new(1, 4), Point::new(1, 0), 2, 1);
    assert_eq!(a, b);
    assert_eq!(lit(&a, 2), vec![(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)]);
}

#[test]
fn shallow_bresenham() {
    let mut b = Bitmap::new(6, 4);
    draw_line(&mut b, Point::new(0, 0), Point::new(4, 2), 1, 1);
    assert_eq!(lit(&b, 1), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);

    let mut r = Bitmap::new(6, 4);
    draw_line(&mut r, Point::new(4, 2), Point::new(0, 0), 1, 1);
    assert_eq!(b, r);
}

#[test]
fn steep_bresenham() {
    let mut b = Bitmap::new(3, 5);
    draw_line(&mut b, Point::new(0, 0), Point::new(1, 3), 1, 1);
    assert_eq!(lit(&b, 1), vec![(0, 0), (0, 1), (1, 2), (1, 3)]);
}

#[test]
fn rising_line() {
    let mut b = Bitmap::new(5, 5);
    draw_line(&mut b, Point::new(0, 3), Point::new(3, 0), 1, 1);
    assert_eq!(lit(&b, 1), vec![(3, 0), (2, 1), (1, 2), (0, 3)]);
}

#[test]
fn lines_are_connected() {
    for x1 in 0..7 {
        for y1 in 0..7 {
            let mut b = Bitmap::new(8, 8);
            let (p0, p1) = (Point::new(0, 0), Point::new(x1, y1));
            draw_line(&mut b, p0, p1, 1, 1);

            assert_eq!(b.get(0, 0), Some(1), "to {p1:?}");
            assert_eq!(b.get(x1, y1), Some(1), "to {p1:?}");
            assert_eq!(b.count(1), x1.max(y1) as usize + 1, "to {p1:?}");

            // every lit pixel touches another one
            let on = lit(&b, 1);
            if on.len() > 1 {
                for (x, y) in on.iter() {
                    let touching = on
                        .iter()
                        .any(|(a, c)| (a, c) != (x, y) && (a - x).abs() <= 1 && (c - y).abs() <= 1);
                    assert!(touching, "({x},{y}) to {p1:?}");
                }
            }
        }
    }
}

#[test]
fn repeated_point_is_one_dab() {
    let mut b = Bitmap::new(6, 6);
    draw_line(&mut b, Point::new(2, 2), Point::new(2, 2), 1, 1);
    assert_eq!(lit(&b, 1), vec![(2, 2)]);

    let mut b = Bitmap::new(6, 6);
    draw_line(&mut b, Point::new(2, 2), Point::new(2, 2), 1, 3);
    assert_eq!(b.count(1), 9);
    assert_eq!(b.get(2, 2), Some(1));
    assert_eq!(b.get(4, 4), Some(1));
    assert_eq!(b.get(5, 5), Some(0));
}

#[test]
fn thick_line_stays_inside() {
    let o = build_outline(&pts(&[(0, 0), (2, 0)]), 1, false, 2).unwrap();
    assert_eq!((o.bitmap.width(), o.bitmap.height()), (5, 3));
    assert_eq!(o.bitmap.count(1), 8);
    assert_eq!(lit(&o.bitmap, 1)[..4], [(0, 0), (1, 0), (2, 0), (3, 0)]);

    // a stroke wider than the margin clips rather than failing
    let mut b = Bitmap::new(3, 3);
    draw_line(&mut b, Point::new(1, 1), Point::new(2, 2), 1, 4);
    assert_eq!(b.count(1), 4);
}

#[test]
fn size_is_bounds_plus_stroke() {
    for stroke in 1..5u16 {
        let points = pts(&[(-3, 4), (10, -2), (5, 9)]);
        let o = build_outline(&points, 1, true, stroke).unwrap();
        assert_eq!(o.bitmap.width(), 14 + stroke as usize);
        assert_eq!(o.bitmap.height(), 12 + stroke as usize);
        assert_eq!(o.origin, Point::new(-3, -2));
    }
}

#[test]
fn closed_path_joins_ends() {
    let points = pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
    let open = build_outline(&points, 1, false, 1).unwrap();
    let closed = build_outline(&points, 1, true, 1).unwrap();

    assert_eq!(open.bitmap.get(0, 2), Some(0));
    assert_eq!(closed.bitmap.get(0, 2), Some(1));
    assert_eq!(open.bitmap.count(1), 13);
    assert_eq!(closed.bitmap.count(1), 16);
}

#[test]
fn points_are_translated() {
    let o = build_outline(&pts(&[(10, 20), (12, 20)]), 3, false, 1).unwrap();
    assert_eq!(o.origin, Point::new(10, 20));
    assert_eq!(lit(&o.bitmap, 3), vec![(0, 0), (1, 0), (2, 0)]);
}

#[test]
fn single_point_path() {
    let open = build_outline(&pts(&[(3, 3)]), 1, false, 2).unwrap();
    assert_eq!(open.bitmap.count(1), 0);

    let closed = build_outline(&pts(&[(3, 3)]), 1, true, 2).unwrap();
    assert_eq!(closed.bitmap.count(1), 4);
}

#[test]
fn rebuild_is_identical() {
    let points = pts(&[(0, 0), (7, 3), (2, 9), (-4, 1)]);
    assert_eq!(
        build_outline(&points, 1, true, 2).unwrap(),
        build_outline(&points, 1, true, 2).unwrap()
    );
}

#[test]
fn rejects_bad_geometry() {
    assert_eq!(
        build_outline(&[], 1, true, 1),
        Err(ShapeError::InvalidGeometry(Geometry::NoPoints))
    );
    assert_eq!(
        build_outline(&pts(&[(0, 0)]), 1, true, 0),
        Err(ShapeError::InvalidGeometry(Geometry::ZeroStroke))
    );
}
