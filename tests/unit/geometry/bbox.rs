use super::*;
use crate::foundation::error::ErrorKind;

#[test]
fn empty_set_fails() {
    assert_eq!(
        bounding_box(&[]).unwrap_err().kind(),
        ErrorKind::EmptyPointSet
    );
}

#[test]
fn single_point_has_zero_extent() {
    let r = bounding_box(&[Point::new(3.0, -2.0)]).unwrap();
    assert_eq!(r, Rect::new(3.0, -2.0, 3.0, -2.0));
    assert_eq!(r.width(), 0.0);
    assert_eq!(r.height(), 0.0);
}

#[test]
fn unsorted_input_is_fully_scanned() {
    let pts = [
        Point::new(5.0, 1.0),
        Point::new(-3.0, 7.0),
        Point::new(2.0, -4.0),
        Point::new(9.0, 0.0),
    ];
    let r = bounding_box(&pts).unwrap();
    assert_eq!(r.x0, -3.0);
    assert_eq!(r.y0, -4.0);
    assert_eq!(r.width(), 12.0);
    assert_eq!(r.height(), 11.0);
}

#[test]
fn every_point_lies_inside() {
    let pts: Vec<Point> = (0..50)
        .map(|i| {
            let t = f64::from(i) * 0.37;
            Point::new(t.sin() * 40.0 + 3.0, t.cos() * 17.0 - 8.0)
        })
        .collect();
    let r = bounding_box(&pts).unwrap();
    assert!(r.width() >= 0.0 && r.height() >= 0.0);
    for p in &pts {
        assert!(p.x >= r.x0 && p.x <= r.x0 + r.width());
        assert!(p.y >= r.y0 && p.y <= r.y0 + r.height());
    }
}
