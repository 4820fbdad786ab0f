use super::*;

#[test]
fn level_contour_has_no_tilt() {
    let c = [
        Point::new(0.0, 10.0),
        Point::new(50.0, 80.0),
        Point::new(100.0, 10.0),
        Point::new(100.0, 12.0),
    ];
    let b = Rect::new(0.0, 10.0, 100.0, 80.0);
    assert_eq!(contour_tilt(&c, b).unwrap(), 0.0);
}

#[test]
fn tilt_uses_second_to_last_point() {
    let c = [
        Point::new(0.0, 0.0),
        Point::new(50.0, 40.0),
        Point::new(100.0, 100.0),
        Point::new(999.0, -999.0),
    ];
    let b = Rect::new(0.0, 0.0, 100.0, 100.0);
    let t = contour_tilt(&c, b).unwrap();
    assert!((t - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn two_point_contour_pairs_first_with_itself() {
    let c = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
    let (a, b) = contour_ends(&c).unwrap();
    assert_eq!(a, b);
}

#[test]
fn short_contour_fails() {
    assert!(contour_ends(&[Point::new(1.0, 1.0)]).is_err());
}

#[test]
fn zero_width_box_gives_zero_tilt() {
    let c = [Point::new(5.0, 0.0), Point::new(5.0, 9.0), Point::new(5.0, 3.0)];
    let b = Rect::new(5.0, 0.0, 5.0, 9.0);
    assert_eq!(contour_tilt(&c, b).unwrap(), 0.0);
}
