use super::*;
use crate::foundation::error::ErrorKind;
use crate::geometry::bbox::bounding_box_of;
use crate::sketch::model::Stroke;

const EPS: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

fn sketch(strokes: &[&[(f64, f64)]]) -> Sketch {
    Sketch::new(
        strokes
            .iter()
            .map(|s| Stroke::new(s.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap())
            .collect(),
    )
    .unwrap()
}

fn all_points(out: &[TransformedStroke]) -> Vec<Point> {
    out.iter().flat_map(|s| s.points.iter().copied()).collect()
}

#[test]
fn diagonal_stroke_lands_inverted_vertically() {
    let s = sketch(&[&[(0.0, 0.0), (10.0, 10.0)]]);
    let params = TransformParams::fit(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(100.0, 100.0, 120.0, 120.0),
    );
    let out = map_strokes(&s, &params).unwrap();
    assert_eq!(out.len(), 1);
    assert!(close(out[0].points[0], Point::new(100.0, 120.0)));
    assert!(close(out[0].points[1], Point::new(120.0, 100.0)));
}

#[test]
fn unit_square_fills_destination() {
    let s = sketch(&[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], &[(0.5, 0.25)]]);
    let dest = Rect::new(30.0, -5.0, 70.0, 15.0);
    let params = TransformParams::fit(Rect::new(0.0, 0.0, 1.0, 1.0), dest);
    let out = map_strokes(&s, &params).unwrap();
    let b = bounding_box_of(all_points(&out), "out").unwrap();
    assert!((b.x0 - 30.0).abs() < EPS);
    assert!((b.y0 + 5.0).abs() < EPS);
    assert!((b.width() - 40.0).abs() < EPS);
    assert!((b.height() - 20.0).abs() < EPS);
}

#[test]
fn explicit_dest_size_overrides_box_size() {
    let s = sketch(&[&[(0.0, 0.0), (1.0, 1.0)]]);
    let params = TransformParams {
        dest_width: 8.0,
        dest_height: 2.0,
        ..TransformParams::fit(Rect::new(0.0, 0.0, 1.0, 1.0), Rect::new(10.0, 10.0, 50.0, 50.0))
    };
    let out = map_strokes(&s, &params).unwrap();
    assert!(close(out[0].points[0], Point::new(10.0, 12.0)));
    assert!(close(out[0].points[1], Point::new(18.0, 10.0)));
}

#[test]
fn flip_x_twice_restores_positions() {
    let s = sketch(&[&[(1.0, 2.0), (4.0, 9.0), (7.0, 3.0)]]);
    let src = Rect::new(1.0, 2.0, 7.0, 9.0);
    let dest = Rect::new(0.0, 0.0, 60.0, 70.0);
    let plain = TransformParams::fit(src, dest).to_affine().unwrap();
    let flipped = TransformParams::fit(src, dest)
        .with_flip_x(true)
        .to_affine()
        .unwrap();

    // Mirror about the destination's vertical center line.
    let mirror = Affine::new([-1.0, 0.0, 0.0, 1.0, 60.0, 0.0]);
    for p in s.points() {
        assert!(close(mirror * (flipped * p), plain * p));
        assert!(close(mirror * (mirror * (plain * p)), plain * p));
    }
}

#[test]
fn flip_y_keeps_source_direction() {
    let s = sketch(&[&[(0.0, 0.0), (10.0, 10.0)]]);
    let params = TransformParams::fit(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(0.0, 0.0, 20.0, 20.0),
    )
    .with_flip_y(true);
    let out = map_strokes(&s, &params).unwrap();
    assert!(close(out[0].points[0], Point::new(0.0, 0.0)));
    assert!(close(out[0].points[1], Point::new(20.0, 20.0)));
}

#[test]
fn zero_rotation_is_noop() {
    let s = sketch(&[&[(3.0, 1.0), (5.0, 8.0)], &[(4.0, 4.0)]]);
    let base = TransformParams::fit(Rect::new(3.0, 1.0, 5.0, 8.0), Rect::new(10.0, 20.0, 50.0, 90.0));
    let a = map_strokes(&s, &base).unwrap();
    let b = map_strokes(&s, &base.with_rotation(0.0)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rotation_pivots_on_dest_center() {
    let s = sketch(&[&[(0.0, 0.0), (2.0, 2.0), (1.0, 1.0)]]);
    let dest = Rect::new(0.0, 0.0, 20.0, 20.0);
    let params = TransformParams::fit(Rect::new(0.0, 0.0, 2.0, 2.0), dest)
        .with_rotation(std::f64::consts::FRAC_PI_2);
    let out = map_strokes(&s, &params).unwrap();
    // Sketch center maps to box center and stays put.
    assert!(close(out[0].points[2], Point::new(10.0, 10.0)));
    // (0,20) rotated +90deg about (10,10) -> (0,0).
    assert!(close(out[0].points[0], Point::new(0.0, 0.0)));
}

#[test]
fn degenerate_source_box_fails() {
    let s = sketch(&[&[(5.0, 0.0), (5.0, 10.0)]]);
    for src in [Rect::new(5.0, 0.0, 5.0, 10.0), Rect::new(0.0, 3.0, 10.0, 3.0)] {
        let err = map_strokes(&s, &TransformParams::fit(src, Rect::new(0.0, 0.0, 1.0, 1.0)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateSourceBox);
    }
}

#[test]
fn outline_passes_points_through() {
    let pts = [Point::new(1.0, 1.0), Point::new(2.0, 3.0), Point::new(4.0, 1.0)];
    let open = outline(&pts, false).unwrap();
    assert_eq!(open.points, pts.to_vec());
    let closed = outline(&pts, true).unwrap();
    assert_eq!(closed.points.len(), 4);
    assert_eq!(closed.points[3], pts[0]);
    assert!(outline(&[], false).is_err());
}

#[test]
fn bez_path_closes_on_request() {
    let stroke = TransformedStroke {
        points: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
    };
    assert_eq!(stroke.to_bez_path(false).elements().len(), 2);
    assert_eq!(stroke.to_bez_path(true).elements().len(), 3);
}
