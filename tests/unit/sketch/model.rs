use super::*;

fn stroke(pts: &[(f64, f64)]) -> Stroke {
    Stroke::new(pts.iter().map(|&(x, y)| Point::new(x, y)).collect()).unwrap()
}

#[test]
fn empty_stroke_rejected() {
    assert!(Stroke::new(vec![]).is_err());
}

#[test]
fn empty_sketch_rejected() {
    assert!(Sketch::new(vec![]).is_err());
}

#[test]
fn points_iterate_in_stroke_order() {
    let sketch = Sketch::new(vec![
        stroke(&[(0.0, 0.0), (1.0, 0.0)]),
        stroke(&[(5.0, 5.0)]),
    ])
    .unwrap();
    let pts: Vec<Point> = sketch.points().collect();
    assert_eq!(
        pts,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(5.0, 5.0)
        ]
    );
    assert_eq!(sketch.point_count(), 3);
}

#[test]
fn clones_share_storage() {
    let a = Sketch::new(vec![stroke(&[(0.0, 0.0)])]).unwrap();
    let b = a.clone();
    let c = Sketch::new(vec![stroke(&[(0.0, 0.0)])]).unwrap();
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&c));
    assert_eq!(a, c);
}

#[test]
fn bez_path_has_one_subpath_per_stroke() {
    let sketch = Sketch::new(vec![
        stroke(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
        stroke(&[(3.0, 3.0), (4.0, 4.0)]),
    ])
    .unwrap();
    let path = sketch.to_bez_path();
    let moves = path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
    assert_eq!(path.elements().len(), 5);
}
