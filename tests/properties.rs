//! Behavioural properties checked over a set of small polygons.

use poly_fill::line_bresenham::bresenham;
use poly_fill::point_in_polygon::classify;
use poly_fill::{Algorithm, Classification, FillError, Filler, Vertex};

fn filler() -> Filler {
    Filler::new(40, 40)
}

fn shapes() -> Vec<Vec<Vertex>> {
    vec![
        vec![(1, 1), (1, 5), (5, 5), (5, 1)],
        vec![(1, 1), (5, 5), (5, 1)],
        vec![(2, 10), (12, 20), (22, 10), (12, 0)],
        vec![(0, 0), (6, 0), (6, 6), (0, 6), (0, 4), (4, 4), (4, 2), (0, 2)],
        vec![(3, 7), (30, 2), (25, 33), (9, 28)],
        vec![(-5, -5), (-5, 50), (50, 50)],
    ]
}

#[test]
fn fills_are_idempotent() {
    for shape in shapes() {
        for algorithm in Algorithm::ALL {
            let a = filler().fill(&shape, algorithm, None).unwrap();
            let b = filler().fill(&shape, algorithm, None).unwrap();
            assert_eq!(a.grid, b.grid, "{} on {:?}", algorithm, shape);
        }
    }
}

#[test]
fn convex_shapes_agree_across_algorithms() {
    // Axis-aligned and 45 degree edges, where Bresenham cells are exactly
    // the cells on the edge.
    let cases: [(&[Vertex], (i32, i32)); 3] = [
        (&[(1, 1), (1, 5), (5, 5), (5, 1)], (3, 3)),
        (&[(2, 10), (12, 20), (22, 10), (12, 0)], (12, 10)),
        (&[(0, 0), (0, 9), (9, 9)], (1, 5)),
    ];
    for (shape, seed) in cases {
        let fast = filler().fill(shape, Algorithm::Fast, None).unwrap();
        let rourke = filler().fill(shape, Algorithm::Rourke, None).unwrap();
        let flood = filler().fill(shape, Algorithm::Flood, Some(seed)).unwrap();
        let vs_rourke = fast.grid.compare(&rourke.grid).unwrap();
        let vs_flood = fast.grid.compare(&flood.grid).unwrap();
        assert!(vs_rourke.identical, "{:?}: {}", shape, vs_rourke);
        assert!(vs_flood.identical, "{:?}: {}", shape, vs_flood);
    }
}

#[test]
fn bresenham_is_symmetric() {
    let ends = [(0, 0), (9, 4), (-7, 3), (2, -11), (5, 5), (-3, -8), (0, 6)];
    for &(x0, y0) in &ends {
        for &(x1, y1) in &ends {
            let forward: Vec<_> = bresenham(x0, y0, x1, y1).collect();
            let mut backward: Vec<_> = bresenham(x1, y1, x0, y0).collect();
            backward.reverse();
            assert_eq!(forward, backward);
        }
    }
}

#[test]
fn vertices_classify_as_vertex_in_both_windings() {
    for shape in shapes() {
        let mut reversed = shape.clone();
        reversed.reverse();
        for &(r, c) in &shape {
            assert_eq!(classify(&shape, r as f64, c as f64), Classification::Vertex);
            assert_eq!(classify(&reversed, r as f64, c as f64), Classification::Vertex);
        }
    }
}

#[test]
fn flood_default_seed_equals_low_corner_seed() {
    for shape in shapes() {
        let min_row = shape.iter().map(|v| v.0).min().unwrap();
        let min_col = shape.iter().map(|v| v.1).min().unwrap();
        let implicit = filler().fill(&shape, Algorithm::Flood, None);
        let explicit = filler().fill(&shape, Algorithm::Flood, Some((min_row, min_col)));
        match (implicit, explicit) {
            (Ok(a), Ok(b)) => assert_eq!(a.grid, b.grid, "{:?}", shape),
            // A low corner off the grid is rejected only when passed explicitly.
            (Ok(_), Err(FillError::OutOfBounds { .. })) => assert!(min_row < 0 || min_col < 0),
            (a, b) => panic!("{:?}: {:?} vs {:?}", shape, a.err(), b.err()),
        }
    }
}

#[test]
fn collinear_triangle_never_errors() {
    let line: [Vertex; 3] = [(2, 2), (6, 6), (10, 10)];
    for algorithm in Algorithm::ALL {
        let result = filler().fill(&line, algorithm, None).unwrap();
        for (row, col) in result.grid.filled_cells() {
            assert_eq!(row, col, "{} filled off the segment", algorithm);
        }
    }
}
