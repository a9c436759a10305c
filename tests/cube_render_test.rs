use std::collections::HashSet;

use wirecube::core::Scene;
use wirecube::term::{CubeView, FrameBuffer};
use wirecube::types::{Edge, Point3, ScreenPoint, EDGE_CHAR, GRID_HEIGHT, GRID_WIDTH, VERTEX_CHAR};

fn sp(x: i32, y: i32) -> ScreenPoint {
    ScreenPoint::new(x, y)
}

#[test]
fn reference_cube_vertex_markers() {
    let fb = CubeView::default().render(&Scene::cube());

    // Back face at depth 4, front face at depth 6; coordinates truncate.
    let expected: HashSet<ScreenPoint> = [
        sp(35, 14),
        sp(45, 14),
        sp(45, 9),
        sp(35, 9),
        sp(36, 13),
        sp(43, 13),
        sp(43, 10),
        sp(36, 10),
    ]
    .into_iter()
    .collect();

    let markers: HashSet<ScreenPoint> = fb.positions_of(VERTEX_CHAR).into_iter().collect();
    assert_eq!(markers, expected);
}

#[test]
fn reference_cube_edges_connect_markers() {
    let fb = CubeView::default().render(&Scene::cube());

    // Back face top edge runs along row 9 between the two markers.
    for x in 36..45 {
        assert_eq!(fb.char_at(x, 9), Some(EDGE_CHAR), "x={x}");
    }
    // Back face left edge runs along column 35.
    for y in 10..14 {
        assert_eq!(fb.char_at(35, y), Some(EDGE_CHAR), "y={y}");
    }
    // Nothing is drawn far from the cube.
    assert_eq!(fb.char_at(0, 0), Some(' '));
    assert_eq!(fb.char_at(79, 23), Some(' '));
}

#[test]
fn frame_stats_count_visible_geometry() {
    let mut fb = FrameBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    let stats = CubeView::default().render_into(&Scene::cube(), &mut fb);
    assert_eq!(stats.visible_vertices, 8);
    assert_eq!(stats.drawn_edges, 12);

    // Back face behind the camera: only the front square remains.
    let mut scene = Scene::cube();
    scene.set_frame(50, -0.1);
    let stats = CubeView::default().render_into(&scene, &mut fb);
    assert_eq!(stats.visible_vertices, 4);
    assert_eq!(stats.drawn_edges, 4);
}

#[test]
fn close_cube_overflowing_the_grid_is_clipped() {
    let mut scene = Scene::cube();
    // Front face at depth ~0.7: corners land above and below the grid while
    // the side edges cross it.
    scene.set_frame(53, -0.1);
    let mut fb = FrameBuffer::new(GRID_WIDTH, GRID_HEIGHT);
    CubeView::default().render_into(&scene, &mut fb);
    assert_eq!(fb.cells().len(), GRID_WIDTH as usize * GRID_HEIGHT as usize);
    assert!(fb.positions_of(VERTEX_CHAR).is_empty());
    for y in 0..GRID_HEIGHT as i32 {
        assert_eq!(fb.char_at(11, y), Some(EDGE_CHAR), "y={y}");
        assert_eq!(fb.char_at(68, y), Some(EDGE_CHAR), "y={y}");
    }
}

static WIDE_VERTICES: [Point3; 2] = [Point3::new(-1e12, 0.0, 0.0), Point3::new(1e12, 0.0, 0.0)];
static WIDE_EDGES: [Edge; 1] = [Edge::new(0, 1)];

#[test]
fn huge_scene_coordinates_render_clipped() {
    let scene = Scene::new(&WIDE_VERTICES, &WIDE_EDGES).unwrap();
    let fb = CubeView::default().render(&scene);

    assert_eq!(fb.row_string(12), Some("#".repeat(GRID_WIDTH as usize)));
    assert_eq!(fb.positions_of(EDGE_CHAR).len(), GRID_WIDTH as usize);
    assert!(fb.positions_of(VERTEX_CHAR).is_empty());
}
