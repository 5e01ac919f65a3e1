//! End-to-end checks: OBJ file on disk -> Mesh -> scene script -> server

use std::path::PathBuf;

use approx::assert_relative_eq;
use raster_engine::prelude::*;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("raster_engine_it_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_triangle_from_disk_in_source_order() {
    let path = write_temp("tri.obj", "v 1 0 0\nv 0 1 0\nv 0 0 1\nf 1 2 3\n");

    let mut mesh = Mesh::new();
    mesh.load(&path).unwrap();

    let expected = [
        Vec4::new(1.0, 0.0, 0.0, 1.0),
        Vec4::new(0.0, 1.0, 0.0, 1.0),
        Vec4::new(0.0, 0.0, 1.0, 1.0),
    ];
    assert_eq!(mesh.triangle_count(), 1);
    for (point, position) in mesh.points().iter().zip(expected) {
        assert_eq!(point.position, position);
    }

    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_is_reported_and_mesh_untouched() {
    let mut mesh = Mesh::new();
    mesh.load_from_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

    let err = mesh.load(std::env::temp_dir().join("raster_engine_it_missing.obj")).unwrap_err();
    assert!(matches!(err, MeshError::Obj(ObjError::Io(_))));
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn out_of_range_face_fails_load() {
    let path = write_temp("bad.obj", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 99\n");

    let mut mesh = Mesh::new();
    let err = mesh.load(&path).unwrap_err();
    assert!(matches!(err, MeshError::Obj(ObjError::IndexOutOfRange { index: 99, count: 3, .. })));
    assert!(mesh.is_empty());
    assert!(err.to_string().contains("99"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn rasterizer_style_interpolation_over_loaded_triangle() {
    let mut mesh = Mesh::new();
    mesh.load_from_str("v 0 0 0 1 0 0\nv 2 0 0 0 1 0\nv 0 2 0 0 0 1\nf 1 2 3\n").unwrap();
    let [a, b, c] = mesh.triangles().next().unwrap();

    let mid_edge = Point::barycentric(a, b, c, Vec3::new(0.5, 0.5, 0.0));
    assert_relative_eq!(mid_edge.position, Vec4::new(1.0, 0.0, 0.0, 1.0), epsilon = 1e-6);
    assert_relative_eq!(mid_edge.color, Vec4::new(0.5, 0.5, 0.0, 1.0), epsilon = 1e-6);
}

#[test]
fn scene_frame_reaches_server() {
    let mut mesh = Mesh::new();
    mesh.load_from_str("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n").unwrap();
    let expected = mesh.points().to_vec();

    let mut scene = Scene::new();
    let node = scene.add_node("quad");
    scene.attach_script(node, MeshRenderer::new(mesh)).unwrap();

    let mut server = PolygonRecorder::new();
    scene.process(0.5);
    scene.draw(&mut server);

    assert_eq!(server.draw_calls(), 1);
    assert_eq!(server.polygons()[0], expected);
}
