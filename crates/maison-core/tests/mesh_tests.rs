// Host-side tests for torus generation.

use maison_core::mesh::torus;

#[test]
fn torus_vertex_and_index_counts() {
    let (vertices, indices) = torus(1.0, 0.3, 16, 100);
    assert_eq!(vertices.len(), (16 + 1) * (100 + 1));
    assert_eq!(indices.len(), 16 * 100 * 6);
}

#[test]
fn torus_indices_are_in_range() {
    let (vertices, indices) = torus(1.0, 0.1, 8, 24);
    let n = vertices.len() as u32;
    assert!(indices.iter().all(|&i| i < n));
}

#[test]
fn torus_normals_are_unit_length() {
    let (vertices, _) = torus(1.0, 0.3, 16, 100);
    for v in &vertices {
        let [x, y, z] = v.normal;
        let len = (x * x + y * y + z * z).sqrt();
        assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
    }
}

#[test]
fn torus_vertices_lie_on_the_tube_surface() {
    let (radius, tube) = (1.0f32, 0.3f32);
    let (vertices, _) = torus(radius, tube, 16, 100);
    for v in &vertices {
        let [x, y, z] = v.position;
        // Distance from the ring's center circle must equal the tube radius.
        let ring = (x * x + y * y).sqrt() - radius;
        let d = (ring * ring + z * z).sqrt();
        assert!((d - tube).abs() < 1e-4, "tube distance {d}");
    }
}

#[test]
fn torus_triangles_are_non_degenerate() {
    let (vertices, indices) = torus(1.0, 0.3, 8, 16);
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (
            vertices[tri[0] as usize].position,
            vertices[tri[1] as usize].position,
            vertices[tri[2] as usize].position,
        );
        assert!(a != b && b != c && a != c);
    }
}
