use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CardVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct CardMesh {
    pub vertices: Vec<CardVertex>,
    pub indices: Vec<u32>,
}

/// Gentle bend applied to the flat card so lighting picks up some shape.
#[inline]
pub fn card_surface_z(x: f32, y: f32) -> f32 {
    (x * 0.3).sin() * 0.08 + (y * 0.2).sin() * 0.04
}

/// Subdivided plane centered on the origin, facing +Z, displaced by
/// [`card_surface_z`]. Row 0 is the top edge; `uv` (0,0) is the top-left
/// texel so texture rows map directly.
pub fn curved_card_mesh(width: f32, height: f32, segments_x: u32, segments_y: u32) -> CardMesh {
    let gx = segments_x.max(1);
    let gy = segments_y.max(1);
    let cols = gx + 1;
    let rows = gy + 1;
    let seg_w = width / gx as f32;
    let seg_h = height / gy as f32;

    let mut vertices = Vec::with_capacity((cols * rows) as usize);
    for iy in 0..rows {
        let y = height * 0.5 - iy as f32 * seg_h;
        for ix in 0..cols {
            let x = ix as f32 * seg_w - width * 0.5;
            vertices.push(CardVertex {
                position: [x, y, card_surface_z(x, y)],
                normal: [0.0, 0.0, 0.0],
                uv: [ix as f32 / gx as f32, iy as f32 / gy as f32],
            });
        }
    }

    let mut indices = Vec::with_capacity((gx * gy * 6) as usize);
    for iy in 0..gy {
        for ix in 0..gx {
            let a = ix + cols * iy;
            let b = ix + cols * (iy + 1);
            let c = (ix + 1) + cols * (iy + 1);
            let d = (ix + 1) + cols * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    compute_smooth_normals(&mut vertices, &indices);
    CardMesh { vertices, indices }
}

/// Area-weighted vertex normals from triangle faces.
fn compute_smooth_normals(vertices: &mut [CardVertex], indices: &[u32]) {
    let mut acc = vec![Vec3::ZERO; vertices.len()];
    for tri in indices.chunks_exact(3) {
        let [ia, ib, ic] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let pa = Vec3::from(vertices[ia].position);
        let pb = Vec3::from(vertices[ib].position);
        let pc = Vec3::from(vertices[ic].position);
        let face = (pc - pb).cross(pa - pb);
        acc[ia] += face;
        acc[ib] += face;
        acc[ic] += face;
    }
    for (v, n) in vertices.iter_mut().zip(acc) {
        v.normal = n.normalize_or_zero().to_array();
    }
}
