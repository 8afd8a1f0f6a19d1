/// Vertex layout shared with `shaders/scene.wgsl`.
///
/// `kind` selects the surface: 0 = tinted model, 1 = ground.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub kind: f32,
}

pub const KIND_MODEL: f32 = 0.0;
pub const KIND_GROUND: f32 = 1.0;

#[derive(Default, Debug)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3], kind: f32) {
        let base = self.vertices.len() as u16;
        for pos in corners {
            self.vertices.push(Vertex { pos, normal, kind });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Axis-aligned box, one quad per face so normals stay flat.
    pub fn push_box(&mut self, center: [f32; 3], half: [f32; 3]) {
        let [cx, cy, cz] = center;
        let [hx, hy, hz] = half;
        let (x0, x1) = (cx - hx, cx + hx);
        let (y0, y1) = (cy - hy, cy + hy);
        let (z0, z1) = (cz - hz, cz + hz);
        let k = KIND_MODEL;
        self.push_quad([[x1, y0, z0], [x1, y1, z0], [x1, y1, z1], [x1, y0, z1]], [1.0, 0.0, 0.0], k);
        self.push_quad([[x0, y0, z1], [x0, y1, z1], [x0, y1, z0], [x0, y0, z0]], [-1.0, 0.0, 0.0], k);
        self.push_quad([[x0, y1, z0], [x0, y1, z1], [x1, y1, z1], [x1, y1, z0]], [0.0, 1.0, 0.0], k);
        self.push_quad([[x0, y0, z1], [x0, y0, z0], [x1, y0, z0], [x1, y0, z1]], [0.0, -1.0, 0.0], k);
        self.push_quad([[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]], [0.0, 0.0, 1.0], k);
        self.push_quad([[x1, y0, z0], [x0, y0, z0], [x0, y1, z0], [x1, y1, z0]], [0.0, 0.0, -1.0], k);
    }

    /// Square ground plane at height `y`, facing up.
    pub fn push_ground(&mut self, y: f32, half_size: f32) {
        let s = half_size;
        self.push_quad(
            [[-s, y, -s], [-s, y, s], [s, y, s], [s, y, -s]],
            [0.0, 1.0, 0.0],
            KIND_GROUND,
        );
    }
}

/// The model stand-in sitting on its ground plane.
pub fn showroom_mesh(
    model_center: [f32; 3],
    model_half_extents: [f32; 3],
    ground_y: f32,
    ground_half_size: f32,
) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.push_box(model_center, model_half_extents);
    mesh.push_ground(ground_y, ground_half_size);
    mesh
}
