//! Static scene geometry, baked into one vertex and one index buffer.

use std::{mem::size_of, ops::Range};

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub(crate) struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
    uv: [f32; 2],
}

impl Vertex {
    pub(crate) const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: size_of::<Self>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2],
    };
}

/// Index range of one mesh within the shared index buffer.
#[derive(Clone, Debug)]
pub(crate) struct Mesh {
    pub(crate) indices: Range<u32>,
}

pub(crate) struct Geometry {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) floor: Mesh,
    pub(crate) wall: Mesh,
    pub(crate) mirror: Mesh,
    pub(crate) cube: Mesh,
}

impl Geometry {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let mut builder = MeshBuilder::default();

        // floor, a 20x20 quad at y = 0
        let floor = builder.quad([
            vertex([-10.0, 0.0, -10.0], [0.0, 1.0, 0.0], [0.0, 0.0]),
            vertex([10.0, 0.0, -10.0], [0.0, 1.0, 0.0], [1.0, 0.0]),
            vertex([10.0, 0.0, 10.0], [0.0, 1.0, 0.0], [1.0, 1.0]),
            vertex([-10.0, 0.0, 10.0], [0.0, 1.0, 0.0], [0.0, 1.0]),
        ]);

        // back wall, texture repeated twice horizontally
        let wall = builder.quad([
            vertex([-10.0, 0.0, -10.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
            vertex([10.0, 0.0, -10.0], [0.0, 0.0, 1.0], [2.0, 0.0]),
            vertex([10.0, 5.0, -10.0], [0.0, 0.0, 1.0], [2.0, 1.0]),
            vertex([-10.0, 5.0, -10.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ]);

        // mirror, hanging just in front of the back wall
        let mirror = builder.quad([
            vertex([-2.0, 1.0, -9.99], [0.0, 0.0, 1.0], [0.0, 0.0]),
            vertex([2.0, 1.0, -9.99], [0.0, 0.0, 1.0], [1.0, 0.0]),
            vertex([2.0, 3.0, -9.99], [0.0, 0.0, 1.0], [1.0, 1.0]),
            vertex([-2.0, 3.0, -9.99], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ]);

        let cube = builder.cube();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scene vertex buffer"),
            contents: bytemuck::cast_slice(&builder.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scene index buffer"),
            contents: bytemuck::cast_slice(&builder.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            floor,
            wall,
            mirror,
            cube,
        }
    }
}

const fn vertex(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Vertex {
    Vertex {
        position,
        normal,
        uv,
    }
}

#[derive(Default)]
struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
}

impl MeshBuilder {
    /// Appends one quad as two triangles and returns its mesh range.
    fn quad(&mut self, corners: [Vertex; 4]) -> Mesh {
        let start = self.index_count();
        self.push_quad(corners);
        Mesh {
            indices: start..self.index_count(),
        }
    }

    /// Appends a unit cube with per-face normals.
    fn cube(&mut self) -> Mesh {
        let start = self.index_count();
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            (
                [0.0, 0.0, -1.0],
                [
                    [-0.5, -0.5, -0.5],
                    [0.5, -0.5, -0.5],
                    [0.5, 0.5, -0.5],
                    [-0.5, 0.5, -0.5],
                ],
            ),
            (
                [0.0, 0.0, 1.0],
                [
                    [-0.5, -0.5, 0.5],
                    [0.5, -0.5, 0.5],
                    [0.5, 0.5, 0.5],
                    [-0.5, 0.5, 0.5],
                ],
            ),
            (
                [-1.0, 0.0, 0.0],
                [
                    [-0.5, 0.5, 0.5],
                    [-0.5, 0.5, -0.5],
                    [-0.5, -0.5, -0.5],
                    [-0.5, -0.5, 0.5],
                ],
            ),
            (
                [1.0, 0.0, 0.0],
                [
                    [0.5, 0.5, 0.5],
                    [0.5, 0.5, -0.5],
                    [0.5, -0.5, -0.5],
                    [0.5, -0.5, 0.5],
                ],
            ),
            (
                [0.0, -1.0, 0.0],
                [
                    [-0.5, -0.5, -0.5],
                    [0.5, -0.5, -0.5],
                    [0.5, -0.5, 0.5],
                    [-0.5, -0.5, 0.5],
                ],
            ),
            (
                [0.0, 1.0, 0.0],
                [
                    [-0.5, 0.5, -0.5],
                    [0.5, 0.5, -0.5],
                    [0.5, 0.5, 0.5],
                    [-0.5, 0.5, 0.5],
                ],
            ),
        ];
        const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

        for (normal, positions) in faces {
            let mut corners = [vertex([0.0; 3], normal, [0.0; 2]); 4];
            for (corner, (position, uv)) in corners
                .iter_mut()
                .zip(positions.into_iter().zip(FACE_UVS.into_iter()))
            {
                *corner = vertex(position, normal, uv);
            }
            self.push_quad(corners);
        }

        Mesh {
            indices: start..self.index_count(),
        }
    }

    fn push_quad(&mut self, corners: [Vertex; 4]) {
        #[expect(clippy::cast_possible_truncation, reason = "vertex counts are tiny")]
        let base = self.vertices.len() as u16;
        self.vertices.extend_from_slice(&corners);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    fn index_count(&self) -> u32 {
        #[expect(clippy::cast_possible_truncation, reason = "index counts are tiny")]
        {
            self.indices.len() as u32
        }
    }
}
