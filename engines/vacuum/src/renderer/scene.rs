//! The 3D scene pass: floor, wall, mirror, robot, collectibles, lamps.

use std::{borrow::Cow, mem::size_of, num::NonZeroU64, path::Path};

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use super::{
    depth_texture::DepthTexture,
    geometry::{Geometry, Mesh, Vertex},
    textures,
};
use crate::render_state::RenderState;

/// Upper bound on drawn objects per frame; a handful of static meshes
/// plus one cube per collectible fits with plenty of headroom.
const MAX_OBJECTS: usize = 64;

/// Stride between per-object uniform slots. Matches the guaranteed
/// minimum uniform buffer offset alignment of every adapter.
const OBJECT_STRIDE: usize = 256;

const MODE_LIT: u32 = 0;
const MODE_MIRROR: u32 = 1;
const MODE_LAMP: u32 = 2;

const COLLECTIBLE_SCALE: f32 = 0.7;
const LAMP_SCALE: f32 = 0.2;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_position: [f32; 4],
    spot_position: [f32; 4],
    // xyz: direction, w: inner cutoff cosine
    spot_direction: [f32; 4],
    // xyz: color, w: outer cutoff cosine
    spot_color: [f32; 4],
    lamp_positions: [[f32; 4]; 3],
    lamp_colors: [[f32; 4]; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct ObjectData {
    model: [[f32; 4]; 4],
    // x: object mode, yzw: padding
    mode: [u32; 4],
}

impl ObjectData {
    fn new(model: Mat4, mode: u32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            mode: [mode, 0, 0, 0],
        }
    }
}

#[derive(Clone, Copy)]
enum MeshKind {
    Floor,
    Wall,
    Mirror,
    Cube,
}

#[derive(Clone, Copy)]
enum MaterialKind {
    Floor,
    Wall,
    Plain,
}

struct SceneObject {
    data: ObjectData,
    mesh: MeshKind,
    material: MaterialKind,
}

pub(crate) struct ScenePass {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    objects_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    floor_material: wgpu::BindGroup,
    wall_material: wgpu::BindGroup,
    plain_material: wgpu::BindGroup,
    skybox_bind_group: wgpu::BindGroup,
    geometry: Geometry,
    objects: Vec<SceneObject>,
    staging: Vec<u8>,
}

impl ScenePass {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
    ) -> Self {
        let geometry = Geometry::new(device);

        let floor_texture = textures::load_material(
            device,
            queue,
            "floor",
            Path::new("assets/floor-texture.jpg"),
            textures::floor_fallback,
        );
        let wall_texture = textures::load_material(
            device,
            queue,
            "wall",
            Path::new("assets/wall-texture.jpg"),
            textures::wall_fallback,
        );
        let white_texture = textures::white_material(device, queue);
        let skybox_texture = textures::skybox(device, queue);
        let material_sampler = textures::material_sampler(device);
        let skybox_sampler = textures::skybox_sampler(device);

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene frame bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(size_of::<Globals>() as u64),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: NonZeroU64::new(size_of::<ObjectData>() as u64),
                    },
                    count: None,
                },
            ],
        });

        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("material bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let skybox_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("skybox bind group layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::Cube,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene globals"),
            size: size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let objects_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene objects"),
            size: (MAX_OBJECTS * OBJECT_STRIDE) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene frame bind group"),
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &objects_buffer,
                        offset: 0,
                        size: NonZeroU64::new(size_of::<ObjectData>() as u64),
                    }),
                },
            ],
        });

        let material_bind_group = |label, view: &wgpu::TextureView| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &material_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&material_sampler),
                    },
                ],
            })
        };
        let floor_material = material_bind_group("floor material", &floor_texture);
        let wall_material = material_bind_group("wall material", &wall_texture);
        let plain_material = material_bind_group("plain material", &white_texture);

        let skybox_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skybox bind group"),
            layout: &skybox_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&skybox_texture),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&skybox_sampler),
                },
            ],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!(
                "../../shaders/scene.wgsl"
            ))),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene pipeline layout"),
            bind_group_layouts: &[&frame_layout, &material_layout, &skybox_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scene pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[Vertex::LAYOUT],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DepthTexture::FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            globals_buffer,
            objects_buffer,
            frame_bind_group,
            floor_material,
            wall_material,
            plain_material,
            skybox_bind_group,
            geometry,
            objects: Vec::new(),
            staging: Vec::new(),
        }
    }

    /// Uploads the frame's uniform data and records all scene draws.
    pub(crate) fn render(
        &mut self,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'_>,
        render_state: &RenderState,
        view_proj: Mat4,
        camera_position: Vec3,
    ) {
        queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Self::globals(render_state, view_proj, camera_position)),
        );

        self.collect_objects(render_state);
        self.staging.clear();
        for object in &self.objects {
            self.staging.extend_from_slice(bytemuck::bytes_of(&object.data));
            self.staging
                .resize(self.staging.len() + OBJECT_STRIDE - size_of::<ObjectData>(), 0);
        }
        queue.write_buffer(&self.objects_buffer, 0, &self.staging);

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.geometry.vertex_buffer.slice(..));
        render_pass.set_index_buffer(
            self.geometry.index_buffer.slice(..),
            wgpu::IndexFormat::Uint16,
        );
        render_pass.set_bind_group(2, &self.skybox_bind_group, &[]);

        for (slot, object) in self.objects.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "object count is bounded")]
            let offset = (slot * OBJECT_STRIDE) as u32;
            render_pass.set_bind_group(0, &self.frame_bind_group, &[offset]);

            let material = match object.material {
                MaterialKind::Floor => &self.floor_material,
                MaterialKind::Wall => &self.wall_material,
                MaterialKind::Plain => &self.plain_material,
            };
            render_pass.set_bind_group(1, material, &[]);

            let mesh = self.mesh(object.mesh);
            render_pass.draw_indexed(mesh.indices.clone(), 0, 0..1);
        }
    }

    fn mesh(&self, kind: MeshKind) -> &Mesh {
        match kind {
            MeshKind::Floor => &self.geometry.floor,
            MeshKind::Wall => &self.geometry.wall,
            MeshKind::Mirror => &self.geometry.mirror,
            MeshKind::Cube => &self.geometry.cube,
        }
    }

    fn collect_objects(&mut self, render_state: &RenderState) {
        self.objects.clear();
        self.objects.push(SceneObject {
            data: ObjectData::new(Mat4::IDENTITY, MODE_LIT),
            mesh: MeshKind::Floor,
            material: MaterialKind::Floor,
        });
        self.objects.push(SceneObject {
            data: ObjectData::new(Mat4::IDENTITY, MODE_LIT),
            mesh: MeshKind::Wall,
            material: MaterialKind::Wall,
        });
        self.objects.push(SceneObject {
            data: ObjectData::new(Mat4::IDENTITY, MODE_MIRROR),
            mesh: MeshKind::Mirror,
            material: MaterialKind::Plain,
        });
        self.objects.push(SceneObject {
            data: ObjectData::new(
                Mat4::from_rotation_translation(
                    Quat::from_rotation_y(render_state.robot_yaw),
                    render_state.robot_position,
                ),
                MODE_LIT,
            ),
            mesh: MeshKind::Cube,
            material: MaterialKind::Plain,
        });
        for &position in &render_state.collectibles {
            self.objects.push(SceneObject {
                data: ObjectData::new(
                    Mat4::from_scale_rotation_translation(
                        Vec3::splat(COLLECTIBLE_SCALE),
                        Quat::IDENTITY,
                        position,
                    ),
                    MODE_LIT,
                ),
                mesh: MeshKind::Cube,
                material: MaterialKind::Plain,
            });
        }
        for lamp in &render_state.lamps {
            self.objects.push(SceneObject {
                data: ObjectData::new(
                    Mat4::from_scale_rotation_translation(
                        Vec3::splat(LAMP_SCALE),
                        Quat::IDENTITY,
                        lamp.position,
                    ),
                    MODE_LAMP,
                ),
                mesh: MeshKind::Cube,
                material: MaterialKind::Plain,
            });
        }
        self.objects.truncate(MAX_OBJECTS);
    }

    fn globals(render_state: &RenderState, view_proj: Mat4, camera_position: Vec3) -> Globals {
        let spotlight = &render_state.spotlight;
        Globals {
            view_proj: view_proj.to_cols_array_2d(),
            camera_position: camera_position.extend(0.0).to_array(),
            spot_position: spotlight.position.extend(0.0).to_array(),
            spot_direction: spotlight.direction.extend(spotlight.cutoff_cos).to_array(),
            spot_color: spotlight.color.extend(spotlight.outer_cutoff_cos).to_array(),
            lamp_positions: render_state
                .lamps
                .map(|lamp| lamp.position.extend(0.0).to_array()),
            lamp_colors: render_state
                .lamps
                .map(|lamp| lamp.color.extend(0.0).to_array()),
        }
    }
}
