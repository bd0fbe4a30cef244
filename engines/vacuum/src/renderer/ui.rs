//! The battery bar overlay, drawn after the scene without depth.

use std::{borrow::Cow, mem::size_of, num::NonZeroU64};

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use super::depth_texture::DepthTexture;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct UiVertex {
    position: [f32; 2],
    color: [f32; 3],
}

impl UiVertex {
    const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: size_of::<Self>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3],
    };
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct BarData {
    // x: horizontal scale, yzw: padding
    scale: [f32; 4],
}

const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

/// The full-charge bar: a thin strip along the top edge of the screen,
/// in clip-space coordinates.
const BAR_VERTICES: [UiVertex; 4] = [
    UiVertex {
        position: [-0.9, 0.9],
        color: GREEN,
    },
    UiVertex {
        position: [0.9, 0.9],
        color: GREEN,
    },
    UiVertex {
        position: [0.9, 0.85],
        color: GREEN,
    },
    UiVertex {
        position: [-0.9, 0.85],
        color: GREEN,
    },
];

const BAR_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

pub(crate) struct UiPass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    bar_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UiPass {
    pub(crate) fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("battery bar vertex buffer"),
            contents: bytemuck::cast_slice(&BAR_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("battery bar index buffer"),
            contents: bytemuck::cast_slice(&BAR_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        let bar_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("battery bar uniform"),
            size: size_of::<BarData>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("battery bar bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(size_of::<BarData>() as u64),
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("battery bar bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: bar_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ui shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("../../shaders/ui.wgsl"))),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ui pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ui pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[UiVertex::LAYOUT],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            // drawn in the same pass as the scene, so the depth format
            // must match, but the overlay neither tests nor writes depth
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DepthTexture::FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            bar_buffer,
            bind_group,
        }
    }

    pub(crate) fn render(
        &self,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'_>,
        battery_fraction: f32,
    ) {
        let bar = BarData {
            scale: [battery_fraction, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.bar_buffer, 0, bytemuck::bytes_of(&bar));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        #[expect(clippy::cast_possible_truncation, reason = "six indices")]
        render_pass.draw_indexed(0..BAR_INDICES.len() as u32, 0, 0..1);
    }
}
