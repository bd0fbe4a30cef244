//! The wgpu renderer, implementing the framework's renderer traits.
//!
//! Reads the shared game state once per frame into a [`RenderState`]
//! snapshot; everything else works from the copy, so the read lock is
//! held only briefly.

use std::{
    iter,
    sync::{Arc, RwLock},
};

use robovac_framework::renderer::{Renderer, RendererBuilder};

use crate::{
    camera::Camera, game_state::GameState, projection::Projection, render_state::RenderState,
};

mod depth_texture;
mod geometry;
mod scene;
mod textures;
mod ui;

use depth_texture::DepthTexture;
use scene::ScenePass;
use ui::UiPass;

const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

pub struct VacuumRendererBuilder {
    pub game_state: Arc<RwLock<GameState>>,
}

impl RendererBuilder for VacuumRendererBuilder {
    type Renderer = VacuumRenderer;

    fn build(
        self,
        _adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface: &wgpu::SurfaceConfiguration,
    ) -> VacuumRenderer {
        VacuumRenderer::new(&self.game_state, device, queue, surface)
    }
}

pub struct VacuumRenderer {
    game_state: Arc<RwLock<GameState>>,
    render_state: RenderState,
    projection: Projection,
    depth_texture: DepthTexture,
    scene: ScenePass,
    ui: UiPass,
}

impl VacuumRenderer {
    fn new(
        game_state: &Arc<RwLock<GameState>>,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface: &wgpu::SurfaceConfiguration,
    ) -> Self {
        #[expect(
            clippy::expect_used,
            reason = "a poisoned lock means the game loop already panicked"
        )]
        let render_state = RenderState::new(&game_state.read().expect("game state lock is poisoned"));

        Self {
            game_state: Arc::clone(game_state),
            render_state,
            projection: Projection::new(surface.width, surface.height),
            depth_texture: DepthTexture::new(device, surface),
            scene: ScenePass::new(device, queue, surface.format),
            ui: UiPass::new(device, surface.format),
        }
    }
}

impl Renderer for VacuumRenderer {
    fn update(&mut self) {
        #[expect(
            clippy::expect_used,
            reason = "a poisoned lock means the game loop already panicked"
        )]
        let game_state = self.game_state.read().expect("game state lock is poisoned");
        self.render_state.update(&game_state);
    }

    fn resize(
        &mut self,
        device: &wgpu::Device,
        _queue: &wgpu::Queue,
        surface: &wgpu::SurfaceConfiguration,
    ) {
        self.projection.resize(surface.width, surface.height);
        self.depth_texture = DepthTexture::new(device, surface);
    }

    fn render(
        &mut self,
        texture_view: &wgpu::TextureView,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
    ) {
        let camera = Camera::following(
            self.render_state.robot_position,
            self.render_state.robot_heading,
        );
        let view_proj = self.projection.matrix() * camera.view_matrix();

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame encoder"),
        });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.scene.render(
                queue,
                &mut render_pass,
                &self.render_state,
                view_proj,
                camera.position,
            );
            self.ui
                .render(queue, &mut render_pass, self.render_state.battery_fraction);
        }
        queue.submit(iter::once(encoder.finish()));
    }

    fn status_text(&self) -> Option<String> {
        Some(self.render_state.status.to_string())
    }
}
