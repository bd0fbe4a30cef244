//! Texture creation: disk-loaded materials with procedural fallbacks,
//! plus the generated skybox cubemap.

use std::path::Path;

use robovac_framework::assets::{self, ImageData};

const FALLBACK_SIZE: u32 = 64;
const SKYBOX_FACE_SIZE: u32 = 64;

/// Loads a material from `path`, falling back to `fallback` when the
/// file is missing or unreadable. The game must come up without assets.
pub(crate) fn load_material(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    path: &Path,
    fallback: fn() -> ImageData,
) -> wgpu::TextureView {
    let image = match assets::load_rgba(path) {
        Ok(image) => image,
        Err(error) => {
            log::warn!("{error}; using a generated {label} texture");
            fallback()
        }
    };
    upload_rgba(device, queue, label, &image)
}

/// A plain white pixel for meshes without a material of their own.
pub(crate) fn white_material(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    let image = ImageData {
        width: 1,
        height: 1,
        pixels: vec![0xff; 4],
    };
    upload_rgba(device, queue, "white", &image)
}

/// Gray checkerboard standing in for the floor texture.
pub(crate) fn floor_fallback() -> ImageData {
    generate(FALLBACK_SIZE, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            [0xb0, 0xb0, 0xb0, 0xff]
        } else {
            [0x70, 0x70, 0x70, 0xff]
        }
    })
}

/// Beige with darker mortar lines standing in for the wall texture.
pub(crate) fn wall_fallback() -> ImageData {
    generate(FALLBACK_SIZE, |_, y| {
        if y % 16 < 2 {
            [0x8a, 0x7a, 0x66, 0xff]
        } else {
            [0xc4, 0xb0, 0x96, 0xff]
        }
    })
}

/// The reflection cubemap: a simple sky gradient on all six faces.
pub(crate) fn skybox(device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
    let face = generate(SKYBOX_FACE_SIZE, |_, y| {
        let blend = f64::from(y) / f64::from(SKYBOX_FACE_SIZE - 1);
        [
            lerp_channel(0x4d, 0xcc, blend),
            lerp_channel(0x80, 0xd9, blend),
            lerp_channel(0xcc, 0xe6, blend),
            0xff,
        ]
    });

    let size = wgpu::Extent3d {
        width: SKYBOX_FACE_SIZE,
        height: SKYBOX_FACE_SIZE,
        depth_or_array_layers: 6,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("skybox"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    for layer in 0..6 {
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: 0,
                    y: 0,
                    z: layer,
                },
                aspect: wgpu::TextureAspect::All,
            },
            &face.pixels,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * face.width),
                rows_per_image: Some(face.height),
            },
            wgpu::Extent3d {
                depth_or_array_layers: 1,
                ..size
            },
        );
    }

    texture.create_view(&wgpu::TextureViewDescriptor {
        dimension: Some(wgpu::TextureViewDimension::Cube),
        ..Default::default()
    })
}

pub(crate) fn material_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("material sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

pub(crate) fn skybox_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("skybox sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

fn upload_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    image: &ImageData,
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width: image.width,
        height: image.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &image.pixels,
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(4 * image.width),
            rows_per_image: Some(image.height),
        },
        size,
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn generate(size: u32, pixel: impl Fn(u32, u32) -> [u8; 4]) -> ImageData {
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            pixels.extend_from_slice(&pixel(x, y));
        }
    }
    ImageData {
        width: size,
        height: size,
        pixels,
    }
}

#[expect(clippy::cast_possible_truncation, reason = "result is clamped to u8 range")]
#[expect(clippy::cast_sign_loss, reason = "inputs are non-negative")]
fn lerp_channel(from: u8, to: u8, blend: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * blend) as u8
}
