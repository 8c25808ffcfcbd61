//! Ornaments, gold dust and the star as camera-facing sprites.
//!
//! [`collect_sprites`] is plain CPU work and is tested without a device;
//! [`SpritePass`] only uploads and draws what it produced.

use crate::helpers;
use glam::{Mat4, Vec3};
use tree_core::constants::*;
use tree_core::{OrnamentKind, TreeScene};

/// Fragment shading selected per instance; the value is the `shape`
/// attribute read by `sprite.wgsl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum SpriteShape {
    Ball = 0,
    Gift = 1,
    Glow = 2,
    Star = 3,
}

impl SpriteShape {
    pub fn for_ornament(kind: OrnamentKind) -> Self {
        match kind {
            OrnamentKind::Ball => SpriteShape::Ball,
            OrnamentKind::Gift => SpriteShape::Gift,
            OrnamentKind::Light => SpriteShape::Glow,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    /// World-space half extent of the quad.
    pub size: f32,
    /// Linear rgb; alpha carries emissive intensity for glows and the star.
    pub color: [f32; 4],
    pub shape: f32,
    pub spin: f32,
    pub _pad: [f32; 2],
}

impl SpriteInstance {
    fn new(position: Vec3, size: f32, hex: u32, intensity: f32, shape: SpriteShape, spin: f32) -> Self {
        let [r, g, b] = srgb_hex_to_linear(hex);
        Self {
            position: position.to_array(),
            size,
            color: [r, g, b, intensity],
            shape: shape as u32 as f32,
            spin,
            _pad: [0.0; 2],
        }
    }

    pub fn shape(&self) -> SpriteShape {
        match self.shape as u32 {
            0 => SpriteShape::Ball,
            1 => SpriteShape::Gift,
            2 => SpriteShape::Glow,
            _ => SpriteShape::Star,
        }
    }
}

// gift boxes fill 0.7 of their quad in the shader
const GIFT_QUAD_FILL: f32 = 0.7;
// fairy light halo reaches past the bulb
const LIGHT_HALO: f32 = 2.5;

/// Gather this frame's sprites in world space, sorted back to front for
/// `view` so alpha blending composes correctly.
pub fn collect_sprites(scene: &TreeScene, view: Mat4, out: &mut Vec<SpriteInstance>) {
    out.clear();
    let model = scene.tree_transform();

    let layer = scene.ornaments();
    for (orn, pose) in layer.ornaments().iter().zip(layer.poses()) {
        let world = model.transform_point3(pose.position);
        let radius = orn.scale * TREE_GROUP_SCALE;
        let shape = SpriteShape::for_ornament(orn.kind);
        let sprite = match shape {
            SpriteShape::Gift => SpriteInstance::new(
                world,
                radius * 0.5 / GIFT_QUAD_FILL,
                orn.color,
                1.0,
                shape,
                pose.rotation.y,
            ),
            SpriteShape::Glow => SpriteInstance::new(
                world,
                radius * LIGHT_HALO,
                orn.color,
                LIGHT_EMISSIVE,
                shape,
                0.0,
            ),
            _ => SpriteInstance::new(world, radius, orn.color, 1.0, shape, 0.0),
        };
        out.push(sprite);
    }

    let star = scene.star();
    if star.visible() {
        out.push(SpriteInstance::new(
            model.transform_point3(star.position),
            star.scale * TREE_GROUP_SCALE,
            LIGHT_GOLD,
            STAR_EMISSIVE,
            SpriteShape::Star,
            0.0,
        ));
    }

    // dust lives outside the tree group
    for p in scene.dust_positions() {
        out.push(SpriteInstance::new(
            *p,
            DUST_POINT_SIZE * 0.5,
            LIGHT_GOLD,
            DUST_OPACITY,
            SpriteShape::Glow,
            0.0,
        ));
    }

    out.sort_by(|a, b| {
        let za = view.transform_point3(Vec3::from(a.position)).z;
        let zb = view.transform_point3(Vec3::from(b.position)).z;
        za.total_cmp(&zb)
    });
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteGlobals {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    light: [f32; 4],
}

/// World-space direction toward the key spot light.
const KEY_LIGHT_DIR: Vec3 = Vec3::new(10.0, 20.0, 10.0);

impl SpriteGlobals {
    pub(crate) fn new(view: Mat4, proj: Mat4, time: f32) -> Self {
        let dir = view.transform_vector3(KEY_LIGHT_DIR.normalize());
        Self {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            light: [dir.x, dir.y, dir.z, time],
        }
    }
}

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 5] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 1,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32,
        offset: 12,
        shader_location: 2,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x4,
        offset: 16,
        shader_location: 3,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32,
        offset: 32,
        shader_location: 4,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32,
        offset: 36,
        shader_location: 5,
    },
];

pub(crate) struct SpritePass {
    pipeline: wgpu::RenderPipeline,
    globals: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: wgpu::Buffer,
    capacity: usize,
    count: u32,
}

impl SpritePass {
    pub(crate) fn new(
        device: &wgpu::Device,
        initial_capacity: usize,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(tree_core::SPRITE_WGSL.into()),
        });
        let bgl = helpers::uniform_layout(device, "sprite_bgl", wgpu::ShaderStages::VERTEX_FRAGMENT);
        let globals = helpers::uniform_buffer::<SpriteGlobals>(device, "sprite_globals");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sprite_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_quad_pipeline(
            device,
            "sprite_pipeline",
            &layout,
            &shader,
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SpriteInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBUTES,
            },
            color_format,
            wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        );
        let capacity = initial_capacity.max(1);
        Self {
            pipeline,
            globals,
            bind_group,
            instances: Self::instance_buffer(device, capacity),
            capacity,
            count: 0,
        }
    }

    fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_instances"),
            size: (std::mem::size_of::<SpriteInstance>() * capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        globals: &SpriteGlobals,
        sprites: &[SpriteInstance],
    ) {
        if sprites.len() > self.capacity {
            self.capacity = sprites.len().next_power_of_two();
            self.instances = Self::instance_buffer(device, self.capacity);
            log::debug!("[render] sprite buffer grown to {}", self.capacity);
        }
        queue.write_buffer(&self.globals, 0, bytemuck::bytes_of(globals));
        if !sprites.is_empty() {
            queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(sprites));
        }
        self.count = sprites.len() as u32;
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, quad: &wgpu::Buffer) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.slice(..));
        rpass.set_vertex_buffer(1, self.instances.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
