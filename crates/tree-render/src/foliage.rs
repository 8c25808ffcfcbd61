use crate::helpers;
use glam::Mat4;
use tree_core::{FoliageField, FoliageInstance, FOLIAGE_DEEP_GREEN, FOLIAGE_LIGHT_GREEN};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FoliageGlobals {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    viewport: [f32; 2],
    time: f32,
    progress: f32,
    color_a: [f32; 4],
    color_b: [f32; 4],
}

fn rgba(hex: u32) -> [f32; 4] {
    let [r, g, b] = tree_core::srgb_hex_to_linear(hex);
    [r, g, b, 1.0]
}

impl FoliageGlobals {
    pub(crate) fn new(
        view_proj: Mat4,
        model: Mat4,
        viewport: [f32; 2],
        time: f32,
        progress: f32,
    ) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            viewport,
            time,
            progress,
            color_a: rgba(FOLIAGE_DEEP_GREEN),
            color_b: rgba(FOLIAGE_LIGHT_GREEN),
        }
    }
}

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
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
        format: wgpu::VertexFormat::Float32x3,
        offset: 16,
        shader_location: 3,
    },
];

/// Static foliage instances; only the globals change per frame.
pub(crate) struct FoliagePass {
    pipeline: wgpu::RenderPipeline,
    globals: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instances: wgpu::Buffer,
    count: u32,
}

impl FoliagePass {
    pub(crate) fn new(
        device: &wgpu::Device,
        field: &FoliageField,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let source = tree_core::foliage_wgsl();
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("foliage_shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });
        let bgl = helpers::uniform_layout(device, "foliage_bgl", wgpu::ShaderStages::VERTEX_FRAGMENT);
        let globals = helpers::uniform_buffer::<FoliageGlobals>(device, "foliage_globals");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("foliage_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("foliage_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        // additive, overlapping needles brighten
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent::OVER,
        };
        let pipeline = helpers::make_quad_pipeline(
            device,
            "foliage_pipeline",
            &layout,
            &shader,
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<FoliageInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRIBUTES,
            },
            color_format,
            additive,
        );
        let data = field.instances();
        let instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("foliage_instances"),
            contents: bytemuck::cast_slice(&data),
            usage: wgpu::BufferUsages::VERTEX,
        });
        log::info!("[render] foliage instances={}", data.len());
        Self {
            pipeline,
            globals,
            bind_group,
            instances,
            count: data.len() as u32,
        }
    }

    pub(crate) fn write_globals(&self, queue: &wgpu::Queue, globals: &FoliageGlobals) {
        queue.write_buffer(&self.globals, 0, bytemuck::bytes_of(globals));
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
