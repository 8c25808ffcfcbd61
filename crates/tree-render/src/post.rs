use crate::helpers;
use crate::targets::{RenderTargets, HDR_FORMAT};
use tree_core::{BLOOM_INTENSITY, BLOOM_THRESHOLD, VIGNETTE_DARKNESS, VIGNETTE_OFFSET};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) blur_dir: [f32; 2],
    pub(crate) threshold: f32,
    pub(crate) bloom_intensity: f32,
    pub(crate) vignette_offset: f32,
    pub(crate) vignette_darkness: f32,
}

impl PostUniforms {
    pub(crate) fn new(resolution: [f32; 2], blur_dir: [f32; 2]) -> Self {
        Self {
            resolution,
            blur_dir,
            threshold: BLOOM_THRESHOLD,
            bloom_intensity: BLOOM_INTENSITY,
            vignette_offset: VIGNETTE_OFFSET,
            vignette_darkness: VIGNETTE_DARKNESS,
        }
    }
}

/// One uniform block per pass: `queue.write_buffer` calls all land before
/// the encoder executes, so a single shared buffer would leave every pass
/// seeing the last write.
struct PassUniforms {
    main: wgpu::Buffer,
    blur_h: wgpu::Buffer,
    blur_v: wgpu::Buffer,
}

struct BindGroups {
    hdr: wgpu::BindGroup,
    blur_h: wgpu::BindGroup,
    blur_v: wgpu::BindGroup,
    bloom_a_only: wgpu::BindGroup,
}

pub(crate) struct PostResources {
    bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    bgl1: wgpu::BindGroupLayout, // tex+sampler
    sampler: wgpu::Sampler,
    uniforms: PassUniforms,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
    groups: BindGroups,
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

impl PostResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        targets: &RenderTargets,
        swap_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(tree_core::POST_WGSL.into()),
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl0"),
            entries: &[
                texture_entry(0),
                sampler_entry(1),
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl1"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });
        let uniforms = PassUniforms {
            main: helpers::uniform_buffer::<PostUniforms>(device, "post_uniforms"),
            blur_h: helpers::uniform_buffer::<PostUniforms>(device, "blur_h_uniforms"),
            blur_v: helpers::uniform_buffer::<PostUniforms>(device, "blur_v_uniforms"),
        };

        let pl_bright_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_0"),
            bind_group_layouts: &[&bgl0],
            push_constant_ranges: &[],
        });
        let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_comp"),
            bind_group_layouts: &[&bgl0, &bgl1],
            push_constant_ranges: &[],
        });
        let bright_pipeline = helpers::make_post_pipeline(
            device,
            &pl_bright_blur,
            &shader,
            "fs_bright",
            HDR_FORMAT,
            None,
        );
        let blur_pipeline = helpers::make_post_pipeline(
            device,
            &pl_bright_blur,
            &shader,
            "fs_blur",
            HDR_FORMAT,
            None,
        );
        let composite_pipeline = helpers::make_post_pipeline(
            device,
            &pl_composite,
            &shader,
            "fs_composite",
            swap_format,
            Some(wgpu::BlendState::REPLACE),
        );

        let groups = bind_groups(device, &bgl0, &bgl1, &sampler, &uniforms, targets);
        Self {
            bgl0,
            bgl1,
            sampler,
            uniforms,
            bright_pipeline,
            blur_pipeline,
            composite_pipeline,
            groups,
        }
    }

    /// Bind groups point at texture views, so they follow every resize.
    pub(crate) fn rebuild_bind_groups(&mut self, device: &wgpu::Device, targets: &RenderTargets) {
        self.groups = bind_groups(
            device,
            &self.bgl0,
            &self.bgl1,
            &self.sampler,
            &self.uniforms,
            targets,
        );
    }

    /// Upload this frame's uniforms; `width`/`height` are the full-size target.
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, width: u32, height: u32) {
        let (bw, bh) = RenderTargets::bloom_size(width, height);
        let res = [bw as f32, bh as f32];
        let main = PostUniforms::new(res, [0.0, 0.0]);
        let blur_h = PostUniforms::new(res, [1.0, 0.0]);
        let blur_v = PostUniforms::new(res, [0.0, 1.0]);
        queue.write_buffer(&self.uniforms.main, 0, bytemuck::bytes_of(&main));
        queue.write_buffer(&self.uniforms.blur_h, 0, bytemuck::bytes_of(&blur_h));
        queue.write_buffer(&self.uniforms.blur_v, 0, bytemuck::bytes_of(&blur_v));
    }

    /// Bright pass, separable blur, then composite onto `output`.
    pub(crate) fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        output: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        blit(
            encoder,
            "bright_pass",
            &targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.bright_pipeline,
            &self.groups.hdr,
            None,
        );
        blit(
            encoder,
            "blur_h",
            &targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.blur_pipeline,
            &self.groups.blur_h,
            None,
        );
        blit(
            encoder,
            "blur_v",
            &targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.blur_pipeline,
            &self.groups.blur_v,
            None,
        );
        blit(
            encoder,
            "composite",
            output,
            clear,
            &self.composite_pipeline,
            &self.groups.hdr,
            Some(&self.groups.bloom_a_only),
        );
    }
}

fn source_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniforms: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: uniforms.as_entire_binding(),
            },
        ],
    })
}

fn bind_groups(
    device: &wgpu::Device,
    bgl0: &wgpu::BindGroupLayout,
    bgl1: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    uniforms: &PassUniforms,
    targets: &RenderTargets,
) -> BindGroups {
    BindGroups {
        hdr: source_group(device, "bg_hdr", bgl0, &targets.hdr_view, sampler, &uniforms.main),
        blur_h: source_group(
            device,
            "bg_blur_h",
            bgl0,
            &targets.bloom_a_view,
            sampler,
            &uniforms.blur_h,
        ),
        blur_v: source_group(
            device,
            "bg_blur_v",
            bgl0,
            &targets.bloom_b_view,
            sampler,
            &uniforms.blur_v,
        ),
        // group1 for composite, sampling the blurred bloom
        bloom_a_only: device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_bloom_a_only"),
            layout: bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        }),
    }
}

fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
