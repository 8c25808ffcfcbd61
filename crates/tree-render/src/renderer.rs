use crate::foliage::{FoliageGlobals, FoliagePass};
use crate::helpers;
use crate::post::PostResources;
use crate::sprites::{collect_sprites, SpriteGlobals, SpriteInstance, SpritePass};
use crate::targets::{RenderTargets, HDR_FORMAT};
use tree_core::{Camera, TreeScene, BACKGROUND};

/// Everything needed to draw a [`TreeScene`] onto one surface.
///
/// Frame layout: foliage (additive) and sprites (premultiplied) into an HDR
/// target, then bright pass, separable blur and composite with vignette
/// and tonemapping onto the swapchain.
pub struct Renderer<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    targets: RenderTargets,
    post: PostResources,
    foliage: FoliagePass,
    sprites: SpritePass,
    quad: wgpu::Buffer,
    camera: Camera,
    clear_color: wgpu::Color,
    sprite_scratch: Vec<SpriteInstance>,
    width: u32,
    height: u32,
}

impl<'w> Renderer<'w> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'w>,
        width: u32,
        height: u32,
        scene: &TreeScene,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {e:?}"))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // WebGPU canvases only offer linear formats; draw through an sRGB view
        let view_format = format.add_srgb_suffix();
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[render] surface {}x{} format={:?} view={:?}",
            width,
            height,
            format,
            view_format
        );

        let targets = RenderTargets::new(&device, width, height);
        let post = PostResources::new(&device, &targets, view_format);
        let foliage = FoliagePass::new(&device, scene.foliage(), HDR_FORMAT);
        let sprite_capacity = scene.ornaments().len() + scene.dust_positions().len() + 1;
        let sprites = SpritePass::new(&device, sprite_capacity, HDR_FORMAT);
        let quad = helpers::create_quad_buffer(&device);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            targets,
            post,
            foliage,
            sprites,
            quad,
            camera: Camera::with_viewport(width, height),
            clear_color: helpers::clear_color(BACKGROUND),
            sprite_scratch: Vec::with_capacity(sprite_capacity),
            width,
            height,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Reconfigure the surface and offscreen targets. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, width, height);
        self.post.rebuild_bind_groups(&self.device, &self.targets);
        self.camera.set_viewport(width, height);
        log::debug!("[render] resized to {}x{}", width, height);
    }

    /// Reconfigure at the current size, used after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &TreeScene) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.view_format),
                ..Default::default()
            });

        let cam_view = self.camera.view_matrix();
        let proj = self.camera.projection_matrix();
        let viewport = [self.width as f32, self.height as f32];
        self.foliage.write_globals(
            &self.queue,
            &FoliageGlobals::new(
                proj * cam_view,
                scene.tree_transform(),
                viewport,
                scene.elapsed(),
                scene.progress(),
            ),
        );
        collect_sprites(scene, cam_view, &mut self.sprite_scratch);
        self.sprites.upload(
            &self.device,
            &self.queue,
            &SpriteGlobals::new(cam_view, proj, scene.elapsed()),
            &self.sprite_scratch,
        );
        self.post.write_uniforms(&self.queue, self.width, self.height);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.foliage.draw(&mut rpass, &self.quad);
            self.sprites.draw(&mut rpass, &self.quad);
        }
        self.post
            .encode(&mut encoder, &self.targets, &view, self.clear_color);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
