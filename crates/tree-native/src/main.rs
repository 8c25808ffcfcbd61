use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tree_core::{pixel_to_ndc, TreeParams, TreeScene};
use tree_render::Renderer;
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Fullscreen, Window, WindowBuilder},
};

// Longest frame step fed to the simulation (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Horizontal cursor position in logical pixels, the unit drag sensitivity
/// is tuned for.
fn logical_x(position: PhysicalPosition<f64>, scale_factor: f64) -> f32 {
    position.to_logical::<f32>(scale_factor).x
}

struct App<'w> {
    window: &'w Window,
    renderer: Renderer<'w>,
    scene: TreeScene,
    cursor: Vec2,
    drag_x: f32,
    dragging: bool,
    last_frame: Instant,
}

impl<'w> App<'w> {
    async fn new(window: &'w Window, scene: TreeScene) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let renderer = Renderer::new(&instance, surface, size.width, size.height, &scene).await?;
        Ok(Self {
            window,
            renderer,
            scene,
            cursor: Vec2::ZERO,
            drag_x: 0.0,
            dragging: false,
            last_frame: Instant::now(),
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.renderer.resize(size.width, size.height);
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Vec2::new(position.x as f32, position.y as f32);
        self.drag_x = logical_x(position, self.window.scale_factor());
        if self.dragging {
            self.scene.drag_move(self.drag_x);
        }
    }

    fn mouse_button(&mut self, pressed: bool) {
        if pressed && !self.dragging {
            self.dragging = true;
            self.scene.drag_start(self.drag_x);
        } else if !pressed && self.dragging {
            self.dragging = false;
            self.scene.drag_end();
        }
    }

    fn toggle(&mut self) {
        let state = self.scene.toggle();
        log::info!("[scene] {} ({})", state.status_label(), state.button_label());
    }

    fn toggle_fullscreen(&self) {
        if self.window.fullscreen().is_some() {
            self.window.set_fullscreen(None);
        } else {
            self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = now;

        let (w, h) = self.renderer.size();
        let ndc = pixel_to_ndc(self.cursor.x, self.cursor.y, w as f32, h as f32);
        let attractor = self.renderer.camera().pointer_attractor(ndc);
        self.scene.set_pointer_target(Some(attractor));
        self.scene.tick(dt);
        self.renderer.render(&self.scene)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = TreeScene::new(TreeParams::default(), &mut StdRng::from_entropy())?;
    log::info!(
        "[scene] foliage={} ornaments={} dust={}",
        scene.foliage().len(),
        scene.ornaments().len(),
        scene.dust_positions().len()
    );

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Xmas Tree (native)")
        .with_inner_size(PhysicalSize::new(1280, 800))
        .build(&event_loop)?;

    let mut app = pollster::block_on(App::new(&window, scene))?;
    log::info!("[native] drag to spin, Space toggles, Enter fullscreen, Esc quits");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => app.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => app.cursor_moved(position),
            WindowEvent::CursorLeft { .. } => app.mouse_button(false),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.mouse_button(state == ElementState::Pressed),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Space) => app.toggle(),
                Key::Named(NamedKey::Enter) => app.toggle_fullscreen(),
                Key::Named(NamedKey::Escape) => elwt.exit(),
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => match app.render() {
            Ok(_) => app.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => app.renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[render] out of memory");
                elwt.exit();
            }
            Err(e) => log::warn!("[render] frame skipped: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_coordinate_ignores_scale_factor() {
        // the same 100 logical px stroke on a 1x and a 2x display
        let d1 = logical_x(PhysicalPosition::new(300.0, 0.0), 1.0)
            - logical_x(PhysicalPosition::new(200.0, 0.0), 1.0);
        let d2 = logical_x(PhysicalPosition::new(600.0, 0.0), 2.0)
            - logical_x(PhysicalPosition::new(400.0, 0.0), 2.0);
        assert!((d1 - 100.0).abs() < 1e-4);
        assert!((d2 - 100.0).abs() < 1e-4);
    }
}
