use std::sync::Arc;

use fractal_core::gpu::FractalRenderer;
use fractal_core::{ParamKey, SceneClock, SceneState};
use glam::Vec2;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

const WINDOW_TITLE: &str = "Fractal Explorer (native)";
// Wheel lines are converted to pixels before picking a zoom direction
const LINE_HEIGHT_PX: f32 = 40.0;

struct App {
    window: Arc<Window>,
    renderer: FractalRenderer<'static>,
    scene: SceneState,
    clock: SceneClock,
    cursor: Vec2,
}

impl App {
    async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let scene = SceneState::new();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(Arc::clone(&window))?;
        let renderer =
            FractalRenderer::new(&instance, surface, size.width, size.height, scene.mode).await?;
        Ok(Self {
            window,
            renderer,
            scene,
            clock: SceneClock::start(),
            cursor: Vec2::ZERO,
        })
    }

    fn viewport(&self) -> Vec2 {
        let size = self.window.inner_size();
        Vec2::new(size.width as f32, size.height as f32)
    }

    fn nudge_power(&mut self, steps: f32) {
        let key = ParamKey::Power;
        let target = self.scene.params.get(key) + key.range().step * steps;
        let power = self.scene.set_param(key, target);
        log::info!("[params] {}", key.format_value(power));
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::KeyM => {
                let mode = self.scene.toggle_mode();
                self.window
                    .set_title(&format!("{} - {}", WINDOW_TITLE, mode.label()));
            }
            KeyCode::KeyR => self.scene.reset_view(),
            KeyCode::ArrowUp => self.nudge_power(1.0),
            KeyCode::ArrowDown => self.nudge_power(-1.0),
            KeyCode::Escape => return false,
            _ => {}
        }
        true
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                self.renderer.resize_if_needed(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                let viewport = self.viewport();
                self.scene.pointer_move(self.cursor, viewport);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.scene.pointer_down(self.cursor),
                ElementState::Released => self.scene.pointer_up(),
            },
            WindowEvent::CursorLeft { .. } => self.scene.pointer_leave(),
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
                    MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                };
                self.scene.wheel(dy);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => return self.handle_key(*code),
            _ => {}
        }
        true
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let inputs = self.scene.begin_frame(self.clock.elapsed());
        let size = self.window.inner_size();
        self.renderer.resize_if_needed(size.width, size.height);
        self.renderer.render(&inputs)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("fractal-native starting");

    let event_loop = EventLoop::new().expect("event loop");
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .build(&event_loop)
            .expect("window"),
    );

    let mut app = pollster::block_on(App::new(window)).expect("gpu");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => elwt.exit(),
            Event::WindowEvent { event, .. } => {
                if !app.handle_window_event(&event) {
                    elwt.exit();
                }
            }
            Event::AboutToWait => match app.render() {
                Ok(_) => app.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    app.renderer.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            },
            _ => {}
        })
        .expect("event loop run");
}
