use std::sync::Arc;

use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::camera::Camera;
use crate::config::Settings;
use crate::core::{scroll_lines, Clock, Controller, FpsCounter, WindowDimensions, WinitController};
use crate::overlay::FrameStats;
use crate::renderer::SpriteRenderer;
use crate::sprite::{QuadMesh, Sprite};
use crate::texture::TextureImage;

/// Owns the window, camera and renderer and routes winit events between them
pub struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    renderer: Option<SpriteRenderer>,
    camera: Camera,
    sprite: Sprite,
    controller: WinitController,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let camera = Camera::from_settings(&settings.camera);
        let sprite = Sprite::new(
            Vec3::from_array(settings.sprite.position),
            settings.sprite.rotation_z,
        );

        Self {
            settings,
            window: None,
            renderer: None,
            camera,
            sprite,
            controller: WinitController::new(),
            clock: Clock::new(),
            fps: FpsCounter::default(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<Arc<Window>> {
        let window_settings = &self.settings.window;
        let window = event_loop.create_window(
            Window::default_attributes()
                .with_title(window_settings.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    window_settings.width,
                    window_settings.height,
                )),
        )?;
        Ok(Arc::new(window))
    }

    fn create_renderer(&self, window: Arc<Window>) -> anyhow::Result<SpriteRenderer> {
        let image = TextureImage::load_or_default(self.settings.sprite.texture.as_deref())?;
        let quad = QuadMesh::new(self.settings.sprite.uv_rect());
        pollster::block_on(SpriteRenderer::new(
            window,
            &quad,
            &image,
            self.settings.window.show_overlay,
        ))
    }

    /// Confine and hide the cursor. Not every platform supports every mode.
    fn grab_cursor(window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => window.set_cursor_visible(false),
            Err(e) => log::warn!("Cursor grab unavailable: {}", e),
        }
    }

    fn resize(&mut self, dimensions: WindowDimensions) {
        self.camera.set_viewport(dimensions.width, dimensions.height);
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(dimensions);
        }
    }

    /// Apply every held direction for this frame, one call each
    fn apply_movement(&mut self, delta: f32) {
        for movement in self.controller.held_movements() {
            self.camera.process_keyboard(movement, delta);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.tick(delta) {
            log::debug!("FPS: {:.1}", fps);
        }
        self.apply_movement(delta);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        if renderer.dimensions().is_empty() {
            return;
        }

        let stats = FrameStats::capture(
            &self.camera,
            self.fps.fps(),
            self.fps.frame_time_ms(),
            renderer.dimensions(),
        );

        match renderer.render(&self.camera, &self.sprite, window, &stats) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create window: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match self.create_renderer(window.clone()) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        if self.settings.window.grab_cursor {
            Self::grab_cursor(&window);
        }

        let dimensions = renderer.dimensions();
        self.camera.set_viewport(dimensions.width, dimensions.height);
        self.clock.reset();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        self.controller.process_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::MouseWheel { delta, .. } => {
                self.camera.process_mouse_scroll(scroll_lines(&delta));
            }
            WindowEvent::Resized(size) => self.resize(size.into()),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if self.renderer.is_none() {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.camera.look(dx as f32, dy as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
