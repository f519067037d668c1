use glam::Vec3;
use winit::window::Window;

use crate::camera::Camera;
use crate::core::WindowDimensions;

/// Numbers shown in the debug overlay, captured once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub resolution: (u32, u32),
}

impl FrameStats {
    pub fn capture(camera: &Camera, fps: f32, frame_time_ms: f32, dimensions: WindowDimensions) -> Self {
        Self {
            fps,
            frame_time_ms,
            position: camera.position,
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            zoom: camera.zoom(),
            resolution: (dimensions.width, dimensions.height),
        }
    }
}

/// egui debug window drawn on top of the sprite
pub struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl Overlay {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat, window: &Window) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(
            device,
            surface_format,
            egui_wgpu::RendererOptions::default(),
        );

        Self { ctx, state, renderer }
    }

    /// Returns true when egui consumed the event
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    pub fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        window: &Window,
        stats: &FrameStats,
    ) {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.ctx.run(raw_input, |ctx| {
            egui::Window::new("Camera")
                .title_bar(true)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .default_width(220.0)
                .show(ctx, |ui| {
                    ui.heading(
                        egui::RichText::new(format!("{:.0} FPS", stats.fps))
                            .size(28.0)
                            .color(egui::Color32::from_rgb(74, 158, 255)),
                    );
                    ui.label(
                        egui::RichText::new(format!("{:.2} ms", stats.frame_time_ms))
                            .size(14.0)
                            .color(egui::Color32::GRAY),
                    );

                    ui.add_space(6.0);
                    ui.separator();

                    ui.monospace(format!(
                        "Pos: ({:.2}, {:.2}, {:.2})",
                        stats.position.x, stats.position.y, stats.position.z
                    ));
                    ui.monospace(format!("Yaw: {:.1}° Pitch: {:.1}°", stats.yaw, stats.pitch));
                    ui.monospace(format!("FOV: {:.1}°", stats.zoom));
                    ui.monospace(format!(
                        "Resolution: {}x{}",
                        stats.resolution.0, stats.resolution.1
                    ));

                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new("WASD move, mouse look, wheel zoom, Esc quit")
                            .size(11.0)
                            .color(egui::Color32::GRAY),
                    );
                });
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .ctx
            .tessellate(full_output.shapes, self.ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [stats.resolution.0, stats.resolution.1],
            pixels_per_point: window.scale_factor() as f32,
        };

        self.renderer
            .update_buffers(device, queue, encoder, &tris, &screen_descriptor);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            // egui-wgpu wants a 'static pass; forget_lifetime ties it to the encoder at runtime instead
            let mut render_pass = render_pass.forget_lifetime();
            self.renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
