use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use wgpu::{Adapter, Device, DeviceDescriptor, Instance, Queue, Surface, SurfaceConfiguration};
use winit::window::Window;

use super::window::WindowDimensions;

/// Device, queue and the window surface they present to
pub struct GpuContext {
    device: Device,
    queue: Queue,
    surface: Surface<'static>,
    config: SurfaceConfiguration,
}

impl GpuContext {
    /// Create a GPU context for the given window
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let dimensions = WindowDimensions::from(window.inner_size());

        let instance = Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("Failed to create window surface")?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let info = adapter.get_info();
        log::info!("Using {} ({:?})", info.name, info.backend);

        let config = Self::create_surface_config(&surface, &adapter, dimensions)?;
        if !dimensions.is_empty() {
            surface.configure(&device, &config);
        }

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Get reference to the device
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Get reference to the queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn surface(&self) -> &Surface<'static> {
        &self.surface
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.config.width, self.config.height)
    }

    /// Reconfigure the surface for a new size. A zero-sized (minimized)
    /// window is recorded but not configured, since wgpu rejects it; callers
    /// see empty `dimensions()` until the window comes back.
    pub fn resize(&mut self, dimensions: WindowDimensions) -> bool {
        if !apply_dimensions(&mut self.config, dimensions) {
            return false;
        }
        self.surface.configure(&self.device, &self.config);
        true
    }

    /// Reapply the current configuration after the surface was lost
    pub fn reconfigure(&self) {
        if !self.dimensions().is_empty() {
            self.surface.configure(&self.device, &self.config);
        }
    }

    async fn request_adapter(instance: &Instance, surface: &Surface<'_>) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("Failed to find appropriate adapter: {:?}", e))
    }

    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        adapter
            .request_device(&DeviceDescriptor {
                label: Some("Sprite Camera Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .context("Failed to create device")
    }

    fn create_surface_config(
        surface: &Surface,
        adapter: &Adapter,
        dimensions: WindowDimensions,
    ) -> Result<SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow!("Surface reports no supported formats"))?;

        Ok(SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: dimensions.width,
            height: dimensions.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }
}

/// Store the window size in the surface config. Returns whether the surface
/// can be configured at that size.
fn apply_dimensions(config: &mut SurfaceConfiguration, dimensions: WindowDimensions) -> bool {
    config.width = dimensions.width;
    config.height = dimensions.height;
    !dimensions.is_empty()
}
