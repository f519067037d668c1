use std::path::Path;

use anyhow::{ensure, Context, Result};

const CHECKER_SIZE: u32 = 256;
const CHECKER_CELLS: u32 = 8;

/// RGBA8 image ready for upload. Rows run bottom to top so that v = 0
/// samples the bottom of the picture, matching the quad's texcoords.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl TextureImage {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        ensure!(width > 0 && height > 0, "Texture must not be empty ({}x{})", width, height);
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|texels| texels.checked_mul(4))
            .with_context(|| format!("Texture {}x{} is too large", width, height))?;
        ensure!(
            pixels.len() == expected,
            "Expected {} bytes for {}x{} RGBA, got {}",
            expected,
            width,
            height,
            pixels.len()
        );
        Ok(Self { width, height, pixels })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading texture: {:?}", path);

        let image = image::open(path)
            .with_context(|| format!("Failed to load texture: {:?}", path))?
            .flipv()
            .into_rgba8();
        let (width, height) = image.dimensions();

        log::debug!("Texture {:?} is {}x{}", path, width, height);
        Self::from_rgba(width, height, image.into_raw())
    }

    /// Two-tone checkerboard used when no image is configured
    pub fn checkerboard() -> Self {
        let cell = CHECKER_SIZE / CHECKER_CELLS;
        let pixels = (0..CHECKER_SIZE)
            .flat_map(|y| {
                (0..CHECKER_SIZE).flat_map(move |x| {
                    if (x / cell + y / cell) % 2 == 0 {
                        [235, 190, 60, 255]
                    } else {
                        [40, 40, 48, 255]
                    }
                })
            })
            .collect();

        Self {
            width: CHECKER_SIZE,
            height: CHECKER_SIZE,
            pixels,
        }
    }

    /// Load `path` if given, otherwise fall back to the checkerboard
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("No texture configured, using checkerboard");
                Ok(Self::checkerboard())
            }
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Create the GPU texture and upload the pixels
    pub fn upload(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> (wgpu::Texture, wgpu::TextureView) {
        let size = wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Sprite Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }
}
