// config.rs - Settings file and CLI overrides
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW, DEFAULT_ZOOM};
use crate::cli::Cli;
use crate::sprite::UvRect;

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Hide and confine the cursor so mouse look works without hitting the edges
    pub grab_cursor: bool,
    pub show_overlay: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Sprite Camera".to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            grab_cursor: true,
            show_overlay: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub world_up: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// One cell of an evenly divided sprite sheet, row 0 at the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetCell {
    pub columns: u32,
    pub rows: u32,
    pub column: u32,
    pub row: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSettings {
    /// PNG or JPEG to draw; a checkerboard is generated when unset
    pub texture: Option<String>,
    pub uv: UvRect,
    /// Takes precedence over `uv` when set
    pub sheet: Option<SheetCell>,
    pub position: [f32; 3],
    /// Rotation about Z in degrees
    pub rotation_z: f32,
}

impl Default for SpriteSettings {
    fn default() -> Self {
        Self {
            texture: None,
            uv: UvRect::default(),
            sheet: None,
            position: [0.0, 0.0, 0.0],
            rotation_z: 0.0,
        }
    }
}

impl SpriteSettings {
    /// Texture region mapped onto the quad
    pub fn uv_rect(&self) -> UvRect {
        match self.sheet {
            Some(cell) => UvRect::cell(cell.columns, cell.rows, cell.column, cell.row),
            None => self.uv,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub sprite: SpriteSettings,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse settings JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Invalid settings file: {:?}", path))
    }

    /// Settings file (if any) with command-line flags layered on top
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                log::info!("Loading settings from {:?}", path);
                Self::load(path)?
            }
            None => Self::default(),
        };
        settings.apply_cli(cli);
        Ok(settings)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
        if cli.no_ui {
            self.window.show_overlay = false;
        }
        if cli.no_grab {
            self.window.grab_cursor = false;
        }
        if let Some(texture) = &cli.texture {
            self.sprite.texture = Some(texture.clone());
        }
        if let Some(speed) = cli.speed {
            self.camera.movement_speed = speed;
        }
        if let Some(sensitivity) = cli.sensitivity {
            self.camera.mouse_sensitivity = sensitivity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_camera_constants() {
        let settings = Settings::default();
        assert_eq!(settings.camera.position, [0.0, 0.0, 3.0]);
        assert_eq!(settings.camera.yaw, -90.0);
        assert_eq!(settings.camera.movement_speed, 2.5);
        assert_eq!(settings.camera.zoom, 45.0);
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert!(settings.sprite.texture.is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(
            r#"{ "camera": { "mouse_sensitivity": 0.2 }, "window": { "width": 1024 } }"#,
        )
        .unwrap();

        assert_eq!(settings.camera.mouse_sensitivity, 0.2);
        assert_eq!(settings.camera.movement_speed, 2.5);
        assert_eq!(settings.window.width, 1024);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.sprite, SpriteSettings::default());
    }

    #[test]
    fn test_sprite_uv_from_json() {
        let settings = Settings::from_json(
            r#"{ "sprite": { "texture": "face.png", "uv": { "u_min": 0.0, "v_min": 0.0, "u_max": 0.5, "v_max": 0.5 } } }"#,
        )
        .unwrap();

        assert_eq!(settings.sprite.texture.as_deref(), Some("face.png"));
        assert_eq!(settings.sprite.uv.u_max, 0.5);
    }

    #[test]
    fn test_sheet_cell_overrides_uv() {
        let settings = Settings::from_json(
            r#"{ "sprite": { "sheet": { "columns": 4, "rows": 2, "column": 3, "row": 0 } } }"#,
        )
        .unwrap();

        assert_eq!(settings.sprite.uv_rect(), UvRect::new(0.75, 0.0, 1.0, 0.5));
        assert_eq!(Settings::default().sprite.uv_rect(), UvRect::FULL);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Settings::load("definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("not/here.json"));
    }

    #[test]
    fn test_cli_overrides_settings() {
        let cli = Cli::parse_from([
            "sprite-camera",
            "--width",
            "1280",
            "--no-ui",
            "--texture",
            "awesomeface.png",
            "--sensitivity",
            "0.2",
        ]);

        let mut settings = Settings::default();
        settings.apply_cli(&cli);

        assert_eq!(settings.window.width, 1280);
        assert_eq!(settings.window.height, 600);
        assert!(!settings.window.show_overlay);
        assert!(settings.window.grab_cursor);
        assert_eq!(settings.sprite.texture.as_deref(), Some("awesomeface.png"));
        assert_eq!(settings.camera.mouse_sensitivity, 0.2);
        assert_eq!(settings.camera.movement_speed, 2.5);
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut settings = Settings::default();
        settings.sprite.rotation_z = 30.0;
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
