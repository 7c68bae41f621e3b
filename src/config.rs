use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use egui::Color32;
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "mmlenv.toml";

fn alpha_to_u8(alpha: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccentStyle {
    pub color: [u8; 3],
    pub alpha: f32,
}

impl Default for AccentStyle {
    fn default() -> Self {
        Self {
            color: [0, 255, 0],
            alpha: 1.0,
        }
    }
}

impl AccentStyle {
    pub fn color32(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(
            self.color[0],
            self.color[1],
            self.color[2],
            alpha_to_u8(self.alpha),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Color of the reference sine curve.
    pub curve_accent: AccentStyle,
    /// Color of the segments connecting the control points.
    pub polyline_accent: AccentStyle,
    /// Integer-ish upscale factor for displaying the 400×200 canvas.
    pub display_scale: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            curve_accent: AccentStyle::default(),
            polyline_accent: AccentStyle {
                color: [255, 255, 0],
                alpha: 1.0,
            },
            display_scale: 2.0,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if let Ok(contents) = fs::read_to_string(&path) {
                match toml::from_str::<Self>(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {}: {err}", path.display());
                    }
                }
            }
        }
        Self::default()
    }

    pub const fn display_scale_factor(&self) -> f32 {
        self.display_scale.clamp(1.0, 8.0)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Mmlenv", "Mmlenv") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(base_dirs.config_dir().join("mmlenv").join(CONFIG_FILE_NAME));
        }

        paths
    }
}
