//! Scene configuration, loaded from RON and overridable from the command line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::die::Bounds;
use crate::error::Error;

/// Gap between neighbouring dice when laying out a row.
pub const ROW_SPACING: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: usize,
    pub height: usize,
    pub title: String,
    pub focal_length: f32,
    pub bounds: Bounds,
    pub cube_size: f32,
    /// Spawn positions, x / height / z.
    pub dice: Vec<[f32; 3]>,
    pub target_fps: u32,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "3D Dice Simulator".to_string(),
            focal_length: 400.0,
            bounds: Bounds::default(),
            cube_size: 50.0,
            dice: vec![[-100.0, 50.0, 0.0], [0.0, 50.0, 0.0], [100.0, 50.0, 0.0]],
            target_fps: 60,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn from_ron(text: &str) -> Result<Self, Error> {
        let config: SceneConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text)
    }

    /// Replaces the spawn list with `count` dice in a row centred on x = 0,
    /// resting on the floor.
    pub fn set_dice_count(&mut self, count: usize) {
        let first = -(count.saturating_sub(1) as f32) * ROW_SPACING / 2.0;
        self.dice = (0..count)
            .map(|i| [first + i as f32 * ROW_SPACING, self.cube_size, 0.0])
            .collect();
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.cube_size.is_nan() || self.cube_size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "cube_size must be positive, got {}",
                self.cube_size
            )));
        }
        if self.focal_length.is_nan() || self.focal_length <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "focal_length must be positive, got {}",
                self.focal_length
            )));
        }
        if self.bounds.x <= self.cube_size || self.bounds.z <= self.cube_size {
            return Err(Error::InvalidConfig(format!(
                "bounds ({}, {}) must exceed cube_size {}",
                self.bounds.x, self.bounds.z, self.cube_size
            )));
        }
        // Farthest a corner gets from the screen plane, free or dragged.
        let depth = self.bounds.z.max(self.height as f32 / 2.0) + self.cube_size * 3f32.sqrt();
        if depth >= self.focal_length {
            return Err(Error::InvalidConfig(format!(
                "focal_length {} must exceed scene depth {depth}",
                self.focal_length
            )));
        }
        if self.target_fps == 0 {
            return Err(Error::InvalidConfig("target_fps must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SceneConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let config = SceneConfig::from_ron("(cube_size: 40.0, seed: Some(9))").unwrap();
        assert_eq!(config.cube_size, 40.0);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.width, 800);
        assert_eq!(config.dice.len(), 3);
    }

    #[test]
    fn nested_bounds_parse() {
        let config = SceneConfig::from_ron("(bounds: (x: 400.0, z: 250.0))").unwrap();
        assert_eq!(config.bounds, Bounds::new(400.0, 250.0));
    }

    #[test]
    fn rejects_cube_larger_than_bounds() {
        let err = SceneConfig::from_ron("(cube_size: 300.0)").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{err}");
    }

    #[test]
    fn rejects_scene_deeper_than_focal_length() {
        for text in [
            "(bounds: (x: 300.0, z: 400.0))",
            "(focal_length: 300.0)",
            "(height: 800)",
        ] {
            let err = SceneConfig::from_ron(text).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)), "{text}: {err}");
        }
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = SceneConfig::from_ron("(cube_size: )").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SceneConfig::load(Path::new("/nonexistent/dicebox.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dicebox.ron"));
    }

    #[test]
    fn dice_count_lays_out_a_row() {
        let mut config = SceneConfig::default();
        config.set_dice_count(3);
        assert_eq!(
            config.dice,
            vec![[-100.0, 50.0, 0.0], [0.0, 50.0, 0.0], [100.0, 50.0, 0.0]]
        );
        config.set_dice_count(0);
        assert!(config.dice.is_empty());
    }
}
