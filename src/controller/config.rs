//! Controller domain: character tuning, RON loading, and startup validation.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A configuration error with context about which field failed.
#[derive(Debug)]
pub struct ConfigError {
    pub source: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            source: format!("character config field '{field}'"),
            message: message.into(),
        }
    }
}

/// All locomotion tunables. Immutable for the lifetime of a session; the
/// controller is constructed against a validated copy.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub move_speed: f32,
    pub ground_accel: f32,
    pub ground_decel: f32,
    pub air_control: f32,
    pub jump_force: f32,
    /// Air-jump charges; ground and coyote jumps are free.
    pub max_jumps: u32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub wall_slide_speed: f32,
    pub wall_jump_force: f32,
    /// Launch direction for wall jumps, normalized on load. The x
    /// component is mirrored away from the contacted wall.
    #[serde(deserialize_with = "vec2_from_pair")]
    pub wall_jump_angle: Vec2,
    pub wall_jump_duration: f32,
    pub check_radius: f32,
    pub wall_check_radius: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            move_speed: 40.0,
            ground_accel: 5.0,
            ground_decel: 15.0,
            air_control: 0.5,
            jump_force: 6.0,
            max_jumps: 2,
            coyote_time: 0.15,
            jump_buffer_time: 0.15,
            wall_slide_speed: 0.5,
            wall_jump_force: 6.0,
            wall_jump_angle: Vec2::new(1.0, 1.0).normalize(),
            wall_jump_duration: 0.15,
            check_radius: 0.1,
            wall_check_radius: 0.1,
        }
    }
}

fn vec2_from_pair<'de, D>(deserializer: D) -> Result<Vec2, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let (x, y) = <(f32, f32)>::deserialize(deserializer)?;
    Ok(Vec2::new(x, y))
}

impl CharacterConfig {
    /// Load tuning from a RON file, falling back to defaults when the file
    /// is absent. A file that exists but fails to parse or validate is a
    /// fatal error; the controller must not activate with broken tuning.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let file = path.display().to_string();
            let contents = fs::read_to_string(path).map_err(|e| ConfigError {
                source: file.clone(),
                message: format!("IO error: {e}"),
            })?;
            let config: CharacterConfig =
                ron::from_str(&contents).map_err(|e| ConfigError {
                    source: file,
                    message: format!("Parse error: {e}"),
                })?;
            config
        } else {
            info!("no character config at {}, using defaults", path.display());
            Self::default()
        };

        config.validate()?;
        Ok(config.normalized())
    }

    /// Check every invariant the locomotion core relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative: [(&'static str, f32); 10] = [
            ("move_speed", self.move_speed),
            ("ground_accel", self.ground_accel),
            ("ground_decel", self.ground_decel),
            ("air_control", self.air_control),
            ("jump_force", self.jump_force),
            ("coyote_time", self.coyote_time),
            ("jump_buffer_time", self.jump_buffer_time),
            ("wall_slide_speed", self.wall_slide_speed),
            ("wall_jump_force", self.wall_jump_force),
            ("wall_jump_duration", self.wall_jump_duration),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be finite and >= 0, got {value}"),
                ));
            }
        }

        if self.max_jumps < 1 {
            return Err(ConfigError::invalid("max_jumps", "must be at least 1"));
        }
        if !(self.check_radius > 0.0) {
            return Err(ConfigError::invalid(
                "check_radius",
                format!("must be > 0, got {}", self.check_radius),
            ));
        }
        if !(self.wall_check_radius > 0.0) {
            return Err(ConfigError::invalid(
                "wall_check_radius",
                format!("must be > 0, got {}", self.wall_check_radius),
            ));
        }
        if self.wall_jump_angle.length_squared() < f32::EPSILON {
            return Err(ConfigError::invalid(
                "wall_jump_angle",
                "must be a non-zero direction",
            ));
        }

        Ok(())
    }

    /// Normalize the wall-jump direction so tuning files can use any
    /// convenient vector, e.g. `(1, 2)`.
    pub fn normalized(mut self) -> Self {
        self.wall_jump_angle = self.wall_jump_angle.normalize();
        self
    }
}
