use std::env;

use log::warn;

use crate::render::DEFAULT_PATH_GLYPH;

pub const SEED_VAR: &str = "MAZE_SEED";
pub const PATH_GLYPH_VAR: &str = "MAZE_PATH_GLYPH";

/// Accepts any `u64`, or a negative `i64` reinterpreted as its two's
/// complement bit pattern, so `-1` seeds the same as `u64::MAX`.
pub fn parse_seed(value: &str) -> Result<u64, String> {
    let value = value.trim();
    value
        .parse::<u64>()
        .or_else(|_| value.parse::<i64>().map(|seed| seed as u64))
        .map_err(|e| format!("invalid seed {:?}: {}", value, e))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Used when no seed is given on the command line.
    pub seed: Option<u64>,
    pub path_glyph: char,
}

impl Config {
    /// Reads settings from the environment, after loading a `.env` file from
    /// the working directory if there is one. Bad values are logged and
    /// replaced by defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(env::var(SEED_VAR).ok(), env::var(PATH_GLYPH_VAR).ok())
    }

    fn from_vars(seed: Option<String>, path_glyph: Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(value) = seed {
            match parse_seed(&value) {
                Ok(seed) => config.seed = Some(seed),
                Err(e) => warn!("Ignoring {}: {}.", SEED_VAR, e),
            }
        }

        if let Some(value) = path_glyph {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(glyph), None) if !glyph.is_control() => config.path_glyph = glyph,
                _ => warn!(
                    "Ignoring {}={:?}: expected a single printable character.",
                    PATH_GLYPH_VAR, value
                ),
            }
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            path_glyph: DEFAULT_PATH_GLYPH,
        }
    }
}
