use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, Result};

pub const DEFAULT_MAX_POINTS: usize = 500_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Max nr. of points to emit. Larger files are subsampled with a uniform stride.
    pub max_points: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl DecodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_points == 0 {
            return Err(DecodeError::InvalidConfig("max_points must be at least 1"));
        }
        Ok(())
    }
}
