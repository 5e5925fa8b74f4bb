use serde::{Deserialize, Serialize};

use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;

/// Root configuration structure for algolab
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AlgolabConfig {
    /// Array pipeline parameters
    #[serde(default)]
    pub arrays: Option<ArraysConfig>,

    /// Matrix pipeline parameters
    #[serde(default)]
    pub matrix: Option<MatrixConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl AlgolabConfig {
    pub fn arrays(&self) -> ArraysConfig {
        self.arrays.clone().unwrap_or_default()
    }

    pub fn matrix(&self) -> MatrixConfig {
        self.matrix.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArraysConfig {
    /// Value searched for in the sorted primary sequence
    #[serde(default = "default_search_target")]
    pub search_target: i32,

    /// Offset applied to the secondary sequence in the overlap count
    #[serde(default = "default_overlap_offset")]
    pub overlap_offset: i32,

    /// Also selection-sort the secondary sequence and dump it
    #[serde(default)]
    pub sort_secondary: bool,
}

impl Default for ArraysConfig {
    fn default() -> Self {
        Self {
            search_target: default_search_target(),
            overlap_offset: default_overlap_offset(),
            sort_secondary: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixConfig {
    #[serde(default = "default_scalar")]
    pub scalar: i32,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            scalar: default_scalar(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
    /// Colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub color: Option<ColorMode>,
}

fn default_search_target() -> i32 {
    22
}
fn default_overlap_offset() -> i32 {
    100
}
fn default_scalar() -> i32 {
    5
}
