// Core configuration types
mod core;
mod loader;

pub use self::core::{AlgolabConfig, ArraysConfig, MatrixConfig, OutputConfig};

pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    resolve_config, CONFIG_FILE_NAME,
};
