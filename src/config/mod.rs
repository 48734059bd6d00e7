mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, EXTENSIONS_ENV_VAR, FileConfigLoader, FileSystem, LoadResult, RealFileSystem,
    apply_extension_override,
};
pub use model::{Config, CustomLanguageConfig, LoggingConfig, ScannerConfig};
pub use validation::validate_config_semantics;
