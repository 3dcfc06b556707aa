pub mod environment;
pub mod files;

pub use environment::{CONFIG_ENV_VAR, get_config_path};
pub use files::{MAX_FILE_SIZE_BYTES, validate_file_size};
