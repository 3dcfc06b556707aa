use std::env;
use std::path::PathBuf;

/// Environment variable naming a config file, used when `--config` is not given
pub const CONFIG_ENV_VAR: &str = "TIMECODE_MARKERS_CONFIG";

/// Config file path from the environment, if set and non-empty
pub fn get_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()).map(PathBuf::from)
}
