// src/infra/paths.rs — Config path resolution
//
// Paths respect the REGISTRAR_HOME environment variable for isolation.
// When REGISTRAR_HOME is set, config lives under that directory;
// when unset, under ~/.registrar/.

use std::path::PathBuf;

/// Returns the REGISTRAR_HOME override, if set.
fn registrar_home() -> Option<PathBuf> {
    std::env::var_os("REGISTRAR_HOME").map(PathBuf::from)
}

/// Configuration directory: $REGISTRAR_HOME/ or ~/.registrar/
pub fn config_dir() -> PathBuf {
    if let Some(home) = registrar_home() {
        return home;
    }
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".registrar")
}

/// Default config file path
pub fn config_file() -> PathBuf {
    config_dir().join("registrar.toml")
}
