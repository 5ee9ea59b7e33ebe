//! Configuration module.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

/// Default pixel width of the expanded sidebar.
pub const DEFAULT_SIDE_WIDTH: u32 = 350;

/// Core configuration consumed by the sidebar controller.
///
/// Read-only to the controllers; the host resolves it once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreConfig {
    /// Pixel width of the expanded sidebar. Always positive after
    /// [`ResolvedConfig::validate`].
    pub side_width: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            side_width: DEFAULT_SIDE_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_standard_side_width() {
        assert_eq!(CoreConfig::default().side_width, 350);
    }

    #[test]
    fn default_config_is_cloneable() {
        let config = CoreConfig::default();
        assert_eq!(config, config.clone());
    }

    #[test]
    fn can_create_config_with_custom_width() {
        let config = CoreConfig { side_width: 200 };
        assert_eq!(config.side_width, 200);
    }
}
