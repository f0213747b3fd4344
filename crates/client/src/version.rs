//! Build metadata baked in at compile time.

use serde::Serialize;

/// Version of this crate, from the package manifest.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the connector_core dependency.
pub const CORE_VERSION: &str = connector_core::VERSION;

/// `git describe` output captured by the build script, with any
/// `-dirty` suffix stripped. `"unknown"` outside a git checkout.
pub const GIT_DESCRIBE: &str = env!("CONNECTOR_GIT_DESCRIBE");

/// Aggregate build metadata, reported by the `version` command.
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub app_version: &'static str,
    pub core_version: &'static str,
    pub git_describe: &'static str,
}

impl BuildInfo {
    /// The metadata this binary was built with.
    pub fn current() -> Self {
        Self {
            app_version: APP_VERSION,
            core_version: CORE_VERSION,
            git_describe: GIT_DESCRIBE,
        }
    }
}
