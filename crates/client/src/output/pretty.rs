//! Pretty output formatting.

use crate::client::health::Health;
use crate::version::BuildInfo;

/// Format a health report for display.
pub fn format_health(health: &Health) -> String {
    format!("Backend health:\n  Status: {}", health.status)
}

/// Format build metadata for display.
pub fn format_build_info(info: &BuildInfo) -> String {
    format!(
        "connector-client {}\n  Core: {}\n  Revision: {}",
        info.app_version, info.core_version, info.git_describe
    )
}
