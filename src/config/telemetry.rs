use tracing::{debug, info};

use super::{StoreSettings, ENV_PREFIX};

pub fn log_resolved(settings: &StoreSettings, injected_env: bool) {
    if injected_env {
        debug!(
            target: "settings_profile::config",
            prefix = ENV_PREFIX,
            "Resolving store settings from injected environment"
        );
    }
    info!(
        target: "settings_profile::config",
        settings_dir = %settings.settings_dir.display(),
        file_name = %settings.file_name,
        "Store settings resolved"
    );
}
