//! Application lifecycle log events.

use tracing::{error, info, warn};

use crate::errors::TaskPruneError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

/// User errors are logged at warn, everything else at error.
pub fn log_app_error(error: &dyn TaskPruneError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error,
            user_error = true
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error_message = %error,
            user_error = false
        );
    }
}
