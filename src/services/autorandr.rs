use crate::services::process;
use tracing::{debug, warn};

/// Записать в лог отпечаток текущей конфигурации от autorandr
pub async fn log_fingerprint(program: &str) {
    match process::capture(program, &["--fingerprint"]).await {
        Ok(fingerprint) => debug!("autorandr fingerprint: {}", fingerprint.trim()),
        Err(e) => warn!("Не удалось получить отпечаток autorandr: {}", e),
    }
}
