use crate::model::MonitorRecord;
use crate::services::{DisplayServer, LidState};
use crate::topology::parse_topology;
use once_cell::unsync::OnceCell;
use std::path::PathBuf;
use tracing::warn;

/// Данные одного запуска, которые вычисляются не более одного раза.
///
/// Живёт ровно один запуск и никуда не сохраняется.
pub struct RunContext {
    lid_path: PathBuf,
    lid: OnceCell<LidState>,
    topology: tokio::sync::OnceCell<Vec<MonitorRecord>>,
}

impl RunContext {
    pub fn new(lid_path: impl Into<PathBuf>) -> Self {
        Self {
            lid_path: lid_path.into(),
            lid: OnceCell::new(),
            topology: tokio::sync::OnceCell::new(),
        }
    }

    pub fn lid_state(&self) -> LidState {
        *self.lid.get_or_init(|| LidState::read(&self.lid_path))
    }

    /// Разобранный вывод xrandr; при недоступном xrandr список пуст
    pub async fn topology(&self, display: &dyn DisplayServer) -> &[MonitorRecord] {
        self.topology
            .get_or_init(|| async {
                match display.verbose_output().await {
                    Ok(text) => parse_topology(&text),
                    Err(e) => {
                        warn!("Не удалось получить вывод xrandr: {}", e);
                        Vec::new()
                    }
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::testing::FakeDisplayServer;

    const TOPOLOGY: &str = "eDP-1 connected primary 1920x1080+0+0\n\tIdentifier: 0x0a\n";

    #[tokio::test]
    async fn test_topology_is_parsed_once() {
        let display = FakeDisplayServer::new(TOPOLOGY);
        let ctx = RunContext::new("/nonexistent/lid/state");

        assert_eq!(ctx.topology(&display).await.len(), 1);
        assert_eq!(ctx.topology(&display).await.len(), 1);
        assert_eq!(display.calls(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_display_server_gives_empty_topology() {
        let display = FakeDisplayServer::unavailable();
        let ctx = RunContext::new("/nonexistent/lid/state");
        assert!(ctx.topology(&display).await.is_empty());
    }

    #[test]
    fn test_missing_lid_file_is_open() {
        let ctx = RunContext::new("/nonexistent/lid/state");
        assert_eq!(ctx.lid_state(), LidState::Open);
    }
}
