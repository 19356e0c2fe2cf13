use super::r#trait::{MonitorDescription, WindowManager};
use crate::error::Result;
use crate::model::WmCommand;
use tracing::debug;

/// Запросы уходят в настоящий bspwm, изменяющие команды только печатаются
pub struct DryRunWindowManager {
    inner: Box<dyn WindowManager>,
}

impl DryRunWindowManager {
    pub fn new(inner: Box<dyn WindowManager>) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl WindowManager for DryRunWindowManager {
    async fn list_monitors(&self) -> Result<Vec<String>> {
        self.inner.list_monitors().await
    }

    async fn describe_monitor(&self, handle: &str) -> Result<MonitorDescription> {
        self.inner.describe_monitor(handle).await
    }

    async fn execute(&self, command: &WmCommand) -> Result<()> {
        debug!("Dry-run: пропускаем {}", command);
        println!("{}", command);
        Ok(())
    }
}
