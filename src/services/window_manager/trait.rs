use crate::config::Config;
use crate::error::Result;
use crate::model::WmCommand;
use serde::Deserialize;

/// Сведения о мониторе из `bspc query -m <id> -T`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MonitorDescription {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "randrId")]
    pub randr_id: Option<u64>,
}

/// Trait for window manager backends: read-only queries plus fire-and-forget mutations
#[async_trait::async_trait]
pub trait WindowManager: Send + Sync {
    /// Handles of all monitors, in the window manager's own order
    async fn list_monitors(&self) -> Result<Vec<String>>;

    async fn describe_monitor(&self, handle: &str) -> Result<MonitorDescription>;

    /// Execute a mutating command
    async fn execute(&self, command: &WmCommand) -> Result<()>;
}

/// Factory function to create an appropriate window manager client based on the dry_run flag
pub fn create_window_manager(config: &Config, dry_run: bool) -> Box<dyn WindowManager> {
    let bspc = super::bspc::BspcWindowManager::new(config.tools.bspc.clone());
    if dry_run {
        Box::new(super::dry_run::DryRunWindowManager::new(Box::new(bspc)))
    } else {
        Box::new(bspc)
    }
}
