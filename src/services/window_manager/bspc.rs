use super::r#trait::{MonitorDescription, WindowManager};
use crate::error::Result;
use crate::model::WmCommand;
use crate::services::process;
use tracing::{debug, info};

pub struct BspcWindowManager {
    program: String,
}

impl BspcWindowManager {
    pub fn new(program: String) -> Self {
        Self { program }
    }
}

/// Разобрать вывод `bspc query -M`: идентификаторы через пробельные символы
pub fn parse_monitor_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

pub fn parse_monitor_description(text: &str) -> Result<MonitorDescription> {
    Ok(serde_json::from_str(text)?)
}

#[async_trait::async_trait]
impl WindowManager for BspcWindowManager {
    async fn list_monitors(&self) -> Result<Vec<String>> {
        let stdout = process::capture(&self.program, &["query", "-M"]).await?;
        let monitors = parse_monitor_list(&stdout);
        debug!("bspc query -M: {:?}", monitors);
        Ok(monitors)
    }

    async fn describe_monitor(&self, handle: &str) -> Result<MonitorDescription> {
        let stdout = process::capture(&self.program, &["query", "-m", handle, "-T"]).await?;
        parse_monitor_description(&stdout)
    }

    async fn execute(&self, command: &WmCommand) -> Result<()> {
        info!("Выполняем: {}", command);
        process::fire(&self.program, &command.args()).await
    }
}
