use crate::config::Config;
use crate::error::Result;

/// Trait for display servers that can describe their outputs as text
#[async_trait::async_trait]
pub trait DisplayServer: Send + Sync {
    /// Full verbose description of all outputs
    async fn verbose_output(&self) -> Result<String>;
}

pub fn create_display_server(config: &Config) -> Box<dyn DisplayServer> {
    Box::new(super::xrandr::XrandrDisplayServer::new(
        config.tools.xrandr.clone(),
    ))
}
