use super::r#trait::DisplayServer;
use crate::error::Result;
use crate::services::process;
use tracing::debug;

pub struct XrandrDisplayServer {
    program: String,
}

impl XrandrDisplayServer {
    pub fn new(program: String) -> Self {
        Self { program }
    }
}

#[async_trait::async_trait]
impl DisplayServer for XrandrDisplayServer {
    async fn verbose_output(&self) -> Result<String> {
        let stdout = process::capture(&self.program, &["--verbose"]).await?;
        debug!("xrandr --verbose: получено {} байт", stdout.len());
        Ok(stdout)
    }
}
