use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub tools: ToolsConfig,
    pub lid: LidConfig,
    pub desktops: DesktopsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: PathBuf,
}

/// Имена (или пути) внешних утилит
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    pub bspc: String,
    pub xrandr: String,
    pub autorandr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LidConfig {
    pub state_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DesktopsConfig {
    /// Общее число рабочих столов на все неотключённые мониторы
    pub total: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "compact".to_string(),
                file: PathBuf::from("/var/tmp/fix_display.log"),
            },
            tools: ToolsConfig {
                bspc: "bspc".to_string(),
                xrandr: "xrandr".to_string(),
                autorandr: "autorandr".to_string(),
            },
            lid: LidConfig {
                state_path: PathBuf::from("/proc/acpi/button/lid/LID0/state"),
            },
            desktops: DesktopsConfig { total: 9 },
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        // Отсутствующий файл не ошибка: остаются значения по умолчанию
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("FIX_DISPLAY_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "json" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        if self.logging.file.file_name().is_none() {
            anyhow::bail!("Некорректный путь к лог-файлу: {:?}", self.logging.file);
        }

        for (name, value) in [
            ("bspc", &self.tools.bspc),
            ("xrandr", &self.tools.xrandr),
            ("autorandr", &self.tools.autorandr),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("Пустой путь к утилите {}", name);
            }
        }

        if self.desktops.total == 0 {
            anyhow::bail!("desktops.total должно быть больше 0");
        }

        Ok(())
    }
}
