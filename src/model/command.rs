use std::fmt;

/// Изменяющая команда для bspwm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmCommand {
    /// Переименовать монитор и пересоздать его рабочие столы
    Rename {
        handle: String,
        label: usize,
        desktops: Vec<String>,
    },
    Remove {
        handle: String,
    },
    /// Поменять местами два монитора
    Swap {
        current: String,
        target: String,
    },
    SetConfig {
        key: String,
        value: bool,
    },
}

impl WmCommand {
    /// Аргументы для `bspc`, без имени самой утилиты
    pub fn args(&self) -> Vec<String> {
        match self {
            WmCommand::Rename {
                handle,
                label,
                desktops,
            } => {
                let mut args = vec![
                    "monitor".to_string(),
                    handle.clone(),
                    "-n".to_string(),
                    label.to_string(),
                    "-d".to_string(),
                ];
                args.extend(desktops.iter().cloned());
                args
            }
            WmCommand::Remove { handle } => {
                vec!["monitor".to_string(), handle.clone(), "-r".to_string()]
            }
            WmCommand::Swap { current, target } => vec![
                "monitor".to_string(),
                current.clone(),
                "-s".to_string(),
                target.clone(),
            ],
            WmCommand::SetConfig { key, value } => {
                vec!["config".to_string(), key.clone(), value.to_string()]
            }
        }
    }
}

impl fmt::Display for WmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bspc {}", self.args().join(" "))
    }
}
