use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Состояние крышки ноутбука
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LidState {
    Open,
    Closed,
}

impl LidState {
    /// Прочитать состояние из файла ACPI; отсутствующий файл значит «открыта»
    pub fn read<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(state) => {
                debug!("Состояние крышки из {:?}: {:?}", path, state);
                state
            }
            Err(e) => {
                debug!("Не удалось прочитать {:?}: {}, считаем крышку открытой", path, e);
                LidState::Open
            }
        }
    }

    /// Прочитать состояние, пробрасывая ошибку ввода-вывода
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// `state:      closed` -> Closed
    pub fn parse(text: &str) -> Self {
        let closed = text
            .trim()
            .split(':')
            .map(str::trim)
            .any(|field| field.contains("closed"));

        if closed {
            LidState::Closed
        } else {
            LidState::Open
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, LidState::Closed)
    }
}
