use std::fmt;

/// Состояние подключения выхода по данным xrandr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    UnknownConnection,
}

impl ConnectionStatus {
    pub const CONNECTED: &'static str = "connected";
    pub const DISCONNECTED: &'static str = "disconnected";
    pub const UNKNOWN_CONNECTION: &'static str = "unknown connection";

    /// Разобрать статус по префиксу строки, по умолчанию UnknownConnection
    pub fn from_prefix(text: &str) -> Self {
        if text.starts_with(Self::CONNECTED) {
            Self::Connected
        } else if text.starts_with(Self::DISCONNECTED) {
            Self::Disconnected
        } else {
            Self::UnknownConnection
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => Self::CONNECTED,
            Self::Disconnected => Self::DISCONNECTED,
            Self::UnknownConnection => Self::UNKNOWN_CONNECTION,
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Геометрия выхода: WIDTHxHEIGHT+X+Y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
}

impl Geometry {
    pub fn new(width: u32, height: u32, x_offset: i32, y_offset: i32) -> Self {
        Self {
            width,
            height,
            x_offset,
            y_offset,
        }
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.x_offset, self.y_offset)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}+{}+{}",
            self.width, self.height, self.x_offset, self.y_offset
        )
    }
}

/// Запись о мониторе, собираемая из одной секции `xrandr --verbose`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorRecord {
    pub name: String,
    pub status: ConnectionStatus,
    pub hardware_id: Option<String>,
    pub edid: Option<String>,
    pub geometry: Option<Geometry>,
    pub primary: bool,
    pub wm_id: Option<String>,
}

impl MonitorRecord {
    pub fn new(name: impl Into<String>, status: ConnectionStatus) -> Self {
        Self {
            name: name.into(),
            status,
            hardware_id: None,
            edid: None,
            geometry: None,
            primary: false,
            wm_id: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_hardware_id(mut self, id: impl Into<String>) -> Self {
        self.hardware_id = Some(id.into());
        self
    }

    #[allow(dead_code)]
    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    #[allow(dead_code)]
    pub fn with_wm_id(mut self, wm_id: impl Into<String>) -> Self {
        self.wm_id = Some(wm_id.into());
        self
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Ключ сортировки слева направо; записи без геометрии уходят в конец
    pub fn position_key(&self) -> (i32, i32) {
        self.geometry
            .map(|g| g.offset())
            .unwrap_or((i32::MAX, i32::MAX))
    }

    pub fn wm_handle(&self) -> &str {
        self.wm_id.as_deref().unwrap_or("")
    }
}

impl fmt::Display for MonitorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.status)?;
        if let Some(geometry) = &self.geometry {
            write!(f, " {}", geometry)?;
        }
        if self.primary {
            write!(f, " primary")?;
        }
        if let Some(wm_id) = &self.wm_id {
            write!(f, " (bspc {})", wm_id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_prefix() {
        assert_eq!(ConnectionStatus::from_prefix("connected primary"), ConnectionStatus::Connected);
        assert_eq!(ConnectionStatus::from_prefix("disconnected (normal)"), ConnectionStatus::Disconnected);
        assert_eq!(
            ConnectionStatus::from_prefix("unknown connection"),
            ConnectionStatus::UnknownConnection
        );
        assert_eq!(ConnectionStatus::from_prefix("garbage"), ConnectionStatus::UnknownConnection);
    }

    #[test]
    fn test_record_display() {
        let record = MonitorRecord::new("HDMI-1", ConnectionStatus::Connected)
            .with_geometry(Geometry::new(1920, 1080, 0, 0))
            .with_primary(true)
            .with_wm_id("0x00200002");

        assert_eq!(record.to_string(), "HDMI-1 [connected] 1920x1080+0+0 primary (bspc 0x00200002)");
    }

    #[test]
    fn test_position_key_without_geometry() {
        let record = MonitorRecord::new("VGA-1", ConnectionStatus::Disconnected);
        assert_eq!(record.position_key(), (i32::MAX, i32::MAX));
    }
}
