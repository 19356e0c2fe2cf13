use crate::model::{ActionBuckets, Disposition, MonitorRecord};
use crate::services::LidState;
use tracing::debug;

const LAPTOP_PANEL_PREFIXES: [&str; 2] = ["eDP", "LVDS"];

/// Встроенная панель ноутбука: eDP, eDP1, eDP-1, LVDS-1 ...
pub fn is_laptop_panel(name: &str) -> bool {
    LAPTOP_PANEL_PREFIXES.iter().any(|prefix| {
        name.strip_prefix(prefix).is_some_and(|rest| {
            rest.chars().all(|c| c == '-' || c.is_ascii_digit())
        })
    })
}

/// Разложить привязанные мониторы по корзинам, сохраняя исходный порядок
pub fn classify(records: Vec<MonitorRecord>, lid: LidState) -> ActionBuckets {
    let mut buckets = ActionBuckets::new();

    for record in records {
        let disposition = if !record.is_connected() || record.geometry.is_none() {
            Disposition::Deactivate
        } else if lid.is_closed() && is_laptop_panel(&record.name) {
            Disposition::RetainPassive
        } else {
            Disposition::Activate
        };

        debug!("classify: {} -> {}", record, disposition);
        buckets.push(disposition, record);
    }

    buckets
}
