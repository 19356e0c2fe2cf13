use super::inventory::HardwareInventory;
use crate::model::MonitorRecord;
use tracing::debug;

/// Привязать выходы xrandr к мониторам bspwm и отбросить непривязанные
pub fn correlate(records: Vec<MonitorRecord>, inventory: &HardwareInventory) -> Vec<MonitorRecord> {
    records
        .into_iter()
        .filter_map(|mut record| {
            let handle = record
                .hardware_id
                .as_deref()
                .and_then(|id| inventory.handle_for(id))?;
            record.wm_id = Some(handle.to_string());
            Some(record)
        })
        .inspect(|record| debug!("correlate: {}", record))
        .collect()
}
