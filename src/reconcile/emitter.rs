use crate::model::{ActionBuckets, Disposition, MonitorRecord, WmCommand};
use std::collections::HashSet;

const DESKTOP_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Команда вместе с монитором и корзиной, из которых она получена
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    pub disposition: Disposition,
    pub monitor: String,
    pub command: WmCommand,
}

/// Активные мониторы слева направо (x, затем y)
pub fn sorted_activate(buckets: &ActionBuckets) -> Vec<&MonitorRecord> {
    let mut monitors: Vec<&MonitorRecord> = buckets.get(Disposition::Activate).iter().collect();
    monitors.sort_by_key(|m| m.position_key());
    monitors
}

/// Число рабочих столов на каждый активный монитор (в порядке слева направо).
///
/// Пассивным мониторам достаётся по одному столу из общего пула, остаток
/// делится поровну, лишние столы получают самые левые мониторы.
pub fn desktop_shares(activate: usize, passive: usize, total: usize) -> Vec<usize> {
    if activate == 0 {
        return Vec::new();
    }

    let pool = total.saturating_sub(passive);
    let base = pool / activate;
    let extra = pool % activate;

    (0..activate)
        .map(|i| (base + usize::from(i < extra)).max(1))
        .collect()
}

/// `3, 2` -> `["3/a", "3/b"]`
pub fn desktop_names(label: usize, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let letter = DESKTOP_LETTERS[i % DESKTOP_LETTERS.len()] as char;
            match i / DESKTOP_LETTERS.len() {
                0 => format!("{}/{}", label, letter),
                round => format!("{}/{}{}", label, letter, round),
            }
        })
        .collect()
}

/// Команды переименования и удаления для итоговых корзин.
///
/// Номера мониторов сквозные: сначала активные слева направо, затем
/// пассивные в исходном порядке.
pub fn plan_commands(buckets: &ActionBuckets, total_desktops: usize) -> Vec<PlannedCommand> {
    let activate = sorted_activate(buckets);
    let passive = buckets.get(Disposition::RetainPassive);
    let shares = desktop_shares(activate.len(), passive.len(), total_desktops);

    let mut planned = Vec::with_capacity(buckets.total());
    let mut label = 1;

    for (monitor, share) in activate.into_iter().zip(shares) {
        planned.push(rename(Disposition::Activate, monitor, label, share));
        label += 1;
    }

    for monitor in passive {
        planned.push(rename(Disposition::RetainPassive, monitor, label, 1));
        label += 1;
    }

    for monitor in buckets.get(Disposition::Deactivate) {
        planned.push(PlannedCommand {
            disposition: Disposition::Deactivate,
            monitor: monitor.name.clone(),
            command: WmCommand::Remove {
                handle: monitor.wm_handle().to_string(),
            },
        });
    }

    planned
}

fn rename(disposition: Disposition, monitor: &MonitorRecord, label: usize, desktops: usize) -> PlannedCommand {
    PlannedCommand {
        disposition,
        monitor: monitor.name.clone(),
        command: WmCommand::Rename {
            handle: monitor.wm_handle().to_string(),
            label,
            desktops: desktop_names(label, desktops),
        },
    }
}

/// Желаемый порядок мониторов bspwm: активные слева направо, затем пассивные
pub fn target_order(buckets: &ActionBuckets) -> Vec<String> {
    sorted_activate(buckets)
        .into_iter()
        .chain(buckets.get(Disposition::RetainPassive))
        .map(|m| m.wm_handle().to_string())
        .collect()
}

/// Жадный однопроходный план перестановок.
///
/// На каждой позиции, где текущий монитор не совпадает с желаемым и ни один
/// из них ещё не участвовал в обмене, выполняется swap. Сходимость к
/// желаемому порядку при циклических смещениях не гарантируется.
pub fn plan_swaps(current: &[String], target: &[String]) -> Vec<WmCommand> {
    let mut swapped: HashSet<&str> = HashSet::new();
    let mut swaps = Vec::new();

    for (wanted, present) in target.iter().zip(current) {
        if wanted == present || swapped.contains(wanted.as_str()) || swapped.contains(present.as_str()) {
            continue;
        }

        swapped.insert(wanted);
        swapped.insert(present);
        swaps.push(WmCommand::Swap {
            current: present.clone(),
            target: wanted.clone(),
        });
    }

    swaps
}
