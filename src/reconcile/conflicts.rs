use crate::model::{ActionBuckets, Disposition, MonitorRecord};
use tracing::debug;

/// Свернуть зеркальные мониторы (одинаковое смещение) до одного активного.
///
/// Работает только с корзиной Activate. Из группы зеркал активными остаются
/// все primary, а если primary нет, то самый большой монитор (ширина, затем
/// высота; при равенстве первый по порядку). Остальные уходят в
/// RetainPassive после уже лежащих там мониторов. Deactivate не трогается.
pub fn resolve(mut buckets: ActionBuckets) -> ActionBuckets {
    let mut pending: Vec<Option<MonitorRecord>> = buckets
        .take(Disposition::Activate)
        .into_iter()
        .map(Some)
        .collect();

    let mut resolved = ActionBuckets::new();
    for disposition in [Disposition::RetainPassive, Disposition::Deactivate] {
        for record in buckets.take(disposition) {
            resolved.push(disposition, record);
        }
    }

    for index in 0..pending.len() {
        let Some(offset) = pending[index].as_ref().map(MonitorRecord::position_key) else {
            continue;
        };

        let group: Vec<usize> = (index..pending.len())
            .filter(|&j| {
                pending[j]
                    .as_ref()
                    .is_some_and(|other| other.position_key() == offset)
            })
            .collect();

        let members: Vec<MonitorRecord> = group.iter().filter_map(|&j| pending[j].take()).collect();
        if members.len() > 1 {
            debug!(
                "resolve: группа зеркал на {:?}: {:?}",
                offset,
                members.iter().map(|m| m.name.as_str()).collect::<Vec<_>>()
            );
        }

        // одиночный монитор всегда оказывается победителем своей группы
        let winners: Vec<bool> = if members.iter().any(|m| m.primary) {
            members.iter().map(|m| m.primary).collect()
        } else {
            let boss = boss_index(&members);
            (0..members.len()).map(|i| i == boss).collect()
        };

        for (member, wins) in members.into_iter().zip(winners) {
            let disposition = if wins {
                Disposition::Activate
            } else {
                Disposition::RetainPassive
            };
            resolved.push(disposition, member);
        }
    }

    resolved
}

/// Индекс самого большого монитора; при равенстве побеждает первый
fn boss_index(members: &[MonitorRecord]) -> usize {
    let size = |m: &MonitorRecord| m.geometry.map(|g| (g.width, g.height)).unwrap_or((0, 0));

    let mut boss = 0;
    for (i, member) in members.iter().enumerate().skip(1) {
        if size(member) > size(&members[boss]) {
            boss = i;
        }
    }
    boss
}
