//! Reconciliation of the xrandr topology with bspwm monitors.
//!
//! Stages run strictly in order: inventory -> topology -> correlate ->
//! classify -> resolve conflicts -> emit commands. Everything except the
//! first and the last stage is pure.

pub mod classify;
pub mod conflicts;
pub mod context;
pub mod correlate;
pub mod emitter;
pub mod inventory;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RunContext;

use crate::model::{ActionBuckets, Disposition, WmCommand};
use crate::services::{autorandr, DisplayServer, WindowManager};
use tracing::{debug, error, info, warn};

const REMOVE_MONITOR_SETTINGS: [&str; 2] = ["remove_disabled_monitors", "remove_unplugged_monitors"];

/// Итог запуска
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Команды отправлены (число включает перестановки)
    Applied { commands: usize },
    /// Нет ни одного монитора, который можно активировать; ничего не изменено
    NoMonitors,
}

pub struct Reconciler<'a> {
    wm: &'a dyn WindowManager,
    display: &'a dyn DisplayServer,
    total_desktops: usize,
    autorandr: String,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        wm: &'a dyn WindowManager,
        display: &'a dyn DisplayServer,
        total_desktops: usize,
        autorandr: impl Into<String>,
    ) -> Self {
        Self {
            wm,
            display,
            total_desktops,
            autorandr: autorandr.into(),
        }
    }

    /// Этапы 1-4: опрос, разбор, сопоставление и классификация
    pub async fn compute_actions(&self, ctx: &RunContext) -> ActionBuckets {
        let inventory = inventory::read_inventory(self.wm).await;
        let records = ctx.topology(self.display).await.to_vec();
        let correlated = correlate::correlate(records, &inventory);

        debug!(
            "compute_actions: {} мониторов bspwm, {} сопоставлено",
            inventory.len(),
            correlated.len()
        );

        classify::classify(correlated, ctx.lid_state())
    }

    /// Полное согласование мониторов
    pub async fn run(&self, ctx: &RunContext) -> Outcome {
        let buckets = self.compute_actions(ctx).await;
        if buckets.is_empty(Disposition::Activate) {
            warn!("Нет доступных мониторов!");
            return Outcome::NoMonitors;
        }

        debug!("До разрешения конфликтов:\n{}", buckets);
        let buckets = conflicts::resolve(buckets);
        debug!("После разрешения конфликтов:\n{}", buckets);

        let mut sent = 0;
        for planned in emitter::plan_commands(&buckets, self.total_desktops) {
            match planned.disposition {
                Disposition::Activate => info!("Добавляем монитор {} ({})", planned.monitor, planned.command),
                Disposition::RetainPassive => info!("Приглушаем монитор {} ({})", planned.monitor, planned.command),
                Disposition::Deactivate => info!("Удаляем монитор {} ({})", planned.monitor, planned.command),
            }
            if self.send(&planned.command).await {
                sent += 1;
            }
        }

        sent += self.reorder(&buckets).await;

        Outcome::Applied { commands: sent }
    }

    /// Переключить настройки bspwm remove_disabled/unplugged_monitors
    pub async fn set_remove_monitors(&self, ctx: &RunContext, state: bool) -> Outcome {
        if state {
            let buckets = self.compute_actions(ctx).await;
            if buckets.is_empty(Disposition::Activate) {
                warn!("Попытка включить удаление мониторов, пока нет ни одного дисплея");
                autorandr::log_fingerprint(&self.autorandr).await;
                return Outcome::NoMonitors;
            }
        }

        let mut sent = 0;
        for key in REMOVE_MONITOR_SETTINGS {
            let command = WmCommand::SetConfig {
                key: key.to_string(),
                value: state,
            };
            if self.send(&command).await {
                sent += 1;
            }
        }

        Outcome::Applied { commands: sent }
    }

    /// Диагностика для режима отладки
    pub async fn log_diagnostics(&self, ctx: &RunContext) {
        debug!("Выходов xrandr с Identifier: {}", ctx.topology(self.display).await.len());
        debug!("Крышка закрыта: {}", ctx.lid_state().is_closed());
    }

    /// Этап 6d: привести порядок мониторов bspwm к порядку слева направо
    async fn reorder(&self, buckets: &ActionBuckets) -> usize {
        let target = emitter::target_order(buckets);
        debug!("Желаемый порядок мониторов: {:?}", target);

        let current = match self.wm.list_monitors().await {
            Ok(current) => current,
            Err(e) => {
                warn!("Не удалось получить порядок мониторов, перестановка пропущена: {}", e);
                return 0;
            }
        };

        let mut sent = 0;
        for swap in emitter::plan_swaps(&current, &target) {
            if self.send(&swap).await {
                sent += 1;
            }
        }

        if let Ok(after) = self.wm.list_monitors().await {
            debug!("Порядок мониторов после перестановки: {:?}", after);
        }

        sent
    }

    async fn send(&self, command: &WmCommand) -> bool {
        match self.wm.execute(command).await {
            Ok(()) => true,
            Err(e) => {
                error!("Не удалось выполнить {}: {}", command, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::testing::{FakeDisplayServer, FakeWindowManager};

    const TWO_OUTPUTS: &str = concat!(
        "Screen 0: minimum 8 x 8, current 1920 x 1080, maximum 32767 x 32767\n",
        "eDP-1 connected primary 1920x1080+0+0 (0x47) normal (normal left inverted right x axis y axis) 344mm x 194mm\n",
        "\tIdentifier: 0x0a\n",
        "\tEDID: \n",
        "\t\t00ffffffffffff00\n",
        "  1920x1080 (0x47) 138.700MHz +HSync -VSync *current +preferred\n",
        "HDMI-1 disconnected (normal left inverted right x axis y axis)\n",
        "\tIdentifier: 0x14\n",
    );

    fn no_lid() -> RunContext {
        RunContext::new("/nonexistent/lid/state")
    }

    #[tokio::test]
    async fn test_end_to_end_activate_and_remove() {
        let wm = FakeWindowManager::new()
            .with_monitor("M1", Some(10))
            .with_monitor("M2", Some(20));
        let display = FakeDisplayServer::new(TWO_OUTPUTS);
        let reconciler = Reconciler::new(&wm, &display, 9, "autorandr");
        let ctx = no_lid();

        let buckets = reconciler.compute_actions(&ctx).await;
        assert_eq!(buckets.get(Disposition::Activate)[0].wm_handle(), "M1");
        assert_eq!(buckets.get(Disposition::Deactivate)[0].wm_handle(), "M2");

        let outcome = reconciler.run(&ctx).await;
        assert_eq!(
            wm.executed(),
            vec![
                "bspc monitor M1 -n 1 -d 1/a 1/b 1/c 1/d 1/e 1/f 1/g 1/h 1/i",
                "bspc monitor M2 -r",
            ]
        );
        assert_eq!(outcome, Outcome::Applied { commands: 2 });
    }

    #[tokio::test]
    async fn test_reorder_swaps_into_left_to_right_order() {
        let topology = concat!(
            "DP-1 connected 1920x1080+1920+0\n\tIdentifier: 0x1\n",
            "DP-2 connected 1920x1080+0+0\n\tIdentifier: 0x2\n",
        );
        let wm = FakeWindowManager::new()
            .with_monitor("A", Some(1))
            .with_monitor("B", Some(2));
        let display = FakeDisplayServer::new(topology);
        let reconciler = Reconciler::new(&wm, &display, 9, "autorandr");

        let outcome = reconciler.run(&no_lid()).await;
        assert_eq!(wm.executed().last().map(String::as_str), Some("bspc monitor A -s B"));
        assert_eq!(outcome, Outcome::Applied { commands: 3 });
    }

    #[tokio::test]
    async fn test_reorder_skipped_when_already_ordered() {
        let topology = concat!(
            "DP-1 connected 1920x1080+1920+0\n\tIdentifier: 0x1\n",
            "DP-2 connected 1920x1080+0+0\n\tIdentifier: 0x2\n",
        );
        let wm = FakeWindowManager::new()
            .with_monitor("A", Some(1))
            .with_monitor("B", Some(2))
            .with_order(&["B", "A"]);
        let display = FakeDisplayServer::new(topology);
        let reconciler = Reconciler::new(&wm, &display, 9, "autorandr");

        reconciler.run(&no_lid()).await;
        assert_eq!(
            wm.executed(),
            vec![
                "bspc monitor B -n 1 -d 1/a 1/b 1/c 1/d 1/e",
                "bspc monitor A -n 2 -d 2/a 2/b 2/c 2/d",
            ]
        );
    }

    #[tokio::test]
    async fn test_mirrors_and_closed_lid() {
        let topology = concat!(
            "eDP-1 connected 1920x1080+0+0\n\tIdentifier: 0x1\n",
            "HDMI-1 connected 1280x720+1920+0\n\tIdentifier: 0x2\n",
            "DP-1 connected 2560x1440+1920+0\n\tIdentifier: 0x3\n",
        );
        let dir = tempfile::tempdir().unwrap();
        let lid_path = dir.path().join("state");
        std::fs::write(&lid_path, "state:      closed\n").unwrap();

        let wm = FakeWindowManager::new()
            .with_monitor("E", Some(1))
            .with_monitor("H", Some(2))
            .with_monitor("D", Some(3))
            .with_order(&["D", "E", "H"]);
        let display = FakeDisplayServer::new(topology);
        let reconciler = Reconciler::new(&wm, &display, 9, "autorandr");

        reconciler.run(&RunContext::new(&lid_path)).await;
        assert_eq!(
            wm.executed(),
            vec![
                "bspc monitor D -n 1 -d 1/a 1/b 1/c 1/d 1/e 1/f 1/g",
                "bspc monitor E -n 2 -d 2/a",
                "bspc monitor H -n 3 -d 3/a",
            ]
        );
    }

    #[tokio::test]
    async fn test_no_monitors_changes_nothing() {
        let wm = FakeWindowManager::unavailable();
        let display = FakeDisplayServer::new(TWO_OUTPUTS);
        let reconciler = Reconciler::new(&wm, &display, 9, "/nonexistent/autorandr");

        assert_eq!(reconciler.run(&no_lid()).await, Outcome::NoMonitors);
        assert!(wm.executed().is_empty());
    }

    #[tokio::test]
    async fn test_unmatched_outputs_never_reach_buckets() {
        let wm = FakeWindowManager::new().with_monitor("M1", Some(99));
        let display = FakeDisplayServer::new(TWO_OUTPUTS);
        let reconciler = Reconciler::new(&wm, &display, 9, "autorandr");

        let buckets = reconciler.compute_actions(&no_lid()).await;
        assert_eq!(buckets.total(), 0);
    }

    #[tokio::test]
    async fn test_set_remove_monitors() {
        let wm = FakeWindowManager::new().with_monitor("M1", Some(10));
        let display = FakeDisplayServer::new(TWO_OUTPUTS);
        let reconciler = Reconciler::new(&wm, &display, 9, "autorandr");

        let outcome = reconciler.set_remove_monitors(&no_lid(), true).await;
        assert_eq!(outcome, Outcome::Applied { commands: 2 });
        assert_eq!(
            wm.executed(),
            vec![
                "bspc config remove_disabled_monitors true",
                "bspc config remove_unplugged_monitors true",
            ]
        );
    }

    #[tokio::test]
    async fn test_enable_remove_monitors_refused_without_displays() {
        let wm = FakeWindowManager::new();
        let display = FakeDisplayServer::unavailable();
        let reconciler = Reconciler::new(&wm, &display, 9, "/nonexistent/autorandr");

        let outcome = reconciler.set_remove_monitors(&no_lid(), true).await;
        assert_eq!(outcome, Outcome::NoMonitors);
        assert!(wm.executed().is_empty());

        // выключение не требует мониторов
        let outcome = reconciler.set_remove_monitors(&no_lid(), false).await;
        assert_eq!(outcome, Outcome::Applied { commands: 2 });
    }
}
