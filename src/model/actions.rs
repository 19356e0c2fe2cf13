use super::monitor::MonitorRecord;
use std::fmt;

/// Что делать с монитором в текущем запуске
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Получает полноценный набор рабочих столов
    Activate,
    /// Остаётся с одним рабочим столом (закрытая крышка, зеркало)
    RetainPassive,
    /// Удаляется из bspwm
    Deactivate,
}

impl Disposition {
    pub const ALL: [Disposition; 3] = [
        Disposition::Activate,
        Disposition::RetainPassive,
        Disposition::Deactivate,
    ];
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Disposition::Activate => "activate",
            Disposition::RetainPassive => "retain-passive",
            Disposition::Deactivate => "deactivate",
        };
        f.write_str(name)
    }
}

/// Три упорядоченные корзины мониторов, адресуемые через `Disposition`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBuckets {
    activate: Vec<MonitorRecord>,
    retain_passive: Vec<MonitorRecord>,
    deactivate: Vec<MonitorRecord>,
}

impl ActionBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, disposition: Disposition, record: MonitorRecord) {
        self.bucket_mut(disposition).push(record);
    }

    pub fn get(&self, disposition: Disposition) -> &[MonitorRecord] {
        match disposition {
            Disposition::Activate => &self.activate,
            Disposition::RetainPassive => &self.retain_passive,
            Disposition::Deactivate => &self.deactivate,
        }
    }

    pub fn take(&mut self, disposition: Disposition) -> Vec<MonitorRecord> {
        std::mem::take(self.bucket_mut(disposition))
    }

    pub fn len(&self, disposition: Disposition) -> usize {
        self.get(disposition).len()
    }

    pub fn is_empty(&self, disposition: Disposition) -> bool {
        self.get(disposition).is_empty()
    }

    pub fn total(&self) -> usize {
        Disposition::ALL.iter().map(|d| self.len(*d)).sum()
    }

    /// Найти корзину, в которой лежит монитор с данным именем
    #[allow(dead_code)]
    pub fn disposition_of(&self, name: &str) -> Option<Disposition> {
        Disposition::ALL
            .into_iter()
            .find(|d| self.get(*d).iter().any(|m| m.name == name))
    }

    fn bucket_mut(&mut self, disposition: Disposition) -> &mut Vec<MonitorRecord> {
        match disposition {
            Disposition::Activate => &mut self.activate,
            Disposition::RetainPassive => &mut self.retain_passive,
            Disposition::Deactivate => &mut self.deactivate,
        }
    }
}

impl fmt::Display for ActionBuckets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for disposition in Disposition::ALL {
            writeln!(f, "\t{}:", disposition)?;
            for record in self.get(disposition) {
                writeln!(f, "\t\t{}", record)?;
            }
        }
        Ok(())
    }
}
