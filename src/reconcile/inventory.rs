use crate::services::WindowManager;
use tracing::{debug, warn};

/// Соответствие «монитор bspwm -> RandR Identifier» в порядке опроса
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardwareInventory {
    entries: Vec<(String, String)>,
}

impl HardwareInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить запись. Если идентификатор уже занят другим монитором,
    /// побеждает последняя запись.
    pub fn insert(&mut self, handle: impl Into<String>, hardware_id: impl Into<String>) {
        let handle = handle.into();
        let hardware_id = hardware_id.into();

        if let Some(previous) = self
            .entries
            .iter()
            .find(|(h, id)| *id == hardware_id && *h != handle)
        {
            warn!(
                "Identifier {} одновременно у {} и {}, оставляем последний",
                hardware_id, previous.0, handle
            );
        }

        self.entries
            .retain(|(h, id)| *h != handle && *id != hardware_id);
        self.entries.push((handle, hardware_id));
    }

    /// Найти монитор bspwm по идентификатору оборудования
    pub fn handle_for(&self, hardware_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(_, id)| id == hardware_id)
            .map(|(handle, _)| handle.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: Into<String>, I: Into<String>> FromIterator<(H, I)> for HardwareInventory {
    fn from_iter<T: IntoIterator<Item = (H, I)>>(iter: T) -> Self {
        let mut inventory = HardwareInventory::new();
        for (handle, id) in iter {
            inventory.insert(handle, id);
        }
        inventory
    }
}

/// Опросить bspwm: список мониторов и randrId каждого.
///
/// Любая ошибка опроса даёт пустой (или неполный) результат, а не падение.
pub async fn read_inventory(wm: &dyn WindowManager) -> HardwareInventory {
    let mut inventory = HardwareInventory::new();

    let handles = match wm.list_monitors().await {
        Ok(handles) => handles,
        Err(e) => {
            warn!("Не удалось получить список мониторов bspwm: {}", e);
            return inventory;
        }
    };

    for handle in handles {
        match wm.describe_monitor(&handle).await {
            Ok(description) => match description.randr_id {
                Some(randr_id) => inventory.insert(handle, randr_id.to_string()),
                None => debug!("У монитора {} ({:?}) нет randrId", handle, description.name),
            },
            Err(e) => warn!("Не удалось получить описание монитора {}: {}", handle, e),
        }
    }

    debug!("read_inventory: {:?}", inventory);
    inventory
}
