//! Разбор текстового вывода `xrandr --verbose`.
//!
//! Модуль чистый: он ничего не запускает, только превращает текст в
//! `MonitorRecord`. Запуск самой утилиты живёт в `services::display_server`.

mod header;
mod parser;
mod sections;

pub use parser::parse_topology;
