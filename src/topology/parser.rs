use super::header::parse_header;
use super::sections::split_sections;
use crate::model::MonitorRecord;
use std::iter::Peekable;
use std::str::Lines;
use tracing::debug;

const IDENTIFIER_PREFIX: &str = "Identifier:";
const EDID_PREFIX: &str = "EDID:";

/// Курсор по строкам одной секции
struct LineCursor<'a> {
    lines: Peekable<Lines<'a>>,
}

impl<'a> LineCursor<'a> {
    fn new(section: &'a str) -> Self {
        Self {
            lines: section.lines().peekable(),
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        self.lines.next()
    }

    /// Забрать все следующие строки, начинающиеся с `prefix`
    fn take_block(&mut self, prefix: &str) -> Vec<&'a str> {
        let mut block = Vec::new();
        while let Some(line) = self.lines.next_if(|line| line.starts_with(prefix)) {
            block.push(line);
        }
        block
    }
}

fn tab_depth(line: &str) -> usize {
    line.chars().take_while(|c| *c == '\t').count()
}

/// Разобрать весь вывод `xrandr --verbose`.
///
/// В результат попадают только секции, из которых удалось извлечь Identifier:
/// без него выход не сопоставить с монитором bspwm.
pub fn parse_topology(text: &str) -> Vec<MonitorRecord> {
    let records: Vec<MonitorRecord> = split_sections(text)
        .into_iter()
        .filter_map(parse_section)
        .collect();

    debug!("parse_topology: найдено {} выходов с Identifier", records.len());
    records
}

/// Разобрать одну секцию; `None`, если у выхода нет Identifier
pub fn parse_section(section: &str) -> Option<MonitorRecord> {
    let mut cursor = LineCursor::new(section);

    let header_line = cursor.next_line()?;
    if header_line.starts_with(char::is_whitespace) || header_line.is_empty() {
        debug!("parse_section: секция без заголовка пропущена");
        return None;
    }

    let header = parse_header(header_line);
    let mut record = MonitorRecord::new(header.name, header.status).with_primary(header.primary);
    record.geometry = header.geometry;

    while let Some(line) = cursor.next_line() {
        let depth = tab_depth(line);
        if depth == 0 {
            // режимы (отступ пробелами) и пустые строки не интересны
            continue;
        }

        let detail = line.trim_start();
        if let Some(rest) = detail.strip_prefix(IDENTIFIER_PREFIX) {
            if record.hardware_id.is_some() {
                debug!("parse_section: повторный Identifier у {} проигнорирован", record.name);
                continue;
            }
            record.hardware_id = parse_identifier(rest);
        } else if let Some(rest) = detail.strip_prefix(EDID_PREFIX) {
            let continuation = "\t".repeat(depth + 1);
            let mut edid = rest.trim().to_string();
            for edid_line in cursor.take_block(&continuation) {
                edid.push_str(edid_line.trim());
            }
            record.edid = Some(edid);
        }
    }

    match record.hardware_id {
        Some(_) => {
            debug!(
                "parse_section: {} (EDID: {} символов)",
                record,
                record.edid.as_ref().map_or(0, String::len)
            );
            Some(record)
        }
        None => {
            debug!("parse_section: у {} нет Identifier, пропускаем", record.name);
            None
        }
    }
}

/// `0x42` -> `"66"`
fn parse_identifier(text: &str) -> Option<String> {
    let token = text.split_whitespace().last()?;
    let hex = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    match u64::from_str_radix(hex, 16) {
        Ok(value) => Some(value.to_string()),
        Err(e) => {
            debug!("parse_identifier: не удалось разобрать '{}': {}", token, e);
            None
        }
    }
}
