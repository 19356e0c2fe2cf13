use crate::model::{ConnectionStatus, Geometry};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Имя псевдо-выхода, описывающего весь экран X
const SCREEN_TOKEN: &str = "Screen";

static STATUS_GEOMETRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<status>disconnected|unknown connection|connected)(?:\s*(?P<primary>primary)?\s*(?P<width>[0-9]+)x(?P<height>[0-9]+)\+(?P<x>-?[0-9]+)\+(?P<y>-?[0-9]+))?",
    )
    .expect("статическое регулярное выражение корректно")
});

/// Результат разбора строки-заголовка секции
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub status: ConnectionStatus,
    pub geometry: Option<Geometry>,
    pub primary: bool,
}

/// Разобрать заголовок вида `HDMI-1 connected primary 1920x1080+0+0 ...`
pub fn parse_header(line: &str) -> Header {
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (line, ""),
    };

    if name != SCREEN_TOKEN {
        if let Some(header) = parse_status_and_geometry(name, rest) {
            return header;
        }
    }

    Header {
        name: name.to_string(),
        status: ConnectionStatus::from_prefix(rest),
        geometry: None,
        primary: false,
    }
}

fn parse_status_and_geometry(name: &str, rest: &str) -> Option<Header> {
    let caps = STATUS_GEOMETRY_RE.captures(rest)?;
    debug!("parse_header: {} -> {:?}", name, caps.get(0).map(|m| m.as_str()));

    // Без суффикса геометрии берём только статус
    let geometry = match (
        caps.name("width"),
        caps.name("height"),
        caps.name("x"),
        caps.name("y"),
    ) {
        (Some(w), Some(h), Some(x), Some(y)) => Some(Geometry::new(
            w.as_str().parse().ok()?,
            h.as_str().parse().ok()?,
            x.as_str().parse().ok()?,
            y.as_str().parse().ok()?,
        )),
        _ => None,
    };

    let status = caps
        .name("status")
        .map(|m| ConnectionStatus::from_prefix(m.as_str()))
        .unwrap_or(ConnectionStatus::UnknownConnection);

    Some(Header {
        name: name.to_string(),
        status,
        primary: geometry.is_some() && caps.name("primary").is_some(),
        geometry,
    })
}
