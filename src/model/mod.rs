pub mod actions;
pub mod command;
pub mod monitor;

pub use actions::{ActionBuckets, Disposition};
pub use command::WmCommand;
pub use monitor::{ConnectionStatus, Geometry, MonitorRecord};
