//! WindowManager service: responsibility and boundaries
//!
//! This module and its submodules only talk to bspwm through `bspc`: listing
//! monitors, describing one monitor and running mutating commands. Deciding
//! which commands to run belongs to `reconcile`.

mod bspc;
mod dry_run;
mod r#trait;

pub use self::r#trait::{create_window_manager, MonitorDescription, WindowManager};
