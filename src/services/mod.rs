pub mod autorandr;
pub mod display_server;
pub mod lid;
pub mod process;
pub mod window_manager;

pub use display_server::{create_display_server, DisplayServer};
pub use lid::LidState;
pub use window_manager::{create_window_manager, MonitorDescription, WindowManager};
