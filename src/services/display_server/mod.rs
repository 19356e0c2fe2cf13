mod xrandr;
mod r#trait;

pub use self::r#trait::{create_display_server, DisplayServer};
