// License: MIT

pub mod dbus;
pub mod ticker;
