//! Domain models for the QR Menu Platform

mod item;
mod menu;
mod organization;
mod qr_code;
mod schedule;
mod section;
mod subscription;
mod theme;
mod translation;
mod user;
mod venue;

pub use item::*;
pub use menu::*;
pub use organization::*;
pub use qr_code::*;
pub use schedule::*;
pub use section::*;
pub use subscription::*;
pub use theme::*;
pub use translation::*;
pub use user::*;
pub use venue::*;
