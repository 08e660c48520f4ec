pub mod helper;
pub mod lecture;
pub mod unit;

pub use lecture::{create_lecture, get_lecture};
pub use unit::{create_unit, delete_unit, get_unit, update_unit};
