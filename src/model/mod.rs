//! DTOs shared by the server API and the web client.

pub mod api;
pub mod lecture;
pub mod unit;
