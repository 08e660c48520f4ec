//! Database repository layer.
//!
//! Repositories perform the CRUD operations for each entity through SeaORM. They are generic
//! over `ConnectionTrait` so the same repository runs against the connection pool or inside a
//! transaction opened by the service layer.

pub mod lecture;
pub mod unit;

#[cfg(test)]
mod test;
