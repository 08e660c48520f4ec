//! Request authentication: bearer token verification and permission extractors.

pub mod auth;
pub mod token;

#[cfg(test)]
mod test;
