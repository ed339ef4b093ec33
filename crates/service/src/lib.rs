//! Data-access layer for the workshop services.
//! - One module of CRUD operations per entity kind; the exclusive mutation
//!   path for that entity's container.
//! - List queries are composed dynamically from optional filters with bound
//!   parameters.
//! - Container provisioning and sample seeding live behind the health check.

pub mod accessory_service;
pub mod activity_service;
pub mod connection;
pub mod errors;
pub mod pet_service;
pub mod provision;
pub mod seed;

#[cfg(test)]
pub mod test_support;
