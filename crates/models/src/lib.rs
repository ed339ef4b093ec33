pub mod accessory;
pub mod activity;
pub mod errors;
pub mod pet;
mod serde_util;
mod validate;
