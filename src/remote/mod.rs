//! Client for the hosted vendor collection (`GET/POST /crud`,
//! `PUT/DELETE /crud/{id}`).

mod client;
mod error;

pub use client::{HttpVendorStore, VendorStore};
pub use error::TransportError;
