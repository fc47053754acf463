//! Types shared between the order form and the intake client.

pub mod domain;
pub mod error;
pub mod protocol;
