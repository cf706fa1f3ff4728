//! Wire contracts of the sales-management REST API.
//!
//! Read DTOs mirror the backend JSON exactly (snake_case, nullable optional
//! fields). Create/update payloads are the shapes sent with POST/PUT.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
