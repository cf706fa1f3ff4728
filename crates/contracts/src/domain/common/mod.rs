//! Общие части DTO справочников

pub mod audit;

pub use audit::{default_active, AuditDto};
