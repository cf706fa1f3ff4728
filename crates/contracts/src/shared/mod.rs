pub mod error;
pub mod list;

pub use error::{ContractError, ErrorEnvelope};
pub use list::{ListEnvelope, ListQuery};
