pub mod cli;
pub mod error;
pub mod model;
pub mod protocol;
pub mod services;

pub use error::RelayError;
pub use model::config::{Credentials, RelayConfig};
pub use services::relay::relay;
pub use services::relay_types::RelayReport;
