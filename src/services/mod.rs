pub mod forward;
pub mod heartbeat;
pub mod relay;
pub mod relay_types;
