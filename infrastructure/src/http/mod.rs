//! REST adapter for the job portal

mod envelope;
mod gateway;

pub use gateway::HttpPortalGateway;
