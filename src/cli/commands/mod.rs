pub mod advise;
pub mod config;
pub mod lint;
pub mod new_agent;
pub mod ux;
