mod account;
mod boot;
pub mod mock;
pub mod orchestrator;

pub use account::*;
pub use boot::*;
