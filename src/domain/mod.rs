mod command;
mod engine;
mod error;
mod event;
mod journal;
mod policy;
mod state;

pub use command::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use journal::*;
pub use policy::*;
pub use state::*;
