mod command;
mod engine;
mod event;
mod journal;
mod rates;

pub use command::*;
pub use engine::*;
pub use event::*;
pub use journal::*;
pub use rates::*;
