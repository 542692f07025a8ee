mod api;
mod event;
mod game;
mod letter;

pub use api::*;
pub use event::*;
pub use game::*;
pub use letter::*;
