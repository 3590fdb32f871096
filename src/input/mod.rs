pub mod handler;
pub mod shortcuts;

pub use handler::handle_key;
pub use shortcuts::{Action, SHORTCUTS};
