mod menu;
mod state;

pub use state::{AppState, Entry, InputAction, Scene};
