//! State Management
//!
//! Session state, tab selection and the reactive global state.

pub mod global;
pub mod session;
pub mod tabs;

pub use global::{provide_global_state, use_global_state, GlobalState};
