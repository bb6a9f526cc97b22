//! Use cases (application services)
//!
//! Use cases orchestrate domain entities through port interfaces. They own
//! no I/O themselves; every external effect goes through an injected
//! `Arc<dyn Port>`.

pub mod auth_gate;
pub mod navigate;

pub use auth_gate::{AuthGateUseCase, LoginOutcome};
pub use navigate::NavigateUseCase;
