//! Navshell Shell - Headless shell runtime
//!
//! The driving side of the hexagon: the persistent shell that survives
//! across navigations, modeled as explicit state instead of a live
//! browser document.
//!
//! ## Key Components
//!
//! - [`HeadlessView`] - The content root, active sidebar link, scroll
//!   position, and requested full-document loads
//! - [`ScriptLedger`] - The ordered record of replayed scripts and loaded
//!   external sources
//! - [`MemoryHistory`] - A history stack with back/forward traversal
//! - [`LinkPolicy`] / [`Router`] - Which clicks are intercepted, and what
//!   startup and history pops resolve to
//! - [`Shell`] - The controller tying policy, router, and the navigate
//!   use case together

pub mod controller;
pub mod history;
pub mod router;
pub mod scripts;
pub mod view;

pub use controller::{ClickOutcome, Shell};
pub use history::MemoryHistory;
pub use router::{LinkAction, LinkPolicy, Router};
pub use scripts::ScriptLedger;
pub use view::HeadlessView;
