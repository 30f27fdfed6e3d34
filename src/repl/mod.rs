//! Interactive shell presentation
//!
//! Renders the session snapshot and routes commands to the controller.
//! Presentation only: every rule about selection, locking, generation, and
//! explanation lives in [`crate::session`].

mod session;

pub use session::PlannerRepl;
