//! Stepdeck - two-level step wizard navigation for terminal UIs.
//!
//! A wizard is an ordered sequence of main steps, each holding one or more
//! sub steps. The core tracks the active `(main, sub)` position, validates
//! step identity when the hierarchy is built, and signals completion when
//! navigation advances past the final step. The [`ui`] module renders
//! label rows and the active step's content with ratatui and maps key and
//! mouse input onto navigation operations.

pub mod error;
pub mod hierarchy;
pub mod logging;
pub mod nav;
pub mod schema;
pub mod ui;

pub use error::HierarchyError;
pub use hierarchy::{Hierarchy, MainStep, StepContent, SubStep};
pub use nav::{NavHandle, Navigator};
pub use schema::{ContentRegistry, WizardOutline};
pub use ui::WizardScreen;
