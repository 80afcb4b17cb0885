pub mod content;
pub mod labels;
pub mod terminal_guard;
pub mod wizard;

pub use wizard::{WizardResult, WizardScreen};
