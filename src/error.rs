//! Errors raised while assembling a step hierarchy.

use thiserror::Error;

/// Fatal configuration errors detected when a hierarchy is built.
///
/// None of these are recoverable at runtime: they indicate a mistake by the
/// wizard's author and surface before any navigation or rendering happens.
#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("wizard has no main steps")]
    Empty,

    #[error("duplicate main step name '{0}'")]
    DuplicateMainStep(String),

    #[error("duplicate sub step name '{0}'")]
    DuplicateSubStep(String),

    #[error("main step '{0}' has no sub steps")]
    EmptySubSteps(String),

    #[error("no content registered for sub step '{0}'")]
    MissingContent(String),

    #[error("failed to parse wizard outline: {0}")]
    Outline(#[from] serde_json::Error),
}
