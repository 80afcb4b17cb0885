//! Step hierarchy descriptor and structural validation.
//!
//! A wizard is an ordered sequence of [`MainStep`]s, each holding one or
//! more [`SubStep`]s. The hierarchy is immutable for the lifetime of a
//! navigation session; replacing it means building a new [`Hierarchy`],
//! which re-runs validation and resets the position.

use std::collections::HashSet;

use crossterm::event::KeyCode;
use ratatui::{layout::Rect, Frame};

use crate::error::HierarchyError;
use crate::nav::NavHandle;

/// Renderable body of a sub step.
///
/// Implementations receive navigation capabilities through [`NavHandle`],
/// which exposes forward and backward movement and nothing else; content
/// cannot assign the wizard position directly.
pub trait StepContent {
    /// Draw the step body into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Handle a key event, returns true if the key was consumed.
    ///
    /// Content sees keys before the wizard's own bindings, so a form can
    /// capture character input without triggering navigation.
    fn handle_key(&mut self, _key: KeyCode, _nav: &mut NavHandle<'_>) -> bool {
        false
    }
}

/// A stage nested within a main step; holds the actual content for that
/// stage.
pub struct SubStep {
    /// Identifier, unique across every sub step in the wizard
    name: String,
    /// Display text for the sub-step label row
    label: String,
    pub(crate) content: Box<dyn StepContent>,
}

impl SubStep {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        content: impl StepContent + 'static,
    ) -> Self {
        Self::from_boxed(name, label, Box::new(content))
    }

    pub(crate) fn from_boxed(
        name: impl Into<String>,
        label: impl Into<String>,
        content: Box<dyn StepContent>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            content,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Top-level stage in the overall flow, holding one or more sub steps.
pub struct MainStep {
    /// Identifier, unique among main steps
    name: String,
    /// Display text for the main-step label row
    label: String,
    subs: Vec<SubStep>,
}

impl MainStep {
    /// Create a main step with an ordered sequence of sub steps.
    pub fn new(name: impl Into<String>, label: impl Into<String>, subs: Vec<SubStep>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            subs,
        }
    }

    /// Create a main step holding a single sub step.
    ///
    /// The sub-label row is suppressed when rendering these; the
    /// single/sequence distinction exists only at construction and never
    /// branches inside the navigation machinery.
    pub fn single(name: impl Into<String>, label: impl Into<String>, sub: SubStep) -> Self {
        Self::new(name, label, vec![sub])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn subs(&self) -> &[SubStep] {
        &self.subs
    }
}

/// A validated two-level step tree.
///
/// Construction is the only validation point: a `Hierarchy` value always
/// satisfies the structural invariants (unique main-step names, globally
/// unique sub-step names, no empty levels), so navigation never re-checks
/// them per transition.
pub struct Hierarchy {
    mains: Vec<MainStep>,
}

impl Hierarchy {
    /// Validate the supplied steps and take ownership of them.
    pub fn new(mains: Vec<MainStep>) -> Result<Self, HierarchyError> {
        validate(&mains)?;
        Ok(Self { mains })
    }

    pub fn mains(&self) -> &[MainStep] {
        &self.mains
    }

    pub fn main(&self, index: usize) -> &MainStep {
        &self.mains[index]
    }

    pub(crate) fn sub_mut(&mut self, main: usize, sub: usize) -> &mut SubStep {
        &mut self.mains[main].subs[sub]
    }
}

/// Check the structural invariants over the full tree.
///
/// Runs once per hierarchy instance; names cannot change afterwards, so
/// navigation state changes never trigger a re-check.
fn validate(mains: &[MainStep]) -> Result<(), HierarchyError> {
    if mains.is_empty() {
        return Err(HierarchyError::Empty);
    }

    let mut main_names = HashSet::new();
    for main in mains {
        if !main_names.insert(main.name.as_str()) {
            return Err(HierarchyError::DuplicateMainStep(main.name.clone()));
        }
        if main.subs.is_empty() {
            return Err(HierarchyError::EmptySubSteps(main.name.clone()));
        }
    }

    // Sub-step names are unique across the whole wizard, not per parent.
    let mut sub_names = HashSet::new();
    for main in mains {
        for sub in &main.subs {
            if !sub_names.insert(sub.name.as_str()) {
                return Err(HierarchyError::DuplicateSubStep(sub.name.clone()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;

    impl StepContent for Blank {
        fn render(&mut self, _frame: &mut Frame, _area: Rect) {}
    }

    fn sub(name: &str) -> SubStep {
        SubStep::new(name, name.to_uppercase(), Blank)
    }

    #[test]
    fn test_valid_hierarchy_construction() {
        let hierarchy = Hierarchy::new(vec![
            MainStep::new("account", "Account", vec![sub("email"), sub("password")]),
            MainStep::single("confirm", "Confirm", sub("review")),
        ])
        .unwrap();

        assert_eq!(hierarchy.mains().len(), 2);
        assert_eq!(hierarchy.main(0).name(), "account");
        assert_eq!(hierarchy.main(0).subs().len(), 2);
        assert_eq!(hierarchy.main(1).subs()[0].label(), "REVIEW");
    }

    #[test]
    fn test_duplicate_main_step_rejected() {
        let result = Hierarchy::new(vec![
            MainStep::single("account", "Account", sub("email")),
            MainStep::single("account", "Account again", sub("review")),
        ]);

        match result {
            Err(HierarchyError::DuplicateMainStep(name)) => assert_eq!(name, "account"),
            other => panic!("expected DuplicateMainStep, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_duplicate_sub_step_rejected_across_mains() {
        // The clash is across different parents; uniqueness is global.
        let result = Hierarchy::new(vec![
            MainStep::new("account", "Account", vec![sub("email"), sub("password")]),
            MainStep::single("confirm", "Confirm", sub("email")),
        ]);

        match result {
            Err(HierarchyError::DuplicateSubStep(name)) => assert_eq!(name, "email"),
            other => panic!("expected DuplicateSubStep, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_empty_hierarchy_rejected() {
        assert!(matches!(
            Hierarchy::new(Vec::new()),
            Err(HierarchyError::Empty)
        ));
    }

    #[test]
    fn test_main_step_without_subs_rejected() {
        let result = Hierarchy::new(vec![MainStep::new("account", "Account", Vec::new())]);

        match result {
            Err(HierarchyError::EmptySubSteps(name)) => assert_eq!(name, "account"),
            other => panic!("expected EmptySubSteps, got {:?}", other.err()),
        }
    }
}
