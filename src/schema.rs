//! Wizard outline ingestion.
//!
//! An outline carries step identity and labels only; content is bound by
//! sub-step name when the outline is assembled into a [`Hierarchy`]. This
//! keeps wizard structure declarable as plain JSON while content stays in
//! code.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::HierarchyError;
use crate::hierarchy::{Hierarchy, MainStep, StepContent, SubStep};

/// Declarative wizard structure: main steps and their sub steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardOutline {
    pub steps: Vec<MainOutline>,
}

/// One main step in an outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainOutline {
    /// Unique main step identifier
    pub name: String,
    /// Display text for the main-step label row
    pub label: String,
    /// A single sub step or an ordered sequence of them
    pub subs: SubOutlines,
}

/// A main step's children may be written as one sub step or a sequence.
/// The distinction is collapsed at ingestion; everything downstream sees a
/// plain ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubOutlines {
    One(SubOutline),
    Many(Vec<SubOutline>),
}

impl SubOutlines {
    fn into_vec(self) -> Vec<SubOutline> {
        match self {
            SubOutlines::One(sub) => vec![sub],
            SubOutlines::Many(subs) => subs,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubOutline> {
        match self {
            SubOutlines::One(sub) => std::slice::from_ref(sub).iter(),
            SubOutlines::Many(subs) => subs.iter(),
        }
    }
}

/// One sub step in an outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubOutline {
    /// Identifier, unique across the whole wizard
    pub name: String,
    /// Display text for the sub-step label row
    pub label: String,
}

impl WizardOutline {
    /// Parse an outline from JSON.
    pub fn from_json(raw: &str) -> Result<Self, HierarchyError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Bind content to every sub step and build the validated hierarchy.
    ///
    /// Every sub-step name in the outline must have an entry in the
    /// registry; a missing binding is a fatal configuration error, caught
    /// here rather than at first render.
    pub fn into_hierarchy(self, mut registry: ContentRegistry) -> Result<Hierarchy, HierarchyError> {
        // Binding consumes registry entries, so a repeated sub name would
        // otherwise read as a missing binding. Catch it up front to report
        // the real problem.
        let mut seen = HashSet::new();
        let mut mains = Vec::with_capacity(self.steps.len());
        for main in self.steps {
            let mut subs = Vec::new();
            for outline in main.subs.into_vec() {
                if !seen.insert(outline.name.clone()) {
                    return Err(HierarchyError::DuplicateSubStep(outline.name));
                }
                let content = registry
                    .take(&outline.name)
                    .ok_or_else(|| HierarchyError::MissingContent(outline.name.clone()))?;
                subs.push(SubStep::from_boxed(outline.name, outline.label, content));
            }
            mains.push(MainStep::new(main.name, main.label, subs));
        }
        Hierarchy::new(mains)
    }
}

/// Step content keyed by sub-step name, consumed while assembling a
/// hierarchy from an outline.
#[derive(Default)]
pub struct ContentRegistry {
    entries: HashMap<String, Box<dyn StepContent>>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register content for a sub-step name, replacing any previous entry.
    pub fn register(
        mut self,
        name: impl Into<String>,
        content: impl StepContent + 'static,
    ) -> Self {
        self.entries.insert(name.into(), Box::new(content));
        self
    }

    fn take(&mut self, name: &str) -> Option<Box<dyn StepContent>> {
        self.entries.remove(name)
    }
}
