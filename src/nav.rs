//! Navigation state machine for the two-level step hierarchy.
//!
//! [`Navigator`] owns the active `(main, sub)` position and is the only
//! thing that mutates it. Transitions are synchronous and atomic over the
//! pair: a call either applies both index updates consistently or leaves
//! the position untouched. The navigator snapshots the hierarchy's shape
//! (step names and sub counts) at construction, so transitions never touch
//! step content and never re-run validation.

use crate::hierarchy::Hierarchy;

/// Shape of one main step as the navigator tracks it.
struct MainShape {
    name: String,
    subs: Vec<String>,
}

/// Tracks and mutates the active wizard position.
pub struct Navigator {
    shape: Vec<MainShape>,
    active_main: usize,
    active_sub: usize,
    on_completed: Option<Box<dyn FnMut()>>,
}

impl Navigator {
    /// Create a navigator positioned at the first sub step of the first
    /// main step.
    pub fn new(hierarchy: &Hierarchy) -> Self {
        let shape = hierarchy
            .mains()
            .iter()
            .map(|main| MainShape {
                name: main.name().to_string(),
                subs: main.subs().iter().map(|s| s.name().to_string()).collect(),
            })
            .collect();

        Self {
            shape,
            active_main: 0,
            active_sub: 0,
            on_completed: None,
        }
    }

    /// Register the completion callback.
    ///
    /// The callback fires on every [`go_next`](Self::go_next) invoked while
    /// the position is already at the last sub step of the last main step
    /// (level-triggered). Hosts wanting a one-shot signal can latch inside
    /// the callback.
    pub fn on_completed(&mut self, callback: impl FnMut() + 'static) {
        self.on_completed = Some(Box::new(callback));
    }

    pub(crate) fn take_on_completed(&mut self) -> Option<Box<dyn FnMut()>> {
        self.on_completed.take()
    }

    pub(crate) fn set_on_completed_boxed(&mut self, callback: Option<Box<dyn FnMut()>>) {
        self.on_completed = callback;
    }

    /// The active `(main, sub)` index pair.
    pub fn position(&self) -> (usize, usize) {
        (self.active_main, self.active_sub)
    }

    pub fn active_main(&self) -> usize {
        self.active_main
    }

    pub fn active_sub(&self) -> usize {
        self.active_sub
    }

    pub fn main_count(&self) -> usize {
        self.shape.len()
    }

    /// Number of sub steps in the active main step.
    pub fn sub_count(&self) -> usize {
        self.shape[self.active_main].subs.len()
    }

    /// Name of the active main step.
    pub fn current_main_name(&self) -> &str {
        &self.shape[self.active_main].name
    }

    /// Names of the active main step's sub steps, in order.
    pub fn current_sub_names(&self) -> &[String] {
        &self.shape[self.active_main].subs
    }

    /// Name of the active sub step.
    pub fn current_sub_name(&self) -> &str {
        &self.shape[self.active_main].subs[self.active_sub]
    }

    /// Whether the position is at the last sub step of the last main step.
    ///
    /// Terminal only with respect to forward completion signaling;
    /// [`go_previous`](Self::go_previous) remains valid from here.
    pub fn is_terminal(&self) -> bool {
        self.active_main == self.shape.len() - 1 && self.active_sub == self.sub_count() - 1
    }

    /// Advance one position in depth-first order: sub steps of the current
    /// main step first, then the next main step starting at its first sub
    /// step. At the terminal position the position is unchanged and the
    /// completion callback fires.
    pub fn go_next(&mut self) {
        let was_terminal = self.is_terminal();

        if self.active_sub + 1 < self.sub_count() {
            self.active_sub += 1;
        } else if self.active_main + 1 < self.shape.len() {
            self.active_main += 1;
            self.active_sub = 0;
        }

        if was_terminal {
            tracing::debug!("advance past final step");
            if let Some(callback) = self.on_completed.as_mut() {
                callback();
            }
        } else {
            tracing::debug!(main = self.active_main, sub = self.active_sub, "advanced");
        }
    }

    /// Retreat one position, mirroring [`go_next`](Self::go_next): previous
    /// sub step, else the *last* sub step of the previous main step. A
    /// no-op at the first sub step of the first main step. Never fires the
    /// completion callback.
    pub fn go_previous(&mut self) {
        if self.active_sub > 0 {
            self.active_sub -= 1;
        } else if self.active_main > 0 {
            self.active_main -= 1;
            self.active_sub = self.sub_count() - 1;
        } else {
            return;
        }
        tracing::debug!(main = self.active_main, sub = self.active_sub, "retreated");
    }

    /// Jump to the main step with the given name, entering it at its first
    /// sub step. An unknown name leaves the position unchanged and returns
    /// false.
    pub fn jump_to_main(&mut self, name: &str) -> bool {
        match self.shape.iter().position(|m| m.name == name) {
            Some(index) => {
                self.active_main = index;
                self.active_sub = 0;
                tracing::debug!(step = name, main = index, "jumped to main step");
                true
            }
            None => {
                tracing::debug!(step = name, "jump to unknown main step ignored");
                false
            }
        }
    }

    /// Jump to a sub step by name within the active main step only. Names
    /// of sub steps under other main steps are not considered. An unknown
    /// name leaves the position unchanged and returns false.
    pub fn jump_to_sub(&mut self, name: &str) -> bool {
        match self.shape[self.active_main]
            .subs
            .iter()
            .position(|s| s == name)
        {
            Some(index) => {
                self.active_sub = index;
                tracing::debug!(step = name, sub = index, "jumped to sub step");
                true
            }
            None => {
                tracing::debug!(step = name, "jump to unknown sub step ignored");
                false
            }
        }
    }

    /// Borrow the forward/backward capabilities handed to step content.
    pub fn handle(&mut self) -> NavHandle<'_> {
        NavHandle { nav: self }
    }
}

/// Navigation capabilities injected into step content: forward and backward
/// movement only, no direct position assignment and no jumps.
pub struct NavHandle<'a> {
    nav: &'a mut Navigator,
}

impl NavHandle<'_> {
    pub fn go_next(&mut self) {
        self.nav.go_next();
    }

    pub fn go_previous(&mut self) {
        self.nav.go_previous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{MainStep, StepContent, SubStep};
    use ratatui::{layout::Rect, Frame};
    use std::cell::Cell;
    use std::rc::Rc;

    struct Blank;

    impl StepContent for Blank {
        fn render(&mut self, _frame: &mut Frame, _area: Rect) {}
    }

    fn sub(name: &str) -> SubStep {
        SubStep::new(name, name.to_uppercase(), Blank)
    }

    /// account [email, password] > confirm [review]
    fn registration_hierarchy() -> Hierarchy {
        Hierarchy::new(vec![
            MainStep::new("account", "Account", vec![sub("email"), sub("password")]),
            MainStep::single("confirm", "Confirm", sub("review")),
        ])
        .unwrap()
    }

    /// Three mains with sub counts 2, 3, 1.
    fn wide_hierarchy() -> Hierarchy {
        Hierarchy::new(vec![
            MainStep::new("one", "One", vec![sub("a"), sub("b")]),
            MainStep::new("two", "Two", vec![sub("c"), sub("d"), sub("e")]),
            MainStep::single("three", "Three", sub("f")),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_position_is_origin() {
        let nav = Navigator::new(&registration_hierarchy());
        assert_eq!(nav.position(), (0, 0));
        assert_eq!(nav.current_main_name(), "account");
        assert_eq!(nav.current_sub_name(), "email");
    }

    #[test]
    fn test_go_next_walks_depth_first() {
        let mut nav = Navigator::new(&registration_hierarchy());

        nav.go_next();
        assert_eq!(nav.position(), (0, 1));

        nav.go_next();
        assert_eq!(nav.position(), (1, 0));
        assert_eq!(nav.current_main_name(), "confirm");
    }

    #[test]
    fn test_go_next_at_terminal_holds_position() {
        let mut nav = Navigator::new(&registration_hierarchy());
        nav.go_next();
        nav.go_next();
        assert!(nav.is_terminal());

        nav.go_next();
        assert_eq!(nav.position(), (1, 0));
    }

    #[test]
    fn test_completion_fires_on_every_call_at_terminal() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);

        let mut nav = Navigator::new(&registration_hierarchy());
        nav.on_completed(move || counter.set(counter.get() + 1));

        // Two advances reach the terminal position without firing.
        nav.go_next();
        nav.go_next();
        assert_eq!(fired.get(), 0);

        // Every further advance fires.
        nav.go_next();
        assert_eq!(fired.get(), 1);
        nav.go_next();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_advance_count_to_terminal_is_total_subs_minus_one() {
        let hierarchy = wide_hierarchy();
        let total_subs: usize = hierarchy.mains().iter().map(|m| m.subs().len()).sum();
        let mut nav = Navigator::new(&hierarchy);

        for step in 0..total_subs - 1 {
            assert!(!nav.is_terminal(), "terminal too early at advance {step}");
            nav.go_next();
        }
        assert!(nav.is_terminal());
        assert_eq!(nav.position(), (2, 0));
    }

    #[test]
    fn test_go_previous_inverts_go_next_from_any_position() {
        let hierarchy = wide_hierarchy();
        let mut nav = Navigator::new(&hierarchy);

        // Walk every non-terminal position and check next-then-previous
        // returns to it.
        loop {
            let before = nav.position();
            if nav.is_terminal() {
                break;
            }
            nav.go_next();
            nav.go_previous();
            assert_eq!(nav.position(), before);
            nav.go_next();
        }
    }

    #[test]
    fn test_go_previous_at_origin_is_noop() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);

        let mut nav = Navigator::new(&registration_hierarchy());
        nav.on_completed(move || counter.set(counter.get() + 1));

        nav.go_previous();
        assert_eq!(nav.position(), (0, 0));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_go_previous_enters_last_sub_of_previous_main() {
        let mut nav = Navigator::new(&wide_hierarchy());
        nav.jump_to_main("three");
        assert_eq!(nav.position(), (2, 0));

        nav.go_previous();
        // "two" has three sub steps; retreat lands on the last one.
        assert_eq!(nav.position(), (1, 2));
        assert_eq!(nav.current_sub_name(), "e");
    }

    #[test]
    fn test_jump_to_main_resets_sub_index() {
        let mut nav = Navigator::new(&registration_hierarchy());
        nav.go_next();
        assert_eq!(nav.position(), (0, 1));

        // Jumping to the current main step still resets the sub index.
        assert!(nav.jump_to_main("account"));
        assert_eq!(nav.position(), (0, 0));
    }

    #[test]
    fn test_jump_to_unknown_main_is_noop() {
        let mut nav = Navigator::new(&registration_hierarchy());
        nav.go_next();

        assert!(!nav.jump_to_main("billing"));
        assert_eq!(nav.position(), (0, 1));
    }

    #[test]
    fn test_jump_to_sub_scoped_to_active_main() {
        let mut nav = Navigator::new(&registration_hierarchy());
        nav.jump_to_main("confirm");

        // "password" exists, but under a different main step.
        assert!(!nav.jump_to_sub("password"));
        assert_eq!(nav.position(), (1, 0));

        nav.jump_to_main("account");
        assert!(nav.jump_to_sub("password"));
        assert_eq!(nav.position(), (0, 1));
    }

    #[test]
    fn test_registration_scenario_end_to_end() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);

        let mut nav = Navigator::new(&registration_hierarchy());
        nav.on_completed(move || counter.set(counter.get() + 1));

        assert_eq!(nav.position(), (0, 0));
        nav.go_next();
        assert_eq!(nav.position(), (0, 1));
        nav.go_next();
        assert_eq!(nav.position(), (1, 0));

        nav.go_next();
        assert_eq!(nav.position(), (1, 0));
        assert_eq!(fired.get(), 1);

        assert!(nav.jump_to_main("account"));
        assert_eq!(nav.position(), (0, 0));
        assert!(nav.jump_to_sub("password"));
        assert_eq!(nav.position(), (0, 1));
    }

    #[test]
    fn test_handle_drives_navigator() {
        let mut nav = Navigator::new(&registration_hierarchy());

        let mut handle = nav.handle();
        handle.go_next();
        handle.go_next();
        handle.go_previous();

        assert_eq!(nav.position(), (0, 1));
    }
}
