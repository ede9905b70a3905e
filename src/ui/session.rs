// SPDX-License-Identifier: MPL-2.0
//! The coaching session: which mode is active and where in its procedure
//! the user currently is.

use crate::content::{Step, INSERTION_STEPS, REMOVAL_STEPS};

/// Top-level mode selected through the tab row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Insertion,
    Removal,
    Care,
}

impl Mode {
    /// All modes in tab display order.
    pub const ALL: [Mode; 3] = [Mode::Insertion, Mode::Removal, Mode::Care];

    /// The i18n message key for this mode's tab label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Mode::Insertion => "mode-insertion",
            Mode::Removal => "mode-removal",
            Mode::Care => "mode-care",
        }
    }
}

/// Current position in the coaching flow.
///
/// Step navigation saturates at both ends, and selecting any mode tab
/// (including the one already active) rewinds to the first step.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    step_index: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            mode: Mode::Insertion,
            step_index: 0,
        }
    }
}

impl Session {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// The step sequence of the active mode. Care mode has no procedure.
    pub fn steps(&self) -> &'static [Step] {
        match self.mode {
            Mode::Insertion => INSERTION_STEPS,
            Mode::Removal => REMOVAL_STEPS,
            Mode::Care => &[],
        }
    }

    /// The step the user is looking at, if the active mode has any.
    pub fn current_step(&self) -> Option<&'static Step> {
        self.steps().get(self.step_index)
    }

    /// Switches to `mode` and rewinds to its first step.
    ///
    /// Rewinding is unconditional: re-selecting the active tab restarts the
    /// procedure from the top.
    pub fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.step_index = 0;
    }

    /// Advances one step, staying on the last step if already there.
    pub fn next_step(&mut self) {
        let last = self.steps().len().saturating_sub(1);
        self.step_index = (self.step_index + 1).min(last);
    }

    /// Goes back one step, staying on the first step if already there.
    pub fn previous_step(&mut self) {
        self.step_index = self.step_index.saturating_sub(1);
    }
}
