// SPDX-License-Identifier: MPL-2.0
//! Static instructional content for the coach.
//!
//! Everything here is compiled-in, immutable data: the two procedures
//! (insertion, removal), the safety red flags, the care rules, and the
//! troubleshooting entries. Well-formedness (non-empty checklists, unique
//! step ids, a single camera step) is an authoring concern enforced by the
//! tests in this module, not checked at runtime.

mod advice;
mod steps;

pub use advice::{TroubleshootingEntry, CARE_RULES, SAFETY_RED_FLAGS, TROUBLESHOOTING};
pub use steps::{INSERTION_STEPS, REMOVAL_STEPS};

/// How a step is rendered: as a regular instruction card, or with the
/// camera panel standing in for the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Content,
    CameraCapture,
}

/// A single instructional unit within a procedure.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Stable identifier, unique within the owning procedure.
    pub id: &'static str,
    pub kind: StepKind,
    pub title: &'static str,
    /// Optional rationale shown under the title.
    pub why_it_matters: Option<&'static str>,
    /// Ordered instructions; never empty.
    pub checklist: &'static [&'static str],
    /// Supplementary hints; may be empty, in which case the block is omitted.
    pub tips: &'static [&'static str],
    /// Optional single cautionary string.
    pub warning: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_procedures() -> [&'static [Step]; 2] {
        [INSERTION_STEPS, REMOVAL_STEPS]
    }

    #[test]
    fn every_checklist_is_non_empty() {
        for steps in all_procedures() {
            for step in steps {
                assert!(
                    !step.checklist.is_empty(),
                    "step '{}' has an empty checklist",
                    step.id
                );
            }
        }
    }

    #[test]
    fn step_ids_are_unique_within_each_procedure() {
        for steps in all_procedures() {
            let mut seen = HashSet::new();
            for step in steps {
                assert!(seen.insert(step.id), "duplicate step id '{}'", step.id);
            }
        }
    }

    #[test]
    fn insertion_has_exactly_one_camera_step() {
        let camera_steps: Vec<_> = INSERTION_STEPS
            .iter()
            .filter(|s| s.kind == StepKind::CameraCapture)
            .collect();
        assert_eq!(camera_steps.len(), 1);
        assert_eq!(camera_steps[0].id, "camera-align");
    }

    #[test]
    fn removal_has_no_camera_step() {
        assert!(REMOVAL_STEPS
            .iter()
            .all(|s| s.kind == StepKind::Content));
    }

    #[test]
    fn advice_lists_are_non_empty() {
        assert!(!SAFETY_RED_FLAGS.is_empty());
        assert!(!CARE_RULES.is_empty());
        assert_eq!(TROUBLESHOOTING.len(), 4);
    }
}
