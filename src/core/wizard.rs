use crate::domain::model::{Axis, UserPreferences};
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Pick(Axis),
    Complete,
}

impl WizardStep {
    fn next(self) -> Self {
        match self {
            WizardStep::Pick(Axis::Industry) => WizardStep::Pick(Axis::Goal),
            WizardStep::Pick(Axis::Goal) => WizardStep::Pick(Axis::Style),
            WizardStep::Pick(Axis::Style) => WizardStep::Pick(Axis::Level),
            WizardStep::Pick(Axis::Level) | WizardStep::Complete => WizardStep::Complete,
        }
    }

    fn previous(self) -> Self {
        match self {
            WizardStep::Pick(Axis::Industry) | WizardStep::Pick(Axis::Goal) => {
                WizardStep::Pick(Axis::Industry)
            }
            WizardStep::Pick(Axis::Style) => WizardStep::Pick(Axis::Goal),
            WizardStep::Pick(Axis::Level) => WizardStep::Pick(Axis::Style),
            WizardStep::Complete => WizardStep::Pick(Axis::Level),
        }
    }
}

/// Simulator session state. Every transition consumes the wizard and
/// returns the next one; nothing is shared between steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    preferences: UserPreferences,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Pick(Axis::Industry),
            preferences: UserPreferences::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn is_complete(&self) -> bool {
        self.step == WizardStep::Complete
    }

    /// Records `value` for the current axis and moves on. A completed wizard
    /// is returned unchanged.
    pub fn select(self, value: impl Into<String>) -> Self {
        match self.step {
            WizardStep::Pick(axis) => Self {
                step: self.step.next(),
                preferences: self.preferences.with(axis, value),
            },
            WizardStep::Complete => self,
        }
    }

    /// Goes back one step and clears the answer for the step it lands on.
    pub fn back(self) -> Self {
        let step = self.step.previous();
        let preferences = match step {
            WizardStep::Pick(axis) => self.preferences.with(axis, String::new()),
            WizardStep::Complete => self.preferences,
        };
        Self { step, preferences }
    }

    pub fn reset(self) -> Self {
        Self::new()
    }

    pub fn finish(self) -> Result<UserPreferences> {
        self.preferences.validate()?;
        Ok(self.preferences)
    }
}

impl Validate for UserPreferences {
    fn validate(&self) -> Result<()> {
        let missing = self.missing_axes();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MatchError::IncompletePreferences { missing })
        }
    }
}
