//! Registration wizard
//!
//! A three-step form state machine shared by the shop and online-merchant
//! registration flows. Steps gate on per-step validation, the draft is
//! only shaped into a store row at submit time, and a failed submission
//! returns to the confirmation step with the draft intact.
//!
//! Validation failures are plain user-facing messages held in the
//! wizard's single error slot (last message wins); they never become
//! [`crate::error::Error`] values.

pub mod merchant;
pub mod shop;

use crate::store::StoreClient;
use serde::Serialize;
use tracing::warn;

/// Wizard position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Step 1: identity fields (name, address or URL, category)
    Basic,
    /// Step 2: domain fields (use cases, networks, platforms, payment)
    Domain,
    /// Step 3: review and confirmation
    Confirm,
    /// Insert call in flight
    Submitting,
    /// Terminal until an explicit reset
    Submitted,
}

impl std::fmt::Display for WizardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Domain => write!(f, "domain"),
            Self::Confirm => write!(f, "confirm"),
            Self::Submitting => write!(f, "submitting"),
            Self::Submitted => write!(f, "submitted"),
        }
    }
}

/// A selectable field value
///
/// Either one of the canonical options or free text entered through the
/// form's "other" escape hatch. The variant only collapses to a plain
/// string at the submission boundary, so no sentinel comparisons leak
/// into validation or shaping logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Selected(String),
    Custom(String),
}

impl Choice {
    /// Collapse to the plain string the store row carries
    ///
    /// Values are trimmed; blank values resolve to `None`.
    pub fn resolve(&self) -> Option<String> {
        let value = match self {
            Choice::Selected(value) => value,
            Choice::Custom(text) => text,
        };
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// Resolve a choice list, dropping blanks
pub fn resolve_all(choices: &[Choice]) -> Vec<String> {
    choices.iter().filter_map(Choice::resolve).collect()
}

/// Opaque externally-issued identity of the signed-in user
///
/// The wizard only checks presence; it never validates or refreshes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

/// Generic submission failure message
pub const MSG_SUBMIT_FAILED: &str = "送信に失敗しました。時間をおいて再度お試しください";

/// Confirmation checkbox not ticked
pub const MSG_NOT_CONFIRMED: &str = "内容を確認のうえ、確認欄にチェックを入れてください";

/// No signed-in identity
pub const MSG_NOT_SIGNED_IN: &str = "登録にはログインが必要です";

/// The seam between the generic step machine and the two form variants
pub trait RegistrationForm {
    /// Store row produced at submit time
    type Row: Serialize;

    /// Target table in the external store
    fn table(&self) -> &'static str;

    /// Step-1 validation: the first failing field's message, or `None`
    ///
    /// Checks run in field order and short-circuit, so later fields are
    /// not reported until earlier ones pass.
    fn validate_basic(&self) -> Option<String>;

    /// Step-2 validation, same contract as [`Self::validate_basic`]
    fn validate_domain(&self) -> Option<String>;

    /// Shape the draft into its store row
    ///
    /// Only called once both step validations have passed. Must not
    /// mutate the draft: the same form shapes identically on retry.
    fn to_row(&self, created_by: &UserId) -> Self::Row;
}

/// Three-step registration wizard over a form variant
///
/// Events not in the transition table (advance past the confirmation
/// step, retreat from step 1, submit away from the confirmation step,
/// reset before submission) leave the wizard untouched and return false.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard<F> {
    form: F,
    state: WizardState,
    confirmed: bool,
    error: Option<String>,
}

impl<F: RegistrationForm + Default> Wizard<F> {
    /// Start a fresh wizard at step 1 with an empty draft
    pub fn new() -> Self {
        Self {
            form: F::default(),
            state: WizardState::Basic,
            confirmed: false,
            error: None,
        }
    }

    /// Discard the draft and return to step 1
    ///
    /// Only legal from the submitted state.
    pub fn reset(&mut self) -> bool {
        if self.state != WizardState::Submitted {
            return false;
        }
        *self = Self::new();
        true
    }
}

impl<F: RegistrationForm + Default> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: RegistrationForm> Wizard<F> {
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// The pending validation or submission message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the draft for field edits
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Tick or untick the confirmation checkbox
    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
    }

    /// Move forward one step if the current step's validation passes
    ///
    /// On failure the step is unchanged and the error slot holds the
    /// first failing field's message.
    pub fn advance(&mut self) -> bool {
        let validation = match self.state {
            WizardState::Basic => self.form.validate_basic(),
            WizardState::Domain => self.form.validate_domain(),
            _ => return false,
        };

        match validation {
            None => {
                self.state = match self.state {
                    WizardState::Basic => WizardState::Domain,
                    _ => WizardState::Confirm,
                };
                self.error = None;
                true
            }
            Some(message) => {
                self.error = Some(message);
                false
            }
        }
    }

    /// Move back one step, keeping all draft values
    pub fn retreat(&mut self) -> bool {
        match self.state {
            WizardState::Domain => {
                self.state = WizardState::Basic;
                self.error = None;
                true
            }
            WizardState::Confirm => {
                self.state = WizardState::Domain;
                self.error = None;
                true
            }
            _ => false,
        }
    }

    /// Submit the finalized draft
    ///
    /// Only legal from the confirmation step. The confirmation checkbox
    /// and a signed-in identity are checked before any network call; a
    /// store failure returns to the confirmation step with the draft
    /// preserved and a generic retry message, logging the cause for
    /// operators.
    pub async fn submit(&mut self, store: &StoreClient, identity: Option<&UserId>) -> bool {
        if self.state != WizardState::Confirm {
            return false;
        }
        if !self.confirmed {
            self.error = Some(MSG_NOT_CONFIRMED.to_string());
            return false;
        }
        let Some(user) = identity else {
            self.error = Some(MSG_NOT_SIGNED_IN.to_string());
            return false;
        };

        let row = self.form.to_row(user);
        self.state = WizardState::Submitting;

        match store.insert(self.form.table(), &row).await {
            Ok(()) => {
                self.state = WizardState::Submitted;
                self.error = None;
                true
            }
            Err(e) => {
                warn!(table = self.form.table(), error = %e, "listing submission failed");
                self.state = WizardState::Confirm;
                self.error = Some(MSG_SUBMIT_FAILED.to_string());
                false
            }
        }
    }
}

/// `Some(values)` when non-empty, otherwise `None`
pub(crate) fn none_if_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// `Some(trimmed)` when non-blank, otherwise `None`
pub(crate) fn none_if_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
