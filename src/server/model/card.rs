//! Per-card interaction state.
//!
//! A card starts `Idle`, moves to `Choosing` once accept or reject is picked and
//! becomes `Confirmed` when the pick is confirmed together with its companion
//! selection (a preparation time for accept, a reason for reject). `Confirmed`
//! is terminal. Expansion of the item list is tracked independently.

use derive_more::{Display, Error};
use log::info;
use serde::{Deserialize, Serialize};

pub(crate) const TIME_OPTIONS: [&str; 4] = ["5-10min", "10-15min", "15-20min", "20-25min"];
pub(crate) const REJECT_REASONS: [&str; 5] = ["Not available", "Spam", "Try again", "Pay first", "Other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Decision {
    #[display("accepted")]
    Accepted,
    #[display("rejected")]
    Rejected,
}

impl Decision {
    /// values offered by the follow-up selector
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Decision::Accepted => &TIME_OPTIONS,
            Decision::Rejected => &REJECT_REASONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Phase {
    #[display("idle")]
    Idle,
    #[display("choosing")]
    Choosing,
    #[display("confirmed")]
    Confirmed,
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub(crate) enum CardError {
    #[display("cannot {action} while card is {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },
    #[display("accept/reject workflow is disabled")]
    WorkflowDisabled,
    #[display("{value} is not an option for {decision} orders")]
    UnknownOption { value: String, decision: Decision },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CardState {
    with_workflow: bool,
    expanded: bool,
    decision: Option<Decision>,
    selected_time: Option<String>,
    selected_reason: Option<String>,
    confirmed: bool,
}

impl CardState {
    pub fn new(with_workflow: bool) -> Self {
        Self {
            with_workflow,
            ..Default::default()
        }
    }

    pub fn with_workflow(&self) -> bool {
        self.with_workflow
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn decision(&self) -> Option<Decision> {
        self.decision
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    pub fn selected_reason(&self) -> Option<&str> {
        self.selected_reason.as_deref()
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn phase(&self) -> Phase {
        match (self.decision, self.confirmed) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::Choosing,
            (Some(_), true) => Phase::Confirmed,
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Pick accept or reject. Any earlier selection is dropped.
    pub fn choose(&mut self, decision: Decision) -> Result<(), CardError> {
        if !self.with_workflow {
            self.decision = Some(decision);
            return Ok(());
        }
        match (self.phase(), self.decision) {
            (Phase::Confirmed, _) => Err(self.invalid("choose")),
            // the opposite button is replaced by the cancel action
            (Phase::Choosing, Some(current)) if current != decision => Err(self.invalid("switch decision")),
            _ => {
                self.decision = Some(decision);
                self.selected_time = None;
                self.selected_reason = None;
                Ok(())
            }
        }
    }

    /// Return to `Idle`, forgetting the decision and its selection.
    pub fn cancel(&mut self) -> Result<(), CardError> {
        self.require_workflow()?;
        if self.phase() == Phase::Confirmed {
            return Err(self.invalid("cancel"));
        }
        self.reset();
        Ok(())
    }

    /// Set the time (accepted) or reason (rejected) for the current decision.
    pub fn select(&mut self, value: &str) -> Result<(), CardError> {
        self.require_workflow()?;
        let decision = match (self.phase(), self.decision) {
            (Phase::Choosing, Some(decision)) => decision,
            _ => return Err(self.invalid("select")),
        };
        if !decision.options().contains(&value) {
            return Err(CardError::UnknownOption {
                value: value.to_string(),
                decision,
            });
        }
        match decision {
            Decision::Accepted => self.selected_time = Some(value.to_string()),
            Decision::Rejected => self.selected_reason = Some(value.to_string()),
        }
        Ok(())
    }

    pub fn can_confirm(&self) -> bool {
        if !self.with_workflow || self.confirmed {
            return false;
        }
        match self.decision {
            Some(Decision::Accepted) => self.selected_time.as_deref().is_some_and(|t| !t.is_empty()),
            Some(Decision::Rejected) => self.selected_reason.as_deref().is_some_and(|r| !r.is_empty()),
            None => false,
        }
    }

    /// Finalize the decision. Without the required selection this does nothing;
    /// returns whether the card became confirmed by this call.
    pub fn confirm(&mut self) -> Result<bool, CardError> {
        self.require_workflow()?;
        if !self.can_confirm() {
            return Ok(false);
        }
        self.confirmed = true;
        Ok(true)
    }

    /// Options currently offered by the selector, only while choosing.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match (self.with_workflow, self.phase(), self.decision) {
            (true, Phase::Choosing, Some(decision)) => Some(decision.options()),
            _ => None,
        }
    }

    /// text of the final status badge
    pub fn badge(&self) -> Option<&'static str> {
        match (self.phase(), self.decision) {
            (Phase::Confirmed, Some(Decision::Accepted)) => Some("Confirmed"),
            (Phase::Confirmed, Some(Decision::Rejected)) => Some("Rejected"),
            _ => None,
        }
    }

    fn reset(&mut self) {
        if let Some(decision) = self.decision {
            info!("dropping {} decision", decision);
        }
        self.decision = None;
        self.selected_time = None;
        self.selected_reason = None;
        self.confirmed = false;
    }

    fn require_workflow(&self) -> Result<(), CardError> {
        match self.with_workflow {
            true => Ok(()),
            false => Err(CardError::WorkflowDisabled),
        }
    }

    fn invalid(&self, action: &'static str) -> CardError {
        CardError::InvalidTransition {
            action,
            phase: self.phase(),
        }
    }
}
