//! Swap request lifecycle rules.
//!
//! A swap request is created in `PENDING` and moves through exactly one of
//! the transitions below. Who may drive a transition depends on which side
//! of the request they are on:
//!
//! ```text
//! PENDING  --ACCEPTED-->   (receiver only)
//! PENDING  --REJECTED-->   (receiver only)
//! PENDING  --CANCELLED-->  (requester only)
//! ACCEPTED --COMPLETED-->  (either participant)
//! ```
//!
//! `REJECTED`, `CANCELLED`, and `COMPLETED` are terminal. This module only
//! decides whether a transition is allowed; the actual conditional UPDATE
//! lives in the `db` crate so concurrent writers cannot double-apply one.

use std::fmt;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of a swap request.
///
/// Stored in the database as the upper-case string form ([`Self::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl SwapStatus {
    /// The canonical wire/storage form, e.g. `"PENDING"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SwapStatus::Pending => "PENDING",
            SwapStatus::Accepted => "ACCEPTED",
            SwapStatus::Rejected => "REJECTED",
            SwapStatus::Completed => "COMPLETED",
            SwapStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parse the canonical upper-case form. Anything else is `None`.
    pub fn parse(s: &str) -> Option<SwapStatus> {
        match s {
            "PENDING" => Some(SwapStatus::Pending),
            "ACCEPTED" => Some(SwapStatus::Accepted),
            "REJECTED" => Some(SwapStatus::Rejected),
            "COMPLETED" => Some(SwapStatus::Completed),
            "CANCELLED" => Some(SwapStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether no further transition can leave this state.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            SwapStatus::Rejected | SwapStatus::Completed | SwapStatus::Cancelled
        )
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Roles and transition rules
// ---------------------------------------------------------------------------

/// Which side of a swap request the acting user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRole {
    /// The user who sent the request.
    Requester,
    /// The user the request was sent to.
    Receiver,
}

/// Who is allowed to drive a request into a given target status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActorRule {
    ReceiverOnly,
    RequesterOnly,
    AnyParticipant,
}

/// A single row of the transition table: who may do it, and from where.
#[derive(Debug, Clone, Copy)]
struct TransitionRule {
    actor: ActorRule,
    from: SwapStatus,
}

/// Look up the rule for driving a request into `target`.
///
/// Returns `None` for `PENDING`, which is the creation state and never a
/// transition target.
const fn transition_rule(target: SwapStatus) -> Option<TransitionRule> {
    match target {
        SwapStatus::Pending => None,
        SwapStatus::Accepted | SwapStatus::Rejected => Some(TransitionRule {
            actor: ActorRule::ReceiverOnly,
            from: SwapStatus::Pending,
        }),
        SwapStatus::Cancelled => Some(TransitionRule {
            actor: ActorRule::RequesterOnly,
            from: SwapStatus::Pending,
        }),
        SwapStatus::Completed => Some(TransitionRule {
            actor: ActorRule::AnyParticipant,
            from: SwapStatus::Accepted,
        }),
    }
}

/// The current status a request must hold for `target` to be reachable.
///
/// The `db` layer uses this as the guard column value in its conditional
/// UPDATE. `None` for `PENDING`.
pub fn required_current(target: SwapStatus) -> Option<SwapStatus> {
    transition_rule(target).map(|rule| rule.from)
}

/// Check that `role` may move a request currently in `current` to `target`.
///
/// Checks the actor before the state, so a user acting on the wrong side of
/// a request gets `Forbidden` even when the state is also wrong. Returns:
///
/// - `Validation` if `target` is `PENDING`
/// - `Forbidden` if the actor is on the wrong side for this transition
/// - `InvalidState` if the request is not in the required current status
pub fn authorize_transition(
    role: SwapRole,
    current: SwapStatus,
    target: SwapStatus,
) -> Result<(), CoreError> {
    let rule = transition_rule(target).ok_or_else(|| {
        CoreError::Validation("A swap request cannot be moved back to PENDING".into())
    })?;

    match rule.actor {
        ActorRule::ReceiverOnly if role != SwapRole::Receiver => {
            return Err(CoreError::Forbidden(format!(
                "Only the receiver can mark a swap request as {target}"
            )));
        }
        ActorRule::RequesterOnly if role != SwapRole::Requester => {
            return Err(CoreError::Forbidden(
                "Only the requester can cancel a swap request".into(),
            ));
        }
        _ => {}
    }

    if current != rule.from {
        return Err(CoreError::InvalidState(format!(
            "Cannot move a swap request from {current} to {target}"
        )));
    }

    Ok(())
}
