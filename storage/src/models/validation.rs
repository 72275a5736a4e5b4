use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    UnassignedAthletes,
    EmptyFlight,
    SizeWarning,
    GenderMix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Warning,
    Error,
}

/// A finding about the current flight state. Findings are data returned
/// alongside a successful call, not errors: the caller decides whether an
/// `Error`-severity issue blocks an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    /// The flight the finding is about. `None` for meet-wide findings such
    /// as unassigned athletes.
    pub flight_id: Option<Uuid>,
    pub message: String,
}

impl ValidationIssue {
    pub fn warning(kind: IssueKind, flight_id: Option<Uuid>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: IssueSeverity::Warning,
            flight_id,
            message: message.into(),
        }
    }

    pub fn error(kind: IssueKind, flight_id: Option<Uuid>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: IssueSeverity::Error,
            flight_id,
            message: message.into(),
        }
    }
}
