use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Section category for report entries (`## <Category>`).
///
/// The set is closed: eleven technical categories selectable from the entry
/// form, plus the synthetic [`Category::TimelineEvent`] that timeline-mode
/// entries are filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Initial Access")]
    InitialAccess,
    #[serde(rename = "Execution")]
    Execution,
    #[serde(rename = "Persistence")]
    Persistence,
    #[serde(rename = "Scheduled Tasks")]
    ScheduledTasks,
    #[serde(rename = "Privilege Escalation")]
    PrivilegeEscalation,
    #[serde(rename = "Defense Evasion")]
    DefenseEvasion,
    #[serde(rename = "Credential Access")]
    CredentialAccess,
    #[serde(rename = "Discovery")]
    Discovery,
    #[serde(rename = "Lateral Movement")]
    LateralMovement,
    #[serde(rename = "Command and Control")]
    CommandAndControl,
    #[serde(rename = "Exfiltration")]
    Exfiltration,
    #[serde(rename = "Timeline Event")]
    TimelineEvent,
}

impl Category {
    /// The eleven technical categories, in the order the entry form lists them
    pub const TECHNICAL: [Category; 11] = [
        Category::InitialAccess,
        Category::Execution,
        Category::Persistence,
        Category::ScheduledTasks,
        Category::PrivilegeEscalation,
        Category::DefenseEvasion,
        Category::CredentialAccess,
        Category::Discovery,
        Category::LateralMovement,
        Category::CommandAndControl,
        Category::Exfiltration,
    ];

    /// Human-readable name as rendered in section headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::InitialAccess => "Initial Access",
            Category::Execution => "Execution",
            Category::Persistence => "Persistence",
            Category::ScheduledTasks => "Scheduled Tasks",
            Category::PrivilegeEscalation => "Privilege Escalation",
            Category::DefenseEvasion => "Defense Evasion",
            Category::CredentialAccess => "Credential Access",
            Category::Discovery => "Discovery",
            Category::LateralMovement => "Lateral Movement",
            Category::CommandAndControl => "Command and Control",
            Category::Exfiltration => "Exfiltration",
            Category::TimelineEvent => "Timeline Event",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Initial Access" => Ok(Category::InitialAccess),
            "Execution" => Ok(Category::Execution),
            "Persistence" => Ok(Category::Persistence),
            "Scheduled Tasks" => Ok(Category::ScheduledTasks),
            "Privilege Escalation" => Ok(Category::PrivilegeEscalation),
            "Defense Evasion" => Ok(Category::DefenseEvasion),
            "Credential Access" => Ok(Category::CredentialAccess),
            "Discovery" => Ok(Category::Discovery),
            "Lateral Movement" => Ok(Category::LateralMovement),
            "Command and Control" => Ok(Category::CommandAndControl),
            "Exfiltration" => Ok(Category::Exfiltration),
            "Timeline Event" => Ok(Category::TimelineEvent),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// Log-type selection from the entry form.
///
/// Timeline entries carry no category of their own; they collapse to the
/// [`Category::TimelineEvent`] sentinel when filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Technical(Category),
    Timeline,
}

impl LogKind {
    /// Category the entry is filed under
    pub fn category(&self) -> Category {
        match self {
            LogKind::Technical(category) => *category,
            LogKind::Timeline => Category::TimelineEvent,
        }
    }
}
