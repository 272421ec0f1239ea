use serde::Serialize;

use crate::model::signal::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAlert {
    pub title: String,
    pub description: String,
    pub severity: RiskLevel,
    pub minutes_ago: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertStatus {
    Unresolved,
    Investigating,
    Resolved,
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 3] = [
        AlertStatus::Unresolved,
        AlertStatus::Investigating,
        AlertStatus::Resolved,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertFeedItem {
    pub title: String,
    pub body: String,
    pub status: AlertStatus,
    pub assignee: String,
}
