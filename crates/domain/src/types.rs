//! Common data types used throughout the application

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a lead.
///
/// Not a linear progression: the edit form may set any status from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::Converted => "Converted",
        };
        f.write_str(label)
    }
}

/// Marketing channel the lead came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    Referral,
    #[serde(rename = "Cold Call")]
    ColdCall,
    #[serde(rename = "Email Campaign")]
    EmailCampaign,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Trade Show")]
    TradeShow,
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Website => "Website",
            Self::Referral => "Referral",
            Self::ColdCall => "Cold Call",
            Self::EmailCampaign => "Email Campaign",
            Self::SocialMedia => "Social Media",
            Self::TradeShow => "Trade Show",
        };
        f.write_str(label)
    }
}

/// Status filter applied to the leads list: a concrete status or "All".
///
/// Serialized as a plain string so persisted preferences round-trip with the
/// same shape the UI widgets use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    New,
    Contacted,
    Qualified,
    Converted,
}

impl StatusFilter {
    /// Whether a lead with the given status passes this filter.
    pub fn matches(&self, status: &LeadStatus) -> bool {
        match self {
            Self::All => true,
            Self::New => *status == LeadStatus::New,
            Self::Contacted => *status == LeadStatus::Contacted,
            Self::Qualified => *status == LeadStatus::Qualified,
            Self::Converted => *status == LeadStatus::Converted,
        }
    }
}

impl From<LeadStatus> for StatusFilter {
    fn from(status: LeadStatus) -> Self {
        match status {
            LeadStatus::New => Self::New,
            LeadStatus::Contacted => Self::Contacted,
            LeadStatus::Qualified => Self::Qualified,
            LeadStatus::Converted => Self::Converted,
        }
    }
}

/// Sales lead as loaded from the seed dataset.
///
/// Created externally, mutated by update or conversion, never deleted.
/// `score` lives in 0-100 by convention of the input widgets; the model does
/// not enforce the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub source: LeadSource,
    pub score: i32,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

/// Opportunity minted from a successful lead conversion.
///
/// `name` and `company` are copied from the lead at conversion time and not
/// kept in sync afterward. Immutable once created, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub lead_id: String,
    pub name: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// The durable UI preference slice: search, filter, and sort settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferences {
    pub search_query: String,
    pub status_filter: StatusFilter,
    pub sort_by_score: bool,
}

/// Aggregate application state, mutated only through reducer dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Ordered lead collection, unique by id.
    pub leads: Vec<Lead>,
    /// Ordered opportunity collection, unique by id, append-only.
    pub opportunities: Vec<Opportunity>,
    /// Initial-load lifecycle flag. An error implies not loading.
    pub is_loading: bool,
    /// User-facing error from the load lifecycle, if any.
    pub error: Option<String>,
    /// Case-insensitive substring query against lead name/company.
    pub search_query: String,
    /// Status filter applied to the visible leads projection.
    pub status_filter: StatusFilter,
    /// When set, the visible projection sorts descending by score.
    pub sort_by_score: bool,
    /// Value snapshot of the lead open in the detail panel. Edits to it do
    /// not touch `leads` until an update/convert action commits.
    pub selected_lead: Option<Lead>,
    /// Tracked independently of `selected_lead` so closing animations can
    /// outlive the selection.
    pub is_detail_panel_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            leads: Vec::new(),
            opportunities: Vec::new(),
            is_loading: true,
            error: None,
            search_query: String::new(),
            status_filter: StatusFilter::All,
            sort_by_score: false,
            selected_lead: None,
            is_detail_panel_open: false,
        }
    }
}

impl AppState {
    /// Initial state with persisted slices merged in, ready for first render.
    pub fn with_restored(preferences: UiPreferences, opportunities: Vec<Opportunity>) -> Self {
        Self {
            opportunities,
            search_query: preferences.search_query,
            status_filter: preferences.status_filter,
            sort_by_score: preferences.sort_by_score,
            ..Self::default()
        }
    }

    /// The current UI preference slice, as persisted.
    pub fn preferences(&self) -> UiPreferences {
        UiPreferences {
            search_query: self.search_query.clone(),
            status_filter: self.status_filter,
            sort_by_score: self.sort_by_score,
        }
    }

    /// Whether any opportunity references the given lead.
    pub fn has_opportunity_for(&self, lead_id: &str) -> bool {
        self.opportunities.iter().any(|opp| opp.lead_id == lead_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lead() -> Lead {
        Lead {
            id: "lead-1".to_string(),
            name: "Ada Lovelace".to_string(),
            company: "Analytical Engines".to_string(),
            email: "ada@analytical.com".to_string(),
            source: LeadSource::ColdCall,
            score: 87,
            status: LeadStatus::Qualified,
            created_at: "2024-01-15T10:30:00Z".parse().expect("valid timestamp"),
        }
    }

    #[test]
    fn lead_serde_uses_camel_case_and_original_source_labels() {
        let json = serde_json::to_value(sample_lead()).expect("serialize lead");
        assert_eq!(json["source"], "Cold Call");
        assert_eq!(json["createdAt"], "2024-01-15T10:30:00Z");
        assert_eq!(json["status"], "Qualified");
    }

    #[test]
    fn lead_deserializes_from_seed_shape() {
        let raw = r#"{
            "id": "lead-2",
            "name": "Grace Hopper",
            "company": "Compilers Inc",
            "email": "grace@compilers.com",
            "source": "Trade Show",
            "score": 95,
            "status": "New",
            "createdAt": "2024-02-01T09:00:00Z"
        }"#;
        let lead: Lead = serde_json::from_str(raw).expect("deserialize lead");
        assert_eq!(lead.source, LeadSource::TradeShow);
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.score, 95);
    }

    #[test]
    fn opportunity_omits_absent_amount() {
        let opp = Opportunity {
            id: "opp-lead-1-1700000000000-0".to_string(),
            lead_id: "lead-1".to_string(),
            name: "Ada Lovelace".to_string(),
            company: "Analytical Engines".to_string(),
            amount: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&opp).expect("serialize opportunity");
        assert!(json.get("amount").is_none());
    }

    #[test]
    fn status_filter_round_trips_as_plain_string() {
        let prefs = UiPreferences {
            search_query: "acme".to_string(),
            status_filter: StatusFilter::Qualified,
            sort_by_score: true,
        };
        let json = serde_json::to_string(&prefs).expect("serialize preferences");
        assert!(json.contains(r#""statusFilter":"Qualified""#));
        let back: UiPreferences = serde_json::from_str(&json).expect("deserialize preferences");
        assert_eq!(back, prefs);
    }

    #[test]
    fn status_filter_all_matches_everything() {
        for status in [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Qualified,
            LeadStatus::Converted,
        ] {
            assert!(StatusFilter::All.matches(&status));
        }
        assert!(StatusFilter::Qualified.matches(&LeadStatus::Qualified));
        assert!(!StatusFilter::Qualified.matches(&LeadStatus::New));
    }

    #[test]
    fn restored_state_merges_persisted_slices() {
        let prefs = UiPreferences {
            search_query: "hopper".to_string(),
            status_filter: StatusFilter::Converted,
            sort_by_score: true,
        };
        let opp = Opportunity {
            id: "opp-lead-2-1700000000000-0".to_string(),
            lead_id: "lead-2".to_string(),
            name: "Grace Hopper".to_string(),
            company: "Compilers Inc".to_string(),
            amount: Some(25_000.0),
            created_at: Utc::now(),
        };
        let state = AppState::with_restored(prefs.clone(), vec![opp]);
        assert_eq!(state.preferences(), prefs);
        assert!(state.is_loading);
        assert!(state.leads.is_empty());
        assert!(state.has_opportunity_for("lead-2"));
        assert!(!state.has_opportunity_for("lead-1"));
    }
}
