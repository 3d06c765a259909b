//! Visible-leads projection
//!
//! Pure derivation of the list the UI renders: search, status filter, and
//! optional score sort over the canonical lead collection. Recomputed from
//! state on every call, never persisted.

use miniseller_domain::{AppState, Lead};

/// Derive the filtered/sorted lead list for display.
///
/// Search is a case-insensitive substring match against name or company.
/// When `sort_by_score` is off, leads keep their original relative order;
/// when on, the sort is descending by score and stable, so equal scores also
/// keep their original relative order.
pub fn visible_leads(state: &AppState) -> Vec<Lead> {
    let query = state.search_query.to_lowercase();
    let mut leads: Vec<Lead> = state
        .leads
        .iter()
        .filter(|lead| {
            (query.is_empty()
                || lead.name.to_lowercase().contains(&query)
                || lead.company.to_lowercase().contains(&query))
                && state.status_filter.matches(&lead.status)
        })
        .cloned()
        .collect();

    if state.sort_by_score {
        leads.sort_by(|a, b| b.score.cmp(&a.score));
    }
    leads
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use miniseller_domain::{LeadSource, LeadStatus, StatusFilter};

    use super::*;

    fn lead(id: &str, name: &str, company: &str, score: i32, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            name: name.to_string(),
            company: company.to_string(),
            email: format!("{id}@example.com"),
            source: LeadSource::Website,
            score,
            status,
            created_at: Utc::now(),
        }
    }

    fn three_leads() -> Vec<Lead> {
        vec![
            lead("1", "Ada Lovelace", "Analytical Engines", 60, LeadStatus::Qualified),
            lead("2", "Grace Hopper", "Compilers Inc", 95, LeadStatus::New),
            lead("3", "Alan Kay", "Dynabook", 80, LeadStatus::Qualified),
        ]
    }

    #[test]
    fn empty_query_and_all_filter_show_everything_in_order() {
        let state = AppState { leads: three_leads(), ..AppState::default() };
        let visible = visible_leads(&state);
        let ids: Vec<&str> = visible.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn search_matches_name_or_company_case_insensitively() {
        let state = AppState {
            leads: three_leads(),
            search_query: "COMPILERS".to_string(),
            ..AppState::default()
        };
        let visible = visible_leads(&state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Grace Hopper");

        let by_name = AppState {
            leads: three_leads(),
            search_query: "ada".to_string(),
            ..AppState::default()
        };
        assert_eq!(visible_leads(&by_name).len(), 1);
    }

    #[test]
    fn status_filter_keeps_only_matching_leads_in_original_order() {
        let state = AppState {
            leads: three_leads(),
            status_filter: StatusFilter::Qualified,
            ..AppState::default()
        };
        let visible = visible_leads(&state);
        let ids: Vec<&str> = visible.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn score_sort_is_descending() {
        let state =
            AppState { leads: three_leads(), sort_by_score: true, ..AppState::default() };
        let scores: Vec<i32> = visible_leads(&state).iter().map(|l| l.score).collect();
        assert_eq!(scores, [95, 80, 60]);
    }

    #[test]
    fn score_sort_is_stable_for_equal_scores() {
        let leads = vec![
            lead("1", "First", "A", 50, LeadStatus::New),
            lead("2", "Second", "B", 50, LeadStatus::New),
            lead("3", "Third", "C", 70, LeadStatus::New),
        ];
        let state = AppState { leads, sort_by_score: true, ..AppState::default() };
        let leads = visible_leads(&state);
        let ids: Vec<&str> = leads.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn search_and_filter_compose() {
        let state = AppState {
            leads: three_leads(),
            search_query: "a".to_string(),
            status_filter: StatusFilter::Qualified,
            sort_by_score: true,
            ..AppState::default()
        };
        // "a" matches all three names/companies; filter keeps the two
        // qualified leads; sort puts the higher score first.
        let leads = visible_leads(&state);
        let ids: Vec<&str> = leads.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["3", "1"]);
    }
}
