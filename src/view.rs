//! Pure rendering of the activities list into a view tree.
//!
//! Nothing here touches egui; `ui::components` paints the result.

use crate::constants::*;
use crate::types::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

impl ActivityCard {
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListNode {
    Card(ActivityCard),
    ParticipantResults { heading: String, emails: Vec<String> },
    Notice(String),
}

pub fn render_activity_card(name: &str, activity: &Activity) -> ActivityCard {
    ActivityCard {
        name: name.to_string(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        participants: activity.participants.clone(),
    }
}

pub fn render_loading() -> Vec<ListNode> {
    vec![ListNode::Notice(LOADING_TEXT.to_string())]
}

pub fn render_all(snapshot: &ActivitySnapshot) -> Vec<ListNode> {
    snapshot
        .iter()
        .map(|(name, activity)| ListNode::Card(render_activity_card(name, activity)))
        .collect()
}

/// Activity hits are joined against the snapshot by exact name; unknown
/// names are skipped. Participant hits are listed on their own.
pub fn render_search_results(snapshot: &ActivitySnapshot, results: &SearchResults) -> Vec<ListNode> {
    if results.is_empty() {
        return vec![ListNode::Notice(NO_RESULTS_TEXT.to_string())];
    }

    let mut nodes: Vec<ListNode> = results
        .activity_results
        .iter()
        .filter_map(|hit| {
            snapshot
                .get(&hit.activity_name)
                .map(|activity| ListNode::Card(render_activity_card(&hit.activity_name, activity)))
        })
        .collect();

    if !results.participant_results.is_empty() {
        nodes.push(ListNode::ParticipantResults {
            heading: PARTICIPANT_RESULTS_HEADING.to_string(),
            emails: results
                .participant_results
                .iter()
                .map(|p| p.email.clone())
                .collect(),
        });
    }
    nodes
}

pub fn render_load_failure() -> Vec<ListNode> {
    vec![ListNode::Notice(LOAD_FAILED_TEXT.to_string())]
}

/// Options for the activity selector, rebuilt from scratch each time
pub fn selector_options(snapshot: &ActivitySnapshot) -> Vec<String> {
    snapshot.names().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: u32, participants: &[&str]) -> Activity {
        Activity {
            description: "Learn strategies".into(),
            schedule: "Fridays".into(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn snapshot() -> ActivitySnapshot {
        ActivitySnapshot::from_entries(vec![
            ("Chess Club".into(), activity(10, &["a@x.com"])),
            ("Drama Club".into(), activity(15, &[])),
        ])
    }

    #[test]
    fn card_shows_spots_left_and_participants() {
        let card = render_activity_card("Chess Club", &activity(10, &["a@x.com"]));
        assert_eq!(card.availability_text(), "9 spots left");
        assert_eq!(card.participants, vec!["a@x.com".to_string()]);
    }

    #[test]
    fn card_does_not_clamp_overbooked_activity() {
        let card = render_activity_card("Tiny", &activity(0, &["a@x.com", "b@x.com"]));
        assert_eq!(card.spots_left, -2);
        assert_eq!(card.availability_text(), "-2 spots left");
    }

    #[test]
    fn render_all_follows_snapshot_order() {
        let nodes = render_all(&snapshot());
        let names: Vec<&str> = nodes
            .iter()
            .filter_map(|n| match n {
                ListNode::Card(card) => Some(card.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["Chess Club", "Drama Club"]);
    }

    #[test]
    fn empty_results_render_single_notice() {
        let nodes = render_search_results(&snapshot(), &SearchResults::default());
        assert_eq!(nodes, vec![ListNode::Notice(NO_RESULTS_TEXT.to_string())]);
    }

    #[test]
    fn search_results_join_and_skip_unknown_names() {
        let results = SearchResults {
            activity_results: vec![
                ActivitySearchResult { activity_name: "Drama Club".into(), score: Some(90.0) },
                ActivitySearchResult { activity_name: "Ghost Club".into(), score: Some(50.0) },
            ],
            participant_results: vec![ParticipantSearchResult {
                email: "a@x.com".into(),
                score: None,
            }],
        };
        let nodes = render_search_results(&snapshot(), &results);
        assert_eq!(nodes.len(), 2);
        assert!(matches!(&nodes[0], ListNode::Card(card) if card.name == "Drama Club"));
        assert_eq!(
            nodes[1],
            ListNode::ParticipantResults {
                heading: PARTICIPANT_RESULTS_HEADING.to_string(),
                emails: vec!["a@x.com".to_string()],
            }
        );
    }

    #[test]
    fn unmatched_activity_hits_render_nothing() {
        let results = SearchResults {
            activity_results: vec![ActivitySearchResult {
                activity_name: "Ghost Club".into(),
                score: None,
            }],
            participant_results: vec![],
        };
        assert!(render_search_results(&snapshot(), &results).is_empty());
    }

    #[test]
    fn selector_options_match_snapshot() {
        assert_eq!(selector_options(&snapshot()), vec!["Chess Club", "Drama Club"]);
        assert!(selector_options(&ActivitySnapshot::default()).is_empty());
    }

    #[test]
    fn load_failure_is_single_notice() {
        assert_eq!(
            render_load_failure(),
            vec![ListNode::Notice(LOAD_FAILED_TEXT.to_string())]
        );
    }
}
