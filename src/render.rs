//! Roster rendering.
//!
//! [`render_roster`] is a pure function from a [`Roster`] snapshot to a
//! [`RosterView`]: activity blocks for the list and options for the activity
//! chooser. The terminal components paint a `RosterView` as-is, replacing
//! whatever was on screen, so nothing rendered earlier can leak into a
//! later frame.

use crate::constants::TEXT_NO_PARTICIPANTS;
use crate::roster::{Activity, Roster};
use feruca::{Collator, Tailoring};
use std::cmp::Ordering;

/// Payload carried by a participant's removal control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoveTarget {
    pub activity: String,
    pub email: String,
}

/// One line of an activity's participant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantEntry {
    Removable { email: String, target: RemoveTarget },
    /// Shown instead of an empty list; has no removal control.
    Placeholder,
}

impl ParticipantEntry {
    pub fn label(&self) -> &str {
        match self {
            Self::Removable { email, .. } => email,
            Self::Placeholder => TEXT_NO_PARTICIPANTS,
        }
    }

    pub fn target(&self) -> Option<&RemoveTarget> {
        match self {
            Self::Removable { target, .. } => Some(target),
            Self::Placeholder => None,
        }
    }
}

/// Display block for a single activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityBlock {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantEntry>,
}

impl ActivityBlock {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// Entry of the activity chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOption {
    pub value: String,
    pub label: String,
}

/// Everything the view surfaces need to show a roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterView {
    pub blocks: Vec<ActivityBlock>,
    pub options: Vec<ActivityOption>,
}

impl RosterView {
    /// Every removal control in display order.
    pub fn removal_targets(&self) -> Vec<&RemoveTarget> {
        self.blocks
            .iter()
            .flat_map(|block| block.participants.iter().filter_map(ParticipantEntry::target))
            .collect()
    }
}

/// Render a roster into activity blocks and chooser options, in roster order.
pub fn render_roster(roster: &Roster) -> RosterView {
    let blocks = roster.iter().map(|(name, activity)| render_activity(name, activity)).collect();
    let options = roster
        .names()
        .map(|name| ActivityOption {
            value: name.to_string(),
            label: name.to_string(),
        })
        .collect();

    RosterView { blocks, options }
}

fn render_activity(name: &str, activity: &Activity) -> ActivityBlock {
    let participants = if activity.participants.is_empty() {
        vec![ParticipantEntry::Placeholder]
    } else {
        sorted_participants(&activity.participants)
            .into_iter()
            .map(|email| ParticipantEntry::Removable {
                target: RemoveTarget {
                    activity: name.to_string(),
                    email: email.clone(),
                },
                email,
            })
            .collect()
    };

    ActivityBlock {
        name: name.to_string(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        participants,
    }
}

/// Display order for participants.
///
/// Unicode collation over the CLDR root table with punctuation kept
/// significant, so `a@x.com` precedes `A@x.com` and `john@x.com` precedes
/// `john2@x.com`. Strings with identical collation keys fall back to byte
/// order, which keeps the order total.
pub fn compare_participants(a: &str, b: &str) -> Ordering {
    participant_collator().collate(a, b)
}

pub fn sorted_participants(participants: &[String]) -> Vec<String> {
    let mut collator = participant_collator();
    let mut sorted = participants.to_vec();
    sorted.sort_by(|a, b| collator.collate(a.as_str(), b.as_str()));
    sorted
}

fn participant_collator() -> Collator {
    Collator::new(Tailoring::default(), false, true)
}
