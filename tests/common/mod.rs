#![allow(dead_code)]

use async_trait::async_trait;
use rollcall::client::{ClientError, MutationReceipt, RosterApi};
use rollcall::roster::{Activity, Roster};
use rollcall::sync::{Action, SyncController};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

type Scripted<T> = (Duration, Result<T, ClientError>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Signup { activity: String, email: String },
    Remove { activity: String, email: String },
}

/// Roster service double with scripted answers.
///
/// List answers are consumed in call order; mutation answers are keyed by
/// email so concurrent requests don't depend on task start order.
#[derive(Default)]
pub struct FakeRosterApi {
    lists: Mutex<VecDeque<Scripted<Roster>>>,
    signups: Mutex<HashMap<String, VecDeque<Scripted<MutationReceipt>>>>,
    removals: Mutex<HashMap<String, VecDeque<Scripted<MutationReceipt>>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRosterApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: Result<Roster, ClientError>) {
        self.push_list_after(Duration::ZERO, result);
    }

    pub fn push_list_after(&self, delay: Duration, result: Result<Roster, ClientError>) {
        self.lists.lock().unwrap().push_back((delay, result));
    }

    pub fn push_signup(&self, email: &str, result: Result<MutationReceipt, ClientError>) {
        self.push_signup_after(email, Duration::ZERO, result);
    }

    pub fn push_signup_after(&self, email: &str, delay: Duration, result: Result<MutationReceipt, ClientError>) {
        self.signups
            .lock()
            .unwrap()
            .entry(email.to_string())
            .or_default()
            .push_back((delay, result));
    }

    pub fn push_removal(&self, email: &str, result: Result<MutationReceipt, ClientError>) {
        self.push_removal_after(email, Duration::ZERO, result);
    }

    pub fn push_removal_after(&self, email: &str, delay: Duration, result: Result<MutationReceipt, ClientError>) {
        self.removals
            .lock()
            .unwrap()
            .entry(email.to_string())
            .or_default()
            .push_back((delay, result));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }

    pub fn mutation_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c != Call::List).count()
    }
}

async fn answer<T>(scripted: Option<Scripted<T>>, what: &str) -> Result<T, ClientError> {
    let (delay, result) =
        scripted.unwrap_or_else(|| (Duration::ZERO, Err(ClientError::Transport(format!("no scripted {}", what)))));
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    result
}

#[async_trait]
impl RosterApi for FakeRosterApi {
    async fn list_activities(&self) -> Result<Roster, ClientError> {
        self.calls.lock().unwrap().push(Call::List);
        let scripted = self.lists.lock().unwrap().pop_front();
        answer(scripted, "list").await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationReceipt, ClientError> {
        self.calls.lock().unwrap().push(Call::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        let scripted = self.signups.lock().unwrap().get_mut(email).and_then(VecDeque::pop_front);
        answer(scripted, "signup").await
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<MutationReceipt, ClientError> {
        self.calls.lock().unwrap().push(Call::Remove {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        let scripted = self.removals.lock().unwrap().get_mut(email).and_then(VecDeque::pop_front);
        answer(scripted, "removal").await
    }
}

pub fn activity(description: &str, schedule: &str, max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// `{"Chess Club": {"description":"d","schedule":"Mon","max_participants":2,"participants":[...]}}`
pub fn chess_club(participants: &[&str]) -> Roster {
    let mut roster = Roster::new();
    roster.insert("Chess Club", activity("d", "Mon", 2, participants));
    roster
}

pub fn receipt(message: &str) -> MutationReceipt {
    MutationReceipt {
        message: message.to_string(),
    }
}

/// Feed background results into the controller until one matches.
pub async fn pump_until<F>(controller: &mut SyncController, matches: F) -> Action
where
    F: Fn(&Action) -> bool,
{
    loop {
        let action = tokio::time::timeout(Duration::from_secs(60), controller.next_background_action())
            .await
            .expect("timed out waiting for a background action")
            .expect("action channel closed");
        let matched = matches(&action);
        controller.handle_action(action.clone());
        if matched {
            return action;
        }
    }
}
