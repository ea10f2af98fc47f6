use std::fmt;

use crate::error::Result;
use crate::interface::RequestApi;
use crate::model::structs::{Activity, ActivityDirectory};

pub const SELECTOR_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Participants {
    Listed(String),
    Empty,
}

impl fmt::Display for Participants {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Participants::Listed(list) => write!(f, "Participants: {list}"),
            Participants::Empty => f.write_str(NO_PARTICIPANTS),
        }
    }
}

/// One rendered activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub capacity: String,
    pub participants: Participants,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            Participants::Empty
        } else {
            Participants::Listed(activity.participants.join(", "))
        };
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            capacity: format!(
                "{}/{} ({} spots left)",
                activity.participants.len(),
                activity.max_participants,
                activity.spots_left()
            ),
            participants,
        }
    }
}

impl fmt::Display for ActivityCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Schedule: {}", self.schedule)?;
        writeln!(f, "  Capacity: {}", self.capacity)?;
        write!(f, "  {}", self.participants)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub fn render(directory: &ActivityDirectory) -> Vec<ActivityCard> {
    directory.iter().map(ActivityCard::from_activity).collect()
}

/// Picker entries: an empty placeholder, then one per activity name.
pub fn populate_selector(directory: &ActivityDirectory) -> Vec<SelectOption> {
    let placeholder = SelectOption {
        value: String::new(),
        label: SELECTOR_PLACEHOLDER.to_string(),
    };
    std::iter::once(placeholder)
        .chain(directory.names().map(|name| SelectOption {
            value: name.to_string(),
            label: name.to_string(),
        }))
        .collect()
}

/// Issued by [`ActivityDirectoryView::begin_load`]; only the newest ticket
/// may replace the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was started after this one; the response was dropped.
    Stale,
}

/// Latest directory snapshot, replaced wholesale by each load.
#[derive(Debug, Default)]
pub struct ActivityDirectoryView {
    snapshot: Option<ActivityDirectory>,
    latest: u64,
}

impl ActivityDirectoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&ActivityDirectory> {
        self.snapshot.as_ref()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    /// Applies a fetched directory unless a newer load has begun since
    /// `ticket` was issued. Failures never touch the snapshot.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        fetched: Result<ActivityDirectory>,
    ) -> Result<LoadOutcome> {
        let directory = fetched?;
        if ticket.0 != self.latest {
            log::debug!(
                "Dropping stale directory response #{} (latest #{})",
                ticket.0,
                self.latest
            );
            return Ok(LoadOutcome::Stale);
        }
        log::debug!("Loaded {} activities", directory.len());
        self.snapshot = Some(directory);
        Ok(LoadOutcome::Applied)
    }

    pub async fn load<A: RequestApi>(&mut self, api: &A) -> Result<LoadOutcome> {
        let ticket = self.begin_load();
        let fetched = api.get_activities().await;
        self.finish_load(ticket, fetched)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorKind;

    fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
        Activity {
            name: name.to_string(),
            description: format!("{name} description"),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn empty_activity_card() {
        let card = ActivityCard::from_activity(&activity("Math Club", 10, &[]));
        assert_eq!(card.capacity, "0/10 (10 spots left)");
        assert_eq!(card.participants, Participants::Empty);
        assert_eq!(card.participants.to_string(), "No participants yet");
    }

    #[test]
    fn participants_are_comma_joined() {
        let card = ActivityCard::from_activity(&activity(
            "Chess Club",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ));
        assert_eq!(card.capacity, "2/12 (10 spots left)");
        assert_eq!(
            card.participants.to_string(),
            "Participants: michael@mergington.edu, daniel@mergington.edu"
        );
    }

    #[test]
    fn selector_has_leading_placeholder() {
        let directory = ActivityDirectory::new(vec![
            activity("Chess Club", 12, &[]),
            activity("Art Club", 15, &[]),
        ]);
        let options = populate_selector(&directory);
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["", "Chess Club", "Art Club"]);
        assert_eq!(options[0].label, SELECTOR_PLACEHOLDER);
    }

    #[test]
    fn card_text_layout() {
        let card = ActivityCard::from_activity(&activity("Art Club", 15, &["a@b.com"]));
        assert_eq!(
            card.to_string(),
            "Art Club\n  Art Club description\n  Schedule: Fridays, 3:30 PM - 5:00 PM\n  \
             Capacity: 1/15 (14 spots left)\n  Participants: a@b.com"
        );
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut view = ActivityDirectoryView::new();
        let first = view.begin_load();
        let second = view.begin_load();

        let newer = ActivityDirectory::new(vec![activity("Chess Club", 12, &["a@b.com"])]);
        let older = ActivityDirectory::new(vec![activity("Chess Club", 12, &[])]);

        assert!(matches!(
            view.finish_load(second, Ok(newer.clone())),
            Ok(LoadOutcome::Applied)
        ));
        assert!(matches!(view.finish_load(first, Ok(older)), Ok(LoadOutcome::Stale)));
        assert_eq!(view.snapshot(), Some(&newer));
    }

    #[test]
    fn failure_keeps_previous_snapshot() {
        let mut view = ActivityDirectoryView::new();
        let directory = ActivityDirectory::new(vec![activity("Gym Class", 30, &[])]);
        let ticket = view.begin_load();
        view.finish_load(ticket, Ok(directory.clone())).unwrap();

        let ticket = view.begin_load();
        let failed = view.finish_load(
            ticket,
            Err(ErrorKind::ServerError { status: 500, detail: None }.into()),
        );
        assert!(failed.is_err());
        assert_eq!(view.snapshot(), Some(&directory));
    }
}
