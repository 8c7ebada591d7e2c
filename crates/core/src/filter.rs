//! Client-side filtering of list results.
//!
//! The API cannot filter rooms by title or team, nor teams by name, so the
//! client narrows the fetched page itself. Filters are pure and keep the
//! original order of the records they retain.

use crate::models::{Room, Team};

/// Treats an empty flag value the same as an absent one.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// At most one criterion applied to a list of rooms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoomFilter {
    /// Keep every room.
    #[default]
    None,
    /// Keep rooms whose title contains the substring (case-sensitive).
    Title(String),
    /// Keep rooms that belong to exactly this team.
    TeamId(String),
}

impl RoomFilter {
    /// Picks the criterion from the optional flags. A title wins over a team ID.
    pub fn from_flags(title: Option<&str>, team_id: Option<&str>) -> Self {
        if let Some(title) = present(title) {
            RoomFilter::Title(title.to_string())
        } else if let Some(team_id) = present(team_id) {
            RoomFilter::TeamId(team_id.to_string())
        } else {
            RoomFilter::None
        }
    }

    pub fn matches(&self, room: &Room) -> bool {
        match self {
            RoomFilter::None => true,
            RoomFilter::Title(needle) => room.title.contains(needle.as_str()),
            RoomFilter::TeamId(team_id) => room.team_id.as_deref() == Some(team_id.as_str()),
        }
    }

    /// Returns the matching subsequence of `rooms`.
    pub fn apply(&self, rooms: Vec<Room>) -> Vec<Room> {
        if *self == RoomFilter::None {
            return rooms;
        }
        rooms.into_iter().filter(|room| self.matches(room)).collect()
    }
}

/// At most one criterion applied to a list of teams.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamFilter {
    #[default]
    None,
    /// Keep teams whose name contains the substring (case-sensitive).
    Name(String),
}

impl TeamFilter {
    pub fn from_flags(name: Option<&str>) -> Self {
        match present(name) {
            Some(name) => TeamFilter::Name(name.to_string()),
            None => TeamFilter::None,
        }
    }

    pub fn matches(&self, team: &Team) -> bool {
        match self {
            TeamFilter::None => true,
            TeamFilter::Name(needle) => team.name.contains(needle.as_str()),
        }
    }

    /// Returns the matching subsequence of `teams`.
    pub fn apply(&self, teams: Vec<Team>) -> Vec<Team> {
        if *self == TeamFilter::None {
            return teams;
        }
        teams.into_iter().filter(|team| self.matches(team)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms() -> Vec<Room> {
        vec![
            Room::new("r1", "Project X").with_team("t1"),
            Room::new("r2", "Project Y"),
            Room::new("r3", "Ops").with_team("t1"),
            Room::new("r4", "project z").with_team("t10"),
        ]
    }

    fn ids(rooms: &[Room]) -> Vec<&str> {
        rooms.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_title_filter_keeps_matches_in_order() {
        let filter = RoomFilter::from_flags(Some("Project"), None);
        let filtered = filter.apply(rooms());

        assert_eq!(ids(&filtered), vec!["r1", "r2"]);
        assert!(filtered.iter().all(|r| r.title.contains("Project")));
    }

    #[test]
    fn test_title_filter_is_case_sensitive() {
        let filtered = RoomFilter::Title("project".to_string()).apply(rooms());
        assert_eq!(ids(&filtered), vec!["r4"]);
    }

    #[test]
    fn test_team_filter_requires_exact_match() {
        let filtered = RoomFilter::from_flags(None, Some("t1")).apply(rooms());
        assert_eq!(ids(&filtered), vec!["r1", "r3"]);
    }

    #[test]
    fn test_title_takes_priority_over_team() {
        let filter = RoomFilter::from_flags(Some("Ops"), Some("t10"));
        assert_eq!(filter, RoomFilter::Title("Ops".to_string()));
        assert_eq!(ids(&filter.apply(rooms())), vec!["r3"]);
    }

    #[test]
    fn test_empty_flags_pass_everything_through() {
        let filter = RoomFilter::from_flags(Some(""), Some(""));
        assert_eq!(filter, RoomFilter::None);
        assert_eq!(filter.apply(rooms()), rooms());
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        let filtered = RoomFilter::from_flags(Some("Finance"), None).apply(rooms());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_team_name_filter() {
        let teams = vec![
            Team::new("t1", "Platform Eng"),
            Team::new("t2", "Sales"),
            Team::new("t3", "Eng Leads"),
        ];

        let filtered = TeamFilter::from_flags(Some("Eng")).apply(teams.clone());
        let names: Vec<&str> = filtered.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Platform Eng", "Eng Leads"]);

        assert_eq!(TeamFilter::from_flags(None).apply(teams.clone()), teams);
    }
}
