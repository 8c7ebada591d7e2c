//! JSON output formatting.

use super::OutputError;

/// Format a value as two-space indented JSON followed by a newline.
pub fn format_json<T: serde::Serialize>(value: &T) -> Result<String, OutputError> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkctl_core::models::{Room, Team};

    #[test]
    fn test_json_uses_two_space_indent() {
        let rendered = format_json(&Team::new("t1", "Ops")).unwrap();
        assert_eq!(rendered, "{\n  \"id\": \"t1\",\n  \"name\": \"Ops\"\n}\n");
    }

    #[test]
    fn test_json_round_trips_records() {
        let rooms = vec![
            Room::new("r1", "Project X").with_team("t1"),
            Room::new("r2", "Project \"Y\""),
        ];

        let rendered = format_json(&rooms).unwrap();
        let parsed: Vec<Room> = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, rooms);
    }
}
