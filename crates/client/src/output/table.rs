//! CSV output formatting.
//!
//! Only flat records can be tabulated: the response must be an object or a
//! list of objects whose values are all scalars. The shape is checked on the
//! JSON form of the value before any row is produced.

use serde_json::{Map, Value};

use super::OutputError;

/// Header plus one row of cells per record.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Format a value as CSV.
pub fn format_csv<T: serde::Serialize>(value: &T) -> Result<String, OutputError> {
    let table = Table::from_value(serde_json::to_value(value)?)?;
    table.to_csv()
}

fn records(value: Value) -> Result<Vec<Map<String, Value>>, OutputError> {
    match value {
        Value::Object(record) => Ok(vec![record]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(OutputError::Shape(format!(
                    "item {index} is {}, not a record",
                    kind(&other)
                ))),
            })
            .collect(),
        other => Err(OutputError::Shape(format!(
            "expected a record or a list of records, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn cell(field: &str, value: &Value) -> Result<String, OutputError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Array(_) | Value::Object(_) => Err(OutputError::NotFlat {
            field: field.to_string(),
        }),
    }
}

impl Table {
    /// Builds a table from a JSON value, failing if it is not flat.
    ///
    /// Columns are the union of record keys in first-seen order. A record
    /// without a column gets an empty cell.
    pub fn from_value(value: Value) -> Result<Self, OutputError> {
        let records = records(value)?;

        let mut header: Vec<String> = Vec::new();
        for record in &records {
            for (field, value) in record {
                cell(field, value)?;
                if !header.iter().any(|h| h == field) {
                    header.push(field.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                header
                    .iter()
                    .map(|field| match record.get(field) {
                        Some(value) => cell(field, value),
                        None => Ok(String::new()),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { header, rows })
    }

    pub fn to_csv(&self) -> Result<String, OutputError> {
        if self.header.is_empty() {
            return Ok(String::new());
        }

        let mut buf = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buf);
            writer.write_record(&self.header)?;
            for row in &self.rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sparkctl_core::models::{License, Message, Room};

    fn parse(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let header = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        (header, rows)
    }

    #[test]
    fn test_csv_row_count_and_columns_match_records() {
        let licenses = vec![
            License {
                id: "l1".to_string(),
                name: "Messaging".to_string(),
                total_units: 50,
                consumed_units: 8,
            },
            License {
                id: "l2".to_string(),
                name: "Meetings, large".to_string(),
                total_units: 10,
                consumed_units: 0,
            },
        ];

        let text = format_csv(&licenses).unwrap();
        let (header, rows) = parse(&text);

        assert_eq!(header, vec!["id", "name", "totalUnits", "consumedUnits"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["l2", "Meetings, large", "10", "0"]);
    }

    #[test]
    fn test_csv_header_is_union_of_fields() {
        let rooms = vec![Room::new("r1", "Ops"), Room::new("r2", "Dev").with_team("t1")];

        let (header, rows) = parse(&format_csv(&rooms).unwrap());

        assert_eq!(header, vec!["id", "title", "teamId"]);
        assert_eq!(rows[0], vec!["r1", "Ops", ""]);
        assert_eq!(rows[1], vec!["r2", "Dev", "t1"]);
    }

    #[test]
    fn test_single_record_is_one_row() {
        let (header, rows) = parse(&format_csv(&json!({"id": "t1", "name": "Ops"})).unwrap());
        assert_eq!(header, vec!["id", "name"]);
        assert_eq!(rows, vec![vec!["t1".to_string(), "Ops".to_string()]]);
    }

    #[test]
    fn test_nested_field_is_rejected() {
        let message: Message = serde_json::from_value(json!({
            "id": "m1",
            "text": "hi",
            "mentionedPeople": ["p1"]
        }))
        .unwrap();

        let err = format_csv(&vec![message]).unwrap_err();
        assert!(matches!(err, OutputError::NotFlat { field } if field == "mentionedPeople"));
    }

    #[test]
    fn test_non_record_shapes_are_rejected() {
        assert!(matches!(
            format_csv(&json!("plain")).unwrap_err(),
            OutputError::Shape(_)
        ));
        assert!(matches!(
            format_csv(&json!([1, 2])).unwrap_err(),
            OutputError::Shape(_)
        ));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let empty: Vec<Room> = Vec::new();
        assert_eq!(format_csv(&empty).unwrap(), "");
    }
}
