//! Tabular output of crawl results.
//!
//! Vacancies are serialized to JSON, flattened to one level and written as
//! CSV with one column per leaf field.

use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};

use crate::app::Result;
use crate::domain::Vacancy;

pub const KEY_SEPARATOR: &str = ".";

/// Flatten nested JSON objects into a single-level map.
///
/// With `include_parents` nested keys are joined to their parents with
/// `sep` (`position_details.location`); without it the leaf key is used on
/// its own and a later duplicate overwrites an earlier one. Non-object
/// input yields an empty map.
pub fn flatten(value: &Value, sep: &str, include_parents: bool) -> Map<String, Value> {
    let mut out = Map::new();
    if let Value::Object(map) = value {
        flatten_into(&mut out, map, "", sep, include_parents);
    }
    out
}

fn flatten_into(
    out: &mut Map<String, Value>,
    map: &Map<String, Value>,
    parent: &str,
    sep: &str,
    include_parents: bool,
) {
    for (key, value) in map {
        let name = if include_parents && !parent.is_empty() {
            format!("{parent}{sep}{key}")
        } else {
            key.clone()
        };

        match value {
            Value::Object(inner) => flatten_into(out, inner, &name, sep, include_parents),
            leaf => {
                out.insert(name, leaf.clone());
            }
        }
    }
}

/// One flat record per vacancy, in order.
pub fn to_rows(vacancies: &[Vacancy], prefix_nested: bool) -> Result<Vec<Map<String, Value>>> {
    vacancies
        .iter()
        .map(|vacancy| {
            let value = serde_json::to_value(vacancy)?;
            Ok(flatten(&value, KEY_SEPARATOR, prefix_nested))
        })
        .collect()
}

/// Write vacancies as CSV to `path`.
pub fn write_csv(path: &Path, vacancies: &[Vacancy], prefix_nested: bool) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(file, vacancies, prefix_nested)?;
    tracing::info!("Wrote {} vacancies to {}", vacancies.len(), path.display());
    Ok(())
}

/// Write vacancies as CSV to any writer.
///
/// The header is the union of all keys in first-seen order; absent values
/// are written as empty cells.
pub fn write_csv_to<W: Write>(writer: W, vacancies: &[Vacancy], prefix_nested: bool) -> Result<()> {
    let rows = to_rows(vacancies, prefix_nested)?;

    let mut headers: Vec<String> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    if !headers.is_empty() {
        csv_writer.write_record(&headers)?;
    }
    for row in &rows {
        csv_writer.write_record(headers.iter().map(|h| cell(row.get(h))))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PositionDetails;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use url::Url;

    fn vacancy(title: &str, fragments: &[&str]) -> Vacancy {
        Vacancy::new(
            title,
            "brief",
            "full",
            "vacature/1",
            PositionDetails::from_fragments(fragments).unwrap(),
            &Url::parse("https://example.com/jobs/").unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
        )
        .unwrap()
    }

    const EIGHT: [&str; 8] = ["Utrecht", "€ 3.000", "vast", "fulltime", "dev", "ict", "WO", "40 uur"];

    #[test]
    fn test_flatten_with_parents() {
        let value = json!({"a": 1, "b": {"c": "x", "d": {"e": null}}});
        let flat = flatten(&value, ".", true);
        let keys: Vec<_> = flat.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b.c", "b.d.e"]);
        assert_eq!(flat["b.c"], json!("x"));
    }

    #[test]
    fn test_flatten_without_parents_uses_leaf_keys() {
        let value = json!({"a": 1, "b": {"c": "x", "d": {"e": 2}}});
        let flat = flatten(&value, ".", false);
        let keys: Vec<_> = flat.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_flatten_keeps_arrays_as_leaves() {
        let value = json!({"tags": ["a", "b"]});
        assert_eq!(flatten(&value, ".", true)["tags"], json!(["a", "b"]));
    }

    #[test]
    fn test_flatten_non_object_is_empty() {
        assert!(flatten(&json!([1, 2]), ".", true).is_empty());
    }

    #[test]
    fn test_rows_have_prefixed_detail_columns() {
        let rows = to_rows(&[vacancy("dev", &EIGHT)], true).unwrap();
        assert_eq!(rows[0]["title"], json!("Dev"));
        assert_eq!(rows[0]["position_details.location"], json!("Utrecht"));
        assert_eq!(rows[0]["position_details.time_length"], Value::Null);
        assert_eq!(rows[0]["url"], json!("https://example.com/jobs/vacature/1"));
    }

    #[test]
    fn test_csv_one_row_per_vacancy() {
        let mut buf = Vec::new();
        let vacancies = [vacancy("first", &EIGHT), vacancy("second", &EIGHT)];
        write_csv_to(&mut buf, &vacancies, true).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("title,brief_description,full_description,url,"));
        assert!(lines[0].contains("position_details.salary_range"));
        assert!(lines[1].starts_with("First,"));
        assert!(lines[2].starts_with("Second,"));
        assert!(lines[1].contains("€3.000"));
    }

    #[test]
    fn test_csv_without_prefix() {
        let mut buf = Vec::new();
        write_csv_to(&mut buf, &[vacancy("x", &EIGHT)], false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.contains(",location,"));
        assert!(!header.contains("position_details"));
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &[vacancy("x", &EIGHT)], true).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_empty_result_writes_nothing() {
        let mut buf = Vec::new();
        write_csv_to(&mut buf, &[], true).unwrap();
        assert!(buf.is_empty());
    }
}
