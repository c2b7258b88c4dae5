use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_LABEL: &str = "Week";
pub const DEFAULT_HREF: &str = "#";
pub const CURRENT_BADGE: &str = "Current week";

/// One entry of `weeks.json`.
///
/// Built from any JSON value: fields of the wrong type are dropped instead of
/// failing the whole load, so a bad record still renders, it just can never be
/// the current week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct WeekRecord {
    pub label: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub href: Option<String>,
}

impl From<Value> for WeekRecord {
    fn from(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::default();
        };
        let text = |key: &str| match fields.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        };

        let label = match fields.get("label") {
            None | Some(Value::Null) => None,
            Some(other) => Some(display_text(other)),
        };

        Self {
            label,
            start_date: text("start_date"),
            end_date: text("end_date"),
            href: text("href").filter(|href| !href.is_empty()),
        }
    }
}

/// Text a browser shows when the value lands in `textContent`.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        // `2.0` prints as `2`, the way a browser shows it.
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Accepted top-level shapes of `weeks.json`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WeeksResource {
    List(Vec<WeekRecord>),
    Wrapped { weeks: Vec<WeekRecord> },
}

impl WeeksResource {
    pub fn into_weeks(self) -> Vec<WeekRecord> {
        match self {
            Self::List(weeks) | Self::Wrapped { weeks } => weeks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    pub label: String,
    pub href: String,
    pub is_current: bool,
    pub date_range: String,
}

impl RenderedCard {
    pub fn badge(&self) -> Option<&'static str> {
        self.is_current.then_some(CURRENT_BADGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Success,
    Failure,
}

#[derive(Debug, Serialize)]
pub struct WeeksResponse {
    pub state: LoadState,
    pub status: Status,
    pub cards: Vec<RenderedCard>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_keeps_text_fields() {
        let record: WeekRecord = serde_json::from_value(json!({
            "label": "Week 1",
            "start_date": "2024-01-01",
            "end_date": "2024-01-07",
            "href": "week1.html"
        }))
        .unwrap();
        assert_eq!(record.label.as_deref(), Some("Week 1"));
        assert_eq!(record.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(record.end_date.as_deref(), Some("2024-01-07"));
        assert_eq!(record.href.as_deref(), Some("week1.html"));
    }

    #[test]
    fn record_drops_non_text_dates() {
        let record: WeekRecord = serde_json::from_value(json!({
            "start_date": 20240101,
            "end_date": "2024-01-07",
            "href": ""
        }))
        .unwrap();
        assert_eq!(record.start_date, None);
        assert_eq!(record.end_date.as_deref(), Some("2024-01-07"));
        assert_eq!(record.href, None);
    }

    #[test]
    fn record_label_shows_scalars_and_skips_null() {
        let numeric: WeekRecord = serde_json::from_value(json!({ "label": 3 })).unwrap();
        assert_eq!(numeric.label.as_deref(), Some("3"));
        let null: WeekRecord = serde_json::from_value(json!({ "label": null })).unwrap();
        assert_eq!(null.label, None);
        let float: WeekRecord = serde_json::from_value(json!({ "label": 2.0 })).unwrap();
        assert_eq!(float.label.as_deref(), Some("2"));
    }

    #[test]
    fn record_label_shows_containers_like_a_browser() {
        let object: WeekRecord = serde_json::from_value(json!({ "label": { "a": 1 } })).unwrap();
        assert_eq!(object.label.as_deref(), Some("[object Object]"));
        let array: WeekRecord =
            serde_json::from_value(json!({ "label": [1, "two", null, [3, 4]] })).unwrap();
        assert_eq!(array.label.as_deref(), Some("1,two,,3,4"));
    }

    #[test]
    fn non_object_record_is_empty() {
        let record: WeekRecord = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(record, WeekRecord::default());
    }

    #[test]
    fn resource_accepts_bare_list_and_wrapper() {
        let list: WeeksResource =
            serde_json::from_value(json!([{ "label": "A" }, { "label": "B" }])).unwrap();
        assert_eq!(list.into_weeks().len(), 2);

        let wrapped: WeeksResource =
            serde_json::from_value(json!({ "title": "Term", "weeks": [{ "label": "A" }] }))
                .unwrap();
        assert_eq!(wrapped.into_weeks().len(), 1);
    }

    #[test]
    fn resource_rejects_other_shapes() {
        for value in [
            json!({ "weeks": "nope" }),
            json!({ "items": [] }),
            json!("weeks"),
            json!(7),
            json!(null),
        ] {
            assert!(serde_json::from_value::<WeeksResource>(value).is_err());
        }
    }
}
