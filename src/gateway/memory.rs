//! In-memory gateway.
//!
//! Serves the same routes as the API from JSON rows held in a mutex. Used by
//! the test suite and by the binary's `--offline` mode. Failures can be
//! injected per verb and path to exercise error handling.

use super::backend::{Gateway, Verb};
use super::status::http_error;
use crate::domain::error::{Result, TracksideError};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Value>,
    next_id: i64,
}

#[derive(Debug, Clone)]
struct Failure {
    verb: Verb,
    path: String,
    status: u16,
    message: Option<String>,
}

#[derive(Debug, Default)]
struct MemoryState {
    tables: HashMap<String, Table>,
    failures: Vec<Failure>,
    log: Vec<(Verb, String)>,
}

/// Gateway answering from in-memory collections.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use trackside::gateway::{routes, Gateway, MemoryGateway, Verb};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let gateway = MemoryGateway::new();
/// gateway.seed("items", vec![json!({"id": 1, "name": "Hurdles"})]);
/// gateway.fail_on(Verb::Delete, &routes::delete("items", 1), 403);
///
/// let err = gateway.request(Verb::Delete, &routes::delete("items", 1), None).await.unwrap_err();
/// assert_eq!(err.status(), Some(403));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct MemoryGateway {
    state: Mutex<MemoryState>,
}

impl MemoryGateway {
    /// Creates an empty gateway; every collection starts with no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the rows of a collection.
    pub fn seed(&self, base: &str, rows: Vec<Value>) {
        let next_id = rows
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_i64))
            .max()
            .unwrap_or(0)
            + 1;
        self.lock()
            .tables
            .insert(base.to_string(), Table { rows, next_id });
    }

    /// Makes every `verb` request to `path` fail with `status`.
    pub fn fail_on(&self, verb: Verb, path: &str, status: u16) {
        self.fail_with_message(verb, path, status, None);
    }

    /// Like [`fail_on`](Self::fail_on) with a server message in the error body.
    pub fn fail_with_message(&self, verb: Verb, path: &str, status: u16, message: Option<&str>) {
        self.lock().failures.push(Failure {
            verb,
            path: path.to_string(),
            status,
            message: message.map(str::to_string),
        });
    }

    /// Removes all injected failures.
    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    /// Number of requests received for `verb` and `path`.
    #[must_use]
    pub fn request_count(&self, verb: Verb, path: &str) -> usize {
        self.lock()
            .log
            .iter()
            .filter(|(v, p)| *v == verb && p == path)
            .count()
    }

    /// Current rows of a collection.
    #[must_use]
    pub fn rows(&self, base: &str) -> Vec<Value> {
        self.lock()
            .tables
            .get(base)
            .map(|t| t.rows.clone())
            .unwrap_or_default()
    }

    /// A gateway pre-filled with a small athletics data set.
    #[must_use]
    pub fn with_demo_data() -> Self {
        let gateway = Self::new();
        for (base, rows) in demo_rows() {
            gateway.seed(base, rows);
        }
        gateway
    }
}

fn not_found() -> TracksideError {
    http_error(404, None)
}

fn parse_id(segment: Option<&str>) -> Result<i64> {
    segment
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| http_error(400, None))
}

fn row_id(row: &Value) -> Option<i64> {
    row.get("id").and_then(Value::as_i64)
}

fn body_object(body: Option<Value>) -> Result<Map<String, Value>> {
    match body {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(http_error(400, None)),
    }
}

impl MemoryState {
    fn route(&mut self, verb: Verb, path: &str, body: Option<Value>) -> Result<Option<Value>> {
        let mut segments = path.trim_matches('/').split('/');
        let base = segments.next().unwrap_or_default();
        let op = segments.next().unwrap_or_default();
        let id = segments.next();
        let table = self.tables.entry(base.to_string()).or_insert_with(|| Table {
            rows: Vec::new(),
            next_id: 1,
        });

        match (verb, op) {
            (Verb::Get, "all") => Ok(Some(Value::Array(table.rows.clone()))),
            (Verb::Get, "id") => {
                let id = parse_id(id)?;
                table
                    .rows
                    .iter()
                    .find(|r| row_id(r) == Some(id))
                    .cloned()
                    .map(Some)
                    .ok_or_else(not_found)
            }
            (Verb::Post, "create") => {
                let mut row = body_object(body)?;
                row.insert("id".to_string(), json!(table.next_id));
                table.next_id += 1;
                let row = Value::Object(row);
                table.rows.push(row.clone());
                Ok(Some(row))
            }
            (Verb::Patch, "edit") => {
                let id = parse_id(id)?;
                let patch = body_object(body)?;
                let row = table
                    .rows
                    .iter_mut()
                    .find(|r| row_id(r) == Some(id))
                    .ok_or_else(not_found)?;
                if let Some(fields) = row.as_object_mut() {
                    for (key, value) in patch {
                        if key != "id" {
                            fields.insert(key, value);
                        }
                    }
                }
                Ok(Some(row.clone()))
            }
            (Verb::Delete, "delete") => {
                let id = parse_id(id)?;
                let before = table.rows.len();
                table.rows.retain(|r| row_id(r) != Some(id));
                if table.rows.len() == before {
                    Err(not_found())
                } else {
                    Ok(None)
                }
            }
            _ => Err(not_found()),
        }
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn request(&self, verb: Verb, path: &str, body: Option<Value>) -> Result<Option<Value>> {
        let _span = tracing::debug_span!("memory_request", verb = verb.as_str(), path = %path).entered();
        let mut state = self.lock();
        state.log.push((verb, path.to_string()));

        if let Some(failure) = state
            .failures
            .iter()
            .find(|f| f.verb == verb && f.path == path)
        {
            tracing::debug!(status = failure.status, "injected failure");
            return Err(http_error(failure.status, failure.message.as_deref()));
        }

        state.route(verb, path, body)
    }
}

fn demo_rows() -> Vec<(&'static str, Vec<Value>)> {
    let clubs = vec![
        json!({"id": 1, "name": "Aarhus 1900", "city": "Aarhus"}),
        json!({"id": 2, "name": "Sparta Athletics", "city": "Copenhagen"}),
    ];
    let sprint_men = json!({"id": 1, "name": "100m", "gender": "MENS", "resultType": "TIME"});
    let sprint_women = json!({"id": 2, "name": "100m", "gender": "WOMENS", "resultType": "TIME"});
    let long_jump = json!({"id": 3, "name": "Long Jump", "gender": "WOMENS", "resultType": "DISTANCE"});
    let decathlon = json!({"id": 4, "name": "Decathlon", "gender": "MENS", "resultType": "POINTS"});
    let disciplines = vec![
        sprint_men.clone(),
        sprint_women.clone(),
        long_jump.clone(),
        decathlon.clone(),
    ];
    let meets = vec![
        json!({"id": 1, "name": "Spring Open"}),
        json!({"id": 2, "name": "Nordic Championships"}),
    ];

    let ann = json!({
        "id": 1, "name": "Ann Holm", "gender": "F", "age": 24, "imageUrl": "",
        "athleteAgeGroupEnum": "SENIOR", "club": clubs[0].clone(),
        "disciplines": [sprint_women.clone(), long_jump.clone()]
    });
    let bo = json!({
        "id": 2, "name": "Bo Lind", "gender": "M", "age": 19, "imageUrl": "",
        "athleteAgeGroupEnum": "JUNIOR", "club": clubs[1].clone(),
        "disciplines": [sprint_men.clone(), decathlon.clone()]
    });
    let carla = json!({
        "id": 3, "name": "Carla Berg", "gender": "F", "age": 31, "imageUrl": "",
        "athleteAgeGroupEnum": "SENIOR", "club": clubs[1].clone(),
        "disciplines": [long_jump.clone()]
    });
    let dan = json!({
        "id": 4, "name": "Dan Skov", "gender": "M", "age": 15, "imageUrl": null,
        "athleteAgeGroupEnum": "YOUTH", "club": null, "disciplines": [sprint_men.clone()]
    });

    let results = vec![
        json!({"id": 1, "trackMeet": meets[0].clone(), "date": "2024-05-04", "athlete": ann.clone(),
               "discipline": sprint_women, "resultType": "TIME", "time": "00:00:11.84"}),
        json!({"id": 2, "trackMeet": meets[0].clone(), "date": "2024-05-04", "athlete": carla.clone(),
               "discipline": long_jump.clone(), "resultType": "DISTANCE", "distance": 6.21}),
        json!({"id": 3, "trackMeet": meets[1].clone(), "date": "2024-07-13", "athlete": bo.clone(),
               "discipline": decathlon, "resultType": "POINTS", "points": 7204}),
        json!({"id": 4, "trackMeet": meets[1].clone(), "date": "2024-07-14", "athlete": ann.clone(),
               "discipline": long_jump, "resultType": "DISTANCE", "distance": 6.02}),
        json!({"id": 5, "trackMeet": meets[1].clone(), "date": "2024-07-14", "athlete": dan.clone(),
               "discipline": sprint_men, "resultType": "TIME", "time": "00:00:11.02"}),
    ];

    let items = vec![
        json!({"id": 1, "name": "Starting blocks"}),
        json!({"id": 2, "name": "Hurdles"}),
        json!({"id": 3, "name": "Shot put 7.26kg"}),
    ];

    vec![
        ("clubs", clubs),
        ("disciplines", disciplines),
        ("trackmeets", meets),
        ("athletes", vec![ann, bo, carla, dan]),
        ("results", results),
        ("items", items),
    ]
}
