//! Competition result model.
//!
//! A result records one athlete's performance in one discipline at one track
//! meet. The performance is a [`Measurement`] whose variant is selected by the
//! discipline's [`ResultKind`]; on the wire the kind travels as `resultType`
//! next to exactly one of `time`, `distance` or `points`.

use super::athlete::Athlete;
use super::catalog::{Discipline, ResultKind, TrackMeet};
use super::entity::{Collection, Entity};
use super::error::{Result, TracksideError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single performance value.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    /// Formatted time, e.g. `00:00:10.52`.
    Time(String),
    /// Distance in meters.
    Distance(f64),
    /// Combined-event points.
    Points(i64),
}

impl Measurement {
    /// The kind tag matching this variant.
    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        match self {
            Self::Time(_) => ResultKind::Time,
            Self::Distance(_) => ResultKind::Distance,
            Self::Points(_) => ResultKind::Points,
        }
    }

    /// Parses user input for the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`TracksideError::InvalidInput`] when the text does not fit the kind.
    pub fn parse(kind: ResultKind, input: &str) -> Result<Self> {
        let input = input.trim();
        match kind {
            ResultKind::Time => {
                let valid = !input.is_empty()
                    && input.chars().any(|c| c.is_ascii_digit())
                    && input.chars().all(|c| c.is_ascii_digit() || c == ':' || c == '.');
                if valid {
                    Ok(Self::Time(input.to_string()))
                } else {
                    Err(TracksideError::invalid(format!(
                        "'{input}' is not a time, expected hh:mm:ss.SS"
                    )))
                }
            }
            ResultKind::Distance => input
                .parse::<f64>()
                .ok()
                .filter(|d| d.is_finite() && *d >= 0.0)
                .map(Self::Distance)
                .ok_or_else(|| TracksideError::invalid(format!("'{input}' is not a distance"))),
            ResultKind::Points => input
                .parse::<i64>()
                .ok()
                .filter(|p| *p >= 0)
                .map(Self::Points)
                .ok_or_else(|| TracksideError::invalid(format!("'{input}' is not a points value"))),
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(time) => f.write_str(time),
            Self::Distance(distance) => write!(f, "{distance}"),
            Self::Points(points) => write!(f, "{points}"),
        }
    }
}

/// A competition result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ResultRecord", into = "ResultRecord")]
pub struct ResultEntry {
    pub id: i64,
    pub track_meet: TrackMeet,
    pub date: NaiveDate,
    pub athlete: Athlete,
    pub discipline: Discipline,
    pub measurement: Measurement,
}

impl ResultEntry {
    /// The kind tag of the populated measurement.
    #[must_use]
    pub const fn result_type(&self) -> ResultKind {
        self.measurement.kind()
    }
}

impl Entity for ResultEntry {
    type Draft = ResultDraft;
    const COLLECTION: Collection = Collection::Results;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} {}", self.athlete.name, self.discipline.name)
    }
}

/// Wire shape of a result: the tag plus three optional measurement fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultRecord {
    id: i64,
    track_meet: TrackMeet,
    #[serde(with = "iso_date")]
    date: NaiveDate,
    athlete: Athlete,
    discipline: Discipline,
    result_type: ResultKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    points: Option<i64>,
}

/// Picks the field named by the tag; the other two are ignored.
fn measurement_from_wire(
    kind: ResultKind,
    time: Option<String>,
    distance: Option<f64>,
    points: Option<i64>,
) -> std::result::Result<Measurement, String> {
    match kind {
        ResultKind::Time => time.map(Measurement::Time),
        ResultKind::Distance => distance.map(Measurement::Distance),
        ResultKind::Points => points.map(Measurement::Points),
    }
    .ok_or_else(|| format!("result of type {kind} has no {} value", kind.as_str().to_lowercase()))
}

fn measurement_to_wire(measurement: Measurement) -> (Option<String>, Option<f64>, Option<i64>) {
    match measurement {
        Measurement::Time(t) => (Some(t), None, None),
        Measurement::Distance(d) => (None, Some(d), None),
        Measurement::Points(p) => (None, None, Some(p)),
    }
}

impl TryFrom<ResultRecord> for ResultEntry {
    type Error = String;

    fn try_from(record: ResultRecord) -> std::result::Result<Self, Self::Error> {
        let measurement =
            measurement_from_wire(record.result_type, record.time, record.distance, record.points)?;
        Ok(Self {
            id: record.id,
            track_meet: record.track_meet,
            date: record.date,
            athlete: record.athlete,
            discipline: record.discipline,
            measurement,
        })
    }
}

impl From<ResultEntry> for ResultRecord {
    fn from(entry: ResultEntry) -> Self {
        let result_type = entry.measurement.kind();
        let (time, distance, points) = measurement_to_wire(entry.measurement);
        Self {
            id: entry.id,
            track_meet: entry.track_meet,
            date: entry.date,
            athlete: entry.athlete,
            discipline: entry.discipline,
            result_type,
            time,
            distance,
            points,
        }
    }
}

/// Partial result body for create/update requests.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(into = "ResultDraftRecord")]
pub struct ResultDraft {
    pub track_meet: Option<TrackMeet>,
    pub date: Option<NaiveDate>,
    pub athlete: Option<Athlete>,
    pub discipline: Option<Discipline>,
    pub measurement: Option<Measurement>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultDraftRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    track_meet: Option<TrackMeet>,
    #[serde(skip_serializing_if = "Option::is_none", with = "iso_date::option")]
    date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    athlete: Option<Athlete>,
    #[serde(skip_serializing_if = "Option::is_none")]
    discipline: Option<Discipline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result_type: Option<ResultKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<i64>,
}

impl From<ResultDraft> for ResultDraftRecord {
    fn from(draft: ResultDraft) -> Self {
        let result_type = draft.measurement.as_ref().map(Measurement::kind);
        let (time, distance, points) = draft
            .measurement
            .map_or((None, None, None), measurement_to_wire);
        Self {
            track_meet: draft.track_meet,
            date: draft.date,
            athlete: draft.athlete,
            discipline: draft.discipline,
            result_type,
            time,
            distance,
            points,
        }
    }
}

/// Parses a calendar date from either `YYYY-MM-DD` or a full ISO-8601 timestamp.
#[must_use]
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            input
                .get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{raw}'")))
    }

    pub mod option {
        use chrono::NaiveDate;
        use serde::Serializer;

        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}
