//! Reference entities: clubs, disciplines, track meets and generic items.

use super::entity::{null_as_default, Collection, Entity};
use serde::{Deserialize, Serialize};

/// An athletics club.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
}

impl Club {
    /// The placeholder club an athlete carries before one is assigned.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Whether this is the zero-value placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id == 0
    }
}

/// Gender classification of a discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisciplineGender {
    #[serde(rename = "MENS", alias = "MALE")]
    Male,
    #[serde(rename = "WOMENS", alias = "FEMALE")]
    Female,
    #[serde(rename = "MIXED")]
    Mixed,
}

/// How results in a discipline are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultKind {
    #[serde(rename = "TIME")]
    Time,
    #[serde(rename = "DISTANCE")]
    Distance,
    #[serde(rename = "POINTS")]
    Points,
}

impl ResultKind {
    /// Wire tag of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "TIME",
            Self::Distance => "DISTANCE",
            Self::Points => "POINTS",
        }
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A competition discipline such as "100m" or "Long Jump".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: i64,
    pub name: String,
    pub gender: DisciplineGender,
    pub result_type: ResultKind,
}

/// A named track meet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackMeet {
    pub id: i64,
    pub name: String,
}

/// A generic named record with its own page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Partial item body for create/update requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ItemDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity for Item {
    type Draft = ItemDraft;
    const COLLECTION: Collection = Collection::Items;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discipline_accepts_both_gender_spellings() {
        let mens: Discipline = serde_json::from_str(
            r#"{"id":1,"name":"100m","gender":"MENS","resultType":"TIME"}"#,
        )
        .unwrap();
        let male: Discipline = serde_json::from_str(
            r#"{"id":1,"name":"100m","gender":"MALE","resultType":"TIME"}"#,
        )
        .unwrap();
        assert_eq!(mens, male);
        assert_eq!(mens.result_type, ResultKind::Time);
    }

    #[test]
    fn club_city_may_be_null_or_absent() {
        let with_null: Club = serde_json::from_str(r#"{"id":3,"name":"Hermes","city":null}"#).unwrap();
        let without: Club = serde_json::from_str(r#"{"id":3,"name":"Hermes"}"#).unwrap();
        assert_eq!(with_null, without);
        assert_eq!(with_null.city, "");
    }

    #[test]
    fn empty_item_draft_serializes_to_empty_object() {
        let json = serde_json::to_string(&ItemDraft::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
