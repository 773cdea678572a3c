//! Athlete domain model.
//!
//! Athletes belong to exactly one club (a zero-value placeholder until one is
//! assigned) and compete in an ordered set of disciplines with unique
//! identities.

use super::catalog::{Club, Discipline};
use super::entity::{null_as_default, Collection, Entity};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// An athlete as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(rename = "athleteAgeGroupEnum", default, deserialize_with = "null_as_default")]
    pub age_group: String,
    // `club: null` is the placeholder, not an error.
    #[serde(default, deserialize_with = "null_as_default")]
    pub club: Club,
    #[serde(default, deserialize_with = "deserialize_disciplines")]
    pub disciplines: Vec<Discipline>,
}

impl Athlete {
    /// Comma separated discipline names, in stored order.
    #[must_use]
    pub fn discipline_names(&self) -> String {
        self.disciplines
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Entity for Athlete {
    type Draft = AthleteDraft;
    const COLLECTION: Collection = Collection::Athletes;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// Partial athlete body for create/update requests.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<Club>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disciplines: Option<Vec<Discipline>>,
}

/// Drops repeated discipline identities, keeping the first occurrence.
#[must_use]
pub fn dedup_disciplines(disciplines: Vec<Discipline>) -> Vec<Discipline> {
    let mut seen = HashSet::new();
    disciplines
        .into_iter()
        .filter(|d| seen.insert(d.id))
        .collect()
}

fn deserialize_disciplines<'de, D>(deserializer: D) -> Result<Vec<Discipline>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Discipline>>::deserialize(deserializer)?;
    Ok(dedup_disciplines(raw.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_names_and_defaults() {
        let athlete: Athlete = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Ann",
                "gender": "F",
                "age": 23,
                "imageUrl": "https://example.org/ann.png",
                "athleteAgeGroupEnum": "SENIOR",
                "club": null
            }"#,
        )
        .unwrap();

        assert_eq!(athlete.age_group, "SENIOR");
        assert_eq!(athlete.image_url, "https://example.org/ann.png");
        assert!(athlete.club.is_placeholder());
        assert!(athlete.disciplines.is_empty());
    }

    #[test]
    fn null_optional_fields_fall_back_to_defaults() {
        let athlete: Athlete = serde_json::from_str(
            r#"{
                "id": 8,
                "name": "Dan",
                "gender": null,
                "age": null,
                "imageUrl": null,
                "athleteAgeGroupEnum": null,
                "club": {"id": 2, "name": "Sparta", "city": null},
                "disciplines": null
            }"#,
        )
        .unwrap();

        assert_eq!(athlete.gender, "");
        assert_eq!(athlete.age, 0);
        assert_eq!(athlete.image_url, "");
        assert_eq!(athlete.age_group, "");
        assert_eq!(athlete.club.name, "Sparta");
        assert_eq!(athlete.club.city, "");
        assert!(athlete.disciplines.is_empty());
    }

    #[test]
    fn only_id_and_name_are_required() {
        let athlete: Athlete = serde_json::from_str(r#"{"id": 9, "name": "Eva"}"#).unwrap();
        assert!(athlete.club.is_placeholder());
        assert_eq!(athlete.image_url, "");

        assert!(serde_json::from_str::<Athlete>(r#"{"id": 9, "name": null}"#).is_err());
    }

    #[test]
    fn repeated_disciplines_are_collapsed() {
        let athlete: Athlete = serde_json::from_str(
            r#"{
                "id": 1, "name": "Bob",
                "disciplines": [
                    {"id": 2, "name": "Long Jump", "gender": "MENS", "resultType": "DISTANCE"},
                    {"id": 2, "name": "Long Jump", "gender": "MENS", "resultType": "DISTANCE"},
                    {"id": 3, "name": "100m", "gender": "MENS", "resultType": "TIME"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(athlete.discipline_names(), "Long Jump, 100m");
    }

    #[test]
    fn draft_skips_unset_fields() {
        let draft = AthleteDraft {
            name: Some("Ann".to_string()),
            image_url: Some(String::new()),
            ..AthleteDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ann", "imageUrl": ""}));
    }
}
