//! Athlete form.
//!
//! Club and disciplines are chosen by id from the catalog. Disciplines are
//! given as a comma separated id list and collapse repeated ids.

use super::{parse_id, required, unknown_field, FieldView};
use crate::domain::athlete::dedup_disciplines;
use crate::domain::error::{Result, TracksideError};
use crate::domain::{Athlete, AthleteDraft, Club, Discipline};
use crate::store::Catalog;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteForm {
    pub name: String,
    pub gender: String,
    pub age: Option<u32>,
    pub image_url: String,
    pub club: Club,
    pub disciplines: Vec<Discipline>,
}

impl AthleteForm {
    /// A form prefilled from an existing athlete.
    #[must_use]
    pub fn from_athlete(athlete: &Athlete) -> Self {
        Self {
            name: athlete.name.clone(),
            gender: athlete.gender.clone(),
            age: Some(athlete.age),
            image_url: athlete.image_url.clone(),
            club: athlete.club.clone(),
            disciplines: athlete.disciplines.clone(),
        }
    }

    pub(super) fn set(&mut self, field: &str, value: &str, catalog: &Catalog) -> Result<()> {
        let value = value.trim();
        match field {
            "name" => self.name = value.to_string(),
            "gender" => {
                let code = value.to_uppercase();
                if code != "M" && code != "F" {
                    return Err(TracksideError::invalid("gender must be M or F"));
                }
                self.gender = code;
            }
            "age" => {
                let age = value
                    .parse::<u32>()
                    .map_err(|_| TracksideError::invalid(format!("'{value}' is not an age")))?;
                self.age = Some(age);
            }
            "imageUrl" | "image" => self.image_url = value.to_string(),
            "club" => {
                let id = parse_id("club", value)?;
                let club = catalog
                    .club(id)
                    .ok_or_else(|| TracksideError::invalid(format!("unknown club {id}")))?;
                self.club = club.clone();
            }
            "disciplines" => {
                let mut chosen = Vec::new();
                for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                    let id = parse_id("disciplines", part)?;
                    let discipline = catalog
                        .discipline(id)
                        .ok_or_else(|| TracksideError::invalid(format!("unknown discipline {id}")))?;
                    chosen.push(discipline.clone());
                }
                self.disciplines = dedup_disciplines(chosen);
            }
            other => return Err(unknown_field(other)),
        }
        Ok(())
    }

    pub(super) fn fields(&self, catalog: &Catalog) -> Vec<FieldView> {
        let club_options = catalog
            .clubs
            .iter()
            .map(|c| format!("{}: {}", c.id, c.name))
            .collect();
        let discipline_options = catalog
            .disciplines
            .iter()
            .map(|d| format!("{}: {} ({:?})", d.id, d.name, d.gender))
            .collect();
        let club = if self.club.is_placeholder() {
            String::new()
        } else {
            self.club.name.clone()
        };

        vec![
            FieldView::text("name", "Name", self.name.clone(), true),
            FieldView::text("gender", "Gender M/F", self.gender.clone(), true),
            FieldView::text(
                "age",
                "Age",
                self.age.map(|a| a.to_string()).unwrap_or_default(),
                true,
            ),
            FieldView::text("imageUrl", "Image URL", self.image_url.clone(), false),
            FieldView::select("club", "Club", club, club_options),
            FieldView::select(
                "disciplines",
                "Disciplines",
                self.disciplines
                    .iter()
                    .map(|d| d.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                discipline_options,
            ),
        ]
    }

    /// # Errors
    ///
    /// Fails on the first missing required field.
    pub fn to_draft(&self) -> Result<AthleteDraft> {
        if self.name.is_empty() {
            return Err(required("Name"));
        }
        if self.gender.is_empty() {
            return Err(required("Gender"));
        }
        let age = self.age.ok_or_else(|| required("Age"))?;
        if self.club.is_placeholder() {
            return Err(required("Club"));
        }
        if self.disciplines.is_empty() {
            return Err(required("Disciplines"));
        }

        Ok(AthleteDraft {
            name: Some(self.name.clone()),
            gender: Some(self.gender.clone()),
            age: Some(age),
            image_url: Some(self.image_url.clone()),
            club: Some(self.club.clone()),
            disciplines: Some(self.disciplines.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DisciplineGender, ResultKind};

    fn catalog() -> Catalog {
        Catalog {
            clubs: vec![Club {
                id: 1,
                name: "Aarhus 1900".into(),
                city: "Aarhus".into(),
            }],
            disciplines: vec![
                Discipline {
                    id: 1,
                    name: "100m".into(),
                    gender: DisciplineGender::Female,
                    result_type: ResultKind::Time,
                },
                Discipline {
                    id: 2,
                    name: "Long Jump".into(),
                    gender: DisciplineGender::Female,
                    result_type: ResultKind::Distance,
                },
            ],
            track_meets: vec![],
        }
    }

    #[test]
    fn builds_full_draft_from_valid_fields() {
        let catalog = catalog();
        let mut form = AthleteForm::default();
        for (field, value) in [
            ("name", "Ann"),
            ("gender", "f"),
            ("age", "24"),
            ("club", "1"),
            ("disciplines", "2, 1, 2"),
        ] {
            form.set(field, value, &catalog).unwrap();
        }

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.gender.as_deref(), Some("F"));
        assert_eq!(draft.club.map(|c| c.name), Some("Aarhus 1900".to_string()));
        let ids: Vec<i64> = draft.disciplines.unwrap().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn rejects_values_outside_catalog() {
        let catalog = catalog();
        let mut form = AthleteForm::default();
        assert!(form.set("club", "9", &catalog).is_err());
        assert!(form.set("disciplines", "1,x", &catalog).is_err());
        assert!(form.set("gender", "X", &catalog).is_err());
        assert!(form.club.is_placeholder());
        assert!(form.disciplines.is_empty());
    }

    #[test]
    fn missing_club_blocks_submit() {
        let catalog = catalog();
        let mut form = AthleteForm::default();
        form.set("name", "Ann", &catalog).unwrap();
        form.set("gender", "F", &catalog).unwrap();
        form.set("age", "24", &catalog).unwrap();
        let err = form.to_draft().unwrap_err();
        assert_eq!(err.user_message(), "Club is required");
    }
}
