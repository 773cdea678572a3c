//! Result form.
//!
//! The discipline choices are the selected athlete's disciplines. Picking a
//! discipline fixes the result kind and clears any entered measurement; the
//! measurement is then parsed according to that kind.

use super::{parse_id, required, unknown_field, FieldView, FormContext};
use crate::domain::error::{Result, TracksideError};
use crate::domain::{
    parse_iso_date, Athlete, Discipline, Measurement, ResultDraft, ResultEntry, ResultKind,
    TrackMeet,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultForm {
    pub track_meet: Option<TrackMeet>,
    pub date: Option<NaiveDate>,
    pub athlete: Option<Athlete>,
    pub discipline: Option<Discipline>,
    pub measurement: Option<Measurement>,
}

impl ResultForm {
    /// A form prefilled from an existing result.
    #[must_use]
    pub fn from_result(entry: &ResultEntry) -> Self {
        Self {
            track_meet: Some(entry.track_meet.clone()),
            date: Some(entry.date),
            athlete: Some(entry.athlete.clone()),
            discipline: Some(entry.discipline.clone()),
            measurement: Some(entry.measurement.clone()),
        }
    }

    /// Kind of measurement the selected discipline expects.
    #[must_use]
    pub fn kind(&self) -> Option<ResultKind> {
        self.discipline.as_ref().map(|d| d.result_type)
    }

    /// Disciplines selectable for the current athlete.
    #[must_use]
    pub fn discipline_options(&self) -> &[Discipline] {
        match &self.athlete {
            Some(athlete) => &athlete.disciplines,
            None => &[],
        }
    }

    pub(super) fn set(&mut self, field: &str, value: &str, ctx: &FormContext<'_>) -> Result<()> {
        let value = value.trim();
        match field {
            "trackMeet" | "meet" => {
                let id = parse_id("trackMeet", value)?;
                let meet = ctx
                    .catalog
                    .track_meet(id)
                    .ok_or_else(|| TracksideError::invalid(format!("unknown track meet {id}")))?;
                self.track_meet = Some(meet.clone());
            }
            "date" => {
                let date = parse_iso_date(value).ok_or_else(|| {
                    TracksideError::invalid(format!("'{value}' is not a date, expected YYYY-MM-DD"))
                })?;
                self.date = Some(date);
            }
            "athlete" => {
                let id = parse_id("athlete", value)?;
                let athlete = ctx
                    .athletes
                    .iter()
                    .find(|a| a.id == id)
                    .ok_or_else(|| TracksideError::invalid(format!("unknown athlete {id}")))?;
                let keeps_discipline = self
                    .discipline
                    .as_ref()
                    .is_some_and(|d| athlete.disciplines.iter().any(|o| o.id == d.id));
                if !keeps_discipline {
                    self.discipline = None;
                    self.measurement = None;
                }
                self.athlete = Some(athlete.clone());
            }
            "discipline" => {
                if self.athlete.is_none() {
                    return Err(TracksideError::invalid("select an athlete first"));
                }
                let id = parse_id("discipline", value)?;
                let discipline = self
                    .discipline_options()
                    .iter()
                    .find(|d| d.id == id)
                    .cloned()
                    .ok_or_else(|| {
                        TracksideError::invalid(format!("discipline {id} is not one of the athlete's disciplines"))
                    })?;
                self.discipline = Some(discipline);
                self.measurement = None;
            }
            "result" | "time" | "distance" | "points" => {
                let kind = self
                    .kind()
                    .ok_or_else(|| TracksideError::invalid("select a discipline first"))?;
                if field != "result" && field != kind.as_str().to_lowercase() {
                    return Err(TracksideError::invalid(format!(
                        "this discipline is measured in {}",
                        kind.as_str().to_lowercase()
                    )));
                }
                self.measurement = Some(Measurement::parse(kind, value)?);
            }
            other => return Err(unknown_field(other)),
        }
        Ok(())
    }

    pub(super) fn fields(&self, ctx: &FormContext<'_>) -> Vec<FieldView> {
        let meet_options = ctx
            .catalog
            .track_meets
            .iter()
            .map(|m| format!("{}: {}", m.id, m.name))
            .collect();
        let athlete_options = ctx
            .athletes
            .iter()
            .map(|a| format!("{}: {}", a.id, a.name))
            .collect();
        let discipline_options = self
            .discipline_options()
            .iter()
            .map(|d| format!("{}: {}", d.id, d.name))
            .collect();
        let result_label = match self.kind() {
            Some(ResultKind::Time) => "Time hh:mm:ss.SS",
            Some(ResultKind::Distance) => "Distance",
            Some(ResultKind::Points) => "Points",
            None => "Result",
        };

        let mut fields = vec![
            FieldView::select(
                "trackMeet",
                "Track Meet",
                self.track_meet.as_ref().map(|m| m.name.clone()).unwrap_or_default(),
                meet_options,
            ),
            FieldView::text(
                "date",
                "Date",
                self.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                true,
            ),
            FieldView::select(
                "athlete",
                "Athlete",
                self.athlete.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
                athlete_options,
            ),
        ];
        if self.athlete.is_some() {
            fields.push(FieldView::select(
                "discipline",
                "Discipline",
                self.discipline.as_ref().map(|d| d.name.clone()).unwrap_or_default(),
                discipline_options,
            ));
        }
        if self.kind().is_some() {
            fields.push(FieldView::text(
                "result",
                result_label,
                self.measurement.as_ref().map(ToString::to_string).unwrap_or_default(),
                true,
            ));
        }
        fields
    }

    /// # Errors
    ///
    /// Fails on the first missing required field.
    pub fn to_draft(&self) -> Result<ResultDraft> {
        let track_meet = self.track_meet.clone().ok_or_else(|| required("Track Meet"))?;
        let date = self.date.ok_or_else(|| required("Date"))?;
        let athlete = self.athlete.clone().ok_or_else(|| required("Athlete"))?;
        let discipline = self.discipline.clone().ok_or_else(|| required("Discipline"))?;
        let measurement = self.measurement.clone().ok_or_else(|| required("Result"))?;

        Ok(ResultDraft {
            track_meet: Some(track_meet),
            date: Some(date),
            athlete: Some(athlete),
            discipline: Some(discipline),
            measurement: Some(measurement),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Club, DisciplineGender};
    use crate::store::Catalog;

    fn discipline(id: i64, name: &str, kind: ResultKind) -> Discipline {
        Discipline {
            id,
            name: name.into(),
            gender: DisciplineGender::Female,
            result_type: kind,
        }
    }

    fn athlete(id: i64, disciplines: Vec<Discipline>) -> Athlete {
        Athlete {
            id,
            name: format!("Athlete {id}"),
            gender: "F".into(),
            age: 20,
            image_url: String::new(),
            age_group: "SENIOR".into(),
            club: Club::placeholder(),
            disciplines,
        }
    }

    fn fixtures() -> (Catalog, Vec<Athlete>) {
        let sprint = discipline(1, "100m", ResultKind::Time);
        let jump = discipline(2, "Long Jump", ResultKind::Distance);
        let catalog = Catalog {
            clubs: vec![],
            disciplines: vec![sprint.clone(), jump.clone()],
            track_meets: vec![TrackMeet {
                id: 1,
                name: "Spring Open".into(),
            }],
        };
        let athletes = vec![athlete(1, vec![sprint, jump.clone()]), athlete(2, vec![jump])];
        (catalog, athletes)
    }

    #[test]
    fn discipline_choice_is_limited_to_the_athlete() {
        let (catalog, athletes) = fixtures();
        let ctx = FormContext {
            catalog: &catalog,
            athletes: &athletes,
        };
        let mut form = ResultForm::default();
        assert!(form.set("discipline", "1", &ctx).is_err());

        form.set("athlete", "2", &ctx).unwrap();
        assert!(form.set("discipline", "1", &ctx).is_err());
        form.set("discipline", "2", &ctx).unwrap();
        assert_eq!(form.kind(), Some(ResultKind::Distance));
    }

    #[test]
    fn changing_discipline_clears_measurement() {
        let (catalog, athletes) = fixtures();
        let ctx = FormContext {
            catalog: &catalog,
            athletes: &athletes,
        };
        let mut form = ResultForm::default();
        form.set("athlete", "1", &ctx).unwrap();
        form.set("discipline", "2", &ctx).unwrap();
        form.set("distance", "6.4", &ctx).unwrap();
        assert_eq!(form.measurement, Some(Measurement::Distance(6.4)));

        form.set("discipline", "1", &ctx).unwrap();
        assert_eq!(form.measurement, None);
        assert!(form.set("distance", "6.4", &ctx).is_err());
        form.set("result", "00:00:12.10", &ctx).unwrap();
        assert_eq!(form.measurement, Some(Measurement::Time("00:00:12.10".into())));
    }

    #[test]
    fn complete_form_builds_draft() {
        let (catalog, athletes) = fixtures();
        let ctx = FormContext {
            catalog: &catalog,
            athletes: &athletes,
        };
        let mut form = ResultForm::default();
        form.set("trackMeet", "1", &ctx).unwrap();
        form.set("date", "2024-06-01T10:00:00.000Z", &ctx).unwrap();
        form.set("athlete", "2", &ctx).unwrap();
        assert_eq!(form.to_draft().unwrap_err().user_message(), "Discipline is required");
        form.set("discipline", "2", &ctx).unwrap();
        form.set("result", "6.02", &ctx).unwrap();

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(draft.measurement, Some(Measurement::Distance(6.02)));
    }
}
