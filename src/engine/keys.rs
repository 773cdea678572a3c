//! Sortable keys.
//!
//! Each entity has a closed set of keys, each named by the dotted path the
//! table headers use (`"club.name"`, `"trackMeet.name"`) and mapped to an
//! extractor returning a [`SortValue`]. Names outside the set resolve to
//! `None`, which callers treat as "no sort".

use crate::domain::{Athlete, Item, Measurement, ResultEntry};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt::Debug;

/// A value extracted from an entity for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    /// The entity has no value for the key.
    Missing,
    Int(i64),
    Float(f64),
    Text(&'a str),
    Date(NaiveDate),
}

impl SortValue<'_> {
    const fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Int(_) | Self::Float(_) => 1,
            Self::Text(_) => 2,
            Self::Date(_) => 3,
        }
    }

    /// Total order: missing first, numbers numerically, text lexicographically,
    /// dates chronologically. Values of unrelated kinds order by kind.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn text(value: &str) -> SortValue<'_> {
    if value.is_empty() {
        SortValue::Missing
    } else {
        SortValue::Text(value)
    }
}

/// A closed set of sortable keys for entity `E`.
pub trait SortKey<E>: Copy + Eq + Debug + 'static {
    /// Every key, in column order.
    const ALL: &'static [Self];

    /// Dotted name of the key.
    fn name(self) -> &'static str;

    /// Extracts this key's value from an entity.
    fn extract(self, entity: &E) -> SortValue<'_>;

    /// Resolves a name to a key; `None` for names outside the set.
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

/// Sortable athlete columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AthleteSortKey {
    Id,
    Name,
    Age,
    Gender,
    AgeGroup,
    ClubName,
}

impl SortKey<Athlete> for AthleteSortKey {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Age,
        Self::Gender,
        Self::AgeGroup,
        Self::ClubName,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::AgeGroup => "athleteAgeGroupEnum",
            Self::ClubName => "club.name",
        }
    }

    fn extract(self, athlete: &Athlete) -> SortValue<'_> {
        match self {
            Self::Id => SortValue::Int(athlete.id),
            Self::Name => text(&athlete.name),
            Self::Age => SortValue::Int(i64::from(athlete.age)),
            Self::Gender => text(&athlete.gender),
            Self::AgeGroup => text(&athlete.age_group),
            Self::ClubName => text(&athlete.club.name),
        }
    }
}

/// Sortable result columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultSortKey {
    TrackMeetName,
    Date,
    AthleteName,
    DisciplineName,
    ResultType,
    Result,
}

impl SortKey<ResultEntry> for ResultSortKey {
    const ALL: &'static [Self] = &[
        Self::TrackMeetName,
        Self::Date,
        Self::AthleteName,
        Self::DisciplineName,
        Self::ResultType,
        Self::Result,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::TrackMeetName => "trackMeet.name",
            Self::Date => "date",
            Self::AthleteName => "athlete.name",
            Self::DisciplineName => "discipline.name",
            Self::ResultType => "resultType",
            Self::Result => "result",
        }
    }

    fn extract(self, entry: &ResultEntry) -> SortValue<'_> {
        match self {
            Self::TrackMeetName => text(&entry.track_meet.name),
            Self::Date => SortValue::Date(entry.date),
            Self::AthleteName => text(&entry.athlete.name),
            Self::DisciplineName => text(&entry.discipline.name),
            Self::ResultType => SortValue::Text(entry.result_type().as_str()),
            Self::Result => match &entry.measurement {
                Measurement::Time(t) => text(t),
                Measurement::Distance(d) => SortValue::Float(*d),
                Measurement::Points(p) => SortValue::Int(*p),
            },
        }
    }
}

/// Sortable item columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemSortKey {
    Id,
    Name,
}

impl SortKey<Item> for ItemSortKey {
    const ALL: &'static [Self] = &[Self::Id, Self::Name];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }

    fn extract(self, item: &Item) -> SortValue<'_> {
        match self {
            Self::Id => SortValue::Int(item.id),
            Self::Name => text(&item.name),
        }
    }
}
