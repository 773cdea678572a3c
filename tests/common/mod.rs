//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use trackside::domain::{
    Athlete, Club, Discipline, DisciplineGender, Item, Measurement, ResultEntry, ResultKind, TrackMeet,
};

pub fn club(id: i64, name: &str) -> Club {
    Club {
        id,
        name: name.to_string(),
        city: String::new(),
    }
}

pub fn discipline(id: i64, name: &str, result_type: ResultKind) -> Discipline {
    Discipline {
        id,
        name: name.to_string(),
        gender: DisciplineGender::Mixed,
        result_type,
    }
}

pub fn athlete(id: i64, name: &str, gender: &str, age: u32, club: Club) -> Athlete {
    Athlete {
        id,
        name: name.to_string(),
        gender: gender.to_string(),
        age,
        image_url: String::new(),
        age_group: "SENIOR".to_string(),
        club,
        disciplines: Vec::new(),
    }
}

pub fn result(id: i64, athlete: Athlete, discipline: Discipline, measurement: Measurement) -> ResultEntry {
    ResultEntry {
        id,
        track_meet: TrackMeet {
            id: 1,
            name: "Spring Open".to_string(),
        },
        date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap_or_default(),
        athlete,
        discipline,
        measurement,
    }
}

/// Ann (F, 100m) and Bob (M, Long Jump).
pub fn ann_and_bob() -> Vec<ResultEntry> {
    let ann = athlete(1, "Ann", "F", 24, club(1, "Zeta"));
    let bob = athlete(2, "Bob", "M", 30, club(2, "Alpha"));
    vec![
        result(
            1,
            ann,
            discipline(1, "100m", ResultKind::Time),
            Measurement::Time("00:00:11.84".to_string()),
        ),
        result(
            2,
            bob,
            discipline(3, "Long Jump", ResultKind::Distance),
            Measurement::Distance(7.1),
        ),
    ]
}

pub fn items(names: &[&str]) -> Vec<Item> {
    (1..)
        .zip(names)
        .map(|(id, name)| Item {
            id,
            name: (*name).to_string(),
        })
        .collect()
}

pub fn ids<T>(entries: &[T], id: impl Fn(&T) -> i64) -> Vec<i64> {
    entries.iter().map(id).collect()
}
