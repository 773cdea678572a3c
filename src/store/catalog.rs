//! Read-only reference data: clubs, disciplines and track meets.

use crate::domain::error::Result;
use crate::domain::{CatalogKind, Club, Discipline, TrackMeet};
use crate::gateway::{client, Gateway};
use tracing::Instrument;

/// Reference collections used by forms and the results filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub clubs: Vec<Club>,
    pub disciplines: Vec<Discipline>,
    pub track_meets: Vec<TrackMeet>,
}

impl Catalog {
    /// Whether nothing has been loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty() && self.disciplines.is_empty() && self.track_meets.is_empty()
    }

    /// Loads all three collections.
    ///
    /// # Errors
    ///
    /// Returns the first failure; nothing is returned partially.
    pub async fn load<G: Gateway + ?Sized>(gateway: &G) -> Result<Self> {
        async {
            let catalog = Self {
                clubs: fetch_clubs(gateway).await?,
                disciplines: fetch_disciplines(gateway).await?,
                track_meets: fetch_track_meets(gateway).await?,
            };
            tracing::debug!(
                clubs = catalog.clubs.len(),
                disciplines = catalog.disciplines.len(),
                track_meets = catalog.track_meets.len(),
                "catalog loaded"
            );
            Ok(catalog)
        }
        .instrument(tracing::debug_span!("catalog_load"))
        .await
    }

    #[must_use]
    pub fn club(&self, id: i64) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn discipline(&self, id: i64) -> Option<&Discipline> {
        self.disciplines.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn track_meet(&self, id: i64) -> Option<&TrackMeet> {
        self.track_meets.iter().find(|m| m.id == id)
    }

    /// Distinct discipline names in catalog order, for the results filter.
    #[must_use]
    pub fn discipline_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for discipline in &self.disciplines {
            if !names.contains(&discipline.name) {
                names.push(discipline.name.clone());
            }
        }
        names
    }
}

/// # Errors
///
/// Propagates gateway and decode failures.
pub async fn fetch_clubs<G: Gateway + ?Sized>(gateway: &G) -> Result<Vec<Club>> {
    client::fetch_catalog(gateway, CatalogKind::Clubs).await
}

/// # Errors
///
/// Propagates gateway and decode failures.
pub async fn fetch_disciplines<G: Gateway + ?Sized>(gateway: &G) -> Result<Vec<Discipline>> {
    client::fetch_catalog(gateway, CatalogKind::Disciplines).await
}

/// # Errors
///
/// Propagates gateway and decode failures.
pub async fn fetch_track_meets<G: Gateway + ?Sized>(gateway: &G) -> Result<Vec<TrackMeet>> {
    client::fetch_catalog(gateway, CatalogKind::TrackMeets).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{routes, MemoryGateway, Verb};

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn loads_all_reference_collections() {
        let gateway = MemoryGateway::with_demo_data();
        let catalog = block_on(Catalog::load(&gateway)).unwrap();
        assert_eq!(catalog.clubs.len(), 2);
        assert_eq!(catalog.track_meets.len(), 2);
        assert_eq!(catalog.discipline_names(), vec!["100m", "Long Jump", "Decathlon"]);
    }

    #[test]
    fn errors_propagate_to_caller() {
        let gateway = MemoryGateway::with_demo_data();
        gateway.fail_on(Verb::Get, &routes::all("trackmeets"), 503);
        let err = block_on(Catalog::load(&gateway)).unwrap_err();
        assert_eq!(err.status(), Some(503));
    }
}
