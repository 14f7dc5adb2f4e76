//! In-memory catalog cache.
//!
//! [`CatalogStore`] owns the place collection and the per-place review
//! lists for the current page view. The snapshot is rebuilt wholesale on
//! each reload and swapped in one write, so readers never observe a
//! half-loaded catalog.

use std::collections::HashMap;

use casabnb_core::{Place, PlaceId, Review};
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::api::{ApiError, RentalApi};

/// Immutable view of the loaded catalog.
///
/// Places keep the backend's ordering. Every key in the review map is the
/// id of a place in the collection; reviews are never fetched for an
/// unknown place.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    places: Vec<Place>,
    reviews: HashMap<PlaceId, Vec<Review>>,
}

impl CatalogSnapshot {
    /// The cached places, in backend order.
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Reviews for one place; empty when the place is unknown or its
    /// reviews could not be loaded.
    #[must_use]
    pub fn reviews_for(&self, id: &PlaceId) -> &[Review] {
        self.reviews.get(id).map_or(&[][..], Vec::as_slice)
    }

    /// The full place-to-reviews mapping.
    #[must_use]
    pub fn reviews(&self) -> &HashMap<PlaceId, Vec<Review>> {
        &self.reviews
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Owner of the catalog cache and the fetch cycle that populates it.
pub struct CatalogStore<C> {
    api: C,
    snapshot: RwLock<CatalogSnapshot>,
}

impl<C: RentalApi> CatalogStore<C> {
    /// Create an empty store backed by the given API client.
    pub fn new(api: C) -> Self {
        Self {
            api,
            snapshot: RwLock::new(CatalogSnapshot::default()),
        }
    }

    /// Rebuild the snapshot from the backend.
    ///
    /// Fetches the full place collection, then each place's reviews
    /// sequentially in backend order. A failure on one place's reviews is
    /// isolated: that list stays empty and the cycle continues. The new
    /// snapshot replaces the old one in a single write.
    ///
    /// # Errors
    ///
    /// Propagates the failure when the place collection itself cannot be
    /// fetched; the store is left empty so the caller can render an error
    /// state instead of a stale catalog.
    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<(), ApiError> {
        let places = match self.api.list_places().await {
            Ok(places) => places,
            Err(err) => {
                *self.snapshot.write().await = CatalogSnapshot::default();
                return Err(err);
            }
        };

        let mut reviews = HashMap::with_capacity(places.len());
        // One place at a time, in backend order: progress and failures
        // stay attributable to a single listing.
        for place in &places {
            match self.api.list_reviews(&place.id).await {
                Ok(list) => {
                    reviews.insert(place.id.clone(), list);
                }
                Err(err) => {
                    warn!(place_id = %place.id, error = %err, "reviews unavailable, continuing");
                    reviews.insert(place.id.clone(), Vec::new());
                }
            }
        }

        info!(places = places.len(), "catalog reloaded");
        *self.snapshot.write().await = CatalogSnapshot { places, reviews };
        Ok(())
    }

    /// Current snapshot (cheap clone of the cached data).
    pub async fn snapshot(&self) -> CatalogSnapshot {
        self.snapshot.read().await.clone()
    }
}
