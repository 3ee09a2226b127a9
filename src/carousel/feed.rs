use thiserror::Error;

/// How many back-to-back copies of the catalog are rendered.
pub const COPIES: usize = 3;

#[derive(Error, Debug, PartialEq)]
pub enum FeedError {
    #[error("Feed needs at least one video source")]
    Empty,
}

/// The catalog repeated [`COPIES`] times so the list can fake an endless loop.
///
/// Slot `i` always plays `catalog[i % N]`. The middle copy is where the
/// feed starts, which leaves a full copy of room in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopedFeed {
    catalog: Vec<String>,
}

impl LoopedFeed {
    pub fn new(catalog: Vec<String>) -> Result<Self, FeedError> {
        if catalog.is_empty() {
            return Err(FeedError::Empty);
        }
        Ok(Self { catalog })
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn len(&self) -> usize {
        self.catalog.len() * COPIES
    }

    /// First slot of the middle copy.
    pub fn initial_index(&self) -> usize {
        self.catalog.len()
    }

    pub fn source_at(&self, slot: usize) -> &str {
        &self.catalog[slot % self.catalog.len()]
    }

    /// `(slot, source)` pairs in render order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        (0..self.len()).map(move |slot| (slot, self.source_at(slot)))
    }
}
