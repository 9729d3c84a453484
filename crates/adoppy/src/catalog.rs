//! Catalog provisioning.
//!
//! The catalog is an ordered sequence of puppies, fixed at process start.
//! Screens never own the data; they borrow it from a [`CatalogSource`], the
//! explicit data-provisioning collaborator that keeps the hand-authored list
//! out of presentation code. Insertion order is display order.

use crate::puppy::{Breed, Gender, Puppy};

/// Provides the fixed, ordered catalog of adoptable puppies.
pub trait CatalogSource {
    /// The catalog in display order.
    fn puppies(&self) -> &[Puppy];

    /// Number of entries in the catalog.
    fn len(&self) -> usize {
        self.puppies().len()
    }

    /// Whether the catalog is empty.
    fn is_empty(&self) -> bool {
        self.puppies().is_empty()
    }
}

/// The hand-authored sample catalog shipped with the demo.
#[derive(Debug, Clone)]
pub struct SampleCatalog {
    puppies: Vec<Puppy>,
}

impl SampleCatalog {
    /// Build the sample catalog. Note the deliberately similar names: the
    /// catalog does not require names to be unique.
    #[must_use]
    pub fn new() -> Self {
        Self {
            puppies: vec![
                Puppy::new("Haru", 1, Breed::Corgi, Gender::Male),
                Puppy::new("Boltie", 2, Breed::Pug, Gender::Female),
                Puppy::new("Max", 4, Breed::Corgi, Gender::Female),
                Puppy::new("Bolt", 3, Breed::Pug, Gender::Male),
            ],
        }
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for SampleCatalog {
    fn puppies(&self) -> &[Puppy] {
        &self.puppies
    }
}

/// A catalog over an arbitrary sequence. Primarily used by tests that need
/// catalogs other than the shipped sample (including the empty one).
#[derive(Debug, Clone, Default)]
pub struct FixedCatalog {
    puppies: Vec<Puppy>,
}

impl FixedCatalog {
    /// Create a catalog from the given sequence; order is preserved.
    #[must_use]
    pub fn new(puppies: Vec<Puppy>) -> Self {
        Self { puppies }
    }
}

impl CatalogSource for FixedCatalog {
    fn puppies(&self) -> &[Puppy] {
        &self.puppies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_order() {
        let catalog = SampleCatalog::new();
        let names: Vec<&str> = catalog.puppies().iter().map(Puppy::name).collect();
        assert_eq!(names, ["Haru", "Boltie", "Max", "Bolt"]);
    }

    #[test]
    fn test_sample_catalog_contents() {
        let catalog = SampleCatalog::new();
        let haru = &catalog.puppies()[0];
        assert_eq!(haru.age(), 1);
        assert_eq!(haru.breed(), Breed::Corgi);
        assert_eq!(haru.gender(), Gender::Male);
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_fixed_catalog_preserves_order() {
        let pups = vec![
            Puppy::new("B", 2, Breed::Pug, Gender::Female),
            Puppy::new("A", 1, Breed::Corgi, Gender::Male),
        ];
        let catalog = FixedCatalog::new(pups.clone());
        assert_eq!(catalog.puppies(), pups.as_slice());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = FixedCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
