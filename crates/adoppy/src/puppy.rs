//! The puppy data model.
//!
//! A [`Puppy`] is an immutable value: every field is set at construction and
//! only exposed through accessors. [`Breed`] and [`Gender`] are closed
//! enumerations; their display mappings are exhaustive `match`es with no
//! fallback arm, so an unmapped value cannot exist past compilation.

use serde::{Deserialize, Serialize};

/// Breed of a puppy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Breed {
    Corgi,
    Pug,
}

impl Breed {
    /// Get the display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Corgi => "Corgi",
            Self::Pug => "Pug",
        }
    }

    /// All breeds in the catalog's closed set.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Corgi, Self::Pug]
    }
}

/// Gender of a puppy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Get the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// All genders in the closed set.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Male, Self::Female]
    }
}

/// An adoptable puppy.
///
/// Structural equality only: no identity beyond the field values, and the
/// catalog places no uniqueness constraint on names (the sample data has
/// near-duplicates on purpose).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puppy {
    name: String,
    age: u8,
    breed: Breed,
    gender: Gender,
}

impl Puppy {
    /// Create a new puppy. `age` is in whole years and must be positive.
    #[must_use]
    pub fn new(name: impl Into<String>, age: u8, breed: Breed, gender: Gender) -> Self {
        debug_assert!(age >= 1, "puppy age must be a positive number of years");
        Self {
            name: name.into(),
            age,
            breed,
            gender,
        }
    }

    /// The puppy's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age in whole years.
    #[must_use]
    pub const fn age(&self) -> u8 {
        self.age
    }

    /// The puppy's breed.
    #[must_use]
    pub const fn breed(&self) -> Breed {
        self.breed
    }

    /// The puppy's gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Human-readable age, singular below two years: "1 year old",
    /// "3 years old".
    #[must_use]
    pub fn age_label(&self) -> String {
        let unit = if self.age > 1 { "years" } else { "year" };
        format!("{} {unit} old", self.age)
    }
}
