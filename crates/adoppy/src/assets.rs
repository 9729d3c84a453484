//! Embedded assets.
//!
//! The original demo ships one drawable per breed and picks it with a
//! breed-conditioned lookup. The terminal equivalent is ASCII art embedded
//! at compile time with `include_str!`: source files live in
//! `crates/adoppy/assets/art/` for easy editing, content is deterministic at
//! runtime, and no file I/O happens after build.

use crate::puppy::Breed;

/// ASCII art placeholders, one per breed.
pub mod art {
    /// The corgi, bone included.
    pub const CORGI: &str = include_str!("../assets/art/corgi.txt");

    /// The pug.
    pub const PUG: &str = include_str!("../assets/art/pug.txt");
}

/// The art placeholder for a breed. Total over the closed breed set.
#[must_use]
pub const fn art_for(breed: Breed) -> &'static str {
    match breed {
        Breed::Corgi => art::CORGI,
        Breed::Pug => art::PUG,
    }
}

/// A one-cell row marker for a breed, used in catalog rows.
#[must_use]
pub const fn badge_for(breed: Breed) -> &'static str {
    match breed {
        Breed::Corgi => "∪",
        Breed::Pug => "ʘ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_is_total_and_nonempty() {
        for breed in Breed::all() {
            assert!(!art_for(breed).is_empty());
            assert!(!badge_for(breed).is_empty());
        }
    }

    #[test]
    fn test_breeds_have_distinct_art() {
        assert_ne!(art_for(Breed::Corgi), art_for(Breed::Pug));
        assert_ne!(badge_for(Breed::Corgi), badge_for(Breed::Pug));
    }
}
