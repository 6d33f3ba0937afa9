//! In-memory registry of tracked movies.

use tracing::debug;

use crate::matching::normalize_title;

use super::types::Movie;

/// The single source of truth for tracked movies and their torrent records.
///
/// All name lookups go through [`normalize_title`] on both sides, so the
/// registry enforces the invariant that no two movies share a normalized
/// name. `add` and `remove` are idempotent, which makes the surrounding CRUD
/// layer safe to call repeatedly.
#[derive(Debug, Default)]
pub struct MovieRegistry {
    movies: Vec<Movie>,
}

impl MovieRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a persisted movie list.
    ///
    /// Duplicated normalized names are dropped (first occurrence wins); a
    /// persisted snapshot written by a buggy older version may contain them.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut registry = Self::new();
        for movie in movies {
            if !registry.add(movie) {
                debug!("Dropping duplicate movie entry while loading registry");
            }
        }
        registry
    }

    /// All tracked movies, in insertion order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by title, comparing normalized forms.
    pub fn find(&self, name: &str) -> Option<&Movie> {
        let wanted = normalize_title(name);
        self.movies
            .iter()
            .find(|m| normalize_title(&m.name) == wanted)
    }

    /// Mutable view over all tracked movies.
    pub fn all_mut(&mut self) -> &mut [Movie] {
        &mut self.movies
    }

    /// Mutable lookup by normalized title.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Movie> {
        let wanted = normalize_title(name);
        self.movies
            .iter_mut()
            .find(|m| normalize_title(&m.name) == wanted)
    }

    /// Add a movie. Returns false (and leaves the registry untouched) when a
    /// movie with the same normalized name is already tracked.
    pub fn add(&mut self, movie: Movie) -> bool {
        if self.find(&movie.name).is_some() {
            return false;
        }
        self.movies.push(movie);
        true
    }

    /// Remove a movie by normalized name. Returns false when absent.
    pub fn remove(&mut self, name: &str) -> bool {
        let wanted = normalize_title(name);
        let before = self.movies.len();
        self.movies.retain(|m| normalize_title(&m.name) != wanted);
        self.movies.len() != before
    }

    /// Number of tracked movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Clone the movie list for persistence.
    pub fn to_movies(&self) -> Vec<Movie> {
        self.movies.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find() {
        let mut registry = MovieRegistry::new();
        assert!(registry.add(Movie::new("Rambo")));
        assert_eq!(registry.len(), 1);
        assert!(registry.find("Rambo").is_some());
        assert!(registry.find("Heat").is_none());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut registry = MovieRegistry::new();
        registry.add(Movie::new("Rambo"));
        assert!(registry.find("rambo").is_some());
        assert!(registry.find("RAMBO").is_some());
        assert!(registry.find_mut("  rambo ").is_some());
    }

    #[test]
    fn test_add_duplicate_is_a_no_op() {
        // Regression: the original implementation's duplicate check could
        // never trigger, silently accumulating duplicate names.
        let mut registry = MovieRegistry::new();
        assert!(registry.add(Movie::new("Rambo")));
        assert!(!registry.add(Movie::new("Rambo")));
        assert!(!registry.add(Movie::new("rambo")));
        assert!(!registry.add(Movie::new("RAMBO ")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut registry = MovieRegistry::new();
        registry.add(Movie::new("Rambo"));
        assert!(registry.remove("rambo"));
        assert!(!registry.remove("rambo"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_from_movies_drops_duplicates() {
        let registry = MovieRegistry::from_movies(vec![
            Movie::new("Rambo"),
            Movie::new("rambo"),
            Movie::new("Heat"),
        ]);
        assert_eq!(registry.len(), 2);
        // First occurrence wins.
        assert_eq!(registry.find("rambo").unwrap().name, "Rambo");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut registry = MovieRegistry::new();
        registry.add(Movie::new("B"));
        registry.add(Movie::new("A"));
        let names: Vec<_> = registry.all().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
