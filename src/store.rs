use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crate::models::{Movie, MovieChanges, MovieId, NewMovie};

/// In-memory movie collection. Clones share the same underlying records.
#[derive(Clone, Default)]
pub struct MovieStore {
    inner: Arc<Mutex<Shelf>>,
}

struct Shelf {
    movies: BTreeMap<MovieId, Movie>,
    next_id: MovieId,
}

impl Default for Shelf {
    fn default() -> Self {
        Self { movies: BTreeMap::new(), next_id: 1 }
    }
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All movies in ascending id order.
    pub fn list(&self) -> Vec<Movie> {
        self.lock().movies.values().cloned().collect()
    }

    pub fn create(&self, new: NewMovie) -> Movie {
        let mut shelf = self.lock();
        let id = shelf.next_id;
        shelf.next_id += 1;
        let movie = new.into_movie(id);
        shelf.movies.insert(id, movie.clone());
        movie
    }

    pub fn get(&self, id: MovieId) -> Option<Movie> {
        self.lock().movies.get(&id).cloned()
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.lock().movies.contains_key(&id)
    }

    pub fn update(&self, id: MovieId, changes: MovieChanges) -> Option<Movie> {
        let mut shelf = self.lock();
        let movie = shelf.movies.get_mut(&id)?;
        changes.apply(movie);
        Some(movie.clone())
    }

    pub fn delete(&self, id: MovieId) -> bool {
        self.lock().movies.remove(&id).is_some()
    }

    // Every operation leaves the map consistent before it can panic, so a poisoned
    // lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, Shelf> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
