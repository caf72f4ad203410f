use chrono::NaiveDateTime;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::ReservationError;
use crate::models::{Cinema, Movie, Show};

/// A show as presented in a cinema's programme, joined with its movie title
/// and ordered by start time.
#[derive(Debug, Clone, Serialize)]
pub struct ShowListing {
    pub id: i64,
    pub show_time: NaiveDateTime,
    pub screen: String,
    pub price: i64,
    pub movie_title: String,
}

#[derive(Default)]
struct CatalogInner {
    cinemas: Vec<Cinema>,
    movies: Vec<Movie>,
    shows: Vec<Show>,
}

/// Cinemas, movies and shows. Written once by the seed bootstrap, read-only
/// afterwards; the reservation engine only ever asks it for show prices.
pub struct Catalog {
    inner: RwLock<CatalogInner>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            inner: RwLock::new(CatalogInner::default()),
        }
    }

    pub async fn add_cinema(&self, name: &str, area: &str, address: &str) -> i64 {
        let mut inner = self.inner.write().await;
        let id = inner.cinemas.len() as i64 + 1;
        inner.cinemas.push(Cinema {
            id,
            name: name.to_string(),
            area: area.to_string(),
            address: address.to_string(),
        });
        id
    }

    pub async fn add_movie(&self, title: &str, duration_minutes: i32, language: &str) -> i64 {
        let mut inner = self.inner.write().await;
        let id = inner.movies.len() as i64 + 1;
        inner.movies.push(Movie {
            id,
            title: title.to_string(),
            duration_minutes,
            language: language.to_string(),
        });
        id
    }

    pub async fn add_show(
        &self,
        cinema_id: i64,
        movie_id: i64,
        show_time: NaiveDateTime,
        screen: &str,
        price: i64,
    ) -> i64 {
        let mut inner = self.inner.write().await;
        let id = inner.shows.len() as i64 + 1;
        inner.shows.push(Show {
            id,
            cinema_id,
            movie_id,
            show_time,
            screen: screen.to_string(),
            price,
        });
        id
    }

    pub async fn list_cinemas(&self) -> Vec<Cinema> {
        self.inner.read().await.cinemas.clone()
    }

    pub async fn list_movies(&self) -> Vec<Movie> {
        self.inner.read().await.movies.clone()
    }

    /// The flat per-seat price of a show, or `None` for an unknown show.
    pub async fn show_price(&self, show_id: i64) -> Option<i64> {
        let inner = self.inner.read().await;
        inner.shows.iter().find(|s| s.id == show_id).map(|s| s.price)
    }

    /// Programme of one cinema, joined with movie titles, earliest first.
    pub async fn shows_for_cinema(
        &self,
        cinema_id: i64,
    ) -> Result<Vec<ShowListing>, ReservationError> {
        let inner = self.inner.read().await;
        if !inner.cinemas.iter().any(|c| c.id == cinema_id) {
            return Err(ReservationError::CinemaNotFound);
        }

        let mut listings: Vec<ShowListing> = inner
            .shows
            .iter()
            .filter(|s| s.cinema_id == cinema_id)
            .map(|s| {
                let movie_title = inner
                    .movies
                    .iter()
                    .find(|m| m.id == s.movie_id)
                    .map(|m| m.title.clone())
                    .unwrap_or_default();
                ShowListing {
                    id: s.id,
                    show_time: s.show_time,
                    screen: s.screen.clone(),
                    price: s.price,
                    movie_title,
                }
            })
            .collect();
        listings.sort_by_key(|l| l.show_time);
        Ok(listings)
    }

    /// Movie title and cinema name for a show, used to enrich booking lists.
    pub async fn show_context(&self, show_id: i64) -> Option<(String, String)> {
        let inner = self.inner.read().await;
        let show = inner.shows.iter().find(|s| s.id == show_id)?;
        let movie_title = inner
            .movies
            .iter()
            .find(|m| m.id == show.movie_id)
            .map(|m| m.title.clone())?;
        let cinema_name = inner
            .cinemas
            .iter()
            .find(|c| c.id == show.cinema_id)
            .map(|c| c.name.clone())?;
        Some((movie_title, cinema_name))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
