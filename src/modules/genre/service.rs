use super::dto::GenreResponse;
use super::model::Genre;
use crate::modules::movies::model::MovieSummary;

pub struct GenreService;

impl GenreService {
    pub fn find_all() -> Vec<GenreResponse> {
        Genre::ALL.into_iter().map(GenreResponse::from).collect()
    }

    /// Keeps the movies of one fetched page that belong to `genre`.
    ///
    /// Only the given page is inspected; filtered-out items are not replaced,
    /// so the result may be shorter than the page, or empty.
    pub fn filter(genre: Genre, results: &[MovieSummary]) -> Vec<MovieSummary> {
        results
            .iter()
            .filter(|movie| genre.matches(&movie.genre_ids))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, genre_ids: &[u32]) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            genre_ids: genre_ids.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn lists_every_option_with_all_genres_first() {
        let genres = GenreService::find_all();
        assert_eq!(genres.len(), 4);
        assert_eq!(genres[0].label, "All Genres");
        assert_eq!(genres[0].tmdb_id, None);
        assert_eq!(genres[2].value, Genre::Comedy);
        assert_eq!(genres[2].tmdb_id, Some(35));
    }

    #[test]
    fn empty_genre_passes_results_through() {
        let results = vec![movie(1, &[28]), movie(2, &[]), movie(3, &[18, 35])];
        let filtered = GenreService::filter(Genre::All, &results);
        assert_eq!(filtered, results);
    }

    #[test]
    fn keeps_only_matching_movies_in_order() {
        let results = vec![
            movie(1, &[28, 12]),
            movie(2, &[35]),
            movie(3, &[18, 28]),
            movie(4, &[16]),
        ];
        let filtered = GenreService::filter(Genre::Action, &results);
        let ids: Vec<u64> = filtered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(filtered.iter().all(|m| m.genre_ids.contains(&28)));
    }

    #[test]
    fn may_filter_a_page_down_to_nothing() {
        let results = vec![movie(1, &[28]), movie(2, &[18])];
        assert!(GenreService::filter(Genre::Comedy, &results).is_empty());
    }
}
