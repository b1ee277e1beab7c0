use std::cmp::Ordering;

use crate::models::Movie;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    RatingDesc,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::RatingDesc, SortOrder::PriceAsc, SortOrder::PriceDesc];

    /// Value used by the sort `<select>`; empty means server order.
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "rating" => Some(SortOrder::RatingDesc),
            "price_low" => Some(SortOrder::PriceAsc),
            "price_high" => Some(SortOrder::PriceDesc),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            SortOrder::RatingDesc => "rating",
            SortOrder::PriceAsc => "price_low",
            SortOrder::PriceDesc => "price_high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::RatingDesc => "Highest Rated",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
        }
    }

    fn compare(self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            SortOrder::RatingDesc => b.rating.total_cmp(&a.rating),
            SortOrder::PriceAsc => a.price.total_cmp(&b.price),
            SortOrder::PriceDesc => b.price.total_cmp(&a.price),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub genre: Option<String>,
    pub sort: Option<SortOrder>,
}

impl CatalogFilter {
    /// Build from the raw `<select>` values.
    pub fn from_values(genre: &str, sort: &str) -> Self {
        Self {
            genre: Some(genre.trim())
                .filter(|g| !g.is_empty())
                .map(str::to_string),
            sort: SortOrder::from_value(sort),
        }
    }
}

/// Derive the visible list from the full catalog. Never mutates `all`, so
/// repeated calls never compound.
pub fn apply_filters(all: &[Movie], filter: &CatalogFilter) -> Vec<Movie> {
    let mut movies: Vec<Movie> = match &filter.genre {
        Some(genre) => all
            .iter()
            .filter(|m| m.genre.contains(genre.as_str()))
            .cloned()
            .collect(),
        None => all.to_vec(),
    };

    if let Some(order) = filter.sort {
        // Stable, so ties keep server order.
        movies.sort_by(|a, b| order.compare(a, b));
    }
    movies
}

/// Distinct genres for the filter dropdown. Compound genres like
/// `Action/Crime` contribute each part.
pub fn genre_options(all: &[Movie]) -> Vec<String> {
    let mut genres: Vec<String> = all
        .iter()
        .flat_map(|m| m.genre.split('/'))
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect();
    genres.sort();
    genres.dedup();
    genres
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{movie, sample_movies};

    fn ids(movies: &[Movie]) -> Vec<u32> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_no_filter_keeps_server_order() {
        let all = sample_movies();
        assert_eq!(ids(&apply_filters(&all, &CatalogFilter::default())), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_genre_substring_match() {
        let all = sample_movies();
        let filter = CatalogFilter::from_values("Action", "");
        assert_eq!(ids(&apply_filters(&all, &filter)), vec![1, 2, 5]);
    }

    #[test]
    fn test_genre_is_case_sensitive() {
        let all = sample_movies();
        let filter = CatalogFilter::from_values("action", "");
        assert!(apply_filters(&all, &filter).is_empty());
    }

    #[test]
    fn test_unknown_genre_yields_empty() {
        let all = sample_movies();
        let filter = CatalogFilter::from_values("Documentary", "");
        assert!(apply_filters(&all, &filter).is_empty());
    }

    #[test]
    fn test_sort_rating_desc() {
        let all = sample_movies();
        let filter = CatalogFilter::from_values("", "rating");
        assert_eq!(ids(&apply_filters(&all, &filter)), vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn test_price_sorts_are_reversals() {
        let all = sample_movies();
        let asc = apply_filters(&all, &CatalogFilter::from_values("", "price_low"));
        let desc = apply_filters(&all, &CatalogFilter::from_values("", "price_high"));
        assert_eq!(ids(&asc), vec![4, 2, 5, 1, 3]);
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let all = vec![
            movie(1, "A", "Drama", 4.0, 10.0),
            movie(2, "B", "Drama", 4.0, 10.0),
            movie(3, "C", "Drama", 4.0, 8.0),
        ];
        let asc = apply_filters(&all, &CatalogFilter::from_values("", "price_low"));
        assert_eq!(ids(&asc), vec![3, 1, 2]);
        let desc = apply_filters(&all, &CatalogFilter::from_values("", "price_high"));
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_then_sort() {
        let all = sample_movies();
        let filter = CatalogFilter::from_values("Action", "price_high");
        assert_eq!(ids(&apply_filters(&all, &filter)), vec![1, 5, 2]);
    }

    #[test]
    fn test_sort_order_values_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_value(order.value()), Some(order));
        }
        assert_eq!(SortOrder::from_value(""), None);
    }

    #[test]
    fn test_genre_options_split_and_dedupe() {
        let all = sample_movies();
        assert_eq!(
            genre_options(&all),
            vec!["Action", "Adventure", "Animation", "Comedy", "Crime", "Sci-Fi", "Thriller"]
        );
    }
}
