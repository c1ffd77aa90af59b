//! Movie rating records: the line parser (map side) and the per-movie mean
//! (reduce side).

use crate::collection::{CombineFn, LiftableCombiner};
use crate::combiners::AverageF64;

/// Grouping key of a rating.
pub type MovieId = i32;

/// One rating event taken from an input line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rating {
    pub movie_id: MovieId,
    pub rating: f64,
}

/// Mean rating of one movie.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovieAverage {
    pub movie_id: MovieId,
    pub average: f64,
}

/// Parse one comma-separated line.
///
/// Field 1 is the movie id, field 2 the rating; field 0 and anything after
/// field 2 are ignored. Returns `None` when there are fewer than three fields
/// or either value does not parse. The rating may carry surrounding
/// whitespace, the id may not. The only non-numeric ratings accepted are
/// `NaN` and `Infinity` (optionally signed), spelled exactly so.
///
/// ```
/// use ratingbeam::ratings::{parse_line, Rating};
///
/// assert_eq!(
///     parse_line("7,101,4.5,1260759144"),
///     Some(Rating { movie_id: 101, rating: 4.5 })
/// );
/// assert_eq!(parse_line("userId,movieId,rating"), None);
/// ```
pub fn parse_line(line: &str) -> Option<Rating> {
    let mut fields = line.split(',');
    let (Some(_), Some(id), Some(rating)) = (fields.next(), fields.next(), fields.next()) else {
        return None;
    };
    let Ok(movie_id) = id.parse::<MovieId>() else {
        return None;
    };
    let rating = parse_rating(rating.trim())?;
    Some(Rating { movie_id, rating })
}

fn parse_rating(s: &str) -> Option<f64> {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    // f64's grammar also takes `inf`, `infinity` and `nan` in any case
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic())
        && unsigned != "NaN"
        && unsigned != "Infinity"
    {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Lazily parse many lines, dropping the ones [`parse_line`] rejects.
pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> impl Iterator<Item = Rating> {
    lines.into_iter().filter_map(parse_line)
}

/// Mean of one movie's ratings, summed in the order given.
///
/// `ratings` must not be empty; grouping only creates a movie once it has a
/// rating.
pub fn reduce(movie_id: MovieId, ratings: &[f64]) -> MovieAverage {
    debug_assert!(!ratings.is_empty(), "no ratings for movie {movie_id}");
    let acc = AverageF64.build_from_group(ratings);
    MovieAverage {
        movie_id,
        average: CombineFn::<f64, _, _>::finish(&AverageF64, acc),
    }
}
