//! Brute-force palette search

use tracing::{debug, trace, warn};

use super::key::PaletteKey;
use super::PaletteMap;
use crate::color::{Lab, Rgb, ToLab};
use crate::diff::ciede2000;
use crate::error::{ColorDiffError, Result};

/// Whether a search looks for the smallest or the largest difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Smallest CIEDE2000 difference wins.
    #[default]
    Closest,
    /// Largest CIEDE2000 difference wins.
    Furthest,
}

impl MatchMode {
    /// Returns true if `candidate` strictly improves on `current`.
    ///
    /// Equal differences never improve, so ties keep the earlier candidate.
    #[inline]
    pub fn is_better(self, candidate: f64, current: f64) -> bool {
        match self {
            MatchMode::Closest => candidate < current,
            MatchMode::Furthest => candidate > current,
        }
    }
}

/// Linear scan over candidate Lab values.
///
/// The first candidate seeds the running best. Returns the index and
/// difference of the winner, or `EmptyInput` for an empty iterator.
pub(crate) fn select_best<I>(query: Lab, candidates: I, mode: MatchMode) -> Result<(usize, f64)>
where
    I: IntoIterator<Item = Result<Lab>>,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, lab) in candidates.into_iter().enumerate() {
        let d = ciede2000(query, lab?)?;
        match best {
            Some((_, current)) if !mode.is_better(d, current) => {}
            _ => best = Some((idx, d)),
        }
    }
    best.ok_or(ColorDiffError::EmptyInput)
}

/// Find the best candidate for `query`.
///
/// Alpha on either side is resolved against `background` (white when
/// `None`). Candidates are converted on every call; build a
/// [`LabPalette`](super::LabPalette) to convert them once.
///
/// # Errors
///
/// [`ColorDiffError::EmptyInput`] for an empty candidate slice, or the first
/// conversion/difference error encountered.
///
/// # Example
///
/// ```
/// use color_diff::{match_one, MatchMode, Rgb};
///
/// let palette = [Rgb::WHITE, Rgb::BLACK];
/// let navy = Rgb::from_u8(0, 0, 128);
/// assert_eq!(match_one(&navy, &palette, MatchMode::Closest, None).unwrap(), &Rgb::BLACK);
/// assert_eq!(match_one(&navy, &palette, MatchMode::Furthest, None).unwrap(), &Rgb::WHITE);
/// ```
pub fn match_one<'a, Q, C>(
    query: &Q,
    candidates: &'a [C],
    mode: MatchMode,
    background: Option<Rgb>,
) -> Result<&'a C>
where
    Q: ToLab + ?Sized,
    C: ToLab,
{
    if candidates.is_empty() {
        return Err(ColorDiffError::EmptyInput);
    }
    let query_lab = query.to_lab(background)?;
    let (idx, d) = select_best(
        query_lab,
        candidates.iter().map(|c| c.to_lab(background)),
        mode,
    )?;
    trace!(index = idx, difference = d, ?mode, "matched color");
    Ok(&candidates[idx])
}

/// The candidate with the smallest difference to `query`.
pub fn closest<'a, Q, C>(query: &Q, candidates: &'a [C], background: Option<Rgb>) -> Result<&'a C>
where
    Q: ToLab + ?Sized,
    C: ToLab,
{
    match_one(query, candidates, MatchMode::Closest, background)
}

/// The candidate with the largest difference to `query`.
pub fn furthest<'a, Q, C>(query: &Q, candidates: &'a [C], background: Option<Rgb>) -> Result<&'a C>
where
    Q: ToLab + ?Sized,
    C: ToLab,
{
    match_one(query, candidates, MatchMode::Furthest, background)
}

/// Map every query to its best candidate, keyed by the query's
/// [`PaletteKey`].
///
/// An empty candidate slice yields an empty map. A query that fails to
/// convert or compare is left out of the map and logged; the rest are still
/// mapped. Queries with equal keys keep the result of the last one.
pub fn map_palette<Q, C>(
    queries: &[Q],
    candidates: &[C],
    mode: MatchMode,
    background: Option<Rgb>,
) -> PaletteMap<C>
where
    Q: ToLab + PaletteKey,
    C: ToLab + Clone,
{
    let mut map = PaletteMap::with_capacity(queries.len());
    if candidates.is_empty() {
        return map;
    }
    for query in queries {
        let key = query.palette_key();
        match match_one(query, candidates, mode, background) {
            Ok(best) => {
                map.insert(key, best.clone());
            }
            Err(e) => warn!(key = %key, error = %e, "skipping color that could not be matched"),
        }
    }
    debug!(
        queries = queries.len(),
        candidates = candidates.len(),
        mapped = map.len(),
        ?mode,
        "mapped palette"
    );
    map
}

/// Strict variant of [`map_palette`] that stops at the first failing query.
pub fn try_map_palette<Q, C>(
    queries: &[Q],
    candidates: &[C],
    mode: MatchMode,
    background: Option<Rgb>,
) -> Result<PaletteMap<C>>
where
    Q: ToLab + PaletteKey,
    C: ToLab + Clone,
{
    let mut map = PaletteMap::with_capacity(queries.len());
    if candidates.is_empty() {
        return Ok(map);
    }
    for query in queries {
        let best = match_one(query, candidates, mode, background)?;
        map.insert(query.palette_key(), best.clone());
    }
    Ok(map)
}
