//! Candidate set with precomputed Lab values

use tracing::{debug, trace, warn};

use super::key::PaletteKey;
use super::matcher::{select_best, MatchMode};
use super::PaletteMap;
use crate::color::{Lab, Rgb, ToLab};
use crate::error::{ColorDiffError, Result};

/// A candidate set whose Lab conversions are done once.
///
/// `LabPalette` keeps every candidate in its original representation next to
/// its Lab value, resolved against a fixed background. Queries against it
/// give the same results as [`match_one`](super::match_one) and
/// [`map_palette`](super::map_palette) with the same background, without
/// converting the candidates again for every query.
///
/// # Example
///
/// ```
/// use color_diff::{LabPalette, MatchMode, Rgb};
///
/// let palette = LabPalette::new(vec![Rgb::WHITE, Rgb::BLACK], None).unwrap();
/// let grey = Rgb::from_u8(40, 40, 40);
/// assert_eq!(palette.match_one(&grey, MatchMode::Closest).unwrap(), &Rgb::BLACK);
/// ```
#[derive(Debug, Clone)]
pub struct LabPalette<C> {
    colors: Vec<C>,
    // Parallel to `colors`
    labs: Vec<Lab>,
    background: Rgb,
}

impl<C: ToLab> LabPalette<C> {
    /// Convert every candidate to Lab against `background` (white when
    /// `None`).
    ///
    /// # Errors
    ///
    /// [`ColorDiffError::InvalidNumericInput`] if any candidate or the
    /// background has a non-finite component. An empty candidate list is
    /// accepted; searching it fails with [`ColorDiffError::EmptyInput`].
    pub fn new(colors: Vec<C>, background: Option<Rgb>) -> Result<Self> {
        let background = background.unwrap_or(Rgb::WHITE);
        let labs = colors
            .iter()
            .map(|c| c.to_lab(Some(background)))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            candidates = colors.len(),
            background = ?background,
            "built Lab palette"
        );

        Ok(Self {
            colors,
            labs,
            background,
        })
    }
}

impl<C> LabPalette<C> {
    /// Returns the number of candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if there are no candidates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The candidate at `idx`, as it was given.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&C> {
        self.colors.get(idx)
    }

    /// The precomputed Lab value of the candidate at `idx`.
    #[inline]
    pub fn lab(&self, idx: usize) -> Option<Lab> {
        self.labs.get(idx).copied()
    }

    /// Iterate over candidates and their Lab values in order.
    pub fn iter(&self) -> impl Iterator<Item = (&C, Lab)> + '_ {
        self.colors.iter().zip(self.labs.iter().copied())
    }

    /// The background alpha is resolved against, for candidates and queries.
    #[inline]
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Index and difference of the best candidate for `query`.
    pub fn find_best<Q: ToLab + ?Sized>(&self, query: &Q, mode: MatchMode) -> Result<(usize, f64)> {
        if self.labs.is_empty() {
            return Err(ColorDiffError::EmptyInput);
        }
        let query_lab = query.to_lab(Some(self.background))?;
        let found = select_best(query_lab, self.labs.iter().copied().map(Ok), mode)?;
        trace!(index = found.0, difference = found.1, ?mode, "matched color");
        Ok(found)
    }

    /// The best candidate for `query`.
    pub fn match_one<Q: ToLab + ?Sized>(&self, query: &Q, mode: MatchMode) -> Result<&C> {
        let (idx, _) = self.find_best(query, mode)?;
        Ok(&self.colors[idx])
    }
}

impl<C: Clone> LabPalette<C> {
    /// Map every query to its best candidate.
    ///
    /// Same policy as [`map_palette`](super::map_palette): failing queries
    /// are logged and left out, equal keys keep the last result.
    pub fn map_palette<Q>(&self, queries: &[Q], mode: MatchMode) -> PaletteMap<C>
    where
        Q: ToLab + PaletteKey,
    {
        let mut map = PaletteMap::with_capacity(queries.len());
        if self.is_empty() {
            return map;
        }
        for query in queries {
            let key = query.palette_key();
            match self.match_one(query, mode) {
                Ok(best) => {
                    map.insert(key, best.clone());
                }
                Err(e) => warn!(key = %key, error = %e, "skipping color that could not be matched"),
            }
        }
        debug!(
            queries = queries.len(),
            candidates = self.len(),
            mapped = map.len(),
            ?mode,
            "mapped palette"
        );
        map
    }

    /// Strict variant of [`LabPalette::map_palette`].
    pub fn try_map_palette<Q>(&self, queries: &[Q], mode: MatchMode) -> Result<PaletteMap<C>>
    where
        Q: ToLab + PaletteKey,
    {
        let mut map = PaletteMap::with_capacity(queries.len());
        if self.is_empty() {
            return Ok(map);
        }
        for query in queries {
            let best = self.match_one(query, mode)?;
            map.insert(query.palette_key(), best.clone());
        }
        Ok(map)
    }
}
