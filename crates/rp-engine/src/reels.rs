//! Reel grid contract and the scripted in-repo stub
//!
//! The real reel subsystem (symbol population, scroll animation) is an
//! external collaborator; the pipeline consumes it only through `ReelGrid`.
//! `ScriptedReels` implements the contract for tests, demos, and headless
//! simulation.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rp_core::{GridGeometry, GridSpec, SymbolCatalog, SymbolGrid};

use crate::error::ReelError;

/// External reel subsystem contract
pub trait ReelGrid {
    /// True while reels are in motion or awaiting stabilization
    fn is_spinning(&self) -> bool;

    /// Begin reel motion
    fn begin_motion(&mut self);

    /// Stop motion; resolves only once the grid is visually stabilized
    fn stop_motion(&mut self) -> impl Future<Output = Result<SymbolGrid, ReelError>> + Send;

    /// Board geometry for overlay placement, if available
    fn geometry(&self) -> Option<&GridGeometry>;
}

/// One scripted stabilization outcome
#[derive(Debug, Clone)]
enum ScriptedStop {
    Grid(SymbolGrid),
    Fail { reason: String },
}

/// Deterministic `ReelGrid` stub
///
/// Serves queued outcomes first, then seeded-random grids drawn from the
/// catalog. Geometry is optional so highlight-failure paths can be
/// exercised.
#[derive(Debug)]
pub struct ScriptedReels {
    spec: GridSpec,
    catalog: SymbolCatalog,
    geometry: Option<GridGeometry>,
    spinning: bool,
    queue: VecDeque<ScriptedStop>,
    rng: StdRng,
}

impl ScriptedReels {
    /// Create a stub without geometry
    pub fn new(spec: GridSpec, catalog: SymbolCatalog, seed: u64) -> Self {
        Self {
            spec,
            catalog,
            geometry: None,
            spinning: false,
            queue: VecDeque::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Classic 3×3 board with its standard layout geometry
    pub fn classic(catalog: SymbolCatalog, seed: u64) -> Self {
        let mut reels = Self::new(GridSpec::classic_3x3(), catalog, seed);
        reels.geometry = Some(GridGeometry::classic_3x3());
        reels
    }

    /// Attach board geometry
    pub fn with_geometry(mut self, geometry: GridGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Queue a stabilized grid for the next stop
    pub fn queue_grid(&mut self, grid: SymbolGrid) {
        self.queue.push_back(ScriptedStop::Grid(grid));
    }

    /// Queue a stabilization failure for the next stop
    pub fn queue_failure(&mut self, reason: impl Into<String>) {
        self.queue.push_back(ScriptedStop::Fail {
            reason: reason.into(),
        });
    }

    /// Grid spec served by this stub
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    fn random_grid(&mut self) -> SymbolGrid {
        let window = self.spec.window_len();
        let kinds = self.catalog.len().max(1);
        let reels = (0..self.spec.reels)
            .map(|_| {
                (0..window)
                    .map(|_| {
                        let pick = self.rng.random_range(0..kinds);
                        self.catalog.symbols[pick].clone()
                    })
                    .collect()
            })
            .collect();
        SymbolGrid::new(reels)
    }
}

impl ReelGrid for ScriptedReels {
    fn is_spinning(&self) -> bool {
        self.spinning
    }

    fn begin_motion(&mut self) {
        log::debug!("reels: motion started");
        self.spinning = true;
    }

    async fn stop_motion(&mut self) -> Result<SymbolGrid, ReelError> {
        self.spinning = false;
        match self.queue.pop_front() {
            Some(ScriptedStop::Grid(grid)) => Ok(grid),
            Some(ScriptedStop::Fail { reason }) => Err(ReelError::StopFailed { reason }),
            None => Ok(self.random_grid()),
        }
    }

    fn geometry(&self) -> Option<&GridGeometry> {
        self.geometry.as_ref()
    }
}

/// Build a grid from row-major visible symbol names, padding each reel with
/// `filler`. Returns `None` for names missing from the catalog or rows that
/// do not match the spec shape.
pub fn grid_from_rows(
    catalog: &SymbolCatalog,
    spec: &GridSpec,
    rows: &[&[&str]],
    filler: &str,
) -> Option<SymbolGrid> {
    if rows.len() != spec.rows as usize {
        return None;
    }
    let filler = catalog.by_name(filler)?.clone();
    let mut reels = Vec::with_capacity(spec.reels as usize);
    for reel in 0..spec.reels as usize {
        let mut column = Vec::with_capacity(spec.window_len());
        for _ in 0..spec.padding {
            column.push(filler.clone());
        }
        for row in rows {
            column.push(catalog.by_name(row.get(reel)?)?.clone());
        }
        for _ in 0..spec.padding {
            column.push(filler.clone());
        }
        reels.push(column);
    }
    Some(SymbolGrid::new(reels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rp_core::classic_card_set;

    #[tokio::test]
    async fn test_queued_grid_served_first() {
        let catalog = classic_card_set();
        let spec = GridSpec::classic_3x3();
        let scripted = grid_from_rows(
            &catalog,
            &spec,
            &[
                &["h2", "h2", "h2"],
                &["king", "queen", "jack"],
                &["h2", "h2", "h2"],
            ],
            "nine",
        )
        .unwrap();

        let mut reels = ScriptedReels::classic(catalog, 7);
        reels.queue_grid(scripted.clone());
        reels.begin_motion();
        assert!(reels.is_spinning());
        let grid = reels.stop_motion().await.unwrap();
        assert!(!reels.is_spinning());
        assert_eq!(grid, scripted);
    }

    #[tokio::test]
    async fn test_queued_failure() {
        let catalog = classic_card_set();
        let mut reels = ScriptedReels::classic(catalog, 7);
        reels.queue_failure("belt jam");
        reels.begin_motion();
        let err = reels.stop_motion().await.unwrap_err();
        assert_eq!(
            err,
            ReelError::StopFailed {
                reason: "belt jam".into(),
            }
        );
        assert!(!reels.is_spinning());
    }

    #[tokio::test]
    async fn test_random_grid_matches_spec() {
        let catalog = classic_card_set();
        let spec = GridSpec::classic_3x3();
        let mut reels = ScriptedReels::new(spec, catalog, 42);
        reels.begin_motion();
        let grid = reels.stop_motion().await.unwrap();
        assert!(grid.validate(&spec).is_ok());
        assert!(reels.geometry().is_none());
    }

    #[test]
    fn test_grid_from_rows_rejects_unknown_symbol() {
        let catalog = classic_card_set();
        let spec = GridSpec::classic_3x3();
        let grid = grid_from_rows(
            &catalog,
            &spec,
            &[
                &["h2", "h2", "h2"],
                &["king", "wizard", "jack"],
                &["h2", "h2", "h2"],
            ],
            "nine",
        );
        assert!(grid.is_none());
    }
}
