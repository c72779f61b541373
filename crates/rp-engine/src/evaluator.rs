//! Win evaluation and timed win-line presentation

use rp_core::{GridError, GridGeometry, GridSpec, SpinTiming, SymbolGrid};

use crate::audio::{AudioCues, CUE_WIN};
use crate::error::HighlightError;
use crate::scene::{NodeId, SceneContainer, SceneNode};
use crate::timer::TimerService;

/// Horizontal inset of the marker from the first reel's left edge
const LINE_INSET_PX: f64 = 20.0;
/// Baseline correction so the marker sits on the symbol row
const LINE_BASELINE_ADJUST_PX: f64 = 26.0;
/// Marker stroke width
const LINE_WIDTH_PX: f64 = 10.0;
/// Marker color
const LINE_COLOR: u32 = 0xff0000;
/// Winnings display position
const DISPLAY_POS: (f64, f64) = (140.0, 350.0);

/// Evaluates a stabilized grid for winning rows and presents each win
///
/// A row wins iff every reel's visible symbol at that row carries the first
/// reel's symbol name. Wins are presented strictly in row order: the
/// highlight for row `r` is added, held, and removed before row `r + 1` is
/// examined. The running total is cumulative for the evaluator's lifetime
/// and only `reset_display` zeroes it.
pub struct WinEvaluator<S: SceneContainer, A: AudioCues> {
    spec: GridSpec,
    timing: SpinTiming,
    scene: S,
    audio: A,
    timer: TimerService,
    running_total: u64,
    display: Option<NodeId>,
}

impl<S: SceneContainer, A: AudioCues> WinEvaluator<S, A> {
    /// Create an evaluator with injected collaborators
    pub fn new(spec: GridSpec, timing: SpinTiming, scene: S, audio: A, timer: TimerService) -> Self {
        Self {
            spec,
            timing,
            scene,
            audio,
            timer,
            running_total: 0,
            display: None,
        }
    }

    /// Running winnings accumulated so far
    pub fn total(&self) -> u64 {
        self.running_total
    }

    /// Grid dimensions this evaluator expects
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// The injected audio sink
    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Evaluate all visible rows of a stabilized grid
    ///
    /// Returns the running total after this call. Highlight failures are
    /// contained here: the win is already committed to the total before the
    /// highlight is attempted, so a graphics failure only costs feedback.
    pub async fn evaluate(
        &mut self,
        grid: &SymbolGrid,
        geometry: Option<&GridGeometry>,
    ) -> Result<u64, GridError> {
        grid.validate(&self.spec)?;

        for row in 0..self.spec.rows as usize {
            let Some(amount) = self.row_win(grid, row) else {
                log::debug!("no win at row {row}");
                continue;
            };
            self.running_total += amount;
            self.refresh_display();
            self.audio.play_cue(CUE_WIN);
            match self.highlight_line(row, geometry).await {
                Ok(()) => {}
                Err(HighlightError::Cancelled(_)) => {
                    log::warn!("highlight cancelled during teardown, skipping remaining rows");
                    break;
                }
                Err(err) => log::warn!("failed to highlight row {row}: {err}"),
            }
        }

        Ok(self.running_total)
    }

    /// Sum of the row's symbol values if every reel matches the first
    fn row_win(&self, grid: &SymbolGrid, row: usize) -> Option<u64> {
        let symbols = grid.visible_row(&self.spec, row)?;
        let first = symbols.first()?;
        if symbols.iter().all(|s| s.matches(first)) {
            Some(symbols.iter().map(|s| s.value as u64).sum())
        } else {
            None
        }
    }

    /// Draw the marker for a winning row, hold it, then remove it
    pub async fn highlight_line(
        &mut self,
        row: usize,
        geometry: Option<&GridGeometry>,
    ) -> Result<(), HighlightError> {
        let geometry = geometry.ok_or(HighlightError::MissingGeometry)?;
        if row >= self.spec.rows as usize {
            return Err(HighlightError::RowOutOfRange {
                row,
                rows: self.spec.rows,
            });
        }
        let first = geometry.frames.first().ok_or(HighlightError::MissingGeometry)?;
        let end_x = geometry.right_edge().ok_or(HighlightError::MissingGeometry)?;
        let slot = self.spec.padding as usize + row;
        let offset = first
            .symbol_offsets
            .get(slot)
            .copied()
            .ok_or(HighlightError::MissingGeometry)?;

        let start_x = first.x + LINE_INSET_PX;
        let y = first.y + offset + geometry.symbol_height - LINE_BASELINE_ADJUST_PX;

        let marker = self.scene.add_child(SceneNode::Line {
            from: (start_x, y),
            to: (end_x, y),
            width: LINE_WIDTH_PX,
            color: LINE_COLOR,
        });
        let held = self.timer.delay(self.timing.highlight_hold()).await;
        // The marker never outlives the hold, cancelled or not.
        self.scene.remove_child(marker);
        held?;
        Ok(())
    }

    /// Zero the running total and take down the display
    pub fn reset_display(&mut self) {
        if let Some(id) = self.display.take() {
            self.scene.remove_child(id);
        }
        self.running_total = 0;
    }

    fn refresh_display(&mut self) {
        if let Some(id) = self.display.take() {
            self.scene.remove_child(id);
        }
        let id = self.scene.add_child(SceneNode::Text {
            content: format!("Total Winnings: £{}", self.running_total),
            x: DISPLAY_POS.0,
            y: DISPLAY_POS.1,
        });
        self.display = Some(id);
    }
}
