//! Command-line interface driving solve attempts and rendering

use crate::algorithm::solver::Solver;
use crate::catalog::builtin;
use crate::catalog::table::CompatibilityTable;
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH,
    GIF_FRAME_DELAY_MS,
};
use crate::io::error::{CollapseError, Result, configuration, invalid_state};
use crate::io::image::{TileArt, render_grid, render_grid_with_art, save_png, tile_palette};
use crate::io::progress::SolveProgress;
use crate::io::visualization::SolveCapture;
use crate::spatial::grid::Grid;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Built-in tile set choices
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TileSetChoice {
    /// Seven-tile line-art set with explicit connector lists
    Pipes,
    /// Sixteen-tile two-symbol quadrant set
    Quadrants,
}

#[derive(Parser)]
#[command(name = "wavegrid")]
#[command(
    author,
    version,
    about = "Generate tiled grids by wave function collapse"
)]
/// Command-line arguments for the grid generation tool
pub struct Cli {
    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Built-in tile set to solve with
    #[arg(short, long, value_enum, default_value_t = TileSetChoice::Pipes)]
    pub tiles: TileSetChoice,

    /// Output PNG path
    #[arg(short, long, default_value = "wavegrid.png")]
    pub output: PathBuf,

    /// Directory of square `tile-NN.png` art images to composite
    #[arg(long)]
    pub tile_art: Option<PathBuf>,

    /// Edge length of one rendered cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Solve attempts before giving up on repeated contradictions
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Export an animated GIF of the collapse sequence
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Seed used for a given attempt, derived so retries stay reproducible
    ///
    /// Attempts are numbered from 1; the first attempt uses the base seed.
    pub const fn attempt_seed(&self, attempt: usize) -> u64 {
        self.seed.wrapping_add((attempt as u64).saturating_sub(1))
    }

    /// GIF path derived from the output path
    pub fn visualization_path(&self) -> PathBuf {
        let stem = self.output.file_stem().unwrap_or_default();
        let gif_name = format!("{}_solve.gif", stem.to_string_lossy());

        self.output
            .parent()
            .map_or_else(|| PathBuf::from(&gif_name), |parent| parent.join(&gif_name))
    }
}

/// Orchestrates solve attempts, rendering, and export
///
/// Drives the solver in stepped form so progress and GIF capture observe
/// every collapse. A contradicted attempt discards its grid and retries
/// with a derived seed, up to the attempt limit.
pub struct SolveRunner {
    cli: Cli,
    progress: SolveProgress,
}

impl SolveRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        let progress = SolveProgress::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Solve and export according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns the last `Contradiction` when every attempt fails, or any
    /// configuration, state, or I/O error immediately.
    pub fn process(&mut self) -> Result<()> {
        let table = self.build_table()?;
        let palette = tile_palette(table.tile_count());
        let attempts = self.cli.attempts.max(1);

        let mut last_error = None;
        for attempt in 1..=attempts {
            match self.solve_attempt(&table, &palette, attempt, attempts) {
                Ok((grid, capture)) => return self.export(&table, &grid, &palette, capture),
                Err(error @ CollapseError::Contradiction { .. }) => {
                    last_error = Some(error);
                }
                Err(error) => return Err(error),
            }
        }

        Err(last_error
            .unwrap_or_else(|| configuration("attempts", &attempts, &"no attempt was executed")))
    }

    fn build_table(&self) -> Result<CompatibilityTable> {
        match self.cli.tiles {
            TileSetChoice::Pipes => {
                CompatibilityTable::from_neighbor_lists(&builtin::connector_rules(), None)
            }
            TileSetChoice::Quadrants => {
                CompatibilityTable::from_quadrant_patterns(&builtin::binary_patterns())
            }
        }
    }

    fn solve_attempt(
        &mut self,
        table: &CompatibilityTable,
        palette: &[[u8; 4]],
        attempt: usize,
        total_attempts: usize,
    ) -> Result<(Grid, Option<SolveCapture>)> {
        let mut grid = Grid::new(self.cli.width, self.cli.height, table)?;
        let mut solver = Solver::new(table, self.cli.attempt_seed(attempt));
        let mut capture = self
            .cli
            .visualize
            .then(|| SolveCapture::new(&grid, palette.to_vec(), table.tile_count()));

        self.progress
            .start_attempt(attempt, total_attempts, grid.cell_count());

        let mut cell = solver
            .random_start(&grid)
            .ok_or_else(|| invalid_state(0, 0, "grid has no open cells"))?;

        loop {
            let step = match solver.collapse(&mut grid, cell) {
                Ok(step) => step,
                Err(error) => {
                    if let CollapseError::Contradiction { x, y } = &error {
                        self.progress.abandon_attempt(*x, *y);
                    }
                    return Err(error);
                }
            };

            self.progress.record_collapse();
            if let Some(active) = &mut capture {
                active.record_step(&grid);
            }

            match step.next_cell {
                Some(next) => cell = next,
                None => break,
            }
        }

        self.progress.finish();
        Ok((grid, capture))
    }

    fn export(
        &self,
        table: &CompatibilityTable,
        grid: &Grid,
        palette: &[[u8; 4]],
        capture: Option<SolveCapture>,
    ) -> Result<()> {
        let rendered = match &self.cli.tile_art {
            Some(directory) => {
                let art = TileArt::load(directory, table.tile_count())?;
                render_grid_with_art(grid, &art)
            }
            None => render_grid(grid, palette, self.cli.cell_size),
        };
        save_png(&rendered, &self.cli.output)?;

        if let Some(active) = capture {
            active.export_gif(
                &self.cli.visualization_path(),
                GIF_FRAME_DELAY_MS,
                self.cli.cell_size,
            )?;
        }

        Ok(())
    }
}
