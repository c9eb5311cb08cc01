//! Frame capture and GIF export of the collapse sequence
//!
//! Captures one snapshot per collapse and renders them into an animated
//! GIF: resolved cells take their tile color, open cells render as a gray
//! shade scaled by remaining entropy, so the viewer watches uncertainty
//! drain out of the grid.

use crate::catalog::tiles::TileId;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{CollapseError, Result, configuration};
use crate::spatial::grid::Grid;
use image::{Frame, Rgba, RgbaImage};
use std::path::Path;

/// Occupancy and entropy of every cell after one step
struct StepSnapshot {
    resolved: Vec<Option<TileId>>,
    candidate_counts: Vec<usize>,
}

/// Captures per-step grid snapshots for visualization
pub struct SolveCapture {
    width: usize,
    height: usize,
    palette: Vec<[u8; 4]>,
    tile_count: usize,
    snapshots: Vec<StepSnapshot>,
}

impl SolveCapture {
    /// Create a capture primed with the grid's initial all-open frame
    pub fn new(grid: &Grid, palette: Vec<[u8; 4]>, tile_count: usize) -> Self {
        let mut capture = Self {
            width: grid.width(),
            height: grid.height(),
            palette,
            tile_count,
            snapshots: Vec::with_capacity(grid.cell_count() + 1),
        };
        capture.record_step(grid);
        capture
    }

    /// Record the grid state after a collapse step
    pub fn record_step(&mut self, grid: &Grid) {
        let mut resolved = Vec::with_capacity(grid.cell_count());
        let mut candidate_counts = Vec::with_capacity(grid.cell_count());
        for y in 0..self.height {
            for x in 0..self.width {
                resolved.push(grid.tile_at(x, y));
                candidate_counts.push(grid.candidate_count_at(x, y));
            }
        }
        self.snapshots.push(StepSnapshot {
            resolved,
            candidate_counts,
        });
    }

    /// Number of captured frames, including the initial one
    pub const fn frame_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// Skips frames when the requested delay is below what viewers reliably
    /// support, keeping the apparent animation speed; the final frame is
    /// held longer for visibility.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error when nothing beyond the initial
    /// frame was captured, `FileSystem` when the output file cannot be
    /// created, and `ImageExport` when GIF encoding fails.
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32, cell_px: u32) -> Result<()> {
        if self.snapshots.len() <= 1 {
            return Err(configuration(
                "visualization",
                &self.snapshots.len(),
                &"no collapse steps were captured",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let mut frames = Vec::new();
        let last_index = self.snapshots.len() - 1;
        for (index, snapshot) in self.snapshots.iter().enumerate() {
            if index % skip_factor != 0 && index != last_index {
                continue;
            }
            frames.push(self.render_frame(snapshot, effective_delay_ms, cell_px));
        }

        // Final frame displays longer for better visibility
        if let Some(last_frame) = frames.last().map(|frame| frame.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame,
                0,
                0,
                image::Delay::from_numer_denom_ms(effective_delay_ms * 25, 1),
            ));
        }

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| CollapseError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }

        let file =
            std::fs::File::create(output_path).map_err(|source| CollapseError::FileSystem {
                path: output_path.to_path_buf(),
                operation: "create file",
                source,
            })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|source| CollapseError::ImageExport {
                path: output_path.to_path_buf(),
                source,
            })?;

        Ok(())
    }

    fn render_frame(&self, snapshot: &StepSnapshot, delay_ms: u32, cell_px: u32) -> Frame {
        let mut img = RgbaImage::new(
            self.width as u32 * cell_px,
            self.height as u32 * cell_px,
        );

        for y in 0..self.height {
            for x in 0..self.width {
                let flat = y * self.width + x;
                let color = snapshot
                    .resolved
                    .get(flat)
                    .copied()
                    .flatten()
                    .and_then(|tile| self.palette.get(tile.index()).copied())
                    .unwrap_or_else(|| {
                        let count = snapshot.candidate_counts.get(flat).copied().unwrap_or(0);
                        entropy_shade(count, self.tile_count)
                    });

                for py in 0..cell_px {
                    for px in 0..cell_px {
                        img.put_pixel(
                            x as u32 * cell_px + px,
                            y as u32 * cell_px + py,
                            Rgba(color),
                        );
                    }
                }
            }
        }

        Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
    }
}

/// Gray shade for an open cell: more candidates render lighter
fn entropy_shade(candidate_count: usize, tile_count: usize) -> [u8; 4] {
    let span = tile_count.max(1);
    let level = 64 + (candidate_count.min(span) * 160 / span) as u8;
    [level, level, level, 255]
}
