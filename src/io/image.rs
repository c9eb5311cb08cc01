//! PNG rendering of solved grids from palette colors or tile art

use crate::io::error::{CollapseError, Result, configuration};
use crate::spatial::grid::Grid;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Transparent fill for unresolved cells
const UNRESOLVED_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Evenly-spread opaque color for each tile in a catalog
///
/// Hues step by the golden angle so neighboring indices stay visually
/// distinct at any catalog size.
pub fn tile_palette(tile_count: usize) -> Vec<[u8; 4]> {
    (0..tile_count)
        .map(|index| {
            let hue = (index as f64 * 137.508) % 360.0;
            hsv_to_rgba(hue, 0.55, 0.85)
        })
        .collect()
}

fn hsv_to_rgba(hue: f64, saturation: f64, value: f64) -> [u8; 4] {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    [
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
        255,
    ]
}

/// Tile art set loaded from a directory of `tile-NN.png` images
///
/// The all-or-nothing load mirrors the asset contract of the on-screen
/// renderer: one square image per catalog tile, all sharing one size.
#[derive(Debug)]
pub struct TileArt {
    images: Vec<RgbaImage>,
    tile_px: u32,
}

impl TileArt {
    /// Load `tile-00.png` through `tile-NN.png` for every catalog tile
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` when a file is missing or undecodable, and a
    /// `Configuration` error when an image is not square or does not match
    /// the size of the first image.
    pub fn load(directory: &Path, tile_count: usize) -> Result<Self> {
        let mut images = Vec::with_capacity(tile_count);
        let mut tile_px = 0;

        for index in 0..tile_count {
            let path = directory.join(format!("tile-{index:02}.png"));
            let decoded = image::open(&path)
                .map_err(|source| CollapseError::ImageLoad {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();

            if decoded.width() != decoded.height() {
                return Err(configuration(
                    "tile-art",
                    &path.display(),
                    &"tile images must be square",
                ));
            }
            if tile_px == 0 {
                tile_px = decoded.width();
            } else if decoded.width() != tile_px {
                return Err(configuration(
                    "tile-art",
                    &path.display(),
                    &format!("all tile images must be {tile_px}px"),
                ));
            }
            images.push(decoded);
        }

        Ok(Self { images, tile_px })
    }

    /// Edge length of each tile image in pixels
    pub const fn tile_px(&self) -> u32 {
        self.tile_px
    }

    fn image(&self, index: usize) -> Option<&RgbaImage> {
        self.images.get(index)
    }
}

/// Render a grid as solid color blocks, one `cell_size` square per cell
///
/// Unresolved cells render transparent; resolved cells take their tile's
/// palette color.
pub fn render_grid(grid: &Grid, palette: &[[u8; 4]], cell_size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(
        grid.width() as u32 * cell_size,
        grid.height() as u32 * cell_size,
    );

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let color = grid
                .tile_at(x, y)
                .and_then(|tile| palette.get(tile.index()))
                .copied()
                .unwrap_or(UNRESOLVED_COLOR);
            fill_cell(&mut img, x as u32, y as u32, cell_size, color);
        }
    }

    img
}

/// Render a grid by compositing loaded tile art images
pub fn render_grid_with_art(grid: &Grid, art: &TileArt) -> RgbaImage {
    let tile_px = art.tile_px();
    let mut img = RgbaImage::new(
        grid.width() as u32 * tile_px,
        grid.height() as u32 * tile_px,
    );

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(tile_image) = grid.tile_at(x, y).and_then(|tile| art.image(tile.index()))
            else {
                continue;
            };
            for (px, py, pixel) in tile_image.enumerate_pixels() {
                img.put_pixel(x as u32 * tile_px + px, y as u32 * tile_px + py, *pixel);
            }
        }
    }

    img
}

fn fill_cell(img: &mut RgbaImage, x: u32, y: u32, cell_size: u32, color: [u8; 4]) {
    for py in 0..cell_size {
        for px in 0..cell_size {
            img.put_pixel(x * cell_size + px, y * cell_size + py, Rgba(color));
        }
    }
}

/// Save a rendered image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` when the parent directory cannot be created and
/// `ImageExport` when encoding or writing fails.
pub fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| CollapseError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    img.save(output_path).map_err(|source| CollapseError::ImageExport {
        path: output_path.to_path_buf(),
        source,
    })
}
