use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use image::imageops::FilterType;
use thiserror::Error;

/// Cover height in terminal rows. Each row shows two pixels (`▀`).
pub const ART_ROWS: u16 = 8;
/// Cover width in terminal columns; two per row keeps the art roughly square.
pub const ART_COLS: u16 = ART_ROWS * 2;

/// Pixel rows of `(R, G, B)`; twice as many rows as terminal lines.
pub type ArtPixels = Vec<Vec<(u8, u8, u8)>>;

#[derive(Debug, Error)]
pub enum CoverError {
    #[error("cover request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("cover could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode an encoded image and resample it to `cols` x `rows` cells.
pub fn decode_cover(bytes: &[u8], cols: u16, rows: u16) -> Result<ArtPixels, CoverError> {
    let img = image::load_from_memory(bytes)?;
    let px_w = u32::from(cols.max(1));
    let px_h = u32::from(rows.max(1)) * 2;
    let rgb = img.resize_exact(px_w, px_h, FilterType::Triangle).to_rgb8();

    let pixels = (0..px_h)
        .map(|y| {
            (0..px_w)
                .map(|x| {
                    let p = rgb.get_pixel(x, y);
                    (p[0], p[1], p[2])
                })
                .collect()
        })
        .collect();
    Ok(pixels)
}

/// Download `url` and decode it into a pixel grid.
pub fn fetch_cover(
    url: &str,
    timeout: Duration,
    cols: u16,
    rows: u16,
) -> Result<ArtPixels, CoverError> {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .build();
    let agent: ureq::Agent = config.into();

    let bytes = agent.get(url).call()?.body_mut().read_to_vec()?;
    decode_cover(&bytes, cols, rows)
}

/// Fetch on a background thread; the result arrives on the returned channel.
pub fn spawn_cover_fetch(
    url: String,
    timeout: Duration,
    cols: u16,
    rows: u16,
) -> mpsc::Receiver<Result<ArtPixels, CoverError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(fetch_cover(&url, timeout, cols, rows));
    });
    rx
}
