use std::io::Cursor;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use image::{ImageFormat, Rgb, RgbImage};

use super::*;
use crate::config::CoverSettings;

fn png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn decode_cover_resamples_to_half_block_grid() {
    let bytes = png(40, 40, [200, 10, 30]);
    let pixels = decode_cover(&bytes, 6, 3).unwrap();

    assert_eq!(pixels.len(), 6);
    assert!(pixels.iter().all(|row| row.len() == 6));
    assert!(pixels.iter().flatten().all(|&p| p == (200, 10, 30)));
}

#[test]
fn decode_cover_rejects_garbage() {
    let err = decode_cover(b"definitely not an image", 4, 2).unwrap_err();
    assert!(matches!(err, CoverError::Decode(_)));
}

#[test]
fn fetch_cover_fails_on_malformed_url() {
    let res = fetch_cover("not a url at all", Duration::from_millis(500), 4, 2);
    assert!(matches!(res, Err(CoverError::Http(_))));
}

#[test]
fn disabled_store_never_fetches() {
    let mut store = CoverStore::new(&CoverSettings {
        enabled: false,
        ..CoverSettings::default()
    });
    store.request("https://example.invalid/a.png");
    assert!(store.get("https://example.invalid/a.png").is_none());
    assert!(!store.poll());
}

#[test]
fn poll_moves_finished_fetches_into_slots() {
    let mut store = CoverStore::new(&CoverSettings::default());

    let (ok_tx, ok_rx) = mpsc::channel();
    let (err_tx, err_rx) = mpsc::channel::<Result<ArtPixels, CoverError>>();
    let (gone_tx, gone_rx) = mpsc::channel::<Result<ArtPixels, CoverError>>();
    store.track("ok", ok_rx);
    store.track("bad", err_rx);
    store.track("gone", gone_rx);
    drop(gone_tx);

    assert!(matches!(store.get("ok"), Some(CoverSlot::Loading)));

    ok_tx.send(Ok(vec![vec![(1, 2, 3)]])).unwrap();
    let decode_err = decode_cover(b"nope", 1, 1).unwrap_err();
    err_tx.send(Err(decode_err)).unwrap();

    assert!(store.poll());
    assert_eq!(store.pixels("ok"), Some(&vec![vec![(1, 2, 3)]]));
    assert!(matches!(store.get("bad"), Some(CoverSlot::Failed)));
    assert!(matches!(store.get("gone"), Some(CoverSlot::Failed)));
    assert!(store.pixels("bad").is_none());

    // Nothing left in flight.
    assert!(!store.poll());
}

#[test]
fn request_is_issued_once_per_url_and_degrades_on_failure() {
    let mut store = CoverStore::new(&CoverSettings {
        enabled: true,
        timeout_ms: 500,
    });
    store.request("not a url at all");
    store.request("not a url at all");
    assert!(matches!(
        store.get("not a url at all"),
        Some(CoverSlot::Loading)
    ));

    let deadline = Instant::now() + Duration::from_secs(5);
    while !store.poll() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(10));
    }
    assert!(matches!(
        store.get("not a url at all"),
        Some(CoverSlot::Failed)
    ));
}
