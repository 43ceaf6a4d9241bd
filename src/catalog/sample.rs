use super::model::{Catalog, Track};

fn track(id: &str, title: &str, artist: &str, duration_secs: u32, cover_url: &str) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        duration_secs,
        cover_url: Some(cover_url.to_string()),
    }
}

impl Catalog {
    /// The built-in demo catalog.
    pub fn sample() -> Self {
        Self::from_validated(vec![
            track(
                "1",
                "Bohemian Rhapsody",
                "Queen",
                354,
                "https://upload.wikimedia.org/wikipedia/en/9/9f/Bohemian_Rhapsody.png",
            ),
            track(
                "2",
                "Stairway to Heaven",
                "Led Zeppelin",
                482,
                "https://upload.wikimedia.org/wikipedia/en/2/26/Led_Zeppelin_-_Led_Zeppelin_IV.jpg",
            ),
            track(
                "3",
                "Hotel California",
                "Eagles",
                390,
                "https://upload.wikimedia.org/wikipedia/en/4/49/Hotelcalifornia.jpg",
            ),
        ])
    }
}
