//! Canned setlist.fm API responses

use serde_json::Value;

/// Identifier of the artist in [`artist`]
pub const ARTIST_MBID: &str = "4bd95eea-b9f6-4d70-a36c-cfea77431553";

/// `search/artists?artistName=chain&sort=relevance`
pub fn artists() -> Value {
    parse(include_str!("../fixtures/artists.json"))
}

/// `artist/4bd95eea-b9f6-4d70-a36c-cfea77431553`
pub fn artist() -> Value {
    parse(include_str!("../fixtures/artist.json"))
}

fn parse(raw: &str) -> Value {
    serde_json::from_str(raw).expect("fixture is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artists_fixture_shape() {
        let body = artists();
        assert_eq!(body["type"], "artists");
        assert_eq!(body["artist"].as_array().unwrap().len(), 3);
        assert_eq!(body["artist"][0]["mbid"], ARTIST_MBID);
    }

    #[test]
    fn test_artist_fixture_shape() {
        let body = artist();
        assert_eq!(body["mbid"], ARTIST_MBID);
        assert_eq!(body["name"], "Alice in Chains");
    }
}
