//! Portfolio loading and validation
//!
//! Uses RON (Rusty Object Notation) for human-readable portfolio files.
//! Supports both plain and brotli-compressed RON:
//! - Plain text is detected by its first non-whitespace character
//! - Anything else is treated as brotli and decompressed first
//!
//! Validation failures are configuration bugs. The app refuses to start
//! on one instead of limping along with a broken scene.

use std::collections::HashSet;
use std::io::Cursor;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use crate::game::{AnimationClip, CameraPolicy, Station};
use super::PortfolioData;

/// Validation limits to keep a hand-edited file from doing anything silly
pub mod limits {
    /// Maximum number of stations in a portfolio
    pub const MAX_STATIONS: usize = 64;
    /// Maximum frames in one sprite strip
    pub const MAX_FRAMES: u32 = 256;
    /// Maximum playback rate of a sprite strip
    pub const MAX_FPS: f32 = 240.0;
    /// Maximum coordinate value
    pub const MAX_COORD: f32 = 100_000.0;
}

/// Error type for portfolio loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    DecompressError(String),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::DecompressError(e) => write!(f, "Decompression error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Check if a float is usable as a coordinate
fn is_valid_coord(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn is_positive(f: f32) -> bool {
    is_valid_coord(f) && f > 0.0
}

fn validate_clip(clip: &AnimationClip, context: &str) -> Result<(), String> {
    if clip.frames == 0 || clip.frames > limits::MAX_FRAMES {
        return Err(format!("{}: frame count {} out of range (1..={})",
            context, clip.frames, limits::MAX_FRAMES));
    }
    if !(clip.fps.is_finite() && clip.fps > 0.0) {
        return Err(format!("{}: fps must be positive, got {}", context, clip.fps));
    }
    if clip.fps > limits::MAX_FPS {
        return Err(format!("{}: fps {} above limit {}", context, clip.fps, limits::MAX_FPS));
    }
    if clip.frame_width == 0 || clip.frame_height == 0 {
        return Err(format!("{}: frame size must be non-zero ({}x{})",
            context, clip.frame_width, clip.frame_height));
    }
    if clip.sheet.trim().is_empty() {
        return Err(format!("{}: missing sheet path", context));
    }
    Ok(())
}

fn validate_station(station: &Station, world: Option<[f32; 2]>) -> Result<(), String> {
    let context = format!("station '{}'", station.id);
    let b = &station.bounds;

    if station.id.as_str().trim().is_empty() {
        return Err("station with empty id".to_string());
    }
    if !is_valid_coord(b.x) || !is_valid_coord(b.y) {
        return Err(format!("{}: invalid position ({}, {})", context, b.x, b.y));
    }
    if !is_positive(b.w) || !is_positive(b.h) {
        return Err(format!("{}: size must be positive ({} x {})", context, b.w, b.h));
    }
    if b.x < 0.0 || b.y < 0.0 {
        return Err(format!("{}: negative position ({}, {})", context, b.x, b.y));
    }
    if let Some([world_w, world_h]) = world {
        if b.right() > world_w || b.bottom() > world_h {
            return Err(format!("{}: extends past the world ({}x{})", context, world_w, world_h));
        }
    }
    if station.detail.title.trim().is_empty() {
        return Err(format!("{}: missing title", context));
    }
    Ok(())
}

/// Validate an entire portfolio
pub fn validate(data: &PortfolioData) -> Result<(), ConfigError> {
    let fail = ConfigError::ValidationError;

    let p = &data.player;
    if !is_positive(p.speed) {
        return Err(fail(format!("player speed must be positive, got {}", p.speed)));
    }
    if !is_positive(p.width) || !is_positive(p.height) {
        return Err(fail(format!("player box must be positive ({} x {})", p.width, p.height)));
    }
    if !is_valid_coord(p.start[0]) || !is_valid_coord(p.start[1]) {
        return Err(fail(format!("invalid player start ({}, {})", p.start[0], p.start[1])));
    }

    for (state, clip) in data.sprites.iter() {
        validate_clip(clip, &format!("{:?} clip", state)).map_err(fail)?;
    }

    let cam = &data.camera;
    if !(cam.station_pad.is_finite() && cam.station_pad >= 0.0)
        || !(cam.player_margin.is_finite() && cam.player_margin >= 0.0)
    {
        return Err(fail("camera padding must be non-negative".to_string()));
    }
    let follow_world = match cam.policy {
        CameraPolicy::Fixed => None,
        CameraPolicy::Follow => {
            if !is_positive(cam.world_size[0]) || !is_positive(cam.world_size[1]) {
                return Err(fail(format!("world size must be positive ({} x {})",
                    cam.world_size[0], cam.world_size[1])));
            }
            Some(cam.world_size)
        }
    };

    if !(data.max_frame_dt.is_finite() && data.max_frame_dt > 0.0) {
        return Err(fail(format!("max_frame_dt must be positive, got {}", data.max_frame_dt)));
    }

    if data.stations.len() > limits::MAX_STATIONS {
        return Err(fail(format!("too many stations ({} > {})",
            data.stations.len(), limits::MAX_STATIONS)));
    }
    let mut seen = HashSet::new();
    for station in &data.stations {
        validate_station(station, follow_world).map_err(fail)?;
        if !seen.insert(station.id.as_str()) {
            return Err(fail(format!("duplicate station id '{}'", station.id)));
        }
    }

    Ok(())
}

/// Plain RON starts with a struct paren, a name, a comment or an extension attribute
fn looks_like_plain_ron(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .map(|&b| b == b'(' || b == b'/' || b == b'#' || b.is_ascii_alphabetic())
        .unwrap_or(false)
}

/// Parse and validate a portfolio from bytes (plain or brotli-compressed RON)
pub fn load_from_bytes(bytes: &[u8]) -> Result<PortfolioData, ConfigError> {
    let contents = if looks_like_plain_ron(bytes) {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8: {}", e),
            )))?
    } else {
        let mut decompressed = Vec::new();
        brotli::BrotliDecompress(&mut Cursor::new(bytes), &mut decompressed)
            .map_err(|e| ConfigError::DecompressError(e.to_string()))?;
        String::from_utf8(decompressed)
            .map_err(|e| ConfigError::DecompressError(format!("invalid UTF-8 after decompression: {}", e)))?
    };

    let data: PortfolioData = ron::from_str(&contents)?;
    validate(&data)?;
    Ok(data)
}

/// Load a portfolio from a file
#[cfg(not(target_arch = "wasm32"))]
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<PortfolioData, ConfigError> {
    let bytes = std::fs::read(path.as_ref())?;
    load_from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use crate::game::{Aabb, StationDetail};
    use crate::project::DEFAULT_MAX_FRAME_DT;

    fn to_ron(data: &PortfolioData) -> String {
        ron::ser::to_string_pretty(data, ron::ser::PrettyConfig::new()).unwrap()
    }

    fn expect_validation_error(data: &PortfolioData, needle: &str) {
        match validate(data) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains(needle), "'{}' does not mention '{}'", msg, needle)
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_ron_round_trip() {
        let data = PortfolioData::default();
        let loaded = load_from_bytes(to_ron(&data).as_bytes()).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_compressed_ron() {
        let data = PortfolioData::default();
        let text = to_ron(&data);
        let mut compressed = Vec::new();
        brotli::BrotliCompress(
            &mut Cursor::new(text.as_bytes()),
            &mut compressed,
            &brotli::enc::BrotliEncoderParams::default(),
        )
        .unwrap();

        let loaded = load_from_bytes(&compressed).unwrap();
        assert_eq!(loaded.stations.len(), 3);
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let text = r#"
            // only stations are required
            (
                stations: [
                    (
                        id: "solo",
                        bounds: (x: 10.0, y: 10.0, w: 100.0, h: 80.0),
                        detail: (title: "Solo"),
                    ),
                ],
            )
        "#;
        let data = load_from_bytes(text.as_bytes()).unwrap();
        assert_eq!(data.stations[0].id.as_str(), "solo");
        assert_eq!(data.player.speed, 260.0);
        assert_eq!(data.max_frame_dt, DEFAULT_MAX_FRAME_DT);
        assert_eq!(data.camera.policy, CameraPolicy::Fixed);
    }

    #[test]
    fn test_partial_settings_blocks() {
        let text = r#"
            (
                player: (speed: 300.0),
                camera: (policy: Follow),
                stations: [],
            )
        "#;
        let data = load_from_bytes(text.as_bytes()).unwrap();
        assert_eq!(data.player.speed, 300.0);
        assert_eq!(data.player.start, [140.0, 220.0]);
        assert_eq!(data.player.width, 52.0);
        assert_eq!(data.camera.policy, CameraPolicy::Follow);
        assert_eq!(data.camera.world_size, [1600.0, 1000.0]);
        assert_eq!(data.camera.station_pad, 16.0);
    }

    #[test]
    fn test_load_from_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", to_ron(&PortfolioData::default())).unwrap();

        let loaded = load_from_path(temp_file.path()).unwrap();
        assert_eq!(loaded.stations[1].id.as_str(), "project-kaos");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not valid ron data").unwrap();
        assert!(matches!(load_from_path(temp_file.path()), Err(ConfigError::ParseError(_))));

        assert!(matches!(load_from_path("/nonexistent/portfolio.ron"), Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_garbage_binary_is_rejected() {
        let result = load_from_bytes(&[0xff, 0x00, 0x13, 0x37, 0x42]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_size_station() {
        let mut data = PortfolioData::default();
        data.stations[0].bounds.w = 0.0;
        expect_validation_error(&data, "size must be positive");
    }

    #[test]
    fn test_rejects_nan_station() {
        let mut data = PortfolioData::default();
        data.stations[2].bounds.y = f32::NAN;
        expect_validation_error(&data, "invalid position");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut data = PortfolioData::default();
        data.stations[1].id = "zenog".into();
        expect_validation_error(&data, "duplicate station id");
    }

    #[test]
    fn test_rejects_bad_clip() {
        let mut data = PortfolioData::default();
        data.sprites.run.frames = 0;
        expect_validation_error(&data, "Run clip");

        let mut data = PortfolioData::default();
        data.sprites.idle.fps = 0.0;
        expect_validation_error(&data, "fps must be positive");

        let mut data = PortfolioData::default();
        data.sprites.run.fps = 2_000_000.0;
        expect_validation_error(&data, "above limit");

        let mut data = PortfolioData::default();
        data.sprites.run.fps = limits::MAX_FPS;
        validate(&data).unwrap();
    }

    #[test]
    fn test_follow_world_must_contain_stations() {
        let mut data = PortfolioData::default();
        data.camera.policy = CameraPolicy::Follow;
        data.camera.world_size = [2000.0, 1200.0];
        validate(&data).unwrap();

        data.stations.push(Station {
            id: "outside".into(),
            bounds: Aabb::new(1950.0, 100.0, 100.0, 100.0),
            detail: StationDetail::titled("Outside"),
        });
        expect_validation_error(&data, "extends past the world");
    }

    #[test]
    fn test_rejects_bad_player() {
        let mut data = PortfolioData::default();
        data.player.speed = -1.0;
        expect_validation_error(&data, "speed");
    }
}
