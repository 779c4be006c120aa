//! Portfolio Data
//!
//! Single source of truth for everything configurable: player tuning,
//! sprite clips, camera policy, the about panel and the project stations.
//! Loaded once at startup (see `load`), read-only afterwards except for
//! viewport-driven station clamping.

mod load;

pub use load::*;

use serde::{Serialize, Deserialize};
use crate::game::{Aabb, CameraPolicy, ClipSet, Link, Media, Station, StationDetail};

/// Default cap on frame delta, in seconds (keeps a resumed tab from teleporting the player)
pub const DEFAULT_MAX_FRAME_DT: f32 = 0.033;

/// Player tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Spawn point (center of the player), world pixels
    pub start: [f32; 2],
    /// Pixels per second
    pub speed: f32,
    /// Collision box size (not sprite size)
    pub width: f32,
    pub height: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            start: [140.0, 220.0],
            speed: 260.0,
            width: 52.0,
            height: 44.0,
        }
    }
}

/// Camera and world sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub policy: CameraPolicy,
    /// World size for `CameraPolicy::Follow` (ignored by `Fixed`, where the world is the viewport)
    pub world_size: [f32; 2],
    /// Minimum gap between a station and the world edge after viewport fitting
    pub station_pad: f32,
    /// Minimum gap between the player's center and the world edge
    pub player_margin: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            policy: CameraPolicy::Fixed,
            world_size: [1600.0, 1000.0],
            station_pad: 16.0,
            player_margin: 20.0,
        }
    }
}

/// Content of the about panel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AboutInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

fn default_max_frame_dt() -> f32 {
    DEFAULT_MAX_FRAME_DT
}

/// Complete portfolio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(default)]
    pub player: PlayerSettings,
    #[serde(default)]
    pub sprites: ClipSet,
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default = "default_max_frame_dt")]
    pub max_frame_dt: f32,
    #[serde(default)]
    pub about: AboutInfo,
    pub stations: Vec<Station>,
}

impl Default for PortfolioData {
    fn default() -> Self {
        Self {
            player: PlayerSettings::default(),
            sprites: ClipSet::default(),
            camera: CameraSettings::default(),
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
            about: default_about(),
            stations: default_stations(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_about() -> AboutInfo {
    AboutInfo {
        name: "Kaboochy".to_string(),
        tagline: "Game developer".to_string(),
        paragraphs: strings(&[
            "I build games and interactive things, from 2D arcade projects to first-person Unreal prototypes.",
            "Walk the dino around and press E at a project to read more.",
        ]),
        links: vec![
            Link::new("GitHub", "https://github.com/Kaboochy"),
            Link::new("itch.io", "https://kaboochy.itch.io/"),
        ],
    }
}

fn default_stations() -> Vec<Station> {
    vec![
        Station {
            id: "zenog".into(),
            bounds: Aabb::new(300.0, 240.0, 150.0, 120.0),
            detail: StationDetail {
                title: "2D High Score Game".to_string(),
                subtitle: "Made with XNA, sprite sheets, and enemy AI".to_string(),
                description: "A fast, responsive 2D game focused on player-feel, cutscenes, and clean collisions.".to_string(),
                bullets: strings(&[
                    "Implemented movement system.",
                    "Built an animation controller + state machine for run/jump/attack.",
                    "Designed a dynamic enemy system that managed the game's difficulty.",
                ]),
                tech: strings(&["XNA Framework", "C#", "Aseprite", "Git"]),
                links: vec![
                    Link::new("GitHub Repo", "https://github.com/Kaboochy/SchoolZenog"),
                ],
                media: Some(Media::Video { src: "https://www.youtube.com/embed/onYZIVCZa5M".to_string() }),
            },
        },
        Station {
            id: "project-kaos".into(),
            bounds: Aabb::new(600.0, 240.0, 150.0, 130.0),
            detail: StationDetail {
                title: "3D Unreal Engine Game".to_string(),
                subtitle: "Home-made animations, assets, and gameplay".to_string(),
                description: "Project Kaos is a first-person action RPG following Zy as he fights to reunite the city of Zenog by defeating the power of Kaos magic.".to_string(),
                bullets: strings(&[
                    "Motion-captured animations using Xbox Kinect.",
                    "Lead a team using Scrum and Agile principles.",
                    "Built gameplay using Unreal Engine Blueprints.",
                ]),
                tech: strings(&["Unreal Engine", "Blueprints", "Blender", "FPS"]),
                links: vec![
                    Link::new("Project Site", "https://sites.google.com/k12.friscoisd.org/projectkaos/home"),
                ],
                media: Some(Media::Image { src: "assets/media/project_kaos.png".to_string() }),
            },
        },
        Station {
            id: "blue-car".into(),
            bounds: Aabb::new(500.0, 440.0, 150.0, 110.0),
            detail: StationDetail {
                title: "Browser-Based Unity Game".to_string(),
                subtitle: "Optimization, game feel, rendering".to_string(),
                description: "A downhill racing time-trial game optimized to run smoothly in Chrome on itch.io.".to_string(),
                bullets: strings(&[
                    "Created and animated custom assets in Maya.",
                    "Programmed gameplay in Unity using C#.",
                    "Optimized rendering and lighting for browser performance.",
                ]),
                tech: strings(&["Unity", "C#", "Maya", "WebGL"]),
                links: vec![
                    Link::new("itch.io Page", "https://kaboochy.itch.io/"),
                ],
                media: Some(Media::Video { src: "https://youtu.be/T2XLLKnBQ3U".to_string() }),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_portfolio_is_valid() {
        let data = PortfolioData::default();
        assert_eq!(data.stations.len(), 3);
        validate(&data).unwrap();
    }

    #[test]
    fn test_default_stations_do_not_overlap() {
        let stations = PortfolioData::default().stations;
        for (i, a) in stations.iter().enumerate() {
            for b in &stations[i + 1..] {
                assert!(!a.bounds.overlaps(&b.bounds), "{} overlaps {}", a.id, b.id);
            }
        }
    }
}
