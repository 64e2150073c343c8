//! Local JSON fixtures for offline and development use

use gamification_core::{Error, Result};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const GET_GAMES_FIXTURE: &str = "GetGames_Success";
pub const PLAY_GAME_FIXTURE: &str = "PlayGame_Success";

static EMBEDDED: [(&str, &[u8]); 2] = [
    (
        GET_GAMES_FIXTURE,
        include_bytes!("../fixtures/GetGames_Success.json"),
    ),
    (
        PLAY_GAME_FIXTURE,
        include_bytes!("../fixtures/PlayGame_Success.json"),
    ),
];

/// Where fixtures are looked up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FixtureBundle {
    /// Fixtures compiled into this crate
    #[default]
    Embedded,
    /// `<dir>/<name>.json` on disk
    Directory(PathBuf),
}

impl FixtureBundle {
    /// Names available in the embedded bundle
    pub fn embedded_names() -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(name, _)| *name)
    }

    /// Raw bytes of fixture `name`, or `ResourceNotFound`
    pub async fn load(&self, name: &str) -> Result<Vec<u8>> {
        match self {
            FixtureBundle::Embedded => EMBEDDED
                .iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|(_, bytes)| bytes.to_vec())
                .ok_or_else(|| Error::ResourceNotFound(name.to_string())),
            FixtureBundle::Directory(dir) => {
                let path = dir.join(format!("{}.json", name));
                debug!("Loading fixture from {}", path.display());
                tokio::fs::read(&path).await.map_err(|e| {
                    if e.kind() != ErrorKind::NotFound {
                        warn!("Failed to read fixture {}: {}", path.display(), e);
                    }
                    Error::ResourceNotFound(name.to_string())
                })
            }
        }
    }
}
