//! End-to-end behaviour of the games endpoints over a scripted transport.
//!
//! Everything goes through the public API: a consumer-style authenticator,
//! a transport that replays a canned response, and fixture bundles on disk.

use gamification_core::{Error, GameModel, GameType};
use gamification_networking::http::{HttpRequest, HttpResponse, Transport, TransportError};
use gamification_networking::{
    ApiManager, Authenticator, FixtureBundle, RequestOptions, ResourceClient, SdkConfig,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

const GAMES: &[u8] = include_bytes!("../fixtures/GetGames_Success.json");
const PLAY: &[u8] = include_bytes!("../fixtures/PlayGame_Success.json");

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "gamification_networking=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

struct StaticToken;

impl Authenticator for StaticToken {
    fn access_token(&self) -> Option<String> {
        Some("00Dxx0000000001!token".to_string())
    }

    async fn grant_access_token(&self) -> gamification_core::Result<String> {
        Ok("00Dxx0000000001!fresh".to_string())
    }
}

/// Replays one body with a status that can be changed between calls
struct ScriptedTransport {
    status: AtomicU16,
    body: Vec<u8>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    fn new(status: u16, body: &[u8]) -> Self {
        Self {
            status: AtomicU16::new(status),
            body: body.to_vec(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if request.header("Authorization").is_none() {
            return Err(TransportError("unauthenticated request reached transport".to_string()));
        }
        Ok(HttpResponse {
            status: self.status.load(Ordering::SeqCst),
            body: self.body.clone(),
        })
    }
}

fn fixtures_dir(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn manager(status: u16, body: &[u8]) -> ApiManager<StaticToken, ScriptedTransport> {
    init_tracing();
    let client = ResourceClient::new(Arc::new(StaticToken), ScriptedTransport::new(status, body));
    ApiManager::new(SdkConfig::new("https://instance.example.com"), client)
}

#[tokio::test]
async fn fixture_games_decode() {
    let manager = manager(200, GAMES);
    let model = manager.get_games("123", &RequestOptions::dev()).await.unwrap();

    assert!(model.status);
    assert!(model.message.is_none());
    assert_eq!(model.game_definitions.len(), 4);

    let types: Vec<GameType> = model.game_definitions.iter().map(|g| g.game_type).collect();
    assert_eq!(
        types,
        vec![GameType::SpinaWheel, GameType::ScratchCard, GameType::SpinaWheel, GameType::Other]
    );
    assert!(model.game_definitions.iter().all(|g| g.has_valid_window()));
    assert_eq!(manager.client().transport().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn live_401_is_authentication_needed() {
    let manager = manager(401, GAMES);
    let err = manager.get_games("123", &RequestOptions::default()).await.unwrap_err();
    assert!(matches!(err, Error::AuthenticationNeeded));
    assert_eq!(manager.client().transport().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn live_403_is_functionality_not_enabled() {
    let manager = manager(403, GAMES);
    let err = manager.get_games("123", &RequestOptions::default()).await.unwrap_err();
    assert!(matches!(err, Error::FunctionalityNotEnabled));
}

#[tokio::test]
async fn live_unmapped_status_carries_code() {
    let manager = manager(200, GAMES);
    manager.client().transport().status.store(502, Ordering::SeqCst);
    match manager.get_games("123", &RequestOptions::default()).await {
        Err(Error::ResponseUnsuccessful { message, .. }) => assert!(message.contains("502")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn dev_play_game_waits_then_decodes() {
    let manager = manager(500, PLAY);
    let started = tokio::time::Instant::now();

    let model = manager.play_game("123", &RequestOptions::dev()).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert!(model.status);
    let reward = model.first_reward().unwrap();
    assert_eq!(reward.reward_type, "LoyaltyPoints");
    assert!(reward.expiration_date.is_some());
    assert_eq!(manager.client().transport().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unrecognized_date_fails_decoding() {
    init_tracing();
    let client = ResourceClient::new(Arc::new(StaticToken), ScriptedTransport::new(200, GAMES))
        .with_bundle(FixtureBundle::Directory(fixtures_dir("tests/fixtures")));
    let manager = ApiManager::new(SdkConfig::new("https://instance.example.com"), client);

    let err = manager
        .get_games("123", &RequestOptions::dev_with_fixture("GetGames_BadDate"))
        .await
        .unwrap_err();
    match err {
        Error::Decoding(e) => assert!(e.to_string().contains("01/08/2024 10:00 AM")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn get_game_on_empty_list_is_none() {
    init_tracing();
    let client = ResourceClient::new(Arc::new(StaticToken), ScriptedTransport::new(200, GAMES))
        .with_bundle(FixtureBundle::Directory(fixtures_dir("tests/fixtures")));
    let manager = ApiManager::new(SdkConfig::new("https://instance.example.com"), client);

    let game = manager
        .get_game("123", "0lh01", &RequestOptions::dev_with_fixture("GetGames_Empty"))
        .await
        .unwrap();
    assert!(game.is_none());
}

#[tokio::test]
async fn live_and_fixture_paths_agree() {
    let manager = manager(200, GAMES);
    let live = manager.get_games("123", &RequestOptions::default()).await.unwrap();
    let fixture = manager.get_games("123", &RequestOptions::dev()).await.unwrap();
    assert_eq!(live, fixture);

    let encoded = serde_json::to_vec(&live).unwrap();
    let decoded: GameModel = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(decoded, live);
}
