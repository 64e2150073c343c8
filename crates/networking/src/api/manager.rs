//! Gamification endpoints

use super::options::RequestOptions;
use super::resource::Resource;
use crate::auth::Authenticator;
use crate::config::SdkConfig;
use crate::fixtures::{GET_GAMES_FIXTURE, PLAY_GAME_FIXTURE};
use crate::http::{HttpMethod, RequestBuilder, ResourceClient, ReqwestTransport, Transport};
use gamification_core::{Error, GameDefinition, GameModel, PlayGameModel, Result};
use tracing::{debug, error, instrument};

/// Query item used by `get_game` to narrow the games list
const GAME_PARTICIPANT_REWARD_ID: &str = "gameParticipantRewardId";

/// Entry point for the games endpoints.
///
/// Each method either hits the network through the [`ResourceClient`] or,
/// in dev mode, decodes a local fixture. Failures are logged once here and
/// returned unchanged.
pub struct ApiManager<A, T = ReqwestTransport> {
    config: SdkConfig,
    client: ResourceClient<A, T>,
}

impl<A, T> ApiManager<A, T>
where
    A: Authenticator,
    T: Transport,
{
    pub fn new(config: SdkConfig, client: ResourceClient<A, T>) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn client(&self) -> &ResourceClient<A, T> {
        &self.client
    }

    /// Games available to a participant
    #[instrument(skip(self, options), fields(dev_mode = options.dev_mode))]
    pub async fn get_games(&self, participant_id: &str, options: &RequestOptions) -> Result<GameModel> {
        let result = self
            .games_list(participant_id, None, options)
            .await
            .map_err(log_failure);

        if let Ok(model) = &result {
            debug!("Fetched {} game definitions", model.game_definitions.len());
        }
        result
    }

    /// Play the game attached to a participant's game reward.
    ///
    /// In dev mode the configured latency elapses before the fixture is read.
    #[instrument(skip(self, options), fields(dev_mode = options.dev_mode))]
    pub async fn play_game(
        &self,
        game_participant_reward_id: &str,
        options: &RequestOptions,
    ) -> Result<PlayGameModel> {
        if options.dev_mode && !self.config.dev_latency.is_zero() {
            debug!("Simulating {:?} of latency", self.config.dev_latency);
            tokio::time::sleep(self.config.dev_latency).await;
        }

        let version = self.version(options);
        let result: Result<PlayGameModel> = self
            .client
            .retrieve(&options.fetcher(PLAY_GAME_FIXTURE), || {
                let path = Resource::PlayGame {
                    game_participant_reward_id,
                    version,
                }
                .path();
                RequestBuilder::create(&self.config.instance_url, &path, HttpMethod::Get, None)
            })
            .await
            .map_err(log_failure);

        if let Ok(model) = &result {
            debug!("Play granted {} rewards", model.game_reward.len());
        }
        result
    }

    /// The game behind one participant game reward.
    ///
    /// Returns the first definition the server sends back for the filtered
    /// list, or `None` when the list is empty.
    #[instrument(skip(self, options), fields(dev_mode = options.dev_mode))]
    pub async fn get_game(
        &self,
        participant_id: &str,
        game_participant_reward_id: &str,
        options: &RequestOptions,
    ) -> Result<Option<GameDefinition>> {
        let model = self
            .games_list(participant_id, Some(game_participant_reward_id), options)
            .await
            .map_err(log_failure)?;

        Ok(model.game_definitions.into_iter().next())
    }

    async fn games_list(
        &self,
        participant_id: &str,
        game_participant_reward_id: Option<&str>,
        options: &RequestOptions,
    ) -> Result<GameModel> {
        let version = self.version(options);
        self.client
            .retrieve(&options.fetcher(GET_GAMES_FIXTURE), || {
                let path = Resource::GetGames {
                    participant_id,
                    version,
                }
                .path();
                let query = game_participant_reward_id.map(|id| [(GAME_PARTICIPANT_REWARD_ID, id)]);
                RequestBuilder::create(
                    &self.config.instance_url,
                    &path,
                    HttpMethod::Get,
                    query.as_ref().map(|items| &items[..]),
                )
            })
            .await
    }

    fn version<'a>(&'a self, options: &'a RequestOptions) -> &'a str {
        options.version.as_deref().unwrap_or(&self.config.api_version)
    }
}

fn log_failure(err: Error) -> Error {
    error!("{}", err);
    err
}
