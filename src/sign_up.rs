use crate::{GameResult, Observer, Player, Referee, ServerConfig};
use std::fmt;
use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use tracing::{Instrument, Span};

/// Collects players handed over by the accept paths and runs one game with them.
///
/// Players arrive through an [mpsc] channel so that the roster has a single writer: the task
/// running [Server::sign_up].
pub struct Server {
    config: ServerConfig,
    observers: Vec<Box<dyn Observer>>,
    span: Span,
}

impl fmt::Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Server")
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Server {
    /// A server without observers, logging under an `info` span named `server`.
    pub fn new(config: ServerConfig) -> Server {
        Server {
            config,
            observers: Vec::new(),
            span: tracing::info_span!("server"),
        }
    }

    /// Adds an [observer](Observer) attached to the game when
    /// [observe](ServerConfig::observe) is set.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Server {
        self.observers.push(observer);
        self
    }

    /// Replaces the span the sign-up and the game are logged under.
    pub fn with_span(mut self, span: Span) -> Server {
        self.span = span;
        self
    }

    /// Receives players for up to [sign_up_retries](ServerConfig::sign_up_retries) attempts
    /// of [sign_up_wait](ServerConfig::sign_up_wait) each, measured from the start of each
    /// attempt. Stops early once [max_players](crate::RefereeConfig::max_players) signed up or
    /// every sender is dropped, and after the first attempt that ends with at least
    /// [min_players](crate::RefereeConfig::min_players).
    ///
    /// # Returns
    ///
    /// The players in the order they signed up, possibly fewer than the minimum.
    pub async fn sign_up(
        &self,
        receiver: &mut mpsc::Receiver<Box<dyn Player>>,
    ) -> Vec<Box<dyn Player>> {
        let min_players = self.config.referee.min_players;
        let max_players = self.config.referee.max_players;
        let mut players = Vec::with_capacity(max_players);

        for attempt in 1..=self.config.sign_up_retries {
            let deadline = Instant::now() + self.config.sign_up_wait;
            let mut closed = false;
            while players.len() < max_players {
                match time::timeout_at(deadline, receiver.recv()).await {
                    Ok(Some(player)) => {
                        players.push(player);
                        tracing::debug!(players = players.len(), "player signed up");
                    }
                    Ok(None) => {
                        closed = true;
                        break;
                    }
                    Err(_) => break,
                }
            }
            if closed || players.len() >= min_players {
                break;
            }
            tracing::info!(
                attempt,
                players = players.len(),
                min_players,
                "not enough players signed up"
            );
        }

        players
    }

    /// [Signs up](Server::sign_up) players and runs one [game](Referee::run) with them.
    ///
    /// # Returns
    ///
    /// The result of the game, or an [empty result](GameResult::empty) when too few players
    /// signed up or the game could not be created.
    pub async fn run(self, mut receiver: mpsc::Receiver<Box<dyn Player>>) -> GameResult {
        let span = self.span.clone();
        async move {
            let players = self.sign_up(&mut receiver).await;
            if players.len() < self.config.referee.min_players {
                tracing::warn!(players = players.len(), "giving up without a game");
                return GameResult::empty();
            }

            let mut referee = match Referee::new(self.config.referee.clone(), players) {
                Ok(referee) => referee,
                Err(errors) => {
                    for error in errors {
                        tracing::warn!(?error, "failed to create the game");
                    }
                    return GameResult::empty();
                }
            };
            if self.config.observe {
                for observer in self.observers {
                    referee = referee.with_observer(observer);
                }
            }
            referee.with_span(tracing::info_span!("game")).run().await
        }
        .instrument(span)
        .await
    }
}
