use super::{call_with_timeout, Game, GameOver, GameResult, Turns};
use crate::{
    tiles, Bag, Board, Call, Fault, GameSnapshot, NewError, Observer, Player, PlayerState,
    RefereeConfig, StateRecord, TILES_LEN, TILE_LIMIT,
};
use either::Either;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use tracing::{Instrument, Span};

/// Runs one game from setup to the [result](GameResult). Created from [Referee::new] or
/// [Referee::from_record].
///
/// The game is a chain of owned phases: [Referee] sets up, [Turns] plays one turn at a time,
/// and [GameOver] reports the result. Each phase is consumed to produce either the next phase
/// or the end of the game, so a game cannot be advanced twice from the same state.
#[derive(Debug)]
pub struct Referee {
    game: Game,
}

/// The name a player is reported under until [Player::name] answers.
fn placeholder_name(index: usize) -> String {
    format!("player {index}")
}

impl Referee {
    /// Checks the number of players and the supply of [tiles](crate::Tile), builds a bag of
    /// every [tile](crate::Tile) copied `unique_tile_copied_count` times, shuffles it, deals
    /// `hand_len` [tiles](crate::Tile) from the end of the bag to each player in registration
    /// order and places one more [tile](crate::Tile) from the bag at `(0, 0)`.
    ///
    /// The bag is shuffled by a [StdRng] seeded with [RefereeConfig::seed] when present.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyPlayers] Attempting to start with no players.
    /// * [NewError::NotEnoughPlayers] Attempting to start with fewer than
    /// [min_players](RefereeConfig::min_players).
    /// * [NewError::TooManyPlayers] Attempting to start with more than
    /// [max_players](RefereeConfig::max_players).
    /// * [NewError::EmptyBag] Attempting to start with an empty bag.
    /// * [NewError::EmptyHands] Attempting to start with empty hands.
    /// * [NewError::NotEnoughTiles] Attempting to deal more [tiles](crate::Tile) than
    /// [tiles](crate::Tile) in the bag.
    /// * [NewError::TooManyTiles] Attempting to create more [tiles](crate::Tile) in the bag
    /// than the [tile limit](TILE_LIMIT).
    pub fn new(
        config: RefereeConfig,
        players: Vec<Box<dyn Player>>,
    ) -> Result<Referee, HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(5);
        Referee::check_players(&config, players.len(), &mut errors);
        Referee::check_tiles(&config, players.len(), &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut bag = Referee::new_bag(&config);
        let players = players
            .into_iter()
            .enumerate()
            .map(|(index, player)| {
                let mut player_state = PlayerState::new(player, placeholder_name(index));
                player_state.set_tiles(bag.drain(bag.len() - config.hand_len..));
                player_state
            })
            .collect();

        let mut board = Board::with_capacity(bag.len());
        if let Some(tile) = bag.pop() {
            board.insert((0, 0), tile);
        }

        Ok(Referee::from_parts(config, board, bag, players))
    }

    /// Starts from a received state instead of dealing: the board, the bag and each player's
    /// score and [tiles](crate::Tile) come from `record`, matched to `players` by position.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyPlayers] Attempting to start with no players.
    /// * [NewError::NotEnoughPlayers] Attempting to start with fewer than
    /// [min_players](RefereeConfig::min_players).
    /// * [NewError::TooManyPlayers] Attempting to start with more than
    /// [max_players](RefereeConfig::max_players).
    /// * [NewError::PlayerRecordsMismatch] The record describes a different number of players.
    /// * [NewError::RepeatedCells] The record names some cell of the board more than once.
    pub fn from_record(
        config: RefereeConfig,
        record: &StateRecord,
        players: Vec<Box<dyn Player>>,
    ) -> Result<Referee, HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(3);
        Referee::check_players(&config, players.len(), &mut errors);
        if players.len() != record.players.len() {
            errors.insert(NewError::PlayerRecordsMismatch {
                players_len: players.len(),
                records_len: record.players.len(),
            });
        }
        let board = match (record.board(), errors.is_empty()) {
            (Ok(board), true) => board,
            (Ok(_), false) => return Err(errors),
            (Err(error), _) => {
                errors.insert(error);
                return Err(errors);
            }
        };

        let players = players
            .into_iter()
            .zip_eq(&record.players)
            .enumerate()
            .map(|(index, (player, player_record))| {
                let mut player_state = PlayerState::new(player, placeholder_name(index));
                player_state.set_tiles(player_record.tiles.iter().copied());
                player_state.update_score(player_record.score);
                player_state
            })
            .collect();

        Ok(Referee::from_parts(
            config,
            board,
            record.bag.clone(),
            players,
        ))
    }

    fn from_parts(
        config: RefereeConfig,
        board: Board,
        bag: Bag,
        players: Vec<PlayerState>,
    ) -> Referee {
        Referee {
            game: Game {
                config,
                board,
                bag,
                players,
                observers: Vec::new(),
                span: tracing::info_span!("game"),
            },
        }
    }

    fn check_players(config: &RefereeConfig, players_len: usize, errors: &mut HashSet<NewError>) {
        if players_len == 0 {
            errors.insert(NewError::EmptyPlayers);
        } else if players_len < config.min_players {
            errors.insert(NewError::NotEnoughPlayers {
                players_len,
                min_players: config.min_players,
            });
        }
        if players_len > config.max_players {
            errors.insert(NewError::TooManyPlayers {
                players_len,
                max_players: config.max_players,
            });
        }
    }

    fn check_tiles(config: &RefereeConfig, players_len: usize, errors: &mut HashSet<NewError>) {
        if config.unique_tile_copied_count == 0 {
            errors.insert(NewError::EmptyBag);
        }
        if config.hand_len == 0 {
            errors.insert(NewError::EmptyHands);
        }

        // one more tile opens the board
        let requested_tiles = players_len.saturating_mul(config.hand_len).saturating_add(1);
        let tiles_in_bag = TILES_LEN.saturating_mul(config.unique_tile_copied_count);

        if requested_tiles > tiles_in_bag {
            errors.insert(NewError::NotEnoughTiles {
                requested_tiles,
                tiles_in_bag,
            });
        }

        if tiles_in_bag > TILE_LIMIT {
            errors.insert(NewError::TooManyTiles { tiles_in_bag });
        }
    }

    fn new_bag(config: &RefereeConfig) -> Bag {
        let mut bag = tiles()
            .into_iter()
            .flat_map(|tile| vec![tile; config.unique_tile_copied_count])
            .collect_vec();
        match config.seed {
            Some(seed) => bag.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => bag.shuffle(&mut rand::thread_rng()),
        }
        bag
    }

    /// Adds an [observer](Observer) that receives every state of the game and its end.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Referee {
        self.game.observers.push(observer);
        self
    }

    /// Replaces the span the [game run](Referee::run) is logged under, which defaults to
    /// an `info` span named `game`.
    pub fn with_span(mut self, span: Span) -> Referee {
        self.game.span = span;
        self
    }

    /// An immutable copy of the game before setup.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot(None)
    }

    /// Asks each player in registration order for its name and then sends it the board and
    /// its hand, both under [setup_timeout](RefereeConfig::setup_timeout). A failed call
    /// eliminates the player, whose [tiles](crate::Tile) return to the bag.
    ///
    /// # Returns
    ///
    /// Either the [turns](Turns) of the game, or the [end of the game](GameOver) when fewer
    /// than [min_active_players](RefereeConfig::min_active_players) survive setup or nobody
    /// can place any [tile](crate::Tile). Falling below the minimum leaves the game without
    /// winners.
    pub async fn set_up(mut self) -> Either<Turns, GameOver> {
        let setup_timeout = self.game.config.setup_timeout;

        for index in 0..self.game.players.len() {
            let player_state = &self.game.players[index];
            let name =
                call_with_timeout(Call::Name, setup_timeout, player_state.player().name()).await;
            let set_up = match name {
                Ok(name) => {
                    self.game.players[index].set_name(name);
                    let player_state = &self.game.players[index];
                    call_with_timeout(
                        Call::SetUp,
                        setup_timeout,
                        player_state
                            .player()
                            .set_up(&self.game.board, player_state.hand()),
                    )
                    .await
                }
                Err(fault) => Err(fault),
            };
            if let Err(fault) = set_up {
                self.game.eliminate(index, &Fault::Protocol(fault));
            }
        }

        let active_len = self.game.active_len();
        tracing::info!(
            players = self.game.players.len(),
            active = active_len,
            "game set up"
        );

        let first_player = self
            .game
            .players
            .len()
            .checked_sub(1)
            .and_then(|last| self.game.next_active_player(last));
        self.game.broadcast(first_player).await;

        if active_len < self.game.config.min_active_players.max(1) {
            tracing::warn!(
                active = active_len,
                min_active_players = self.game.config.min_active_players,
                "not enough active players after setup"
            );
            return Either::Right(GameOver::new(self.game, false));
        }

        match first_player {
            Some(first_player) if !self.game.is_deadlocked() => {
                Either::Left(Turns::new(self.game, first_player))
            }
            _ => Either::Right(GameOver::new(self.game, true)),
        }
    }

    /// Sets up the game, plays every turn and reports the result, all inside the
    /// [span](Referee::with_span) of the game.
    pub async fn run(self) -> GameResult {
        let span = self.game.span.clone();
        async move {
            let mut turns = match self.set_up().await {
                Either::Left(turns) => turns,
                Either::Right(game_over) => return game_over.finish().await,
            };
            loop {
                turns = match turns.next_turn().await {
                    Either::Left(turns) => turns,
                    Either::Right(game_over) => return game_over.finish().await,
                };
            }
        }
        .instrument(span)
        .await
    }

    #[cfg(test)]
    pub(super) fn into_game(self) -> Game {
        self.game
    }
}
