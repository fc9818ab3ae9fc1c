use super::{call_with_timeout, Game, GameOver};
use crate::{
    check_action, score, Call, Fault, GameSnapshot, PlayerState, PublicState, RuleViolation,
    TurnAction,
};
use either::Either;

/// The game while players take turns. Created by [Referee::set_up](crate::Referee::set_up).
#[derive(Debug)]
pub struct Turns {
    game: Game,
    current_player: usize,
    /// Turns in a row where nobody placed a [tile](crate::Tile).
    non_placing_turns: usize,
}

/// What one turn did to the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Turn {
    Faulted,
    Passed,
    Exchanged,
    Placed { ends_game: bool },
}

impl Turns {
    pub(super) fn new(game: Game, current_player: usize) -> Turns {
        Turns {
            game,
            current_player,
            non_placing_turns: 0,
        }
    }

    /// The index of the player whose turn it is.
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// An immutable copy of the game before the current player's turn.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot(Some(self.current_player))
    }

    /// Plays the current player's turn: asks for a [turn action](TurnAction) under
    /// [turn_timeout](crate::RefereeConfig::turn_timeout), checks it against the rules and
    /// applies it. A failed call or a broken rule eliminates the player, whose
    /// [tiles](crate::Tile) return to the bag; nothing is retried.
    ///
    /// * [Pass](TurnAction::Pass) changes nothing.
    /// * [Exchange](TurnAction::Exchange) draws as many [tiles](crate::Tile) as the hand held
    /// from the end of the bag and puts the old ones at the front.
    /// * [Place](TurnAction::Place) puts the [tiles](crate::Tile) on the board, refills the
    /// hand up to its previous length and adds the [points](score) earned.
    ///
    /// After an exchange or a placement, the whole hand is sent back with
    /// [Player::new_tiles](crate::Player::new_tiles). Every observer then receives the new state.
    ///
    /// # Returns
    ///
    /// Either the [turns](Turns) with the next active player, or the [end of the game](GameOver)
    /// when a placement empties a hand, when no active player can place any
    /// [tile](crate::Tile) with an empty bag, when a whole round passes without a placement,
    /// or when every player is eliminated.
    pub async fn next_turn(mut self) -> Either<Turns, GameOver> {
        let index = self.current_player;
        let turn_timeout = self.game.config.turn_timeout;

        let player_state = &self.game.players[index];
        tracing::debug!(
            player = player_state.name(),
            hand = player_state.hand().len(),
            "taking turn"
        );
        let state = self.public_state(index);
        let action =
            call_with_timeout(Call::TakeTurn, turn_timeout, player_state.player().take_turn(state))
                .await;

        let turn = match action {
            Ok(action) => self.apply(index, &action).map_err(Fault::Rule),
            Err(fault) => Err(Fault::Protocol(fault)),
        };
        let turn = match turn {
            Ok(turn) => turn,
            Err(fault) => {
                self.game.eliminate(index, &fault);
                Turn::Faulted
            }
        };

        if matches!(turn, Turn::Exchanged | Turn::Placed { .. }) {
            let player_state = &self.game.players[index];
            let new_tiles = call_with_timeout(
                Call::NewTiles,
                turn_timeout,
                player_state.player().new_tiles(player_state.hand()),
            )
            .await;
            if let Err(fault) = new_tiles {
                self.game.eliminate(index, &Fault::Protocol(fault));
            }
        }
        tracing::debug!(player = self.game.players[index].name(), ?turn, "turn applied");

        match turn {
            Turn::Placed { .. } => self.non_placing_turns = 0,
            Turn::Passed | Turn::Exchanged => self.non_placing_turns += 1,
            Turn::Faulted => {}
        }

        let active_len = self.game.active_len();
        let has_ended = turn == Turn::Placed { ends_game: true }
            || active_len == 0
            || self.non_placing_turns >= active_len
            || self.game.is_deadlocked();

        let next_player = if has_ended {
            None
        } else {
            self.game.next_active_player(index)
        };
        self.game.broadcast(next_player).await;

        match next_player {
            Some(next_player) => {
                self.current_player = next_player;
                Either::Left(self)
            }
            None => Either::Right(GameOver::new(self.game, true)),
        }
    }

    /// What the player at `index` may know: the board, the size of the bag, its own hand and
    /// the scores of every active player starting with its own.
    fn public_state(&self, index: usize) -> PublicState {
        let players_len = self.game.players.len();
        PublicState {
            board: self.game.board.clone(),
            remaining_tiles: self.game.bag.len(),
            hand: self.game.players[index].hand().to_vec(),
            scores: (0..players_len)
                .map(|offset| &self.game.players[(index + offset) % players_len])
                .filter(|player| !player.is_eliminated())
                .map(PlayerState::score)
                .collect(),
        }
    }

    /// Checks and applies `action` for the player at `index`.
    ///
    /// # Errors
    ///
    /// The [rule violation](RuleViolation) of `action`. Nothing is changed.
    fn apply(&mut self, index: usize, action: &TurnAction) -> Result<Turn, RuleViolation> {
        check_action(
            &self.game.board,
            self.game.players[index].hand(),
            self.game.bag.len(),
            action,
        )?;

        match action {
            TurnAction::Pass => Ok(Turn::Passed),
            TurnAction::Exchange => {
                let returned = self.game.players[index].reduce_existing_tiles(action);
                let drawn = self.game.draw(returned.len());
                self.game.players[index].set_tiles(drawn);
                self.game.return_to_bag(returned);
                Ok(Turn::Exchanged)
            }
            TurnAction::Place(placements) => {
                self.game.players[index].reduce_existing_tiles(action);
                let hand_len_after = self.game.players[index].hand().len();
                self.game.board.extend(
                    placements
                        .iter()
                        .map(|placement| (placement.coordinate, placement.tile)),
                );

                // when the bag is empty, no more tiles will be drawn
                let drawn = self.game.draw(placements.len());
                let player_state = &mut self.game.players[index];
                let mut hand = player_state.hand().clone();
                hand.extend(drawn);
                player_state.set_tiles(hand);

                let ends_game =
                    self.game.players[index].hand().is_empty() || self.game.is_deadlocked();
                let points = score(
                    placements,
                    hand_len_after,
                    ends_game,
                    &self.game.config.bonuses,
                );
                self.game.players[index].update_score(points);
                tracing::debug!(points, ends_game, "tiles placed");
                Ok(Turn::Placed { ends_game })
            }
        }
    }
}
