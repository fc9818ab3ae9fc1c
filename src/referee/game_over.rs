use super::{call_with_timeout, Game, GameResult};
use crate::{send_game_over, Call, GameSnapshot};
use std::collections::BTreeSet;

/// The game once it has ended. Created by [Referee::set_up](crate::Referee::set_up) or
/// [Turns::next_turn](crate::Turns::next_turn).
#[derive(Debug)]
pub struct GameOver {
    game: Game,
    /// Whether enough players stayed active for the game to have winners.
    has_winners: bool,
}

impl GameOver {
    pub(super) fn new(game: Game, has_winners: bool) -> GameOver {
        GameOver { game, has_winners }
    }

    /// An immutable copy of the final state of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot(None)
    }

    /// The indexes of the active players with the maximum score.
    fn winner_indexes(&self) -> BTreeSet<usize> {
        if !self.has_winners {
            return BTreeSet::new();
        }
        let active = || {
            self.game
                .players
                .iter()
                .enumerate()
                .filter(|(_, player)| !player.is_eliminated())
        };
        let Some(max_score) = active().map(|(_, player)| player.score()).max() else {
            return BTreeSet::new();
        };
        active()
            .filter(|(_, player)| player.score() == max_score)
            .map(|(index, _)| index)
            .collect()
    }

    /// # Returns
    ///
    /// The names of the active players with the maximum score, or of nobody when too few
    /// players survived setup, and the names of every eliminated player.
    pub fn result(&self) -> GameResult {
        let players = &self.game.players;
        GameResult {
            winners: self
                .winner_indexes()
                .into_iter()
                .map(|index| players[index].name().to_owned())
                .collect(),
            eliminated: players
                .iter()
                .filter(|player| player.is_eliminated())
                .map(|player| player.name().to_owned())
                .collect(),
        }
    }

    /// Computes the [result](GameOver::result), then tells every player whether it won,
    /// eliminated players included, one after the other in registration order and each under
    /// [turn_timeout](crate::RefereeConfig::turn_timeout). Finally sends the end of the game
    /// to every observer once. Failures of players and observers are logged and change
    /// nothing.
    pub async fn finish(self) -> GameResult {
        let result = self.result();
        let winner_indexes = self.winner_indexes();
        tracing::info!(
            winners = ?result.winners,
            eliminated = ?result.eliminated,
            "game over"
        );

        let turn_timeout = self.game.config.turn_timeout;
        for (index, player) in self.game.players.iter().enumerate() {
            let won = winner_indexes.contains(&index);
            let notified =
                call_with_timeout(Call::Win, turn_timeout, player.player().win(won)).await;
            if let Err(fault) = notified {
                tracing::warn!(player = player.name(), %fault, "failed to send the result");
            }
        }

        let snapshot = self.game.snapshot(None);
        if let Err(errors) = send_game_over(
            &self.game.observers,
            &snapshot,
            &result.winners,
            &result.eliminated,
            self.game.config.observer_timeout,
        )
        .await
        {
            for error in errors {
                tracing::warn!(%error, "observer failed to receive the end of the game");
            }
        }

        result
    }
}
