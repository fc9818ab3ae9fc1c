use crate::{missing_tiles, Hand, Player, PlayerSnapshot, Tile, TurnAction, HAND_CAPACITY};
use std::{fmt, mem};

/// Per-player record owned by the [referee](crate::Referee) for one game: the
/// [player](Player) handle, its name, hand, score and elimination flag.
pub struct PlayerState {
    player: Box<dyn Player>,
    name: String,
    hand: Hand,
    score: usize,
    eliminated: bool,
}

impl fmt::Debug for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerState")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .field("score", &self.score)
            .field("eliminated", &self.eliminated)
            .finish_non_exhaustive()
    }
}

impl PlayerState {
    /// A new [`PlayerState`] with an empty hand and no points.
    pub fn new(player: Box<dyn Player>, name: impl Into<String>) -> PlayerState {
        PlayerState {
            player,
            name: name.into(),
            hand: Hand::with_capacity(HAND_CAPACITY),
            score: 0,
            eliminated: false,
        }
    }

    /// The [player](Player) handle.
    #[inline]
    pub fn player(&self) -> &dyn Player {
        self.player.as_ref()
    }

    /// The name the player is reported under.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [tiles](Tile) held by the player.
    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The points earned so far.
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Whether the player has been eliminated.
    #[inline]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// # Returns
    ///
    /// Whether the hand holds every one of `tiles`, counting repeated [tiles](Tile).
    pub fn holds(&self, tiles: impl IntoIterator<Item = Tile>) -> bool {
        missing_tiles(&self.hand, tiles).is_empty()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Replaces the hand with `tiles`.
    pub fn set_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.hand.clear();
        self.hand.extend(tiles);
    }

    /// Adds `points` to the score.
    pub fn update_score(&mut self, points: usize) {
        self.score += points;
    }

    /// Removes the [tiles](Tile) consumed by `action` from the hand: every placed
    /// [tile](Tile) once, matched by value, or the whole hand for an
    /// [exchange](TurnAction::Exchange). A [pass](TurnAction::Pass) changes nothing, and
    /// neither does a [placement](TurnAction::Place) of [tiles](Tile) the hand does not
    /// [hold](PlayerState::holds).
    ///
    /// # Returns
    ///
    /// The removed [tiles](Tile).
    pub fn reduce_existing_tiles(&mut self, action: &TurnAction) -> Hand {
        match action {
            TurnAction::Pass => Hand::new(),
            TurnAction::Exchange => mem::take(&mut self.hand),
            TurnAction::Place(_) if !self.holds(action.placed_tiles()) => Hand::new(),
            TurnAction::Place(_) => action
                .placed_tiles()
                .filter_map(|tile| {
                    let index = self.hand.iter().position(|&held| held == tile)?;
                    Some(self.hand.remove(index))
                })
                .collect(),
        }
    }

    /// Sets the one-way elimination flag.
    ///
    /// # Returns
    ///
    /// The [tiles](Tile) the player was holding, which leave its hand.
    pub fn eliminate(&mut self) -> Hand {
        self.eliminated = true;
        mem::take(&mut self.hand)
    }

    /// An immutable copy of the player's state.
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            score: self.score,
            hand: self.hand.clone(),
            eliminated: self.eliminated,
        }
    }
}
