use crate::{
    adjacent_coordinates, is_legal_placement, Board, Call, GameSnapshot, Observer,
    ObserverError, Placement, Player, PlayerError, PublicState, Tile, TurnAction,
};
use async_trait::async_trait;
use futures::future;
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex};

/// What a [ScriptedPlayer] or a [SpyObserver] does when called.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Behavior {
    /// Answers normally.
    #[default]
    Behave,
    /// Returns an error.
    Fail,
    /// Never answers.
    Stall,
}

/// Decides the [behavior](Behavior) of each call.
pub type FaultPolicy = Box<dyn Fn(Call) -> Behavior + Send + Sync>;

/// Everything a [ScriptedPlayer] was called with.
#[derive(Debug, Default)]
pub struct PlayerLog {
    /// Every call in order, including failed and stalled ones.
    pub calls: Vec<Call>,
    /// The states received by [Player::take_turn].
    pub states: Vec<PublicState>,
    /// The hands received by [Player::set_up] and [Player::new_tiles].
    pub hands: Vec<Vec<Tile>>,
    /// The values received by [Player::win].
    pub won: Vec<bool>,
}

/// A [player](Player) that answers turns from a queue of [actions](TurnAction), falling back
/// to passing or to the first legal single [tile](Tile) placement, and misbehaves according
/// to its [FaultPolicy].
pub struct ScriptedPlayer {
    name: String,
    actions: Mutex<VecDeque<TurnAction>>,
    first_legal_placement: bool,
    policy: FaultPolicy,
    log: Arc<Mutex<PlayerLog>>,
}

impl fmt::Debug for ScriptedPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedPlayer")
            .field("name", &self.name)
            .field("actions", &self.actions)
            .field("first_legal_placement", &self.first_legal_placement)
            .finish_non_exhaustive()
    }
}

impl ScriptedPlayer {
    /// A well-behaved player that always passes.
    pub fn new(name: impl Into<String>) -> ScriptedPlayer {
        ScriptedPlayer {
            name: name.into(),
            actions: Mutex::new(VecDeque::new()),
            first_legal_placement: false,
            policy: Box::new(|_| Behavior::Behave),
            log: Arc::new(Mutex::new(PlayerLog::default())),
        }
    }

    /// Queues `actions` for the next turns.
    pub fn with_actions(self, actions: impl IntoIterator<Item = TurnAction>) -> ScriptedPlayer {
        self.actions.lock().unwrap().extend(actions);
        self
    }

    /// Places the first legal single [tile](Tile) once the queue is empty.
    pub fn with_first_legal_placement(mut self) -> ScriptedPlayer {
        self.first_legal_placement = true;
        self
    }

    /// Replaces the [FaultPolicy].
    pub fn with_policy(
        mut self,
        policy: impl Fn(Call) -> Behavior + Send + Sync + 'static,
    ) -> ScriptedPlayer {
        self.policy = Box::new(policy);
        self
    }

    /// Misbehaves on every call of one kind.
    pub fn with_behavior_on(self, call: Call, behavior: Behavior) -> ScriptedPlayer {
        self.with_policy(move |actual| {
            if actual == call {
                behavior
            } else {
                Behavior::Behave
            }
        })
    }

    /// A handle to the calls received, usable after the player is moved.
    pub fn log(&self) -> Arc<Mutex<PlayerLog>> {
        Arc::clone(&self.log)
    }

    async fn behave(&self, call: Call) -> Result<(), PlayerError> {
        self.log.lock().unwrap().calls.push(call);
        let behavior = (self.policy)(call);
        match behavior {
            Behavior::Behave => Ok(()),
            Behavior::Fail => Err(PlayerError::Other(format!("{call:?} refused"))),
            Behavior::Stall => future::pending().await,
        }
    }

    fn first_legal_placement(board: &Board, hand: &[Tile]) -> Option<TurnAction> {
        let mut frontier: Vec<_> = board
            .keys()
            .flat_map(|&coordinate| adjacent_coordinates(coordinate))
            .filter(|coordinate| !board.contains_key(coordinate))
            .collect();
        frontier.sort_unstable();
        frontier.dedup();

        hand.iter().find_map(|&tile| {
            frontier
                .iter()
                .map(|&coordinate| vec![Placement::new(tile, coordinate)])
                .find(|placements| is_legal_placement(board, placements))
                .map(TurnAction::Place)
        })
    }
}

#[async_trait]
impl Player for ScriptedPlayer {
    async fn name(&self) -> Result<String, PlayerError> {
        self.behave(Call::Name).await?;
        Ok(self.name.clone())
    }

    async fn set_up(&self, _board: &Board, tiles: &[Tile]) -> Result<(), PlayerError> {
        self.behave(Call::SetUp).await?;
        self.log.lock().unwrap().hands.push(tiles.to_vec());
        Ok(())
    }

    async fn take_turn(&self, state: PublicState) -> Result<TurnAction, PlayerError> {
        self.behave(Call::TakeTurn).await?;
        let queued = self.actions.lock().unwrap().pop_front();
        let action = queued
            .or_else(|| {
                self.first_legal_placement
                    .then(|| ScriptedPlayer::first_legal_placement(&state.board, &state.hand))
                    .flatten()
            })
            .unwrap_or(TurnAction::Pass);
        self.log.lock().unwrap().states.push(state);
        Ok(action)
    }

    async fn new_tiles(&self, tiles: &[Tile]) -> Result<(), PlayerError> {
        self.behave(Call::NewTiles).await?;
        self.log.lock().unwrap().hands.push(tiles.to_vec());
        Ok(())
    }

    async fn win(&self, won: bool) -> Result<(), PlayerError> {
        self.log.lock().unwrap().won.push(won);
        self.behave(Call::Win).await
    }
}

/// Everything a [SpyObserver] received.
#[derive(Debug, Default)]
pub struct ObserverLog {
    /// Every state received in order.
    pub states: Vec<GameSnapshot>,
    /// Every end of the game received with its winners and eliminated players.
    pub game_overs: Vec<(GameSnapshot, BTreeSet<String>, BTreeSet<String>)>,
}

/// An [observer](Observer) that records everything and optionally fails or stalls.
#[derive(Debug, Default)]
pub struct SpyObserver {
    behavior: Behavior,
    log: Arc<Mutex<ObserverLog>>,
}

impl SpyObserver {
    /// An observer that accepts everything.
    pub fn new() -> SpyObserver {
        SpyObserver::default()
    }

    /// An observer that fails on every call.
    pub fn failing() -> SpyObserver {
        SpyObserver {
            behavior: Behavior::Fail,
            ..SpyObserver::default()
        }
    }

    /// An observer that never answers once it has recorded a call.
    pub fn stalling() -> SpyObserver {
        SpyObserver {
            behavior: Behavior::Stall,
            ..SpyObserver::default()
        }
    }

    /// A handle to everything received, usable after the observer is moved.
    pub fn log(&self) -> Arc<Mutex<ObserverLog>> {
        Arc::clone(&self.log)
    }

    async fn result(&self) -> Result<(), ObserverError> {
        match self.behavior {
            Behavior::Behave => Ok(()),
            Behavior::Fail => Err(ObserverError("display closed".to_owned())),
            Behavior::Stall => future::pending().await,
        }
    }
}

#[async_trait]
impl Observer for SpyObserver {
    async fn receive_state(&self, state: &GameSnapshot) -> Result<(), ObserverError> {
        self.log.lock().unwrap().states.push(state.clone());
        self.result().await
    }

    async fn game_over(
        &self,
        state: &GameSnapshot,
        winners: &BTreeSet<String>,
        eliminated: &BTreeSet<String>,
    ) -> Result<(), ObserverError> {
        self.log
            .lock()
            .unwrap()
            .game_overs
            .push((state.clone(), winners.clone(), eliminated.clone()));
        self.result().await
    }
}
