use crate::{GameSnapshot, ObserverError};
use async_trait::async_trait;
use futures::future;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::future::Future;
use std::time::Duration;
use tokio::time;

/// A sink for the progress of a game: a display, a file writer, a test spy.
///
/// Observers never influence the game. Their errors are logged and dropped.
#[async_trait]
pub trait Observer: Send + Sync {
    /// Receives the state of the game after each applied turn.
    async fn receive_state(&self, state: &GameSnapshot) -> Result<(), ObserverError>;

    /// Receives the final state of the game with the names of the winners and of the
    /// eliminated players. Called exactly once.
    async fn game_over(
        &self,
        state: &GameSnapshot,
        winners: &BTreeSet<String>,
        eliminated: &BTreeSet<String>,
    ) -> Result<(), ObserverError>;
}

/// Awaits one observer call for at most `after`.
async fn observe_with_timeout(
    after: Duration,
    call: impl Future<Output = Result<(), ObserverError>>,
) -> Result<(), ObserverError> {
    time::timeout(after, call).await.unwrap_or_else(|_| {
        Err(ObserverError(format!(
            "timed out after {}ms",
            after.as_millis()
        )))
    })
}

/// Asynchronously sends `state` to every [`Observer`], giving each one `after` to answer.
///
/// # Errors
///
/// Accumulates all errors and timeouts from [`Observer::receive_state`] into a vector.
pub async fn send_state(
    observers: &[Box<dyn Observer>],
    state: &GameSnapshot,
    after: Duration,
) -> Result<(), Vec<ObserverError>> {
    let update_tasks = observers
        .iter()
        .map(|observer| observe_with_timeout(after, observer.receive_state(state)));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}

/// Asynchronously sends the end of the game to every [`Observer`], giving each one `after`
/// to answer.
///
/// # Errors
///
/// Accumulates all errors and timeouts from [`Observer::game_over`] into a vector.
pub async fn send_game_over(
    observers: &[Box<dyn Observer>],
    state: &GameSnapshot,
    winners: &BTreeSet<String>,
    eliminated: &BTreeSet<String>,
    after: Duration,
) -> Result<(), Vec<ObserverError>> {
    let update_tasks = observers.iter().map(|observer| {
        observe_with_timeout(after, observer.game_over(state, winners, eliminated))
    });

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
