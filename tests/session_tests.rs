use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{
    GameController, GameMode, GameSession, Mark, SessionHandle, Snapshot, DEFAULT_MOVE_DELAY,
};
use tokio::time::{timeout, Duration};

fn spawn_session(seed: u64) -> SessionHandle {
    let controller = GameController::with_rng(SmallRng::seed_from_u64(seed));
    let (session, handle) = GameSession::new(controller, DEFAULT_MOVE_DELAY);
    tokio::spawn(session.run());
    handle
}

/// Wait until the published snapshot satisfies `pred`.
async fn wait_for(
    handle: &mut SessionHandle,
    pred: impl Fn(&Snapshot) -> bool,
) -> Snapshot {
    timeout(Duration::from_secs(5), async {
        loop {
            let snap = handle.snapshot();
            if pred(&snap) {
                return snap;
            }
            handle.changed().await.unwrap();
        }
    })
    .await
    .expect("snapshot condition not reached")
}

#[tokio::test(start_paused = true)]
async fn test_computer_replies_after_delay() {
    let mut handle = spawn_session(1);
    handle.set_mode(GameMode::PlayerVsComputer).await.unwrap();
    handle.play_at(0).await.unwrap();

    let snap = wait_for(&mut handle, |s| s.cells[4] == Some(Mark::O)).await;
    assert_eq!(snap.cells[0], Some(Mark::X));
    assert_eq!(snap.turn, Mark::X);
    assert!(snap.can_interact);
}

#[tokio::test(start_paused = true)]
async fn test_interaction_disabled_while_computer_move_pending() {
    let mut handle = spawn_session(1);
    handle.set_mode(GameMode::PlayerVsComputer).await.unwrap();
    // Both clicks are queued before the session task runs: the second one
    // arrives while the computer's move is pending and is ignored.
    handle.play_at(0).await.unwrap();
    handle.play_at(1).await.unwrap();

    let snap = wait_for(&mut handle, |s| s.cells[4] == Some(Mark::O)).await;
    assert_eq!(snap.cells[0], Some(Mark::X));
    assert_eq!(snap.cells[1], None);
    assert_eq!(snap.turn, Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_reset_during_delay_cancels_computer_move() {
    let mut handle = spawn_session(1);
    handle.set_mode(GameMode::PlayerVsComputer).await.unwrap();
    handle.play_at(0).await.unwrap();
    handle.reset().await.unwrap();

    let snap = wait_for(&mut handle, |s| {
        s.mode == GameMode::PlayerVsComputer && s.cells.iter().all(|c| c.is_none())
    })
    .await;
    assert_eq!(snap.turn, Mark::X);

    // Give the stale timer every chance to fire; the board must stay clear.
    tokio::time::sleep(DEFAULT_MOVE_DELAY * 10).await;
    let snap = handle.snapshot();
    assert!(snap.cells.iter().all(|c| c.is_none()));
    assert!(snap.can_interact);
}

#[tokio::test(start_paused = true)]
async fn test_computer_opens_when_human_takes_o() {
    let mut handle = spawn_session(1);
    handle.set_mode(GameMode::PlayerVsComputer).await.unwrap();
    handle.set_human_mark(Mark::O).await.unwrap();

    // X is now the computer; it opens in the center after the delay.
    let snap = wait_for(&mut handle, |s| s.cells[4] == Some(Mark::X)).await;
    assert_eq!(snap.human_mark, Mark::O);
    assert_eq!(snap.turn, Mark::O);
    assert!(snap.can_interact);
}

#[tokio::test(start_paused = true)]
async fn test_commands_fail_after_session_ends() {
    let controller = GameController::with_rng(SmallRng::seed_from_u64(1));
    let (session, handle) = GameSession::new(controller, DEFAULT_MOVE_DELAY);
    drop(session);

    assert!(handle.play_at(0).await.is_err());
    assert!(handle.reset().await.is_err());
}
