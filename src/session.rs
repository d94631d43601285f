#![cfg(feature = "std")]

//! Async intent loop around the controller.
//!
//! All mutation is serialized through a single task: the session receives
//! discrete intents over a channel and publishes a fresh [`Snapshot`] after
//! each transition. When the computer's move comes due, the session waits a
//! brief delay before applying it so turns stay visually separated; the
//! delayed move re-checks the controller epoch and the board, so an intent
//! arriving mid-delay (reset, mode change) leaves the stale move a no-op.

use crate::common::{GameMode, Mark};
use crate::controller::{GameController, Snapshot};
use crate::player::Player;
use crate::player_ai::AiPlayer;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Duration};

/// Delay before the computer's deferred move, long enough to read as a
/// separate turn without feeling sluggish.
pub const DEFAULT_MOVE_DELAY: Duration = Duration::from_millis(220);

const INTENT_QUEUE_DEPTH: usize = 16;

/// User intents forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Cell click at the given index.
    Play(usize),
    Reset,
    SetMode(GameMode),
    SetHumanMark(Mark),
}

/// Command and query surface handed to the presentation layer.
#[derive(Clone)]
pub struct SessionHandle {
    intents: mpsc::Sender<Intent>,
    snapshots: watch::Receiver<Snapshot>,
}

impl SessionHandle {
    pub async fn play_at(&self, index: usize) -> anyhow::Result<()> {
        self.send(Intent::Play(index)).await
    }

    pub async fn reset(&self) -> anyhow::Result<()> {
        self.send(Intent::Reset).await
    }

    pub async fn set_mode(&self, mode: GameMode) -> anyhow::Result<()> {
        self.send(Intent::SetMode(mode)).await
    }

    pub async fn set_human_mark(&self, mark: Mark) -> anyhow::Result<()> {
        self.send(Intent::SetHumanMark(mark)).await
    }

    /// Most recently published state.
    pub fn snapshot(&self) -> Snapshot {
        *self.snapshots.borrow()
    }

    /// Wait until the session publishes a new snapshot.
    pub async fn changed(&mut self) -> anyhow::Result<()> {
        self.snapshots
            .changed()
            .await
            .map_err(|_| anyhow::anyhow!("session closed"))
    }

    async fn send(&self, intent: Intent) -> anyhow::Result<()> {
        self.intents
            .send(intent)
            .await
            .map_err(|_| anyhow::anyhow!("session closed"))
    }
}

/// Event loop owning the controller.
pub struct GameSession<P: Player = AiPlayer> {
    controller: GameController<P>,
    intents: mpsc::Receiver<Intent>,
    snapshots: watch::Sender<Snapshot>,
    delay: Duration,
}

impl<P: Player> GameSession<P> {
    /// Wrap a controller in a session; returns the loop and its handle.
    pub fn new(controller: GameController<P>, delay: Duration) -> (Self, SessionHandle) {
        let (intent_tx, intent_rx) = mpsc::channel(INTENT_QUEUE_DEPTH);
        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
        let session = Self {
            controller,
            intents: intent_rx,
            snapshots: snapshot_tx,
            delay,
        };
        let handle = SessionHandle {
            intents: intent_tx,
            snapshots: snapshot_rx,
        };
        (session, handle)
    }

    /// Process intents until every handle is dropped.
    ///
    /// While a computer move is pending, incoming intents are prioritized
    /// over the delay timer; the timer path re-validates through
    /// [`GameController::apply_deferred`].
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            if self.controller.computer_turn_pending() {
                let epoch = self.controller.epoch();
                tokio::select! {
                    biased;
                    maybe = self.intents.recv() => match maybe {
                        Some(intent) => self.handle_intent(intent),
                        None => break,
                    },
                    _ = time::sleep(self.delay) => {
                        match self.controller.apply_deferred(epoch) {
                            Some(index) => log::debug!("computer played cell {}", index),
                            None => log::debug!("stale computer move ignored"),
                        }
                    }
                }
            } else {
                match self.intents.recv().await {
                    Some(intent) => self.handle_intent(intent),
                    None => break,
                }
            }
            let _ = self.snapshots.send(self.controller.snapshot());
        }
        Ok(())
    }

    fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Play(index) => {
                if self.controller.play_at(index) {
                    log::debug!("human played cell {}", index);
                } else {
                    log::debug!("ignored play intent at cell {}", index);
                }
            }
            Intent::Reset => {
                self.controller.reset();
                log::debug!("game reset");
            }
            Intent::SetMode(mode) => {
                self.controller.set_mode(mode);
                log::debug!("mode set to {:?}", mode);
            }
            Intent::SetHumanMark(mark) => {
                self.controller.set_human_mark(mark);
                log::debug!("human mark set to {}", mark);
            }
        }
    }
}
