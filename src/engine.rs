//! Frame loop and lifecycle
//!
//! The engine owns the game behind one mutex. The loop thread holds it for a
//! whole simulate+render frame; input handlers take it briefly to apply a
//! pointer event. Nothing else shares the game.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::config::{ConfigError, GameConfig};
use crate::platform::{FramePacer, GestureTracker, PointerEvent};
use crate::renderer::{FrameSnapshot, FrameView, Renderer};
use crate::sim::{GamePhase, GameState, step};

/// State shared between the loop thread and input handlers
struct Shared<R> {
    state: GameState,
    gestures: GestureTracker,
    renderer: R,
}

/// Runs the game on its own thread
///
/// `stop` blocks until the frame in flight has finished, so state observed
/// after it returns is never torn. `resume` keeps the session where it was.
pub struct Engine<R: Renderer + 'static> {
    shared: Arc<Mutex<Shared<R>>>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    frame_budget: Duration,
}

impl<R: Renderer + 'static> Engine<R> {
    /// Build a session from `config`, rejecting values the simulation
    /// cannot run with
    pub fn new(config: GameConfig, renderer: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let frame_budget = config.frame_budget();
        Ok(Self::from_state(GameState::new(config), renderer, frame_budget))
    }

    /// Wrap an existing session
    pub fn from_state(state: GameState, renderer: R, frame_budget: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state,
                gestures: GestureTracker::new(),
                renderer,
            })),
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
            frame_budget,
        }
    }

    /// Whether the loop thread is alive
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Reset the session to the title screen and launch the loop
    pub fn start(&mut self) {
        if self.is_running() {
            log::warn!("Engine already running, ignoring start");
            return;
        }
        self.lock().state.reset();
        self.resume();
    }

    /// Launch the loop without touching the session
    ///
    /// No-op if the loop is already running.
    pub fn resume(&mut self) {
        if self.is_running() {
            log::debug!("Engine already running, ignoring resume");
            return;
        }
        // Reap a loop that died on its own
        self.join();

        self.running.store(true, Ordering::Release);
        let shared = Arc::clone(&self.shared);
        let running = Arc::clone(&self.running);
        let budget = self.frame_budget;
        self.handle = Some(thread::spawn(move || run_loop(&shared, &running, budget)));
        log::info!("Engine resumed");
    }

    /// Stop the loop, waiting for the current frame to finish
    ///
    /// Safe to call when the loop was never started.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if self.join() {
            log::info!("Engine stopped");
        }
    }

    /// Alias of [`Engine::stop`] for hosts with pause/resume lifecycles
    pub fn pause(&mut self) {
        self.stop();
    }

    /// Feed a pointer event from the host
    pub fn handle_pointer(&self, event: PointerEvent) {
        let mut guard = self.lock();
        let Shared { state, gestures, .. } = &mut *guard;
        gestures.handle(event, state);
    }

    /// Screen dimensions changed
    pub fn resize(&self, width: f32, height: f32) {
        self.lock().state.resize(width, height);
    }

    pub fn phase(&self) -> GamePhase {
        self.lock().state.phase
    }

    /// Owned copy of the current frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::new(&self.lock().state)
    }

    /// Run `f` with exclusive access to the session
    pub fn with_state<T>(&self, f: impl FnOnce(&mut GameState) -> T) -> T {
        f(&mut self.lock().state)
    }

    /// Run `f` with exclusive access to the renderer
    pub fn with_renderer<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut self.lock().renderer)
    }

    fn lock(&self) -> MutexGuard<'_, Shared<R>> {
        lock_shared(&self.shared)
    }

    /// Join the loop thread if there is one; returns whether there was
    fn join(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        if handle.join().is_err() {
            log::warn!("Frame loop thread panicked");
        }
        true
    }
}

impl<R: Renderer + 'static> Drop for Engine<R> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A renderer that panicked mid-frame must not wedge the engine
fn lock_shared<R>(shared: &Mutex<Shared<R>>) -> MutexGuard<'_, Shared<R>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn run_loop<R: Renderer>(shared: &Mutex<Shared<R>>, running: &AtomicBool, budget: Duration) {
    let mut pacer = FramePacer::new(budget);
    log::debug!("Frame loop started ({budget:?} budget)");

    while running.load(Ordering::Acquire) {
        let frame_start = Instant::now();
        {
            let mut guard = lock_shared(shared);
            let Shared {
                state, renderer, ..
            } = &mut *guard;
            step(state);
            renderer.render(&FrameView::new(state));
        }
        pacer.wait(frame_start);
    }

    log::debug!(
        "Frame loop exited after {} frames ({} over budget)",
        pacer.frames(),
        pacer.overruns()
    );
}
