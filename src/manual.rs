//! Fixed advance/exit key bindings over an [`InputManager`].

use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::manager::InputManager;

/// Escape, as delivered by a raw-mode keystroke chunk.
const KEY_ESCAPE: &str = "\u{1b}";

/// Callbacks for the two manual-control actions.
///
/// `on_advance` may suspend; the binder spawns each invocation detached, so
/// invocations can overlap when keys arrive faster than the future
/// completes. Callers needing serialization must synchronize themselves.
#[derive(Clone)]
pub struct ManualControls {
    on_exit: Arc<dyn Fn() + Send + Sync>,
    on_advance: Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>,
}

impl ManualControls {
    /// Build controls from an exit closure and an advance future factory.
    pub fn new<E, A, Fut>(on_exit: E, on_advance: A) -> Self
    where
        E: Fn() + Send + Sync + 'static,
        A: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            on_exit: Arc::new(on_exit),
            on_advance: Arc::new(move || Box::pin(on_advance()) as BoxFuture<'static, ()>),
        }
    }
}

/// Maps two keystrokes onto two semantic actions over one composed
/// [`InputManager`]: Escape exits, carriage-return or line-feed advances.
///
/// Holds no state of its own beyond the manager it wraps.
pub struct ManualControlBinder {
    manager: InputManager,
}

impl ManualControlBinder {
    /// Wrap an existing manager.
    pub fn new(manager: InputManager) -> Self {
        Self { manager }
    }

    /// Bind the manual-control keys via a raw-mode subscription.
    ///
    /// Returns what [`InputManager::enable_raw_mode`] returned; `false`
    /// means no terminal is attached or the raw switch failed, and no keys
    /// are bound.
    pub fn attach_manual_controls(&mut self, controls: ManualControls) -> bool {
        self.manager.enable_raw_mode(move |key| match key {
            KEY_ESCAPE => (controls.on_exit)(),
            "\r" | "\n" => {
                // Fire and forget; the key loop must not stall on a slow
                // advance handler.
                tokio::spawn((controls.on_advance)());
            }
            _ => {}
        })
    }

    /// Unbind the manual-control keys.
    pub fn detach_manual_controls(&mut self) {
        self.manager.disable_raw_mode();
    }

    /// The composed manager.
    pub fn manager(&self) -> &InputManager {
        &self.manager
    }

    /// The composed manager, mutably.
    pub fn manager_mut(&mut self) -> &mut InputManager {
        &mut self.manager
    }

    /// Give the composed manager back.
    pub fn into_inner(self) -> InputManager {
        self.manager
    }
}
