//! Hydration coordinator.
//!
//! The server cannot see `localStorage`, so the markup it sends may encode a
//! different preference than the one the browser has stored. The coordinator
//! fixes that with one explicit state machine per page load:
//!
//! ```text
//! ServerSeeded -> PendingHydration -> Reconciling -> Stable
//! ```
//!
//! Reconciliation reads the client backend once and issues at most one
//! [`PreferenceStore::set`]. Once `Stable`, every further call is a no-op,
//! so a remounted component cannot undo a preference the user just toggled.

#[cfg(test)]
#[path = "hydration_test.rs"]
mod hydration_test;

use crate::backend::{Context, PersistenceBackend};
use crate::preference::Theme;
use crate::presentation::Presentation;
use crate::store::PreferenceStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Server resolved the request cookie and is rendering.
    ServerSeeded,
    /// Markup is in the browser; nothing has run yet.
    PendingHydration,
    /// The single correction pass is in progress.
    Reconciling,
    /// Terminal. Only user actions change the preference from here on.
    Stable,
}

/// Outcome of [`HydrationCoordinator::reconcile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// Stored preference matched the rendered one.
    Unchanged,
    /// One corrective `set` was issued.
    Corrected { from: Presentation, to: Presentation },
    /// Not in `PendingHydration`; nothing was read or written.
    Skipped,
}

#[derive(Debug)]
pub struct HydrationCoordinator {
    phase: Phase,
    rendered: Presentation,
}

impl HydrationCoordinator {
    /// Seed a server render from the request backend. The device signal is
    /// unknown on the server, so a `system` choice renders light.
    #[must_use]
    pub fn server(backend: &impl PersistenceBackend) -> Self {
        let preference = backend.read().resolve();
        Self { phase: Phase::ServerSeeded, rendered: Presentation::of(preference, Theme::Light) }
    }

    /// Start the client side from the presentation found in the markup.
    #[must_use]
    pub fn from_markup(rendered: Presentation) -> Self {
        Self { phase: Phase::PendingHydration, rendered }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// What the markup encodes (or will encode, on the server).
    #[must_use]
    pub fn rendered(&self) -> Presentation {
        self.rendered
    }

    /// Run the single reconciliation pass against a client-context store.
    pub fn reconcile<B: PersistenceBackend>(&mut self, store: &mut PreferenceStore<B>) -> Reconciliation {
        if self.phase != Phase::PendingHydration {
            return Reconciliation::Skipped;
        }
        if store.backend().context() != Context::Client {
            log::debug!("hydration reconcile called without client storage; skipping");
            return Reconciliation::Skipped;
        }

        self.phase = Phase::Reconciling;
        let resolved = store.backend().read().resolve();
        let target = Presentation::of(resolved, store.system_theme());

        let outcome = if target == self.rendered {
            Reconciliation::Unchanged
        } else {
            log::debug!("stale server render: rendered {:?}, stored {:?}", self.rendered, target);
            store.set(resolved);
            Reconciliation::Corrected { from: self.rendered, to: target }
        };

        self.rendered = target;
        self.phase = Phase::Stable;
        outcome
    }
}
