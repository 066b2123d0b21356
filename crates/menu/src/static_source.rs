//! JSON-backed implementation of the navigation data service.

use std::path::Path;
use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream;
use navrail_types::{StructuralSubtype, UserRole};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::catalog::{MenuCatalog, MenuSourceError};
use crate::service::{MenuStream, NavigationalListService};

/// Serves a fixed [`MenuCatalog`], re-emitting filtered snapshots whenever the
/// role state changes.
#[derive(Debug)]
pub struct StaticMenuSource {
    catalog: Arc<MenuCatalog>,
    role: watch::Sender<UserRole>,
}

impl StaticMenuSource {
    pub fn new(catalog: MenuCatalog) -> Self {
        if catalog.is_empty() {
            warn!("menu catalog has no entries; the rail will stay empty");
        } else {
            debug!(records = catalog.len(), "menu catalog loaded");
        }
        let (role, _) = watch::channel(UserRole::default());
        Self {
            catalog: Arc::new(catalog),
            role,
        }
    }

    pub fn embedded() -> Result<Self, MenuSourceError> {
        MenuCatalog::embedded().map(Self::new)
    }

    pub fn from_path(path: &Path) -> Result<Self, MenuSourceError> {
        MenuCatalog::from_path(path).map(Self::new)
    }

    /// Embedded catalog unless `path` is given.
    pub fn load(path: Option<&Path>) -> Result<Self, MenuSourceError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

}

impl NavigationalListService for StaticMenuSource {
    fn set_role_state(&self, role: UserRole) {
        let changed = self.role.send_if_modified(|current| {
            if *current == role {
                return false;
            }
            *current = role;
            true
        });
        if changed {
            debug!(%role, "menu role state updated");
        }
    }

    fn filtered_navigation_by_subtype_and_state(&self, subtype: &StructuralSubtype, state: &str) -> MenuStream {
        let catalog = Arc::clone(&self.catalog);
        let subtype = subtype.clone();
        let state = state.to_ascii_uppercase();
        let receiver = self.role.subscribe();

        stream::unfold((receiver, true), move |(mut receiver, first)| {
            let catalog = Arc::clone(&catalog);
            let subtype = subtype.clone();
            let state = state.clone();
            async move {
                if !first {
                    receiver.changed().await.ok()?;
                }
                let role = *receiver.borrow_and_update();
                let items = catalog.filter(&subtype, &state, role);
                debug!(%subtype, %state, %role, count = items.len(), "menu snapshot resolved");
                Some((items, (receiver, false)))
            }
        })
        .boxed()
    }
}
