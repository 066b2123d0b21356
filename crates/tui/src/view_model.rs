//! View-model composition.
//!
//! The host drives two inputs, display mode and user role. Whenever either
//! changes, the composer forwards the role to the menu service, asks it for
//! the entries matching the navigation subtype and the uppercased mode, and
//! emits a [`ViewModel`] for every snapshot the service produces.
//!
//! Only the latest input combination is ever observed: an input change drops
//! the in-flight menu stream before any further snapshot from it is forwarded.

use std::sync::Arc;

use futures_util::StreamExt;
use navrail_menu::NavigationalListService;
use navrail_types::{DisplayMode, StructuralSubtype, UserRole, ViewModel};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

/// Owns the mode/role inputs and the task deriving view-models from them.
///
/// Dropping the composer aborts the task, releasing the menu subscription.
#[derive(Debug)]
pub struct ViewModelComposer {
    mode: watch::Sender<DisplayMode>,
    role: watch::Sender<UserRole>,
    task: JoinHandle<()>,
}

impl ViewModelComposer {
    /// Starts composing with the given initial inputs.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(
        service: Arc<dyn NavigationalListService>,
        subtype: StructuralSubtype,
        mode: DisplayMode,
        role: UserRole,
    ) -> (Self, mpsc::UnboundedReceiver<ViewModel>) {
        let (mode_sender, mode_receiver) = watch::channel(mode);
        let (role_sender, role_receiver) = watch::channel(role);
        let (output, view_models) = mpsc::unbounded_channel();
        let task = tokio::spawn(compose(service, subtype, mode_receiver, role_receiver, output));
        (
            Self {
                mode: mode_sender,
                role: role_sender,
                task,
            },
            view_models,
        )
    }

    /// Updates the display mode; setting the current value is a no-op.
    pub fn set_mode(&self, mode: DisplayMode) {
        replace_if_changed(&self.mode, mode);
    }

    /// Updates the user role; setting the current value is a no-op.
    pub fn set_role(&self, role: UserRole) {
        replace_if_changed(&self.role, role);
    }

    pub fn mode(&self) -> DisplayMode {
        *self.mode.borrow()
    }

    pub fn role(&self) -> UserRole {
        *self.role.borrow()
    }
}

impl Drop for ViewModelComposer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn replace_if_changed<T: PartialEq>(sender: &watch::Sender<T>, value: T) {
    sender.send_if_modified(|current| {
        if *current == value {
            return false;
        }
        *current = value;
        true
    });
}

async fn compose(
    service: Arc<dyn NavigationalListService>,
    subtype: StructuralSubtype,
    mut mode: watch::Receiver<DisplayMode>,
    mut role: watch::Receiver<UserRole>,
    output: mpsc::UnboundedSender<ViewModel>,
) {
    loop {
        let current_mode = *mode.borrow_and_update();
        let current_role = *role.borrow_and_update();
        let state = current_mode.state_key();
        debug!(mode = %current_mode, role = %current_role, "recomputing navigation view-model");

        // Role first, so the service filters the fetch below with it.
        service.set_role_state(current_role);
        let mut menu = service.filtered_navigation_by_subtype_and_state(&subtype, &state);
        let mut menu_open = true;

        loop {
            tokio::select! {
                biased;
                changed = mode.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    break;
                }
                changed = role.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    break;
                }
                snapshot = menu.next(), if menu_open => match snapshot {
                    Some(menu_items) => {
                        let view_model = ViewModel::new(current_mode, current_role, menu_items);
                        if output.send(view_model).is_err() {
                            return;
                        }
                    }
                    None => menu_open = false,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use futures_util::stream;
    use navrail_menu::MenuStream;
    use navrail_types::MenuItem;

    use super::*;

    /// Menu service double that records calls and resolves each state after a
    /// configurable delay. Items are labelled with the state and the role that
    /// was current when the fetch was requested.
    #[derive(Default)]
    struct ScriptedService {
        calls: Mutex<Vec<String>>,
        role: Mutex<UserRole>,
        delays: HashMap<&'static str, Duration>,
    }

    impl ScriptedService {
        fn with_delays(delays: &[(&'static str, u64)]) -> Self {
            Self {
                delays: delays.iter().map(|(state, ms)| (*state, Duration::from_millis(*ms))).collect(),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl NavigationalListService for ScriptedService {
        fn set_role_state(&self, role: UserRole) {
            *self.role.lock().unwrap() = role;
            self.calls.lock().unwrap().push(format!("role:{role}"));
        }

        fn filtered_navigation_by_subtype_and_state(&self, subtype: &StructuralSubtype, state: &str) -> MenuStream {
            self.calls.lock().unwrap().push(format!("fetch:{subtype}:{state}"));
            let role = *self.role.lock().unwrap();
            let delay = self.delays.get(state).copied().unwrap_or_default();
            let item = MenuItem::new(format!("{state}:{role}"), state.to_string());
            stream::once(async move {
                tokio::time::sleep(delay).await;
                vec![item]
            })
            .boxed()
        }
    }

    fn spawn(service: &Arc<ScriptedService>, mode: DisplayMode, role: UserRole) -> (ViewModelComposer, mpsc::UnboundedReceiver<ViewModel>) {
        let service: Arc<dyn NavigationalListService> = service.clone();
        ViewModelComposer::spawn(service, StructuralSubtype::nav(), mode, role)
    }

    async fn settle(receiver: &mut mpsc::UnboundedReceiver<ViewModel>) -> Vec<ViewModel> {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let mut received = Vec::new();
        while let Ok(view_model) = receiver.try_recv() {
            received.push(view_model);
        }
        received
    }

    #[tokio::test(start_paused = true)]
    async fn emits_initial_view_model_with_uppercased_state() {
        let service = Arc::new(ScriptedService::default());
        let (_composer, mut receiver) = spawn(&service, DisplayMode::Verbose, UserRole::Admin);

        let view_model = receiver.recv().await.expect("initial view-model");
        assert_eq!(view_model.mode, DisplayMode::Verbose);
        assert_eq!(view_model.role, UserRole::Admin);
        assert_eq!(view_model.menu_items[0].id, "VERBOSE:admin");
        assert_eq!(service.calls(), vec!["role:admin", "fetch:NAV:VERBOSE"]);
    }

    #[tokio::test(start_paused = true)]
    async fn role_is_forwarded_before_every_fetch() {
        let service = Arc::new(ScriptedService::default());
        let (composer, mut receiver) = spawn(&service, DisplayMode::Minimal, UserRole::None);
        receiver.recv().await.expect("initial view-model");

        composer.set_role(UserRole::Publisher);
        receiver.recv().await.expect("after role change");
        composer.set_mode(DisplayMode::Verbose);
        receiver.recv().await.expect("after mode change");

        assert_eq!(
            service.calls(),
            vec![
                "role:none",
                "fetch:NAV:MINIMAL",
                "role:publisher",
                "fetch:NAV:MINIMAL",
                "role:publisher",
                "fetch:NAV:VERBOSE",
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_fetch_is_never_emitted() {
        let service = Arc::new(ScriptedService::with_delays(&[("VERBOSE", 200), ("MINIMAL", 10)]));
        let (composer, mut receiver) = spawn(&service, DisplayMode::Verbose, UserRole::Regular);

        tokio::time::sleep(Duration::from_millis(50)).await;
        composer.set_mode(DisplayMode::Minimal);

        let received = settle(&mut receiver).await;
        assert_eq!(received.len(), 1, "only the latest combination resolves: {received:?}");
        assert_eq!(received[0].mode, DisplayMode::Minimal);
        assert_eq!(received[0].menu_items[0].id, "MINIMAL:regular");
    }

    #[tokio::test(start_paused = true)]
    async fn final_state_is_independent_of_input_order() {
        let role_first = Arc::new(ScriptedService::with_delays(&[("VERBOSE", 30), ("MINIMAL", 5)]));
        let (composer, mut first_receiver) = spawn(&role_first, DisplayMode::Disabled, UserRole::None);
        composer.set_role(UserRole::Admin);
        tokio::time::sleep(Duration::from_millis(1)).await;
        composer.set_mode(DisplayMode::Minimal);
        let role_first_final = settle(&mut first_receiver).await.pop().expect("view-model");

        let mode_first = Arc::new(ScriptedService::with_delays(&[("VERBOSE", 30), ("MINIMAL", 5)]));
        let (composer, mut second_receiver) = spawn(&mode_first, DisplayMode::Disabled, UserRole::None);
        composer.set_mode(DisplayMode::Minimal);
        tokio::time::sleep(Duration::from_millis(1)).await;
        composer.set_role(UserRole::Admin);
        let mode_first_final = settle(&mut second_receiver).await.pop().expect("view-model");

        assert_eq!(role_first_final, mode_first_final);
        assert_eq!(role_first_final.menu_items[0].id, "MINIMAL:admin");
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_inputs_do_not_refetch() {
        let service = Arc::new(ScriptedService::default());
        let (composer, mut receiver) = spawn(&service, DisplayMode::Verbose, UserRole::None);
        receiver.recv().await.expect("initial view-model");

        composer.set_mode(DisplayMode::Verbose);
        composer.set_role(UserRole::None);
        assert!(settle(&mut receiver).await.is_empty());
        assert_eq!(service.calls().len(), 2);
        assert_eq!(composer.mode(), DisplayMode::Verbose);
        assert_eq!(composer.role(), UserRole::None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_composer_closes_the_output() {
        let service = Arc::new(ScriptedService::with_delays(&[("VERBOSE", 100)]));
        let (composer, mut receiver) = spawn(&service, DisplayMode::Verbose, UserRole::None);
        drop(composer);
        assert!(receiver.recv().await.is_none());
    }
}
