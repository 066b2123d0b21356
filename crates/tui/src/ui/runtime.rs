//! Runtime: terminal lifecycle and the event loop.
//!
//! The loop multiplexes three sources: terminal input (via crossterm's
//! `EventStream`), view-models produced by the composer, and Ctrl+C. Input is
//! routed through [`MainView`]; the effects components return are executed
//! here, and a frame is drawn after every handled event.

use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use navrail_menu::NavigationalListService;
use navrail_types::{DisplayMode, Effect, Msg, UserRole, ViewModel};
use navrail_util::{NavConfig, UserPreferences, open_external};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;
use crate::view_model::ViewModelComposer;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Tui, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, event: Event) -> Vec<Effect> {
    match event {
        Event::Key(key) if key.is_press() => main_view.handle_key_events(app, key),
        Event::Mouse(mouse) if mouse.kind != MouseEventKind::Moved => main_view.handle_mouse_events(app, mouse),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Whether the loop should keep running after these effects.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Executes component effects against the app and the host environment.
fn process_effects(app: &mut App, main_view: &mut MainView, effects: Vec<Effect>) -> Flow {
    for effect in effects {
        match effect {
            Effect::Navigate(route) => app.navigate(&route),
            Effect::RedirectToLogin => {
                let url = app.login_url();
                info!(%url, "redirecting to sign-in");
                match open_external(&url) {
                    Ok(()) => app.status = Some(format!("Opened sign-in page: {url}")),
                    Err(error) => {
                        warn!(%url, %error, "Failed to open the sign-in page");
                        app.status = Some(format!("Open {url} to sign in"));
                    }
                }
            }
            Effect::ShowModal(modal) => main_view.set_open_modal_kind(app, Some(modal)),
            Effect::CloseModal => main_view.set_open_modal_kind(app, None),
            Effect::Quit => return Flow::Exit,
        }
    }
    Flow::Continue
}

/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit, including when the loop fails.
pub async fn run_app(
    config: NavConfig,
    service: Arc<dyn NavigationalListService>,
    preferences: Arc<UserPreferences>,
    mode: DisplayMode,
    role: UserRole,
) -> Result<()> {
    let (composer, mut view_models) = ViewModelComposer::spawn(service, config.subtype.clone(), mode, role);
    let mut app = App::new(config, preferences, composer);
    let mut main_view = MainView::new();

    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &mut view_models).await;
    cleanup_terminal(&mut terminal)?;
    outcome
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    main_view: &mut MainView,
    view_models: &mut mpsc::UnboundedReceiver<ViewModel>,
) -> Result<()> {
    let mut input = EventStream::new();
    render(terminal, app, main_view)?;

    loop {
        let effects = tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(event)) => handle_input_event(app, main_view, event),
                Some(Err(error)) => return Err(error).context("read terminal input"),
                // Input stream closed; shut down cleanly.
                None => break,
            },
            Some(view_model) = view_models.recv() => main_view.handle_message(app, Msg::ViewModelReady(view_model)),
            _ = signal::ctrl_c() => break,
        };

        if process_effects(app, main_view, effects) == Flow::Exit {
            break;
        }
        render(terminal, app, main_view)?;
    }
    Ok(())
}
