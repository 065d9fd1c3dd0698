//! Weather dashboard - terminal shell around the dashboard renderer

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_dashboard::action::Action;
use weather_dashboard::components::{Component, DashboardView, DashboardViewProps};
use weather_dashboard::data::{Dashboard, DataError};
use weather_dashboard::effect::Effect;
use weather_dashboard::reducer::reducer;
use weather_dashboard::state::{AppState, Viewport};

/// Static weather dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "weather-dashboard")]
#[command(about = "Current conditions and a seven-day forecast strip")]
struct Args {
    /// JSON dataset to show instead of the built-in sample
    #[arg(long, short)]
    data: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG overrides the level)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DashboardComponentId {
    Dashboard,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum DashboardContext {
    Main,
}

impl EventRoutingState<DashboardComponentId, DashboardContext> for AppState {
    fn focused(&self) -> Option<DashboardComponentId> {
        Some(DashboardComponentId::Dashboard)
    }

    fn modal(&self) -> Option<DashboardComponentId> {
        None
    }

    fn binding_context(&self, _id: DashboardComponentId) -> DashboardContext {
        DashboardContext::Main
    }

    fn default_context(&self) -> DashboardContext {
        DashboardContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        data,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        init_logging(path)?;
    }

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    // The dataset is fixed for the whole run; bad data stops us before the
    // terminal is touched
    let dashboard = match load_dashboard(data.as_deref()) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let viewport = crossterm::terminal::size()
        .map(|(width, height)| Viewport { width, height })
        .unwrap_or_default();

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(
                AppState::new(dashboard).with_viewport(viewport.width, viewport.height),
            )
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    info!("dashboard closed");
    Ok(())
}

/// Send `tracing` output to a file; the terminal belongs to the UI
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weather_dashboard=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_dashboard(path: Option<&Path>) -> Result<Dashboard, DataError> {
    let dashboard = match path {
        Some(path) => {
            let dashboard = Dashboard::load(path)?;
            info!(path = %path.display(), "dataset loaded");
            dashboard
        }
        None => {
            let dashboard = Dashboard::sample();
            info!("using built-in sample dataset");
            dashboard
        }
    };
    info!(
        place = %dashboard.current.place,
        forecast_days = dashboard.forecast.len(),
        "dashboard ready"
    );
    Ok(dashboard)
}

struct DashboardUi {
    view: DashboardView,
}

impl DashboardUi {
    fn new() -> Self {
        Self {
            view: DashboardView,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<DashboardComponentId>,
    ) {
        event_ctx.set_component_area(DashboardComponentId::Dashboard, area);

        let props = DashboardViewProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.view.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = DashboardViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.view.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(DashboardUi::new()));
    let mut bus: EventBus<AppState, Action, DashboardComponentId, DashboardContext> =
        EventBus::new();
    let keybindings: Keybindings<DashboardContext> = Keybindings::new();

    let ui_dashboard = Rc::clone(&ui);
    bus.register(DashboardComponentId::Dashboard, move |event, state| {
        ui_dashboard.borrow_mut().handle_event(&event.kind, state)
    });

    // Keep scroll bounds in step with the terminal size
    bus.register_global(|event, _state| match &event.kind {
        EventKind::Resize(width, height) => HandlerResponse {
            actions: vec![Action::UiResize(*width, *height)],
            consumed: false,
            needs_render: true,
        },
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            None,
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// The dashboard declares no effects
fn handle_effect(effect: Effect, _ctx: &mut EffectContext<Action>) {
    match effect {}
}
