use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventKind,
    HandlerResponse, Keybindings, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use dextrack::action::Action;
use dextrack::api;
use dextrack::effect::Effect;
use dextrack::persist::{self, Prefs};
use dextrack::reducer::reducer;
use dextrack::state::AppState;
use dextrack::ui::{DexComponentId, DexContext, DexUi};

#[derive(Parser, Debug)]
#[command(name = "dextrack")]
#[command(about = "Pokedex catalog and caught tracker")]
struct Args {
    #[command(flatten)]
    debug: DebugCliArgs,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let debug = DebugSession::new(args.debug);

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

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
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    Ok(())
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
    let ui = Rc::new(RefCell::new(DexUi::new()));
    let mut bus: EventBus<AppState, Action, DexComponentId, DexContext> = EventBus::new();
    let keybindings: Keybindings<DexContext> = Keybindings::new();

    let ui_header = Rc::clone(&ui);
    bus.register(DexComponentId::Header, move |event, state| {
        ui_header
            .borrow_mut()
            .handle_header_event(&event.kind, state)
    });

    let ui_grid = Rc::clone(&ui);
    bus.register(DexComponentId::Grid, move |event, state| {
        ui_grid.borrow_mut().handle_grid_event(&event.kind, state)
    });

    let ui_detail = Rc::clone(&ui);
    bus.register(DexComponentId::Detail, move |event, state| {
        ui_detail
            .borrow_mut()
            .handle_detail_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(DexComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    bus.register_global(|event, state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        EventKind::Key(key) => match key.code {
            crossterm::event::KeyCode::Char('q') => HandlerResponse::action(Action::Quit),
            crossterm::event::KeyCode::Tab => HandlerResponse::action(Action::FocusNext),
            crossterm::event::KeyCode::BackTab => HandlerResponse::action(Action::FocusPrev),
            crossterm::event::KeyCode::Char('/') if !state.search.active => {
                HandlerResponse::action(Action::SearchStart)
            }
            crossterm::event::KeyCode::Char('[') if !state.search.active => {
                HandlerResponse::action(Action::TypeFilterPrev)
            }
            crossterm::event::KeyCode::Char(']') if !state.search.active => {
                HandlerResponse::action(Action::TypeFilterNext)
            }
            crossterm::event::KeyCode::Char('g') if !state.search.active => {
                HandlerResponse::action(Action::GenerationNext)
            }
            crossterm::event::KeyCode::Char('G') if !state.search.active => {
                HandlerResponse::action(Action::GenerationPrev)
            }
            crossterm::event::KeyCode::Char('v') if !state.search.active => {
                HandlerResponse::action(Action::CaughtFilterCycle)
            }
            crossterm::event::KeyCode::Char('s') if !state.search.active => {
                HandlerResponse::action(Action::ToggleShiny)
            }
            crossterm::event::KeyCode::Char('r') if !state.search.active => {
                HandlerResponse::action(Action::GenerationRetry)
            }
            crossterm::event::KeyCode::Char(digit @ '1'..='9') if !state.search.active => {
                let index = digit as usize - '1' as usize;
                HandlerResponse::action(Action::GenerationSelect(index))
            }
            _ => HandlerResponse::ignored(),
        },
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }
                runtime
                    .subscriptions()
                    .interval("tick", Duration::from_millis(120), || Action::Tick);
            },
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

fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadPrefs => {
            ctx.tasks().spawn(TaskKey::new("prefs_load"), async {
                Action::PrefsDidLoad(persist::load_prefs().await)
            });
        }
        Effect::SavePrefs {
            caught,
            generation_index,
        } => {
            // One key: a newer save supersedes an in-flight one.
            ctx.tasks().spawn(TaskKey::new("prefs_save"), async move {
                let prefs = Prefs {
                    caught,
                    generation_index,
                };
                persist::save_prefs(&prefs).await;
                Action::PrefsDidSave
            });
        }
        Effect::FetchRecordChunk { generation, ids } => {
            let key = format!("gen_chunk_{generation}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match api::fetch_record_chunk(&ids).await {
                    Ok(records) => Action::RecordChunkDidLoad {
                        generation,
                        records,
                    },
                    Err(error) => Action::RecordChunkDidError { generation, error },
                }
            });
        }
        Effect::FetchSpecies { id } => {
            let key = format!("species_{id}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match api::fetch_species(id).await {
                    Ok(species) => Action::SpeciesDidLoad { id, species },
                    Err(error) => Action::SpeciesDidError { id, error },
                }
            });
        }
        Effect::FetchEncounters { id } => {
            let key = format!("encounters_{id}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match api::fetch_encounters(id).await {
                    Ok(encounters) => Action::EncountersDidLoad { id, encounters },
                    Err(error) => Action::EncountersDidError { id, error },
                }
            });
        }
    }
}
