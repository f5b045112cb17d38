mod app;
mod ui;

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tripboard_engine::ListPresenter;
use tripboard_model::{FilterModel, PointsModel};
use tripboard_types::{FilterKind, Point, SortKind, UpdateScope, ViewAction};

use crate::sample;
use app::{AppState, SharedBoardState, TuiBoard};

pub fn run_board(points: Vec<Point>, sort: SortKind, filter: FilterKind) -> Result<()> {
    let points_model = Arc::new(Mutex::new(PointsModel::from_points(points)));
    let filter_model = Arc::new(Mutex::new(FilterModel::new()));
    filter_model.lock().unwrap().set(UpdateScope::Major, filter);

    let (board, state) = TuiBoard::new();
    let mut presenter =
        ListPresenter::new(points_model, filter_model.clone(), Box::new(board));
    presenter.init()?;
    presenter.change_sort(sort)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app = AppState {
        status: String::from("Ready"),
        ..AppState::default()
    };
    let result = event_loop(&mut terminal, &mut presenter, &filter_model, &state, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    presenter: &mut ListPresenter,
    filter_model: &Arc<Mutex<FilterModel>>,
    state: &SharedBoardState,
    app: &mut AppState,
) -> Result<()> {
    loop {
        app.clamp_selection(state.borrow().entries.len());
        terminal.draw(|f| ui::draw(f, &state.borrow(), app, presenter.active_filter()))?;

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Esc => {
                if let Some(id) = presenter.editing() {
                    presenter.close_editor(id)?;
                    app.draft_price = None;
                    app.status = String::from("Edit discarded");
                }
            }
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => {
                let len = state.borrow().entries.len();
                app.select_next(len);
            }
            KeyCode::Char('s') if presenter.editing().is_none() => {
                presenter.change_sort(presenter.active_sort().next())?;
                app.status = format!("Sorted by {}", presenter.active_sort());
            }
            KeyCode::Char('f') if presenter.editing().is_none() => {
                let next = filter_model.lock().unwrap().current().next();
                filter_model.lock().unwrap().set(UpdateScope::Major, next);
                presenter.pump()?;
                app.status = format!("Filter: {}", next);
            }
            KeyCode::Enter => {
                if let Some(id) = presenter.editing() {
                    let edited = presenter
                        .visible()
                        .iter()
                        .find(|point| point.id == id)
                        .cloned();
                    if let Some(mut point) = edited {
                        if let Some(price) = app.draft_price.take() {
                            point.base_price = price;
                        }
                        // A price change can move the item across the active
                        // sort order, so the editor proposes a structural
                        // update rather than a patch.
                        presenter.dispatch(ViewAction::Update {
                            scope: UpdateScope::Minor,
                            point,
                        })?;
                        app.status = String::from("Saved");
                    }
                } else if let Some(point) = selected_point(state, app) {
                    app.draft_price = Some(point.base_price);
                    presenter.open_editor(point.id)?;
                    app.status = String::from("Editing: +/- price, Enter save, Esc discard");
                }
            }
            KeyCode::Char(' ') if presenter.editing().is_none() => {
                if let Some(mut point) = selected_point(state, app) {
                    point.is_favorite = !point.is_favorite;
                    // Favorite is a plain field with no sort or filter
                    // relevance: patch the one card in place.
                    presenter.dispatch(ViewAction::Update {
                        scope: UpdateScope::Patch,
                        point,
                    })?;
                }
            }
            KeyCode::Char('d') if presenter.editing().is_none() => {
                if let Some(point) = selected_point(state, app) {
                    presenter.dispatch(ViewAction::Delete {
                        scope: UpdateScope::Minor,
                        id: point.id,
                    })?;
                    app.status = String::from("Point deleted");
                }
            }
            KeyCode::Char('n') if presenter.editing().is_none() => {
                let template = sample::template_point(app.added);
                app.added += 1;
                presenter.dispatch(ViewAction::Add {
                    scope: UpdateScope::Minor,
                    point: template,
                })?;
                app.status = String::from("Point added");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(price) = app.draft_price.as_mut() {
                    *price += 10;
                }
            }
            KeyCode::Char('-') => {
                if let Some(price) = app.draft_price.as_mut() {
                    *price = price.saturating_sub(10);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn selected_point(state: &SharedBoardState, app: &AppState) -> Option<Point> {
    state
        .borrow()
        .entries
        .get(app.selected)
        .map(|entry| entry.point.clone())
}
