use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use tripboard_model::{Change, FilterModel, LoadStatus, ModelEvent, PointsModel};
use tripboard_types::{
    FilterKind, PlugKind, Point, PointId, SortKind, UpdateScope, ViewAction, ViewMode,
};

use crate::presenter::item::ItemPresenter;
use crate::view::BoardView;
use crate::{filter, sort};

/// Time source for Past/Present/Future classification
pub type Clock = fn() -> DateTime<Utc>;

/// The list-state synchronization core.
///
/// Owns the derived snapshots of the point collection and one
/// [`ItemPresenter`] per visible point, keyed by id. Subscribes to both
/// models at construction and reconciles the board on [`ListPresenter::pump`]
/// according to the scope of each notification:
///
/// - `Patch` re-initializes the one addressed presenter in place;
/// - `Minor` rebuilds the visible list under the current sort and filter;
/// - `Major` rebuilds and resets the sort selection to the default.
///
/// Invariant between renders: the presenter map keys equal the visible
/// sequence ids, exactly.
pub struct ListPresenter {
    points_model: Arc<Mutex<PointsModel>>,
    filter_model: Arc<Mutex<FilterModel>>,
    points_events: Receiver<ModelEvent>,
    filter_events: Receiver<ModelEvent>,

    board: Box<dyn BoardView>,

    /// Full collection as last observed, Day-ordered baseline
    working: Vec<Point>,
    /// Filtered-then-sorted sequence currently rendered
    visible: Vec<Point>,
    items: HashMap<PointId, ItemPresenter>,

    current_sort: SortKind,
    active_filter: FilterKind,
    sort_bar_mounted: bool,
    plug: Option<PlugKind>,
    clock: Clock,
}

impl ListPresenter {
    pub fn new(
        points_model: Arc<Mutex<PointsModel>>,
        filter_model: Arc<Mutex<FilterModel>>,
        board: Box<dyn BoardView>,
    ) -> Self {
        Self::with_clock(points_model, filter_model, board, Utc::now)
    }

    /// Same as [`ListPresenter::new`] with an injected time source
    pub fn with_clock(
        points_model: Arc<Mutex<PointsModel>>,
        filter_model: Arc<Mutex<FilterModel>>,
        board: Box<dyn BoardView>,
        clock: Clock,
    ) -> Self {
        let points_events = points_model.lock().unwrap().subscribe();
        let filter_events = filter_model.lock().unwrap().subscribe();

        Self {
            points_model,
            filter_model,
            points_events,
            filter_events,
            board,
            working: Vec::new(),
            visible: Vec::new(),
            items: HashMap::new(),
            current_sort: SortKind::default(),
            active_filter: FilterKind::default(),
            sort_bar_mounted: false,
            plug: None,
            clock,
        }
    }

    /// Capture the collection and perform the initial render.
    ///
    /// An empty collection is a valid state, not an error.
    pub fn init(&mut self) -> Result<()> {
        self.capture_working();
        self.render_board()
    }

    /// Switch the active sort; no-op when the selection is unchanged.
    ///
    /// Re-derives the visible sequence from the working sequence (filter
    /// untouched) and rebuilds the list so the sort bar reflects the new
    /// selection.
    pub fn change_sort(&mut self, sort: SortKind) -> Result<()> {
        if self.current_sort == sort {
            return Ok(());
        }
        debug!(?sort, "sort selection changed");
        self.current_sort = sort;
        self.clear_board(false)?;
        self.render_board()
    }

    /// Forward a user-initiated mutation to the PointsModel, then process
    /// the notifications it published.
    pub fn dispatch(&mut self, action: ViewAction) -> Result<()> {
        {
            let mut model = self.points_model.lock().unwrap();
            match action {
                ViewAction::Update { scope, point } => model
                    .update_point(scope, point)
                    .context("update point request")?,
                ViewAction::Add { scope, point } => {
                    model.add_point(scope, point).context("add point request")?
                }
                ViewAction::Delete { scope, id } => model
                    .delete_point(scope, id)
                    .context("delete point request")?,
            }
        }
        self.pump()
    }

    /// Drain pending notifications from both models, strictly one at a time
    pub fn pump(&mut self) -> Result<()> {
        while let Ok(event) = self.points_events.try_recv() {
            self.apply_event(event)?;
        }
        while let Ok(event) = self.filter_events.try_recv() {
            self.apply_event(event)?;
        }
        Ok(())
    }

    /// Open the editor for `id`, resetting every other presenter first so at
    /// most one editor exists at any time.
    pub fn open_editor(&mut self, id: PointId) -> Result<()> {
        for (other, presenter) in self.items.iter_mut() {
            if *other != id {
                presenter.reset_view()?;
            }
        }
        match self.items.get_mut(&id) {
            Some(presenter) => presenter.begin_edit(),
            None => {
                warn!(%id, "editor requested for a point that is not visible");
                Ok(())
            }
        }
    }

    /// Close the editor on `id` (discarding edits); no-op when not editing
    pub fn close_editor(&mut self, id: PointId) -> Result<()> {
        match self.items.get_mut(&id) {
            Some(presenter) => presenter.reset_view(),
            None => Ok(()),
        }
    }

    pub fn visible(&self) -> &[Point] {
        &self.visible
    }

    pub fn active_sort(&self) -> SortKind {
        self.current_sort
    }

    pub fn active_filter(&self) -> FilterKind {
        self.active_filter
    }

    /// Ids of the currently mounted item presenters, in arbitrary order
    pub fn mounted_ids(&self) -> Vec<PointId> {
        self.items.keys().copied().collect()
    }

    /// Id of the presenter currently in editor mode, if any
    pub fn editing(&self) -> Option<PointId> {
        self.items
            .iter()
            .find(|(_, presenter)| presenter.mode() == ViewMode::Editor)
            .map(|(id, _)| *id)
    }

    /// Plug currently mounted instead of the list, if any
    pub fn plug(&self) -> Option<PlugKind> {
        self.plug
    }

    fn apply_event(&mut self, event: ModelEvent) -> Result<()> {
        debug!(scope = ?event.scope, "reconciling model notification");
        match event.scope {
            UpdateScope::Patch => {
                let Change::Point(point) = event.change else {
                    debug_assert!(false, "patch notification without a point payload");
                    error!("patch notification without a point payload; skipped");
                    return Ok(());
                };
                self.patch_item(point)
            }
            UpdateScope::Minor => self.rebuild(false),
            UpdateScope::Major => self.rebuild(true),
        }
    }

    /// Re-initialize one presenter in place; no re-sort, no re-filter, and
    /// nothing else on the board is touched.
    fn patch_item(&mut self, point: Point) -> Result<()> {
        if let Some(slot) = self.working.iter_mut().find(|p| p.id == point.id) {
            *slot = point.clone();
        }
        if let Some(slot) = self.visible.iter_mut().find(|p| p.id == point.id) {
            *slot = point.clone();
        }
        match self.items.get_mut(&point.id) {
            Some(presenter) => presenter.init(point),
            None => {
                // The model claims a point is visible-and-patchable that was
                // never rendered. Contract violation on the emitting side.
                debug_assert!(false, "patch for unmounted point {}", point.id);
                error!(id = %point.id, "patch notification for a point with no mounted presenter");
                Ok(())
            }
        }
    }

    fn rebuild(&mut self, reset_sort: bool) -> Result<()> {
        self.capture_working();
        self.clear_board(reset_sort)?;
        self.render_board()
    }

    fn capture_working(&mut self) {
        self.working = self.points_model.lock().unwrap().points().to_vec();
        sort::sort_points(&mut self.working, SortKind::Day);
    }

    fn render_board(&mut self) -> Result<()> {
        let status = self.points_model.lock().unwrap().status();
        match status {
            LoadStatus::Loading => return self.mount_plug(PlugKind::Loading),
            LoadStatus::Failed => return self.mount_plug(PlugKind::LoadFailed),
            LoadStatus::Ready => {}
        }

        self.visible = self.derive_visible();
        if self.visible.is_empty() {
            return self.mount_plug(PlugKind::Empty(self.active_filter));
        }

        self.board.mount_sort_bar(self.current_sort)?;
        self.sort_bar_mounted = true;
        for point in &self.visible {
            let presenter = ItemPresenter::mount(self.board.as_mut(), point.clone())?;
            self.items.insert(point.id, presenter);
        }
        Ok(())
    }

    fn derive_visible(&mut self) -> Vec<Point> {
        self.active_filter = self.filter_model.lock().unwrap().current();
        let now = (self.clock)();
        let mut visible = filter::apply(self.active_filter, &self.working, now);
        sort::sort_points(&mut visible, self.current_sort);
        visible
    }

    fn mount_plug(&mut self, plug: PlugKind) -> Result<()> {
        self.board.mount_plug(plug)?;
        self.plug = Some(plug);
        Ok(())
    }

    fn clear_board(&mut self, reset_sort: bool) -> Result<()> {
        for (_, presenter) in self.items.drain() {
            presenter.destroy()?;
        }
        self.visible.clear();

        if self.sort_bar_mounted {
            self.board.unmount_sort_bar()?;
            self.sort_bar_mounted = false;
        }
        if self.plug.take().is_some() {
            self.board.unmount_plug()?;
        }
        if reset_sort {
            self.current_sort = SortKind::default();
        }
        Ok(())
    }
}
