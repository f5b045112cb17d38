//! Pre-wired board world for presenter-level tests.

use std::sync::{Arc, Mutex};

use anyhow::Result;

use tripboard_engine::ListPresenter;
use tripboard_model::{FilterModel, PointsModel};
use tripboard_types::{FilterKind, Point, UpdateScope};

use crate::fixtures;
use crate::recording::{OpLog, RecordingBoard};

/// Models + presenter + recording board, wired against the fixture clock
pub struct TestBoard {
    pub points: Arc<Mutex<PointsModel>>,
    pub filter: Arc<Mutex<FilterModel>>,
    pub presenter: ListPresenter,
    pub ops: OpLog,
}

impl TestBoard {
    /// Ready model over the given collection; `init` not yet called
    pub fn with_points(points: Vec<Point>) -> Self {
        Self::build(PointsModel::from_points(points))
    }

    /// Model still in the `Loading` state
    pub fn loading() -> Self {
        Self::build(PointsModel::new())
    }

    fn build(model: PointsModel) -> Self {
        let points = Arc::new(Mutex::new(model));
        let filter = Arc::new(Mutex::new(FilterModel::new()));
        let (board, ops) = RecordingBoard::new();
        let presenter = ListPresenter::with_clock(
            points.clone(),
            filter.clone(),
            Box::new(board),
            fixtures::fixed_now,
        );

        Self {
            points,
            filter,
            presenter,
            ops,
        }
    }

    /// Switch the filter the way the UI does: a `Major` structural change
    pub fn switch_filter(&mut self, filter: FilterKind) -> Result<()> {
        self.filter.lock().unwrap().set(UpdateScope::Major, filter);
        self.presenter.pump()
    }
}
