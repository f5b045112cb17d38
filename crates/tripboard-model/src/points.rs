use std::sync::mpsc::Receiver;

use tracing::debug;
use tripboard_types::{Error, Point, PointId, Result, UpdateScope};

use crate::event::{Change, ModelEvent};
use crate::observer::ObserverSet;

/// Collection-level lifecycle of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Authoritative, observable collection of trip points.
///
/// The single writer of truth: every mutation goes through one of the three
/// entry points below, which validate, mutate the collection, and then notify
/// every observer with `(scope, change)`. Consumers never mutate points
/// directly — they hold read snapshots and dispatch requests back here.
#[derive(Debug, Default)]
pub struct PointsModel {
    points: Vec<Point>,
    status: LoadStatus,
    observers: ObserverSet<ModelEvent>,
}

impl PointsModel {
    /// Empty model in the `Loading` state, waiting for [`PointsModel::seed`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ready model over an already-loaded collection
    pub fn from_points(points: Vec<Point>) -> Self {
        let mut model = Self::new();
        model.points = points;
        model.status = LoadStatus::Ready;
        model
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn subscribe(&mut self) -> Receiver<ModelEvent> {
        self.observers.subscribe()
    }

    /// Install the loaded collection and leave the `Loading` state.
    ///
    /// Published as `Major`: whatever the board showed before (the loading
    /// plug) has no relation to the new collection.
    pub fn seed(&mut self, points: Vec<Point>) -> Result<()> {
        for point in &points {
            point.validate()?;
        }
        self.points = points;
        self.status = LoadStatus::Ready;
        debug!(count = self.points.len(), "points model seeded");
        self.observers
            .publish(ModelEvent::new(UpdateScope::Major, Change::Reloaded));
        Ok(())
    }

    /// Record that loading will not complete
    pub fn fail_loading(&mut self) {
        self.status = LoadStatus::Failed;
        self.observers
            .publish(ModelEvent::new(UpdateScope::Major, Change::Reloaded));
    }

    pub fn update_point(&mut self, scope: UpdateScope, point: Point) -> Result<()> {
        point.validate()?;
        let slot = self
            .points
            .iter_mut()
            .find(|existing| existing.id == point.id)
            .ok_or(Error::UnknownPoint(point.id))?;
        *slot = point.clone();
        debug!(id = %point.id, ?scope, "point updated");
        self.observers
            .publish(ModelEvent::new(scope, Change::Point(point)));
        Ok(())
    }

    pub fn add_point(&mut self, scope: UpdateScope, point: Point) -> Result<()> {
        point.validate()?;
        self.points.push(point.clone());
        debug!(id = %point.id, ?scope, "point added");
        self.observers
            .publish(ModelEvent::new(scope, Change::Point(point)));
        Ok(())
    }

    pub fn delete_point(&mut self, scope: UpdateScope, id: PointId) -> Result<()> {
        let index = self
            .points
            .iter()
            .position(|existing| existing.id == id)
            .ok_or(Error::UnknownPoint(id))?;
        self.points.remove(index);
        debug!(%id, ?scope, "point deleted");
        self.observers
            .publish(ModelEvent::new(scope, Change::Removed(id)));
        Ok(())
    }
}
