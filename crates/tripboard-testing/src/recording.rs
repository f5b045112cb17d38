//! Render-contract implementation that records instead of drawing.
//!
//! Every mount/show/unmount the presenter performs lands in an [`OpLog`]
//! the test keeps a handle to, so reconciliation behavior can be asserted
//! operation by operation.

use std::sync::{Arc, Mutex};

use anyhow::Result;

use tripboard_engine::{BoardView, ItemView};
use tripboard_types::{PlugKind, Point, PointId, SortKind};

/// One operation the presenter performed against the render contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    MountSortBar(SortKind),
    UnmountSortBar,
    MountPlug(PlugKind),
    UnmountPlug,
    MountItem(PointId),
    ShowCard(PointId),
    ShowEditor(PointId),
    UnmountItem(PointId),
}

/// Shared, clonable handle onto the recorded operation sequence
#[derive(Debug, Clone, Default)]
pub struct OpLog {
    ops: Arc<Mutex<Vec<Op>>>,
}

impl OpLog {
    fn push(&self, op: Op) {
        self.ops.lock().unwrap().push(op);
    }

    /// Copy of everything recorded so far
    pub fn snapshot(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }

    /// Drain the log, returning what was recorded since the last take
    pub fn take(&self) -> Vec<Op> {
        std::mem::take(&mut *self.ops.lock().unwrap())
    }

    pub fn count(&self, matching: impl Fn(&Op) -> bool) -> usize {
        self.ops.lock().unwrap().iter().filter(|op| matching(op)).count()
    }
}

/// Board surface that records every call
#[derive(Debug, Default)]
pub struct RecordingBoard {
    log: OpLog,
}

impl RecordingBoard {
    pub fn new() -> (Self, OpLog) {
        let board = Self::default();
        let log = board.log.clone();
        (board, log)
    }
}

impl BoardView for RecordingBoard {
    fn mount_sort_bar(&mut self, active: SortKind) -> Result<()> {
        self.log.push(Op::MountSortBar(active));
        Ok(())
    }

    fn unmount_sort_bar(&mut self) -> Result<()> {
        self.log.push(Op::UnmountSortBar);
        Ok(())
    }

    fn mount_plug(&mut self, plug: PlugKind) -> Result<()> {
        self.log.push(Op::MountPlug(plug));
        Ok(())
    }

    fn unmount_plug(&mut self) -> Result<()> {
        self.log.push(Op::UnmountPlug);
        Ok(())
    }

    fn mount_item(&mut self, point: &Point) -> Result<Box<dyn ItemView>> {
        self.log.push(Op::MountItem(point.id));
        Ok(Box::new(RecordingItem {
            log: self.log.clone(),
            id: point.id,
        }))
    }
}

struct RecordingItem {
    log: OpLog,
    id: PointId,
}

impl ItemView for RecordingItem {
    fn show_card(&mut self, point: &Point) -> Result<()> {
        self.log.push(Op::ShowCard(point.id));
        Ok(())
    }

    fn show_editor(&mut self, point: &Point) -> Result<()> {
        self.log.push(Op::ShowEditor(point.id));
        Ok(())
    }

    fn unmount(&mut self) -> Result<()> {
        self.log.push(Op::UnmountItem(self.id));
        Ok(())
    }
}
