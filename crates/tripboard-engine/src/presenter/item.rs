use anyhow::Result;
use tripboard_types::{Point, ViewMode};

use crate::view::{BoardView, ItemView};

/// Presenter for exactly one visible point.
///
/// Owns the mounted view and the card/editor mode for its lifetime. Created
/// when the point enters the visible sequence, destroyed when it leaves or
/// the whole list is rebuilt. Destruction consumes the presenter, so a second
/// destroy of the same lifecycle cannot compile.
pub struct ItemPresenter {
    view: Box<dyn ItemView>,
    point: Point,
    mode: ViewMode,
}

impl ItemPresenter {
    /// Mount a view for `point` on the surface and render its card
    pub(crate) fn mount(board: &mut dyn BoardView, point: Point) -> Result<Self> {
        let mut view = board.mount_item(&point)?;
        view.show_card(&point)?;
        Ok(Self {
            view,
            point,
            mode: ViewMode::Card,
        })
    }

    /// Re-render with new content, back in the default card view.
    ///
    /// Idempotent with respect to identity: the mounted view is reused, only
    /// its content swaps.
    pub fn init(&mut self, point: Point) -> Result<()> {
        self.point = point;
        self.mode = ViewMode::Card;
        self.view.show_card(&self.point)
    }

    /// Switch to the editor view.
    ///
    /// The list presenter resets every sibling first; by the time this runs
    /// the exclusivity invariant already holds.
    pub(crate) fn begin_edit(&mut self) -> Result<()> {
        if self.mode == ViewMode::Editor {
            return Ok(());
        }
        self.mode = ViewMode::Editor;
        self.view.show_editor(&self.point)
    }

    /// Discard in-progress edits and revert to the card; no-op when not editing
    pub fn reset_view(&mut self) -> Result<()> {
        if self.mode != ViewMode::Editor {
            return Ok(());
        }
        self.mode = ViewMode::Card;
        self.view.show_card(&self.point)
    }

    /// Unmount the view and release the presenter
    pub fn destroy(mut self) -> Result<()> {
        self.view.unmount()
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }
}
