use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{bail, Result};

use tripboard_engine::{BoardView, ItemView};
use tripboard_types::{PlugKind, Point, SortKind, ViewMode};

/// Retained render state shared between the board surface and the draw loop.
///
/// The presenter mounts and unmounts slots through [`TuiBoard`]; the draw
/// loop reads whatever is currently mounted. Entries keep mount order, which
/// is the visible-sequence order.
#[derive(Default)]
pub struct BoardState {
    pub sort_bar: Option<SortKind>,
    pub plug: Option<PlugKind>,
    pub entries: Vec<Entry>,
    next_slot: usize,
}

pub struct Entry {
    slot: usize,
    pub point: Point,
    pub mode: ViewMode,
}

impl BoardState {
    fn mount(&mut self, point: &Point) -> usize {
        let slot = self.next_slot;
        self.next_slot += 1;
        self.entries.push(Entry {
            slot,
            point: point.clone(),
            mode: ViewMode::Card,
        });
        slot
    }

    fn entry_mut(&mut self, slot: usize) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.slot == slot)
    }

    fn remove(&mut self, slot: usize) {
        self.entries.retain(|entry| entry.slot != slot);
    }
}

pub type SharedBoardState = Rc<RefCell<BoardState>>;

/// Render-contract implementation for the interactive board
pub struct TuiBoard {
    state: SharedBoardState,
}

impl TuiBoard {
    pub fn new() -> (Self, SharedBoardState) {
        let state = SharedBoardState::default();
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }
}

impl BoardView for TuiBoard {
    fn mount_sort_bar(&mut self, active: SortKind) -> Result<()> {
        self.state.borrow_mut().sort_bar = Some(active);
        Ok(())
    }

    fn unmount_sort_bar(&mut self) -> Result<()> {
        self.state.borrow_mut().sort_bar = None;
        Ok(())
    }

    fn mount_plug(&mut self, plug: PlugKind) -> Result<()> {
        self.state.borrow_mut().plug = Some(plug);
        Ok(())
    }

    fn unmount_plug(&mut self) -> Result<()> {
        self.state.borrow_mut().plug = None;
        Ok(())
    }

    fn mount_item(&mut self, point: &Point) -> Result<Box<dyn ItemView>> {
        let slot = self.state.borrow_mut().mount(point);
        Ok(Box::new(TuiItem {
            state: self.state.clone(),
            slot,
        }))
    }
}

struct TuiItem {
    state: SharedBoardState,
    slot: usize,
}

impl TuiItem {
    fn apply(&mut self, point: &Point, mode: ViewMode) -> Result<()> {
        let mut state = self.state.borrow_mut();
        match state.entry_mut(self.slot) {
            Some(entry) => {
                entry.point = point.clone();
                entry.mode = mode;
                Ok(())
            }
            None => bail!("item view used after unmount"),
        }
    }
}

impl ItemView for TuiItem {
    fn show_card(&mut self, point: &Point) -> Result<()> {
        self.apply(point, ViewMode::Card)
    }

    fn show_editor(&mut self, point: &Point) -> Result<()> {
        self.apply(point, ViewMode::Editor)
    }

    fn unmount(&mut self) -> Result<()> {
        self.state.borrow_mut().remove(self.slot);
        Ok(())
    }
}

/// Interaction state owned by the event loop
#[derive(Default)]
pub struct AppState {
    pub selected: usize,
    /// Price being adjusted while an editor is open
    pub draft_price: Option<u32>,
    pub status: String,
    /// Count of template points handed out by the add key
    pub added: usize,
}

impl AppState {
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
