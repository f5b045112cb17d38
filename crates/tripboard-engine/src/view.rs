use anyhow::Result;
use tripboard_types::{PlugKind, Point, SortKind};

/// Mounted view of a single point.
///
/// Implementations own whatever retained output the renderer keeps for one
/// list entry. The presenter drives mode switches through `show_card` /
/// `show_editor` and ends the lifecycle with `unmount`.
pub trait ItemView {
    fn show_card(&mut self, point: &Point) -> Result<()>;
    fn show_editor(&mut self, point: &Point) -> Result<()>;
    fn unmount(&mut self) -> Result<()>;
}

/// Rendering surface the list presenter mounts into.
///
/// The mount/unmount pairs are the render primitive of the board: mounting
/// puts a component into the surface exactly once, unmounting removes it and
/// releases whatever it held. Items are mounted in visible-sequence order;
/// the presenter never constructs output itself.
pub trait BoardView {
    fn mount_sort_bar(&mut self, active: SortKind) -> Result<()>;
    fn unmount_sort_bar(&mut self) -> Result<()>;
    fn mount_plug(&mut self, plug: PlugKind) -> Result<()>;
    fn unmount_plug(&mut self) -> Result<()>;
    fn mount_item(&mut self, point: &Point) -> Result<Box<dyn ItemView>>;
}
