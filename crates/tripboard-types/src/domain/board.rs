use serde::{Deserialize, Serialize};

use super::point::{Point, PointId};

/// Active ordering of the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKind {
    #[default]
    Day,
    Event,
    Time,
    Price,
    Offers,
}

impl SortKind {
    pub const ALL: [SortKind; 5] = [
        SortKind::Day,
        SortKind::Event,
        SortKind::Time,
        SortKind::Price,
        SortKind::Offers,
    ];

    /// Parse a sort tag from config or CLI input.
    ///
    /// Unknown tags fall back to the default ordering — never an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "day" => SortKind::Day,
            "event" => SortKind::Event,
            "time" => SortKind::Time,
            "price" => SortKind::Price,
            "offers" => SortKind::Offers,
            _ => SortKind::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKind::Day => "Day",
            SortKind::Event => "Event",
            SortKind::Time => "Time",
            SortKind::Price => "Price",
            SortKind::Offers => "Offers",
        }
    }

    /// Next selection in the sort bar (wraps around)
    pub fn next(&self) -> Self {
        let pos = Self::ALL.iter().position(|kind| kind == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for SortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Active filter over the working sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    #[default]
    Everything,
    Past,
    Present,
    Future,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Everything,
        FilterKind::Past,
        FilterKind::Present,
        FilterKind::Future,
    ];

    /// Parse a filter tag from config or CLI input.
    ///
    /// Unknown tags fall back to the default filter — never an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "everything" => FilterKind::Everything,
            "past" => FilterKind::Past,
            "present" => FilterKind::Present,
            "future" => FilterKind::Future,
            _ => FilterKind::default(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Everything => "Everything",
            FilterKind::Past => "Past",
            FilterKind::Present => "Present",
            FilterKind::Future => "Future",
        }
    }

    pub fn next(&self) -> Self {
        let pos = Self::ALL.iter().position(|kind| kind == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reconciliation scope attached to every model notification.
///
/// - `Patch`: one visible point changed in place; no ordering impact.
/// - `Minor`: visible membership or order may have changed; keep the sort.
/// - `Major`: the premise of the current sort is gone; reset it to default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateScope {
    Patch,
    Minor,
    Major,
}

/// Per-item view mode; at most one item is in `Editor` at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Card,
    Editor,
}

/// Placeholder rendered instead of the sort bar and list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlugKind {
    /// The active filter matched nothing
    Empty(FilterKind),
    Loading,
    LoadFailed,
}

impl PlugKind {
    pub fn message(&self) -> &'static str {
        match self {
            PlugKind::Empty(FilterKind::Everything) => {
                "Click New Event to create your first point"
            }
            PlugKind::Empty(FilterKind::Past) => "There are no past events now",
            PlugKind::Empty(FilterKind::Present) => "There are no present events now",
            PlugKind::Empty(FilterKind::Future) => "There are no future events now",
            PlugKind::Loading => "Loading...",
            PlugKind::LoadFailed => "Failed to load latest route information",
        }
    }
}

/// User-initiated mutation, dispatched verbatim to the PointsModel.
///
/// The action set is closed by construction; the proposing view also picks
/// the [`UpdateScope`] it believes fits (a plain field edit proposes `Patch`,
/// anything that can move an item across a sort or filter boundary proposes
/// `Minor`). The ListPresenter forwards, the model decides nothing further.
#[derive(Debug, Clone)]
pub enum ViewAction {
    Update { scope: UpdateScope, point: Point },
    Add { scope: UpdateScope, point: Point },
    Delete { scope: UpdateScope, id: PointId },
}
