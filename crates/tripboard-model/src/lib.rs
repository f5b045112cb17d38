pub mod event;
pub mod filter;
pub mod observer;
pub mod points;

pub use event::{Change, ModelEvent};
pub use filter::FilterModel;
pub use observer::ObserverSet;
pub use points::{LoadStatus, PointsModel};
