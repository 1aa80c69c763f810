//! GUI module - User interface components

mod app;
mod detail_panel;
mod index_list;

pub use app::IndexViewerApp;
pub use detail_panel::DetailPanel;
pub use index_list::{IndexList, IndexListAction};
