//! Index List Widget
//! Left sidebar listing all index names; reports selection changes to
//! the app as an action value.

use crate::data::IndexDataset;
use crate::theme;
use egui::{RichText, ScrollArea};

/// Selection outcome of one frame of the list.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexListAction {
    None,
    Selected(String),
}

/// Scrollable list of index names with the current selection highlighted.
pub struct IndexList;

impl IndexList {
    pub fn show(
        ui: &mut egui::Ui,
        dataset: &IndexDataset,
        selected: Option<&str>,
    ) -> IndexListAction {
        let mut action = IndexListAction::None;

        ui.add_space(8.0);
        ui.label(
            RichText::new("Indices")
                .size(16.0)
                .strong()
                .color(theme::ACCENT_COLOR),
        );
        ui.add_space(6.0);

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for name in dataset.names() {
                let is_selected = selected == Some(name);
                if ui
                    .selectable_label(is_selected, RichText::new(name).size(15.0))
                    .clicked()
                {
                    action = IndexListAction::Selected(name.to_string());
                }
            }
        });

        action
    }
}
