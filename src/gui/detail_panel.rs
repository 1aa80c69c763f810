//! Detail Panel Widget
//! Right side read-only text block with the selected index's statistics.

use crate::data::{format_thousands, IndexRecord};
use crate::theme;
use egui::RichText;

/// Renders the fixed eight-field detail block.
pub struct DetailPanel;

impl DetailPanel {
    /// Build the detail text for one record. Pure; the widget only
    /// displays the result.
    pub fn format_details(record: &IndexRecord) -> String {
        format!(
            "Date: {}\n\
             Volume: {}\n\
             Turnover (Cr): {}\n\
             PE Ratio: {:.2}\n\
             PB Ratio: {:.2}\n\
             Dividend Yield: {:.2}\n\
             Points Change: {}\n\
             Change Percent: {:.2}%",
            record.date,
            format_thousands(record.volume as f64, 0),
            format_thousands(record.turnover_cr, 2),
            record.pe_ratio,
            record.pb_ratio,
            record.div_yield,
            format_thousands(record.points_change, 2),
            record.change_percent,
        )
    }

    /// Draw the panel; `details` is None until the first selection.
    pub fn show(ui: &mut egui::Ui, details: Option<&str>) {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Index Details")
                    .size(22.0)
                    .strong()
                    .color(theme::ACCENT_COLOR),
            );
        });
        ui.add_space(10.0);

        egui::Frame::none()
            .fill(theme::PANEL_BG)
            .rounding(5.0)
            .stroke(egui::Stroke::new(1.0, theme::TEXT_COLOR))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_height(220.0);
                match details {
                    Some(text) => {
                        ui.label(RichText::new(text).size(15.0).color(theme::TEXT_COLOR));
                    }
                    None => {
                        ui.label(
                            RichText::new("Select an index to see its details")
                                .size(13.0)
                                .color(egui::Color32::GRAY),
                        );
                    }
                }
            });
    }
}
