//! Theme Module
//! Fixed dark color scheme shared by the window shell and the chart.

use egui::Color32;

pub const BG_COLOR: Color32 = Color32::from_rgb(0, 0, 0);
pub const PANEL_BG: Color32 = Color32::from_rgb(28, 28, 28);
pub const TEXT_COLOR: Color32 = Color32::from_rgb(255, 255, 255);
pub const ACCENT_COLOR: Color32 = Color32::from_rgb(255, 215, 0); // Gold

/// One color per OHLC bar: Open, High, Low, Close.
pub const BAR_PALETTE: [Color32; 4] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(46, 204, 113),  // Green
];

/// Apply the dark scheme to the whole UI once at startup.
pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_COLOR;
    visuals.window_fill = BG_COLOR;
    visuals.extreme_bg_color = PANEL_BG;
    visuals.widgets.noninteractive.bg_fill = PANEL_BG;
    visuals.override_text_color = Some(TEXT_COLOR);
    visuals.selection.bg_fill = ACCENT_COLOR;
    visuals.selection.stroke = egui::Stroke::new(1.0, BG_COLOR);
    ctx.set_visuals(visuals);
}
