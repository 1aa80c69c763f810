//! Index Insights Main Application
//! Main window with the index sidebar, detail panel, and OHLC chart.

use crate::charts::{ChartPlotter, OhlcChartData};
use crate::data::IndexDataset;
use crate::gui::{DetailPanel, IndexList, IndexListAction};
use crate::theme;
use egui::{CentralPanel, RichText, SidePanel, TopBottomPanel};

/// What the window is currently showing. There is no way back to Idle
/// once a selection has been made.
enum ViewState {
    Idle,
    Displaying {
        name: String,
        chart: OhlcChartData,
        details: String,
    },
}

/// Main application window.
pub struct IndexViewerApp {
    dataset: IndexDataset,
    view: ViewState,
}

impl IndexViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: IndexDataset) -> Self {
        theme::apply(&cc.egui_ctx);
        Self::with_dataset(dataset)
    }

    /// Construct without a GUI context, so the selection path can be
    /// driven directly in tests.
    pub fn with_dataset(dataset: IndexDataset) -> Self {
        log::info!("Viewer ready with {} index records", dataset.len());
        Self {
            dataset,
            view: ViewState::Idle,
        }
    }

    /// Handle a selection-changed event. An unknown name is ignored and
    /// the previous display stays as it was.
    pub fn select_index(&mut self, name: &str) {
        match self.dataset.get(name) {
            Some(record) => {
                self.view = ViewState::Displaying {
                    name: record.name.clone(),
                    chart: OhlcChartData::from_record(record),
                    details: DetailPanel::format_details(record),
                };
            }
            None => {
                log::warn!("Ignoring selection of unknown index {name:?}");
            }
        }
    }

    pub fn selected_name(&self) -> Option<&str> {
        match &self.view {
            ViewState::Idle => None,
            ViewState::Displaying { name, .. } => Some(name),
        }
    }

    pub fn chart_data(&self) -> Option<&OhlcChartData> {
        match &self.view {
            ViewState::Idle => None,
            ViewState::Displaying { chart, .. } => Some(chart),
        }
    }

    pub fn detail_text(&self) -> Option<&str> {
        match &self.view {
            ViewState::Idle => None,
            ViewState::Displaying { details, .. } => Some(details),
        }
    }
}

impl eframe::App for IndexViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Header
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(
                    RichText::new("Stock Index Insights")
                        .size(36.0)
                        .strong()
                        .color(theme::ACCENT_COLOR),
                );
                ui.label(
                    RichText::new("Explore indices")
                        .size(18.0)
                        .color(theme::TEXT_COLOR),
                );
                ui.add_space(10.0);
            });
        });

        // Sidebar - index list
        SidePanel::left("index_list")
            .min_width(220.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                let action = IndexList::show(ui, &self.dataset, self.selected_name());
                if let IndexListAction::Selected(name) = action {
                    self.select_index(&name);
                }
            });

        // Right panel - index details
        SidePanel::right("detail_panel")
            .min_width(320.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                DetailPanel::show(ui, self.detail_text());
            });

        // Central panel - OHLC chart
        CentralPanel::default().show(ctx, |ui| {
            match &self.view {
                ViewState::Idle => {
                    ui.centered_and_justified(|ui| {
                        ui.label(
                            RichText::new("Select an index from the list")
                                .size(20.0)
                                .color(egui::Color32::GRAY),
                        );
                    });
                }
                ViewState::Displaying { name, chart, .. } => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new(format!("{name} Index"))
                                .size(28.0)
                                .strong()
                                .color(theme::ACCENT_COLOR),
                        );
                    });
                    ui.add_space(8.0);
                    ChartPlotter::draw_ohlc_chart(ui, chart);
                }
            }
        });
    }
}
