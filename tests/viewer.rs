//! Drives the selection-to-render path on the app's non-GUI surface.

use index_insights::data::IndexDataset;
use index_insights::gui::IndexViewerApp;

fn app() -> IndexViewerApp {
    IndexViewerApp::with_dataset(IndexDataset::embedded().unwrap())
}

#[test]
fn starts_idle_with_nothing_to_show() {
    let app = app();
    assert_eq!(app.selected_name(), None);
    assert!(app.chart_data().is_none());
    assert!(app.detail_text().is_none());
}

#[test]
fn selecting_nifty_50_updates_chart_and_details() {
    let mut app = app();
    app.select_index("Nifty 50");

    assert_eq!(app.selected_name(), Some("Nifty 50"));

    let chart = app.chart_data().unwrap();
    assert_eq!(chart.values, [21932.20, 22180.70, 21883.30, 22096.75]);
    assert!((chart.y_bounds.0 - 21883.30 * 0.98).abs() < 1e-9);
    assert!((chart.y_bounds.1 - 22180.70 * 1.02).abs() < 1e-9);

    let details = app.detail_text().unwrap();
    assert!(details.contains("Date: 2024-03-22"));
    assert!(details.contains("Volume: 388,656,439"));
    assert!(details.contains("PE Ratio: 22.81"));
}

#[test]
fn every_index_in_the_table_is_selectable() {
    let dataset = IndexDataset::embedded().unwrap();
    let mut app = app();

    for record in dataset.records() {
        app.select_index(&record.name);
        assert_eq!(app.selected_name(), Some(record.name.as_str()));

        let chart = app.chart_data().unwrap();
        assert_eq!(chart.values, record.ohlc());

        let details = app.detail_text().unwrap();
        assert!(details.contains(&record.date));
    }
}

#[test]
fn unknown_selection_leaves_previous_display_unchanged() {
    let mut app = app();
    app.select_index("Nifty Midcap 50");

    let chart_before = app.chart_data().unwrap().clone();
    let details_before = app.detail_text().unwrap().to_string();

    app.select_index("Nifty Bank");

    assert_eq!(app.selected_name(), Some("Nifty Midcap 50"));
    assert_eq!(app.chart_data().unwrap(), &chart_before);
    assert_eq!(app.detail_text().unwrap(), details_before);
}

#[test]
fn unknown_selection_from_idle_stays_idle() {
    let mut app = app();
    app.select_index("Nifty Bank");
    assert_eq!(app.selected_name(), None);
    assert!(app.chart_data().is_none());
}

#[test]
fn reselecting_the_same_index_is_idempotent() {
    let mut app = app();
    app.select_index("Nifty 200");

    let chart_first = app.chart_data().unwrap().clone();
    let details_first = app.detail_text().unwrap().to_string();

    app.select_index("Nifty 200");

    assert_eq!(app.chart_data().unwrap(), &chart_first);
    assert_eq!(app.detail_text().unwrap(), details_first);
}
