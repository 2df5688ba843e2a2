//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire both stores, the projections and the fake-data fixture end to end.
//! - Print deterministic-format summaries for quick local sanity checks.
//!
//! Usage: `utrack_cli [config.json]`

use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use utrack_core::{
    average_health_metrics, core_version, generate_fake_data, graph_listener,
    health_metrics_table, init_logging_from_config, time_table, ActivityStore, GraphName,
    GraphSelector, LastEntryTracker, MetricToggles, TrackerConfig,
};

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("utrack_cli: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("utrack_cli: {err}");
        return ExitCode::FAILURE;
    }

    println!("utrack_core version={}", core_version());

    let store = Rc::new(ActivityStore::new());
    let selector = GraphSelector::new();
    let tracker = LastEntryTracker::attach(&store);

    let render_store = Rc::clone(&store);
    selector.add_listener(graph_listener(move |_kind, _timestamp_ms, graph| {
        render(*graph, &render_store);
    }));

    let added = generate_fake_data(&store, Some(config.fake_data_points), &mut rand::thread_rng());
    println!("entries added={added} stored={}", store.len());
    if let Some(last_entry_ms) = tracker.last_entry_epoch_ms() {
        println!("last entry epoch_ms={last_entry_ms}");
    }

    // The initial graph may already be selected, which does not notify.
    selector.select(config.initial_graph);
    let initial = selector.get_name_of_currently_selected_graph();
    if initial == GraphName::TimeTable {
        render(initial, &store);
    }
    for graph in GraphName::ALL {
        if graph != initial {
            selector.select(graph);
        }
    }

    info!(
        "event=cli_done module=cli status=ok entries={}",
        store.len()
    );
    ExitCode::SUCCESS
}

fn load_config() -> Result<TrackerConfig, String> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => TrackerConfig::load(&path).map_err(|err| err.to_string()),
        None => Ok(TrackerConfig::default()),
    }
}

fn render(graph: GraphName, store: &ActivityStore) {
    let records = store.get_activity_data_points();
    println!("== {graph}");
    match graph {
        GraphName::TimeTable => {
            for row in time_table(&records) {
                println!(
                    "{} entries={} total_minutes={} average_minutes={}",
                    row.activity_type, row.entries, row.total_minutes, row.average_minutes
                );
            }
        }
        GraphName::HealthMetricsTable => {
            for row in health_metrics_table(&records) {
                println!(
                    "{} entries={} energy={} stress={} happiness={}",
                    row.activity_type,
                    row.entries,
                    row.total_energy,
                    row.total_stress,
                    row.total_happiness
                );
            }
        }
        GraphName::AverageHealthMetricsGraph => {
            for average in average_health_metrics(&records) {
                let bars = average
                    .bars(MetricToggles::default())
                    .into_iter()
                    .map(|(metric, value)| format!("{}={value:.2}", metric.field_name()))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{} {bars}", average.activity_type);
            }
        }
    }
}
