//! Shared helpers for benchmarks

use strata::config::LayoutConfig;
use strata::coordinator::Coordinator;
use strata::env::Environment;
use strata::model::AppModel;

/// Create an AppModel at the given window width
#[allow(dead_code)]
pub fn make_model(width: u32) -> AppModel {
    AppModel::new(LayoutConfig::default(), Some((width, 900)))
}

/// Attach a coordinator to a fresh desktop-sized environment
#[allow(dead_code)]
pub fn make_coordinator() -> (Environment, Coordinator) {
    let env = Environment::with_window(1440, 900);
    let coordinator = Coordinator::attach(&env, LayoutConfig::default());
    (env, coordinator)
}
