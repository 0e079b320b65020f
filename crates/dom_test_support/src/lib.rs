//! Test-only support for the widget crates: terse DOM builders and the
//! toml scenario-corpus loader used by the interaction tests.

pub mod build;
pub mod scenario;

pub use build::{attr, doc, elem, input, text};
pub use scenario::{Scenario, ScenarioEvent, load_scenarios, parse_event};
