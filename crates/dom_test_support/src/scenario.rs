//! Declarative interaction-scenario corpus.
//!
//! Scenarios live in a toml manifest and drive table-driven integration
//! tests: each entry describes one rating container (its configuration
//! attributes), a pointer event sequence, and the expected end state.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub scenario: Vec<Scenario>,
}

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// `data-value` attribute on the container; omitted = attribute absent.
    pub initial: Option<String>,
    /// `data-name` attribute on the container; omitted = attribute absent.
    pub field: Option<String>,
    /// Event sequence, e.g. `["enter:5", "leave:5", "click:2"]`.
    #[serde(default)]
    pub events: Vec<String>,
    /// Expected confirmed value after the sequence.
    pub expect_value: u8,
    /// Ordinals expected to carry the active class after the sequence.
    #[serde(default)]
    pub expect_active: Vec<u8>,
}

/// One parsed step of a scenario's event sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioEvent {
    /// Pointer entered the star with this ordinal.
    Enter(u8),
    /// Pointer left the star with this ordinal.
    Leave(u8),
    /// Click on the star with this ordinal.
    Click(u8),
}

/// Parse an event step of the form `kind:ordinal`.
pub fn parse_event(step: &str) -> Result<ScenarioEvent, String> {
    let (kind, ordinal) = step
        .split_once(':')
        .ok_or_else(|| format!("malformed event step {step:?} (expected kind:ordinal)"))?;
    let ordinal: u8 = ordinal
        .parse()
        .map_err(|_| format!("malformed ordinal in event step {step:?}"))?;
    match kind {
        "enter" => Ok(ScenarioEvent::Enter(ordinal)),
        "leave" => Ok(ScenarioEvent::Leave(ordinal)),
        "click" => Ok(ScenarioEvent::Click(ordinal)),
        _ => Err(format!("unknown event kind in step {step:?}")),
    }
}

pub fn load_scenarios(toml_text: &str) -> Result<Vec<Scenario>, toml::de::Error> {
    let file: ScenarioFile = toml::from_str(toml_text)?;
    Ok(file.scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_event_steps() {
        assert_eq!(parse_event("enter:5"), Ok(ScenarioEvent::Enter(5)));
        assert_eq!(parse_event("leave:5"), Ok(ScenarioEvent::Leave(5)));
        assert_eq!(parse_event("click:2"), Ok(ScenarioEvent::Click(2)));
        assert!(parse_event("hover").is_err());
        assert!(parse_event("click:x").is_err());
    }

    #[test]
    fn loads_manifest() {
        let text = r#"
            [[scenario]]
            name = "click confirms"
            initial = "3"
            field = "star_rating"
            events = ["click:2"]
            expect_value = 2
            expect_active = [1, 2]
        "#;
        let scenarios = load_scenarios(text).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].name, "click confirms");
        assert_eq!(scenarios[0].initial.as_deref(), Some("3"));
        assert_eq!(scenarios[0].expect_value, 2);
    }
}
