use serde::{Deserialize, Serialize};

pub const DEFAULT_TONE: &str = "Calm";
pub const DEFAULT_SCENARIO: &str = "general";

/// Snapshot of the tone and scenario a request is built with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub tone: String,
    pub scenario: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            tone: DEFAULT_TONE.to_string(),
            scenario: DEFAULT_SCENARIO.to_string(),
        }
    }
}

/// Current tone/scenario choice for one widget.
///
/// Values are accepted verbatim. The set of valid values is whatever the
/// pills in the surrounding UI carry.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    pub fn new(initial: Selection) -> Self {
        Self { current: initial }
    }

    pub fn set_tone(&mut self, value: impl Into<String>) {
        self.current.tone = value.into();
    }

    pub fn set_scenario(&mut self, value: impl Into<String>) {
        self.current.scenario = value.into();
    }

    /// Immutable copy for building a request
    pub fn get(&self) -> Selection {
        self.current.clone()
    }

    pub fn tone(&self) -> &str {
        &self.current.tone
    }

    pub fn scenario(&self) -> &str {
        &self.current.scenario
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    pub label: String,
    pub value: String,
}

impl Pill {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// A single-select group of pills. At most one pill is active; once any pill
/// has been activated exactly one stays active.
#[derive(Debug, Clone)]
pub struct PillGroup {
    name: String,
    pills: Vec<Pill>,
    active: Option<usize>,
}

impl PillGroup {
    pub fn new(name: &str, pills: Vec<Pill>) -> Self {
        Self {
            name: name.to_string(),
            pills,
            active: None,
        }
    }

    pub fn tones() -> Self {
        Self::new(
            "Tone",
            vec![
                Pill::new("Calm", "Calm"),
                Pill::new("Friendly", "Friendly"),
                Pill::new("Confident", "Confident"),
                Pill::new("Direct", "Direct"),
            ],
        )
    }

    pub fn scenarios() -> Self {
        Self::new(
            "Scenario",
            vec![
                Pill::new("General", "general"),
                Pill::new("Professor", "professor"),
                Pill::new("Work", "work"),
                Pill::new("Friend", "friend"),
                Pill::new("Customer service", "service"),
            ],
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pills(&self) -> &[Pill] {
        &self.pills
    }

    pub fn len(&self) -> usize {
        self.pills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }

    /// Mark the pill at `index` active and return its value.
    pub fn activate(&mut self, index: usize) -> Option<&str> {
        let pill = self.pills.get(index)?;
        self.active = Some(index);
        Some(pill.value.as_str())
    }

    /// Activate the first pill carrying `value`. Returns false when no pill
    /// matches, leaving the group untouched.
    pub fn activate_value(&mut self, value: &str) -> bool {
        match self.pills.iter().position(|p| p.value == value) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active(&self) -> Option<&Pill> {
        self.active.and_then(|i| self.pills.get(i))
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
