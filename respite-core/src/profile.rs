use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// History entries kept per profile. Oldest entries are dropped first once
/// the cap is reached.
pub const HISTORY_LIMIT: usize = 20;

/// Life-situation tag chosen at onboarding. The wire strings double as the
/// display strings and flow verbatim into generation prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "Busy Professional")]
    Professional,
    #[serde(rename = "Active Retiree")]
    Retiree,
    #[serde(rename = "Student")]
    Student,
    #[serde(rename = "Parent/Caregiver")]
    Caregiver,
    #[serde(rename = "Neurodivergent")]
    Neurodivergent,
    #[serde(rename = "Managing Energy")]
    ManagingEnergy,
    #[serde(rename = "In Transition")]
    InTransition,
}

impl Persona {
    pub const ALL: [Persona; 7] = [
        Persona::Professional,
        Persona::Retiree,
        Persona::Student,
        Persona::Caregiver,
        Persona::Neurodivergent,
        Persona::ManagingEnergy,
        Persona::InTransition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Professional => "Busy Professional",
            Persona::Retiree => "Active Retiree",
            Persona::Student => "Student",
            Persona::Caregiver => "Parent/Caregiver",
            Persona::Neurodivergent => "Neurodivergent",
            Persona::ManagingEnergy => "Managing Energy",
            Persona::InTransition => "In Transition",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyLevel {
    #[serde(rename = "Low - I need a break")]
    Low,
    #[serde(rename = "Medium - Ready for light focus")]
    Medium,
    #[serde(rename = "High - Ready for a challenge")]
    High,
}

impl EnergyLevel {
    pub const ALL: [EnergyLevel; 3] = [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "Low - I need a break",
            EnergyLevel::Medium => "Medium - Ready for light focus",
            EnergyLevel::High => "High - Ready for a challenge",
        }
    }
}

impl std::fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

/// Ephemeral check-in context: discarded once activities are generated or
/// the flow aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub minutes: u32,
    pub energy: EnergyLevel,
}

impl SessionContext {
    pub const MIN_MINUTES: u32 = 5;
    pub const MAX_MINUTES: u32 = 60;

    /// Clamps minutes into the UI-bounded range.
    pub fn new(minutes: u32, energy: EnergyLevel) -> Self {
        Self {
            minutes: minutes.clamp(Self::MIN_MINUTES, Self::MAX_MINUTES),
            energy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    TooEasy,
    JustRight,
    TooHard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::TooEasy => "too_easy",
            Difficulty::JustRight => "just_right",
            Difficulty::TooHard => "too_hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enjoyment {
    Disliked,
    Neutral,
    Liked,
}

impl Enjoyment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Enjoyment::Disliked => "disliked",
            Enjoyment::Neutral => "neutral",
            Enjoyment::Liked => "liked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub difficulty: Difficulty,
    pub enjoyment: Enjoyment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Immutable historical record. The title is duplicated at write time so
/// history stays meaningful even if the activity catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub activity_id: String,
    pub activity_title: String,
    pub timestamp: DateTime<Utc>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

/// Identity and preference state for one user. Created at onboarding,
/// mutated only by appending history, destroyed on explicit reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub persona: Persona,
    pub goals: Vec<String>,
    #[serde(default)]
    pub history: Vec<ActivityLog>,
    #[serde(default)]
    pub language: Language,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        persona: Persona,
        goals: Vec<String>,
        language: Language,
    ) -> Self {
        Self { name: name.into(), persona, goals, history: Vec::new(), language }
    }

    /// Appends a log entry, dropping the oldest entries beyond
    /// [`HISTORY_LIMIT`]. Insertion order is chronological, oldest first.
    pub fn record(&mut self, log: ActivityLog) {
        self.history.push(log);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }

    /// The most recent `n` entries, oldest of those first.
    pub fn recent_history(&self, n: usize) -> &[ActivityLog] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }
}
