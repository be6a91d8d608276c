//! Quick-starter templates
//!
//! Canned opening drafts keyed on starter category, scenario and tone. Pure
//! string building: no network and no side effects. The widget drops the
//! result into the draft field.

use serde::{Deserialize, Serialize};

use crate::selection::Selection;

/// Wording family for starters and chip labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhrasingProfile {
    #[default]
    Standard,
    Casual,
}

impl PhrasingProfile {
    /// Heading shown above a group of draft option chips
    pub fn options_label(&self) -> &'static str {
        match self {
            PhrasingProfile::Standard => "Suggested replies",
            PhrasingProfile::Casual => "Try one of these",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarterKind {
    FollowUp,
    Decline,
    AskHelp,
    Thank,
}

impl StarterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StarterKind::FollowUp => "follow_up",
            StarterKind::Decline => "decline",
            StarterKind::AskHelp => "ask_help",
            StarterKind::Thank => "thank",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "follow_up" => Some(StarterKind::FollowUp),
            "decline" => Some(StarterKind::Decline),
            "ask_help" => Some(StarterKind::AskHelp),
            "thank" => Some(StarterKind::Thank),
            _ => None,
        }
    }

    pub fn all() -> Vec<StarterKind> {
        vec![
            StarterKind::FollowUp,
            StarterKind::Decline,
            StarterKind::AskHelp,
            StarterKind::Thank,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StarterKind::FollowUp => "Follow up",
            StarterKind::Decline => "Say no",
            StarterKind::AskHelp => "Ask for help",
            StarterKind::Thank => "Say thanks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScenarioKind {
    Professor,
    Work,
    Friend,
    Service,
    Generic,
}

impl ScenarioKind {
    fn classify(scenario: &str) -> Self {
        match scenario.to_lowercase().as_str() {
            "professor" => ScenarioKind::Professor,
            "work" => ScenarioKind::Work,
            "friend" => ScenarioKind::Friend,
            "service" => ScenarioKind::Service,
            _ => ScenarioKind::Generic,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Templater {
    profile: PhrasingProfile,
}

impl Templater {
    pub fn new(profile: PhrasingProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> PhrasingProfile {
        self.profile
    }

    /// Build the starter draft. Unknown starter categories get a generic
    /// opening rather than an error.
    pub fn render(&self, starter: &str, selection: &Selection) -> String {
        let scenario = ScenarioKind::classify(&selection.scenario);
        let body = match StarterKind::from_str(starter) {
            Some(kind) => self.body(kind, scenario),
            None => match self.profile {
                PhrasingProfile::Standard => "I wanted to reach out about something.",
                PhrasingProfile::Casual => "quick question for you.",
            },
        };

        let opener = self.opener(&selection.tone);
        let addressee = match scenario {
            ScenarioKind::Professor => Some("Professor"),
            _ => None,
        };

        let mut text = match (opener, addressee) {
            (Some(opener), Some(name)) => format!("{} {}, {}", opener, name, body),
            (Some(opener), None) => format!("{}, {}", opener, body),
            (None, Some(name)) => format!("{}, {}", name, body),
            (None, None) => capitalize(body),
        };

        if let Some(closer) = self.closer(&selection.tone) {
            text.push(' ');
            text.push_str(closer);
        }

        text
    }

    fn opener(&self, tone: &str) -> Option<&'static str> {
        match (self.profile, tone.to_lowercase().as_str()) {
            (_, "direct") => None,
            (PhrasingProfile::Standard, "friendly") => Some("Hey"),
            (PhrasingProfile::Standard, "confident") => Some("Hello"),
            (PhrasingProfile::Standard, _) => Some("Hi"),
            (PhrasingProfile::Casual, "friendly") => Some("Hiya"),
            (PhrasingProfile::Casual, "confident") => Some("Hi"),
            (PhrasingProfile::Casual, _) => Some("Hey"),
        }
    }

    fn closer(&self, tone: &str) -> Option<&'static str> {
        match (self.profile, tone.to_lowercase().as_str()) {
            (PhrasingProfile::Standard, "calm") => Some("Thanks for your time."),
            (PhrasingProfile::Standard, "friendly") => Some("Thanks so much!"),
            (PhrasingProfile::Standard, "confident") => Some("I look forward to hearing from you."),
            (PhrasingProfile::Standard, "direct") => Some("Thanks."),
            (PhrasingProfile::Standard, _) => Some("Thank you."),
            (PhrasingProfile::Casual, "calm") => Some("No rush."),
            (PhrasingProfile::Casual, "friendly") => Some("Thanks!!"),
            (PhrasingProfile::Casual, "confident") => Some("Talk soon."),
            (PhrasingProfile::Casual, "direct") => None,
            (PhrasingProfile::Casual, _) => Some("Thanks!"),
        }
    }

    fn body(&self, kind: StarterKind, scenario: ScenarioKind) -> &'static str {
        use ScenarioKind::*;
        use StarterKind::*;

        match self.profile {
            PhrasingProfile::Standard => match (kind, scenario) {
                (FollowUp, Professor) => "I wanted to follow up on my email about the assignment.",
                (FollowUp, Work) => "I wanted to follow up on the update I sent earlier.",
                (FollowUp, Friend) => "just checking in about our plans.",
                (FollowUp, Service) => "I'm following up on my earlier request about my order.",
                (FollowUp, Generic) => "I wanted to follow up on my last message.",
                (Decline, Professor) => "unfortunately I won't be able to make office hours this week.",
                (Decline, Work) => "I won't be able to take this on right now.",
                (Decline, Friend) => "I can't make it this time.",
                (Decline, Service) => "I'd like to cancel the request I made.",
                (Decline, Generic) => "I'm not able to do this right now.",
                (AskHelp, Professor) => "could you help me understand the feedback on my last submission?",
                (AskHelp, Work) => "could you help me prioritise my current tasks?",
                (AskHelp, Friend) => "could you give me a hand with something this week?",
                (AskHelp, Service) => "could you help me with an issue on my account?",
                (AskHelp, Generic) => "could you help me with something?",
                (Thank, Professor) => "thank you for your guidance on the project.",
                (Thank, Work) => "thank you for your support on this.",
                (Thank, Friend) => "thanks for being there the other day.",
                (Thank, Service) => "thank you for sorting out my issue.",
                (Thank, Generic) => "thank you for your help.",
            },
            PhrasingProfile::Casual => match (kind, scenario) {
                (FollowUp, Professor) => "just circling back on my email about the assignment.",
                (FollowUp, Work) => "circling back on the update from earlier.",
                (FollowUp, Friend) => "are we still on?",
                (FollowUp, Service) => "any news on my order?",
                (FollowUp, Generic) => "just circling back on this.",
                (Decline, Professor) => "I can't make office hours this week, sorry.",
                (Decline, Work) => "I can't pick this up right now.",
                (Decline, Friend) => "gonna have to skip this one.",
                (Decline, Service) => "please cancel my request.",
                (Decline, Generic) => "I can't do this one.",
                (AskHelp, Professor) => "could I get some help with the feedback on my submission?",
                (AskHelp, Work) => "can you help me sort out what to do first?",
                (AskHelp, Friend) => "can you help me out with something?",
                (AskHelp, Service) => "can you help with my account?",
                (AskHelp, Generic) => "can you help me with something?",
                (Thank, Professor) => "thanks for the help on the project.",
                (Thank, Work) => "thanks for the backup on this.",
                (Thank, Friend) => "thanks for the other day.",
                (Thank, Service) => "thanks for fixing that.",
                (Thank, Generic) => "thanks for the help.",
            },
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(tone: &str, scenario: &str) -> Selection {
        Selection {
            tone: tone.to_string(),
            scenario: scenario.to_string(),
        }
    }

    #[test]
    fn test_professor_follow_up_calm() {
        let templater = Templater::default();
        let text = templater.render("follow_up", &selection("Calm", "professor"));
        assert_eq!(
            text,
            "Hi Professor, I wanted to follow up on my email about the assignment. Thanks for your time."
        );
    }

    #[test]
    fn test_direct_tone_drops_opener() {
        let templater = Templater::default();
        let text = templater.render("decline", &selection("Direct", "friend"));
        assert_eq!(text, "I can't make it this time. Thanks.");
    }

    #[test]
    fn test_unknown_scenario_uses_generic_phrasing() {
        let templater = Templater::default();
        let text = templater.render("ask_help", &selection("Friendly", "landlord"));
        assert_eq!(text, "Hey, could you help me with something? Thanks so much!");
    }

    #[test]
    fn test_unknown_starter_falls_back() {
        let templater = Templater::default();
        let text = templater.render("compliment", &selection("Calm", "general"));
        assert_eq!(text, "Hi, I wanted to reach out about something. Thanks for your time.");
    }

    #[test]
    fn test_casual_profile_changes_wording() {
        let standard = Templater::new(PhrasingProfile::Standard);
        let casual = Templater::new(PhrasingProfile::Casual);
        let sel = selection("Calm", "work");
        assert_ne!(standard.render("thank", &sel), casual.render("thank", &sel));
        assert_eq!(casual.render("thank", &sel), "Hey, thanks for the backup on this. No rush.");
        assert_ne!(
            PhrasingProfile::Standard.options_label(),
            PhrasingProfile::Casual.options_label()
        );
    }

    #[test]
    fn test_every_starter_renders_for_every_scenario() {
        let templater = Templater::default();
        for kind in StarterKind::all() {
            for scenario in ["general", "professor", "work", "friend", "service"] {
                let text = templater.render(kind.as_str(), &selection("Confident", scenario));
                assert!(text.ends_with("I look forward to hearing from you."));
            }
        }
    }

    #[test]
    fn test_direct_professor_keeps_addressee() {
        let templater = Templater::new(PhrasingProfile::Casual);
        let text = templater.render("follow_up", &selection("Direct", "professor"));
        assert_eq!(text, "Professor, just circling back on my email about the assignment.");
    }
}
