//! Primary recommendation selection and tone
//!
//! The service sends several messages per day, each prefixed by its topic.
//! One is picked for default display by topic priority, not by position.

use serde::Serialize;

/// Message topics in display priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Topic {
    Fasting,
    Water,
    Food,
}

impl Topic {
    pub const PRIORITY: [Topic; 3] = [Topic::Fasting, Topic::Water, Topic::Food];

    /// Prefix the service uses for this topic
    pub fn prefix(&self) -> &'static str {
        match self {
            Topic::Fasting => "Ayuno",
            Topic::Water => "Agua",
            Topic::Food => "Comida",
        }
    }

    /// Whether a message belongs to this topic (`"Agua: ..."` or `"Agua ..."`)
    pub fn matches(&self, message: &str) -> bool {
        message
            .strip_prefix(self.prefix())
            .is_some_and(|rest| rest.starts_with(": ") || rest.starts_with(' '))
    }
}

/// Highest-priority message, falling back to the first one
pub fn pick_primary_message(messages: &[String]) -> Option<&str> {
    Topic::PRIORITY
        .iter()
        .find_map(|topic| messages.iter().find(|m| topic.matches(m)))
        .or_else(|| messages.first())
        .map(String::as_str)
}

/// Visual tone of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Goal met
    Success,
    /// Short of or close to a goal
    Warn,
    Info,
}

const SUCCESS_MARKERS: [&str; 1] = ["cumplido"];
const WARN_MARKERS: [&str; 3] = ["te falta", "faltan", "cerca"];

/// Classify a message; case-sensitive, success wins over warn
pub fn tone_from_message(message: &str) -> Tone {
    if SUCCESS_MARKERS.iter().any(|m| message.contains(m)) {
        Tone::Success
    } else if WARN_MARKERS.iter().any(|m| message.contains(m)) {
        Tone::Warn
    } else {
        Tone::Info
    }
}

/// Recommendation banner display state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerState {
    messages: Vec<String>,
    expanded: bool,
}

impl BannerState {
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            messages,
            expanded: false,
        }
    }

    pub fn primary(&self) -> Option<&str> {
        pick_primary_message(&self.messages)
    }

    pub fn tone(&self) -> Option<Tone> {
        self.primary().map(tone_from_message)
    }

    /// The "show all" toggle is only offered when there is more than one message
    pub fn can_expand(&self) -> bool {
        self.messages.len() > 1
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        if self.can_expand() {
            self.expanded = !self.expanded;
        }
    }

    /// Every message in arrival order when expanded, nothing extra otherwise
    pub fn expanded_messages(&self) -> &[String] {
        if self.expanded {
            &self.messages
        } else {
            &[]
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Ocultar"
        } else {
            "Ver más"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn msgs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_water_outranks_food_regardless_of_order() {
        let forward = msgs(&["Comida: bien", "Agua: te falta 500ml"]);
        let backward = msgs(&["Agua: te falta 500ml", "Comida: bien"]);
        assert_eq!(pick_primary_message(&forward), Some("Agua: te falta 500ml"));
        assert_eq!(pick_primary_message(&backward), Some("Agua: te falta 500ml"));
    }

    #[test]
    fn test_fasting_outranks_everything() {
        let messages = msgs(&["Comida: x", "Agua: y", "Ayuno: llevas 10 h"]);
        assert_eq!(pick_primary_message(&messages), Some("Ayuno: llevas 10 h"));
    }

    #[test]
    fn test_first_match_within_topic() {
        let messages = msgs(&["Agua: primero", "Agua: segundo"]);
        assert_eq!(pick_primary_message(&messages), Some("Agua: primero"));
    }

    #[test]
    fn test_space_separated_prefix_matches() {
        let messages = msgs(&["Otro consejo", "Agua pendiente"]);
        assert_eq!(pick_primary_message(&messages), Some("Agua pendiente"));
    }

    #[test]
    fn test_prefix_requires_separator() {
        let messages = msgs(&["Aguacate: rico", "Nota"]);
        assert!(!Topic::Water.matches("Aguacate: rico"));
        assert_eq!(pick_primary_message(&messages), Some("Aguacate: rico"));
    }

    #[test]
    fn test_fallback_and_empty() {
        assert_eq!(pick_primary_message(&msgs(&["Hola", "Adiós"])), Some("Hola"));
        assert_eq!(pick_primary_message(&[]), None);
    }

    #[rstest]
    #[case("Ayuno: objetivo cumplido", Tone::Success)]
    #[case("Agua: te falta 300ml", Tone::Warn)]
    #[case("Agua: te faltan 800 ml para el objetivo", Tone::Warn)]
    #[case("Ayuno: estás cerca del final", Tone::Warn)]
    #[case("Comida: registrada", Tone::Info)]
    #[case("Agua: cumplido, aunque te falta poco para el extra", Tone::Success)]
    #[case("Agua: Te Falta poco", Tone::Info)]
    #[case("", Tone::Info)]
    fn test_tone(#[case] message: &str, #[case] expected: Tone) {
        assert_eq!(tone_from_message(message), expected);
    }

    #[test]
    fn test_banner_toggle() {
        let mut banner = BannerState::new(msgs(&["Comida: a", "Agua: objetivo cumplido"]));
        assert_eq!(banner.primary(), Some("Agua: objetivo cumplido"));
        assert_eq!(banner.tone(), Some(Tone::Success));
        assert!(banner.expanded_messages().is_empty());
        assert_eq!(banner.toggle_label(), "Ver más");

        banner.toggle();
        assert!(banner.is_expanded());
        assert_eq!(banner.expanded_messages(), msgs(&["Comida: a", "Agua: objetivo cumplido"]).as_slice());
        assert_eq!(banner.toggle_label(), "Ocultar");
    }

    #[test]
    fn test_single_message_cannot_expand() {
        let mut banner = BannerState::new(msgs(&["Agua: bien"]));
        banner.toggle();
        assert!(!banner.is_expanded());
        assert!(BannerState::default().primary().is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_primary_is_member(messages in proptest::collection::vec("(Ayuno|Agua|Comida|Otro)(: | )[a-z]{0,8}", 0..8)) {
            match pick_primary_message(&messages) {
                None => prop_assert!(messages.is_empty()),
                Some(primary) => prop_assert!(messages.iter().any(|m| m == primary)),
            }
        }

        #[test]
        fn prop_selection_ignores_order(messages in proptest::collection::vec("(Ayuno|Agua|Comida): [a-z]{1,4}", 1..6)) {
            let primary = pick_primary_message(&messages).map(str::to_string);
            let mut reversed = messages.clone();
            reversed.reverse();
            let topic_of = |m: &str| Topic::PRIORITY.iter().position(|t| t.matches(m));
            let a = primary.as_deref().and_then(topic_of);
            let b = pick_primary_message(&reversed).and_then(topic_of);
            prop_assert_eq!(a, b);
        }
    }
}
