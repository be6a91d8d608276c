/// One card in the scenario picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCard {
    pub id: String,
    pub title: String,
    pub blurb: String,
}

impl ScenarioCard {
    pub fn new(id: &str, title: &str, blurb: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            blurb: blurb.to_string(),
        }
    }
}

/// Visual slot of a card, derived only from the carousel index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPosition {
    Active,
    Previous,
    Next,
    Hidden,
}

/// Picker carousel. Invariant: `0 <= current < cards.len()`.
#[derive(Debug, Clone)]
pub struct Carousel {
    cards: Vec<ScenarioCard>,
    current: usize,
}

impl Carousel {
    /// Returns None for an empty deck.
    pub fn new(cards: Vec<ScenarioCard>) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self { cards, current: 0 })
    }

    pub fn default_cards() -> Vec<ScenarioCard> {
        vec![
            ScenarioCard::new(
                "professor",
                "Talking to a professor",
                "Extensions, office hours, and feedback on your work.",
            ),
            ScenarioCard::new(
                "work",
                "At work",
                "Updates for your manager, saying no to extra tasks.",
            ),
            ScenarioCard::new(
                "friend",
                "With a friend",
                "Cancelling plans, checking in, awkward apologies.",
            ),
            ScenarioCard::new(
                "service",
                "Customer service",
                "Refunds, order problems, and account issues.",
            ),
            ScenarioCard::new(
                "general",
                "Anything else",
                "Everyday messages that need the right words.",
            ),
        ]
    }

    pub fn cards(&self) -> &[ScenarioCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_card(&self) -> &ScenarioCard {
        &self.cards[self.current]
    }

    pub fn can_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_next(&self) -> bool {
        self.current + 1 < self.cards.len()
    }

    /// Move one card back. Returns false at the first card.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Move one card forward. Returns false at the last card.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.cards.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn position(&self, index: usize) -> CardPosition {
        if index == self.current {
            CardPosition::Active
        } else if index + 1 == self.current {
            CardPosition::Previous
        } else if index == self.current + 1 {
            CardPosition::Next
        } else {
            CardPosition::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel {
        Carousel::new(Carousel::default_cards()).unwrap()
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        assert!(Carousel::new(Vec::new()).is_none());
    }

    #[test]
    fn test_previous_disabled_at_start() {
        let mut c = carousel();
        assert!(!c.can_previous());
        assert!(!c.previous());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_next_disabled_at_end() {
        let mut c = carousel();
        let last = c.len() - 1;
        for _ in 0..c.len() * 2 {
            c.next();
        }
        assert_eq!(c.current(), last);
        assert!(!c.can_next());
        assert!(c.can_previous());
    }

    #[test]
    fn test_single_card_disables_both() {
        let c = Carousel::new(vec![ScenarioCard::new("general", "General", "")]).unwrap();
        assert!(!c.can_previous());
        assert!(!c.can_next());
    }

    #[test]
    fn test_positions_follow_current() {
        let mut c = carousel();
        c.go_to(2);
        assert_eq!(c.position(1), CardPosition::Previous);
        assert_eq!(c.position(2), CardPosition::Active);
        assert_eq!(c.position(3), CardPosition::Next);
        assert_eq!(c.position(0), CardPosition::Hidden);
        assert_eq!(c.position(4), CardPosition::Hidden);
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut c = carousel();
        assert!(!c.go_to(c.len()));
        assert_eq!(c.current(), 0);
    }
}
