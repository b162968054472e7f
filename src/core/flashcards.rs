//! Flip-card flashcards

/// A two-sided card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flashcard {
    pub front: &'static str,
    pub back: &'static str,
}

/// Class applied while a card shows its back
pub const FLIPPED_CLASS: &str = "flipped";

/// Flip state of a single card. Cards never share state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipState {
    flipped: bool,
}

impl FlipState {
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn toggle(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn class_attr(&self) -> &'static str {
        if self.flipped {
            "flashcard flipped"
        } else {
            "flashcard"
        }
    }
}

pub static FLASHCARDS: [Flashcard; 6] = [
    Flashcard {
        front: "Flood warning issued",
        back: "Move to higher ground and never walk or drive through flood water.",
    },
    Flashcard {
        front: "Ground starts shaking",
        back: "Drop, take cover under sturdy furniture and hold on until it stops.",
    },
    Flashcard {
        front: "Cyclone approaching",
        back: "Remember SAFE: Stay indoors, stay Alert, Follow instructions, keep Emergency kit ready.",
    },
    Flashcard {
        front: "Drought conditions",
        back: "Store drinking water, cut non-essential use and watch for heat stroke.",
    },
    Flashcard {
        front: "Emergency kit",
        back: "Water, food for 3 days, torch, batteries, first-aid box, documents and medicines.",
    },
    Flashcard {
        front: "Someone is bleeding",
        back: "Apply firm, direct pressure with a clean cloth and raise the wound if possible.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_back_and_forth() {
        let mut state = FlipState::default();
        assert_eq!(state.class_attr(), "flashcard");
        state.toggle();
        assert!(state.is_flipped());
        assert_eq!(state.class_attr(), "flashcard flipped");
        state.toggle();
        assert!(!state.is_flipped());
    }

    #[test]
    fn test_cards_are_independent() {
        let mut cards = [FlipState::default(); 3];
        cards[1].toggle();
        assert!(!cards[0].is_flipped());
        assert!(cards[1].is_flipped());
        assert!(!cards[2].is_flipped());
    }
}
