//! Phrase tables for locally generated narrative text.

use crate::core::Topic;
use crate::store::Energy;

/// One sentence describing the overall energy of a draw.
#[must_use]
pub const fn energy_summary(energy: Energy, topic: Topic) -> &'static str {
    match (energy, topic) {
        (Energy::Positive, Topic::Love) => {
            "The overall flow is warm and open; your heart has room to move."
        }
        (Energy::Positive, Topic::Career) => {
            "The overall flow favors action; momentum is on your side at work."
        }
        (Energy::Positive, Topic::Money) => {
            "The overall flow is supportive; resources can grow with steady care."
        }
        (Energy::Positive, Topic::Health) => {
            "The overall flow is restorative; your energy is ready to return."
        }
        (Energy::Positive, Topic::General) => {
            "The overall flow is bright and supportive."
        }
        (Energy::Challenging, Topic::Love) => {
            "The overall flow is heavy; old feelings ask to be understood first."
        }
        (Energy::Challenging, Topic::Career) => {
            "The overall flow meets resistance; patience will serve you better than force."
        }
        (Energy::Challenging, Topic::Money) => {
            "The overall flow calls for caution; protect what you already have."
        }
        (Energy::Challenging, Topic::Health) => {
            "The overall flow asks for rest; listen to what your body needs."
        }
        (Energy::Challenging, Topic::General) => {
            "The overall flow is demanding, but resistance is shaping something new."
        }
        (Energy::Neutral, _) => {
            "The overall flow is balanced, with light and shadow in equal measure."
        }
    }
}

/// Closing sentence for a reading.
#[must_use]
pub const fn closing(topic: Topic, energy: Energy) -> &'static str {
    match (topic, energy) {
        (Topic::Love, Energy::Challenging) => {
            "Love grows through honest understanding; be gentle with yourself as you find it."
        }
        (Topic::Love, _) => "Trust what your heart already knows and let love find its pace.",
        (Topic::Career, Energy::Challenging) => {
            "Every obstacle at work is also training; the skills you build now will last."
        }
        (Topic::Career, _) => "Take the next concrete step; the path opens as you walk it.",
        (Topic::Money, Energy::Challenging) => {
            "Careful choices today become security tomorrow."
        }
        (Topic::Money, _) => "Tend your resources patiently and they will tend you.",
        (Topic::Health, Energy::Challenging) => {
            "Healing is not a straight line; small kindnesses to yourself add up."
        }
        (Topic::Health, _) => "Keep the balance between effort and rest, and your vitality will hold.",
        (Topic::General, Energy::Challenging) => {
            "This season will pass, and you will carry its lessons forward."
        }
        (Topic::General, _) => "The cards show the way; the choice to walk it is yours.",
    }
}

/// Line shown when a draw has no cards.
pub const EMPTY_DRAW: &str = "No cards were drawn, so the spread is still waiting to speak.";

/// Line shown when no relationships, synergies or score stand out.
pub const NO_HIGHLIGHTS: &str =
    "No strong links stand out between the cards; each one speaks on its own terms.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_combination_has_text() {
        for topic in Topic::ALL {
            for energy in [Energy::Positive, Energy::Neutral, Energy::Challenging] {
                assert!(!energy_summary(energy, topic).is_empty());
                assert!(!closing(topic, energy).is_empty());
            }
        }
    }
}
