//! The five built-in spreads.

use super::layout::Layout;
use super::position::{PositionDefinition as Pos, PositionRole as Role};
use super::weights::ScoreWeights;
use crate::core::Topic;

pub const ONE_CARD: &str = "one_card";
pub const THREE_CARD_TIMELINE: &str = "three_card_timeline";
pub const SEVEN_STAR: &str = "seven_star";
pub const CELTIC_CROSS: &str = "celtic_cross";
pub const CUP_OF_RELATIONSHIP: &str = "cup_of_relationship";

pub(crate) fn all() -> Vec<Layout> {
    vec![
        one_card(),
        three_card_timeline(),
        seven_star(),
        celtic_cross(),
        cup_of_relationship(),
    ]
}

fn one_card() -> Layout {
    Layout::new(ONE_CARD, "One Card Spread")
        .with_description("A short piece of guidance for today or a specific situation")
        .with_position(Pos::new("Advice", Role::Advice).with_description("Guidance for the current situation"))
        .with_question(Topic::General, "What message do I need today?")
        .with_question(Topic::Love, "How does love look for me today?")
        .with_question(Topic::Career, "What advice do I need for work today?")
        .with_question(Topic::Money, "How do my finances look today?")
}

fn three_card_timeline() -> Layout {
    Layout::new(THREE_CARD_TIMELINE, "Past-Present-Future")
        .with_description("How the situation changes over time")
        .with_position(Pos::new("Past", Role::Past).with_description("Past factors shaping the present"))
        .with_position(Pos::new("Present", Role::Present).with_description("The current situation and energy"))
        .with_position(Pos::new("Future", Role::Future).with_description("The possibility unfolding ahead"))
        .with_questions(
            Topic::General,
            "How am I changing through time?",
            ["What was there in the past?", "What is the present like?", "What waits in the future?"],
        )
        .with_questions(
            Topic::Love,
            "Where has my love life been and where is it going?",
            ["What did past relationships leave behind?", "What is my love life like now?", "What is possible ahead?"],
        )
        .with_questions(
            Topic::Career,
            "How has my career developed and where is it heading?",
            ["What did past work teach me?", "Where do I stand at work now?", "What is the outlook?"],
        )
        .with_questions(
            Topic::Money,
            "How have my finances changed and what comes next?",
            ["What was my financial past?", "What is my money situation now?", "What is the outlook?"],
        )
}

fn seven_star() -> Layout {
    Layout::new(SEVEN_STAR, "Seven Star")
        .with_description("Seven stars lighting up the path of your fate")
        .with_position(Pos::new("Past Influence", Role::Past).with_description("Past elements still acting on the present"))
        .with_position(Pos::new("Present Situation", Role::Present).with_description("Where you stand right now"))
        .with_position(Pos::new("Hidden Influence", Role::HiddenInfluence).with_description("Unseen forces at work"))
        .with_position(Pos::new("Conscious Desire", Role::ConsciousDesire).with_description("What you want"))
        .with_position(Pos::new("Unconscious Desire", Role::UnconsciousDesire).with_description("What you truly need"))
        .with_position(Pos::new("Advice", Role::Advice).with_description("The action to take"))
        .with_position(Pos::new("Final Outcome", Role::Outcome).with_description("The expected result"))
        .with_questions(
            Topic::General,
            "What message do my stars of fate carry?",
            [
                "What influence carries over from the past?",
                "Where do I stand now?",
                "How are unseen forces at work?",
                "What do I want, and what do I actually need?",
                "What outcome should I expect?",
            ],
        )
        .with_question(Topic::Love, "What do the seven stars of love say about my romantic fate?")
        .with_question(Topic::Career, "What do the seven stars show about my working life?")
        .with_question(Topic::Money, "What do the stars foretell about my wealth?")
}

fn celtic_cross() -> Layout {
    Layout::new(CELTIC_CROSS, "Celtic Cross")
        .with_description("The most detailed and comprehensive ten-card spread")
        .with_position(Pos::new("Inner Present", Role::Inner).with_description("Your inner state and feelings"))
        .with_position(Pos::new("Outer Present", Role::Challenge).with_description("The outer environment and influences"))
        .with_position(Pos::new("Foundation", Role::Foundation).with_description("The root and basis of the situation"))
        .with_position(Pos::new("Past", Role::Past).with_description("Events and experiences already behind you"))
        .with_position(Pos::new("Appearance", Role::Appearance).with_description("The face you show outwardly"))
        .with_position(Pos::new("Future", Role::Future).with_description("The possibility unfolding ahead"))
        .with_position(Pos::new("Self-View", Role::SelfView).with_description("How you perceive yourself"))
        .with_position(Pos::new("Other-View", Role::OtherView).with_description("How others perceive you"))
        .with_position(Pos::new("Expected Outcome", Role::Expectation).with_description("The result you expect"))
        .with_position(Pos::new("Actual Outcome", Role::Outcome).with_description("The result most likely to happen"))
        .with_questions(
            Topic::General,
            "Where do I stand now and where am I heading?",
            [
                "What is the nature of my current situation?",
                "Which influences are acting on me?",
                "What changes lie ahead?",
                "What is the best action for me?",
            ],
        )
        .with_questions(
            Topic::Love,
            "How will my love life and connections unfold?",
            [
                "What is my romantic situation now?",
                "How does the other person think of me?",
                "What is the future of this relationship?",
                "What should I do for a better relationship?",
            ],
        )
        .with_questions(
            Topic::Career,
            "How will my work and career develop?",
            [
                "Where do I stand professionally?",
                "Which opportunities and challenges wait for me?",
                "What are my strengths and weaknesses?",
                "What should I focus on to succeed?",
            ],
        )
        .with_questions(
            Topic::Money,
            "How will my finances and fortune develop?",
            [
                "What is my financial state now?",
                "Are there money opportunities ahead?",
                "Which financial risks should I watch?",
                "What helps me become financially stable?",
            ],
        )
}

fn cup_of_relationship() -> Layout {
    Layout::new(CUP_OF_RELATIONSHIP, "Cup of Relationship")
        .with_description("An eleven-card spread exploring the depth of love and relationships")
        .with_position(Pos::new("Me", Role::Me).with_description("My current feelings and state"))
        .with_position(Pos::new("Partner", Role::Partner).with_description("The partner's current feelings and state"))
        .with_position(Pos::new("Relationship Foundation", Role::Foundation).with_description("The basic nature of the relationship"))
        .with_position(Pos::new("Relationship Past", Role::Past).with_description("How the relationship used to be"))
        .with_position(Pos::new("Relationship Present", Role::Present).with_description("How the relationship is now"))
        .with_position(Pos::new("External Situation", Role::External).with_description("Outside factors affecting the relationship"))
        .with_position(Pos::new("My Current Thoughts", Role::MyThoughts).with_description("What I think of the relationship now"))
        .with_position(Pos::new("Partner's Current Thoughts", Role::PartnerThoughts).with_description("What the partner thinks of it now"))
        .with_position(Pos::new("My Future Thoughts", Role::MyFuture).with_description("How I will think of it later"))
        .with_position(Pos::new("Partner's Future Thoughts", Role::PartnerFuture).with_description("How the partner will think of it later"))
        .with_position(Pos::new("Outcome", Role::Outcome).with_description("The final result of the relationship"))
        .with_questions(
            Topic::Love,
            "What is our relationship really like and where is it going?",
            [
                "What state am I in within this relationship?",
                "What state is my partner in?",
                "What is the foundation of our relationship?",
                "How did the relationship flow from past to present?",
                "What are we feeling right now?",
                "What do we think of each other?",
                "How will we change in the future?",
                "Where does this relationship end up?",
            ],
        )
        .with_topics([Topic::Love])
        .with_score_weights(ScoreWeights::relationship())
}
