//! The standard 78-card deck.

use super::attributes::Element::{Air, Earth, Fire, Water};
use super::attributes::{Element, Suit};
use super::definition::{Card, CardId};
use crate::core::Orientation;

type KeywordRow = [&'static str; 3];

struct MajorRow {
    name: &'static str,
    localized: &'static str,
    element: Element,
    upright: KeywordRow,
    reversed: KeywordRow,
}

const fn major(
    name: &'static str,
    localized: &'static str,
    element: Element,
    upright: KeywordRow,
    reversed: KeywordRow,
) -> MajorRow {
    MajorRow {
        name,
        localized,
        element,
        upright,
        reversed,
    }
}

const MAJORS: [MajorRow; 22] = [
    major("The Fool", "바보", Air,
        ["new beginnings", "adventure", "innocence"],
        ["recklessness", "carelessness", "lost direction"]),
    major("The Magician", "마법사", Air,
        ["willpower", "creativity", "skill"],
        ["manipulation", "wasted talent", "lack of planning"]),
    major("The High Priestess", "여사제", Water,
        ["intuition", "mystery", "the inner voice"],
        ["hidden agendas", "confusion", "surface knowledge"]),
    major("The Empress", "여황제", Earth,
        ["abundance", "nurturing", "fertility"],
        ["dependence", "creative block", "neglect"]),
    major("The Emperor", "황제", Fire,
        ["authority", "structure", "stability"],
        ["rigidity", "domination", "lack of discipline"]),
    major("The Hierophant", "교황", Earth,
        ["tradition", "guidance", "belief"],
        ["rebellion", "dogma", "unconventional paths"]),
    major("The Lovers", "연인", Air,
        ["love", "harmony", "meaningful choice"],
        ["imbalance", "misalignment", "indecision"]),
    major("The Chariot", "전차", Water,
        ["determination", "victory", "momentum"],
        ["loss of control", "aggression", "scattered effort"]),
    major("Strength", "힘", Fire,
        ["courage", "patience", "gentle power"],
        ["self-doubt", "weakness", "raw emotion"]),
    major("The Hermit", "은둔자", Earth,
        ["introspection", "solitude", "inner wisdom"],
        ["isolation", "withdrawal", "loneliness"]),
    major("Wheel of Fortune", "운명의 수레바퀴", Fire,
        ["change", "cycles", "turning fortune"],
        ["bad luck", "resistance to change", "broken cycles"]),
    major("Justice", "정의", Air,
        ["fairness", "truth", "cause and effect"],
        ["injustice", "dishonesty", "avoided accountability"]),
    major("The Hanged Man", "매달린 사람", Water,
        ["surrender", "a new perspective", "pause"],
        ["stalling", "needless sacrifice", "indecision"]),
    major("Death", "죽음", Water,
        ["endings", "transformation", "transition"],
        ["resistance to change", "stagnation", "fear of endings"]),
    major("Temperance", "절제", Fire,
        ["balance", "moderation", "patience"],
        ["excess", "imbalance", "impatience"]),
    major("The Devil", "악마", Earth,
        ["attachment", "temptation", "shadow self"],
        ["release", "breaking free", "reclaimed power"]),
    major("The Tower", "탑", Fire,
        ["sudden upheaval", "revelation", "awakening"],
        ["averted disaster", "fear of change", "delayed collapse"]),
    major("The Star", "별", Air,
        ["hope", "renewal", "inspiration"],
        ["despair", "lost faith", "discouragement"]),
    major("The Moon", "달", Water,
        ["illusion", "the subconscious", "uncertainty"],
        ["released fear", "clarity returning", "repressed emotion"]),
    major("The Sun", "태양", Fire,
        ["joy", "success", "vitality"],
        ["temporary gloom", "overconfidence", "delayed success"]),
    major("Judgement", "심판", Fire,
        ["awakening", "renewal", "an inner calling"],
        ["self-doubt", "harsh self-judgement", "ignored calling"]),
    major("The World", "세계", Earth,
        ["completion", "fulfillment", "integration"],
        ["unfinished business", "lack of closure", "delays"]),
];

struct MinorRow {
    upright: KeywordRow,
    reversed: KeywordRow,
}

const fn minor(upright: KeywordRow, reversed: KeywordRow) -> MinorRow {
    MinorRow { upright, reversed }
}

const WANDS: [MinorRow; 14] = [
    minor(["inspiration", "new energy", "potential"], ["delays", "lack of motivation", "false starts"]),
    minor(["planning", "future vision", "decisions"], ["fear of the unknown", "poor planning", "hesitation"]),
    minor(["expansion", "foresight", "progress"], ["obstacles", "setbacks", "frustration"]),
    minor(["celebration", "homecoming", "stability"], ["instability", "transition", "lack of support"]),
    minor(["competition", "conflict", "rivalry"], ["avoided conflict", "inner tension", "truce"]),
    minor(["recognition", "victory", "confidence"], ["ego", "fall from grace", "lack of recognition"]),
    minor(["perseverance", "defense", "conviction"], ["exhaustion", "giving up", "overwhelm"]),
    minor(["swift action", "movement", "news"], ["delays", "frustration", "misdirected energy"]),
    minor(["resilience", "persistence", "boundaries"], ["paranoia", "fatigue", "defensiveness"]),
    minor(["burden", "responsibility", "hard work"], ["release", "delegation", "collapse under pressure"]),
    minor(["enthusiasm", "exploration", "free spirit"], ["distraction", "impatience", "lack of direction"]),
    minor(["passion", "adventure", "boldness"], ["haste", "recklessness", "frustration"]),
    minor(["confidence", "warmth", "determination"], ["jealousy", "insecurity", "demanding nature"]),
    minor(["vision", "leadership", "entrepreneurship"], ["impulsiveness", "overbearing will", "unmet goals"]),
];

const CUPS: [MinorRow; 14] = [
    minor(["new feelings", "love", "compassion"], ["emotional loss", "blocked feelings", "emptiness"]),
    minor(["partnership", "unity", "mutual attraction"], ["imbalance", "broken bond", "tension"]),
    minor(["celebration", "friendship", "community"], ["overindulgence", "gossip", "isolation"]),
    minor(["contemplation", "apathy", "reevaluation"], ["new awareness", "acceptance", "withdrawal"]),
    minor(["loss", "regret", "grief"], ["acceptance", "moving on", "forgiveness"]),
    minor(["nostalgia", "childhood memories", "innocence"], ["living in the past", "naivety", "unrealistic memories"]),
    minor(["choices", "imagination", "wishful thinking"], ["clarity", "focused choice", "disillusion"]),
    minor(["walking away", "seeking depth", "disappointment"], ["fear of change", "aimless drifting", "stagnation"]),
    minor(["contentment", "satisfaction", "wishes fulfilled"], ["smugness", "materialism", "dissatisfaction"]),
    minor(["emotional fulfillment", "family harmony", "happiness"], ["broken family", "disharmony", "misaligned values"]),
    minor(["curiosity", "intuitive messages", "sensitivity"], ["emotional immaturity", "insecurity", "blocked creativity"]),
    minor(["romance", "charm", "following the heart"], ["moodiness", "unrealistic ideals", "jealousy"]),
    minor(["compassion", "emotional security", "intuition"], ["codependency", "martyrdom", "insecurity"]),
    minor(["emotional balance", "diplomacy", "generosity"], ["manipulation", "moodiness", "coldness"]),
];

const SWORDS: [MinorRow; 14] = [
    minor(["clarity", "breakthrough", "truth"], ["confusion", "misinformation", "chaos"]),
    minor(["difficult choices", "stalemate", "avoidance"], ["indecision", "information overload", "lesser evil"]),
    minor(["heartbreak", "sorrow", "grief"], ["recovery", "forgiveness", "releasing pain"]),
    minor(["rest", "recovery", "contemplation"], ["restlessness", "burnout", "stagnation"]),
    minor(["conflict", "defeat", "winning at all costs"], ["reconciliation", "making amends", "past resentment"]),
    minor(["transition", "moving on", "rite of passage"], ["resistance", "unfinished business", "emotional baggage"]),
    minor(["strategy", "deception", "stealth"], ["confession", "conscience", "coming clean"]),
    minor(["restriction", "self-imposed limits", "feeling trapped"], ["self-acceptance", "new perspective", "release"]),
    minor(["anxiety", "worry", "sleepless nights"], ["hope", "reaching out", "easing despair"]),
    minor(["painful endings", "betrayal", "rock bottom"], ["recovery", "regeneration", "resisting an end"]),
    minor(["curiosity", "new ideas", "vigilance"], ["deception", "manipulation", "all talk"]),
    minor(["ambition", "fast thinking", "drive"], ["impulsiveness", "burnout", "lack of direction"]),
    minor(["independence", "clear boundaries", "direct communication"], ["coldness", "bitterness", "cruelty"]),
    minor(["intellectual power", "authority", "truth"], ["abuse of power", "manipulation", "tyranny"]),
];

const PENTACLES: [MinorRow; 14] = [
    minor(["new opportunity", "prosperity", "abundance"], ["missed opportunity", "poor planning", "greed"]),
    minor(["balance", "adaptability", "time management"], ["overload", "lost balance", "stress"]),
    minor(["teamwork", "collaboration", "craftsmanship"], ["disharmony", "poor teamwork", "misalignment"]),
    minor(["security", "control", "saving"], ["greed", "possessiveness", "letting go"]),
    minor(["hardship", "insecurity", "isolation"], ["recovery", "spiritual poverty", "improvement"]),
    minor(["generosity", "sharing", "charity"], ["strings attached", "debt", "one-sided giving"]),
    minor(["long-term view", "patience", "investment"], ["impatience", "limited reward", "wasted effort"]),
    minor(["diligence", "skill", "mastery"], ["perfectionism", "lack of focus", "misdirected effort"]),
    minor(["self-sufficiency", "luxury", "financial independence"], ["overwork", "hustling", "setbacks"]),
    minor(["wealth", "legacy", "family"], ["financial failure", "family disputes", "loss"]),
    minor(["manifestation", "study", "new financial opportunity"], ["lack of progress", "procrastination", "learning from failure"]),
    minor(["efficiency", "routine", "responsibility"], ["boredom", "stagnation", "laziness"]),
    minor(["practicality", "nurturing", "financial security"], ["work-home imbalance", "smothering", "self-neglect"]),
    minor(["abundance", "security", "discipline"], ["greed", "stubbornness", "financial mismanagement"]),
];

/// First id of each suit block, in `Suit::ALL` order.
pub const SUIT_BASE: [u32; 4] = [22, 36, 50, 64];

/// Build the 78 standard cards in id order.
pub(crate) fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(78);

    for (number, row) in MAJORS.iter().enumerate() {
        let id = CardId::new(number as u32);
        cards.push(
            Card::major(id, number as u8, row.name, row.localized)
                .with_element(row.element)
                .with_keywords(Orientation::Upright, row.upright)
                .with_keywords(Orientation::Reversed, row.reversed),
        );
    }

    let suits: [(Suit, &[MinorRow; 14]); 4] = [
        (Suit::Wands, &WANDS),
        (Suit::Cups, &CUPS),
        (Suit::Swords, &SWORDS),
        (Suit::Pentacles, &PENTACLES),
    ];

    for (suit, rows) in suits {
        let base = SUIT_BASE[suit.index()];
        for (offset, row) in rows.iter().enumerate() {
            let id = CardId::new(base + offset as u32);
            cards.push(
                Card::minor(id, suit, offset as u8 + 1)
                    .with_keywords(Orientation::Upright, row.upright)
                    .with_keywords(Orientation::Reversed, row.reversed),
            );
        }
    }

    cards
}
