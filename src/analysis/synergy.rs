//! Synergy analyzer.
//!
//! ## Sources
//!
//! - Table rules, matched per unordered pair of cards in position order
//!   (`SameSuit`, `MajorPair`, `OppositeOrientation`) or once over the whole
//!   draw (`ArcanaCount`). Each rule fires at most once.
//! - Dynamic findings computed from the draw itself: minor cards sharing a
//!   number, and runs of consecutive major numbers.
//!
//! Findings are sorted by strength, strongest first. Equal strengths keep
//! the order of their first pair by position.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Arcana, CardId};
use crate::store::{SynergyKind, SynergyRule};

use super::draw::{DrawSlot, DrawView};
use super::relationship::consecutive_runs;

pub const DEFAULT_MAX_SYNERGIES: usize = 3;

const NUMBER_ECHO_BASE: i32 = 5;
const SEQUENTIAL_MAJORS_STRENGTH: i32 = 7;

/// Where a finding came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SynergySource {
    Table,
    NumberEcho,
    SequentialMajors,
}

/// One highlighted combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyFinding {
    pub id: String,
    pub source: SynergySource,
    pub strength: i32,
    pub description: String,
    /// Positions involved, ascending.
    pub positions: Vec<usize>,
    pub cards: Vec<CardId>,
}

impl SynergyFinding {
    fn anchor(&self) -> (usize, usize) {
        let first = self.positions.first().copied().unwrap_or(usize::MAX);
        let second = self.positions.get(1).copied().unwrap_or(first);
        (first, second)
    }
}

/// Synergy analyzer.
pub struct SynergyAnalyzer;

impl SynergyAnalyzer {
    /// Top `max` findings for the draw.
    #[must_use]
    pub fn find_synergies<'r>(
        view: &DrawView<'_>,
        table: impl IntoIterator<Item = &'r SynergyRule>,
        max: usize,
    ) -> Vec<SynergyFinding> {
        let rules: Vec<&SynergyRule> = table.into_iter().collect();
        let slots = view.slots();

        let mut findings = Vec::new();
        let mut fired: FxHashSet<&str> = FxHashSet::default();

        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                for rule in pair_rules(&rules, a, b) {
                    if fired.insert(rule.id.as_str()) {
                        findings.push(table_finding(rule, &[a, b]));
                    }
                }
            }
        }

        for rule in &rules {
            if let SynergyKind::ArcanaCount { arcana, min } = rule.kind {
                let members: Vec<&DrawSlot<'_>> = slots
                    .iter()
                    .filter(|s| s.card.is_some_and(|c| c.arcana == arcana))
                    .collect();
                if members.len() >= min && fired.insert(rule.id.as_str()) {
                    findings.push(table_finding(rule, &members));
                }
            }
        }

        number_echoes(slots, &mut findings);
        sequential_majors(slots, &mut findings);

        // Stable: equal keys keep discovery order.
        findings.sort_by(|x, y| {
            y.strength
                .cmp(&x.strength)
                .then_with(|| x.anchor().cmp(&y.anchor()))
        });
        findings.truncate(max);
        findings
    }
}

/// Table rules that fire for one pair, in rule-kind order.
fn pair_rules<'r>(
    rules: &[&'r SynergyRule],
    a: &DrawSlot<'_>,
    b: &DrawSlot<'_>,
) -> Vec<&'r SynergyRule> {
    let mut matched = Vec::new();

    if let (Some(sa), Some(sb)) = (a.suit(), b.suit()) {
        if sa == sb {
            let specific = rules
                .iter()
                .find(|r| matches!(r.kind, SynergyKind::SameSuit { suit: Some(s) } if s == sa));
            let generic = || {
                rules
                    .iter()
                    .find(|r| matches!(r.kind, SynergyKind::SameSuit { suit: None }))
            };
            if let Some(rule) = specific.or_else(generic) {
                matched.push(*rule);
            }
        }
    }

    if a.is_major() && b.is_major() {
        let (ia, ib) = (a.drawn.card_id, b.drawn.card_id);
        if let Some(rule) = rules.iter().find(|r| match r.kind {
            SynergyKind::MajorPair { a: x, b: y } => (x == ia && y == ib) || (x == ib && y == ia),
            _ => false,
        }) {
            matched.push(*rule);
        }
    }

    if a.drawn.orientation != b.drawn.orientation {
        if let Some(rule) = rules
            .iter()
            .find(|r| matches!(r.kind, SynergyKind::OppositeOrientation))
        {
            matched.push(*rule);
        }
    }

    matched
}

fn table_finding(rule: &SynergyRule, slots: &[&DrawSlot<'_>]) -> SynergyFinding {
    SynergyFinding {
        id: rule.id.clone(),
        source: SynergySource::Table,
        strength: rule.strength,
        description: rule.description.clone(),
        positions: slots.iter().map(|s| s.drawn.position).collect(),
        cards: slots.iter().map(|s| s.drawn.card_id).collect(),
    }
}

fn number_echoes(slots: &[DrawSlot<'_>], out: &mut Vec<SynergyFinding>) {
    let mut seen: Vec<u8> = Vec::new();
    for slot in slots {
        let Some(number) = minor_number(slot) else {
            continue;
        };
        if seen.contains(&number) {
            continue;
        }
        seen.push(number);

        let members: Vec<&DrawSlot<'_>> = slots
            .iter()
            .filter(|s| minor_number(s) == Some(number))
            .collect();
        if members.len() < 2 {
            continue;
        }
        out.push(SynergyFinding {
            id: format!("number_echo_{number}"),
            source: SynergySource::NumberEcho,
            strength: NUMBER_ECHO_BASE + members.len() as i32,
            description: format!(
                "The number {number} appears {} times; its meaning is amplified. \
                 Reflect on what this number asks of you.",
                members.len()
            ),
            positions: members.iter().map(|s| s.drawn.position).collect(),
            cards: members.iter().map(|s| s.drawn.card_id).collect(),
        });
    }
}

fn minor_number(slot: &DrawSlot<'_>) -> Option<u8> {
    slot.card
        .filter(|c| c.arcana == Arcana::Minor)
        .and_then(|c| c.number)
}

fn sequential_majors(slots: &[DrawSlot<'_>], out: &mut Vec<SynergyFinding>) {
    let majors: Vec<(u8, &DrawSlot<'_>)> = slots
        .iter()
        .filter(|s| s.is_major())
        .filter_map(|s| s.number().map(|n| (n, s)))
        .collect();

    for run in consecutive_runs(majors.iter().map(|(n, _)| *n)) {
        let mut members: Vec<&DrawSlot<'_>> = majors
            .iter()
            .filter(|(n, _)| run.contains(n))
            .map(|(_, s)| *s)
            .collect();
        members.sort_by_key(|s| s.drawn.position);

        let (first, last) = (run[0], run[run.len() - 1]);
        out.push(SynergyFinding {
            id: format!("sequential_majors_{first}_{last}"),
            source: SynergySource::SequentialMajors,
            strength: SEQUENTIAL_MAJORS_STRENGTH,
            description: format!(
                "Major arcana {first} through {last} appear together: \
                 a journey unfolding stage by stage."
            ),
            positions: members.iter().map(|s| s.drawn.position).collect(),
            cards: members.iter().map(|s| s.drawn.card_id).collect(),
        });
    }
}
