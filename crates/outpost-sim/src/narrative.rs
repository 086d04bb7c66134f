//! Condition-gated dilemma rules and the narrative trigger.
//!
//! The trigger is template/threshold based, not generative: an ordered list
//! of condition-to-template rules is evaluated against a read-only snapshot
//! of the simulation, and one matching template is drawn uniformly at
//! random. Cooldown and mutual exclusion are enforced by the orchestrator,
//! never here.

use rand::Rng;
use rand::rngs::StdRng;

use outpost_core::{Dilemma, DilemmaChoice, DilemmaId};

/// A read-only snapshot of the simulation state, handed to trigger
/// conditions. Plain counts only — holding no references keeps the trigger
/// decoupled from the orchestrator's owned state.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldView {
    /// Elapsed simulation time in seconds.
    pub game_time: f64,
    /// Total pawns, dead included.
    pub pawn_count: usize,
    /// Pawns that are not dead.
    pub living_pawn_count: usize,
    /// Items in the inventory.
    pub inventory_size: usize,
    /// Materials in the catalog.
    pub material_count: usize,
    /// Blueprints in the catalog.
    pub blueprint_count: usize,
}

/// When a dilemma rule is eligible to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerCondition {
    /// At least this many living pawns.
    PawnsAtLeast(usize),
    /// At least this many items in the inventory.
    InventoryAtLeast(usize),
    /// At least this many materials in the catalog.
    MaterialsAtLeast(usize),
    /// Always eligible.
    Always,
}

impl TriggerCondition {
    /// Evaluate the condition against a snapshot.
    pub fn holds(&self, view: &WorldView) -> bool {
        match self {
            Self::PawnsAtLeast(n) => view.living_pawn_count >= *n,
            Self::InventoryAtLeast(n) => view.inventory_size >= *n,
            Self::MaterialsAtLeast(n) => view.material_count >= *n,
            Self::Always => true,
        }
    }
}

/// The reusable text of a dilemma. Each presentation stamps a fresh id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DilemmaTemplate {
    /// Headline.
    pub title: String,
    /// Narrative body text.
    pub description: String,
    /// Choices in presentation order.
    pub choices: Vec<DilemmaChoice>,
}

impl DilemmaTemplate {
    /// Instantiate the template, minting the dilemma id from `rng` so seeded
    /// runs stay reproducible.
    pub fn present(&self, rng: &mut StdRng) -> Dilemma {
        Dilemma {
            id: DilemmaId::from_bits(rng.random()),
            title: self.title.clone(),
            description: self.description.clone(),
            choices: self.choices.clone(),
        }
    }
}

/// One row of the trigger table: a condition guarding a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DilemmaRule {
    /// When the template is eligible.
    pub condition: TriggerCondition,
    /// What to present.
    pub template: DilemmaTemplate,
}

/// Evaluates the rule table against a snapshot and draws one eligible
/// dilemma, if any.
#[derive(Debug, Clone, Default)]
pub struct NarrativeTrigger {
    rules: Vec<DilemmaRule>,
}

impl NarrativeTrigger {
    /// Create a trigger over the given rule table.
    pub fn new(rules: Vec<DilemmaRule>) -> Self {
        Self { rules }
    }

    /// Create a trigger over the standard deck.
    pub fn standard() -> Self {
        Self::new(standard_deck())
    }

    /// The rule table.
    pub fn rules(&self) -> &[DilemmaRule] {
        &self.rules
    }

    /// Collect every rule whose condition holds, then draw one uniformly at
    /// random. Returns `None` when nothing matches. Pure apart from the RNG.
    pub fn draw(&self, view: &WorldView, rng: &mut StdRng) -> Option<Dilemma> {
        let eligible: Vec<&DilemmaRule> = self
            .rules
            .iter()
            .filter(|r| r.condition.holds(view))
            .collect();
        if eligible.is_empty() {
            return None;
        }
        let pick = rng.random_range(0..eligible.len());
        Some(eligible[pick].template.present(rng))
    }
}

fn choice(text: &str, consequence_key: &str) -> DilemmaChoice {
    DilemmaChoice {
        text: text.into(),
        consequence_key: consequence_key.into(),
    }
}

/// The standard dilemma deck shipped with the starter content.
pub fn standard_deck() -> Vec<DilemmaRule> {
    vec![
        DilemmaRule {
            condition: TriggerCondition::PawnsAtLeast(5),
            template: DilemmaTemplate {
                title: "Power Surge".into(),
                description: "A nearby geothermal vent has become active, offering a massive, \
                              but potentially unstable, source of power. Tapping it could \
                              supercharge our colony, but a miscalculation might cause a \
                              catastrophic overload."
                    .into(),
                choices: vec![
                    choice("Tap the vent carefully.", "gain_power_risk"),
                    choice("Ignore it, it's too dangerous.", "no_change"),
                ],
            },
        },
        DilemmaRule {
            condition: TriggerCondition::PawnsAtLeast(5),
            template: DilemmaTemplate {
                title: "Strange Signal".into(),
                description: "A weak, repeating signal is detected from a crashed satellite \
                              just beyond our perimeter. It could be a distress call, a data \
                              cache, or a trap. Sending a pawn to investigate will be risky."
                    .into(),
                choices: vec![
                    choice("Send a pawn to investigate.", "investigate_signal"),
                    choice("Destroy the satellite from a distance.", "destroy_signal"),
                    choice("Leave it alone.", "no_change"),
                ],
            },
        },
        DilemmaRule {
            condition: TriggerCondition::InventoryAtLeast(3),
            template: DilemmaTemplate {
                title: "Well-Stocked Racks".into(),
                description: "The armory racks are filling up, and word has spread. A caravan \
                              of prospectors offers a generous trade for part of the stock — \
                              gear we may sorely miss at the next raid."
                    .into(),
                choices: vec![
                    choice("Trade the surplus.", "trade_inventory"),
                    choice("Keep everything in reserve.", "no_change"),
                ],
            },
        },
    ]
}
