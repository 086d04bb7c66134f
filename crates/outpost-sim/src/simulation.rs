//! The top-level simulation orchestrator.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use outpost_core::{Catalog, Dilemma, Pawn, SynthesizedItem};
use outpost_forge::{CraftError, SynthesisEngine};

use crate::actor::ActorSimulator;
use crate::clock::SimClock;
use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::events::{EventChannel, EventLog, GameEvent, SubscriberId};
use crate::narrative::{NarrativeTrigger, WorldView};

/// Owns the single authoritative simulation state and drives every
/// subsystem.
///
/// All mutation happens inside [`Simulation::tick`] or a named action
/// method; the orchestrator is single-threaded and non-reentrant, and no
/// method blocks or suspends. External observers read state through borrow
/// accessors or subscribe to the event channel — they never receive a
/// mutable handle. The application's top level holds the one live instance.
#[derive(Debug)]
pub struct Simulation {
    catalog: Catalog,
    engine: SynthesisEngine,
    actors: ActorSimulator,
    trigger: NarrativeTrigger,
    clock: SimClock,
    config: SimConfig,
    pawns: Vec<Pawn>,
    inventory: Vec<SynthesizedItem>,
    active_dilemma: Option<Dilemma>,
    rng: StdRng,
    channel: EventChannel,
    log: EventLog,
}

impl Simulation {
    /// Create a simulation over a catalog and starting pawns, with the
    /// standard rule tables and dilemma deck.
    pub fn new(catalog: Catalog, pawns: Vec<Pawn>, config: SimConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let log = EventLog::new(config.max_events);
        Self {
            catalog,
            engine: SynthesisEngine::standard(),
            actors: ActorSimulator::new(config.actors),
            trigger: NarrativeTrigger::standard(),
            clock: SimClock::new(),
            config,
            pawns,
            inventory: Vec::new(),
            active_dilemma: None,
            rng,
            channel: EventChannel::new(),
            log,
        }
    }

    /// Create a simulation over the bundled starter content.
    pub fn standard(config: SimConfig) -> Self {
        Self::new(
            outpost_core::content::standard_catalog(),
            outpost_core::content::starting_crew(),
            config,
        )
    }

    /// Replace the synthesis engine (builder style).
    pub fn with_engine(mut self, engine: SynthesisEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the narrative trigger (builder style).
    pub fn with_trigger(mut self, trigger: NarrativeTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Advance the simulation by a wall-clock delta in seconds.
    ///
    /// No-op while paused or for non-positive deltas. Otherwise the delta is
    /// scaled by the time scale, the clock and pawns advance, and — only if
    /// no dilemma is active and the cooldown has elapsed — the narrative
    /// trigger may fire, which pauses the simulation for a decision.
    pub fn tick(&mut self, dt: f64) {
        let Some(effective) = self.clock.advance(dt) else {
            return;
        };
        self.pawns = self.actors.step(&self.pawns, effective, &mut self.rng);
        self.maybe_trigger_dilemma(effective);
    }

    /// Advance by `ticks` deltas of `dt` wall-clock seconds each.
    pub fn run(&mut self, ticks: u64, dt: f64) {
        for _ in 0..ticks {
            self.tick(dt);
        }
    }

    fn maybe_trigger_dilemma(&mut self, effective_dt: f64) {
        if self.active_dilemma.is_some()
            || !self.clock.cooldown_elapsed(self.config.dilemma_cooldown)
        {
            return;
        }
        let chance = (self.config.dilemma_rate * effective_dt).min(1.0);
        if self.rng.random::<f64>() >= chance {
            return;
        }
        let view = self.view();
        if let Some(dilemma) = self.trigger.draw(&view, &mut self.rng) {
            self.clock.mark_dilemma();
            self.clock.pause();
            self.emit(GameEvent::DilemmaPresented {
                id: dilemma.id,
                title: dilemma.title.clone(),
            });
            self.active_dilemma = Some(dilemma);
        }
    }

    /// Flip the pause flag. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.clock.toggle_pause()
    }

    /// Set the time scale. Rejects non-positive values; on success the
    /// simulation also resumes (changing speed implies intent to play).
    pub fn set_time_scale(&mut self, value: f64) -> SimResult<()> {
        self.clock.set_time_scale(value)
    }

    /// Craft one item from a blueprint and a slot-to-material assignment.
    ///
    /// On success the item is appended to the inventory and an
    /// `item-synthesized` event fires. On any error the state is unchanged
    /// and nothing is emitted.
    pub fn craft_item(
        &mut self,
        blueprint_id: &str,
        assignment: &BTreeMap<String, String>,
    ) -> SimResult<SynthesizedItem> {
        let blueprint = self
            .catalog
            .blueprint(blueprint_id)
            .ok_or_else(|| CraftError::UnknownBlueprint(blueprint_id.to_string()))?;
        let item = self
            .engine
            .synthesize(blueprint, assignment, &self.catalog, &mut self.rng)?;

        self.inventory.push(item.clone());
        self.emit(GameEvent::ItemSynthesized {
            blueprint_name: item.blueprint_name.clone(),
        });
        Ok(item)
    }

    /// Resolve the active dilemma by choice index.
    ///
    /// Clears the dilemma and emits a `dilemma-resolved` event carrying the
    /// choice's consequence key; applying consequences is a future system's
    /// job. The simulation stays paused — resuming is an explicit player
    /// action (`toggle_pause` or `set_time_scale`).
    pub fn resolve_dilemma(&mut self, choice: usize) -> SimResult<()> {
        let dilemma = self.active_dilemma.take().ok_or(SimError::NoActiveDilemma)?;
        let Some(chosen) = dilemma.choice(choice) else {
            self.active_dilemma = Some(dilemma);
            return Err(SimError::UnknownChoice(choice));
        };
        let consequence_key = chosen.consequence_key.clone();
        self.emit(GameEvent::DilemmaResolved { consequence_key });
        Ok(())
    }

    /// Register an event subscriber.
    pub fn subscribe(&self, callback: impl FnMut(&GameEvent) + 'static) -> SubscriberId {
        self.channel.subscribe(callback)
    }

    /// Remove an event subscriber.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.channel.unsubscribe(id)
    }

    /// A plain-counts snapshot for the narrative trigger and other readers.
    pub fn view(&self) -> WorldView {
        WorldView {
            game_time: self.clock.game_time(),
            pawn_count: self.pawns.len(),
            living_pawn_count: self.pawns.iter().filter(|p| !p.is_dead()).count(),
            inventory_size: self.inventory.len(),
            material_count: self.catalog.materials().len(),
            blueprint_count: self.catalog.blueprints().len(),
        }
    }

    /// True while paused (including while a dilemma awaits a decision).
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// The current time-scale multiplier.
    pub fn time_scale(&self) -> f64 {
        self.clock.time_scale()
    }

    /// Elapsed simulation time in seconds.
    pub fn game_time(&self) -> f64 {
        self.clock.game_time()
    }

    /// Current pawn states.
    pub fn pawns(&self) -> &[Pawn] {
        &self.pawns
    }

    /// All crafted items in craft order.
    pub fn inventory(&self) -> &[SynthesizedItem] {
        &self.inventory
    }

    /// The dilemma currently awaiting a decision, if any.
    pub fn active_dilemma(&self) -> Option<&Dilemma> {
        self.active_dilemma.as_ref()
    }

    /// The immutable reference catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every event emitted so far, with simulation timestamps.
    pub fn events(&self) -> &EventLog {
        &self.log
    }

    fn emit(&mut self, event: GameEvent) {
        self.log.push(self.clock.game_time(), event.clone());
        self.channel.emit(&event);
    }
}
