use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::config::GenerationConfig;
use super::stage::Stage;
use super::step::{step, GenerationState, GenerationWarning};
use crate::error::Result;
use crate::graph::{Edge, Graph, Triangle};
use crate::hallway::Hallway;
use crate::room::{Room, RoomId, RoomStore};

/// Owned copy of a dungeon's current output, for read-only consumers such
/// as a renderer or a debug overlay.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub stage: Stage,
    /// Active rooms in pool order.
    pub rooms: Vec<(RoomId, Room)>,
    /// Secondary rooms not (yet) reinserted.
    pub deleted_rooms: Vec<(RoomId, Room)>,
    pub hallways: Vec<Hallway>,
    pub triangles: Vec<Triangle>,
    pub super_triangle: Option<Triangle>,
    /// Deduplicated triangulation edges, ascending by weight.
    pub edges: Vec<Edge>,
    pub mst_edges: Vec<Edge>,
    pub room_connections: Vec<Edge>,
}

/// A single dungeon, generated one stage per [`Dungeon::tick`].
///
/// The dungeon owns its random source, seeded once at construction, so two
/// dungeons built from the same config and seed produce identical layouts
/// tick for tick.
#[derive(Debug)]
pub struct Dungeon {
    config: GenerationConfig,
    rng: ChaCha8Rng,
    seed: u64,
    stage: Stage,
    state: GenerationState,
}

impl Dungeon {
    /// Creates a dungeon and places its initial rooms.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfig` if `config` fails validation.
    pub fn new(config: GenerationConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GenerationState::fresh(&config, &mut rng);
        info!(seed, rooms = state.rooms.len(), "new dungeon");
        Ok(Self {
            config,
            rng,
            seed,
            stage: Stage::default(),
            state,
        })
    }

    /// Advances generation by one stage, or by one separation pass while
    /// rooms still overlap. Returns the stage the next tick will run. Once
    /// `Done`, further ticks change nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if a stage meets inconsistent state. The dungeon
    /// stays at the failing stage.
    pub fn tick(&mut self) -> Result<Stage> {
        let next = step(self.stage, &mut self.state, &self.config, &mut self.rng)?;
        if next != self.stage {
            debug!(from = %self.stage, to = %next, "stage transition");
            self.stage = next;
        }
        Ok(next)
    }

    /// Ticks until the dungeon is `Done`.
    ///
    /// Terminates because separation gives up after `max_separation_ticks`
    /// passes and every other stage advances unconditionally.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Dungeon::tick`].
    pub fn run_to_completion(&mut self) -> Result<()> {
        while !self.is_done() {
            self.tick()?;
        }
        info!(
            rooms = self.state.rooms.active().len(),
            hallways = self.state.hallways.len(),
            warnings = self.state.warnings.len(),
            "dungeon generated"
        );
        Ok(())
    }

    /// Discards all generation state and starts over from room placement
    /// with a new primary room count and separation tightness. The random
    /// source keeps running, so successive dungeons differ.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfig` if the new parameters are
    /// invalid; the dungeon is left untouched in that case.
    pub fn reset(&mut self, min_room_count: u32, tightness: f64) -> Result<()> {
        let config = GenerationConfig {
            min_room_count,
            tightness,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        self.state = GenerationState::fresh(&self.config, &mut self.rng);
        self.stage = Stage::default();
        debug!(min_room_count, tightness, "dungeon reset");
        Ok(())
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.stage.is_terminal()
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The seed the random source was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn rooms(&self) -> &RoomStore {
        &self.state.rooms
    }

    #[must_use]
    pub fn hallways(&self) -> &[Hallway] {
        &self.state.hallways
    }

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.state.graph
    }

    /// The boss room, assigned on the transition into `Done`.
    #[must_use]
    pub fn boss(&self) -> Option<RoomId> {
        self.state.boss
    }

    /// Separation passes run in the current generation.
    #[must_use]
    pub fn separation_ticks(&self) -> u32 {
        self.state.separation_ticks
    }

    /// Recoverable problems met since the last reset.
    #[must_use]
    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.state.warnings
    }

    /// Copies out everything a renderer needs for the current frame.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let rooms = &self.state.rooms;
        let graph = &self.state.graph;
        Snapshot {
            stage: self.stage,
            rooms: rooms
                .active_rooms()
                .map(|(id, room)| (id, room.clone()))
                .collect(),
            deleted_rooms: rooms
                .deleted_rooms()
                .map(|(id, room)| (id, room.clone()))
                .collect(),
            hallways: self.state.hallways.clone(),
            triangles: graph.triangles().to_vec(),
            super_triangle: graph.super_triangle().cloned(),
            edges: graph.edges().to_vec(),
            mst_edges: graph.mst_edges().to_vec(),
            room_connections: graph.room_connections().to_vec(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, LayoutError};
    use crate::operations::rooms::rooms_overlapping;
    use crate::room::RoomKind;

    fn small_config() -> GenerationConfig {
        GenerationConfig {
            min_room_count: 4,
            rooms_per_primary: 3,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn new_dungeon_starts_separating() {
        let dungeon = Dungeon::new(small_config(), 7).unwrap();
        assert_eq!(dungeon.stage(), Stage::RoomSeparation);
        assert!(!dungeon.is_done());
        assert_eq!(dungeon.rooms().active().len(), 12);
        assert!(dungeon.rooms().deleted().is_empty());
        assert!(dungeon.hallways().is_empty());
        assert_eq!(dungeon.seed(), 7);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GenerationConfig {
            min_room_count: 0,
            ..GenerationConfig::default()
        };
        let err = Dungeon::new(config, 1).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Config(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn runs_to_done_and_stays_there() {
        let mut dungeon = Dungeon::new(small_config(), 11).unwrap();
        dungeon.run_to_completion().unwrap();
        assert!(dungeon.is_done());

        let before = dungeon.snapshot();
        for _ in 0..5 {
            assert_eq!(dungeon.tick().unwrap(), Stage::Done);
        }
        let after = dungeon.snapshot();
        assert_eq!(before.rooms, after.rooms);
        assert_eq!(before.hallways, after.hallways);
        assert_eq!(before.room_connections, after.room_connections);
    }

    #[test]
    fn stages_are_visited_in_order() {
        let mut dungeon = Dungeon::new(small_config(), 3).unwrap();
        let mut visited = vec![dungeon.stage()];
        while !dungeon.is_done() {
            let stage = dungeon.tick().unwrap();
            if visited.last() != Some(&stage) {
                visited.push(stage);
            }
        }
        let expected: Vec<Stage> = std::iter::successors(Some(Stage::RoomSeparation), |s| {
            (!s.is_terminal()).then_some(s.next())
        })
        .collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Dungeon::new(small_config(), 42).unwrap();
        let mut b = Dungeon::new(small_config(), 42).unwrap();
        a.run_to_completion().unwrap();
        b.run_to_completion().unwrap();

        let (sa, sb) = (a.snapshot(), b.snapshot());
        let rects = |s: &Snapshot| s.rooms.iter().map(|(_, r)| *r.rect()).collect::<Vec<_>>();
        assert_eq!(rects(&sa), rects(&sb));
        assert_eq!(sa.hallways, sb.hallways);
        assert_eq!(a.separation_ticks(), b.separation_ticks());
    }

    #[test]
    fn finished_dungeon_has_one_boss() {
        let mut dungeon = Dungeon::new(small_config(), 5).unwrap();
        dungeon.run_to_completion().unwrap();

        let boss = dungeon.boss().unwrap();
        let bosses: Vec<_> = dungeon
            .rooms()
            .active_rooms()
            .filter(|(_, room)| room.kind() == RoomKind::Boss)
            .map(|(id, _)| id)
            .collect();
        assert_eq!(bosses, vec![boss]);

        let boss_area = dungeon.rooms().room(boss).unwrap().area();
        for (_, room) in dungeon.rooms().active_rooms() {
            assert!(room.area() <= boss_area);
        }
    }

    #[test]
    fn reset_starts_a_fresh_pass() {
        let mut dungeon = Dungeon::new(small_config(), 9).unwrap();
        dungeon.run_to_completion().unwrap();
        let first = dungeon.snapshot();

        dungeon.reset(5, 1.0).unwrap();
        assert_eq!(dungeon.stage(), Stage::RoomSeparation);
        assert_eq!(dungeon.config().min_room_count, 5);
        assert_eq!(dungeon.rooms().active().len(), 15);
        assert!(dungeon.rooms().deleted().is_empty());
        assert!(dungeon.hallways().is_empty());
        assert!(dungeon.graph().edges().is_empty());
        assert!(dungeon.boss().is_none());
        assert!(dungeon.warnings().is_empty());
        assert_eq!(dungeon.separation_ticks(), 0);

        dungeon.run_to_completion().unwrap();
        assert_ne!(first.hallways, dungeon.snapshot().hallways);
    }

    #[test]
    fn rejected_reset_keeps_current_state() {
        let mut dungeon = Dungeon::new(small_config(), 9).unwrap();
        dungeon.tick().unwrap();
        let stage = dungeon.stage();
        let rooms = dungeon.snapshot().rooms;

        assert!(dungeon.reset(0, 1.0).is_err());
        assert!(dungeon.reset(4, f64::NAN).is_err());
        assert_eq!(dungeon.stage(), stage);
        assert_eq!(dungeon.snapshot().rooms, rooms);
        assert_eq!(dungeon.config().min_room_count, 4);
    }

    #[test]
    fn separation_cap_is_reported_and_skipped() {
        let config = GenerationConfig {
            bounds_width: 200.0,
            bounds_height: 200.0,
            max_separation_ticks: 0,
            ..small_config()
        };
        let mut dungeon = Dungeon::new(config, 2).unwrap();
        let crowded = rooms_overlapping(dungeon.rooms()).unwrap();

        dungeon.run_to_completion().unwrap();
        assert!(dungeon.is_done());
        assert_eq!(dungeon.separation_ticks(), 0);
        let capped = dungeon
            .warnings()
            .contains(&GenerationWarning::SeparationCapReached { ticks: 0 });
        assert_eq!(capped, crowded);
    }
}
