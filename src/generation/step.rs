use rand::Rng;
use tracing::{debug, trace, warn};

use super::config::GenerationConfig;
use super::stage::Stage;
use crate::error::Result;
use crate::graph::Graph;
use crate::hallway::Hallway;
use crate::operations::graph::{SelectConnections, SpanningTree, Triangulate};
use crate::operations::hallways::RouteHallways;
use crate::operations::rooms::{
    rooms_overlapping, AssignBoss, PlaceRooms, ReinsertRooms, SeparateRooms, TruncateRooms,
};
use crate::room::{RoomId, RoomStore};

/// A recoverable problem met during generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationWarning {
    /// Rooms still overlapped after the allowed number of separation passes.
    SeparationCapReached { ticks: u32 },
    /// Fewer rooms existed than the requested primary count.
    RoomCountClamped { requested: usize, available: usize },
    /// A room center was shifted slightly to avoid a collinear triangle.
    VertexPerturbed { room: Option<RoomId> },
    /// A room center could not be triangulated and is left unconnected.
    VertexSkipped { room: Option<RoomId> },
}

/// Everything a generation pass builds up, stage by stage.
#[derive(Debug, Default)]
pub struct GenerationState {
    /// Room arena with the active and deleted pools.
    pub rooms: RoomStore,
    /// Triangulation, spanning tree and selected connections.
    pub graph: Graph,
    /// Corridor segments.
    pub hallways: Vec<Hallway>,
    /// Separation passes run so far.
    pub separation_ticks: u32,
    /// The boss room, once assigned.
    pub boss: Option<RoomId>,
    /// Recoverable problems, in the order they were met.
    pub warnings: Vec<GenerationWarning>,
}

impl GenerationState {
    /// A fresh state with newly placed rooms.
    pub fn fresh(config: &GenerationConfig, rng: &mut impl Rng) -> Self {
        let mut state = Self::default();
        PlaceRooms::new(config.placement_bounds(), config.generated_room_count())
            .execute(&mut state.rooms, rng);
        debug!(rooms = state.rooms.len(), "placed rooms");
        state
    }

    fn warn(&mut self, warning: GenerationWarning) {
        warn!(?warning, "generation warning");
        self.warnings.push(warning);
    }
}

/// Runs one tick of `stage` against `state` and returns the stage to run next.
///
/// Every stage but `RoomSeparation` runs once and advances. Separation runs
/// one repulsion pass per tick while rooms overlap, and advances anyway once
/// `max_separation_ticks` passes have run. `Done` is a no-op.
///
/// # Errors
///
/// Returns an error if a stage fails on inconsistent state (a room id that
/// is missing from the store, or non-finite room positions).
pub fn step(
    stage: Stage,
    state: &mut GenerationState,
    config: &GenerationConfig,
    rng: &mut impl Rng,
) -> Result<Stage> {
    match stage {
        Stage::RoomSeparation => {
            if !rooms_overlapping(&state.rooms)? {
                debug!(ticks = state.separation_ticks, "rooms separated");
                return Ok(stage.next());
            }
            if state.separation_ticks >= config.max_separation_ticks {
                state.warn(GenerationWarning::SeparationCapReached {
                    ticks: state.separation_ticks,
                });
                return Ok(stage.next());
            }
            let pushes = SeparateRooms::new(
                config.tightness,
                config.separation_gap,
                config.separation_speed,
                f64::from(config.max_room_size),
            )
            .execute(&mut state.rooms)?;
            state.separation_ticks += 1;
            trace!(tick = state.separation_ticks, pushes, "separation pass");
            Ok(stage)
        }
        Stage::RoomDeletion => {
            let keep = usize::try_from(config.min_room_count).unwrap_or(usize::MAX);
            let truncation = TruncateRooms::new(keep).execute(&mut state.rooms)?;
            if let Some((requested, available)) = truncation.clamped {
                state.warn(GenerationWarning::RoomCountClamped {
                    requested,
                    available,
                });
            }
            debug!(
                kept = truncation.vertices.len(),
                deleted = truncation.deleted,
                "split primary rooms"
            );
            state.graph.set_points(truncation.vertices);
            Ok(stage.next())
        }
        Stage::Triangulation => {
            let result = Triangulate::new(state.graph.points()).execute()?;
            for vertex in &result.perturbed {
                state.warn(GenerationWarning::VertexPerturbed { room: vertex.room });
            }
            for vertex in &result.skipped {
                state.warn(GenerationWarning::VertexSkipped { room: vertex.room });
            }
            debug!(
                triangles = result.triangles.len(),
                hull_edges = result.hull_edges.len(),
                "triangulated room centers"
            );
            state
                .graph
                .set_triangulation(result.super_triangle, result.triangles, &result.hull_edges);
            Ok(stage.next())
        }
        Stage::SpanningTree => {
            let tree = SpanningTree::new(state.graph.edges()).execute();
            debug!(
                edges = state.graph.edges().len(),
                tree = tree.len(),
                "extracted spanning tree"
            );
            state.graph.set_mst_edges(tree);
            Ok(stage.next())
        }
        Stage::ConnectionSelection => {
            let connections = SelectConnections::new(config.extra_connection_chance).execute(
                state.graph.edges(),
                state.graph.mst_edges(),
                rng,
            );
            debug!(connections = connections.len(), "selected room connections");
            state.graph.set_room_connections(connections);
            Ok(stage.next())
        }
        Stage::HallwayCreation => {
            state.hallways = RouteHallways::new(config.hallway_width).execute(
                &state.rooms,
                state.graph.room_connections(),
                rng,
            )?;
            debug!(hallways = state.hallways.len(), "routed hallways");
            Ok(stage.next())
        }
        Stage::RoomReinsertion => {
            let restored = ReinsertRooms::new().execute(&mut state.rooms, &state.hallways)?;
            state.boss = AssignBoss::new().execute(&mut state.rooms)?;
            debug!(
                restored = restored.len(),
                active = state.rooms.active().len(),
                "reinserted secondary rooms"
            );
            Ok(stage.next())
        }
        Stage::Done => Ok(stage),
    }
}
