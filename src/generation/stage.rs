use std::fmt;

/// Pipeline stage of a generation pass, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Stage {
    /// Push rooms apart, repeated once per tick until none overlap.
    #[default]
    RoomSeparation,
    /// Split rooms into primaries and secondaries.
    RoomDeletion,
    /// Delaunay-triangulate the primary room centers.
    Triangulation,
    /// Extract the minimum spanning forest.
    SpanningTree,
    /// Add a random subset of extra edges back in.
    ConnectionSelection,
    /// Route corridors for every selected connection.
    HallwayCreation,
    /// Bring back secondary rooms crossed by a corridor, then pick the boss.
    RoomReinsertion,
    /// Terminal.
    Done,
}

impl Stage {
    /// The stage that follows this one; `Done` maps to itself.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::RoomSeparation => Self::RoomDeletion,
            Self::RoomDeletion => Self::Triangulation,
            Self::Triangulation => Self::SpanningTree,
            Self::SpanningTree => Self::ConnectionSelection,
            Self::ConnectionSelection => Self::HallwayCreation,
            Self::HallwayCreation => Self::RoomReinsertion,
            Self::RoomReinsertion | Self::Done => Self::Done,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Done
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RoomSeparation => "room separation",
            Self::RoomDeletion => "room deletion",
            Self::Triangulation => "triangulation",
            Self::SpanningTree => "spanning tree",
            Self::ConnectionSelection => "connection selection",
            Self::HallwayCreation => "hallway creation",
            Self::RoomReinsertion => "room reinsertion",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}
