//! Write election for multi-process runs.
//!
//! On a multi-rank deployment only one process may emit table output.  The
//! elected rank writes; every other rank's invocation is a complete no-op
//! with no schema mutation and no side effects.

/// Decides whether this process performs writes.
pub trait WriteGate {
    fn elected(&self) -> bool;
}

/// Gate for single-process runs — always elected.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlwaysWrite;

impl WriteGate for AlwaysWrite {
    fn elected(&self) -> bool {
        true
    }
}

/// Elects exactly one rank of a multi-process run.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankGate {
    /// This process's rank.
    pub rank: u32,
    /// The rank elected to write.
    pub root: u32,
}

impl RankGate {
    pub fn new(rank: u32, root: u32) -> Self {
        Self { rank, root }
    }

    /// Rank-0 election, the common convention.
    pub fn root_of(rank: u32) -> Self {
        Self::new(rank, 0)
    }
}

impl WriteGate for RankGate {
    fn elected(&self) -> bool {
        self.rank == self.root
    }
}
