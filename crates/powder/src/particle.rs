//! Particle records and the insertion-ordered registry that owns them.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::cell::Material;

/// Simulation clock value.
pub type Tick = u64;

/// Handle of a registered particle. Ids are assigned sequentially and double
/// as the registry index, so id order is insertion order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct ParticleId(usize);

impl ParticleId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One actively simulated unit of material.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Particle {
    pub id: ParticleId,
    pub material: Material,
    pub x: i32,
    pub y: i32,
    pub spawned_at: Tick,
    /// `None` until the tick engine evaluates the particle for the first time.
    pub last_updated: Option<Tick>,
    /// A dead particle has settled: its material stays on the grid but the
    /// tick engine never evaluates it again.
    pub alive: bool,
}

impl Particle {
    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn updated_at(&self, tick: Tick) -> bool {
        self.last_updated == Some(tick)
    }
}

/// Insertion-ordered particle store. Entries are never removed.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    particles: Vec<Particle>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new live particle and return its id.
    pub fn insert(&mut self, material: Material, x: i32, y: i32, spawned_at: Tick) -> ParticleId {
        let id = ParticleId(self.particles.len());
        self.particles.push(Particle {
            id,
            material,
            x,
            y,
            spawned_at,
            last_updated: None,
            alive: true,
        });
        id
    }

    #[must_use]
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0)
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.particles.iter().filter(|p| p.alive).count()
    }

    /// Ids in insertion order. Collected up front by the tick engine so the
    /// registry can be mutated during the pass.
    pub fn ids(&self) -> impl Iterator<Item = ParticleId> + '_ {
        self.particles.iter().map(|p| p.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

/// Indexing with an id the registry never issued is an invariant violation and
/// panics.
impl Index<ParticleId> for Registry {
    type Output = Particle;

    fn index(&self, id: ParticleId) -> &Particle {
        &self.particles[id.0]
    }
}

impl IndexMut<ParticleId> for Registry {
    fn index_mut(&mut self, id: ParticleId) -> &mut Particle {
        &mut self.particles[id.0]
    }
}
