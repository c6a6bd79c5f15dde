use crate::core::error::EngineError;
use crate::domain::params::SimulationParams;
use crate::rigid_body::RigidBody;

use super::collision::resolve_all;

/// Counters from one body update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BodyStepCounts {
    /// Bodies touching a domain face after their own update.
    pub boundary_contacts: u32,
    /// Overlapping pairs found across all collision passes.
    pub collisions: u32,
}

/// Manages all rigid bodies in the simulation
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
    next_id: u32,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a body and assign it a fresh ID (never 0).
    pub fn add_body(&mut self, mut body: RigidBody) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Remove a body by ID. Order of the remaining bodies is preserved so the
    /// pair iteration order stays stable.
    pub fn remove_body(&mut self, id: u32) -> Result<RigidBody, EngineError> {
        let idx = self
            .bodies
            .iter()
            .position(|b| b.id == id)
            .ok_or(EngineError::BodyNotFound(id))?;
        Ok(self.bodies.remove(idx))
    }

    /// Remove all bodies and restart ID assignment.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    pub fn get(&self, id: u32) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Per-body dynamics followed by the first pairwise collision pass.
    pub fn update(&mut self, params: &SimulationParams) -> BodyStepCounts {
        let mut boundary_contacts = 0;
        for body in self.bodies.iter_mut() {
            if body.update(params).any() {
                boundary_contacts += 1;
            }
        }
        let collisions = resolve_all(&mut self.bodies);
        BodyStepCounts { boundary_contacts, collisions }
    }

    /// Extra collision passes for stacks and crowds.
    pub fn resolve_collisions(&mut self, passes: u32) -> u32 {
        (0..passes).map(|_| resolve_all(&mut self.bodies)).sum()
    }

    /// Re-clamp every body after collision separation may have pushed it out.
    pub fn contain(&mut self, params: &SimulationParams) {
        for body in self.bodies.iter_mut() {
            body.enforce_bounds(params.bounds_min, params.bounds_max);
        }
    }

    /// Full body phase of a step: update, correction passes, containment.
    pub fn step(&mut self, params: &SimulationParams) -> BodyStepCounts {
        let mut counts = self.update(params);
        counts.collisions += self.resolve_collisions(params.correction_passes);
        self.contain(params);
        counts
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}
