//! The `Population` collection.
//!
//! A thin wrapper over `Vec<Agent>` whose one structural invariant is that
//! every agent's `id` equals its index.  The step engine relies on this for
//! O(1) lookup when resolving the contact pairs it drew from the shuffled
//! living subset.

use epi_core::AgentId;

use crate::Agent;

/// The full set of agents for one simulation run.
///
/// Created by [`factory::create`][crate::factory::create], mutated in place
/// by the step engine every round, and replaced wholesale on reset.  Agent
/// order and identity never change during a run.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Wrap an agent list.
    ///
    /// # Panics
    /// Debug-asserts that each agent's `id` equals its index.
    pub fn new(agents: Vec<Agent>) -> Self {
        debug_assert!(
            agents.iter().enumerate().all(|(i, a)| a.id.index() == i),
            "agent ids must equal their indices"
        );
        Self { agents }
    }

    /// Number of agents (dead included).
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Shared access to one agent.
    #[inline]
    pub fn get(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    /// Exclusive access to one agent.
    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    /// The agents as a slice, in creation order.
    #[inline]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// IDs of all living (non-dead) agents, in creation order.
    pub fn living_ids(&self) -> Vec<AgentId> {
        self.agents
            .iter()
            .filter(|a| a.alive())
            .map(|a| a.id)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
