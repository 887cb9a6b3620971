//! In-memory persona store

use std::collections::BTreeMap;

use personas_common::model::{NewPersona, Persona, PersonaUpdate};

/// In-memory store for persona records
///
/// Ids are assigned sequentially starting at 1 and are never reused within
/// the lifetime of the process, so a delete followed by a create cannot
/// resurrect an old id. The BTreeMap keeps listings ordered by id.
#[derive(Debug)]
pub struct PersonaStore {
    personas: BTreeMap<i64, Persona>,
    next_id: i64,
}

impl PersonaStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            personas: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// All personas, ordered by ascending id
    pub fn list(&self) -> Vec<Persona> {
        self.personas.values().cloned().collect()
    }

    /// Look up a persona by id
    pub fn get(&self, id: i64) -> Option<&Persona> {
        self.personas.get(&id)
    }

    /// Insert a new persona, assigning it the next id
    pub fn insert(&mut self, new: NewPersona) -> Persona {
        let id = self.next_id;
        self.next_id += 1;

        let persona = new.into_persona(id);
        self.personas.insert(id, persona.clone());
        persona
    }

    /// Apply a partial update to an existing persona
    ///
    /// Returns the updated record, or None if the id is unknown.
    pub fn update(&mut self, id: i64, update: &PersonaUpdate) -> Option<Persona> {
        let persona = self.personas.get_mut(&id)?;
        persona.apply(update);
        Some(persona.clone())
    }

    /// Remove a persona by id, returning whether it existed
    pub fn remove(&mut self, id: i64) -> bool {
        self.personas.remove(&id).is_some()
    }

    /// Number of stored personas
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// True if the store holds no personas
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

impl Default for PersonaStore {
    fn default() -> Self {
        Self::new()
    }
}
