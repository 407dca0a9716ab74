//! SelectionStore: lo elegido en cada paso.
//!
//! Un slot por paso, siempre presente y vacío al inicio. Sólo el
//! `FlowController` muta los slots, vía `apply`. En modo `Single` el slot
//! tiene 0 o 1 elemento; en `Multiple` la elección conmuta pertenencia.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeSet;

use crate::step::SelectionMode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStore {
    slots: Vec<BTreeSet<String>>,
}

impl SelectionStore {
    pub fn with_steps(step_count: usize) -> Self {
        Self { slots: vec![BTreeSet::new(); step_count] }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ids seleccionados en un paso (orden lexicográfico estable).
    pub fn selected(&self, step_index: usize) -> Option<&BTreeSet<String>> {
        self.slots.get(step_index)
    }

    pub fn selected_ids(&self, step_index: usize) -> Vec<String> {
        self.slots
            .get(step_index)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, step_index: usize, option_id: &str) -> bool {
        self.slots
            .get(step_index)
            .map(|s| s.contains(option_id))
            .unwrap_or(false)
    }

    /// Predicado de completitud: un paso queda satisfecho con al menos una
    /// selección, sin importar el modo.
    pub fn is_satisfied(&self, step_index: usize) -> bool {
        self.slots
            .get(step_index)
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Aplica una elección según el modo del paso. Devuelve `true` si el slot
    /// cambió (re-elegir la única opción de un `Single` no cambia nada).
    pub(crate) fn apply(&mut self, step_index: usize, mode: SelectionMode, option_id: &str) -> bool {
        let Some(slot) = self.slots.get_mut(step_index) else {
            return false;
        };
        match mode {
            SelectionMode::Single => {
                if slot.len() == 1 && slot.contains(option_id) {
                    return false;
                }
                slot.clear();
                slot.insert(option_id.to_string());
                true
            }
            SelectionMode::Multiple => {
                if !slot.remove(option_id) {
                    slot.insert(option_id.to_string());
                }
                true
            }
        }
    }

    /// Forma canónica para hashing: lista de listas de ids en orden de paso.
    pub fn as_canonical_value(&self) -> Value {
        let slots: Vec<Value> = self.slots
                                    .iter()
                                    .map(|s| json!(s.iter().collect::<Vec<_>>()))
                                    .collect();
        json!(slots)
    }
}
