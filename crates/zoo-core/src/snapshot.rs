//! Reconstrucción (replay) del estado a partir del log de eventos.
//!
//! El replay es lineal: consume eventos en orden y actualiza un
//! `FlowSnapshot` por evento. El estado vivo del controlador y el snapshot
//! reconstruido deben coincidir después de cualquier secuencia de
//! operaciones; los tests lo verifican.

use std::collections::BTreeSet;

use crate::event::{FlowEvent, FlowEventKind};
use crate::flow::Direction;

/// Estado reconstruido de un flujo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSnapshot {
    pub current_step: usize,
    pub is_complete: bool,
    pub last_direction: Direction,
    pub confirmation: Option<String>,
    /// Un slot por paso, en orden.
    pub selections: Vec<BTreeSet<String>>,
    /// Veces que el flujo alcanzó el estado completo (puede reabrirse con
    /// `retreat` y completarse de nuevo).
    pub completions: u32,
}

impl FlowSnapshot {
    fn initial(step_count: usize) -> Self {
        Self { current_step: 0,
               is_complete: false,
               last_direction: Direction::Forward,
               confirmation: None,
               selections: vec![BTreeSet::new(); step_count],
               completions: 0 }
    }
}

/// Reconstruye el estado plegando el log de eventos.
///
/// `StepEntered` es autoritativo para el cursor y limpia el terminal: la
/// única forma de entrar a un paso estando completo es haber retrocedido.
pub fn replay(events: &[FlowEvent], step_count: usize) -> FlowSnapshot {
    let mut snap = FlowSnapshot::initial(step_count);
    for ev in events {
        match &ev.kind {
            FlowEventKind::FlowInitialized { .. } => {}
            FlowEventKind::StepEntered { step_index, direction } => {
                snap.current_step = *step_index;
                snap.last_direction = *direction;
                snap.is_complete = false;
                snap.confirmation = None;
            }
            FlowEventKind::SelectionChanged { step_index, selected } => {
                if let Some(slot) = snap.selections.get_mut(*step_index) {
                    *slot = selected.iter().cloned().collect();
                }
            }
            FlowEventKind::FlowSkipped { .. } => {}
            FlowEventKind::FlowCompleted { confirmation } => {
                snap.is_complete = true;
                snap.last_direction = Direction::Forward;
                snap.confirmation = Some(confirmation.clone());
                snap.completions += 1;
            }
            FlowEventKind::FlowReset => {
                snap.current_step = 0;
                snap.is_complete = false;
                snap.last_direction = Direction::Forward;
                snap.confirmation = None;
                for slot in &mut snap.selections {
                    slot.clear();
                }
            }
        }
    }
    snap
}
