//! Tipos de evento del flujo y estructura `FlowEvent`.
//!
//! Rol en el flujo:
//! - Cada transición efectiva del `FlowController` se anexa a un
//!   `EventStore` append-only; los intentos rechazados no dejan rastro.
//! - El log permite reconstruir el estado por replay (ver `snapshot`) y
//!   alimenta trazas compactas para depuración.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flow::Direction;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FlowEventKind {
    /// Emisión inicial de un flujo: fija la `definition_hash` y la cantidad
    /// de pasos. Invariante: debe ser el primer evento de un `flow_id`.
    FlowInitialized { definition_hash: String, step_count: usize },
    /// El cursor entró a un paso, sea avanzando, retrocediendo o al reabrir
    /// el último paso desde el estado completo.
    StepEntered { step_index: usize, direction: Direction },
    /// El conjunto de selección de un paso cambió; lleva el conjunto
    /// resultante completo, no el delta.
    SelectionChanged { step_index: usize, selected: Vec<String> },
    /// Se saltó al final desde `from_step` sin validar los pasos restantes.
    FlowSkipped { from_step: usize },
    /// El flujo quedó completo; `confirmation` es determinista sobre
    /// (versión del motor, hash de definición, selecciones).
    FlowCompleted { confirmation: String },
    /// Estado y selecciones vueltos a cero.
    FlowReset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowEvent {
    pub seq: u64, // asignado por el EventStore (orden de append)
    pub flow_id: Uuid,
    pub kind: FlowEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en el hash de confirmación)
}
