use serde::{Deserialize, Serialize};

/// Sentido de la última transición. Sólo informa la animación de entrada y
/// salida del lado del host; no participa en ninguna decisión del motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// Estado vivo de un flujo.
///
/// Las transiciones válidas son:
/// - `Step(i)` -> `Step(i+1)` vía `advance` con el paso `i` satisfecho
/// - `Step(N-1)` -> `Complete` vía `advance` con el último paso satisfecho
/// - `Step(i)` -> `Step(i-1)` vía `retreat` para `i > 0`
/// - `Complete` -> `Step(N-1)` vía `retreat`
/// - cualquier `Step(i)` -> `Complete` vía `skip_to_end`, sin validación
///
/// `retreat` en `Step(0)` no cambia nada: es la frontera de salida del flujo
/// y se reporta al caller como `Retreat::ExitFlow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowState {
    /// Cursor en `[0, step_count - 1]`. No se mueve al completar.
    pub current_step: usize,
    /// Terminal blando: se limpia al retroceder desde el estado completo.
    pub is_complete: bool,
    pub last_direction: Direction,
    /// Código emitido al completar; `Some` si y sólo si `is_complete`.
    pub confirmation: Option<String>,
}

impl FlowState {
    pub(crate) fn initial() -> Self {
        Self { current_step: 0,
               is_complete: false,
               last_direction: Direction::Forward,
               confirmation: None }
    }
}

/// Resultado de `retreat`, para que el caller distinga la frontera de salida
/// de un retroceso interno.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// El cursor retrocedió un paso.
    SteppedBack,
    /// Se reabrió el último paso desde el estado completo.
    ReopenedLastStep,
    /// El flujo está en el primer paso: salir es decisión del caller.
    ExitFlow,
}
