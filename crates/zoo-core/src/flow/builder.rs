//! Builder para `FlowController`.
//!
//! Acumula pasos en orden y valida todo junto en `build()`. La validación
//! vive en `FlowDefinition::new`; el builder sólo aporta la construcción
//! encadenada:
//!
//! ```ignore
//! // Construcción típica:
//! // let flow = FlowController::builder()
//! //     .step(StepDefinition::single("date", "¿Qué día?", dates))
//! //     .step(StepDefinition::multiple("extras", "Extras", extras))
//! //     .build()?;
//! ```

use crate::errors::FlowConfigError;
use crate::event::{EventStore, InMemoryEventStore};
use crate::step::{FlowDefinition, StepDefinition};

use super::controller::FlowController;

/// Acumulador de pasos previo a la validación.
#[derive(Debug, Default)]
pub struct FlowBuilder {
    steps: Vec<StepDefinition>,
}

impl FlowBuilder {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Añade el siguiente paso del flujo. Consumimos `self` para encadenar.
    #[inline]
    pub fn step(mut self, step: StepDefinition) -> Self {
        self.steps.push(step);
        self
    }

    /// Valida y construye el controlador con store en memoria.
    pub fn build(self) -> Result<FlowController<InMemoryEventStore>, FlowConfigError> {
        let definition = FlowDefinition::new(self.steps)?;
        FlowController::new(definition)
    }

    /// Valida y construye el controlador sobre un store provisto.
    pub fn build_with_store<E: EventStore>(self, store: E) -> Result<FlowController<E>, FlowConfigError> {
        let definition = FlowDefinition::new(self.steps)?;
        FlowController::with_store(definition, store)
    }
}
