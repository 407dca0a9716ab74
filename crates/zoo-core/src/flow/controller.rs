//! Implementación del `FlowController`.

use serde_json::json;
use uuid::Uuid;

use crate::errors::FlowConfigError;
use crate::event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
use crate::hashing::hash_value;
use crate::selection::SelectionStore;
use crate::snapshot::{replay, FlowSnapshot};
use crate::step::{FlowDefinition, StepDefinition};

use super::state::{Direction, FlowState, Retreat};

/// Dueño único del estado de un flujo lineal de pasos.
///
/// Expone los únicos mutadores legales (`select`, `advance`, `retreat`,
/// `skip_to_end`, `reset`) y anexa un evento por cada transición efectiva.
/// Todas las operaciones son totales: un intento inválido deja el estado
/// intacto en lugar de fallar. La única falla posible es de configuración,
/// al construir.
///
/// Cada pantalla construye su propia instancia; nada se comparte ni persiste
/// entre instancias.
#[derive(Debug)]
pub struct FlowController<E: EventStore = InMemoryEventStore> {
    definition: FlowDefinition,
    state: FlowState,
    selections: SelectionStore,
    event_store: E,
    flow_id: Uuid,
}

impl FlowController<InMemoryEventStore> {
    /// Crea un controlador con store de eventos en memoria.
    pub fn new(definition: FlowDefinition) -> Result<Self, FlowConfigError> {
        Self::with_store(definition, InMemoryEventStore::default())
    }

    /// Crea un nuevo builder vacío.
    #[inline]
    pub fn builder() -> super::builder::FlowBuilder {
        super::builder::FlowBuilder::new()
    }
}

impl<E: EventStore> FlowController<E> {
    /// Crea un controlador sobre un store de eventos provisto.
    ///
    /// Revalida la definición: los errores de configuración se reportan acá,
    /// nunca en el primer uso.
    pub fn with_store(definition: FlowDefinition, mut event_store: E) -> Result<Self, FlowConfigError> {
        definition.validate()?;
        let flow_id = Uuid::new_v4();
        let selections = SelectionStore::with_steps(definition.len());

        event_store.append_kind(flow_id,
                                FlowEventKind::FlowInitialized { definition_hash: definition.definition_hash.clone(),
                                                                 step_count: definition.len() });
        event_store.append_kind(flow_id,
                                FlowEventKind::StepEntered { step_index: 0,
                                                             direction: Direction::Forward });

        Ok(Self { definition,
                  state: FlowState::initial(),
                  selections,
                  event_store,
                  flow_id })
    }

    // ---- lecturas ----

    pub fn flow_id(&self) -> Uuid {
        self.flow_id
    }

    pub fn definition(&self) -> &FlowDefinition {
        &self.definition
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    /// Descriptor del paso bajo el cursor.
    pub fn current_step_def(&self) -> &StepDefinition {
        &self.definition.steps[self.state.current_step]
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    pub fn last_direction(&self) -> Direction {
        self.state.last_direction
    }

    /// Código de confirmación vigente; `Some` sólo en estado completo.
    pub fn confirmation(&self) -> Option<&str> {
        self.state.confirmation.as_deref()
    }

    pub fn selections(&self) -> &SelectionStore {
        &self.selections
    }

    /// Un paso queda satisfecho con al menos una selección.
    pub fn step_satisfied(&self, step_index: usize) -> bool {
        self.selections.is_satisfied(step_index)
    }

    /// Guardia de `advance` para el paso bajo el cursor. Fuente de verdad
    /// para habilitar o deshabilitar el control de avance del lado del host.
    pub fn can_advance(&self) -> bool {
        self.step_satisfied(self.state.current_step)
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    pub fn events(&self) -> Vec<FlowEvent> {
        self.event_store.list(self.flow_id)
    }

    /// Traza compacta de eventos, un código por variante.
    pub fn event_variants(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(|e| match e.kind {
                FlowEventKind::FlowInitialized { .. } => "I",
                FlowEventKind::StepEntered { .. } => "E",
                FlowEventKind::SelectionChanged { .. } => "S",
                FlowEventKind::FlowSkipped { .. } => "K",
                FlowEventKind::FlowCompleted { .. } => "C",
                FlowEventKind::FlowReset => "R",
            })
            .collect()
    }

    /// Reconstruye el estado por replay del log de eventos.
    pub fn snapshot(&self) -> FlowSnapshot {
        replay(&self.events(), self.definition.len())
    }

    // ---- mutadores ----

    /// Registra una elección en un paso: reemplazo en `Single`, conmutación
    /// en `Multiple`. Índices de paso u opciones desconocidos se ignoran.
    /// Devuelve `true` si el conjunto de selección cambió.
    pub fn select(&mut self, step_index: usize, option_id: &str) -> bool {
        let Some(step) = self.definition.step(step_index) else {
            log::warn!("select ignorado: paso {} fuera de rango", step_index);
            return false;
        };
        if !step.has_option(option_id) {
            log::warn!("select ignorado: opción '{}' no existe en el paso '{}'", option_id, step.id);
            return false;
        }
        let changed = self.selections.apply(step_index, step.selection_mode, option_id);
        if changed {
            self.event_store.append_kind(self.flow_id,
                                         FlowEventKind::SelectionChanged { step_index,
                                                                           selected: self.selections.selected_ids(step_index) });
        }
        changed
    }

    /// Avanza si el paso actual está satisfecho; en el último paso marca el
    /// flujo como completo sin mover el cursor. Con la guardia en falso no
    /// cambia nada: el contrato es no-op, no error. Devuelve `true` si hubo
    /// transición.
    pub fn advance(&mut self) -> bool {
        if self.state.is_complete {
            return false;
        }
        if !self.can_advance() {
            log::debug!("advance rechazado: paso {} sin selección", self.state.current_step);
            return false;
        }
        let cursor = self.state.current_step;
        if cursor == self.definition.last_index() {
            self.complete();
        } else {
            self.state.current_step = cursor + 1;
            self.state.last_direction = Direction::Forward;
            self.event_store.append_kind(self.flow_id,
                                         FlowEventKind::StepEntered { step_index: cursor + 1,
                                                                      direction: Direction::Forward });
        }
        true
    }

    /// Retrocede un paso. Desde el estado completo reabre el último paso sin
    /// decrementar; en el primer paso no hay estado previo y la salida del
    /// flujo queda en manos del caller.
    pub fn retreat(&mut self) -> Retreat {
        if self.state.is_complete {
            self.state.is_complete = false;
            self.state.confirmation = None;
            self.state.last_direction = Direction::Backward;
            let last = self.definition.last_index();
            self.state.current_step = last;
            self.event_store.append_kind(self.flow_id,
                                         FlowEventKind::StepEntered { step_index: last,
                                                                      direction: Direction::Backward });
            return Retreat::ReopenedLastStep;
        }
        if self.state.current_step > 0 {
            self.state.current_step -= 1;
            self.state.last_direction = Direction::Backward;
            self.event_store.append_kind(self.flow_id,
                                         FlowEventKind::StepEntered { step_index: self.state.current_step,
                                                                      direction: Direction::Backward });
            Retreat::SteppedBack
        } else {
            Retreat::ExitFlow
        }
    }

    /// Salta al final sin validar los pasos restantes. Es la vía de escape
    /// del control "Skip"; cuándo ofrecerla es política del caller.
    pub fn skip_to_end(&mut self) {
        if self.state.is_complete {
            return;
        }
        self.event_store.append_kind(self.flow_id,
                                     FlowEventKind::FlowSkipped { from_step: self.state.current_step });
        self.complete();
    }

    /// Vuelve todo a cero: cursor, terminal y selecciones.
    pub fn reset(&mut self) {
        self.selections.clear();
        self.state = FlowState::initial();
        self.event_store.append_kind(self.flow_id, FlowEventKind::FlowReset);
    }

    fn complete(&mut self) {
        self.state.is_complete = true;
        self.state.last_direction = Direction::Forward;
        let confirmation = self.derive_confirmation();
        self.state.confirmation = Some(confirmation.clone());
        self.event_store.append_kind(self.flow_id, FlowEventKind::FlowCompleted { confirmation });
    }

    /// Código determinista: mismas selecciones sobre la misma definición
    /// producen el mismo código.
    fn derive_confirmation(&self) -> String {
        hash_value(&json!({
            "engine_version": crate::constants::ENGINE_VERSION,
            "definition_hash": self.definition.definition_hash,
            "selections": self.selections.as_canonical_value(),
        }))
    }
}
