//! Definición inmutable del flujo: secuencia validada de pasos + hash.
//!
//! La construcción es el único punto fallable del core: un flujo sin pasos o
//! un paso sin opciones es insatisfacible y se rechaza aquí, nunca en
//! tiempo de ejecución.

use serde_json::json;
use std::collections::BTreeSet;

use crate::errors::FlowConfigError;
use crate::hashing::hash_value;

use super::definition::StepDefinition;

/// Secuencia ordenada e inmutable de pasos.
#[derive(Debug, Clone)]
pub struct FlowDefinition {
    pub steps: Vec<StepDefinition>,
    /// Hash canónico sobre ids de pasos, modos y ids de opciones.
    pub definition_hash: String,
}

impl FlowDefinition {
    /// Valida los pasos y construye la definición con su hash.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, FlowConfigError> {
        validate(&steps)?;
        let definition_hash = hash_steps(&steps);
        Ok(Self { steps, definition_hash })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Índice del último paso. La definición nunca está vacía.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    /// Revalida los invariantes de construcción.
    pub fn validate(&self) -> Result<(), FlowConfigError> {
        validate(&self.steps)
    }
}

fn validate(steps: &[StepDefinition]) -> Result<(), FlowConfigError> {
    if steps.is_empty() {
        return Err(FlowConfigError::EmptyFlow);
    }
    let mut step_ids: BTreeSet<&str> = BTreeSet::new();
    for step in steps {
        if !step_ids.insert(step.id.as_str()) {
            return Err(FlowConfigError::DuplicateStepId(step.id.clone()));
        }
        if step.options.is_empty() {
            return Err(FlowConfigError::StepWithoutOptions(step.id.clone()));
        }
        let mut option_ids: BTreeSet<&str> = BTreeSet::new();
        for opt in &step.options {
            if !option_ids.insert(opt.id.as_str()) {
                return Err(FlowConfigError::DuplicateOptionId(step.id.clone(), opt.id.clone()));
            }
        }
    }
    Ok(())
}

fn hash_steps(steps: &[StepDefinition]) -> String {
    let shape: Vec<_> = steps.iter()
                             .map(|s| {
                                 json!({
                                     "id": s.id,
                                     "mode": s.selection_mode,
                                     "options": s.options.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
                                 })
                             })
                             .collect();
    hash_value(&json!(shape))
}

/// Atajo: valida y construye una `FlowDefinition` a partir de los pasos.
pub fn build_flow_definition(steps: Vec<StepDefinition>) -> Result<FlowDefinition, FlowConfigError> {
    FlowDefinition::new(steps)
}
