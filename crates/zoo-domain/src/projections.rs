//! Proyecciones concretas sobre el contrato `StepProjection` del core.
//!
//! El motor no sabe qué significa un id; estas proyecciones llevan las
//! tablas del dominio (id -> valor mostrado o derivado) y los conteos que
//! las pantallas de confirmación necesitan.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeSet;

use zoo_core::StepProjection;

/// Proyección por tabla: el único id elegido de un paso `Single` se busca en
/// una tabla id -> valor. Sin selección o sin entrada en la tabla, el campo
/// se omite.
#[derive(Debug)]
pub struct MappingProjection {
    step_index: usize,
    field: String,
    table: IndexMap<String, Value>,
}

impl MappingProjection {
    pub fn new(step_index: usize, field: &str, table: IndexMap<String, Value>) -> Self {
        Self { step_index,
               field: field.to_string(),
               table }
    }
}

impl StepProjection for MappingProjection {
    fn step_index(&self) -> usize {
        self.step_index
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn project(&self, selected: &BTreeSet<String>) -> Option<Value> {
        let id = selected.iter().next()?;
        self.table.get(id).cloned()
    }
}

/// Proyección de conteo para pasos `Multiple` (términos aceptados, extras).
#[derive(Debug)]
pub struct CountProjection {
    step_index: usize,
    field: String,
}

impl CountProjection {
    pub fn new(step_index: usize, field: &str) -> Self {
        Self { step_index, field: field.to_string() }
    }
}

impl StepProjection for CountProjection {
    fn step_index(&self) -> usize {
        self.step_index
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn project(&self, selected: &BTreeSet<String>) -> Option<Value> {
        Some(Value::from(selected.len() as u64))
    }
}
