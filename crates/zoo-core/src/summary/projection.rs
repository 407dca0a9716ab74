//! Contrato para proyecciones de resumen.
//!
//! Una `StepProjection` recibe el conjunto seleccionado de su paso y
//! devuelve un valor derivado (etiqueta, conteo, lo que el dominio defina).
//! Las proyecciones deben ser puras: el motor no conoce la semántica de los
//! ids ("3-5hrs" contra 6 paradas es configuración del dominio, no del
//! core) y nada acá muta el estado del flujo.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::selection::SelectionStore;

/// Proyección pura de un paso hacia un campo del resumen.
pub trait StepProjection: Send + Sync + std::fmt::Debug {
    /// Paso del que lee selecciones.
    fn step_index(&self) -> usize;

    /// Nombre del campo que produce en el resumen.
    fn field(&self) -> &str;

    /// Valor derivado; `None` omite el campo (por ejemplo sin selección).
    fn project(&self, selected: &BTreeSet<String>) -> Option<Value>;
}

/// Un campo derivado del resumen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryItem {
    pub field: String,
    pub value: Value,
}

/// View-model de confirmación: campos en el orden de sus proyecciones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub items: Vec<SummaryItem>,
}

impl Summary {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.items.iter().find(|i| i.field == field).map(|i| &i.value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Aplica una secuencia de proyecciones en orden, de forma determinista.
#[derive(Debug, Default)]
pub struct SummaryProjector {
    pub projections: Vec<Box<dyn StepProjection>>,
}

impl SummaryProjector {
    /// Crea un proyector vacío.
    pub fn new() -> Self {
        Self { projections: vec![] }
    }

    /// Crea un proyector con la lista dada de proyecciones.
    pub fn with_projections(projections: Vec<Box<dyn StepProjection>>) -> Self {
        Self { projections }
    }

    pub fn push(&mut self, projection: Box<dyn StepProjection>) {
        self.projections.push(projection);
    }

    /// Deriva el resumen desde el store. Cada proyección ve únicamente el
    /// conjunto de su propio paso.
    pub fn project(&self, store: &SelectionStore) -> Summary {
        let empty = BTreeSet::new();
        let mut items = Vec::new();
        for p in self.projections.iter() {
            let selected = store.selected(p.step_index()).unwrap_or(&empty);
            if let Some(value) = p.project(selected) {
                items.push(SummaryItem { field: p.field().to_string(), value });
            }
        }
        Summary { items }
    }
}
