//! Proyección de resumen: derivación pura de un view-model a partir del
//! `SelectionStore` completo.

pub mod projection;

pub use projection::{StepProjection, Summary, SummaryItem, SummaryProjector};
