//! Definiciones relacionadas a Steps.
//!
//! En un flujo lineal de selección, un Step es una pregunta con un conjunto
//! ordenado de opciones y un modo de selección. Este módulo define:
//! - `StepDefinition`: descriptor inmutable de un paso.
//! - `SelectionMode`: reemplazo (Single) o conmutación (Multiple).
//! - `FlowDefinition` y `build_flow_definition`: secuencia validada con hash
//!   de definición.

pub mod definition;
pub mod flow_def;

pub use definition::{OptionDef, Prompt, SelectionMode, StepDefinition};
pub use flow_def::{build_flow_definition, FlowDefinition};
