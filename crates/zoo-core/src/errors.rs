//! Errores del core. La única falla dura ocurre al construir la definición;
//! las operaciones en tiempo de ejecución son totales.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FlowConfigError {
    #[error("flow has no steps")] EmptyFlow,
    #[error("step '{0}' has no options")] StepWithoutOptions(String),
    #[error("duplicate step id '{0}'")] DuplicateStepId(String),
    #[error("duplicate option id '{1}' in step '{0}'")] DuplicateOptionId(String, String),
}
