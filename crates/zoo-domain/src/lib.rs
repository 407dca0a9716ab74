//! zoo-domain: catálogo de flujos del visitante (reserva, preferencias,
//! safari) y sus proyecciones de resumen, sobre el motor de `zoo-core`.

pub mod error;
pub mod preferences;
pub mod projections;
pub mod reservation;
pub mod safari;

pub use error::DomainError;
pub use preferences::{preference_projections, preference_wizard};
pub use projections::{CountProjection, MappingProjection};
pub use reservation::{reservation_flow, reservation_projections};
pub use safari::{safari_flow, safari_projections};

use zoo_core::{FlowDefinition, StepProjection};

/// Nombres de flujo disponibles, en orden de presentación.
pub const FLOW_NAMES: [&str; 3] = ["reservation", "preferences", "safari"];

/// Definición de un flujo del catálogo por nombre.
pub fn flow_by_name(name: &str) -> Result<FlowDefinition, DomainError> {
    match name {
        "reservation" => Ok(reservation_flow()),
        "preferences" => Ok(preference_wizard()),
        "safari" => Ok(safari_flow()),
        _ => Err(DomainError::UnknownFlow(name.to_string())),
    }
}

/// Proyecciones de resumen del flujo, por nombre.
pub fn projections_by_name(name: &str) -> Result<Vec<Box<dyn StepProjection>>, DomainError> {
    match name {
        "reservation" => Ok(reservation_projections()),
        "preferences" => Ok(preference_projections()),
        "safari" => Ok(safari_projections()),
        _ => Err(DomainError::UnknownFlow(name.to_string())),
    }
}
