//! Constantes del motor de flujos.
//!
//! Valores estáticos que participan en el cálculo de los códigos de
//! confirmación. Un cambio de versión del motor invalida los códigos
//! derivados aunque la definición y las selecciones no cambien.

/// Versión lógica del motor. Se incluye en el input del hash de
/// confirmación. Mantener estable mientras no haya cambios incompatibles.
pub const ENGINE_VERSION: &str = "W1.0";
