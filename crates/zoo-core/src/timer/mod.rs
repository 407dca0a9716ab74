//! Sub-flujo de temporizador: cuenta atrás o progreso con disparo único.
//!
//! `Ticker` es la máquina de estados pura (testeable sin reloj);
//! `ScopedTimer` la maneja sobre una tarea tokio cuya vida queda atada al
//! handle, de modo que una pantalla desmontada nunca recibe un callback
//! tardío.

pub mod scoped;
pub mod ticker;

pub use scoped::ScopedTimer;
pub use ticker::{TickOutcome, Ticker};
