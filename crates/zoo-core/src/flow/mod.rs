//! Controlador del flujo lineal: estado, mutadores legales y builder.

pub mod builder;
pub mod controller;
pub mod state;

pub use builder::FlowBuilder;
pub use controller::FlowController;
pub use state::{Direction, FlowState, Retreat};
