//! zoo-core: motor lineal de pasos para flujos de selección guiada
pub mod constants;
pub mod errors;
pub mod event;
pub mod flow;
pub mod hashing;
pub mod selection;
pub mod snapshot;
pub mod step;
pub mod summary;
pub mod timer;

pub use errors::FlowConfigError;
pub use event::{EventStore, FlowEvent, FlowEventKind, InMemoryEventStore};
pub use flow::{Direction, FlowBuilder, FlowController, FlowState, Retreat};
pub use selection::SelectionStore;
pub use snapshot::{replay, FlowSnapshot};
pub use step::{build_flow_definition, FlowDefinition, OptionDef, Prompt, SelectionMode, StepDefinition};
pub use summary::{StepProjection, Summary, SummaryItem, SummaryProjector};
pub use timer::{ScopedTimer, TickOutcome, Ticker};

#[cfg(test)]
mod tests {
    use super::*;

    fn two_step_flow() -> FlowController {
        FlowController::builder().step(StepDefinition::single("color",
                                                              "Elegí un color",
                                                              vec![OptionDef::new("red", "Rojo"),
                                                                   OptionDef::new("blue", "Azul")]))
                                 .step(StepDefinition::multiple("toppings",
                                                                "Elegí extras",
                                                                vec![OptionDef::new("a", "A"),
                                                                     OptionDef::new("b", "B"),
                                                                     OptionDef::new("c", "C")]))
                                 .build()
                                 .expect("definición válida")
    }

    #[test]
    fn single_mode_replaces_selection() {
        let mut flow = two_step_flow();
        assert!(flow.select(0, "red"));
        assert!(flow.select(0, "blue"));
        let selected = flow.selections().selected_ids(0);
        assert_eq!(selected, vec!["blue".to_string()]);
    }

    #[test]
    fn single_mode_reselect_is_noop() {
        let mut flow = two_step_flow();
        assert!(flow.select(0, "red"));
        let events_before = flow.events().len();
        assert!(!flow.select(0, "red"));
        assert_eq!(flow.events().len(), events_before, "sin evento para un no-op");
    }

    #[test]
    fn multiple_mode_toggles_membership() {
        let mut flow = two_step_flow();
        flow.select(1, "a");
        assert!(flow.selections().is_selected(1, "a"));
        flow.select(1, "a");
        assert!(!flow.selections().is_selected(1, "a"));
        assert!(flow.selections().selected_ids(1).is_empty());
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut flow = two_step_flow();
        assert!(!flow.select(0, "green"));
        assert!(!flow.select(7, "red"));
        assert!(!flow.can_advance());
    }

    #[test]
    fn advance_gated_until_satisfied() {
        let mut flow = two_step_flow();
        let before = flow.state().clone();
        assert!(!flow.advance());
        assert_eq!(*flow.state(), before, "estado intacto tras el rechazo");

        flow.select(0, "red");
        assert!(flow.advance());
        assert_eq!(flow.current_step(), 1);
        assert_eq!(flow.last_direction(), Direction::Forward);
    }

    #[test]
    fn completes_from_last_step_without_moving_cursor() {
        let mut flow = two_step_flow();
        flow.select(0, "red");
        flow.advance();
        flow.select(1, "b");
        assert!(flow.advance());
        assert!(flow.is_complete());
        assert_eq!(flow.current_step(), 1);
        assert!(flow.confirmation().is_some());
    }

    #[test]
    fn retreat_from_complete_reopens_last_step() {
        let mut flow = two_step_flow();
        flow.select(0, "red");
        flow.advance();
        flow.select(1, "b");
        flow.advance();

        assert_eq!(flow.retreat(), Retreat::ReopenedLastStep);
        assert!(!flow.is_complete());
        assert_eq!(flow.current_step(), 1);
        assert!(flow.confirmation().is_none());
        // las selecciones quedan intactas
        assert!(flow.selections().is_selected(1, "b"));
    }

    #[test]
    fn retreat_at_first_step_reports_exit() {
        let mut flow = two_step_flow();
        assert_eq!(flow.retreat(), Retreat::ExitFlow);
        assert_eq!(flow.current_step(), 0);
    }

    #[test]
    fn skip_to_end_bypasses_validation() {
        let mut flow = two_step_flow();
        flow.skip_to_end();
        assert!(flow.is_complete());
        assert!(flow.confirmation().is_some());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut flow = two_step_flow();
        flow.select(0, "red");
        flow.advance();
        flow.select(1, "a");
        flow.skip_to_end();

        flow.reset();
        assert_eq!(flow.current_step(), 0);
        assert!(!flow.is_complete());
        assert!(flow.confirmation().is_none());
        assert!(flow.selections().selected_ids(0).is_empty());
        assert!(flow.selections().selected_ids(1).is_empty());
    }

    #[test]
    fn confirmation_is_deterministic_over_selections() {
        let run = || {
            let mut flow = two_step_flow();
            flow.select(0, "red");
            flow.advance();
            flow.select(1, "b");
            flow.select(1, "c");
            flow.advance();
            flow.confirmation().unwrap().to_string()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn config_errors_fail_at_construction() {
        let err = FlowController::builder().build().unwrap_err();
        assert_eq!(err, FlowConfigError::EmptyFlow);

        let err = FlowController::builder().step(StepDefinition::single("empty", "Sin opciones", vec![]))
                                           .build()
                                           .unwrap_err();
        assert_eq!(err, FlowConfigError::StepWithoutOptions("empty".to_string()));

        let err = FlowController::builder().step(StepDefinition::single("dup",
                                                                        "Opciones repetidas",
                                                                        vec![OptionDef::new("x", "X"),
                                                                             OptionDef::new("x", "X bis")]))
                                           .build()
                                           .unwrap_err();
        assert_eq!(err, FlowConfigError::DuplicateOptionId("dup".to_string(), "x".to_string()));

        let err = build_flow_definition(vec![StepDefinition::single("s", "Uno", vec![OptionDef::new("x", "X")]),
                                            StepDefinition::single("s", "Dos", vec![OptionDef::new("y", "Y")])])
            .unwrap_err();
        assert_eq!(err, FlowConfigError::DuplicateStepId("s".to_string()));
    }
}
