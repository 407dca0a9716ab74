use zoo_core::{replay, FlowController, OptionDef, StepDefinition};

fn demo_flow() -> FlowController {
    FlowController::builder()
        .step(StepDefinition::single("duration",
                                     "How long is your visit?",
                                     vec![OptionDef::new("1-2hrs", "1-2 hours"),
                                          OptionDef::new("3-5hrs", "3-5 hours")]))
        .step(StepDefinition::multiple("interests",
                                       "What do you want to see?",
                                       vec![OptionDef::new("big-cats", "Big cats"),
                                            OptionDef::new("primates", "Primates"),
                                            OptionDef::new("aquatics", "Aquatics")]))
        .step(StepDefinition::single("pace",
                                     "Pick a pace",
                                     vec![OptionDef::new("relaxed", "Relaxed"),
                                          OptionDef::new("packed", "Packed")]))
        .build()
        .expect("valid flow")
}

/// El snapshot reconstruido por replay debe coincidir con el estado vivo
/// después de cada operación.
fn assert_snapshot_matches(flow: &FlowController) {
    let snap = replay(&flow.events(), flow.definition().len());
    assert_eq!(snap.current_step, flow.current_step());
    assert_eq!(snap.is_complete, flow.is_complete());
    assert_eq!(snap.last_direction, flow.last_direction());
    assert_eq!(snap.confirmation.as_deref(), flow.confirmation());
    for idx in 0..flow.definition().len() {
        assert_eq!(snap.selections[idx],
                   *flow.selections().selected(idx).unwrap(),
                   "slot {} difiere",
                   idx);
    }
}

#[test]
fn replay_tracks_a_full_session() {
    let mut flow = demo_flow();
    assert_snapshot_matches(&flow);

    flow.select(0, "3-5hrs");
    assert_snapshot_matches(&flow);
    flow.advance();
    assert_snapshot_matches(&flow);

    flow.select(1, "big-cats");
    flow.select(1, "aquatics");
    flow.select(1, "big-cats"); // toggle off
    assert_snapshot_matches(&flow);
    flow.advance();

    flow.retreat();
    assert_snapshot_matches(&flow);
    flow.advance();

    flow.select(2, "relaxed");
    flow.advance();
    assert!(flow.is_complete());
    assert_snapshot_matches(&flow);

    flow.retreat();
    assert_snapshot_matches(&flow);
    flow.advance();
    assert_snapshot_matches(&flow);

    flow.reset();
    assert_snapshot_matches(&flow);
}

#[test]
fn replay_counts_repeated_completions() {
    let mut flow = demo_flow();
    flow.skip_to_end();
    flow.retreat();
    flow.select(2, "packed");
    flow.advance();

    let snap = replay(&flow.events(), flow.definition().len());
    assert_eq!(snap.completions, 2);
    assert!(snap.is_complete);
}

#[test]
fn rejected_operations_leave_no_trace_in_the_log() {
    use zoo_core::EventStore;

    let mut flow = demo_flow();
    let baseline = flow.event_store().count(flow.flow_id());

    flow.advance(); // sin selección
    flow.retreat(); // frontera de salida
    flow.select(0, "nope"); // opción desconocida
    flow.select(9, "1-2hrs"); // paso desconocido

    assert_eq!(flow.event_store().count(flow.flow_id()), baseline);
}
