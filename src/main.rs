//! Binario de validación: camina el asistente de preferencias de punta a
//! punta, verifica el replay y luego corre una cuenta atrás con alcance.

use std::time::Duration;

use zoo_core::{replay, FlowController, Retreat, ScopedTimer, SummaryProjector, Ticker};
use zoo_domain::{preference_projections, preference_wizard};

fn run_preference_walkthrough() {
    println!("== preference wizard ==");
    let mut flow = FlowController::new(preference_wizard()).expect("definición del catálogo válida");

    // el avance está bloqueado hasta elegir duración
    assert!(!flow.advance());
    flow.select(0, "3-5hrs");
    assert!(flow.advance());

    flow.select(1, "big-cats");
    flow.select(1, "aquatics");
    assert!(flow.advance());

    // retroceder y volver no pierde selecciones
    assert_eq!(flow.retreat(), Retreat::SteppedBack);
    assert!(flow.advance());

    flow.select(2, "standard");
    assert!(flow.advance());
    assert!(flow.is_complete());

    let summary = SummaryProjector::with_projections(preference_projections()).project(flow.selections());
    for item in &summary.items {
        println!("  {} = {}", item.field, item.value);
    }
    println!("  confirmation = {}", flow.confirmation().unwrap_or("(none)"));
    println!("  trace = {}", flow.event_variants().join(""));

    // el replay del log reconstruye el mismo estado
    let snap = replay(&flow.events(), flow.definition().len());
    assert_eq!(snap.current_step, flow.current_step());
    assert_eq!(snap.is_complete, flow.is_complete());
    println!("  replay ok ({} completions)", snap.completions);
}

async fn run_timer_demo() {
    println!("== scoped countdown ==");
    let tick_ms: u64 = std::env::var("ZOO_TICK_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(50);

    let (tx, rx) = tokio::sync::oneshot::channel();
    let timer = ScopedTimer::start(Ticker::countdown(3.0, 1.0), Duration::from_millis(tick_ms), move || {
        let _ = tx.send(());
    });

    let mut values = timer.subscribe();
    tokio::spawn(async move {
        while values.changed().await.is_ok() {
            println!("  remaining = {}", *values.borrow());
        }
    });

    let _ = rx.await;
    println!("  countdown complete (value = {})", timer.value());
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    run_preference_walkthrough();
    run_timer_demo().await;
}
