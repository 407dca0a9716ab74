use zoo_core::{FlowController, SummaryProjector};
use zoo_domain::{flow_by_name, projections_by_name, FLOW_NAMES};

fn main() {
    // Cargar .env si existe (p. ej. ZOO_VERBOSE)
    let _ = dotenvy::dotenv();
    // CLI mínima: `zoo-cli list` | `zoo-cli run --flow <NAME> [--skip]`
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
        std::process::exit(2);
    }
    match args[1].as_str() {
        "list" => {
            for name in FLOW_NAMES {
                println!("{}", name);
            }
        }
        "run" => {
            let mut flow_name: Option<String> = None;
            let mut skip = false;
            let mut as_json = false;
            let mut i = 2;
            while i < args.len() {
                match args[i].as_str() {
                    "--flow" => {
                        i += 1;
                        if i < args.len() { flow_name = Some(args[i].clone()); }
                    }
                    "--skip" => skip = true,
                    "--json" => as_json = true,
                    _ => {}
                }
                i += 1;
            }
            let Some(name) = flow_name else {
                usage();
                std::process::exit(2);
            };
            run_flow(&name, skip, as_json);
        }
        _ => {
            usage();
            std::process::exit(2);
        }
    }
}

fn usage() {
    eprintln!("uso: zoo-cli list | zoo-cli run --flow <NAME> [--skip] [--json]");
}

/// Camina el flujo de forma guionada: primera opción en pasos `Single`,
/// todas las opciones en `Multiple`; con `--skip` salta directo al final.
fn run_flow(name: &str, skip: bool, as_json: bool) {
    let definition = match flow_by_name(name) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("[zoo run] {}", e);
            std::process::exit(4);
        }
    };
    let projections = projections_by_name(name).expect("el catálogo tiene proyecciones para cada flujo");

    let mut flow = match FlowController::new(definition) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("[zoo run] definición inválida: {}", e);
            std::process::exit(5);
        }
    };

    let verbose = std::env::var("ZOO_VERBOSE").is_ok();
    if skip {
        flow.skip_to_end();
    } else {
        while !flow.is_complete() {
            let step = flow.current_step_def().clone();
            if verbose {
                println!("-- {} ({})", step.prompt.title, step.id);
            }
            match step.selection_mode {
                zoo_core::SelectionMode::Single => {
                    flow.select(flow.current_step(), &step.options[0].id);
                }
                zoo_core::SelectionMode::Multiple => {
                    for opt in &step.options {
                        flow.select(flow.current_step(), &opt.id);
                    }
                }
            }
            if !flow.advance() {
                // no debería ocurrir con la caminata guionada
                eprintln!("[zoo run] avance bloqueado en el paso {}", flow.current_step());
                std::process::exit(5);
            }
        }
    }

    let summary = SummaryProjector::with_projections(projections).project(flow.selections());
    if as_json {
        let out = serde_json::json!({
            "flow": name,
            "trace": flow.event_variants().join(""),
            "summary": summary,
            "confirmation": flow.confirmation(),
        });
        println!("{}", serde_json::to_string_pretty(&out).expect("resumen serializable"));
        return;
    }
    println!("flow: {}", name);
    println!("trace: {}", flow.event_variants().join(""));
    for item in &summary.items {
        println!("{}: {}", item.field, item.value);
    }
    match flow.confirmation() {
        Some(code) => println!("confirmation: {}", code),
        None => println!("confirmation: (none)"),
    }
}
