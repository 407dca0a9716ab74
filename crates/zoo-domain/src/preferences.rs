//! Asistente de preferencias del trek: duración, intereses y ritmo.
//!
//! La secuencia canónica vive acá, en un solo lugar. Las tablas estáticas
//! traducen el id de duración a la etiqueta mostrada y a la cantidad de
//! paradas sugeridas del recorrido.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use zoo_core::{FlowDefinition, OptionDef, StepDefinition, StepProjection};

use crate::projections::{CountProjection, MappingProjection};

/// Paradas sugeridas por duración de visita.
static DURATION_STOPS: Lazy<IndexMap<String, Value>> = Lazy::new(|| {
    IndexMap::from([("1-2hrs".to_string(), json!(3)),
                    ("3-5hrs".to_string(), json!(6)),
                    ("full-day".to_string(), json!(9))])
});

static DURATION_LABELS: Lazy<IndexMap<String, Value>> = Lazy::new(|| {
    IndexMap::from([("1-2hrs".to_string(), json!("1-2 hours")),
                    ("3-5hrs".to_string(), json!("3-5 hours")),
                    ("full-day".to_string(), json!("Full day"))])
});

static PACE_LABELS: Lazy<IndexMap<String, Value>> = Lazy::new(|| {
    IndexMap::from([("relaxed".to_string(), json!("Relaxed stroll")),
                    ("standard".to_string(), json!("Standard")),
                    ("packed".to_string(), json!("See everything"))])
});

pub fn preference_wizard() -> FlowDefinition {
    FlowDefinition::new(vec![
        StepDefinition::single("duration",
                               "How long is your visit?",
                               vec![OptionDef::new("1-2hrs", "1-2 hours"),
                                    OptionDef::new("3-5hrs", "3-5 hours"),
                                    OptionDef::new("full-day", "Full day")])
            .subtitle("We tailor the route to your time"),
        StepDefinition::multiple("interests",
                                 "What do you want to see?",
                                 vec![OptionDef::new("big-cats", "Big cats"),
                                      OptionDef::new("primates", "Primates"),
                                      OptionDef::new("aquatics", "Aquatics"),
                                      OptionDef::new("birds", "Birds")]),
        StepDefinition::single("pace",
                               "Pick a pace",
                               vec![OptionDef::new("relaxed", "Relaxed stroll"),
                                    OptionDef::new("standard", "Standard"),
                                    OptionDef::new("packed", "See everything")]),
    ])
    .expect("preference wizard definition is valid")
}

/// Proyecciones de la pantalla de resumen del asistente.
pub fn preference_projections() -> Vec<Box<dyn StepProjection>> {
    vec![Box::new(MappingProjection::new(0, "duration_label", DURATION_LABELS.clone())),
         Box::new(MappingProjection::new(0, "total_stops", DURATION_STOPS.clone())),
         Box::new(CountProjection::new(1, "interest_count")),
         Box::new(MappingProjection::new(2, "pace_label", PACE_LABELS.clone()))]
}
