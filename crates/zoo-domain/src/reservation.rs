//! Flujo de reserva de mesa del restaurante del parque.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use zoo_core::{FlowDefinition, OptionDef, StepDefinition, StepProjection};

use crate::projections::{CountProjection, MappingProjection};

static SLOT_LABELS: Lazy<IndexMap<String, Value>> = Lazy::new(|| {
    IndexMap::from([("terrace".to_string(), json!("Terrace")),
                    ("indoor".to_string(), json!("Indoor hall")),
                    ("window".to_string(), json!("By the window"))])
});

pub fn reservation_flow() -> FlowDefinition {
    FlowDefinition::new(vec![
        StepDefinition::single("datetime",
                               "When would you like to come?",
                               vec![OptionDef::new("today-17", "Today 17:00"),
                                    OptionDef::new("tomorrow-11", "Tomorrow 11:00"),
                                    OptionDef::new("tomorrow-15", "Tomorrow 15:00")]),
        StepDefinition::single("slot",
                               "Pick a table area",
                               vec![OptionDef::new("terrace", "Terrace"),
                                    OptionDef::new("indoor", "Indoor hall"),
                                    OptionDef::new("window", "By the window")]),
        StepDefinition::multiple("terms",
                                 "Accept the terms",
                                 vec![OptionDef::new("data-use", "Data use"),
                                      OptionDef::new("cancellation", "Cancellation policy"),
                                      OptionDef::new("allergens", "Allergen notice")])
            .subtitle("All three notices apply to every booking"),
        // pasos sintéticos de confirmación y cierre, una opción cada uno
        StepDefinition::single("confirm", "Confirm your booking", vec![OptionDef::new("confirm", "Confirm")]),
        StepDefinition::single("done", "All set", vec![OptionDef::new("ack", "Got it")]),
    ])
    .expect("reservation flow definition is valid")
}

pub fn reservation_projections() -> Vec<Box<dyn StepProjection>> {
    vec![Box::new(MappingProjection::new(1, "table_area", SLOT_LABELS.clone())),
         Box::new(CountProjection::new(2, "terms_accepted"))]
}
