//! Flujo de reserva del safari: día, salida, vehículo y extras.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use zoo_core::{FlowDefinition, OptionDef, StepDefinition, StepProjection};

use crate::projections::{CountProjection, MappingProjection};

static VEHICLE_LABELS: Lazy<IndexMap<String, Value>> = Lazy::new(|| {
    IndexMap::from([("jeep".to_string(), json!("Open jeep")),
                    ("truck".to_string(), json!("Canopy truck")),
                    ("walking".to_string(), json!("Walking safari"))])
});

pub fn safari_flow() -> FlowDefinition {
    FlowDefinition::new(vec![
        StepDefinition::single("date",
                               "Pick a day",
                               vec![OptionDef::new("sat", "Saturday"),
                                    OptionDef::new("sun", "Sunday"),
                                    OptionDef::new("mon", "Monday")]),
        StepDefinition::single("departure",
                               "Pick a departure",
                               vec![OptionDef::new("sunrise", "Sunrise"),
                                    OptionDef::new("midday", "Midday"),
                                    OptionDef::new("sunset", "Sunset")])
            .subtitle("Sunrise rides see the most activity"),
        StepDefinition::single("vehicle",
                               "How do you want to ride?",
                               vec![OptionDef::with_metadata("jeep", "Open jeep", json!({"seats": 6})),
                                    OptionDef::with_metadata("truck", "Canopy truck", json!({"seats": 18})),
                                    OptionDef::with_metadata("walking", "Walking safari", json!({"seats": 8}))]),
        StepDefinition::multiple("extras",
                                 "Anything extra?",
                                 vec![OptionDef::new("photographer", "Photographer"),
                                      OptionDef::new("meal", "Bush meal"),
                                      OptionDef::new("binoculars", "Binoculars")]),
    ])
    .expect("safari flow definition is valid")
}

pub fn safari_projections() -> Vec<Box<dyn StepProjection>> {
    vec![Box::new(MappingProjection::new(2, "vehicle_label", VEHICLE_LABELS.clone())),
         Box::new(CountProjection::new(3, "extras_count"))]
}
