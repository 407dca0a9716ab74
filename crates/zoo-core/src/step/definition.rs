use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Modo de selección de un paso.
///
/// `Single`: elegir una opción reemplaza la anterior (el conjunto queda con
/// 0 o 1 elemento). `Multiple`: elegir conmuta la pertenencia al conjunto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode { Single, Multiple }

/// Título y subtítulo mostrados para un paso. Opacos para el motor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub title: String,
    pub subtitle: Option<String>,
}

impl Prompt {
    pub fn new(title: &str) -> Self {
        Self { title: title.to_string(), subtitle: None }
    }

    pub fn with_subtitle(title: &str, subtitle: &str) -> Self {
        Self { title: title.to_string(), subtitle: Some(subtitle.to_string()) }
    }
}

/// Una opción elegible dentro de un paso. `metadata` es JSON auxiliar que el
/// motor no interpreta (precios, etiquetas secundarias, etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDef {
    pub id: String,
    pub label: String,
    pub metadata: Option<Value>,
}

impl OptionDef {
    pub fn new(id: &str, label: &str) -> Self {
        Self { id: id.to_string(), label: label.to_string(), metadata: None }
    }

    pub fn with_metadata(id: &str, label: &str, metadata: Value) -> Self {
        Self { id: id.to_string(), label: label.to_string(), metadata: Some(metadata) }
    }
}

/// Descriptor inmutable de un paso del flujo.
///
/// La posición ordinal del paso es su índice dentro de
/// `FlowDefinition::steps`; una vez construida la definición no se insertan
/// ni eliminan pasos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Identificador estable y único dentro del flujo.
    pub id: String,
    /// Texto de presentación. El motor nunca lo interpreta.
    pub prompt: Prompt,
    pub selection_mode: SelectionMode,
    /// Opciones en orden de presentación; ids únicos dentro del paso.
    pub options: Vec<OptionDef>,
}

impl StepDefinition {
    pub fn single(id: &str, title: &str, options: Vec<OptionDef>) -> Self {
        Self { id: id.to_string(),
               prompt: Prompt::new(title),
               selection_mode: SelectionMode::Single,
               options }
    }

    pub fn multiple(id: &str, title: &str, options: Vec<OptionDef>) -> Self {
        Self { id: id.to_string(),
               prompt: Prompt::new(title),
               selection_mode: SelectionMode::Multiple,
               options }
    }

    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.prompt.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }

    pub fn option(&self, option_id: &str) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.id == option_id)
    }
}
