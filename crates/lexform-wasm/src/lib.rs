//! WASM bindings for legal text and procedure forms.
//!
//! This crate exposes OCR field extraction and form schema generation to the
//! browser admin UI.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use lexform_core::{
    Catalog, FieldEditor, FieldUpdate, FormValues, MoveDirection, TemplateFamily,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_family(family: &str) -> Result<TemplateFamily, JsValue> {
    family
        .parse()
        .map_err(|e: lexform_core::LexformError| JsValue::from_str(&e.to_string()))
}

/// Extract legal text fields from OCR text.
#[wasm_bindgen]
pub fn extract_legal_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&lexform_core::extract_legal_text_data(text))
}

/// Extract procedure fields from OCR text.
#[wasm_bindgen]
pub fn extract_procedure(text: &str) -> Result<JsValue, JsValue> {
    to_js(&lexform_core::extract_procedure_data(text))
}

/// Form values to prefill a legal text form with.
#[wasm_bindgen]
pub fn prefill_legal_text(text: &str) -> Result<JsValue, JsValue> {
    let mut values = FormValues::new();
    values.apply_legal_text(&lexform_core::extract_legal_text_data(text));
    to_js(&values)
}

/// Form values to prefill a procedure form with.
#[wasm_bindgen]
pub fn prefill_procedure(text: &str) -> Result<JsValue, JsValue> {
    let mut values = FormValues::new();
    values.apply_procedure(&lexform_core::extract_procedure_data(text));
    to_js(&values)
}

/// Field list of a built-in catalog template. Unknown templates give `[]`.
#[wasm_bindgen]
pub fn generate_fields(family: &str, template: &str) -> Result<JsValue, JsValue> {
    let family = parse_family(family)?;
    to_js(&lexform_core::generate_fields(family, template, Catalog::builtin()))
}

/// One field per non-blank line of OCR text.
#[wasm_bindgen]
pub fn parse_text_to_form_fields(text: &str) -> Result<JsValue, JsValue> {
    to_js(&lexform_core::parse_text_to_form_fields(text))
}

/// Templates of a family in the built-in catalog.
#[wasm_bindgen]
pub fn list_templates(family: &str) -> Result<JsValue, JsValue> {
    let family = parse_family(family)?;
    to_js(&Catalog::builtin().templates(family))
}

/// Form generator state for the field editor.
#[wasm_bindgen]
pub struct FormGenerator {
    catalog: Catalog,
    editor: FieldEditor,
}

#[wasm_bindgen]
impl FormGenerator {
    /// Create a generator on the built-in catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::builtin().clone(),
            editor: FieldEditor::default(),
        }
    }

    /// Create a generator on a catalog given as JSON.
    #[wasm_bindgen(js_name = withCatalog)]
    pub fn with_catalog(json: &str) -> Result<FormGenerator, JsValue> {
        let catalog = Catalog::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            catalog,
            editor: FieldEditor::default(),
        })
    }

    /// Replace the fields with those of a template.
    #[wasm_bindgen]
    pub fn generate(&mut self, family: &str, template: &str) -> Result<JsValue, JsValue> {
        let family = parse_family(family)?;
        self.editor = FieldEditor::new(lexform_core::generate_fields(family, template, &self.catalog));
        self.fields()
    }

    /// Replace the fields with those derived from OCR text.
    #[wasm_bindgen(js_name = generateFromText)]
    pub fn generate_from_text(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.editor = FieldEditor::new(lexform_core::parse_text_to_form_fields(text));
        self.fields()
    }

    #[wasm_bindgen]
    pub fn fields(&self) -> Result<JsValue, JsValue> {
        to_js(&self.editor.fields())
    }

    #[wasm_bindgen(js_name = addField)]
    pub fn add_field(&mut self) -> String {
        self.editor.add_custom_field()
    }

    /// Apply a partial update (`{label, type, required, ...}`) to a field.
    #[wasm_bindgen(js_name = updateField)]
    pub fn update_field(&mut self, id: &str, update: JsValue) -> Result<bool, JsValue> {
        let update: FieldUpdate = serde_wasm_bindgen::from_value(update)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.editor.update_field(id, &update))
    }

    #[wasm_bindgen(js_name = removeField)]
    pub fn remove_field(&mut self, id: &str) -> bool {
        self.editor.remove_field(id).is_some()
    }

    #[wasm_bindgen(js_name = duplicateField)]
    pub fn duplicate_field(&mut self, id: &str) -> Option<String> {
        self.editor.duplicate_field(id)
    }

    /// Move a field one step; `up` selects the direction.
    #[wasm_bindgen(js_name = moveField)]
    pub fn move_field(&mut self, id: &str, up: bool) -> bool {
        let direction = if up { MoveDirection::Up } else { MoveDirection::Down };
        self.editor.move_field(id, direction)
    }
}

impl Default for FormGenerator {
    fn default() -> Self {
        Self::new()
    }
}
