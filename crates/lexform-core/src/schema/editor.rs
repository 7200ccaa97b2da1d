//! Editing of a generated field list.

use crate::models::field::{FieldDescriptor, FieldKind, FieldUpdate};

/// Direction for [`FieldEditor::move_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Holds a field list while it is customised in the form generator.
///
/// Every edit replaces descriptors with new values; descriptors handed out
/// earlier are never changed.
#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    fields: Vec<FieldDescriptor>,
    next_id: usize,
}

impl FieldEditor {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields, next_id: 0 }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<FieldDescriptor> {
        self.fields
    }

    pub fn get(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Append a blank text field and return its id.
    pub fn add_custom_field(&mut self) -> String {
        let id = self.fresh_id("custom");
        self.fields.push(FieldDescriptor {
            id: id.clone(),
            name: "nouveau_champ".to_string(),
            label: "Nouveau Champ".to_string(),
            kind: FieldKind::Text,
            required: false,
            placeholder: "Entrez votre valeur".to_string(),
            description: String::new(),
            options: None,
        });
        id
    }

    /// Replace the field `id` with an updated copy. Returns false for an unknown id.
    pub fn update_field(&mut self, id: &str, update: &FieldUpdate) -> bool {
        match self.position(id) {
            Some(index) => {
                self.fields[index] = self.fields[index].with_update(update);
                true
            }
            None => false,
        }
    }

    pub fn remove_field(&mut self, id: &str) -> Option<FieldDescriptor> {
        self.position(id).map(|index| self.fields.remove(index))
    }

    /// Append a copy of the field `id` and return the copy's id.
    pub fn duplicate_field(&mut self, id: &str) -> Option<String> {
        let source = self.get(id)?.clone();
        let copy_id = self.fresh_id("copy");
        self.fields.push(FieldDescriptor {
            id: copy_id.clone(),
            name: format!("{}_copie", source.name),
            label: format!("{} (Copie)", source.label),
            ..source
        });
        Some(copy_id)
    }

    /// Swap the field `id` with its neighbour. Returns false at the list
    /// bounds or for an unknown id.
    pub fn move_field(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.fields.len() => index + 1,
            _ => return false,
        };
        self.fields.swap(index, target);
        true
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{prefix}_{}", self.next_id);
            self.next_id += 1;
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
