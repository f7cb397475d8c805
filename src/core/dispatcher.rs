//! Routes capability requests to the note store
//!
//! Holds no state between requests apart from the store handle. Domain
//! conflicts propagate unchanged; every other failure is logged with its
//! cause and replaced by a generic, operation-scoped error.

use serde_json::{Map, Value};
use std::sync::Arc;

use super::catalog::{
    self, NoteResource, NoteTool, PromptDescriptor, RenderedPrompt, ToolDescriptor,
};
use super::error::NotebookError;
use super::note::{is_blank, name_from_uri, MIME_TEXT_PLAIN};
use super::store::NoteStore;

/// Text content of a read resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceText {
    pub uri: String,
    pub mime_type: &'static str,
    pub text: String,
}

pub struct Notebook<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for Notebook<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: NoteStore + ?Sized> Notebook<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_resources(&self) -> Result<Vec<NoteResource>, NotebookError> {
        catalog::list_resources(self.store.as_ref())
    }

    /// Read `notes://<name>[/...]`.
    ///
    /// A missing note yields an empty list rather than an error.
    pub fn read_resource(&self, uri: &str) -> Result<Vec<ResourceText>, NotebookError> {
        tracing::debug!(uri, "reading resource");
        let name = name_from_uri(uri).ok_or_else(|| NotebookError::InvalidUri(uri.to_string()))?;

        let notes = self.store.get(name).map_err(|e| {
            tracing::error!(uri, error = %e, "could not read resource");
            NotebookError::ResourceReadFailure(uri.to_string())
        })?;

        Ok(notes
            .into_iter()
            .map(|note| ResourceText {
                uri: uri.to_string(),
                mime_type: MIME_TEXT_PLAIN,
                text: note.description,
            })
            .collect())
    }

    pub fn list_tools(&self) -> &'static [ToolDescriptor] {
        catalog::list_tools()
    }

    pub fn list_prompts(&self) -> &'static [PromptDescriptor] {
        catalog::list_prompts()
    }

    pub fn get_prompt(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<RenderedPrompt, NotebookError> {
        tracing::info!(prompt = name, "loading prompt");
        catalog::get_prompt(name, arguments)
    }

    /// Invoke a tool by name and return its confirmation text
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<&Map<String, Value>>,
    ) -> Result<String, NotebookError> {
        let name = name.trim();
        tracing::info!(tool = name, "calling tool");

        match NoteTool::from_name(name) {
            Some(NoteTool::CreateNote) => {
                let note_name = string_field(arguments, "name")?;
                let description = string_field(arguments, "description")?;
                self.create_note(note_name, description)
            }
            Some(NoteTool::RemoveNote) => {
                let note_name = string_field(arguments, "name")?;
                self.remove_note(note_name)
            }
            None => Err(NotebookError::UnknownTool(name.to_string())),
        }
    }

    /// Create a note. Blank `name` or `description` is rejected before any store access.
    pub fn create_note(&self, name: &str, description: &str) -> Result<String, NotebookError> {
        ensure_not_blank(name, "name")?;
        ensure_not_blank(description, "description")?;

        let existing = self.store.get(name).map_err(|e| {
            tracing::error!(note = name, error = %e, "could not create note");
            NotebookError::create_failed(name)
        })?;
        if !existing.is_empty() {
            return Err(NotebookError::NoteAlreadyExists(name.to_string()));
        }

        self.store.create(name, description).map_err(|e| {
            tracing::error!(note = name, error = %e, "could not create note");
            NotebookError::create_failed(name)
        })?;

        tracing::info!(note = name, "note created");
        Ok(format!("Note {} created.", name))
    }

    pub fn remove_note(&self, name: &str) -> Result<String, NotebookError> {
        ensure_not_blank(name, "name")?;

        let existing = self.store.get(name).map_err(|e| {
            tracing::error!(note = name, error = %e, "could not remove note");
            NotebookError::remove_failed(name)
        })?;
        if existing.is_empty() {
            return Err(NotebookError::NoteDoesNotExist(name.to_string()));
        }

        self.store.remove(name).map_err(|e| {
            tracing::error!(note = name, error = %e, "could not remove note");
            NotebookError::remove_failed(name)
        })?;

        tracing::info!(note = name, "note removed");
        Ok(format!("Note {} removed.", name))
    }
}

/// String value of a tool argument; blankness is checked by the operation
fn string_field<'a>(
    arguments: Option<&'a Map<String, Value>>,
    key: &str,
) -> Result<&'a str, NotebookError> {
    match arguments.and_then(|args| args.get(key)) {
        None | Some(Value::Null) => Err(NotebookError::InvalidArgument(format!(
            "{} is required",
            key
        ))),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(not_a_string(key)),
    }
}

fn ensure_not_blank(value: &str, key: &str) -> Result<(), NotebookError> {
    if is_blank(value) {
        return Err(not_a_string(key));
    }
    Ok(())
}

fn not_a_string(key: &str) -> NotebookError {
    NotebookError::InvalidArgument(format!("{} must be a non-empty string", key))
}
