//! Capability catalog
//!
//! Static descriptions of the notebook tools and prompts, built once per
//! process.

use lazy_static::lazy_static;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::NotebookError;
use super::note::{is_blank, MIME_TEXT_PLAIN};
use super::store::NoteStore;

/// The two operations the notebook exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTool {
    CreateNote,
    RemoveNote,
}

impl NoteTool {
    pub const ALL: [NoteTool; 2] = [NoteTool::CreateNote, NoteTool::RemoveNote];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateNote => "create-note",
            Self::RemoveNote => "remove-note",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }
}

impl std::fmt::Display for NoteTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments of the create-note tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateNoteArgs {
    #[schemars(description = "Name of the note to create")]
    pub name: String,
    #[schemars(description = "Description of contents of note")]
    pub description: String,
}

/// Arguments of the remove-note tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RemoveNoteArgs {
    #[schemars(description = "Name of the note to remove")]
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct PromptArgumentDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct PromptDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<PromptArgumentDescriptor>,
}

/// Readable view of a stored note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteResource {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: &'static str,
}

/// A prompt rendered into a single user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub description: &'static str,
    pub text: String,
}

fn input_schema<T: JsonSchema>() -> Map<String, Value> {
    let schema = schemars::schema_for!(T);
    schema.as_object().cloned().unwrap_or_default()
}

lazy_static! {
    static ref TOOLS: Vec<ToolDescriptor> = vec![
        ToolDescriptor {
            name: NoteTool::CreateNote.as_str(),
            description: "Creates a new note",
            input_schema: input_schema::<CreateNoteArgs>(),
        },
        ToolDescriptor {
            name: NoteTool::RemoveNote.as_str(),
            description: "Removes an existing note",
            input_schema: input_schema::<RemoveNoteArgs>(),
        },
    ];
    static ref PROMPTS: Vec<PromptDescriptor> = vec![
        PromptDescriptor {
            name: NoteTool::CreateNote.as_str(),
            description: "Explain how do I create a effective note.",
            arguments: vec![
                PromptArgumentDescriptor {
                    name: "name",
                    description: "Name of the note to create",
                    required: true,
                },
                PromptArgumentDescriptor {
                    name: "description",
                    description: "Description of contents of note",
                    required: true,
                },
            ],
        },
        PromptDescriptor {
            name: NoteTool::RemoveNote.as_str(),
            description: "Explain how do I remove an existing note.",
            arguments: vec![PromptArgumentDescriptor {
                name: "name",
                description: "Name of the note to remove",
                required: true,
            }],
        },
    ];
}

pub fn list_tools() -> &'static [ToolDescriptor] {
    &TOOLS
}

pub fn list_prompts() -> &'static [PromptDescriptor] {
    &PROMPTS
}

/// String value of `key`, or "" when absent or not a string
fn string_arg<'a>(arguments: Option<&'a Map<String, Value>>, key: &str) -> &'a str {
    arguments
        .and_then(|args| args.get(key))
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// Render the instruction text for a prompt
pub fn get_prompt(
    name: &str,
    arguments: Option<&Map<String, Value>>,
) -> Result<RenderedPrompt, NotebookError> {
    let tool =
        NoteTool::from_name(name).ok_or_else(|| NotebookError::UnknownPrompt(name.to_string()))?;

    match tool {
        NoteTool::CreateNote => {
            let note_name = string_arg(arguments, "name");
            let description = string_arg(arguments, "description");
            if is_blank(note_name) || is_blank(description) {
                return Err(NotebookError::InvalidArgument(
                    "name and description are required".to_string(),
                ));
            }
            Ok(RenderedPrompt {
                description: "Explain how do I create a effective note.",
                text: format!(
                    "Create a note or create a new note {} add {}.",
                    note_name, description
                ),
            })
        }
        NoteTool::RemoveNote => {
            let note_name = string_arg(arguments, "name");
            if is_blank(note_name) {
                return Err(NotebookError::InvalidArgument("Name is required.".to_string()));
            }
            Ok(RenderedPrompt {
                description: "Explain how do I remove an existing note.",
                text: format!("Remove note {}", note_name),
            })
        }
    }
}

/// One resource per stored note
pub fn list_resources<S: NoteStore + ?Sized>(
    store: &S,
) -> Result<Vec<NoteResource>, NotebookError> {
    let notes = store.list().map_err(|e| {
        tracing::error!(error = %e, "could not load resources");
        NotebookError::ResourceListFailure
    })?;

    Ok(notes
        .into_iter()
        .map(|note| NoteResource {
            uri: note.uri(),
            name: note.name,
            description: note.description,
            mime_type: MIME_TEXT_PLAIN,
        })
        .collect())
}
