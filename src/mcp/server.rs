//! Notebook MCP Server implementation

use anyhow::Result;
use rmcp::{
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, Content, GetPromptRequestParam,
        GetPromptResult, Implementation, ListPromptsResult, ListResourcesResult, ListToolsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
        RawResource, ReadResourceRequestParam, ReadResourceResult, ResourceContents,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::catalog::{NoteResource, PromptDescriptor, RenderedPrompt, ToolDescriptor};
use crate::core::dispatcher::{Notebook, ResourceText};
use crate::core::error::NotebookError;
use crate::core::store::{NoteStore, SqliteNoteStore};

pub const SERVER_NAME: &str = "notebook-server";
pub const SERVER_VERSION: &str = "1.0.0";

/// Notebook MCP Service
pub struct NotebookService<S: ?Sized = SqliteNoteStore> {
    notebook: Notebook<S>,
}

impl<S: ?Sized> Clone for NotebookService<S> {
    fn clone(&self) -> Self {
        Self {
            notebook: self.notebook.clone(),
        }
    }
}

impl<S: NoteStore + ?Sized> NotebookService<S> {
    pub fn new(notebook: Notebook<S>) -> Self {
        Self { notebook }
    }
}

pub(crate) fn resources_result(resources: Vec<NoteResource>) -> ListResourcesResult {
    let resources = resources
        .into_iter()
        .map(|resource| {
            let mut raw = RawResource::new(resource.uri, resource.name);
            raw.description = Some(resource.description);
            raw.mime_type = Some(resource.mime_type.to_string());
            raw.no_annotation()
        })
        .collect();
    ListResourcesResult::with_all_items(resources)
}

pub(crate) fn read_result(contents: Vec<ResourceText>) -> ReadResourceResult {
    let contents = contents
        .into_iter()
        .map(|content| {
            let mut text = ResourceContents::text(content.text, content.uri);
            if let ResourceContents::TextResourceContents { mime_type, .. } = &mut text {
                *mime_type = Some(content.mime_type.to_string());
            }
            text
        })
        .collect();
    ReadResourceResult { contents }
}

pub(crate) fn tools_result(tools: &[ToolDescriptor]) -> ListToolsResult {
    let tools = tools
        .iter()
        .map(|tool| Tool::new(tool.name, tool.description, Arc::new(tool.input_schema.clone())))
        .collect();
    ListToolsResult::with_all_items(tools)
}

pub(crate) fn prompts_result(prompts: &[PromptDescriptor]) -> ListPromptsResult {
    let prompts = prompts
        .iter()
        .map(|prompt| {
            let arguments = prompt
                .arguments
                .iter()
                .map(|arg| PromptArgument {
                    name: arg.name.to_string(),
                    title: None,
                    description: Some(arg.description.to_string()),
                    required: Some(arg.required),
                })
                .collect();
            Prompt::new(prompt.name, Some(prompt.description), Some(arguments))
        })
        .collect();
    ListPromptsResult::with_all_items(prompts)
}

pub(crate) fn prompt_result(prompt: RenderedPrompt) -> GetPromptResult {
    GetPromptResult {
        description: Some(prompt.description.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, prompt.text)],
    }
}

/// Map a notebook error onto a protocol error
pub(crate) fn to_mcp_error(err: NotebookError) -> McpError {
    let message = err.to_string();
    match err {
        NotebookError::NoteOperationFailure(_)
        | NotebookError::ResourceListFailure
        | NotebookError::ResourceReadFailure(_) => McpError::internal_error(message, None),
        NotebookError::InvalidArgument(_)
        | NotebookError::InvalidUri(_)
        | NotebookError::UnknownTool(_)
        | NotebookError::UnknownPrompt(_)
        | NotebookError::NoteAlreadyExists(_)
        | NotebookError::NoteDoesNotExist(_) => McpError::invalid_params(message, None),
    }
}

/// Tool execution failures go back to the client as an error result
pub(crate) fn tool_outcome(
    outcome: Result<String, NotebookError>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(
            err @ (NotebookError::NoteAlreadyExists(_)
            | NotebookError::NoteDoesNotExist(_)
            | NotebookError::NoteOperationFailure(_)),
        ) => Ok(CallToolResult::error(vec![Content::text(err.to_string())])),
        Err(err) => Err(to_mcp_error(err)),
    }
}

impl<S: NoteStore + ?Sized + 'static> ServerHandler for NotebookService<S> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Notebook MCP Server. Notes are exposed as notes:// resources and managed with the create-note and remove-note tools.".to_string()
            ),
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let resources = self.notebook.list_resources().map_err(to_mcp_error)?;
        Ok(resources_result(resources))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let contents = self
            .notebook
            .read_resource(&request.uri)
            .map_err(to_mcp_error)?;
        Ok(read_result(contents))
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(tools_result(self.notebook.list_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tool_outcome(
            self.notebook
                .call_tool(&request.name, request.arguments.as_ref()),
        )
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(prompts_result(self.notebook.list_prompts()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let prompt = self
            .notebook
            .get_prompt(&request.name, request.arguments.as_ref())
            .map_err(to_mcp_error)?;
        Ok(prompt_result(prompt))
    }
}

/// Run the MCP server on stdin/stdout until the stream closes
pub async fn run_mcp_server(db_path: PathBuf) -> Result<()> {
    use tokio::io::{stdin, stdout};

    let store = SqliteNoteStore::open(&db_path)?;
    tracing::info!(db = %db_path.display(), "starting notebook server");

    let service = NotebookService::new(Notebook::new(Arc::new(store)));
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await.inspect_err(|e| {
        tracing::error!(error = %e, "server failed to start");
    })?;
    server.waiting().await?;

    tracing::info!("notebook server stopped");
    Ok(())
}
