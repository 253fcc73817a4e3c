//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use promptmaster::domain::{PromptRecord, Template, UploadAcknowledgement};

use crate::models::{
    ErrorMessage, ProcessErrorResponse, ProcessPromptRequest, ProcessPromptResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::templates::list_templates,
        super::process::process_prompt,
        super::history::list_prompts,
        super::history::get_prompt,
        super::upload::upload_file,
    ),
    info(
        title = "PromptMaster API",
        version = "0.1.0",
        description = "Prompt engineering workbench: strategy templates, upstream forwarding, and in-memory prompt history.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Templates", description = "Prompting strategy catalog"),
        (name = "Prompts", description = "Prompt processing and history"),
        (name = "Upload", description = "Context document upload"),
    ),
    components(
        schemas(
            Template,
            PromptRecord,
            UploadAcknowledgement,
            ProcessPromptRequest,
            ProcessPromptResponse,
            ProcessErrorResponse,
            ErrorMessage,
        )
    )
)]
pub struct ApiDoc;
