//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the matching engine to AI assistants over stdio. Every tool
//! delegates to `resume-match-core`; this module only validates input size,
//! serializes reports and maps errors.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use resume_match_core::text::{DEFAULT_KEYWORD_COUNT, extract_keywords};
use resume_match_core::{
    AnalysisError, InputPolicy, Vocabulary, analyze_ats_compliance, ats, run_full_analysis,
    similarity, skills,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `extract_skills` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExtractSkillsParams {
    /// Resume or job description text.
    pub text: String,
}

/// Parameters for the `match_score` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct MatchScoreParams {
    /// Resume text.
    pub resume: String,
    /// Job description text.
    pub job_description: String,
}

/// Parameters for the `check_ats` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckAtsParams {
    /// Resume text.
    pub resume: String,
    /// Include general ATS tips in the response.
    #[serde(default)]
    pub include_tips: bool,
}

/// Parameters for the `extract_keywords` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExtractKeywordsParams {
    /// Text to scan.
    pub text: String,
    /// Number of keywords to return (default 10).
    pub top: Option<usize>,
}

/// Parameters for the `analyze_resume` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeResumeParams {
    /// Resume text.
    pub resume: String,
    /// Job description text.
    pub job_description: String,
}

#[derive(Serialize)]
struct SkillsResponse<'a> {
    technical: skills::SkillSet,
    soft: skills::SkillSet,
    by_category: std::collections::BTreeMap<skills::SkillCategory, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

#[derive(Serialize)]
struct AtsResponse {
    #[serde(flatten)]
    result: resume_match_core::AtsResult,
    action_verbs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tips: Option<&'static [&'static str]>,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// MCP server exposing resume analysis to AI assistants.
#[derive(Clone)]
pub struct ProjectServer {
    vocab: Arc<Vocabulary>,
    policy: InputPolicy,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(
            Arc::new(Vocabulary::standard().clone()),
            InputPolicy::default(),
            Some(resume_match_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

impl ProjectServer {
    /// Reject text larger than the configured input limit.
    fn check_size(&self, field: &str, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("{field} too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server that analyzes with `vocab` and validates with `policy`.
    pub fn new(vocab: Arc<Vocabulary>, policy: InputPolicy, max_input_bytes: Option<usize>) -> Self {
        Self {
            vocab,
            policy,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// List known skills in a text.
    #[tool(
        description = "Extract known technical and soft skills from text, grouped by category."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn extract_skills(
        &self,
        Parameters(params): Parameters<ExtractSkillsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "extract_skills", "executing MCP tool");
        self.check_size("text", &params.text)?;

        let technical = skills::extract_technical_skills(&self.vocab, &params.text);
        let soft = skills::extract_soft_skills(&self.vocab, &params.text);
        let all: skills::SkillSet = technical.iter().chain(soft.iter()).collect();
        let by_category = skills::group_skills_by_category(&self.vocab, all.iter());
        let note = (technical.is_empty() && soft.is_empty()).then_some("no known skills found");

        tracing::info!(
            tool = "extract_skills",
            technical = technical.len(),
            soft = soft.len(),
            "MCP tool completed"
        );
        to_json(&SkillsResponse {
            technical,
            soft,
            by_category,
            note,
        })
    }

    /// Score a resume against a job description.
    #[tool(
        description = "Compute the 0-100 match score between a resume and a job description, with its category."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn match_score(
        &self,
        Parameters(params): Parameters<MatchScoreParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "match_score", "executing MCP tool");
        self.check_size("resume", &params.resume)?;
        self.check_size("job_description", &params.job_description)?;

        let result = similarity::score_result(similarity::calculate_match_score(
            &params.resume,
            &params.job_description,
        ));

        tracing::info!(
            tool = "match_score",
            score = result.match_score,
            "MCP tool completed"
        );
        to_json(&result)
    }

    /// Check a resume for ATS compliance.
    #[tool(
        description = "Score a resume for ATS compliance (headers, glyphs, action verbs, contact info, metrics, length) and list the issues."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_ats(
        &self,
        Parameters(params): Parameters<CheckAtsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_ats", tips = params.include_tips, "executing MCP tool");
        self.check_size("resume", &params.resume)?;

        let result = analyze_ats_compliance(&self.vocab, &params.resume);
        let action_verbs = ats::extract_action_verbs(&self.vocab, &params.resume);

        tracing::info!(tool = "check_ats", score = result.score, "MCP tool completed");
        to_json(&AtsResponse {
            result,
            action_verbs,
            tips: params.include_tips.then(ats::ats_tips),
        })
    }

    /// Most frequent content words.
    #[tool(description = "Return the most frequent non-stop-word keywords in text.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn extract_keywords(
        &self,
        Parameters(params): Parameters<ExtractKeywordsParams>,
    ) -> Result<CallToolResult, McpError> {
        let top = params.top.unwrap_or(DEFAULT_KEYWORD_COUNT);
        tracing::debug!(tool = "extract_keywords", top, "executing MCP tool");
        self.check_size("text", &params.text)?;

        let keywords = extract_keywords(&params.text, top);

        tracing::info!(
            tool = "extract_keywords",
            count = keywords.len(),
            "MCP tool completed"
        );
        to_json(&keywords)
    }

    /// Full resume analysis.
    #[tool(
        description = "Full comparison of a resume with a job description: match score, skill gaps, suggestions, and ATS compliance."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_resume(
        &self,
        Parameters(params): Parameters<AnalyzeResumeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_resume", "executing MCP tool");
        self.check_size("resume", &params.resume)?;
        self.check_size("job_description", &params.job_description)?;

        let report = run_full_analysis(
            &params.resume,
            &params.job_description,
            &self.vocab,
            &self.policy,
        )
        .map_err(|e: AnalysisError| McpError::invalid_params(e.to_string(), None))?;

        tracing::info!(
            tool = "analyze_resume",
            score = report.match_score,
            ats = report.ats.score,
            "MCP tool completed"
        );
        to_json(&report)
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_resume for a full resume/job comparison, \
                 or match_score, extract_skills and check_ats for individual checks.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
