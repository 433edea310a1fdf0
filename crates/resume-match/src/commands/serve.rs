//! Serve command: run the MCP server on stdio.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use resume_match_core::{InputPolicy, Vocabulary};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve MCP requests on stdin/stdout until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    vocab: Vocabulary,
    policy: InputPolicy,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    info!("starting MCP server on stdio");

    let server = ProjectServer::new(Arc::new(vocab), policy, max_input_bytes);
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server stopped")?;

    info!("MCP server shut down");
    Ok(())
}
