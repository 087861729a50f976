//!  Delulu Airports Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Airports MCP Server Entry Point
//!
//! Serves airport lookup tools over stdio or streamable HTTP.

use anyhow::{Context, Error, Result};
use clap::{Parser, Subcommand};
use delulu_airports_agent::{
    AirportIndex, AirportSearchRequest, ServerStatus, find_airports, lookup_airport, open_index,
};
use rmcp::handler::server::{ServerHandler, tool::ToolRouter, wrapper::Parameters};
use rmcp::service::serve_server;
use rmcp::tool;
use rmcp::tool_router;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "delulu-airports-mcp")]
#[command(
    author,
    version,
    about = "MCP server for airport lookup by IATA code, airport name or city"
)]
struct Args {
    /// JSON airport dataset to serve instead of the bundled one
    #[arg(long, global = true, env = "DELULU_AIRPORTS_FILE")]
    airports_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run MCP server over stdio (for Claude Desktop, etc.)
    Stdio,

    /// Run MCP server over HTTP
    Http {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, default_value = "8080")]
        port: u16,
    },
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct FindAirportsInput {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct GetAirportInput {
    pub code: String,
}

#[derive(Clone)]
pub struct AirportsAgentServer {
    index: Arc<AirportIndex>,
    data_source: Arc<str>,
    tool_router: ToolRouter<Self>,
}

impl AirportsAgentServer {
    pub fn new(index: Arc<AirportIndex>, data_source: impl Into<Arc<str>>) -> Self {
        Self {
            index,
            data_source: data_source.into(),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl AirportsAgentServer {
    #[tool(
        name = "find_airports",
        description = "Find airports by IATA code, airport name or city. Parameters: query (e.g. LAX, Heathrow, New York), limit (1-50, default 10). Results are ranked: exact code, exact name or city, prefix, then substring matches."
    )]
    async fn find_airports(&self, params: Parameters<FindAirportsInput>) -> Result<String, String> {
        let input = params.0;
        let request = AirportSearchRequest::new(&input.query, input.limit)
            .map_err(|e| format!("Invalid airport search: {e}"))?;
        let response = find_airports(&self.index, &request)
            .map_err(|e| format!("Airport search failed: {e}"))?;
        serde_json::to_string(&response).map_err(|e| e.to_string())
    }

    #[tool(
        name = "get_airport",
        description = "Get one airport by its exact IATA code. Parameters: code (3 letters, e.g. NRT)."
    )]
    async fn get_airport(&self, params: Parameters<GetAirportInput>) -> Result<String, String> {
        let hit = lookup_airport(&self.index, &params.0.code)
            .map_err(|e| format!("Airport lookup failed: {e}"))?;
        serde_json::to_string(&hit).map_err(|e| e.to_string())
    }

    #[tool(
        name = "get_server_status",
        description = "Get status and capabilities of the airport lookup server."
    )]
    async fn get_server_status(&self) -> Result<String, String> {
        let status = ServerStatus::online(&*self.data_source, self.index.len());
        serde_json::to_string(&status).map_err(|e| e.to_string())
    }
}

impl ServerHandler for AirportsAgentServer {
    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl Future<Output = Result<rmcp::model::ListToolsResult, rmcp::ErrorData>> + Send + '_
    {
        Box::pin(async move {
            let tools = self.tool_router.list_all();
            tracing::debug!("Returning {} tools", tools.len());
            Ok(rmcp::model::ListToolsResult::with_all_items(tools))
        })
    }

    fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl Future<Output = Result<rmcp::model::CallToolResult, rmcp::ErrorData>> + Send + '_
    {
        tracing::debug!("call_tool {}", request.name);
        let router = self.tool_router.clone();
        let self_clone = self.clone();
        Box::pin(async move {
            let context =
                rmcp::handler::server::tool::ToolCallContext::new(&self_clone, request, context);
            router.call(context).await
        })
    }

    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::V_2025_03_26,
            capabilities: rmcp::model::ServerCapabilities {
                tools: Some(rmcp::model::ToolsCapability::default()),
                ..Default::default()
            },
            server_info: rmcp::model::Implementation::from_build_env(),
            instructions: Some(
                "Resolve free-text places to IATA airport codes with find_airports before searching flights."
                    .to_string(),
            ),
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Ctrl+C received, shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".to_string().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .init();

    let args = Args::parse();
    tracing::debug!("Parsed args: {:?}", args);

    let loaded = open_index(args.airports_file.as_deref())?;
    tracing::info!(
        "Serving {} airports from {}",
        loaded.index.len(),
        loaded.source
    );
    let server = AirportsAgentServer::new(loaded.index, loaded.source);

    match args.command {
        Command::Stdio => {
            eprintln!("Starting MCP server over stdio...");
            let (stdin, stdout) = rmcp::transport::io::stdio();
            let running = serve_server(server, (stdin, stdout))
                .await
                .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
            let reason = running.waiting().await.context("MCP service task failed")?;
            tracing::info!("MCP server stopped: {:?}", reason);
        }
        Command::Http { host, port } => {
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .context("Invalid host:port")?;
            tracing::info!("Starting MCP server over HTTP on {}", addr);
            let session_manager = Arc::new(LocalSessionManager::default());
            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..Default::default()
            };
            let service =
                StreamableHttpService::new(move || Ok(server.clone()), session_manager, config);
            let app = axum::Router::new().nest_service("/mcp", service);
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .context("Failed to bind to address")?;
            tracing::debug!("Listening on {}", addr);
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("HTTP server error")?;
        }
    }

    Ok(())
}
