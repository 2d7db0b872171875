//! Math Helper CLI
//!
//! - `repl` (default): interactive prompt
//! - `ask`: one-shot advice, as text or JSON
//! - `serve`: Axum HTTP + WebSocket API
//!
//! Important env variables:
//!   MATH_HELPER_CONFIG : path to TOML config (search engines + server port)
//!   PORT               : u16, overrides config for `serve`
//!   LOG_LEVEL          : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT         : "pretty" (default) or "json"

use std::{io::Write, net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use math_helper::config::load_config_from_env;
use math_helper::render::render_advice;
use math_helper::routes::build_router;
use math_helper::state::AppState;
use math_helper::{repl, telemetry, Advisor};

#[derive(Parser)]
#[command(name = "math-helper", version, about = "Step-by-step guidance and search links for math problems")]
struct Cli {
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
  /// Interactive prompt (default)
  Repl,
  /// Advise on a single problem and exit
  Ask {
    /// The problem text; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    problem: Vec<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
  },
  /// Serve the HTTP + WebSocket API
  Serve {
    #[arg(long)]
    port: Option<u16>,
  },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  match cli.command.unwrap_or(Command::Repl) {
    Command::Repl => {
      telemetry::init_tracing(telemetry::CLI_DEFAULT_FILTER);
      let advisor = Advisor::from_config(&load_config_from_env())?;
      let stdin = tokio::io::BufReader::new(tokio::io::stdin());
      let interrupt = repl::interrupted(tokio::signal::ctrl_c());
      repl::run(&advisor, stdin, &mut std::io::stdout(), interrupt).await?;
    }
    Command::Ask { problem, json } => {
      telemetry::init_tracing(telemetry::CLI_DEFAULT_FILTER);
      let advisor = Advisor::from_config(&load_config_from_env())?;
      let advice = advisor.advise(&problem.join(" "));
      let mut out = std::io::stdout().lock();
      if json {
        serde_json::to_writer_pretty(&mut out, &advice)?;
        writeln!(out)?;
      } else {
        render_advice(&advice, &mut out)?;
      }
    }
    Command::Serve { port } => {
      telemetry::init_tracing(telemetry::SERVER_DEFAULT_FILTER);
      serve(port).await?;
    }
  }
  Ok(())
}

async fn serve(port: Option<u16>) -> anyhow::Result<()> {
  let state = Arc::new(AppState::from_env());

  // --port, then PORT, then config.
  let port = port
    .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()))
    .unwrap_or(state.config.server.port);
  let addr = SocketAddr::from(([0, 0, 0, 0], port));

  let app = build_router(state);
  let listener = TcpListener::bind(addr).await.with_context(|| format!("binding {addr}"))?;
  info!(target: "math_helper", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(repl::interrupted(tokio::signal::ctrl_c()))
    .await?;
  Ok(())
}
