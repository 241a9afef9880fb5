// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Docdeck CLI entrypoint.
//!
//! By default this runs the interactive TUI and serves MCP over streamable HTTP at
//! `http://127.0.0.1:<port>/mcp`.
//!
//! Use `--mcp` to run the MCP server over stdio instead (intended for tool integrations).

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use docdeck::guide::{builtin_guide, Guide};
use docdeck::router::SelectionPolicy;
use docdeck::store::GuideFile;
use docdeck::telemetry::{init_tracing, TracingConfig};
use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use tokio::sync::Mutex;

const DEFAULT_MCP_HTTP_PORT: u16 = 27480;
const DEFAULT_BUILTIN_GUIDE: &str = "utils";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<guide.json>] [--default <section-id>] [--strict] [--debug] [--mcp-http-port <port>]\n  {program} [--guide <guide.json> | --builtin <name>] [--default <section-id>] [--strict] [--debug] [--mcp-http-port <port>]\n  {program} [--guide <guide.json> | --builtin <name>] [--default <section-id>] [--strict] [--debug] --mcp\n  {program} [--guide <guide.json> | --builtin <name>] --export <out.json>\n\nTUI mode (default) serves MCP over streamable HTTP at `http://127.0.0.1:<port>/mcp`.\n--mcp-http-port selects the port (0 = ephemeral; default {DEFAULT_MCP_HTTP_PORT}).\n\nWithout a guide file the built-in `{DEFAULT_BUILTIN_GUIDE}` guide is shown; --builtin picks one of: {}.\n--default overrides the section selected at start.\n--strict rejects selections of unknown section ids instead of showing an empty panel.\n--export writes the guide as JSON and exits.\n\nLogs go to stderr in --mcp mode and to $DOCDECK_LOG_FILE otherwise; RUST_LOG overrides the level.",
        docdeck::guide::BUILTIN_GUIDE_NAMES.join(", ")
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    mcp: bool,
    mcp_http_port: Option<u16>,
    guide_path: Option<String>,
    builtin: Option<String>,
    default_section: Option<String>,
    strict: bool,
    debug: bool,
    export: Option<String>,
}

impl CliOptions {
    fn policy(&self) -> SelectionPolicy {
        if self.strict {
            SelectionPolicy::Strict
        } else {
            SelectionPolicy::Permissive
        }
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--strict" => {
                if options.strict {
                    return Err(());
                }
                options.strict = true;
            }
            "--debug" => {
                if options.debug {
                    return Err(());
                }
                options.debug = true;
            }
            "--guide" => {
                if options.guide_path.is_some() {
                    return Err(());
                }
                options.guide_path = Some(args.next().ok_or(())?);
            }
            "--builtin" => {
                if options.builtin.is_some() {
                    return Err(());
                }
                options.builtin = Some(args.next().ok_or(())?);
            }
            "--default" => {
                if options.default_section.is_some() {
                    return Err(());
                }
                let id = args.next().ok_or(())?;
                if id.is_empty() {
                    return Err(());
                }
                options.default_section = Some(id);
            }
            "--export" => {
                if options.export.is_some() {
                    return Err(());
                }
                options.export = Some(args.next().ok_or(())?);
            }
            "--mcp-http-port" => {
                if options.mcp_http_port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.mcp_http_port = Some(port);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.guide_path.is_some() {
                    return Err(());
                }
                options.guide_path = Some(arg);
            }
        }
    }

    if options.guide_path.is_some() && options.builtin.is_some() {
        return Err(());
    }

    if options.mcp && options.mcp_http_port.is_some() {
        return Err(());
    }

    if options.export.is_some() && (options.mcp || options.mcp_http_port.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn load_guide(options: &CliOptions) -> Result<Guide, Box<dyn Error>> {
    let mut guide = match (&options.guide_path, &options.builtin) {
        (Some(path), _) => GuideFile::new(path).load()?,
        (None, Some(name)) => builtin_guide(name)?,
        (None, None) => builtin_guide(DEFAULT_BUILTIN_GUIDE)?,
    };
    if let Some(default_section) = &options.default_section {
        guide.set_default_section(default_section.as_str());
    }
    Ok(guide)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "docdeck".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing(&TracingConfig::for_mode(options.debug, options.mcp))
            .map_err(|err| -> Box<dyn Error> { err })?;

        let guide = load_guide(&options)?;
        let policy = options.policy();
        tracing::info!(
            title = %guide.meta().title,
            sections = guide.sections().len(),
            default_section = %guide.default_section(),
            policy = policy.as_str(),
            "guide loaded"
        );

        if let Some(export) = &options.export {
            GuideFile::new(export).save(&guide)?;
            return Ok(());
        }

        if options.mcp {
            let mcp = docdeck::mcp::DocdeckMcp::new(guide, policy)?;
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let ui_state = Arc::new(Mutex::new(docdeck::ui::UiState::default()));
        let mcp_http_port = options.mcp_http_port.unwrap_or(DEFAULT_MCP_HTTP_PORT);
        let mcp = docdeck::mcp::DocdeckMcp::new_with_ui_state(
            guide.clone(),
            policy,
            Some(ui_state.clone()),
        )?;

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", mcp_http_port)).await?;
            tracing::info!(addr = %listener.local_addr()?, "serving MCP over streamable HTTP at /mcp");

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();
            let server_shutdown = shutdown_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service = {
                let mcp = mcp.clone();
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config)
            };

            let router = Router::new().nest_service("/mcp", mcp_service);
            let server_handle = tokio::spawn(async move {
                let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                    server_shutdown.cancelled().await;
                });
                if let Err(err) = serve.await {
                    tracing::error!(error = %err, "MCP HTTP server error");
                }
            });

            let tui_ui_state = ui_state.clone();
            let tui_join = tokio::task::spawn_blocking(move || {
                docdeck::tui::run_with_ui_state(guide, policy, Some(tui_ui_state))
                    .map_err(|err| err.to_string())
            })
            .await;

            shutdown_token.cancel();
            let _ = server_handle.await;

            let tui_result = tui_join.map_err(|err| -> Box<dyn Error> { Box::new(err) })?;
            tui_result.map_err(|err| {
                Box::new(std::io::Error::new(std::io::ErrorKind::Other, err)) as Box<dyn Error>
            })?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        tracing::error!(error = %err, "docdeck exited with an error");
        eprintln!("docdeck: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{load_guide, parse_options, CliOptions};
    use docdeck::router::SelectionPolicy;

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_empty_args() {
        let options = parse(&[]).expect("parse options");
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.policy(), SelectionPolicy::Permissive);
    }

    #[test]
    fn parses_mcp_flag() {
        let options = parse(&["--mcp"]).expect("parse options");
        assert!(options.mcp);
        assert!(options.guide_path.is_none());
        assert_eq!(options.mcp_http_port, None);
    }

    #[test]
    fn parses_guide_path_flag_and_positional() {
        let options = parse(&["--guide", "docs/guide.json"]).expect("parse options");
        assert_eq!(options.guide_path.as_deref(), Some("docs/guide.json"));

        let options = parse(&["docs/guide.json", "--mcp"]).expect("parse options");
        assert_eq!(options.guide_path.as_deref(), Some("docs/guide.json"));
        assert!(options.mcp);
    }

    #[test]
    fn parses_builtin_default_and_strict() {
        let options =
            parse(&["--builtin", "brochure", "--default", "transactions", "--strict", "--debug"])
                .expect("parse options");
        assert_eq!(options.builtin.as_deref(), Some("brochure"));
        assert_eq!(options.default_section.as_deref(), Some("transactions"));
        assert_eq!(options.policy(), SelectionPolicy::Strict);
        assert!(options.debug);
    }

    #[test]
    fn parses_mcp_http_port() {
        let options = parse(&["--mcp-http-port", "1234"]).expect("parse options");
        assert_eq!(options.mcp_http_port, Some(1234));
        assert!(!options.mcp);
    }

    #[test]
    fn rejects_conflicting_options() {
        parse(&["--mcp", "--mcp-http-port", "0"]).unwrap_err();
        parse(&["--guide", "a.json", "--builtin", "utils"]).unwrap_err();
        parse(&["a.json", "--builtin", "utils"]).unwrap_err();
        parse(&["--export", "out.json", "--mcp"]).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse(&["--mcp", "--mcp"]).unwrap_err();
        parse(&["--strict", "--strict"]).unwrap_err();
        parse(&["--default", "a", "--default", "b"]).unwrap_err();
        parse(&["one.json", "two.json"]).unwrap_err();
    }

    #[test]
    fn rejects_missing_values_and_unknown_args() {
        parse(&["--guide"]).unwrap_err();
        parse(&["--default"]).unwrap_err();
        parse(&["--default", ""]).unwrap_err();
        parse(&["--mcp-http-port", "not-a-port"]).unwrap_err();
        parse(&["--nope"]).unwrap_err();
    }

    #[test]
    fn loads_default_builtin_and_applies_default_override() {
        let guide = load_guide(&CliOptions::default()).expect("utils guide");
        assert_eq!(guide.default_section(), "introduction");

        let options = parse(&["--builtin", "brochure", "--default", "querying-chain"])
            .expect("parse options");
        let guide = load_guide(&options).expect("brochure guide");
        assert_eq!(guide.default_section(), "querying-chain");
    }

    #[test]
    fn unknown_builtin_is_an_error() {
        let options = parse(&["--builtin", "nope"]).expect("parse options");
        assert!(load_guide(&options).is_err());
    }
}
