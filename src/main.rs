//! ChemistTasker terminal client
//!
//! Mounts the app title against the configured backend and offers a small
//! command loop for poking at it and at the endpoint registry.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use chemisttasker::api::{registry, ApiClient, HttpTransport};
use chemisttasker::config::{ClientConfig, ConfigManager, ENV_CONFIG_FILE};
use chemisttasker::event_bus::{AppEvent, APP_EVENT_BUS};
use chemisttasker::session::SessionUser;
use chemisttasker::title::{AppTitle, TitleProps, Workspace, WorkspaceContext};
use chemisttasker::{emit_event, utils};

const ENV_ROLE: &str = "CHEMISTTASKER_ROLE";

async fn load_config() -> Result<ClientConfig> {
    match std::env::var(ENV_CONFIG_FILE) {
        Ok(path) => ConfigManager::new(path).load().await?.with_env(),
        Err(_) => ClientConfig::from_env(),
    }
}

fn resolutions(title: &AppTitle) -> u64 {
    let state = title.state();
    let count = state.borrow().resolutions;
    count
}

/// Wait briefly for the title to apply a resolution newer than `before`
async fn settle(title: &AppTitle, before: u64) {
    let mut state = title.state();
    let _ = tokio::time::timeout(Duration::from_secs(5), state.wait_for(|s| s.resolutions > before)).await;
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    utils::init_tracing()?;

    let config = load_config().await.context("loading client configuration")?;
    info!("Backend: {}", config.api_base_url);

    let transport = HttpTransport::new(&config)?;
    let events = APP_EVENT_BUS.clone();
    let client = ApiClient::new(Arc::new(transport)).with_events(events.clone());
    let workspace = Arc::new(WorkspaceContext::default().with_events(events.clone()));

    let role_label = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(ENV_ROLE).ok())
        .unwrap_or_else(|| "pharmacist".to_string());
    let mut props = TitleProps::new(role_label, SessionUser::default());

    let title = AppTitle::mount(client.clone(), events.clone(), workspace, props.clone());
    settle(&title, 0).await;
    println!("{}", title.render());

    println!("Commands: status | refresh | role <label> | admin on|off | workspace <platform|internal> | endpoints | get <operation> [args..] | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let rest: Vec<&str> = words.collect();

        match command {
            "quit" | "exit" | "q" => break,
            "status" => println!("{}", title.render()),
            "refresh" => {
                let before = resolutions(&title);
                emit_event!(AppEvent::OnboardingUpdated);
                settle(&title, before).await;
                println!("{}", title.render());
            }
            "role" => {
                let before = resolutions(&title);
                props.role_label = rest.join(" ");
                title.set_identity(props.clone());
                settle(&title, before).await;
                println!("{}", title.render());
            }
            "admin" => {
                let before = resolutions(&title);
                props.user.is_pharmacy_admin = matches!(rest.first(), Some(&"on"));
                title.set_identity(props.clone());
                settle(&title, before).await;
                println!("{}", title.render());
            }
            "workspace" => match rest.first().map(|w| w.parse::<Workspace>()) {
                Some(Ok(w)) => {
                    title.workspace().set(w);
                    println!("{}", title.render());
                }
                Some(Err(e)) => println!("{}", e),
                None => println!("workspace: {}", title.workspace().get()),
            },
            "endpoints" => {
                for d in registry::all() {
                    println!("{:<32} {}", d.name, d.template());
                }
            }
            "get" => {
                let Some(name) = rest.first() else {
                    println!("usage: get <operation> [args..]");
                    continue;
                };
                let path = match registry::build(name, &rest[1..]) {
                    Ok(path) => path,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                match client.get(path).await {
                    Ok(res) => println!("{}", serde_json::to_string_pretty(&res.body)?),
                    Err(e) => println!("{}", e),
                }
            }
            other => println!("unknown command '{}'", other),
        }
    }

    title.unmount().await?;
    Ok(())
}
