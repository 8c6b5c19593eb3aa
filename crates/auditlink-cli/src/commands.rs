//! Subcommand execution.

use std::env;

use anyhow::Context;
use auditlink_client::{events, AuditEventClient, AuditEventRequest};
use auditlink_common_config::{AuditSettings, ConfigError, ConfigLoader, Environment};
use tracing::{debug, warn};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Resolve settings: file, then environment, then command line flags.
pub fn resolve_settings(cli: &Cli) -> Result<AuditSettings, CliError> {
    let project_dir = env::current_dir().context("failed to read working directory")?;
    if let Err(e) = Environment::init_in(&project_dir) {
        warn!(error = %e, "failed to load .env files");
    }

    let loader = ConfigLoader::new(project_dir);
    let settings = match &cli.config {
        Some(path) => loader.load_file(path)?,
        None => loader.load()?,
    };

    let mut settings = settings.apply_env().map_err(ConfigError::from)?;
    if let Some(url) = &cli.gateway_url {
        settings.gateway_url = url.clone();
    }
    if let Some(name) = &cli.service_name {
        settings.service_name = name.clone();
    }

    loader.validate(&settings)?;
    debug!(gateway = %settings.gateway_url, service = %settings.service_name, "settings resolved");
    Ok(settings)
}

/// Run the parsed command line.
pub async fn execute(cli: Cli) -> Result<(), CliError> {
    let settings = resolve_settings(&cli)?;
    let client = AuditEventClient::from_settings(&settings)?;

    let (request, send) = match cli.command {
        Command::Event(args) => (AuditEventRequest::from(args), true),
        Command::Envelope(args) => (AuditEventRequest::from(args), false),
        Command::PageView { page, user } => (events::page_view(&page, user.as_deref()), true),
        Command::UserAction {
            action,
            user,
            details,
        } => (events::user_action(&action, &user, details), true),
        Command::Login { user, failed, ip } => (events::login(&user, !failed, ip.as_deref()), true),
        Command::ApiCall {
            endpoint,
            method,
            status,
            user,
        } => (
            events::api_call(&endpoint, &method, status, user.as_deref()),
            true,
        ),
        Command::Error { message, context } => (events::client_error(message, context), true),
    };

    if !send {
        let envelope = client.build_envelope(request);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    let outcome = client.deliver(request).await;
    if !cli.quiet {
        println!("{outcome}");
    }

    if outcome.is_accepted() {
        Ok(())
    } else {
        Err(CliError::NotDelivered(outcome))
    }
}
