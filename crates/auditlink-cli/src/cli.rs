//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use auditlink_common_log::{LogConfig, LogLevel};
use auditlink_types::{AuditEventRequest, AuditOutcome, Payload};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// AuditLink - emit audit events to the audit gateway
#[derive(Debug, Parser)]
#[command(
    name = "auditlink",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a settings file (defaults to .auditlink/config.yaml)
    #[arg(
        short,
        long,
        global = true,
        env = "AUDITLINK_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Audit gateway base URL, overriding file and environment
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    pub gateway_url: Option<String>,

    /// Service name to report, overriding file and environment
    #[arg(long, global = true)]
    pub service_name: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Logging setup: environment first, then verbosity flags.
    pub fn log_config(&self) -> LogConfig {
        let config = LogConfig::from_env();
        let level = match (self.quiet, self.verbose) {
            (true, _) => LogLevel::Error,
            (false, 0) => return config,
            (false, 1) => LogLevel::Info,
            (false, 2) => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        config.with_level(level)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send an arbitrary event
    Event(EventArgs),

    /// Print the normalized envelope for an event without sending it
    Envelope(EventArgs),

    /// Record a page view
    PageView {
        /// Page path or name
        page: String,
        /// Viewing user
        #[arg(long)]
        user: Option<String>,
    },

    /// Record a user action as user.<action>
    UserAction {
        /// Action name
        action: String,
        /// Acting user
        #[arg(long)]
        user: String,
        /// Details as a JSON object
        #[arg(long, value_parser = parse_payload)]
        details: Option<Payload>,
    },

    /// Record a login attempt
    Login {
        /// User attempting to log in
        user: String,
        /// Mark the attempt as failed
        #[arg(long)]
        failed: bool,
        /// Client IP address
        #[arg(long)]
        ip: Option<String>,
    },

    /// Record an API call
    ApiCall {
        /// Endpoint path
        endpoint: String,
        /// HTTP method
        #[arg(long, default_value = "GET")]
        method: String,
        /// Response status code
        #[arg(long)]
        status: u16,
        /// Calling user
        #[arg(long)]
        user: Option<String>,
    },

    /// Record a client-side error
    Error {
        /// Error message
        message: String,
        /// Extra context as a JSON object
        #[arg(long, value_parser = parse_payload)]
        context: Option<Payload>,
    },
}

/// Fields of a generic event.
#[derive(Debug, Clone, Args)]
pub struct EventArgs {
    /// Dot-namespaced event type, e.g. auth.login
    pub event_type: String,
    /// What happened
    pub action: String,
    #[arg(long)]
    pub actor: Option<String>,
    #[arg(long)]
    pub resource_type: Option<String>,
    #[arg(long)]
    pub resource_id: Option<String>,
    /// success, failure or blocked
    #[arg(long)]
    pub outcome: Option<AuditOutcome>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub severity: Option<String>,
    /// Payload as a JSON object
    #[arg(long, value_parser = parse_payload)]
    pub payload: Option<Payload>,
}

impl From<EventArgs> for AuditEventRequest {
    fn from(args: EventArgs) -> Self {
        AuditEventRequest {
            event_type: args.event_type,
            action: args.action,
            actor_id: args.actor,
            resource_type: args.resource_type,
            resource_id: args.resource_id,
            outcome: args.outcome,
            category: args.category,
            severity: args.severity,
            payload: args.payload,
        }
    }
}

fn parse_payload(s: &str) -> Result<Payload, String> {
    serde_json::from_str(s).map_err(|e| format!("expected a JSON object: {e}"))
}
