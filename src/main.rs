use std::io::{self, Write};
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use nc2::api::{self, load_cloud_accounts, Nc2Client};
use nc2::config::{self, Settings};
use nc2::prompt::TerminalPrompt;
use nc2::report;
use nc2::{build_payload, DeployError, Outcome};

#[derive(Parser)]
#[command(
    name = "nc2-deploy",
    author,
    version,
    about = "Create an NC2 cluster in an existing AWS VPC",
    long_about = r#"nc2-deploy creates a Nutanix Cloud Clusters (NC2) cluster inside an existing AWS VPC.

Configuration is read from environment variables, optionally loaded from a `.env` file
(or the file given with `--env-file`). Running without a subcommand starts the
interactive creation flow: pick a cloud account, optionally review the generated
payload, confirm, and submit.

Examples:
  1) Create a cluster interactively:
      nc2-deploy
  2) List the organization's cloud accounts:
      nc2-deploy accounts
  3) Print the payload for a known account without submitting:
      nc2-deploy payload --account-id 3f2c...
"#,
    after_help = "Use `nc2-deploy <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Print a curl-style trace of every API request and response to stderr
    #[arg(long, global = true)]
    trace: bool,
    /// Abort each API request after this many seconds (no limit by default)
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Select an account, confirm the payload and submit the cluster (default)
    Create,
    /// List the cloud accounts registered for the organization
    Accounts,
    /// Print the creation payload for an account without submitting it
    Payload {
        /// Cloud account id to place in the payload
        #[arg(long)]
        account_id: String,
    },
    /// Validate configuration and ensure API connectivity
    #[command(
        about = "Validate configuration and ensure API connectivity.",
        long_about = "Check that every required environment variable is set, then validate the token by listing the organization's cloud accounts."
    )]
    CheckConfig,
}

fn print_settings(settings: &Settings) {
    println!("{}", yansi::Paint::new("Configuration").bold().underline());
    let rows = [
        ("API base URL", settings.api_base_url.clone()),
        ("API version", settings.api_version.clone().unwrap_or_else(|| "-".into())),
        ("Organization", settings.organization_id.clone()),
        ("Cluster name", settings.cluster_name.clone()),
        ("Region / AZ", format!("{} / {}", settings.region, settings.availability_zone)),
        ("VPC", settings.vpc_id.clone()),
        ("Cluster subnet", settings.cluster_subnet_id.clone()),
        ("Prism Central subnet", settings.prism_central_subnet_id.clone()),
        ("Flow subnet", settings.flow_subnet_id.clone()),
        ("Hosts", format!("{} x {}", settings.number_of_hosts, settings.host_type)),
        ("AOS version", settings.aos_version.clone()),
    ];
    for (label, value) in rows {
        println!("  {:<22}{}", label, value);
    }
}

async fn execute(command: Commands, settings: &Settings, client: &Nc2Client) -> Result<(), DeployError> {
    let mut out = io::stdout();
    match command {
        Commands::Create => {
            let mut prompt = TerminalPrompt;
            match nc2::run(client, settings, &mut prompt, &mut out).await? {
                Outcome::Submitted(created) => {
                    tracing::info!(cluster_id = %created.cluster_id, "Cluster submitted")
                }
                Outcome::Cancelled => tracing::info!("No request sent"),
            }
            Ok(())
        }
        Commands::Accounts => {
            let accounts = load_cloud_accounts(client, &settings.organization_id).await?;
            if accounts.is_empty() {
                return Err(DeployError::NoCloudAccounts);
            }
            report::print_accounts(&mut out, &accounts, true)?;
            Ok(())
        }
        Commands::Payload { account_id } => {
            let payload = build_payload(&account_id, settings);
            report::print_payload(&mut out, &payload)?;
            Ok(())
        }
        Commands::CheckConfig => {
            print_settings(settings);
            let accounts = load_cloud_accounts(client, &settings.organization_id).await?;
            writeln!(
                out,
                "{}",
                yansi::Paint::new(format!(
                    "Configuration looks valid ({} cloud account(s) visible)",
                    accounts.len()
                ))
                .green()
            )?;
            Ok(())
        }
    }
}

async fn run_cli(cli: Cli) -> Result<(), DeployError> {
    let settings = Settings::from_env()?;
    tracing::debug!(
        base_url = %settings.api_base_url,
        api_version = ?settings.api_version,
        organization = %settings.organization_id,
        "Configuration loaded"
    );
    let client = Nc2Client::new(&settings, cli.timeout.map(Duration::from_secs))?;
    execute(cli.command.unwrap_or(Commands::Create), &settings, &client).await
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.trace {
        api::set_trace(true);
    }

    config::load_env_file(cli.env_file.as_deref());

    let result = run_cli(cli).await;

    let code = match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(%e, "Run failed");
            let _ = report::print_failure(&mut io::stdout(), &e);
            e.exit_code()
        }
    };
    process::exit(code);
}
