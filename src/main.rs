mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod format;
mod logging;
mod model;
mod network;
mod router;
mod server;
mod session;
mod table;
mod ui;
mod views;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::server::{DEFAULT_PORT, DEFAULT_ROOT};
use crate::logging::LogSink;
use crate::session::headless_mode::parse_filter;
use crate::session::{
    DataOptions, ShowOptions, ShowView, run_headless_mode, run_tui_mode, setup_session,
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

/// Where to read the JSON documents from.
#[derive(ClapArgs, Debug, Default)]
struct DataArgs {
    /// Base URL of a fixture server, e.g. http://localhost:3000
    #[arg(long, value_name = "URL", conflicts_with = "data_dir")]
    data_url: Option<String>,

    /// Directory holding contracts.json, providers.json, members.json and quality_gaps.json
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl From<DataArgs> for DataOptions {
    fn from(args: DataArgs) -> Self {
        DataOptions {
            data_url: args.data_url,
            data_dir: args.data_dir,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive dashboard
    Start {
        /// Route to open first: #/, #/member-panel or #/kpi-summary
        #[arg(long, value_name = "ROUTE", default_value = "#/")]
        route: String,

        #[command(flatten)]
        data: DataArgs,

        /// Enable background colors
        #[arg(long, default_value = "false")]
        with_background: bool,
    },
    /// Load one view and print it as text
    Show {
        /// View to print
        #[arg(value_enum)]
        view: ShowView,

        /// Contract whose providers are listed
        #[arg(long, value_name = "ID")]
        contract: Option<String>,

        /// Unit whose members are listed
        #[arg(long, value_name = "UNIT_NAME")]
        unit: Option<String>,

        /// Only count or list members of this PCP
        #[arg(long, value_name = "PCP_NAME")]
        pcp: Option<String>,

        /// Column key to sort by
        #[arg(long, value_name = "COLUMN")]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Substring filter, repeatable
        #[arg(long, value_name = "COLUMN=VALUE", value_parser = parse_filter)]
        filter: Vec<(String, String)>,

        #[command(flatten)]
        data: DataArgs,
    },
    /// Serve the fixtures over HTTP
    Serve {
        /// Web root; JSON documents are read from <ROOT>/data
        #[arg(long, value_name = "DIR", default_value = DEFAULT_ROOT)]
        root: PathBuf,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Print the path of the configuration file
    ConfigPath {
        /// Write a default configuration file there if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            route,
            data,
            with_background,
        } => {
            let session = setup_session(&config_path, &data.into())?;
            run_tui_mode(session, &route, with_background).await
        }
        Command::Show {
            view,
            contract,
            unit,
            pcp,
            sort,
            desc,
            filter,
            data,
        } => {
            let session = setup_session(&config_path, &data.into())?;
            let options = ShowOptions {
                contract,
                unit,
                pcp,
                sort,
                descending: desc,
                filters: filter,
            };
            run_headless_mode(session, view, options).await
        }
        Command::Serve { root, port } => {
            if let Err(e) = logging::init(LogSink::Stderr) {
                print_cmd_warn!("Logging", "{}", e);
            }
            server::serve(root, port).await
        }
        Command::ConfigPath { init } => {
            if init && !config_path.exists() {
                Config::default().save(&config_path)?;
            }
            println!("{}", config_path.display());
            Ok(())
        }
    }
}
