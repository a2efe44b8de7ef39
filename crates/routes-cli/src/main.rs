use std::fs;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use routes_core::config::FilterConfig;
use routes_core::menu::RoutesMenu;
use routes_core::model::Environment;
use routes_core::model::Route;
use routes_host::load_environment;
use routes_host::HeadlessHost;

mod config;
mod logging;
mod replay;

#[derive(Debug, Parser)]
#[command(name = "routes", version, about = "Filter and replay a mock environment's route list")]
struct Cli {
    /// Config file; defaults to <config dir>/routes-menu/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the routes of an environment matching a query.
    Filter {
        #[arg(long)]
        env: PathBuf,
        #[arg(long, default_value = "")]
        query: String,
        /// One JSON object per route instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Run a YAML script of menu inputs and print what the menu did.
    Replay {
        #[arg(long)]
        env: PathBuf,
        #[arg(long)]
        script: PathBuf,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Filter { env, query, json } => {
            let routes = filter(load_environment(&env)?, &config.filter, query)?;
            for route in routes {
                if json {
                    writeln!(out, "{}", serde_json::to_string(&route)?)?;
                } else {
                    writeln!(out, "{}", route_line(&route))?;
                }
            }
            Ok(())
        }
        Command::Replay { env, script } => {
            let raw = fs::read_to_string(&script)
                .map_err(|err| format!("read script {}: {err}", script.display()))?;
            let steps = replay::parse_script(&raw)
                .map_err(|err| format!("parse script {}: {err}", script.display()))?;
            replay::replay(load_environment(&env)?, &config.filter, steps, &mut out)
        }
    }
}

fn filter(
    environment: Environment,
    config: &FilterConfig,
    query: String,
) -> Result<Vec<Route>, Box<dyn std::error::Error>> {
    let host = HeadlessHost::new(vec![environment]);
    let menu = RoutesMenu::new(host.deps(), config);
    menu.on_filter_input(query);
    host.scheduler.advance_by(config.debounce());
    menu.filtered_routes()
        .ok_or_else(|| "environment has no route list".into())
}

fn route_line(route: &Route) -> String {
    let mut line = format!("{}\t{}\t/{}", route.id, route.method.to_uppercase(), route.endpoint);
    if !route.documentation.is_empty() {
        line.push('\t');
        line.push_str(&route.documentation);
    }
    line
}
