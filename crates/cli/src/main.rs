use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use river_core::intent::{LEVEL_INTENT, RIVER_SLOT};
use river_core::SkillRequest;
use river_observability::{init_tracing, AppMetrics};
use river_skill::{HttpLevelSource, RiverSkill, SkillConfig};

#[derive(Debug, Parser)]
#[command(name = "river-levels")]
#[command(about = "UK river levels voice skill")]
struct Cli {
    /// Base url of the river level api.
    #[arg(long, env = "RIVER_API_BASE")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the rivers the skill knows about.
    Rivers,
    /// Ask for the level of a river.
    Level { river: String },
    Intent {
        name: String,
        #[arg(long)]
        river: Option<String>,
    },
    Launch,
    /// Answer a raw platform request read from a file, or `-` for stdin.
    Invoke { input: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("river_cli");
    let cli = Cli::parse();

    let mut config = SkillConfig::from_env();
    if let Some(api_base) = cli.api_base.as_deref() {
        config = config.with_api_base(api_base);
    }

    let request = match cli.command {
        Command::Rivers => {
            println!("{}", serde_json::to_string_pretty(&river_core::load().rivers)?);
            return Ok(());
        }
        Command::Level { river } => {
            SkillRequest::intent(LEVEL_INTENT, &[(RIVER_SLOT, river.as_str())])
        }
        Command::Intent { name, river } => match river.as_deref() {
            Some(river) => SkillRequest::intent(&name, &[(RIVER_SLOT, river)]),
            None => SkillRequest::intent(&name, &[]),
        },
        Command::Launch => SkillRequest::launch(),
        Command::Invoke { input } => read_request(&input)?,
    };

    let skill = build_skill(&config)?;
    let response = skill.handle(&request).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn read_request(input: &PathBuf) -> Result<SkillRequest> {
    let raw = if input.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed reading request from stdin")?;
        buffer
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed reading request from {}", input.display()))?
    };

    SkillRequest::from_json(&raw).context("invalid skill request")
}

fn build_skill(config: &SkillConfig) -> Result<RiverSkill<HttpLevelSource>> {
    RiverSkill::from_config(config, AppMetrics::shared())
}
