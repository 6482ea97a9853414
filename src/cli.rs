// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "flycam")]
#[command(about = "Free-fly camera demo", long_about = None)]
pub struct Cli {
    /// JSON camera config; missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Start with the cursor released
    #[arg(long = "free", default_value = "false")]
    pub free: bool,

    /// Print the effective config as JSON and exit
    #[arg(long = "dump-config", default_value = "false")]
    pub dump_config: bool,
}
