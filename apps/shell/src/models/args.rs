//! # CLI Argument Definitions
//!
//! Every control command can be given once on the command line or repeated line by line
//! in a script, which runs against a single bound surface.

use clap::{Parser, Subcommand};
use ectl::domain::features::{FeatureCategory, FeatureSort, FeatureStatus};
use ectl::domain::media::MediaMuteState;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "enginectl")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Drive a rendering surface's feature flags, mute state and inspector")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML); `enginectl.*` in the working directory when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    #[command(flatten)]
    Control(ControlCommand),
    /// Run control commands from a file, one per line (`-` reads stdin)
    Script { path: PathBuf },
}

/// One line of a script.
#[derive(Debug, Parser)]
#[command(no_binary_name = true)]
pub struct ScriptLine {
    #[command(subcommand)]
    pub command: ControlCommand,
}

#[derive(Debug, Subcommand)]
pub enum ControlCommand {
    /// Inspect and toggle feature flags
    Flags {
        #[command(subcommand)]
        action: FlagAction,
    },
    /// Query and change the media mute state
    Mute {
        #[command(subcommand)]
        action: MuteAction,
    },
    /// Drive the developer-tools session
    Inspector {
        #[command(subcommand)]
        action: InspectorAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum FlagAction {
    /// List features
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        category: Option<FeatureCategory>,
        /// Only features at or above this maturity tier
        #[arg(long)]
        min_status: Option<FeatureStatus>,
        /// Case-insensitive match against name or status
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        include_hidden: bool,
        #[arg(long, default_value_t = FeatureSort::Name)]
        sort: FeatureSort,
        /// Section the output by category
        #[arg(short, long)]
        grouped: bool,
    },
    /// Show one feature and its current state
    Get { key: String },
    /// Enable or disable a feature
    Set {
        key: String,
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum MuteAction {
    /// Print the mute state and whether media is playing
    Status,
    /// Replace the whole mute state, e.g. `audio,capture-devices` or `none`
    Set { state: MediaMuteState },
    /// Flip audio muting
    ToggleAudio,
    /// Stop every capture session and mute both capture sources
    StopCapture,
    /// Pretend the page opened capture sessions
    SimulateCapture {
        #[arg(long)]
        devices: bool,
        #[arg(long)]
        screen: bool,
    },
    /// Pretend media started or stopped playing
    SimulatePlayback {
        #[arg(action = clap::ArgAction::Set)]
        playing: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum InspectorAction {
    /// Print the session state
    Status,
    Connect,
    Show,
    Hide,
    Toggle,
    Close,
    Attach,
    Detach,
    Console,
    Resources,
    /// Show the main resource of a frame (0 is the main frame)
    MainResource { frame: u64 },
    /// Add a subframe to the surface and print its number
    AddFrame,
    /// Toggle page profiling
    Profile,
    /// Toggle element selection
    Select,
    /// Print an error message to the inspector console
    Print {
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
    },
}
