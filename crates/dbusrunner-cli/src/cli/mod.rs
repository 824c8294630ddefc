//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dbusrunner",
    bin_name = "dbusrunner",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Search runners on the session bus",
    long_about = "dbusrunner serves a stub KRunner search runner over D-Bus \
                  and generates new runner projects from built-in templates.",
    after_help = "EXAMPLES:\n\
        \x20 dbusrunner serve --name Greeter\n\
        \x20 dbusrunner new WebSearch --author 'Jane Doe' --email jane@example.org\n\
        \x20 dbusrunner list --format json\n\
        \x20 dbusrunner completions bash > /usr/share/bash-completion/completions/dbusrunner",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the stub runner on the session bus.
    #[command(
        visible_alias = "s",
        about = "Serve the stub runner on the session bus",
        after_help = "EXAMPLES:\n\
            \x20 dbusrunner serve                       # org.kde.dbusrunner at /runner\n\
            \x20 dbusrunner serve --name Greeter        # org.kde.greeter at /runner\n\
            \x20 dbusrunner serve --name Greeter --scoped-path   # ... at /greeter"
    )]
    Serve(ServeArgs),

    /// Create a new runner project from a template.
    #[command(
        visible_alias = "n",
        about = "Create a new runner project",
        after_help = "EXAMPLES:\n\
            \x20 dbusrunner new Greeter\n\
            \x20 dbusrunner new Greeter --template runner-scoped --yes\n\
            \x20 dbusrunner new Greeter --dry-run"
    )]
    New(NewArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 dbusrunner list\n\
            \x20 dbusrunner list --format json"
    )]
    List(ListArgs),

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 dbusrunner init           # platform config directory\n\
            \x20 dbusrunner init --local   # .dbusrunner.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dbusrunner completions bash > ~/.local/share/bash-completion/completions/dbusrunner\n\
            \x20 dbusrunner completions zsh  > ~/.zfunc/_dbusrunner\n\
            \x20 dbusrunner completions fish > ~/.config/fish/completions/dbusrunner.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dbusrunner config get service.app_name\n\
            \x20 dbusrunner config list\n\
            \x20 dbusrunner config path"
    )]
    Config(ConfigCommands),
}

// ── serve ─────────────────────────────────────────────────────────────────────

/// Arguments for `dbusrunner serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Application name; the bus name is `org.kde.<name lowercased>`.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "APPNAME",
        help = "Application name (default from config)"
    )]
    pub name: Option<String>,

    /// Register at `/<name lowercased>` instead of `/runner`.
    #[arg(long = "scoped-path", help = "Use an object path named after the app")]
    pub scoped_path: bool,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `dbusrunner new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Application name. The project directory is the name lowercased.
    #[arg(value_name = "NAME", help = "Application name, e.g. WebSearch")]
    pub name: String,

    /// Template to generate from.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template ID (default from config)"
    )]
    pub template: Option<String>,

    /// Author written into the generated files.
    #[arg(long = "author", value_name = "NAME", help = "Author name")]
    pub author: Option<String>,

    /// Author email written into the generated files.
    #[arg(long = "email", value_name = "EMAIL", help = "Author email")]
    pub email: Option<String>,

    /// Copyright year. Defaults to the current year.
    #[arg(long = "year", value_name = "YEAR", help = "Copyright year")]
    pub year: Option<i32>,

    /// Absolute directory the generated binary will be installed into.
    /// Defaults to cargo's bin directory.
    #[arg(
        long = "bindir",
        value_name = "DIR",
        help = "Install directory written into the D-Bus service file"
    )]
    pub bindir: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `dbusrunner list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format. Falls back to `--output-format json`, then `table`.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dbusrunner init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.dbusrunner.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dbusrunner completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dbusrunner config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `service.app_name`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::parse_from(["dbusrunner", "serve"]);
        match cli.command {
            Commands::Serve(args) => {
                assert!(args.name.is_none());
                assert!(!args.scoped_path);
            }
            other => panic!("expected Serve, got {other:?}"),
        }
    }

    #[test]
    fn parse_serve_scoped() {
        let cli = Cli::parse_from(["dbusrunner", "serve", "-n", "Greeter", "--scoped-path"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.name.as_deref(), Some("Greeter"));
                assert!(args.scoped_path);
            }
            other => panic!("expected Serve, got {other:?}"),
        }
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "dbusrunner",
            "new",
            "Greeter",
            "--template",
            "runner-scoped",
            "--year",
            "2030",
            "--dry-run",
        ]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name, "Greeter");
                assert_eq!(args.template.as_deref(), Some("runner-scoped"));
                assert_eq!(args.year, Some(2030));
                assert!(args.dry_run);
            }
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn list_alias() {
        let cli = Cli::parse_from(["dbusrunner", "ls", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::List(ListArgs {
                format: Some(ListFormat::Json)
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["dbusrunner", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_set_is_not_a_command() {
        assert!(Cli::try_parse_from(["dbusrunner", "config", "set", "a", "b"]).is_err());
    }
}
