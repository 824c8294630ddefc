//! Implementation of the `dbusrunner new` command.
//!
//! Responsibility: translate CLI arguments into a `RenderContext`, call the
//! core scaffold service, and display results. No business logic lives here.

use std::io::IsTerminal as _;
use std::path::{Path, PathBuf};

use chrono::Datelike as _;
use tracing::{debug, info, instrument};

use dbusrunner_adapters::{InMemoryStore, LocalFilesystem, PlaceholderRenderer};
use dbusrunner_core::{
    application::ScaffoldService,
    domain::{AppIdentity, ProjectStructure, RenderContext, TemplateId},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `dbusrunner new` command.
///
/// Dispatch sequence:
/// 1. Validate the application name and build the placeholder context
/// 2. Render the template in memory (unknown template fails here)
/// 3. Refuse an existing directory unless `--force`
/// 4. Early-exit if `--dry-run`
/// 5. Confirm with user unless `--yes`, `--quiet`, or stdin is not a TTY
/// 6. Write the project via `ScaffoldService`
/// 7. Print next-steps guidance
#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Identity and context
    let app = AppIdentity::new(args.name.as_str())?;
    let year = resolve_year(args.year)?;
    let author = args.author.unwrap_or(config.author.name);
    let email = args.email.unwrap_or(config.author.email);
    let mut context = RenderContext::new(&app, author, email, year);
    if let Some(dir) = resolve_bindir(args.bindir, &config.install.bindir) {
        context = context.with_bindir(&dir)?;
    }
    let template_id = TemplateId::new(args.template.unwrap_or(config.templates.default));
    let project_path = PathBuf::from(app.lowercase());

    debug!(template = %template_id, year, path = %project_path.display(), "Context resolved");

    // 2. Render
    let service = ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin()?),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let plan = service.plan(&template_id, &context, &project_path)?;

    // 3. Existing directory
    if project_path.exists() && !args.force {
        return Err(CliError::ProjectExists { path: project_path });
    }

    // 4. Dry run
    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}' from template '{}'",
            project_path.display(),
            template_id,
        ))?;
        show_files(&plan, &output)?;
        return Ok(());
    }

    // 5. Confirm
    if !output.is_quiet() && !args.yes && std::io::stdin().is_terminal() {
        show_configuration(&app, &template_id, &project_path, &plan, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Scaffold
    output.header(&format!("Creating '{}'...", project_path.display()))?;
    info!(path = %project_path.display(), "Scaffold started");

    service.scaffold(&template_id, &context, &project_path, args.force)?;

    // 7. Success + next steps
    output.success(&format!("Runner '{}' created!", app.name()))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", project_path.display()))?;
    output.print("  cargo build")?;
    output.print("  # then follow README.md to install the desktop and service files")?;

    Ok(())
}

fn resolve_year(flag: Option<i32>) -> CliResult<i32> {
    match flag {
        Some(year) if year <= 0 => Err(CliError::InvalidInput {
            message: format!("year must be positive, got {year}"),
        }),
        Some(year) => Ok(year),
        None => Ok(chrono::Local::now().year()),
    }
}

/// `--bindir`, then `install.bindir`, then cargo's bin directory.
fn resolve_bindir(flag: Option<PathBuf>, configured: &str) -> Option<PathBuf> {
    flag.or_else(|| (!configured.is_empty()).then(|| PathBuf::from(configured)))
        .or_else(cargo_bindir)
}

/// `$CARGO_HOME/bin`, else `~/.cargo/bin`.
fn cargo_bindir() -> Option<PathBuf> {
    std::env::var_os("CARGO_HOME")
        .map(PathBuf::from)
        .filter(|home| home.is_absolute())
        .or_else(|| directories::BaseDirs::new().map(|d| d.home_dir().join(".cargo")))
        .map(|home| home.join("bin"))
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_files(plan: &ProjectStructure, out: &OutputManager) -> CliResult<()> {
    for file in plan.files() {
        out.print(&format!("  {}", plan.root().join(&file.path).display()))?;
    }
    Ok(())
}

fn show_configuration(
    app: &AppIdentity,
    template: &TemplateId,
    path: &Path,
    plan: &ProjectStructure,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Application:  {}", app.name()))?;
    out.print(&format!("  Bus name:     org.kde.{}", app.lowercase()))?;
    out.print(&format!("  Template:     {template}"))?;
    out.print(&format!("  Location:     {}", path.display()))?;
    out.print(&format!("  Files:        {}", plan.file_count()))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e.to_string()),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    use crate::error::IntoCli as _;

    print!("Continue? [Y/n] ");
    io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
