//! Auxiliary commands run before staging.
//!
//! Each hook is spawned with an explicit argument vector at the project
//! root. Nothing passes through a shell, so arguments are never re-parsed.

use crate::{
    bail,
    packager::{Error, Result, report::Reporter, settings::HookCommand},
};
use std::path::Path;

/// Runs `hooks` in order, stopping at the first failure.
pub async fn run_hooks(hooks: &[HookCommand], project_root: &Path, reporter: &Reporter) -> Result<()> {
    if hooks.is_empty() {
        return Ok(());
    }

    reporter.section("Running pre-release commands...");
    for hook in hooks {
        run_hook(hook, project_root).await?;
        reporter.item(&hook.display());
    }
    Ok(())
}

async fn run_hook(hook: &HookCommand, project_root: &Path) -> Result<()> {
    let program = which::which(&hook.program).map_err(|e| {
        Error::GenericError(format!("command `{}` not found: {}", hook.program, e))
    })?;
    log::debug!("Running {} {:?} in {}", program.display(), hook.args, project_root.display());

    let output = tokio::process::Command::new(&program)
        .args(&hook.args)
        .current_dir(project_root)
        .output()
        .await
        .map_err(|e| Error::GenericError(format!("failed to execute `{}`: {}", hook.display(), e)))?;

    if !output.status.success() {
        bail!(
            "`{}` failed with exit code {:?}: {}",
            hook.display(),
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
