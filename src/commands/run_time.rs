// Run-time command for writing the default active plugin list

use crate::commands::{BuildContext, write_generated};
use crate::constants;
use crate::render;
use crate::ui;
use anyhow::Context;
use log::{debug, info};

pub async fn configure_run_time(ctx: &mut BuildContext) -> anyhow::Result<()> {
    let Some(source) = ctx.env.run_time_plugins.clone() else {
        debug!("{} not set, skipping", constants::RUN_TIME_PLUGINS_VAR);
        return Ok(());
    };

    let plugins = ctx
        .loader
        .load(&source)
        .await
        .with_context(|| format!("Failed to load run-time plugins from {}", source))?;

    let path = ctx.paths.default_plugins_file();
    let content = render::default_plugins_module(&plugins);

    if ctx.dry_run {
        ui::status("[DRY RUN]", &format!("Would write {}", path.display()));
        ui::dim(&format!("  {}", content.trim_end()));
        return Ok(());
    }

    write_generated(&path, &content)?;
    info!(
        "Wrote {} run-time plugin(s) to {}",
        plugins.len(),
        path.display()
    );
    ui::success(&format!(
        "Wrote {} default plugin(s) to {}",
        plugins.len(),
        path.display()
    ));
    Ok(())
}
