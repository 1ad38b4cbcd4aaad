// Default settings command for writing the settings module pointer

use crate::commands::{BuildContext, write_generated};
use crate::constants;
use crate::render;
use crate::ui;
use log::{debug, info};

pub fn configure_default_settings(ctx: &BuildContext) -> anyhow::Result<()> {
    let Some(settings_module) = ctx.env.default_settings_module.as_deref() else {
        debug!("{} not set, skipping", constants::DEFAULT_SETTINGS_MODULE_VAR);
        return Ok(());
    };

    let path = ctx.paths.default_settings_file();
    let content = render::default_settings_module(settings_module);

    if ctx.dry_run {
        ui::status("[DRY RUN]", &format!("Would write {}", path.display()));
        ui::dim(&format!("  {}", content));
        return Ok(());
    }

    write_generated(&path, &content)?;
    info!("Wrote default settings module to {}", path.display());
    ui::success(&format!(
        "Default settings module set to {} ({})",
        settings_module,
        path.display()
    ));
    Ok(())
}
