// Build-time command for writing the bundled plugin set into the settings store

use crate::commands::BuildContext;
use crate::constants;
use crate::settings_store::SettingsStore;
use crate::ui;
use anyhow::Context;
use log::{debug, info};

pub async fn configure_build_time(ctx: &mut BuildContext) -> anyhow::Result<()> {
    let Some(source) = ctx.env.build_time_plugins.clone() else {
        debug!("{} not set, skipping", constants::BUILD_TIME_PLUGINS_VAR);
        return Ok(());
    };

    let plugins = ctx
        .loader
        .load(&source)
        .await
        .with_context(|| format!("Failed to load build-time plugins from {}", source))?;

    let store_path = &ctx.paths.settings_store;

    if ctx.dry_run {
        ui::status(
            "[DRY RUN]",
            &format!(
                "Would set {} to {} plugin(s) in {}",
                constants::INSTALLED_APPS_KEY,
                plugins.len(),
                store_path.display()
            ),
        );
        return Ok(());
    }

    let mut store = SettingsStore::load(store_path)?;
    let count = plugins.len();
    store.set_installed_apps(plugins);
    store.save(store_path)?;

    info!(
        "Wrote {} build-time plugin(s) to {}",
        count,
        store_path.display()
    );
    ui::success(&format!(
        "Set {} ({} plugin(s)) in {}",
        constants::INSTALLED_APPS_KEY,
        count,
        store_path.display()
    ));
    Ok(())
}
