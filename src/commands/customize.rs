// Customize command running every configuration step in order

use crate::commands::BuildContext;
use crate::commands::build_time::configure_build_time;
use crate::commands::default_settings::configure_default_settings;
use crate::commands::run_time::configure_run_time;
use crate::ui;

/// Run build-time, default-settings and run-time configuration, in that order.
///
/// Each step skips itself when its variable is unset. The first failure stops
/// the run.
pub async fn customize(ctx: &mut BuildContext) -> anyhow::Result<()> {
    if ctx.dry_run {
        ui::status("[DRY RUN]", "Previewing build customization...");
    }

    configure_build_time(ctx).await?;
    configure_default_settings(ctx)?;
    configure_run_time(ctx).await?;

    Ok(())
}
