use pwdgen_core::vault;

use crate::app::AppContext;
use crate::ui::{badge, hint, Badge};

pub fn handle_init(ctx: &AppContext) -> anyhow::Result<()> {
    let paths = ctx.data_paths()?;
    vault::initialize(&paths)?;

    if !ctx.quiet() {
        let message = format!("Initialized pwdgen at {}", paths.dir().display());
        println!("{}", badge(ctx.ui(), Badge::Ok, &message));
        println!("{}", hint(ctx.ui(), "pwdgen gen <name>"));
    }
    Ok(())
}
