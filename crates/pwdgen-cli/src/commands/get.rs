use pwdgen_core::vault;

use crate::app::AppContext;
use crate::cli::GetArgs;
use crate::ui::{badge, Badge};

pub fn handle_get(ctx: &AppContext, args: &GetArgs) -> anyhow::Result<()> {
    let paths = ctx.data_paths()?;
    let key = ctx.load_key(&paths)?;
    let store = ctx.open_store(&paths)?;
    let clipboard = ctx.clipboard()?;

    vault::retrieve_password(&store, &key, &clipboard, &args.name)?;

    if !ctx.quiet() {
        let message = format!("Password for {} copied to clipboard", args.name);
        println!("{}", badge(ctx.ui(), Badge::Ok, &message));
    }
    Ok(())
}
