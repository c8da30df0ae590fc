use pwdgen_core::vault;

use crate::app::AppContext;
use crate::cli::GenArgs;
use crate::ui::{badge, Badge};

pub fn handle_gen(ctx: &AppContext, args: &GenArgs) -> anyhow::Result<()> {
    let length = match args.length {
        Some(length) => length,
        None => ctx.default_length()?,
    };
    let paths = ctx.data_paths()?;
    let key = ctx.load_key(&paths)?;
    let mut store = ctx.open_store(&paths)?;
    let clipboard = ctx.clipboard()?;

    let outcome = vault::generate_password(&mut store, &key, &clipboard, &args.name, length)?;

    if !ctx.quiet() {
        if outcome.replaced() {
            let message = format!("Replaced the existing password for {}", args.name);
            println!("{}", badge(ctx.ui(), Badge::Warn, &message));
        }
        let message = format!("Password for {} copied to clipboard", args.name);
        println!("{}", badge(ctx.ui(), Badge::Ok, &message));
    }
    Ok(())
}
