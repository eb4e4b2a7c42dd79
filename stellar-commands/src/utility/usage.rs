use stellar_core::{Context, Error};
use stellar_utils::COMMAND_PREFIX;

use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "!usage <command>",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn usage(
    ctx: Context<'_>,
    #[description = "Command name"] command: Option<String>,
) -> Result<(), Error> {
    let Some(raw_name) = command.as_deref() else {
        ctx.say(format!("Usage: `{}`", META.usage)).await?;
        return Ok(());
    };

    let lookup = normalize_command_name(raw_name);

    let Some(command) = find_command(&lookup) else {
        ctx.say(format!("Unknown command: `{}`", lookup)).await?;
        return Ok(());
    };

    ctx.say(format!("Usage: `{}`", command.usage)).await?;
    Ok(())
}

fn normalize_command_name(raw: &str) -> String {
    raw.trim()
        .trim_start_matches(COMMAND_PREFIX)
        .to_ascii_lowercase()
}

fn find_command(name: &str) -> Option<&'static CommandMeta> {
    COMMANDS.iter().find(|command| command.name == name)
}
