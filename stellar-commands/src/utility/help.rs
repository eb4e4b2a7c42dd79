use crate::utility::embeds::{help_card, unknown_category_message};
use crate::{COMMANDS, CommandMeta};
use stellar_core::{Context, Error};
use stellar_utils::reply::Reply;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help [category]",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Category"] category: Option<String>,
) -> Result<(), Error> {
    let category = category.map(|raw| raw.trim().to_ascii_lowercase());
    let categories = command_categories();

    if let Some(wanted_category) = category.as_deref()
        && !categories.contains(&wanted_category)
    {
        ctx.say(unknown_category_message(wanted_category, &categories))
            .await?;
        return Ok(());
    }

    let commands = sorted_commands(category.as_deref());
    ctx.send(Reply::from(help_card(&commands)).into_create_reply())
        .await?;
    Ok(())
}

fn command_categories() -> Vec<&'static str> {
    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut filtered: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|cmd| match category {
            Some(wanted) => cmd.category == wanted,
            None => true,
        })
        .collect();

    filtered.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    filtered
}
