use stellar_core::{Context, Error};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Check that the bot is responding.",
    category: "utility",
    usage: "!ping",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn ping(ctx: Context<'_>) -> Result<(), Error> {
    let latency = ctx.ping().await;
    ctx.say(format!("Pong! Gateway latency: {}ms", latency.as_millis()))
        .await?;
    Ok(())
}
