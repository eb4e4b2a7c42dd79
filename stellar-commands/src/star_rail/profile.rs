use tracing::info;

use crate::CommandMeta;
use crate::star_rail::embeds::usage_message;
use crate::star_rail::send_reply;
use crate::star_rail::render::profile_reply;
use stellar_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "profile",
    desc: "Show a player's profile and character showcase.",
    category: "profile",
    usage: "!profile <uid>",
};

#[poise::command(prefix_command, slash_command, category = "Profile")]
pub async fn profile(
    ctx: Context<'_>,
    #[description = "Player UID"] uid: Option<String>,
) -> Result<(), Error> {
    let Some(uid) = uid else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    info!(uid = %uid, author = ctx.author().id.get(), "profile lookup requested");
    ctx.defer().await?;

    let lookup = ctx.data().profiles.lookup(&uid).await;
    send_reply(ctx, profile_reply(&uid, lookup)).await
}
