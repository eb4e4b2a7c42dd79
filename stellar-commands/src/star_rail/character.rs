use tracing::info;

use crate::CommandMeta;
use crate::star_rail::embeds::usage_message;
use crate::star_rail::send_reply;
use crate::star_rail::render::character_reply;
use stellar_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "character",
    desc: "Show the build of one showcased character.",
    category: "profile",
    usage: "!character <uid> <number>",
};

#[poise::command(prefix_command, slash_command, category = "Profile")]
pub async fn character(
    ctx: Context<'_>,
    #[description = "Player UID"] uid: Option<String>,
    #[description = "Character number from the profile list"] number: Option<i64>,
) -> Result<(), Error> {
    let (Some(uid), Some(number)) = (uid, number) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    info!(uid = %uid, number, author = ctx.author().id.get(), "character lookup requested");
    ctx.defer().await?;

    let lookup = ctx.data().profiles.lookup(&uid).await;
    send_reply(ctx, character_reply(&uid, number, lookup)).await
}
