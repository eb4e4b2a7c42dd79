pub mod character;
pub mod embeds;
pub mod profile;
pub mod render;

use stellar_core::{Context, Error};
use stellar_utils::reply::Reply;
use tracing::warn;

use crate::star_rail::render::send_failure_reply;

/// Send a rendered reply; if Discord refuses it, answer with the error text instead.
pub(crate) async fn send_reply(ctx: Context<'_>, reply: Reply) -> Result<(), Error> {
    if let Err(err) = ctx.send(reply.into_create_reply()).await {
        warn!(?err, command = %ctx.command().qualified_name, "reply rejected");
        ctx.send(send_failure_reply(&err).into_create_reply())
            .await?;
    }

    Ok(())
}
