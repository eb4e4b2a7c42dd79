mod config;

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use config::BotConfig;
use stellar_api::ProfileClient;
use stellar_core::{Data, Error};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = BotConfig::from_env()?;
    info!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.timeout.map(|timeout| timeout.as_secs()),
        "Profile service configured."
    );

    let profiles = ProfileClient::new(config.api.clone())?;
    let guild_id = config.guild_id;

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: stellar_commands::commands(),
            on_error: |error| Box::pin(on_error(error)),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(stellar_utils::COMMAND_PREFIX.to_string()),
                mention_as_prefix: false,
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            let profiles = profiles.clone();
            Box::pin(async move {
                info!(user = %ready.user.name, "Stellar is online!");

                let commands = &framework.options().commands;
                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            commands,
                            serenity::GuildId::new(guild_id),
                        )
                        .await?;
                        info!(guild_id, "Slash commands registered in guild.");
                    }
                    None => {
                        poise::builtins::register_globally(ctx, commands).await?;
                        info!("Slash commands registered globally.");
                    }
                }

                Ok(Data { profiles })
            })
        })
        .build();

    info!("Stellar is connecting...");

    let mut client = serenity::ClientBuilder::new(config.token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, command = %ctx.command().qualified_name, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Command Error")
                .description("Something went wrong while running this command.")
                .color(stellar_utils::embed::ERROR_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::ArgumentParse { ctx, input, .. } => {
            let usage = stellar_commands::COMMANDS
                .iter()
                .find(|meta| meta.name == ctx.command().name)
                .map(|meta| meta.usage.to_owned())
                .unwrap_or_else(|| {
                    format!(
                        "{}{}",
                        stellar_utils::COMMAND_PREFIX,
                        ctx.command().qualified_name
                    )
                });
            let description = if let Some(input) = input {
                format!("Invalid argument: `{}`\nUsage: `{}`", input, usage)
            } else {
                format!("Missing required argument.\nUsage: `{}`", usage)
            };

            let _ = ctx.say(description).await;
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}
