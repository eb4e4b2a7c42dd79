use stellar_api::ProfileClient;

pub type Error = anyhow::Error;

/// Shared state handed to every command invocation.
#[derive(Clone, Debug)]
pub struct Data {
    pub profiles: ProfileClient,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
