use crate::config::ServerConfig;

pub struct ServerState {
    pub config: ServerConfig,
    // Shared so relayed requests reuse backend connections
    pub client: reqwest::Client,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("travelmate-relay/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }
}
