pub mod discord;

pub use discord::DiscordNotifier;
