pub mod inspect_config;
pub mod map_messages;
