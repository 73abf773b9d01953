//! Marketplace API clients

pub mod ozon;
pub mod yandex;

pub use ozon::{OzonClient, OzonError};
pub use yandex::{YandexClient, YandexError};
