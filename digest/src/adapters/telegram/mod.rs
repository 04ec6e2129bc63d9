//! Telegram adapter

pub mod client;

pub use client::TelegramClientImpl;
