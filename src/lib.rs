/*
 * Responsibility
 * - crate の公開モジュール (binary と test から使う)
 * - services::approov が中核 (token 検証 → token binding)、それ以外は HTTP の接続部分
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
