/*
 * Responsibility
 * - API の公開ポイント (routes の re-export)
 * - Approov で守るルートと守らないルートを分けて公開する
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::{protected_routes, public_routes};
