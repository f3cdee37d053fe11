/*
 * Responsibility
 * - middleware の公開インターフェース
 * - approov (token / token binding), http (request id, trace, limits), security_headers
 */
pub mod approov;
pub mod http;
pub mod security_headers;
