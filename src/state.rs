/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: gate: AttestationGate (起動時に一度だけ組み立て、以後は不変)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::approov::AttestationGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<AttestationGate>,
}

impl AppState {
    pub fn new(gate: Arc<AttestationGate>) -> Self {
        Self { gate }
    }
}
