/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Extraction is stateless, so there is nothing to share yet
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
