use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use crate::server::board::Board;

/// Shared by every worker; each action holds the board lock for its whole update.
#[derive(Clone)]
pub(crate) struct AppState {
    board: Arc<Mutex<Board>>,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
        }
    }

    pub async fn board(&self) -> MutexGuard<'_, Board> {
        self.board.lock().await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::board::CardAction;
    use crate::server::model::card::Phase;
    use crate::server::model::order::fixture::order;
    use crate::server::model::order::BillStatus;

    #[actix_web::test]
    async fn clones_share_the_board() {
        let state = AppState::new(Board::new(vec![order("ORD001", BillStatus::Paid, &[])], 3, true));
        let other = state.clone();
        state.board().await.apply("ORD001", CardAction::ToggleExpanded).unwrap();
        assert!(other.board().await.card("ORD001").unwrap().expanded);
        assert_eq!(other.board().await.card("ORD001").unwrap().phase, Phase::Idle);
    }
}
