use crate::cli::Args;
use crate::rounds::models::Round;
use crate::scoring::ScoringPolicyKind;
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::storage::sockets::HashMapClientSocketsStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub sockets: HashMapClientSocketsStorage,
    /// Policy of sessions created without an explicit choice.
    pub default_scoring: ScoringPolicyKind,
}

pub struct RequestContext {
    pub session_id: String,
}

pub fn init(args: &Args, rounds: Arc<[Round]>) -> AppContext<HashMapSessionsStorage> {
    AppContext {
        sessions: HashMapSessionsStorage::new(rounds, args.round_duration_secs),
        sockets: HashMapClientSocketsStorage::default(),
        default_scoring: args.scoring,
    }
}
