use crate::db::{DbPool, OrmConn};
use crate::search::{DbCatalog, SearchSession};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub search: SearchSession<DbCatalog>,
}
