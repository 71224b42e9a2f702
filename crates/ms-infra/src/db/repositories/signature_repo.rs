use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use ms_core::ports::{SignatureCacheError, SignatureCachePort};
use ms_core::Signature;

use crate::db::models::{NewSignatureRow, SignatureRow};
use crate::db::ports::DbExecutor;
use crate::db::schema::signatures;

/// SQLite-backed signature cache.
///
/// Every `replace_all` runs its clear and its inserts inside one transaction,
/// so readers only ever observe an empty cache or a complete batch.
pub struct DieselSignatureCacheRepository<E> {
    executor: E,
}

impl<E> DieselSignatureCacheRepository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E> SignatureCachePort for DieselSignatureCacheRepository<E>
where
    E: DbExecutor,
{
    async fn replace_all(&self, batch: &[Signature]) -> Result<(), SignatureCacheError> {
        let rows: Vec<NewSignatureRow<'_>> =
            batch.iter().enumerate().map(NewSignatureRow::from).collect();

        self.executor
            .run(|conn| {
                conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    let removed = diesel::delete(signatures::table).execute(conn)?;
                    for row in &rows {
                        diesel::insert_into(signatures::table)
                            .values(row)
                            .execute(conn)?;
                    }
                    debug!(removed, inserted = rows.len(), "Signature cache replaced");
                    Ok(())
                })
                .map_err(|e| anyhow::anyhow!(e.to_string()))
            })
            .map_err(|e| SignatureCacheError::Storage(e.to_string()))
    }

    async fn read_all(&self) -> Result<Vec<Signature>, SignatureCacheError> {
        self.executor
            .run(|conn| {
                let rows = signatures::table
                    .order(signatures::id.asc())
                    .select(SignatureRow::as_select())
                    .load::<SignatureRow>(conn)
                    .map_err(|e| anyhow::anyhow!(e.to_string()))?;

                Ok(rows.into_iter().map(Signature::from).collect())
            })
            .map_err(|e| SignatureCacheError::Storage(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SignatureCacheError> {
        self.executor
            .run(|conn| {
                let removed = diesel::delete(signatures::table)
                    .execute(conn)
                    .map_err(|e| anyhow::anyhow!(e.to_string()))?;
                debug!(removed, "Signature cache cleared");
                Ok(())
            })
            .map_err(|e| SignatureCacheError::Storage(e.to_string()))
    }
}
