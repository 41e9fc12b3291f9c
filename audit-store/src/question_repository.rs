use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::{NewQuestion, ResolvedQuestion};

/// Repository for the versioned question bank
#[derive(Debug, Clone)]
pub struct QuestionRepository {
    pool: Pool<Postgres>,
}

impl QuestionRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Resolve an ordered batch of question definitions under one version
    /// tag to stable question identifiers, creating rows only for text not
    /// yet registered under that tag.
    ///
    /// The whole batch runs in one transaction; any error rolls back every
    /// insert. Resolution is idempotent per (version_tag, text): the
    /// conditional insert either creates the row or yields to the existing
    /// one, so concurrent identical batches cannot produce duplicates.
    pub async fn resolve_batch(
        &self,
        version_tag: &str,
        definitions: &[NewQuestion],
    ) -> StoreResult<Vec<ResolvedQuestion>> {
        let mut tx = self.pool.begin().await?;
        let mut items = Vec::with_capacity(definitions.len());

        for (index, definition) in definitions.iter().enumerate() {
            let inserted: Option<(Uuid,)> = sqlx::query_as(
                r#"
                INSERT INTO questions (
                    question_id, text, category, mandatory, source_doc,
                    version_tag, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT (version_tag, text) DO NOTHING
                RETURNING question_id
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&definition.text)
            .bind(&definition.category)
            .bind(definition.mandatory)
            .bind(&definition.source_doc)
            .bind(version_tag)
            .bind(Utc::now())
            .fetch_optional(&mut *tx)
            .await?;

            let question_id = match inserted {
                Some((question_id,)) => question_id,
                // No row returned: the (version_tag, text) pair already exists.
                None => {
                    let (question_id,): (Uuid,) = sqlx::query_as(
                        "SELECT question_id FROM questions WHERE version_tag = $1 AND text = $2",
                    )
                    .bind(version_tag)
                    .bind(&definition.text)
                    .fetch_one(&mut *tx)
                    .await?;
                    question_id
                }
            };

            items.push(ResolvedQuestion { index, question_id });
        }

        tx.commit().await?;

        Ok(items)
    }
}
