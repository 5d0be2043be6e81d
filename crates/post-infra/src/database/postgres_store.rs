//! PostgreSQL implementation of the post store.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use post_core::domain::{Category, PageRequest, Post};
use post_core::error::StoreError;
use post_core::ports::{NewCategory, NewPost, PostPatch, PostStore};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::post::{self, Entity as PostEntity};

/// Post store backed by the `posts` and `categories` tables.
pub struct PostgresPostStore {
    pub(crate) db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Postgres binds OFFSET as BIGINT; anything past `i64::MAX` cannot match a row.
fn bounded_offset(page: PageRequest) -> Option<u64> {
    let offset = page.offset();
    (offset <= i64::MAX as u64).then_some(offset)
}

fn store_error(err: DbErr) -> StoreError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Connection(err.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn list_posts(
        &self,
        category_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Vec<Post>, StoreError> {
        let Some(offset) = bounded_offset(page) else {
            return Ok(Vec::new());
        };

        let mut query = PostEntity::find();
        if let Some(category_id) = category_id {
            query = query.filter(post::Column::CategoryId.eq(category_id));
        }

        let result = query
            .order_by_desc(post::Column::CreatedAt)
            .offset(offset)
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn get_post(&self, id: Uuid) -> Result<Post, StoreError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_error)?;

        result.map(Into::into).ok_or(StoreError::NotFound)
    }

    async fn create_post(&self, new: NewPost) -> Result<Post, StoreError> {
        let post = Post::new(new.user_id, new.category_id, new.title, new.url);
        let active_model: post::ActiveModel = post.clone().into();

        let rows = PostEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(store_error)?;

        if rows == 0 {
            return Err(StoreError::NotCreated { entity: "post" });
        }

        Ok(post)
    }

    async fn update_post(&self, id: Uuid, patch: PostPatch) -> Result<(), StoreError> {
        let now: DateTimeWithTimeZone = Utc::now().trunc_subsecs(6).into();

        // modified_at never drops below created_at, whatever the clock says.
        let modified_at = Func::greatest([
            Expr::col(post::Column::CreatedAt).into(),
            Expr::value(now),
        ]);

        // Empty fields are left out of the SET list so the column keeps its value.
        let mut update = PostEntity::update_many()
            .col_expr(post::Column::ModifiedAt, modified_at.into())
            .filter(post::Column::Id.eq(id));
        if !patch.title.is_empty() {
            update = update.col_expr(post::Column::Title, Expr::value(patch.title));
        }
        if !patch.url.is_empty() {
            update = update.col_expr(post::Column::Url, Expr::value(patch.url));
        }

        let result = update.exec(&self.db).await.map_err(store_error)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn post_exists(&self, id: Uuid) -> Result<bool, StoreError> {
        let count = PostEntity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(store_error)?;

        Ok(count > 0)
    }

    async fn post_owner(&self, id: Uuid) -> Result<Uuid, StoreError> {
        let owner: Option<Uuid> = PostEntity::find_by_id(id)
            .select_only()
            .column(post::Column::UserId)
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(store_error)?;

        owner.ok_or(StoreError::NotFound)
    }

    async fn list_categories(&self, page: PageRequest) -> Result<Vec<Category>, StoreError> {
        let Some(offset) = bounded_offset(page) else {
            return Ok(Vec::new());
        };

        let result = CategoryEntity::find()
            .order_by_asc(category::Column::Name)
            .order_by_asc(category::Column::Id)
            .offset(offset)
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create_category(&self, new: NewCategory) -> Result<Category, StoreError> {
        let category = Category::new(new.user_id, new.name);
        let active_model: category::ActiveModel = category.clone().into();

        let rows = CategoryEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(store_error)?;

        if rows == 0 {
            return Err(StoreError::NotCreated { entity: "category" });
        }

        Ok(category)
    }
}
