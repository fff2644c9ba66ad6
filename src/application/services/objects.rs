//! Typed helpers over [`Storage`] shared by the entity services.

use crate::domain::entities::{Entity, Object};
use crate::domain::repositories::Storage;
use crate::error::AppError;

/// Every entity of type `E`, oldest first.
pub(crate) async fn list<E, S>(storage: &S) -> Result<Vec<E>, AppError>
where
    E: Entity,
    S: Storage + ?Sized,
{
    let objects = storage.all(E::KIND).await?;
    let mut entities: Vec<E> = objects.into_values().filter_map(E::from_object).collect();
    entities.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
    Ok(entities)
}

pub(crate) async fn find<E, S>(storage: &S, id: &str) -> Result<Option<E>, AppError>
where
    E: Entity,
    S: Storage + ?Sized,
{
    Ok(storage.get(E::KIND, id).await?.and_then(E::from_object))
}

/// Like [`find`], but a missing entity is [`AppError::NotFound`].
pub(crate) async fn fetch<E, S>(storage: &S, id: &str) -> Result<E, AppError>
where
    E: Entity,
    S: Storage + ?Sized,
{
    find(storage, id).await?.ok_or_else(AppError::not_found)
}

/// Stages a new `entity` and saves. A failed save discards the staged copy.
pub(crate) async fn create<E, S>(storage: &S, entity: E) -> Result<E, AppError>
where
    E: Entity,
    S: Storage + ?Sized,
{
    let object: Object = entity.clone().into();
    storage.insert(object.clone()).await?;
    save_or_undo(storage, Undo::Discard(object)).await?;
    Ok(entity)
}

/// Fetches the entity with `id`, applies `change` and saves. A failed save
/// restores the previous version.
pub(crate) async fn modify<E, S, F>(storage: &S, id: &str, change: F) -> Result<E, AppError>
where
    E: Entity,
    S: Storage + ?Sized,
    F: FnOnce(&mut E),
{
    let previous: E = fetch(storage, id).await?;
    let mut entity = previous.clone();
    change(&mut entity);

    storage.insert(entity.clone().into()).await?;
    save_or_undo(storage, Undo::Restore(previous.into())).await?;
    Ok(entity)
}

/// Removes the entity with `id` and saves. A failed save restores it.
pub(crate) async fn remove<E, S>(storage: &S, id: &str) -> Result<(), AppError>
where
    E: Entity,
    S: Storage + ?Sized,
{
    let object = storage
        .get(E::KIND, id)
        .await?
        .ok_or_else(AppError::not_found)?;
    storage.delete(&object).await?;
    save_or_undo(storage, Undo::Restore(object)).await
}

/// How to take back a staged change that could not be saved.
enum Undo {
    Discard(Object),
    Restore(Object),
}

async fn save_or_undo<S>(storage: &S, undo: Undo) -> Result<(), AppError>
where
    S: Storage + ?Sized,
{
    let Err(err) = storage.save().await else {
        return Ok(());
    };

    let undone = match undo {
        Undo::Discard(object) => storage.delete(&object).await,
        Undo::Restore(object) => storage.insert(object).await,
    };
    if let Err(e) = undone {
        tracing::warn!(error = %e, "failed to take back unsaved change");
    }

    Err(err.into())
}
