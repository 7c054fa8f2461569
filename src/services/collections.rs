use crate::domain::collection::Collection;
use crate::forms::collections::{AddCollectionForm, EditCollectionForm};
use crate::repository::errors::RepositoryError;
use crate::repository::{CollectionReader, CollectionWriter};
use crate::services::{ServiceError, ServiceResult};

fn no_collection() -> ServiceError {
    ServiceError::NotFound("no collection with the given identifier".to_string())
}

/// Lists all collections with their product counts.
pub fn list_collections<R>(repo: &R) -> ServiceResult<Vec<Collection>>
where
    R: CollectionReader + ?Sized,
{
    repo.list_collections().map_err(ServiceError::from)
}

/// Fetches a single collection.
pub fn get_collection<R>(repo: &R, collection_id: i32) -> ServiceResult<Collection>
where
    R: CollectionReader + ?Sized,
{
    repo.get_collection_by_id(collection_id)
        .map_err(ServiceError::from)?
        .ok_or_else(no_collection)
}

/// Creates a new collection.
pub fn create_collection<R>(repo: &R, form: AddCollectionForm) -> ServiceResult<Collection>
where
    R: CollectionWriter + ?Sized,
{
    let new_collection = form
        .into_new_collection()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.create_collection(&new_collection)
        .map_err(ServiceError::from)
}

/// Renames an existing collection.
pub fn update_collection<R>(
    repo: &R,
    collection_id: i32,
    form: EditCollectionForm,
) -> ServiceResult<Collection>
where
    R: CollectionWriter + ?Sized,
{
    let update = form
        .into_update_collection()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.update_collection(collection_id, &update)
        .map_err(|err| match err {
            RepositoryError::NotFound => no_collection(),
            other => ServiceError::from(other),
        })
}

/// Deletes a collection, refusing while any product still references it.
pub fn delete_collection<R>(repo: &R, collection_id: i32) -> ServiceResult<()>
where
    R: CollectionReader + CollectionWriter + ?Sized,
{
    if repo.collection_has_products(collection_id)? {
        return Err(ServiceError::Conflict(
            "collection has associated products".to_string(),
        ));
    }

    repo.delete_collection(collection_id)
        .map_err(|err| match err {
            RepositoryError::NotFound => no_collection(),
            other => ServiceError::from(other),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockCollectionWriter;

    #[test]
    fn delete_collection_with_products_is_conflict() {
        let mut repo = MockCollectionWriter::new();

        repo.expect_collection_has_products()
            .times(1)
            .returning(|_| Ok(true));
        // The delete must never reach the storage layer.
        repo.expect_delete_collection().times(0);

        let result = delete_collection(&repo, 7);

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn delete_empty_collection_succeeds() {
        let mut repo = MockCollectionWriter::new();

        repo.expect_collection_has_products()
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_delete_collection()
            .times(1)
            .withf(|id| *id == 7)
            .returning(|_| Ok(()));

        let result = delete_collection(&repo, 7);

        assert!(result.is_ok());
    }

    #[test]
    fn create_collection_rejects_blank_title() {
        let repo = MockCollectionWriter::new();
        let form = AddCollectionForm {
            title: "  ".to_string(),
        };

        let result = create_collection(&repo, form);

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
