use std::collections::HashMap;

use diesel::dsl::{count_star, exists, select};
use diesel::prelude::*;

use crate::{
    domain::collection::{
        Collection as DomainCollection, NewCollection as DomainNewCollection,
        UpdateCollection as DomainUpdateCollection,
    },
    models::collection::{
        Collection as DbCollection, NewCollection as DbNewCollection,
        UpdateCollection as DbUpdateCollection,
    },
    repository::{CollectionReader, CollectionWriter, DieselRepository},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl CollectionReader for DieselRepository {
    fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCollection>> {
        use crate::schema::{collections, products};

        let mut conn = self.conn()?;
        let collection = collections::table
            .find(id)
            .first::<DbCollection>(&mut conn)
            .optional()?;

        let Some(collection) = collection else {
            return Ok(None);
        };

        let product_count = products::table
            .filter(products::collection_id.eq(collection.id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(Some(collection.into_domain(product_count)))
    }

    fn list_collections(&self) -> RepositoryResult<Vec<DomainCollection>> {
        use crate::schema::{collections, products};

        let mut conn = self.conn()?;

        let db_collections = collections::table
            .order(collections::title.asc())
            .load::<DbCollection>(&mut conn)?;

        if db_collections.is_empty() {
            return Ok(Vec::new());
        }

        let counts: HashMap<i32, i64> = products::table
            .group_by(products::collection_id)
            .select((products::collection_id, count_star()))
            .load::<(i32, i64)>(&mut conn)?
            .into_iter()
            .collect();

        Ok(db_collections
            .into_iter()
            .map(|collection| {
                let count = counts.get(&collection.id).copied().unwrap_or(0);
                collection.into_domain(count)
            })
            .collect())
    }

    fn collection_has_products(&self, id: i32) -> RepositoryResult<bool> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let has_products: bool = select(exists(
            products::table.filter(products::collection_id.eq(id)),
        ))
        .get_result(&mut conn)?;

        Ok(has_products)
    }
}

impl CollectionWriter for DieselRepository {
    fn create_collection(
        &self,
        new_collection: &DomainNewCollection,
    ) -> RepositoryResult<DomainCollection> {
        use crate::schema::collections;

        let mut conn = self.conn()?;
        let db_new = DbNewCollection::from(new_collection);

        let created = diesel::insert_into(collections::table)
            .values(&db_new)
            .get_result::<DbCollection>(&mut conn)?;

        // A fresh collection cannot own products yet.
        Ok(created.into_domain(0))
    }

    fn update_collection(
        &self,
        collection_id: i32,
        updates: &DomainUpdateCollection,
    ) -> RepositoryResult<DomainCollection> {
        use crate::schema::{collections, products};

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCollection::from(updates);

        let updated = diesel::update(collections::table.find(collection_id))
            .set(&db_updates)
            .get_result::<DbCollection>(&mut conn)?;

        let product_count = products::table
            .filter(products::collection_id.eq(updated.id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(updated.into_domain(product_count))
    }

    fn delete_collection(&self, collection_id: i32) -> RepositoryResult<()> {
        use crate::schema::collections;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(collections::table.find(collection_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
