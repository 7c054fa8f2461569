use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

use crate::{
    domain::cart::{Cart as DomainCart, CartLine as DomainCartLine},
    models::cart::{Cart as DbCart, CartItem as DbCartItem, NewCart as DbNewCart, NewCartItem as DbNewCartItem},
    models::product::Product as DbProduct,
    repository::{CartReader, CartWriter, DieselRepository},
    repository::errors::{RepositoryError, RepositoryResult},
};

impl CartReader for DieselRepository {
    fn get_cart(&self, cart_id: &str) -> RepositoryResult<Option<DomainCart>> {
        use crate::schema::carts;

        let mut conn = self.conn()?;
        let cart = carts::table
            .find(cart_id)
            .first::<DbCart>(&mut conn)
            .optional()?;

        let Some(cart) = cart else {
            return Ok(None);
        };

        let lines = load_cart_lines(&mut conn, &cart.id)?;

        Ok(Some(DomainCart::new(cart.id, cart.created_at, lines)))
    }
}

impl CartWriter for DieselRepository {
    fn create_cart(&self) -> RepositoryResult<DomainCart> {
        use crate::schema::carts;

        let mut conn = self.conn()?;
        let token = Uuid::new_v4().to_string();

        let created = diesel::insert_into(carts::table)
            .values(&DbNewCart { id: &token })
            .get_result::<DbCart>(&mut conn)?;

        Ok(DomainCart::new(created.id, created.created_at, Vec::new()))
    }

    fn delete_cart(&self, cart_id: &str) -> RepositoryResult<()> {
        use crate::schema::{cart_items, carts};

        let mut conn = self.conn()?;

        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(cart_items::table.filter(cart_items::cart_id.eq(cart_id)))
                .execute(conn)?;

            let deleted = diesel::delete(carts::table.find(cart_id)).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }

    fn add_cart_item(
        &self,
        cart_id: &str,
        product_id: i32,
        quantity: i32,
    ) -> RepositoryResult<DomainCartLine> {
        use crate::schema::{cart_items, carts, products};

        let mut conn = self.conn()?;

        conn.transaction::<DomainCartLine, RepositoryError, _>(|conn| {
            let cart_exists = carts::table
                .find(cart_id)
                .select(carts::id)
                .first::<String>(conn)
                .optional()?
                .is_some();

            if !cart_exists {
                return Err(RepositoryError::NotFound);
            }

            let product = products::table
                .find(product_id)
                .first::<DbProduct>(conn)
                .optional()?;

            let Some(product) = product else {
                return Err(RepositoryError::Validation(
                    "no product with the given identifier".to_string(),
                ));
            };

            let existing = cart_items::table
                .filter(cart_items::cart_id.eq(cart_id))
                .filter(cart_items::product_id.eq(product_id))
                .first::<DbCartItem>(conn)
                .optional()?;

            // One line per (cart, product): a repeated add accumulates
            // into the existing line.
            let line = match existing {
                Some(existing) => diesel::update(cart_items::table.find(existing.id))
                    .set((
                        cart_items::quantity.eq(existing.quantity + quantity),
                        cart_items::updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .get_result::<DbCartItem>(conn)?,
                None => diesel::insert_into(cart_items::table)
                    .values(&DbNewCartItem {
                        cart_id,
                        product_id,
                        quantity,
                        updated_at: chrono::Utc::now().naive_utc(),
                    })
                    .get_result::<DbCartItem>(conn)?,
            };

            Ok(line.into_domain(&product))
        })
    }

    fn update_cart_item(
        &self,
        cart_id: &str,
        item_id: i32,
        quantity: i32,
    ) -> RepositoryResult<DomainCartLine> {
        use crate::schema::{cart_items, products};

        let mut conn = self.conn()?;

        conn.transaction::<DomainCartLine, RepositoryError, _>(|conn| {
            let target = cart_items::table
                .filter(cart_items::id.eq(item_id))
                .filter(cart_items::cart_id.eq(cart_id));

            let updated = diesel::update(target)
                .set((
                    cart_items::quantity.eq(quantity),
                    cart_items::updated_at.eq(chrono::Utc::now().naive_utc()),
                ))
                .get_result::<DbCartItem>(conn)?;

            let product = products::table
                .find(updated.product_id)
                .first::<DbProduct>(conn)?;

            Ok(updated.into_domain(&product))
        })
    }

    fn remove_cart_item(&self, cart_id: &str, item_id: i32) -> RepositoryResult<()> {
        use crate::schema::cart_items;

        let mut conn = self.conn()?;

        let target = cart_items::table
            .filter(cart_items::id.eq(item_id))
            .filter(cart_items::cart_id.eq(cart_id));

        // The cart itself stays around even when its last line goes;
        // only checkout or an explicit delete removes it.
        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn load_cart_lines(
    conn: &mut SqliteConnection,
    cart_id: &str,
) -> RepositoryResult<Vec<DomainCartLine>> {
    use crate::schema::{cart_items, products};

    let rows = cart_items::table
        .inner_join(products::table)
        .filter(cart_items::cart_id.eq(cart_id))
        .order(cart_items::id.asc())
        .load::<(DbCartItem, DbProduct)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(item, product)| item.into_domain(&product))
        .collect())
}
