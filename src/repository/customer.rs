use diesel::prelude::*;

use crate::{
    domain::customer::{
        Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
        UpdateCustomer as DomainUpdateCustomer,
    },
    models::customer::{
        Customer as DbCustomer, NewCustomer as DbNewCustomer,
        UpdateCustomer as DbUpdateCustomer,
    },
    repository::{CustomerReader, CustomerWriter, DieselRepository},
    repository::errors::RepositoryResult,
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<DomainCustomer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .filter(customers::user_id.eq(user_id))
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(
        &self,
        new_customer: &DomainNewCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_new = DbNewCustomer::from(new_customer);

        let created = diesel::insert_into(customers::table)
            .values(&db_new)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        user_id: i32,
        updates: &DomainUpdateCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCustomer::from(updates);

        let target = customers::table.filter(customers::user_id.eq(user_id));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(updated.into())
    }
}
