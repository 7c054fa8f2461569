use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: i32,
    pub user_id: i32,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub user_id: i32,
    pub phone: &'a str,
    pub birth_date: Option<NaiveDate>,
    pub membership: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
pub struct UpdateCustomer<'a> {
    pub phone: Option<&'a str>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub membership: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            phone: value.phone,
            birth_date: value.birth_date,
            membership: value.membership.as_str().into(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(value: &'a DomainNewCustomer) -> Self {
        Self {
            user_id: value.user_id,
            phone: value.phone.as_str(),
            birth_date: value.birth_date,
            membership: value.membership.into(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(value: &'a DomainUpdateCustomer) -> Self {
        Self {
            phone: value.phone.as_deref(),
            birth_date: value.birth_date,
            membership: value.membership.map(Into::into),
            updated_at: value.updated_at,
        }
    }
}
