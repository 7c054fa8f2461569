use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::collection::{
    Collection as DomainCollection, NewCollection as DomainNewCollection,
    UpdateCollection as DomainUpdateCollection,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::collections)]
pub struct Collection {
    pub id: i32,
    pub title: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::collections)]
pub struct NewCollection<'a> {
    pub title: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::collections)]
pub struct UpdateCollection<'a> {
    pub title: &'a str,
    pub updated_at: NaiveDateTime,
}

impl Collection {
    pub fn into_domain(self, product_count: i64) -> DomainCollection {
        DomainCollection {
            id: self.id,
            title: self.title,
            product_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCollection> for NewCollection<'a> {
    fn from(value: &'a DomainNewCollection) -> Self {
        Self {
            title: value.title.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateCollection> for UpdateCollection<'a> {
    fn from(value: &'a DomainUpdateCollection) -> Self {
        Self {
            title: value.title.as_str(),
            updated_at: value.updated_at,
        }
    }
}
