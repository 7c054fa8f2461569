pub mod auth;
pub mod cart;
pub mod collection;
pub mod customer;
pub mod order;
pub mod product;
pub mod review;
