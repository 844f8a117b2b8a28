pub(crate) mod user_store;
