pub(crate) mod portfolio_queries;
pub(crate) mod portfolio_store;
