pub(crate) mod advice_service;
pub(crate) mod format;
pub(crate) mod llm_service;
