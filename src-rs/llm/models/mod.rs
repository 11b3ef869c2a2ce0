// Provider clients and the interface the core generates text through

pub mod provider_handle;
pub mod provider_base;
pub mod claude;
pub mod openai;
