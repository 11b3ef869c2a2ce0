

#[cfg(test)]
pub mod ffi {
    pub mod visual_core_util;
}

#[cfg(test)]
pub mod visualization {
    pub mod normalizer;
    pub mod request;
    pub mod schema;
}

#[cfg(test)]
pub mod llm {
    pub mod models {
        pub mod claude;
        pub mod openai;
        pub mod provider_base;
        pub mod provider_handle;
    }
    pub mod prompts;
}
