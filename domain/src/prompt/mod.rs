//! Prompt templates for the boardroom flow

mod template;

pub use template::PromptTemplate;
