// Resume Generation
// Implements: prompt compilation, one Gemini round trip, response normalization.
// All LLM calls go through llm_client, never directly to Gemini.

pub mod compiler;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod reference_profile;
