// Match Engine: lexical JD / resume scoring.
// Pipeline: text → frequency → (similarity, keywords) → scoring → feedback.
// Everything below `handlers` is pure and synchronous; no module keeps state between calls.

pub mod feedback;
pub mod frequency;
pub mod handlers;
pub mod keywords;
pub mod scoring;
pub mod similarity;
pub mod text;
