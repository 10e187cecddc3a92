// Skill-match recommendation engine.
// Implements: vocabulary building, binary vector encoding, cosine scoring,
// threshold/cap ranking. Pure and synchronous: all I/O stays in the feed
// adapters, and every request builds its own vocabulary from its inputs.

pub mod engine;
pub mod handlers;
pub mod ranking;
pub mod similarity;
pub mod vector;
pub mod vocabulary;
