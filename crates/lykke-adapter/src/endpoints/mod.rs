/*
[INPUT]:  Endpoint arguments (asset pair ids, emails, counts, periods)
[OUTPUT]: Request descriptors (verb, path, parameters) per API endpoint
[POS]:    Request builder layer - pure mapping from calls to request shapes
[UPDATE]: When adding endpoints or changing paths
*/

pub mod public;
pub mod wallet;
