// chatlens: offline analysis for exported chat logs
//
// This is the library root. Each module corresponds to a stage of one of
// the three analysis pipelines (preprocess, features, sentiment).

pub mod chat;
pub mod config;
pub mod corpus;
pub mod features;
pub mod output;
pub mod pipeline;
pub mod preprocess;
pub mod render;
pub mod sentiment;
