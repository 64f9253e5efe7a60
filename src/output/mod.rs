// Output formatting — terminal summaries for each pipeline.

pub mod terminal;
