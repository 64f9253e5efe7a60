// Pipeline orchestration — one module per subcommand.

pub mod features;
pub mod preprocess;
pub mod sentiment;
