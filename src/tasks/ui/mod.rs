pub mod color;
pub mod logging;
pub mod cli_deserialize;
