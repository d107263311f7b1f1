pub mod cli;
mod render;
