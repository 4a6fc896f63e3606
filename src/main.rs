pub mod cli;
pub mod error;
pub mod inference;
pub mod loader;
pub mod pipeline;
pub mod schema;
pub mod writer;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}
