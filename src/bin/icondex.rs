//! icondex command-line binary

fn main() -> anyhow::Result<()> {
    icondex::cli::run_cli()
}
