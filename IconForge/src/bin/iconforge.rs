fn main() -> anyhow::Result<()> {
    iconforge::cli::run_cli()
}
