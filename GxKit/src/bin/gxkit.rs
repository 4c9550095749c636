fn main() -> anyhow::Result<()> {
    gxkit::cli::run_cli()
}
