use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = trialgen::Cli::parse();
    trialgen::logging::init(cli.debug);
    tracing::debug!(?cli, "trialgen started");

    trialgen::run(&cli, &mut std::io::stdout().lock()).map(|_| ())
}
