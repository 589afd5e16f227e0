use std::io::{self, BufWriter};
use std::process;

use clap::{App, Arg, ArgMatches};

use hf_lister::hub::config::{Config, DEFAULT_ENDPOINT, DEFAULT_REPO_ID};
use hf_lister::hub::HubClient;
use hf_lister::{lister, Result};

fn app() -> App<'static, 'static> {
    App::new("hf-lister")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the files of a Hugging Face Hub repository, largest first")
        .arg(
            Arg::with_name("repo_id")
                .value_name("REPO_ID")
                .help("Repository identifier, `owner/name`")
                .default_value(DEFAULT_REPO_ID),
        )
        .arg(
            Arg::with_name("repo_type")
                .long("repo-type")
                .value_name("TYPE")
                .possible_values(&["model", "dataset", "space"])
                .default_value("dataset"),
        )
        .arg(
            Arg::with_name("revision")
                .long("revision")
                .value_name("REV")
                .help("Branch, tag or commit to list"),
        )
        .arg(
            Arg::with_name("endpoint")
                .long("endpoint")
                .value_name("URL")
                .env("HF_ENDPOINT")
                .default_value(DEFAULT_ENDPOINT),
        )
        .arg(
            Arg::with_name("skip_sizes")
                .long("skip-sizes")
                .help("Do not ask the hub for file sizes; files keep response order"),
        )
}

fn config_from(matches: &ArgMatches) -> Result<Config> {
    let repo_type = matches.value_of("repo_type").unwrap_or("dataset").parse()?;
    let config = Config {
        repo_id: matches.value_of("repo_id").unwrap_or(DEFAULT_REPO_ID).to_owned(),
        repo_type,
        revision: matches.value_of("revision").map(str::to_owned),
        endpoint: matches
            .value_of("endpoint")
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_owned(),
        files_metadata: !matches.is_present("skip_sizes"),
    };
    config.validate()?;
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = config_from(matches)?;
    tracing::debug!("config: {:?}", config);

    let client = HubClient::new(&config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = lister::run(&client, &config.repo_id, config.repo_type, &mut out)?;
    tracing::info!("listed {} files of {}", count, config.repo_id);
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = app().get_matches();
    if let Err(e) = run(&matches) {
        tracing::debug!("run failed: {:?}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
