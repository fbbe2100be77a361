//! squeeze CLI
//!
//! Uploads an image to the compression service and prints the savings.

use clap::{Arg, ArgAction, Command};
use squeeze_upload::{
    logging, upload_file, ClientConfig, FileDescriptor, FileSelection, FileUpload, HttpTransport,
    SqueezeError, TerminalView, UploadController,
};
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("squeeze")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Upload JPEG/PNG images to the compression service")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("endpoint")
                .short('e')
                .long("endpoint")
                .help("Base URL of the compression service")
                .global(true),
        )
        .subcommand(
            Command::new("upload")
                .about("Upload one image and show the compression summary")
                .arg(
                    Arg::new("file")
                        .help("Image to upload")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check whether files would be accepted for upload")
                .arg(
                    Arg::new("files")
                        .help("Files to check")
                        .required(true)
                        .num_args(1..)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let matches = cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let verbose = matches.get_count("verbose");
    logging::init(logging::level_for_verbosity(config.log_level, verbose));

    let result = match matches.subcommand() {
        Some(("upload", sub_matches)) => match sub_matches.get_one::<PathBuf>("file") {
            Some(path) => upload(&config, path).await,
            None => Err(SqueezeError::invalid_parameter("file", "No file given")),
        },
        Some(("check", sub_matches)) => {
            let paths: Vec<PathBuf> = sub_matches
                .get_many::<PathBuf>("files")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            check(&paths).await
        }
        _ => {
            eprintln!("No subcommand provided. Use --help for usage information.");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn load_config(matches: &clap::ArgMatches) -> Result<ClientConfig, SqueezeError> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };

    if let Some(endpoint) = matches.get_one::<String>("endpoint") {
        config = config.endpoint(endpoint.as_str());
    }

    config.validate()?;
    Ok(config)
}

async fn upload(config: &ClientConfig, path: &PathBuf) -> Result<bool, SqueezeError> {
    let file = FileUpload::from_path(path).await?;
    let transport = HttpTransport::new()?;
    let mut controller = UploadController::new(TerminalView::stdout(config.endpoint.as_str()));

    let outcome = upload_file(&mut controller, &transport, config, file).await?;
    if let Some(error) = &outcome.error {
        log::error!("{}", error);
    }

    Ok(outcome.is_complete())
}

async fn check(paths: &[PathBuf]) -> Result<bool, SqueezeError> {
    let mut selection = FileSelection::new();

    for path in paths {
        let descriptor = FileDescriptor::from_path(path).await?;
        let accepted = squeeze_upload::is_supported(descriptor.mime_type.as_str());
        println!(
            "{}: {} ({}) {}",
            descriptor.name,
            descriptor.mime_type,
            descriptor.size_string(),
            if accepted { "ok" } else { "unsupported" }
        );
        selection = selection.with_file(descriptor);
    }

    let valid = selection.is_valid();
    println!(
        "Selection {}",
        if valid { "can be uploaded" } else { "cannot be uploaded" }
    );
    Ok(valid)
}
