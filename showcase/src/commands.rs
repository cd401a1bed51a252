use crate::CLAP_STYLING;
use clap::{arg, command};

fn config_arg() -> clap::Arg {
    arg!(-c --"config" <PATH>)
        .required(false)
        .help("Site configuration file (default: the bundled portfolio)")
        .value_parser(clap::value_parser!(std::path::PathBuf))
}

fn threads_arg() -> clap::Arg {
    arg!(-t --"threads" <NUM_WORKERS>)
        .required(false)
        .help("How many preview requests may be in flight at once")
        .value_parser(clap::value_parser!(usize))
        .default_value("8")
}

fn timeout_arg() -> clap::Arg {
    arg!(--"timeout" <SECONDS>)
        .required(false)
        .help("Per-request timeout in seconds")
        .value_parser(clap::value_parser!(u64))
        .default_value("15")
}

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("showcase")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("showcase")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" ... "Increase log verbosity (-v info, -vv debug)")
                .required(false)
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("init")
                .about("Writes the bundled site configuration to your filesystem")
                .arg(
                    arg!([PATH])
                        .required(false)
                        .help("Directory to store site.json in")
                        .default_value("~/.config/showcase/"),
                )
                .arg(
                    arg!(-f --"force")
                        .help("Overwrite an existing site.json without asking")
                        .required(false),
                ),
        )
        .subcommand(
            command!("render")
                .about("Render the portfolio page")
                .arg(config_arg())
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the page to a file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: html, json")
                        .value_parser(["html", "json"])
                        .default_value("html"),
                )
                .arg(
                    arg!(--"probe")
                        .required(false)
                        .help("Request every preview first and render failures as placeholders")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(threads_arg())
                .arg(timeout_arg()),
        )
        .subcommand(
            command!("link")
                .about("Show how a single link is normalized and previewed")
                .arg(arg!(<URL>).help("Link as written in the site configuration"))
                .arg(config_arg()),
        )
        .subcommand(
            command!("probe")
                .about("Request every preview image and report which would fall back")
                .arg(config_arg())
                .arg(threads_arg())
                .arg(timeout_arg()),
        )
}
