use std::process::ExitCode;

fn main() -> ExitCode {
    guibase::run(guibase::Options::default())
}
