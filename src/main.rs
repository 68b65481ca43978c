use std::process::ExitCode;

fn main() -> ExitCode {
    heroku_certs_lib::run()
}
