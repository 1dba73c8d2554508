use std::process::ExitCode;

use tarikh_pdf::types::Config;

fn main() -> ExitCode {
    env_logger::init();

    match tarikh_pdf::build(&Config::default()) {
        Ok(output) => {
            println!("PDF با موفقیت ساخته شد:");
            println!("{}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
