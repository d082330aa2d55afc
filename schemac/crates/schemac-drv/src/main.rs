use std::process::ExitCode;

fn main() -> ExitCode {
    match schemac_drv::main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}
