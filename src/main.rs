use std::process::ExitCode;

fn main() -> ExitCode {
    cdecl_driver::main()
}
