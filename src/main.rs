use clap::Parser;
use std::io;
use std::path::PathBuf;

use vshell::{mount, Session, Shell};

#[derive(Parser, Debug)]
#[command(name = "vshell")]
#[command(about = "A minimal shell emulator over a mounted virtual filesystem")]
#[command(version)]
struct Cli {
    /// Username shown in the prompt
    username: String,

    /// Hostname shown in the prompt
    hostname: String,

    /// Filesystem image (tar, optionally gzip-compressed)
    fs_image: PathBuf,

    /// Startup script, one command per line
    startup_script: PathBuf,
}

/// Wrong argument count exits 1, like a missing image file; `--help`
/// and `--version` are not errors.
fn parse_exit_code(e: &clap::Error) -> i32 {
    use clap::error::ErrorKind;
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(&e));
        }
    };

    if !cli.fs_image.exists() {
        eprintln!("Error: image file {} not found.", cli.fs_image.display());
        std::process::exit(1);
    }

    let mount_root = std::env::temp_dir().join("vshell").join("vfs");
    if let Err(e) = mount(&cli.fs_image, &mount_root) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let session = Session::new(&cli.username, &cli.hostname, mount_root);
    let mut shell = Shell::new(session);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();

    let code = match shell.run(Some(&cli.startup_script), &mut input, &mut out, &mut err) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("vshell: {}", e);
            1
        }
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_and_version_exit_zero() {
        let e = Cli::try_parse_from(["vshell", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&e), 0);
        let e = Cli::try_parse_from(["vshell", "--version"]).unwrap_err();
        assert_eq!(parse_exit_code(&e), 0);
    }

    #[test]
    fn test_wrong_argument_count_exits_one() {
        let e = Cli::try_parse_from(["vshell", "user", "host"]).unwrap_err();
        assert_eq!(parse_exit_code(&e), 1);
    }

    #[test]
    fn test_four_positional_arguments_parse() {
        let cli = Cli::try_parse_from(["vshell", "u", "h", "fs.tar", "start.sh"]).unwrap();
        assert_eq!(cli.username, "u");
        assert_eq!(cli.startup_script, PathBuf::from("start.sh"));
    }
}
