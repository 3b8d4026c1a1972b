use std::process::ExitCode;

use promptkit_app::{bootstrap, cli, text_generation, Console};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    let client = match bootstrap::start(&args) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error running examples: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut console = Console::stdio();
    if let Err(e) = text_generation::run_all(&client, &mut console).await {
        eprintln!("Error running examples: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
