use std::process::ExitCode;

use promptkit_app::{bootstrap, chatbot, cli, Console};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    let client = match bootstrap::start(&args) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut console = Console::stdio();
    if let Err(e) = chatbot::run_menu(&client, &mut console).await {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
