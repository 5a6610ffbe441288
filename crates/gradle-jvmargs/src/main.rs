use gradle_jvmargs_cli::UserCancelled;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) =
        gradle_jvmargs_cli::main(std::env::args().collect::<Vec<String>>().as_slice()).await
    {
        if e.downcast_ref::<UserCancelled>().is_some() {
            log::debug!("cancelled by user");
            process::exit(130);
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
