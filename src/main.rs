#[cfg(any(target_arch = "wasm32", test))]
mod contact;
#[cfg(any(target_arch = "wasm32", test))]
mod content;
#[cfg(any(target_arch = "wasm32", test))]
mod theme;
#[cfg(any(target_arch = "wasm32", test))]
mod viewport;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod backend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    // `trunk serve` covers local development; this binary serves a built `dist/`.
    match backend::run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
