//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `suggest_core` linkage without the Flutter/FFI runtime.
//! - Render a saved address service response the way the dropdown would.
//!
//! Usage: `suggest_cli [response.json] [typed query]`

use std::process::ExitCode;
use suggest_core::{
    AddressData, AddressSuggestions, SuggestConfig, SuggestionHooks, SuggestionResponse,
};

fn main() -> ExitCode {
    println!("suggest_core ping={}", suggest_core::ping());
    println!("suggest_core version={}", suggest_core::core_version());

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        return ExitCode::SUCCESS;
    };
    let typed = args.next().unwrap_or_default();

    match render(&path, &typed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("suggest_cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn render(path: &str, typed: &str) -> Result<(), String> {
    let raw = std::fs::read_to_string(path).map_err(|err| format!("read `{path}`: {err}"))?;
    let response =
        SuggestionResponse::<AddressData>::from_json(&raw).map_err(|err| err.to_string())?;
    let controller =
        AddressSuggestions::from_config(&SuggestConfig::default()).map_err(|err| err.to_string())?;

    for suggestion in controller.transform_result(&response).suggestions {
        println!("display={}", controller.format_result(&suggestion, typed));
        if let Some(address) = &suggestion.data {
            println!("selected={}", controller.format_selected(address));
        }
    }
    Ok(())
}
