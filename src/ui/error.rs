use apidefaults::DefaultsError;

pub fn format_error(err: &anyhow::Error) -> String {
    let mut message = format!("[ERROR] {}\n", err);
    for cause in err.chain().skip(1) {
        message.push_str(&format!("  caused by: {}\n", cause));
    }

    if let Some(DefaultsError::UnknownKind { .. }) = err.downcast_ref::<DefaultsError>() {
        message.push_str("  run 'apidefaults kinds' to list supported kinds\n");
    }
    message
}

pub fn print_error(err: &anyhow::Error) {
    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        println!("::error title=apidefaults::{}", err);
    }

    eprint!("{}", format_error(err));
}
