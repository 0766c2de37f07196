//! Browser entry point. Built with `--features csr` (e.g. by `trunk`).

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            leptos::logging::console_warn(&format!("console logger not installed: {e}"));
        }
        leptos::mount::mount_to_body(pdu_console::app::App);
    }
}
